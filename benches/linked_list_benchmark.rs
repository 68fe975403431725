use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::LinkedList as StdLinkedList;
use trellis::LinkedList;

fn bench_linked_list_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_iter");

    group.bench_function("std_linked_list_iter", |b| {
        let mut list = StdLinkedList::new();
        for i in 0..1000 {
            list.push_back(i);
        }
        b.iter(|| {
            let mut sum = 0;
            for x in &list {
                sum += *x;
            }
            black_box(sum);
        });
    });

    group.bench_function("trellis_linked_list_iter", |b| {
        let mut list = LinkedList::new();
        for i in 0..1000 {
            list.push_back(i);
        }
        b.iter(|| {
            let mut sum = 0;
            for x in list.iter() {
                sum += *x;
            }
            black_box(sum);
        });
    });

    group.finish();
}

fn bench_linked_list_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_push_pop");

    group.bench_function("std_linked_list_push_pop", |b| {
        b.iter(|| {
            let mut list = StdLinkedList::new();
            for i in 0..1000 {
                list.push_back(i);
            }
            while list.pop_front().is_some() {}
        });
    });

    group.bench_function("trellis_linked_list_push_pop", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..1000 {
                list.push_back(i);
            }
            while list.pop_front().is_some() {}
        });
    });

    group.finish();
}

fn bench_linked_list_mid_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_mid_removal");

    // Handle-based removal has no std counterpart; measure it alone.
    group.bench_function("trellis_remove_by_handle", |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            let handles: Vec<_> = (0..1000).map(|i| list.push_back(i)).collect();
            for id in handles {
                list.remove(id).unwrap();
            }
            black_box(list.len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_linked_list_iter,
    bench_linked_list_push_pop,
    bench_linked_list_mid_removal
);
criterion_main!(benches);
