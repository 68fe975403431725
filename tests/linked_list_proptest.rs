use proptest::prelude::*;
use std::collections::VecDeque;
use trellis::LinkedList;

#[derive(Debug, Clone)]
enum Operation {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Nth(usize),
    RemoveItem(i32),
}

proptest! {
    #[test]
    fn test_list_matches_vec_deque(ops in proptest::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(Operation::PushFront),
            any::<i32>().prop_map(Operation::PushBack),
            Just(Operation::PopFront),
            Just(Operation::PopBack),
            (0usize..40).prop_map(Operation::Nth),
            (0i32..16).prop_map(Operation::RemoveItem),
        ],
        1..200
    )) {
        let mut deque: VecDeque<i32> = VecDeque::new();
        let mut list: LinkedList<i32> = LinkedList::new();

        for op in ops {
            match op {
                Operation::PushFront(v) => {
                    deque.push_front(v);
                    list.push_front(v);
                }
                Operation::PushBack(v) => {
                    deque.push_back(v);
                    list.push_back(v);
                }
                Operation::PopFront => {
                    assert_eq!(list.pop_front(), deque.pop_front());
                }
                Operation::PopBack => {
                    assert_eq!(list.pop_back(), deque.pop_back());
                }
                Operation::Nth(i) => {
                    assert_eq!(list.nth(i), deque.get(i));
                }
                Operation::RemoveItem(v) => {
                    let model = deque
                        .iter()
                        .position(|&x| x == v)
                        .map(|i| deque.remove(i).unwrap());
                    assert_eq!(list.remove_item(&v), model);
                }
            }
            assert_eq!(list.len(), deque.len());
        }

        // Final consistency in both directions.
        let forward: Vec<i32> = list.iter().copied().collect();
        assert_eq!(forward, deque.iter().copied().collect::<Vec<_>>());
        let backward: Vec<i32> = list.iter().rev().copied().collect();
        assert_eq!(
            backward,
            deque.iter().rev().copied().collect::<Vec<_>>()
        );
    }
}
