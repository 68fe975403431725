use proptest::prelude::*;
use std::collections::HashMap;
use trellis::HashTable;

#[derive(Debug, Clone)]
enum Operation {
    Put(u8, u16),
    Get(u8),
    Remove(u8),
}

proptest! {
    #[test]
    fn test_table_matches_std_map(ops in proptest::collection::vec(
        prop_oneof![
            (any::<u8>(), any::<u16>()).prop_map(|(k, v)| Operation::Put(k, v)),
            any::<u8>().prop_map(Operation::Get),
            any::<u8>().prop_map(Operation::Remove),
        ],
        1..300
    )) {
        let mut std_map: HashMap<u8, u16> = HashMap::new();
        // Keys for which the most recent operation was a put without a
        // later remove, in first-put order.
        let mut live_order: Vec<u8> = Vec::new();

        // Small initial capacity so longer sequences force growth.
        let mut table = HashTable::with_capacity_and_load_factor(2, 0.75);

        for op in ops {
            match op {
                Operation::Put(k, v) => {
                    let previous = std_map.insert(k, v);
                    if previous.is_none() {
                        live_order.push(k);
                    }
                    assert_eq!(table.put(k, v), previous, "put result mismatch for key {k}");
                }
                Operation::Get(k) => {
                    assert_eq!(table.get(&k), std_map.get(&k), "get mismatch for key {k}");
                }
                Operation::Remove(k) => {
                    let previous = std_map.remove(&k);
                    if previous.is_some() {
                        live_order.retain(|&x| x != k);
                    }
                    assert_eq!(table.remove(&k), previous, "remove mismatch for key {k}");
                }
            }
            assert_eq!(table.len(), std_map.len());
            assert_eq!(table.is_empty(), std_map.is_empty());
        }

        // Final contents match the model.
        for (k, v) in &std_map {
            assert_eq!(table.get(k), Some(v), "final content mismatch for key {k}");
        }

        // The key view lists live keys in first-put order, surviving any
        // number of growth rebuilds along the way.
        let keys: Vec<u8> = table.keys().iter().copied().collect();
        assert_eq!(keys, live_order);

        // Fill ratio never exceeds the configured threshold.
        prop_assert!(
            table.len() as f64 / table.bucket_count() as f64 <= table.load_factor()
        );
    }
}
