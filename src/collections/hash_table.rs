//! `HashTable` — a chained hash table with an insertion-ordered key list.
//!
//! Buckets are [`LinkedList`] chains created on first use. A master key
//! list (also a `LinkedList`) records every live key in first-insertion
//! order; each chain entry stores the [`NodeId`] of its key in that list
//! instead of a key copy, so removal deletes the key in O(1) through the
//! handle rather than re-searching.
//!
//! Growth is load-factor driven: when an insertion would push
//! `len / bucket_count` past the threshold, the bucket array grows to
//! `2n + 1` and every live entry is re-inserted through the normal `put`
//! path, preserving key order.

use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};
use core::mem;
use std::collections::hash_map::RandomState;

use super::arena::NodeId;
use super::linked_list::{LinkedList, ListView, Nodes};

const DEFAULT_BUCKETS: usize = 89;
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// A chain entry: the handle of the key in the master key list, plus the
/// value. The key itself lives only in the master list.
struct Entry<V> {
    key_node: NodeId,
    value: V,
}

/// A chained hash table generic over a pluggable hasher.
///
/// Keys need `Hash + Eq`; equal keys must hash equally. Lookup misses
/// are reported as `None`, never as errors.
///
/// ### Performance Characteristics
/// | Operation | Complexity |
/// |-----------|------------|
/// | `put` | O(1) expected, amortized over growth |
/// | `get` / `get_mut` / `contains_key` | O(1) expected |
/// | `remove` | O(1) expected |
/// | `keys` | O(1), iteration O(len) |
/// | `clear` | O(buckets) |
pub struct HashTable<K, V, S = RandomState> {
    buckets: Vec<Option<LinkedList<Entry<V>>>>,
    keys: LinkedList<K>,
    len: usize,
    load_factor: f64,
    hash_builder: S,
}

impl<K, V> HashTable<K, V, RandomState> {
    /// Creates an empty table with default capacity and load factor.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::new())
    }

    /// Creates an empty table sized for roughly `size_estimate` entries.
    pub fn with_capacity(size_estimate: usize) -> Self {
        Self::with_capacity_and_hasher(size_estimate, RandomState::new())
    }

    /// Creates an empty table sized for roughly `size_estimate` entries
    /// that grows once `len / bucket_count` exceeds `load_factor`.
    ///
    /// # Panics
    /// Panics if `load_factor` is not finite and positive.
    pub fn with_capacity_and_load_factor(size_estimate: usize, load_factor: f64) -> Self {
        Self::with_parts(size_estimate, load_factor, RandomState::new())
    }
}

impl<K, V, S> HashTable<K, V, S> {
    /// Creates an empty table with the given hasher.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates an empty table sized for roughly `size_estimate` entries
    /// with the given hasher.
    pub fn with_capacity_and_hasher(size_estimate: usize, hash_builder: S) -> Self {
        Self::with_parts(size_estimate, DEFAULT_LOAD_FACTOR, hash_builder)
    }

    fn with_parts(size_estimate: usize, load_factor: f64, hash_builder: S) -> Self {
        assert!(
            load_factor.is_finite() && load_factor > 0.0,
            "load factor must be finite and positive, got {load_factor}"
        );
        let bucket_count = if size_estimate == 0 {
            DEFAULT_BUCKETS
        } else {
            ((size_estimate as f64 / load_factor) as usize).max(1)
        };
        Self {
            buckets: empty_buckets(bucket_count),
            keys: LinkedList::new(),
            len: 0,
            load_factor,
            hash_builder,
        }
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket-array length.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the growth threshold ratio.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns a read-only view of the live keys, each exactly once, in
    /// first-insertion order. Value updates do not reorder keys.
    pub fn keys(&self) -> ListView<'_, K> {
        self.keys.as_view()
    }

    /// Counts entries stored behind another entry in their bucket chain.
    pub fn collisions(&self) -> usize {
        self.buckets
            .iter()
            .flatten()
            .map(|chain| chain.len().saturating_sub(1))
            .sum()
    }

    /// Removes every entry and resets to the default capacity.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(entries = self.len, "clearing table");

        self.buckets = empty_buckets(DEFAULT_BUCKETS);
        self.keys = LinkedList::new();
        self.len = 0;
    }
}

impl<K, V, S> HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Inserts or updates the mapping for `key`.
    ///
    /// Updating an existing key replaces the value in place and returns
    /// the previous one; the key keeps its position in [`Self::keys`].
    /// Inserting a new key first grows the table if the insertion would
    /// push the fill ratio past the load factor, then appends the key to
    /// the master list and the entry to its bucket chain.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_of(&key);
        let slot = bucket_index(hash, self.buckets.len());

        if let Some(id) = self.find_entry(slot, &key) {
            let chain = self.buckets[slot]
                .as_mut()
                .expect("table invariant: matched chain missing");
            let entry = chain
                .get_mut(id)
                .expect("table invariant: matched entry went stale");
            return Some(mem::replace(&mut entry.value, value));
        }

        if (self.len + 1) as f64 / self.buckets.len() as f64 > self.load_factor {
            self.grow();
        }
        let slot = bucket_index(hash, self.buckets.len());

        let key_node = self.keys.push_back(key);
        self.buckets[slot]
            .get_or_insert_with(LinkedList::new)
            .push_back(Entry { key_node, value });
        self.len += 1;
        None
    }

    /// Returns the value mapped to `key`, or `None`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let slot = bucket_index(self.hash_of(key), self.buckets.len());
        let id = self.find_entry(slot, key)?;
        let chain = self.buckets[slot].as_ref()?;
        chain.get(id).ok().map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value mapped to `key`, or `None`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = bucket_index(self.hash_of(key), self.buckets.len());
        let id = self.find_entry(slot, key)?;
        let chain = self.buckets[slot].as_mut()?;
        chain.get_mut(id).ok().map(|entry| &mut entry.value)
    }

    /// Returns `true` if the table maps `key` to some value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the mapping for `key`, returning its value, or `None`.
    ///
    /// The key node is deleted from the master list through the entry's
    /// stored handle; neither structure is re-searched.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let slot = bucket_index(self.hash_of(key), self.buckets.len());
        let id = self.find_entry(slot, key)?;
        let chain = self.buckets[slot].as_mut()?;
        let entry = chain
            .remove(id)
            .expect("table invariant: matched entry went stale");
        self.keys
            .remove(entry.key_node)
            .expect("table invariant: entry held a stale key handle");
        self.len -= 1;
        Some(entry.value)
    }

    /// Iterates over `(key, value)` pairs in key first-insertion order.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            table: self,
            nodes: self.keys.nodes(),
        }
    }

    fn hash_of(&self, key: &K) -> u64 {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }

    /// Scans `slot`'s chain for the entry whose master-list key equals
    /// `key`, returning its handle in the chain.
    fn find_entry(&self, slot: usize, key: &K) -> Option<NodeId> {
        let chain = self.buckets[slot].as_ref()?;
        let keys = &self.keys;
        chain
            .nodes()
            .find(|(_, entry)| keys.get(entry.key_node).ok() == Some(key))
            .map(|(id, _)| id)
    }

    /// Doubles the bucket array (to `2n + 1`) and re-inserts every live
    /// entry, walking the old master key list front to back so key order
    /// survives the rebuild.
    fn grow(&mut self) {
        let new_bucket_count = self.buckets.len() * 2 + 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            entries = self.len,
            from = self.buckets.len(),
            to = new_bucket_count,
            "growing bucket array"
        );

        let mut old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_bucket_count));
        let mut old_keys = mem::take(&mut self.keys);
        self.len = 0;

        while let Some(id) = old_keys.front() {
            let key = old_keys
                .remove(id)
                .expect("table invariant: master list front went stale");
            let slot = bucket_index(self.hash_of(&key), old_buckets.len());
            let chain = old_buckets[slot]
                .as_mut()
                .expect("table invariant: missing chain for live key");
            let entry_id = chain
                .nodes()
                .find(|(_, entry)| entry.key_node == id)
                .map(|(entry_id, _)| entry_id)
                .expect("table invariant: missing entry for live key");
            let entry = chain
                .remove(entry_id)
                .expect("table invariant: matched entry went stale");
            self.put(key, entry.value);
        }
    }
}

/// Maps a 64-bit hash code to an index in `[0, bucket_count)`.
///
/// Takes the bucket count as a parameter so the rehash path can evaluate
/// it against a bucket array that is not installed yet.
fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    (hash % bucket_count as u64) as usize
}

fn empty_buckets<T>(count: usize) -> Vec<Option<T>> {
    let mut buckets = Vec::with_capacity(count);
    buckets.resize_with(count, || None);
    buckets
}

impl<K, V> Default for HashTable<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::with_hasher(S::default());
        for (key, value) in iter {
            table.put(key, value);
        }
        table
    }
}

/// Borrowing iterator over `(key, value)` pairs in key insertion order.
///
/// Each value is found by an O(1) expected probe of the key's bucket.
pub struct Iter<'a, K, V, S> {
    table: &'a HashTable<K, V, S>,
    nodes: Nodes<'a, K>,
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, key) = self.nodes.next()?;
        let slot = bucket_index(self.table.hash_of(key), self.table.buckets.len());
        let chain = self.table.buckets[slot].as_ref()?;
        let value = chain
            .nodes()
            .find(|(_, entry)| entry.key_node == id)
            .map(|(_, entry)| &entry.value)?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.table.len))
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashTable<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
