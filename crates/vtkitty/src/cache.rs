//! A minimal bounded LRU map for shortcut parse results.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Bounded map with least-recently-used eviction.
///
/// Entries carry a recency stamp from a monotonic clock; eviction scans
/// for the smallest stamp. That is O(n), which is fine at the small
/// capacities this crate uses. Correctness never depends on an entry
/// being present.
#[derive(Debug)]
pub(crate) struct LruCache<K, V> {
    map: HashMap<K, (V, u64)>,
    capacity: usize,
    clock: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    pub(crate) fn new(capacity: usize) -> LruCache<K, V> {
        let capacity = capacity.max(1);
        LruCache {
            map: HashMap::with_capacity(capacity),
            capacity,
            clock: 0,
        }
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.clock += 1;
        let clock = self.clock;
        self.map.get_mut(key).map(|entry| {
            entry.1 = clock;
            entry.0.clone()
        })
    }

    pub(crate) fn insert(&mut self, key: K, value: V) {
        if self.map.len() >= self.capacity && !self.map.contains_key(&key) {
            let oldest = self
                .map
                .iter()
                .min_by_key(|(_, (_, stamp))| *stamp)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                self.map.remove(&oldest);
            }
        }
        self.clock += 1;
        self.map.insert(key, (value, self.clock));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
