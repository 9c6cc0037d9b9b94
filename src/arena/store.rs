//! Concurrent deduplicating map from packed position to node index.

use std::collections::hash_map::Entry;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHasher};

use crate::arena::NodeIndex;
use crate::pack::PackedBoard;

const SHARD_COUNT: usize = 256;

/// Sharded map assigning a dense index to every distinct packed position.
///
/// Insertion locks a single shard; the index counter is bumped under that
/// shard's lock, so a new key always pairs with a fresh index and the
/// final counter equals the number of stored keys. Indices start at 0 and
/// never change: the map is a bijection onto `[0, len)`.
pub struct PositionStore {
    shards: Vec<Mutex<FxHashMap<PackedBoard, NodeIndex>>>,
    next_index: AtomicU32,
}

impl PositionStore {
    pub fn new() -> Self {
        Self {
            shards: (0..SHARD_COUNT)
                .map(|_| Mutex::new(FxHashMap::default()))
                .collect(),
            next_index: AtomicU32::new(0),
        }
    }

    fn shard_of(&self, key: &PackedBoard) -> usize {
        let mut hasher = FxHasher::default();
        key.hash(&mut hasher);
        // Shard selection uses the top bits; the shard map keeps the rest.
        (hasher.finish() >> 56) as usize & (SHARD_COUNT - 1)
    }

    /// Insert `key` unless present. Returns its index and whether this
    /// call inserted it.
    pub fn insert_if_absent(&self, key: PackedBoard) -> (NodeIndex, bool) {
        let mut shard = self.shards[self.shard_of(&key)].lock();
        match shard.entry(key) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let index = self.next_index.fetch_add(1, Ordering::Relaxed);
                entry.insert(index);
                (index, true)
            }
        }
    }

    pub fn get(&self, key: &PackedBoard) -> Option<NodeIndex> {
        self.shards[self.shard_of(key)].lock().get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.next_index.load(Ordering::Relaxed) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every `(key, index)` pair. Intended for the single-threaded
    /// gaps between phases; shards are locked one at a time.
    pub fn for_each(&self, mut f: impl FnMut(&PackedBoard, NodeIndex)) {
        for shard in &self.shards {
            for (key, &index) in shard.lock().iter() {
                f(key, index);
            }
        }
    }
}

impl Default for PositionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(tag: u8) -> PackedBoard {
        let mut bytes = [0u8; 24];
        bytes[0] = tag;
        PackedBoard(bytes)
    }

    #[test]
    fn reinsertion_returns_the_original_index() {
        let store = PositionStore::new();
        let (a, new_a) = store.insert_if_absent(key(1));
        let (b, new_b) = store.insert_if_absent(key(2));
        let (a2, new_a2) = store.insert_if_absent(key(1));
        assert!(new_a && new_b && !new_a2);
        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&key(2)), Some(b));
        assert_eq!(store.get(&key(3)), None);
    }

    #[test]
    fn indices_are_a_bijection_onto_the_index_range() {
        let store = PositionStore::new();
        for tag in 0..100u8 {
            store.insert_if_absent(key(tag));
        }
        let mut seen = vec![false; store.len()];
        store.for_each(|_, index| {
            assert!(!seen[index as usize]);
            seen[index as usize] = true;
        });
        assert!(seen.iter().all(|&s| s));
    }
}
