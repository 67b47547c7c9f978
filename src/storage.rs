//! Pluggable position maps for the indexed priority queue
//!
//! The queue keeps a value → slot map in lock-step with every heap mutation.
//! This module abstracts over how that map is stored:
//!
//! - [`DensePositions`]: a direct `Vec` indexed by the value itself, for dense
//!   integer values such as node indices (the default)
//! - [`HashPositions`]: an `FxHashMap` for arbitrary hashable values
//!
//! # Design
//!
//! Both backends implement [`PositionMap`]. Slots are 1-based; a value that is
//! not queued simply has no entry.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Trait for value → slot lookups used by the queue
pub trait PositionMap<V>: Default {
    /// Creates an empty map sized for roughly `capacity` values
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the slot currently holding `value`, if it is queued
    fn get(&self, value: &V) -> Option<usize>;

    /// Records that `value` now lives in `slot`, inserting or overwriting
    fn set(&mut self, value: &V, slot: usize);

    /// Forgets `value`, returning the slot it was recorded at
    fn remove(&mut self, value: &V) -> Option<usize>;

    /// Number of values with a recorded slot
    fn len(&self) -> usize;

    /// Returns true if no value has a recorded slot
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every value
    fn clear(&mut self);
}

// ============================================================================
// DensePositions - direct array for integer values
// ============================================================================

const NOT_QUEUED: usize = usize::MAX;

/// Position map backed by a `Vec` indexed by value.
///
/// The table grows on demand to cover the largest value ever recorded and
/// never shrinks, so lookups are a single bounds-checked load.
#[derive(Debug, Clone, Default)]
pub struct DensePositions {
    slots: Vec<usize>,
    len: usize,
}

impl PositionMap<usize> for DensePositions {
    fn with_capacity(capacity: usize) -> Self {
        DensePositions {
            slots: vec![NOT_QUEUED; capacity],
            len: 0,
        }
    }

    fn get(&self, value: &usize) -> Option<usize> {
        match self.slots.get(*value) {
            Some(&slot) if slot != NOT_QUEUED => Some(slot),
            _ => None,
        }
    }

    fn set(&mut self, value: &usize, slot: usize) {
        let value = *value;
        if value >= self.slots.len() {
            self.slots.resize(value + 1, NOT_QUEUED);
        }
        if self.slots[value] == NOT_QUEUED {
            self.len += 1;
        }
        self.slots[value] = slot;
    }

    fn remove(&mut self, value: &usize) -> Option<usize> {
        let entry = self.slots.get_mut(*value)?;
        if *entry == NOT_QUEUED {
            return None;
        }
        self.len -= 1;
        Some(std::mem::replace(entry, NOT_QUEUED))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.slots.fill(NOT_QUEUED);
        self.len = 0;
    }
}

// ============================================================================
// HashPositions - hash map for arbitrary values
// ============================================================================

/// Position map backed by an `FxHashMap`, for values that are not dense indices
#[derive(Debug, Clone)]
pub struct HashPositions<V> {
    slots: FxHashMap<V, usize>,
}

impl<V> Default for HashPositions<V> {
    fn default() -> Self {
        HashPositions {
            slots: FxHashMap::default(),
        }
    }
}

impl<V: Hash + Eq + Clone> PositionMap<V> for HashPositions<V> {
    fn with_capacity(capacity: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(capacity);
        HashPositions { slots }
    }

    fn get(&self, value: &V) -> Option<usize> {
        self.slots.get(value).copied()
    }

    fn set(&mut self, value: &V, slot: usize) {
        // Swaps during sifting only move existing values; avoid the clone there.
        if let Some(entry) = self.slots.get_mut(value) {
            *entry = slot;
        } else {
            self.slots.insert(value.clone(), slot);
        }
    }

    fn remove(&mut self, value: &V) -> Option<usize> {
        self.slots.remove(value)
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<V, M: PositionMap<V>>(a: V, b: V) {
        let mut map = M::with_capacity(2);
        assert!(map.is_empty());
        map.set(&a, 1);
        map.set(&b, 2);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&a), Some(1));

        map.set(&a, 2);
        map.set(&b, 1);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&a), Some(2));
        assert_eq!(map.get(&b), Some(1));

        assert_eq!(map.remove(&a), Some(2));
        assert_eq!(map.remove(&a), None);
        assert_eq!(map.get(&a), None);
        assert_eq!(map.len(), 1);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(&b), None);
    }

    #[test]
    fn test_dense_positions() {
        exercise::<usize, DensePositions>(0, 7);
    }

    #[test]
    fn test_hash_positions() {
        exercise::<&str, HashPositions<&str>>("a", "b");
    }

    #[test]
    fn test_dense_grows_past_capacity() {
        let mut map = DensePositions::with_capacity(1);
        map.set(&100, 3);
        assert_eq!(map.get(&100), Some(3));
        assert_eq!(map.get(&50), None);
        assert_eq!(map.remove(&1000), None);
    }
}
