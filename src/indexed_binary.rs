//! Indexed Binary Heap implementation
//!
//! A binary heap whose items can have their priority changed in place. Next to
//! the heap array it keeps a value → slot map that is updated on every swap, so
//! `update_priority` finds its item in O(1) and restores heap order in
//! O(log n) without scanning.
//!
//! The heap is min- or max-ordered, fixed at construction by [`HeapOrder`].
//! Slots are 1-based: the parent of slot `i` is `i / 2` and its children are
//! `2i` and `2i + 1`.
//!
//! Ties are broken by heap structure alone. There is no secondary key, so two
//! queues fed the same operation sequence always agree, but equal priorities
//! do not come out in insertion order.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity         |
//! |-------------------|--------------------|
//! | `enqueue`         | O(log n) amortized |
//! | `dequeue`         | O(log n)           |
//! | `update_priority` | O(log n)           |
//! | `priority_of`     | O(1)               |
//! | `peek_*`          | O(1)               |
//!
//! # Example
//!
//! ```rust
//! use priority_traversal::indexed_binary::{HeapOrder, NodeQueue};
//!
//! let mut queue = NodeQueue::new(HeapOrder::Min);
//! queue.enqueue(0, 3.0);
//! queue.enqueue(1, 1.0);
//! queue.enqueue(2, 2.0);
//!
//! queue.update_priority(&0, 0.5);
//! assert_eq!(queue.peek_top_value(), Some(&0));
//! assert_eq!(queue.dequeue(), Some(0));
//! assert_eq!(queue.dequeue(), Some(1));
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), None);
//! ```

use crate::storage::{DensePositions, HashPositions, PositionMap};
use crate::traits::NodeIndex;
use log::debug;

/// Capacity used when none is given, matching [`QueueConfig::default`]
pub const DEFAULT_CAPACITY: usize = 100;

/// Which end of the priority range is served first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapOrder {
    /// Smallest priority first
    #[default]
    Min,
    /// Largest priority first
    Max,
}

impl HeapOrder {
    /// Returns true if `a` must sit strictly above `b` in the heap.
    #[inline]
    pub fn prefers<P: PartialOrd>(self, a: &P, b: &P) -> bool {
        match self {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }
}

/// Construction settings for an [`IndexedPriorityQueue`].
///
/// # Example
///
/// ```rust
/// use priority_traversal::indexed_binary::{HeapOrder, KeyedQueue, QueueConfig};
///
/// let config = QueueConfig::max().with_capacity(8);
/// let queue: KeyedQueue<&str, f64> = KeyedQueue::from_config(config);
/// assert_eq!(queue.order(), HeapOrder::Max);
/// assert_eq!(queue.capacity(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    /// Heap order, fixed for the queue's lifetime
    pub order: HeapOrder,
    /// Number of items the queue holds before its first growth
    pub capacity: usize,
}

impl QueueConfig {
    /// A min-heap with the default capacity
    pub fn min() -> Self {
        QueueConfig {
            order: HeapOrder::Min,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// A max-heap with the default capacity
    pub fn max() -> Self {
        QueueConfig {
            order: HeapOrder::Max,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the initial capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the heap order.
    pub fn with_order(mut self, order: HeapOrder) -> Self {
        self.order = order;
        self
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::min()
    }
}

/// A value paired with its current priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapItem<V, P> {
    /// The item's identity; unique while queued
    pub value: V,
    /// The item's current priority
    pub priority: P,
}

/// A binary heap with O(1) value lookup and in-place priority updates.
///
/// `M` selects the position map: [`DensePositions`] for `usize` values (see
/// [`NodeQueue`]) or [`HashPositions`] for anything hashable (see
/// [`KeyedQueue`]).
///
/// The queue is meant to be owned by a single traversal; it does no locking.
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<V, P, M = DensePositions> {
    /// Slot `i` (1-based) is stored at `items[i - 1]`
    items: Vec<HeapItem<V, P>>,
    /// Items held before the next doubling
    capacity: usize,
    positions: M,
    order: HeapOrder,
}

/// Queue over dense node indices, with a direct-array position map
pub type NodeQueue<P> = IndexedPriorityQueue<NodeIndex, P, DensePositions>;

/// Queue over arbitrary hashable values, with a hash-map position map
pub type KeyedQueue<V, P> = IndexedPriorityQueue<V, P, HashPositions<V>>;

impl<V, P, M> IndexedPriorityQueue<V, P, M>
where
    P: PartialOrd + Copy,
    M: PositionMap<V>,
{
    /// Creates an empty queue with the given order and the default capacity.
    pub fn new(order: HeapOrder) -> Self {
        Self::from_config(QueueConfig::default().with_order(order))
    }

    /// Creates an empty queue from explicit settings.
    pub fn from_config(config: QueueConfig) -> Self {
        // A zero capacity would never double.
        let capacity = config.capacity.max(1);
        IndexedPriorityQueue {
            items: Vec::with_capacity(capacity),
            capacity,
            positions: M::with_capacity(capacity),
            order: config.order,
        }
    }

    /// Returns the heap order chosen at construction
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Returns the number of items held before the next growth
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of queued items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if `value` is currently queued
    pub fn contains(&self, value: &V) -> bool {
        self.positions.get(value).is_some()
    }

    /// Alias for [`contains`](Self::contains)
    pub fn in_queue(&self, value: &V) -> bool {
        self.contains(value)
    }

    /// Returns the current priority of `value`, or `None` if it is not queued
    pub fn priority_of(&self, value: &V) -> Option<P> {
        self.positions
            .get(value)
            .map(|slot| self.items[slot - 1].priority)
    }

    /// Returns the top item without removing it
    pub fn peek(&self) -> Option<&HeapItem<V, P>> {
        self.items.first()
    }

    /// Returns the top item's value without removing it
    pub fn peek_top_value(&self) -> Option<&V> {
        self.peek().map(|item| &item.value)
    }

    /// Returns the top item's priority without removing it
    pub fn peek_top_priority(&self) -> Option<P> {
        self.peek().map(|item| item.priority)
    }

    /// Iterates over queued items in slot order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = &HeapItem<V, P>> + '_ {
        self.items.iter()
    }

    /// Inserts `value` with `priority`.
    ///
    /// If `value` is already queued this behaves exactly like
    /// [`update_priority`](Self::update_priority), so callers may re-insert
    /// without checking membership first.
    pub fn enqueue(&mut self, value: V, priority: P) {
        if let Some(slot) = self.positions.get(&value) {
            self.set_priority(slot, priority);
            return;
        }

        if self.items.len() == self.capacity {
            self.grow();
        }

        self.items.push(HeapItem { value, priority });
        let slot = self.items.len();
        self.positions.set(&self.items[slot - 1].value, slot);
        self.sift_up(slot);
    }

    /// Removes the top item and returns its value, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<V> {
        self.dequeue_item().map(|item| item.value)
    }

    /// Removes the top item and returns it together with its priority.
    pub fn dequeue_item(&mut self) -> Option<HeapItem<V, P>> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop()?;
        self.positions.remove(&top.value);

        if !self.items.is_empty() {
            self.positions.set(&self.items[0].value, 1);
            self.sift_down(1);
        }

        Some(top)
    }

    /// Changes the priority of a queued `value`; does nothing if it is absent.
    ///
    /// Works for both directions: a better priority sifts the item up, anything
    /// else sifts it down.
    pub fn update_priority(&mut self, value: &V, priority: P) {
        if let Some(slot) = self.positions.get(value) {
            self.set_priority(slot, priority);
        }
    }

    /// Removes every item; capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }

    /// Checks the heap order and position map invariants.
    ///
    /// Intended for tests; not called by any queue operation. The first
    /// violation found is logged at debug level.
    pub fn is_valid(&self) -> bool {
        let count = self.items.len();
        if self.positions.len() != count {
            debug!(
                "heap holds {} items but position map has {} entries",
                count,
                self.positions.len()
            );
            return false;
        }

        for slot in 2..=count {
            if self.out_of_order(slot / 2, slot) {
                debug!("slot {} is better ordered than its parent {}", slot, slot / 2);
                return false;
            }
        }

        // Every slot's value maps back to that slot. Together with the size
        // check this makes the map a bijection onto the occupied slots.
        for slot in 1..=count {
            let recorded = self.positions.get(&self.items[slot - 1].value);
            if recorded != Some(slot) {
                debug!("slot {} is recorded at {:?}", slot, recorded);
                return false;
            }
        }

        true
    }

    fn grow(&mut self) {
        self.capacity *= 2;
        self.items
            .reserve_exact(self.capacity.saturating_sub(self.items.len()));
    }

    fn set_priority(&mut self, slot: usize, priority: P) {
        let item = &mut self.items[slot - 1];
        let old = item.priority;
        item.priority = priority;

        if self.order.prefers(&priority, &old) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// True if `child` should be above `parent`
    #[inline]
    fn out_of_order(&self, parent: usize, child: usize) -> bool {
        self.order.prefers(
            &self.items[child - 1].priority,
            &self.items[parent - 1].priority,
        )
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a - 1, b - 1);
        self.positions.set(&self.items[a - 1].value, a);
        self.positions.set(&self.items[b - 1].value, b);
    }

    /// Move the item at `slot` up to restore heap order
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 1 {
            let parent = slot / 2;
            if self.out_of_order(parent, slot) {
                self.swap(parent, slot);
                slot = parent;
            } else {
                break;
            }
        }
    }

    /// Move the item at `slot` down to restore heap order
    fn sift_down(&mut self, mut slot: usize) {
        let count = self.items.len();
        loop {
            let mut best = slot;
            for child in [2 * slot, 2 * slot + 1] {
                if child <= count && self.out_of_order(best, child) {
                    best = child;
                }
            }

            if best == slot {
                break;
            }
            self.swap(slot, best);
            slot = best;
        }
    }
}

/// Sorts `values` by draining them through a queue.
///
/// Ascending order uses a min-heap, descending a max-heap. Duplicates are kept:
/// each input position is queued as its own item.
///
/// ```rust
/// use priority_traversal::indexed_binary::pq_sort;
///
/// assert_eq!(pq_sort(&[10, -1, 0, 5, 3, 4, -5, 20], false), vec![-5, -1, 0, 3, 4, 5, 10, 20]);
/// assert_eq!(pq_sort(&[1, 2, 3], true), vec![3, 2, 1]);
/// ```
pub fn pq_sort<P: PartialOrd + Copy>(values: &[P], descending: bool) -> Vec<P> {
    let config = if descending {
        QueueConfig::max()
    } else {
        QueueConfig::min()
    };
    let mut queue: NodeQueue<P> = NodeQueue::from_config(config.with_capacity(values.len()));

    for (index, &value) in values.iter().enumerate() {
        queue.enqueue(index, value);
    }

    let mut sorted = Vec::with_capacity(values.len());
    while let Some(item) = queue.dequeue_item() {
        sorted.push(item.priority);
    }
    sorted
}
