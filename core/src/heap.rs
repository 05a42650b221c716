use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A key and the cost it was inserted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry<K, C> {
    pub key: K,
    pub cost: C,
}

/// Binary min-heap that tracks the slot of every member key.
///
/// Slots live in a side table owned by the heap, so any member can be removed
/// in O(log n) without a linear scan. A key may be a member at most once.
#[derive(Debug)]
pub struct IndexedMinHeap<K, C> {
    data: Vec<HeapEntry<K, C>>,
    positions: FxHashMap<K, usize>,
}

impl<K, C> IndexedMinHeap<K, C>
where
    K: Copy + Eq + Hash,
    C: PartialOrd + Copy,
{
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Current slot of `key`, if it is a member.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.positions.get(key).copied()
    }

    pub fn peek_min(&self) -> Option<&HeapEntry<K, C>> {
        self.data.first()
    }

    /// Backing array in slot order.
    pub fn entries(&self) -> &[HeapEntry<K, C>] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Panics if `key` is already a member.
    pub fn insert(&mut self, key: K, cost: C) {
        let slot = self.data.len();
        let previous = self.positions.insert(key, slot);
        assert!(previous.is_none(), "key is already a member of the heap");

        self.data.push(HeapEntry { key, cost });
        self.sift_up(slot);
    }

    pub fn pop_min(&mut self) -> Option<HeapEntry<K, C>> {
        if self.data.is_empty() {
            return None;
        }

        let minimum = self.data.swap_remove(0);
        self.positions.remove(&minimum.key);

        if let Some(moved) = self.data.first() {
            self.positions.insert(moved.key, 0);
            self.sift_down(0);
        }

        Some(minimum)
    }

    /// Removes a member by key. Panics if `key` is not in the heap.
    pub fn remove(&mut self, key: &K) -> HeapEntry<K, C> {
        let Some(&slot) = self.positions.get(key) else {
            panic!("key is not a member of the heap");
        };
        self.remove_at(slot)
    }

    /// Removes whatever entry occupies `index`. Panics if out of range.
    pub fn remove_at(&mut self, index: usize) -> HeapEntry<K, C> {
        assert!(
            index < self.data.len(),
            "heap slot {} out of range for {} entries",
            index,
            self.data.len()
        );

        let removed = self.data.swap_remove(index);
        self.positions.remove(&removed.key);

        // The entry pulled in from the end may belong above or below this slot.
        if let Some(moved) = self.data.get(index) {
            self.positions.insert(moved.key, index);
            self.sift_down(index);
            self.sift_up(index);
        }

        removed
    }

    fn sift_up(&mut self, mut bubble: usize) {
        while bubble > 0 {
            let parent = (bubble - 1) / 2;
            if self.data[bubble].cost < self.data[parent].cost {
                self.swap_slots(bubble, parent);
                bubble = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut bubble: usize) {
        let count = self.data.len();
        loop {
            let left_child = bubble * 2 + 1;
            if left_child >= count {
                break;
            }

            let right_child = left_child + 1;
            let mut min_child = left_child;
            if right_child < count && self.data[right_child].cost < self.data[left_child].cost {
                min_child = right_child;
            }

            if self.data[min_child].cost < self.data[bubble].cost {
                self.swap_slots(bubble, min_child);
                bubble = min_child;
            } else {
                break;
            }
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions.insert(self.data[a].key, a);
        self.positions.insert(self.data[b].key, b);
    }
}

impl<K, C> Default for IndexedMinHeap<K, C>
where
    K: Copy + Eq + Hash,
    C: PartialOrd + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
