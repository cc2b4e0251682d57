use crate::types::EntryId;

/// A single heap element. `position` is the index of the entry inside the heap array
/// and is rewritten by every swap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K, P> {
    pub priority: P,
    pub key: K,
    pub position: usize,
}

/// result of taking an entry out of the heap
#[derive(Debug)]
pub struct Removal<K, P> {
    pub entry: Entry<K, P>,
    /// handle of the entry that was moved into the freed arena slot, if any.
    /// whoever stores handles for that entry has to point them at the freed slot.
    pub relocated: Option<EntryId>,
}

/// Array backed binary min heap over an entry arena.
///
/// `entries` owns all entries, `heap` stores their handles in level order
/// (parent of i is (i-1)/2, children are 2i+1 and 2i+2). Handles stay stable
/// while an entry is alive, only its position changes.
#[derive(Clone, Debug)]
pub struct MinBinaryHeap<K, P: Ord> {
    heap: Vec<EntryId>,
    entries: Vec<Entry<K, P>>,
}

#[inline]
pub fn parent_index(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub fn left_child_index(index: usize) -> usize {
    2 * index + 1
}

#[inline]
pub fn right_child_index(index: usize) -> usize {
    2 * index + 2
}

impl<K, P: Ord> Default for MinBinaryHeap<K, P> {

    fn default() -> Self {
        MinBinaryHeap::new()
    }
}

impl<K, P: Ord> MinBinaryHeap<K, P> {

    pub fn new() -> Self {
        MinBinaryHeap {
            heap: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinBinaryHeap {
            heap: Vec::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// panics if `entry_id` does not belong to a live entry
    pub fn entry(&self, entry_id: EntryId) -> &Entry<K, P> {
        &self.entries[entry_id]
    }

    pub fn get(&self, entry_id: EntryId) -> Option<&Entry<K, P>> {
        self.entries.get(entry_id)
    }

    /// entry with the smallest priority
    pub fn peek(&self) -> Option<&Entry<K, P>> {
        self.heap.first().map(|entry_id| &self.entries[*entry_id])
    }

    /// entries in arena order, which is unrelated to priority order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, P>> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.entries.clear();
    }

    /// appends a new leaf and lets it climb to its place
    pub fn push(&mut self, key: K, priority: P) -> EntryId {
        let entry_id = self.entries.len();
        let position = self.heap.len();

        self.entries.push(Entry { priority, key, position });
        self.heap.push(entry_id);
        self.sift_up(position);

        entry_id
    }

    /// removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<Removal<K, P>> {
        if self.is_empty() {
            return None;
        }

        // move the last leaf into the root slot and restore downwards
        let last = self.len() - 1;
        self.swap(0, last);
        let entry_id = self.heap.pop()?;

        if !self.is_empty() {
            self.sift_down(0);
        }

        Some(self.release(entry_id))
    }

    /// Removes an arbitrary entry.
    ///
    /// The entry is swapped with its parent until it reaches the root, then popped.
    /// Every intermediate state is a valid heap: the parent moving down into the old
    /// slot is no larger than the children it inherits.
    pub fn remove(&mut self, entry_id: EntryId) -> Option<Removal<K, P>> {
        let mut current_index = self.entries.get(entry_id)?.position;

        while 0 < current_index {
            let parent = parent_index(current_index);
            self.swap(current_index, parent);
            current_index = parent;
        }

        self.pop()
    }

    /// checks heap order and that every entry knows its own position
    pub fn is_valid(&self) -> bool {
        if self.heap.len() != self.entries.len() {
            return false;
        }

        self.heap.iter().enumerate().all(|(position, entry_id)| {
            match self.entries.get(*entry_id) {
                Some(entry) => entry.position == position
                    && (position == 0 || *self.priority_at(parent_index(position)) <= entry.priority),
                None => false,
            }
        })
    }

    fn release(&mut self, entry_id: EntryId) -> Removal<K, P> {
        let entry = self.entries.swap_remove(entry_id);

        // the former last arena entry now lives at `entry_id`
        let relocated = match self.entries.get(entry_id) {
            Some(moved) => {
                let position = moved.position;
                self.heap[position] = entry_id;
                Some(entry_id)
            },
            None => None,
        };

        Removal { entry, relocated }
    }

    fn priority_at(&self, index: usize) -> &P {
        &self.entries[self.heap[index]].priority
    }

    fn sift_up(&mut self, index: usize) {
        let mut current_index = index;

        while 0 < current_index {
            let parent = parent_index(current_index);

            if self.priority_at(parent) <= self.priority_at(current_index) {
                break;
            }

            self.swap(parent, current_index);
            current_index = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut current_index = index;

        loop {
            let left = left_child_index(current_index);
            let right = right_child_index(current_index);
            let mut min_entry_index = current_index;

            // strict comparison, ties keep the current node in place
            if left < self.len() && self.priority_at(left) < self.priority_at(min_entry_index) {
                min_entry_index = left;
            }
            if right < self.len() && self.priority_at(right) < self.priority_at(min_entry_index) {
                min_entry_index = right;
            }

            if min_entry_index == current_index {
                break;
            }

            self.swap(current_index, min_entry_index);
            current_index = min_entry_index;
        }
    }

    fn swap(&mut self, first: usize, second: usize) {
        self.heap.swap(first, second);

        let first_id = self.heap[first];
        let second_id = self.heap[second];
        self.entries[first_id].position = first;
        self.entries[second_id].position = second;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_arithmetic() {
        assert_eq!(left_child_index(0), 1);
        assert_eq!(right_child_index(0), 2);
        assert_eq!(parent_index(1), 0);
        assert_eq!(parent_index(2), 0);
        assert_eq!(parent_index(5), 2);
        assert_eq!(parent_index(6), 2);

        for index in 0..100 {
            assert_eq!(parent_index(left_child_index(index)), index);
            assert_eq!(parent_index(right_child_index(index)), index);
        }
    }

    #[test]
    fn release_reports_relocated_entry() {
        let mut heap = MinBinaryHeap::new();
        heap.push("a", 1);
        heap.push("b", 2);
        let last = heap.push("c", 3);

        let removal = heap.pop().unwrap();
        assert_eq!(removal.entry.key, "a");
        assert_eq!(removal.relocated, Some(0));
        assert_ne!(last, 0);
        assert_eq!(heap.entry(0).key, "c");
        assert!(heap.is_valid());

        let removal = heap.remove(1).unwrap();
        assert_eq!(removal.entry.key, "b");
        assert_eq!(removal.relocated, None);
        assert_eq!(heap.len(), 1);
        assert!(heap.is_valid());
    }

    #[test]
    fn remove_unknown_handle() {
        let mut heap: MinBinaryHeap<u32, u32> = MinBinaryHeap::new();
        assert!(heap.remove(3).is_none());
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
    }
}
