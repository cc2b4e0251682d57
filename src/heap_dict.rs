use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::iter::FromIterator;

use log::trace;

use crate::error::HeapDictError;
use crate::types::EntryId;
use crate::utils::binary_heap::{Entry, MinBinaryHeap, Removal};

/// A key to priority map that can also hand out the entry with the smallest priority.
///
/// Entries live in a [`MinBinaryHeap`], the index maps every key to the handle of its
/// entry so that lookups, updates and deletions of arbitrary keys do not need to scan
/// the heap. `set`, `delete` and `popitem` run in O(log n), `get` and `peekitem` in O(1).
///
/// ```
/// use heap_dict::heap_dict::HeapDict;
///
/// let mut queue = HeapDict::new();
/// queue.set("a", 3);
/// queue.set("b", 1);
/// queue.set("c", 2);
///
/// assert_eq!(queue.peekitem(), Ok((&"b", &1)));
/// assert_eq!(queue.popitem(), Ok(("b", 1)));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone)]
pub struct HeapDict<K, P: Ord> {
    heap: MinBinaryHeap<K, P>,
    index: HashMap<K, EntryId>,
}

impl<K: Hash + Eq + Clone, P: Ord> Default for HeapDict<K, P> {

    fn default() -> Self {
        HeapDict::new()
    }
}

impl<K: Hash + Eq + Clone, P: Ord> HeapDict<K, P> {

    pub fn new() -> Self {
        HeapDict {
            heap: MinBinaryHeap::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HeapDict {
            heap: MinBinaryHeap::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `key` with `priority`, returns the priority it replaced.
    ///
    /// An existing key is removed completely and inserted again as a new leaf,
    /// so updates in both directions take the same path.
    pub fn set(&mut self, key: K, priority: P) -> Option<P> {
        let previous = self.remove(&key);
        if previous.is_some() {
            trace!("replacing the priority of an existing key");
        }

        let entry_id = self.heap.push(key.clone(), priority);
        self.index.insert(key, entry_id);

        previous
    }

    pub fn get<Q>(&self, key: &Q) -> Result<&P, HeapDictError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key)
            .map(|entry_id| &self.heap.entry(*entry_id).priority)
            .ok_or(HeapDictError::KeyNotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Removes `key` and returns its priority, fails if the key is unknown.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<P, HeapDictError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let priority = self.remove(key).ok_or(HeapDictError::KeyNotFound)?;
        trace!("deleted key ({} entries left)", self.len());

        Ok(priority)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<P>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, priority)| priority)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, P)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let entry_id = self.index.remove(key)?;
        let Removal { entry, relocated } = self.heap.remove(entry_id)?;
        self.reindex(relocated);

        Some((entry.key, entry.priority))
    }

    /// removes and returns the entry with the smallest priority
    pub fn popitem(&mut self) -> Result<(K, P), HeapDictError> {
        let Removal { entry, relocated } = self.heap.pop().ok_or(HeapDictError::EmptyContainer)?;
        self.index.remove(&entry.key);
        self.reindex(relocated);

        Ok((entry.key, entry.priority))
    }

    /// the entry with the smallest priority
    pub fn peekitem(&self) -> Result<(&K, &P), HeapDictError> {
        self.heap.peek()
            .map(|entry| (&entry.key, &entry.priority))
            .ok_or(HeapDictError::EmptyContainer)
    }

    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.len());

        self.heap.clear();
        self.index.clear();
    }

    /// keys in an unspecified order, not sorted by priority
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &P> + '_ {
        self.heap.iter().map(|entry| &entry.priority)
    }

    pub fn iter(&self) -> Iter<'_, K, P> {
        Iter { entries: self.heap.iter() }
    }

    /// drains all entries in non-decreasing priority order
    pub fn into_sorted_vec(mut self) -> Vec<(K, P)> {
        let mut sorted = Vec::with_capacity(self.len());

        while let Ok(item) = self.popitem() {
            sorted.push(item);
        }

        sorted
    }

    /// Checks heap order, entry positions and that the index holds exactly one
    /// handle per entry that resolves to the entry with the same key.
    pub fn is_consistent(&self) -> bool {
        self.heap.is_valid()
            && self.index.len() == self.heap.len()
            && self.index.iter().all(|(key, entry_id)| {
                self.heap.get(*entry_id).map_or(false, |entry| entry.key == *key)
            })
    }

    /// the arena slot `relocated` was refilled by another entry, point its key there
    fn reindex(&mut self, relocated: Option<EntryId>) {
        if let Some(entry_id) = relocated {
            if let Some(handle) = self.index.get_mut(&self.heap.entry(entry_id).key) {
                *handle = entry_id;
            }
        }
    }
}

/// iterator over `(key, priority)` pairs in arena order
pub struct Iter<'a, K, P> {
    entries: std::slice::Iter<'a, Entry<K, P>>,
}

impl<'a, K, P> Iterator for Iter<'a, K, P> {

    type Item = (&'a K, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|entry| (&entry.key, &entry.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, K, P> ExactSizeIterator for Iter<'a, K, P> {}

impl<'a, K: Hash + Eq + Clone, P: Ord> IntoIterator for &'a HeapDict<K, P> {

    type Item = (&'a K, &'a P);
    type IntoIter = Iter<'a, K, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Hash + Eq + Clone, P: Ord> Extend<(K, P)> for HeapDict<K, P> {

    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.set(key, priority);
        }
    }
}

/// later duplicates of a key overwrite earlier ones
impl<K: Hash + Eq + Clone, P: Ord> FromIterator<(K, P)> for HeapDict<K, P> {

    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut heap_dict = HeapDict::new();
        heap_dict.extend(iter);

        heap_dict
    }
}

impl<K: fmt::Debug, P: Ord + fmt::Debug> fmt::Debug for HeapDict<K, P> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.heap.iter().map(|entry| (&entry.key, &entry.priority)))
            .finish()
    }
}
