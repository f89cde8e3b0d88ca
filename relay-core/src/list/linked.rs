//! Index-Linked Arena
//!
//! [`LinkedSlab`] stores list entries in a `Vec` and threads them together
//! with `prev`/`next` indices. Vacant entries sit on a free list and are
//! reused by the next insertion.

use super::key::SlotKey;

/// One arena entry: the element plus its links.
#[derive(Debug)]
struct Entry<T> {
    /// Bumped every time the entry is vacated.
    generation: u32,

    /// `None` while the entry is on the free list.
    value: Option<T>,

    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked list with O(1) front insertion and O(1) removal by key.
#[derive(Debug)]
pub struct LinkedSlab<T> {
    entries: Vec<Entry<T>>,

    /// Indices of vacant entries.
    free: Vec<usize>,

    head: Option<usize>,
    len: usize,
}

impl<T> LinkedSlab<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no entry is linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` as the new head of the list.
    pub fn push_front(&mut self, value: T) -> SlotKey {
        let old_head = self.head;

        let index = match self.free.pop() {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.value = Some(value);
                entry.prev = None;
                entry.next = old_head;
                index
            }
            None => {
                self.entries.push(Entry {
                    generation: 0,
                    value: Some(value),
                    prev: None,
                    next: old_head,
                });
                self.entries.len() - 1
            }
        };

        if let Some(old) = old_head {
            self.entries[old].prev = Some(index);
        }
        self.head = Some(index);
        self.len += 1;

        SlotKey::new(index, self.entries[index].generation)
    }

    /// Remove the entry named by `key` and return its value.
    ///
    /// Returns `None` if the key is stale.
    pub fn unlink(&mut self, key: SlotKey) -> Option<T> {
        if !self.contains(key) {
            return None;
        }

        let index = key.index();
        let (prev, next) = {
            let entry = &self.entries[index];
            (entry.prev, entry.next)
        };

        match prev {
            Some(prev) => self.entries[prev].next = next,
            None => self.head = next,
        }
        if let Some(next) = next {
            self.entries[next].prev = prev;
        }

        let entry = &mut self.entries[index];
        entry.prev = None;
        entry.next = None;
        entry.generation = entry.generation.wrapping_add(1);
        let value = entry.value.take();

        self.free.push(index);
        self.len -= 1;
        value
    }

    /// Check if `key` names a currently linked entry.
    pub fn contains(&self, key: SlotKey) -> bool {
        self.entries
            .get(key.index())
            .map(|entry| entry.generation == key.generation() && entry.value.is_some())
            .unwrap_or(false)
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: SlotKey) -> Option<&T> {
        if !self.contains(key) {
            return None;
        }
        self.entries[key.index()].value.as_ref()
    }

    /// Key of the first entry.
    pub fn head(&self) -> Option<SlotKey> {
        self.head.map(|index| self.key_at(index))
    }

    /// Key of the entry following `key`.
    ///
    /// A stale key has no successor.
    pub fn next(&self, key: SlotKey) -> Option<SlotKey> {
        if !self.contains(key) {
            return None;
        }
        self.entries[key.index()].next.map(|index| self.key_at(index))
    }

    /// Unlink every entry, returning the values in list order.
    ///
    /// All outstanding keys become stale.
    pub fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let entry = &mut self.entries[index];
            cursor = entry.next;
            entry.prev = None;
            entry.next = None;
            entry.generation = entry.generation.wrapping_add(1);
            if let Some(value) = entry.value.take() {
                values.push(value);
            }
            self.free.push(index);
        }

        self.head = None;
        self.len = 0;
        values
    }

    /// Iterate from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn key_at(&self, index: usize) -> SlotKey {
        SlotKey::new(index, self.entries[index].generation)
    }
}

impl<T> Default for LinkedSlab<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Forward iterator over a [`LinkedSlab`].
pub struct Iter<'a, T> {
    list: &'a LinkedSlab<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (SlotKey, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let entry = &self.list.entries[index];
        self.cursor = entry.next;
        let value = entry.value.as_ref()?;
        Some((SlotKey::new(index, entry.generation), value))
    }
}
