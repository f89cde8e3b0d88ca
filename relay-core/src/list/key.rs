//! Keys naming entries in a [`LinkedSlab`](super::LinkedSlab).

use std::fmt;

/// Handle to one entry of a membership list.
///
/// A key is only meaningful for the list that produced it. Once the entry
/// is unlinked, the key goes stale: the slot index may be reused, but with
/// a different generation, so the old key never aliases the new occupant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    index: u32,
    generation: u32,
}

impl SlotKey {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self {
            index: index as u32,
            generation,
        }
    }

    /// Position of the entry inside the arena.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Generation of the entry at the time the key was issued.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotKey({}v{})", self.index, self.generation)
    }
}
