//! Iteration Cursors
//!
//! Every in-progress emission owns one cursor: its position in the slot
//! list. Emissions on the same signal nest (a slot may emit again), so the
//! cursors form a stack with the innermost emission on top.
//!
//! # Fixup Protocol
//!
//! The list itself keeps no record of who is walking it. Before an entry is
//! unlinked, every cursor positioned on it is moved to the entry's
//! successor and flagged as `advanced`. The emission loop then knows its
//! position was already moved for it.
//!
//! Removing an entry the cursor is *not* on needs no fixup: the cursor's own
//! entry keeps its `next` link, which the list repairs around the removal.

use smallvec::SmallVec;

use crate::config::SelfDisconnect;
use crate::list::{LinkedSlab, SlotKey};

/// Traversal state of one emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    /// Entry the emission is on. `None` once past the tail.
    position: Option<SlotKey>,

    /// Cleared when the signal is torn down mid-emission.
    alive: bool,

    /// Set when a removal moved `position` forward on our behalf.
    advanced: bool,
}

impl Cursor {
    fn new(head: Option<SlotKey>) -> Self {
        Self {
            position: head,
            alive: true,
            advanced: false,
        }
    }

    pub(crate) fn position(&self) -> Option<SlotKey> {
        self.position
    }

    pub(crate) fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Stack of active cursors, innermost emission last.
#[derive(Debug, Default)]
pub(crate) struct CursorStack {
    cursors: SmallVec<[Cursor; 4]>,
}

impl CursorStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of emissions currently running.
    pub(crate) fn depth(&self) -> usize {
        self.cursors.len()
    }

    /// Start a traversal at `head`. Returns the cursor's depth.
    pub(crate) fn push(&mut self, head: Option<SlotKey>) -> usize {
        self.cursors.push(Cursor::new(head));
        self.cursors.len() - 1
    }

    /// End the traversal at `depth`, which must be the innermost one.
    pub(crate) fn pop(&mut self, depth: usize) {
        debug_assert_eq!(
            self.cursors.len(),
            depth + 1,
            "cursor popped out of order: depth {} of {}",
            depth,
            self.cursors.len()
        );
        self.cursors.truncate(depth);
    }

    pub(crate) fn get(&self, depth: usize) -> Option<&Cursor> {
        self.cursors.get(depth)
    }

    /// Move every cursor sitting on `removed` to `successor`.
    ///
    /// Walks innermost to outermost. Returns how many cursors moved.
    pub(crate) fn skip_removed(&mut self, removed: SlotKey, successor: Option<SlotKey>) -> usize {
        let mut moved = 0;
        for cursor in self.cursors.iter_mut().rev() {
            if cursor.position == Some(removed) {
                cursor.position = successor;
                cursor.advanced = true;
                moved += 1;
            }
        }
        moved
    }

    /// Send every cursor past the tail.
    pub(crate) fn exhaust_all(&mut self) {
        for cursor in self.cursors.iter_mut() {
            cursor.position = None;
            cursor.advanced = true;
        }
    }

    /// Mark every cursor as belonging to a dead signal.
    ///
    /// Returns the number of emissions that will be cut short.
    pub(crate) fn kill_all(&mut self) -> usize {
        for cursor in self.cursors.iter_mut() {
            cursor.alive = false;
            cursor.position = None;
        }
        self.cursors.len()
    }

    /// Step the cursor at `depth` past the slot it just invoked.
    ///
    /// Under [`SelfDisconnect::Resume`] a cursor already moved by
    /// [`skip_removed`](Self::skip_removed) stays where it is. Under
    /// [`SelfDisconnect::SkipNext`] it always takes one more step.
    pub(crate) fn advance<T>(&mut self, depth: usize, slots: &LinkedSlab<T>, policy: SelfDisconnect) {
        let Some(cursor) = self.cursors.get_mut(depth) else {
            return;
        };

        let already_moved = std::mem::replace(&mut cursor.advanced, false);
        if already_moved && policy == SelfDisconnect::Resume {
            return;
        }

        cursor.position = cursor.position.and_then(|key| slots.next(key));
    }
}
