//! Shared Signal State
//!
//! [`SignalCore`] is the state behind a [`Signal`](super::Signal): the slot
//! list, the cursor stack, and the teardown flag. It is reference counted so
//! that a running emission and weak handles can outlive the owning
//! `Signal` value without reading freed memory.
//!
//! # Borrow Discipline
//!
//! The state sits in a single `RefCell`. A borrow is never held while a
//! slot runs or while a removed slot is dropped. Either may reenter the
//! signal (connect, disconnect, emit, or tear it down), and every one of
//! those paths borrows the state again.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SignalConfig;
use crate::list::{LinkedSlab, SlotKey};

use super::cursor::CursorStack;

/// A stored slot. Cloned out of the list before it is invoked.
pub(crate) type Slot<A> = Rc<dyn Fn(&A)>;

/// Membership operations a [`Connection`](super::Connection) needs from its
/// signal, independent of the signal's argument type.
pub(crate) trait Membership {
    /// Remove the entry under `key`, fixing up active cursors first.
    ///
    /// Returns `false` if the entry was not linked.
    fn detach(&self, key: SlotKey) -> bool;

    /// Move the entry under `key` to the front of the list.
    ///
    /// Returns the entry's new key, or `None` if it was not linked.
    fn relink(&self, key: SlotKey) -> Option<SlotKey>;

    /// Check if `key` is still linked.
    fn contains(&self, key: SlotKey) -> bool;
}

struct State<A> {
    slots: LinkedSlab<Slot<A>>,
    cursors: CursorStack,
    closed: bool,
}

pub(crate) struct SignalCore<A> {
    state: RefCell<State<A>>,
    config: SignalConfig,
}

impl<A: 'static> SignalCore<A> {
    pub(crate) fn new(config: SignalConfig) -> Self {
        Self {
            state: RefCell::new(State {
                slots: LinkedSlab::new(),
                cursors: CursorStack::new(),
                closed: false,
            }),
            config,
        }
    }

    pub(crate) fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Name used in logs.
    pub(crate) fn label(&self) -> &str {
        self.config.name.as_deref().unwrap_or("<unnamed>")
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.state.borrow().closed
    }

    pub(crate) fn len(&self) -> usize {
        self.state.borrow().slots.len()
    }

    pub(crate) fn emit_depth(&self) -> usize {
        self.state.borrow().cursors.depth()
    }

    /// Link `slot` at the front of the list.
    pub(crate) fn connect(&self, slot: Slot<A>) -> SlotKey {
        let key = self.state.borrow_mut().slots.push_front(slot);
        tracing::trace!(signal = self.label(), ?key, "slot connected");
        key
    }

    /// Invoke every eligible slot with `args`.
    pub(crate) fn emit(&self, args: &A) {
        let depth = {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return;
            }
            let head = state.slots.head();
            state.cursors.push(head)
        };
        let _guard = CursorGuard { core: self, depth };

        let span = tracing::trace_span!("emit", signal = self.label(), depth);
        let _entered = span.enter();

        loop {
            let Some(slot) = self.slot_under_cursor(depth) else {
                break;
            };

            slot(args);
            drop(slot);

            let mut state = self.state.borrow_mut();
            let State { slots, cursors, .. } = &mut *state;
            match cursors.get(depth) {
                Some(cursor) if cursor.is_alive() => {}
                _ => {
                    tracing::warn!(
                        signal = self.label(),
                        depth,
                        "signal torn down during emission"
                    );
                    break;
                }
            }
            cursors.advance(depth, slots, self.config.self_disconnect);
        }
    }

    fn slot_under_cursor(&self, depth: usize) -> Option<Slot<A>> {
        let state = self.state.borrow();
        let cursor = state.cursors.get(depth).filter(|cursor| cursor.is_alive())?;
        let key = cursor.position()?;
        state.slots.get(key).map(Rc::clone)
    }

    /// Unlink every slot. Active emissions stop at their next step.
    pub(crate) fn disconnect_all(&self) -> usize {
        let removed = {
            let mut state = self.state.borrow_mut();
            state.cursors.exhaust_all();
            state.slots.drain()
        };
        let count = removed.len();
        tracing::debug!(signal = self.label(), count, "all slots disconnected");
        drop(removed);
        count
    }

    /// Tear the signal down.
    ///
    /// Every linked connection is orphaned and every active emission is
    /// marked dead. Later calls are no-ops.
    pub(crate) fn close(&self) {
        let removed = {
            let mut state = self.state.borrow_mut();
            if state.closed {
                return;
            }
            state.closed = true;
            let interrupted = state.cursors.kill_all();
            let removed = state.slots.drain();
            tracing::debug!(
                signal = self.label(),
                orphaned = removed.len(),
                interrupted,
                "signal closed"
            );
            removed
        };
        drop(removed);
    }
}

impl<A: 'static> Membership for SignalCore<A> {
    fn detach(&self, key: SlotKey) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            let State { slots, cursors, .. } = &mut *state;
            if !slots.contains(key) {
                return false;
            }
            let moved = cursors.skip_removed(key, slots.next(key));
            tracing::trace!(signal = self.label(), ?key, moved, "slot disconnected");
            slots.unlink(key)
        };
        drop(removed);
        true
    }

    fn relink(&self, key: SlotKey) -> Option<SlotKey> {
        let mut state = self.state.borrow_mut();
        let State { slots, cursors, .. } = &mut *state;
        if !slots.contains(key) {
            return None;
        }
        cursors.skip_removed(key, slots.next(key));
        let slot = slots.unlink(key)?;
        let new_key = slots.push_front(slot);
        tracing::trace!(signal = self.label(), from = ?key, to = ?new_key, "slot relocated");
        Some(new_key)
    }

    fn contains(&self, key: SlotKey) -> bool {
        self.state.borrow().slots.contains(key)
    }
}

/// Pops an emission's cursor on every exit path, unwinding included.
struct CursorGuard<'a, A> {
    core: &'a SignalCore<A>,
    depth: usize,
}

impl<A> Drop for CursorGuard<'_, A> {
    fn drop(&mut self) {
        self.core.state.borrow_mut().cursors.pop(self.depth);
    }
}
