//! Signal Implementation
//!
//! A [`Signal`] is the broadcaster: slots connect to it and are invoked,
//! in list order, each time it is emitted.
//!
//! # How Emission Works
//!
//! 1. `emit` pushes a cursor positioned at the head of the slot list.
//!
//! 2. The slot under the cursor is invoked, then the cursor steps forward.
//!    Connections and disconnections made by the slot are reflected
//!    immediately (see [`Connection`] for the exact rules).
//!
//! 3. The loop ends at the tail, or early if the signal is dropped by one
//!    of its own slots. The cursor is popped on every exit path, including
//!    a panicking slot.
//!
//! # Ordering
//!
//! New slots go to the front of the list, so slots run most recently
//! connected first. A slot connected while an emission is running is not
//! reached by that emission.
//!
//! # Thread Safety
//!
//! None. Signals are `!Send` and `!Sync`; reentrancy means nested calls on
//! one thread.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::SignalConfig;
use crate::error::Result;

use super::connection::Connection;
use super::shared::{Membership, SignalCore, Slot};
use super::weak::WeakSignal;

/// A broadcaster of `&A` to every connected slot.
///
/// Use a tuple for several arguments.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use relay_core::signal::Signal;
///
/// let resized = Signal::<(u32, u32)>::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// let sink = Rc::clone(&seen);
/// let _conn = resized.connect(move |&(w, h)| sink.borrow_mut().push(w * h));
///
/// resized.emit(&(4, 3));
/// assert_eq!(*seen.borrow(), vec![12]);
/// ```
pub struct Signal<A: 'static> {
    core: Rc<SignalCore<A>>,
}

impl<A: 'static> Signal<A> {
    /// Create a signal with the default configuration.
    pub fn new() -> Self {
        Self {
            core: Rc::new(SignalCore::new(SignalConfig::default())),
        }
    }

    /// Create a signal with the given configuration.
    pub fn with_config(config: SignalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            core: Rc::new(SignalCore::new(config)),
        })
    }

    /// Register `slot` and return the handle that owns the registration.
    pub fn connect<F>(&self, slot: F) -> Connection
    where
        F: Fn(&A) + 'static,
    {
        connect_to(&self.core, Rc::new(slot))
    }

    /// Invoke every connected slot with `args`.
    ///
    /// A panicking slot aborts the rest of this emission and the panic
    /// propagates to the caller.
    pub fn emit(&self, args: &A) {
        self.core.emit(args);
    }

    /// Number of connected slots.
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Check if no slot is connected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of emissions of this signal currently on the call stack.
    pub fn emit_depth(&self) -> usize {
        self.core.emit_depth()
    }

    /// The signal's name, if configured.
    pub fn name(&self) -> Option<&str> {
        self.core.config().name.as_deref()
    }

    /// The configuration the signal was created with.
    pub fn config(&self) -> &SignalConfig {
        self.core.config()
    }

    /// Disconnect every slot. Returns how many were connected.
    ///
    /// Their handles stay valid but report `is_connected() == false`.
    /// Running emissions invoke nothing further.
    pub fn disconnect_all(&self) -> usize {
        self.core.disconnect_all()
    }

    /// Create a non-owning handle, e.g. for a slot that needs to emit or
    /// connect to the signal it is attached to.
    pub fn downgrade(&self) -> WeakSignal<A> {
        WeakSignal::new(Rc::downgrade(&self.core), self.name().map(str::to_owned))
    }
}

pub(crate) fn connect_to<A: 'static>(core: &Rc<SignalCore<A>>, slot: Slot<A>) -> Connection {
    let key = core.connect(slot);
    let owner = Rc::downgrade(core);
    let owner: Weak<dyn Membership> = owner;
    Connection::linked(owner, key)
}

impl<A: 'static> Default for Signal<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static> Drop for Signal<A> {
    fn drop(&mut self) {
        self.core.close();
    }
}

impl<A: 'static> fmt::Debug for Signal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name())
            .field("slot_count", &self.len())
            .field("emit_depth", &self.emit_depth())
            .finish()
    }
}
