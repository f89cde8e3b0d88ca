//! Weak Signal Handles
//!
//! Slots often need to reach the signal they are attached to: to emit it
//! again, or to connect further slots. Capturing the [`Signal`](super::Signal)
//! itself is impossible (it is uniquely owned), and an owning reference
//! would keep it alive forever. [`WeakSignal`] is the non-owning handle for
//! that.
//!
//! An emission started through a `WeakSignal` keeps the signal's state
//! allocated until it returns. That is what lets a slot drop the owning
//! `Signal` mid-emission: the emission notices the teardown and stops,
//! without touching freed memory.

use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{RelayError, Result};

use super::connection::Connection;
use super::emitter::connect_to;
use super::shared::SignalCore;

/// Non-owning handle to a [`Signal`](super::Signal).
pub struct WeakSignal<A: 'static> {
    core: Weak<SignalCore<A>>,

    /// Kept for error reporting after the signal is gone.
    name: Option<String>,
}

impl<A: 'static> WeakSignal<A> {
    pub(crate) fn new(core: Weak<SignalCore<A>>, name: Option<String>) -> Self {
        Self { core, name }
    }

    /// Check if the owning signal still exists.
    pub fn is_alive(&self) -> bool {
        self.live().is_ok()
    }

    /// Emit the signal, as [`Signal::emit`](super::Signal::emit).
    pub fn emit(&self, args: &A) -> Result<()> {
        let core = self.live()?;
        core.emit(args);
        Ok(())
    }

    /// Connect a slot, as [`Signal::connect`](super::Signal::connect).
    pub fn connect<F>(&self, slot: F) -> Result<Connection>
    where
        F: Fn(&A) + 'static,
    {
        let core = self.live()?;
        Ok(connect_to(&core, Rc::new(slot)))
    }

    /// Disconnect every slot, as
    /// [`Signal::disconnect_all`](super::Signal::disconnect_all).
    pub fn disconnect_all(&self) -> Result<usize> {
        let core = self.live()?;
        Ok(core.disconnect_all())
    }

    /// Number of emissions currently running, zero if the signal is gone.
    pub fn emit_depth(&self) -> usize {
        self.live().map(|core| core.emit_depth()).unwrap_or(0)
    }

    fn live(&self) -> Result<Rc<SignalCore<A>>> {
        match self.core.upgrade() {
            Some(core) if !core.is_closed() => Ok(core),
            _ => Err(RelayError::SignalDropped {
                name: self.name.clone(),
            }),
        }
    }
}

impl<A: 'static> Clone for WeakSignal<A> {
    fn clone(&self) -> Self {
        Self {
            core: Weak::clone(&self.core),
            name: self.name.clone(),
        }
    }
}

impl<A: 'static> fmt::Debug for WeakSignal<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakSignal")
            .field("name", &self.name)
            .field("alive", &self.is_alive())
            .finish()
    }
}
