//! Connection Handles
//!
//! A [`Connection`] is the subscriber's proof of membership in one signal.
//! It owns that membership: dropping the handle disconnects the slot.
//!
//! # Moving Connections
//!
//! An ordinary Rust move of a `Connection` does not touch the signal; the
//! slot keeps its place in the list. Two explicit operations move the
//! membership itself:
//!
//! - [`Connection::relocate`] hands the slot over to a new handle and puts
//!   it at the front of the list, exactly as if it had just been connected.
//! - [`Connection::assign`] disconnects the receiver, then takes over
//!   another handle's slot the same way.
//!
//! In both cases an emission that is already running does not see the slot
//! again, while the next emission does.

use std::fmt;
use std::rc::Weak;

use crate::list::SlotKey;

use super::shared::Membership;

/// Where a connected slot lives.
struct Link {
    owner: Weak<dyn Membership>,
    key: SlotKey,
}

/// Handle to one slot's registration with a signal.
///
/// Not `Clone`: two handles would both claim the same membership.
///
/// # Example
///
/// ```rust
/// use relay_core::signal::Signal;
///
/// let clicked = Signal::<u32>::new();
/// let mut conn = clicked.connect(|n| println!("clicked {n} times"));
///
/// clicked.emit(&1);
/// conn.disconnect();
/// clicked.emit(&2); // nothing printed
/// ```
#[must_use = "dropping a Connection disconnects its slot immediately"]
pub struct Connection {
    /// `None` once disconnected. A link can also go dead underneath us when
    /// the signal is dropped; [`is_connected`](Self::is_connected) asks the
    /// signal.
    link: Option<Link>,
}

impl Connection {
    /// Create a handle that is not connected to anything.
    pub fn empty() -> Self {
        Self { link: None }
    }

    pub(crate) fn linked(owner: Weak<dyn Membership>, key: SlotKey) -> Self {
        Self {
            link: Some(Link { owner, key }),
        }
    }

    /// Check if the slot is still registered with a live signal.
    pub fn is_connected(&self) -> bool {
        match &self.link {
            Some(link) => link
                .owner
                .upgrade()
                .map(|owner| owner.contains(link.key))
                .unwrap_or(false),
            None => false,
        }
    }

    /// Remove the slot from its signal.
    ///
    /// Safe to call from inside any slot, including the one being
    /// disconnected. Emissions in progress never invoke the slot again and
    /// never skip or repeat another slot because of the removal. Does
    /// nothing if already disconnected or if the signal is gone.
    pub fn disconnect(&mut self) {
        let Some(link) = self.link.take() else {
            return;
        };
        if let Some(owner) = link.owner.upgrade() {
            owner.detach(link.key);
        }
    }

    /// Move the membership into a new handle, leaving `self` empty.
    ///
    /// The slot is relinked at the front of its signal's list. A handle that
    /// is not connected yields an empty handle.
    pub fn relocate(&mut self) -> Connection {
        let Some(link) = self.link.take() else {
            return Connection::empty();
        };

        let new_key = link
            .owner
            .upgrade()
            .and_then(|owner| owner.relink(link.key));

        match new_key {
            Some(key) => Connection::linked(link.owner, key),
            None => Connection::empty(),
        }
    }

    /// Replace this handle's membership with `other`'s.
    ///
    /// `self` is disconnected first; `other`'s slot is then relinked at the
    /// front of its signal's list, as with [`relocate`](Self::relocate).
    pub fn assign(&mut self, mut other: Connection) {
        self.disconnect();
        *self = other.relocate();
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("key", &self.link.as_ref().map(|link| link.key))
            .field("connected", &self.is_connected())
            .finish()
    }
}
