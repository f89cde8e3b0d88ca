//! Membership List
//!
//! This module implements the ordered membership list that a signal keeps
//! of its connected slots.
//!
//! # Overview
//!
//! The list is a doubly-linked list whose links live next to the elements
//! they link, inside a single arena:
//!
//! - Each entry stores its value together with `prev`/`next` indices
//! - Insertion at the front and removal of any entry are O(1)
//! - Freed entries are recycled, so steady-state connect/disconnect does
//!   not allocate
//!
//! # Design Decisions
//!
//! 1. We use indices into an arena rather than raw pointers between
//!    connections because:
//!    - Connections are ordinary Rust values that move freely, so they
//!      cannot hold their own link fields at a stable address
//!    - An index survives the move of the handle that refers to it
//!    - No unsafe code is needed
//!
//! 2. Every entry carries a generation counter. A [`SlotKey`] from an
//!    earlier occupant of the same index is stale, and all operations on
//!    stale keys are checked no-ops. Unlinking something that is not in the
//!    list therefore cannot corrupt it.
//!
//! 3. The list does not know about iteration cursors. Repositioning a
//!    cursor whose entry is being removed is the job of the caller
//!    (see `signal::cursor`).

mod key;
mod linked;

pub use key::SlotKey;
pub use linked::{Iter, LinkedSlab};
