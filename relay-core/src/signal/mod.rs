//! Signals and Slots
//!
//! This module implements the observer primitive: a [`Signal`] broadcasts
//! to every slot connected to it, and each registration is owned by a
//! [`Connection`].
//!
//! # Concepts
//!
//! ## Signals
//!
//! A Signal holds an ordered list of slots. Emitting it invokes each slot
//! with a reference to the emitted arguments. The signal never owns a
//! registration; it only lists them.
//!
//! ## Connections
//!
//! A Connection is the handle returned by `connect`. Dropping it, or calling
//! [`Connection::disconnect`], removes the slot. Dropping the signal first
//! leaves the connection orphaned and inert.
//!
//! ## Reentrancy
//!
//! Slots may connect, disconnect, emit, or drop signals while an emission
//! is running. Each emission tracks its position with a cursor on a
//! per-signal stack, and every removal repairs the cursors that point at
//! the removed slot. The guarantees are:
//!
//! - A disconnected slot is never invoked again, even by an emission
//!   already in progress
//! - Removing one slot never makes an emission skip or repeat another
//!   (but see [`SelfDisconnect`](crate::config::SelfDisconnect))
//! - A slot connected during an emission waits for the next one
//! - A nested emission completes before the outer one resumes
//! - Dropping a signal from one of its own slots stops the emission

mod connection;
mod cursor;
mod emitter;
mod shared;
mod weak;

pub use connection::Connection;
pub use emitter::Signal;
pub use weak::WeakSignal;
