//! Relay Core
//!
//! This crate provides the core of the Relay observer runtime: typed
//! signals that broadcast to connected slots, with well-defined behaviour
//! when slots mutate the signal they are being called from.
//!
//! It implements:
//!
//! - Signals with connect / emit
//! - Owning connection handles that disconnect on drop
//! - Reentrancy-safe emission (nested emits, connect and disconnect from
//!   inside slots, dropping a signal from its own slot)
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `list`: Arena-backed doubly-linked membership list
//! - `signal`: Signals, connections, weak handles and the cursor stack
//! - `config`: Per-signal settings
//! - `error`: Error types
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use relay_core::signal::Signal;
//!
//! let changed = Signal::<i32>::new();
//! let log = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&log);
//! let conn = changed.connect(move |v| sink.borrow_mut().push(*v));
//!
//! changed.emit(&5);
//! drop(conn);
//! changed.emit(&6);
//!
//! assert_eq!(*log.borrow(), vec![5]);
//! ```

pub mod config;
pub mod error;
pub mod list;
pub mod signal;

pub use config::{SelfDisconnect, SignalConfig};
pub use error::{RelayError, Result};
pub use signal::{Connection, Signal, WeakSignal};
