//! Error types for the relay runtime.
//!
//! Most misuse of signals and connections is ruled out by construction
//! (stale list keys are checked no-ops). What remains are the failures a
//! caller can actually observe: using a weak handle after its signal is
//! gone, and rejecting an invalid configuration.

use thiserror::Error;

/// Errors produced by relay operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The owning [`Signal`](crate::signal::Signal) was dropped.
    #[error("signal {} has been dropped", .name.as_deref().unwrap_or("<unnamed>"))]
    SignalDropped {
        /// Name from the signal's config, if it had one.
        name: Option<String>,
    },

    /// A [`SignalConfig`](crate::config::SignalConfig) failed validation.
    #[error("invalid signal config: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RelayError>;
