//! Signal Configuration
//!
//! Per-signal settings. Signals are cheap and usually created with
//! [`SignalConfig::default`]; hosts that want to name signals for logging
//! or pick the self-disconnect behaviour can build a config in code or
//! deserialize one from their own settings file.

use serde::{Deserialize, Serialize};

use crate::error::{RelayError, Result};

/// What an emission does after a slot disconnects the connection the
/// emission is currently positioned on (typically the slot disconnecting
/// itself).
///
/// Removing that connection moves the emission's cursor forward to the
/// following slot. The two policies differ in whether the loop then
/// advances once more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfDisconnect {
    /// Continue with the slot that followed the removed one.
    #[default]
    Resume,

    /// Advance again, so the slot that followed the removed one is skipped
    /// for the current emission. It still runs on the next emission.
    SkipNext,
}

/// Configuration for a [`Signal`](crate::signal::Signal).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    /// Name used in log output and errors.
    pub name: Option<String>,

    /// Behaviour when the slot under an emission's cursor is disconnected.
    pub self_disconnect: SelfDisconnect,
}

impl SignalConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signal's name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the self-disconnect policy.
    pub fn self_disconnect(mut self, policy: SelfDisconnect) -> Self {
        self.self_disconnect = policy;
        self
    }

    /// Check the configuration for values a signal cannot use.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(RelayError::InvalidConfig(
                    "name must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
