/*!
 * Error Types
 * Errors for the fallible edges of the slot system (configuration, detached spawn)
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slot operation result
pub type SlotResult<T> = Result<T, SlotError>;

/// Slot system errors
///
/// Binding, unbinding and emitting never fail. These errors only surface
/// from configuration parsing and from the detached dispatcher, which logs
/// them instead of returning them to the emitter.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SlotError {
    #[error("Invalid configuration value {value:?} for {key}")]
    #[diagnostic(
        code(slots::invalid_config),
        help("Boolean switches accept 1/0, true/false, on/off. Dispatch accepts sync or detached.")
    )]
    InvalidConfig { key: String, value: String },

    #[error("Failed to spawn detached slot invocation: {0}")]
    #[diagnostic(
        code(slots::spawn_failed),
        help("The process may be out of threads. The invocation was dropped.")
    )]
    SpawnFailed(String),
}

impl SlotError {
    pub(crate) fn invalid_config(key: &str, value: &str) -> Self {
        SlotError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

impl From<std::io::Error> for SlotError {
    fn from(err: std::io::Error) -> Self {
        SlotError::SpawnFailed(err.to_string())
    }
}
