/*!
 * Core Module
 * Configuration and error handling shared by the slot system
 */

pub mod config;
pub mod errors;

// Re-export for convenience
pub use config::{DispatchPolicy, LockPolicy, SlotConfig, DISPATCH_ENV, THREAD_SAFE_ENV};
pub use errors::{SlotError, SlotResult};
