/*!
 * Object Slots Library
 * Type-safe, in-process signal/slot registry
 *
 * An emitter type owns an `ObjectSlots` registry and declares signals as its
 * own methods. Bound methods, free functions and closures run whenever a
 * signal is emitted, in binding order, inline or as detached tasks.
 */

pub mod core;
pub mod facade;
pub mod monitoring;
pub mod registry;
pub mod slots;

// Re-exports
pub use crate::core::{DispatchPolicy, LockPolicy, SlotConfig, SlotError, SlotResult};
pub use facade::{Emitter, ObjectSlots};
pub use monitoring::{init_tracing, SlotStats};
pub use slots::{CallbackId, Handler, MethodHandler, ObjectId, Signal, SignalId};
