/*!
 * Slots Module
 * Callback wrappers: the unit of invocation bound to a signal
 */

mod identity;
mod traits;
mod wrapper;

// Re-export public API
pub use identity::{CallbackId, ObjectId, SignalId};
pub use traits::{Delivery, Handler, MethodHandler, Signal, Slot};
pub use wrapper::{FunctionSlot, LambdaSlot, MethodSlot};

/// Shared handle to a type-erased slot
pub type SharedSlot<Args> = std::sync::Arc<dyn Slot<Args>>;
