/*!
 * Facade Module
 * Public bind/unbind/emit surface and dispatch policy
 */

mod dispatch;
mod emitter;
mod object_slots;

// Re-export public API
pub use emitter::Emitter;
pub use object_slots::ObjectSlots;
