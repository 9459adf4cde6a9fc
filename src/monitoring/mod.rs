/*!
 * Monitoring
 * Tracing setup and slot activity statistics
 */

mod stats;
mod tracer;

pub use stats::{AtomicSlotStats, SlotStats};
pub use tracer::{init_tracing, TRACE_JSON_ENV};
