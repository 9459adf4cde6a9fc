/*!
 * Registry Module
 * Owning storage of signal bindings with selective removal and indexed lookup
 */

mod filter;
mod table;

// Re-export public API
pub use filter::RemovalFilter;
pub use table::SignalTable;
