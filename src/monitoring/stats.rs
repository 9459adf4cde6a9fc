/*!
 * Slot Statistics
 * Lock-free counters for binding and dispatch activity
 */

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Snapshot of slot activity for one emitter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStats {
    pub slots_bound: u64,
    pub slots_unbound: u64,
    pub emissions: u64,
    pub invocations: u64,
    pub skipped_invocations: u64,
    pub detached_submissions: u64,
    pub spawn_failures: u64,
    /// Signals currently holding at least one slot
    pub active_signals: usize,
    /// Slots currently bound across all signals
    pub active_slots: usize,
}

/// Atomic slot statistics
///
/// Shared with detached invocations, which may still be counting after
/// their emitter is gone.
///
/// # Performance
/// - Cache-line aligned to prevent false sharing with the registry lock
#[repr(C, align(64))]
#[derive(Debug, Default)]
pub struct AtomicSlotStats {
    slots_bound: AtomicU64,
    slots_unbound: AtomicU64,
    emissions: AtomicU64,
    invocations: AtomicU64,
    skipped_invocations: AtomicU64,
    detached_submissions: AtomicU64,
    spawn_failures: AtomicU64,
}

impl AtomicSlotStats {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn inc_bound(&self) {
        self.slots_bound.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn add_unbound(&self, count: usize) {
        self.slots_unbound.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Hot path - called on every emit
    #[inline(always)]
    pub fn inc_emissions(&self) {
        self.emissions.fetch_add(1, Ordering::Relaxed);
    }

    /// Hot path - called for every slot that ran
    #[inline(always)]
    pub fn inc_invocations(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_skipped(&self) {
        self.skipped_invocations.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_detached(&self) {
        self.detached_submissions.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn inc_spawn_failures(&self) {
        self.spawn_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get snapshot of current counters (no locks required)
    ///
    /// # Note
    /// Counters are read independently; under concurrent dispatch they may
    /// not be mutually consistent. Gauge fields are left at zero for the
    /// caller to fill in.
    #[inline]
    pub fn snapshot(&self) -> SlotStats {
        SlotStats {
            slots_bound: self.slots_bound.load(Ordering::Relaxed),
            slots_unbound: self.slots_unbound.load(Ordering::Relaxed),
            emissions: self.emissions.load(Ordering::Relaxed),
            invocations: self.invocations.load(Ordering::Relaxed),
            skipped_invocations: self.skipped_invocations.load(Ordering::Relaxed),
            detached_submissions: self.detached_submissions.load(Ordering::Relaxed),
            spawn_failures: self.spawn_failures.load(Ordering::Relaxed),
            active_signals: 0,
            active_slots: 0,
        }
    }
}
