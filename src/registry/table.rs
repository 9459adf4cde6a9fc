/*!
 * Signal Table
 * Maps each signal to the ordered list of slots bound to it
 */

use super::filter::RemovalFilter;
use crate::slots::{SharedSlot, SignalId};
use ahash::RandomState;
use std::any::Any;
use std::collections::HashMap;
use tracing::{debug, error, instrument};

/// Slot list for one signal, in binding order
struct SlotList<Args> {
    slots: Vec<SharedSlot<Args>>,
}

/// Argument-type-erased view of a [`SlotList`]
trait ErasedSlotList: Send + Sync {
    /// Drop every slot the filter matches, keeping the order of the rest
    fn remove_matching(&mut self, filter: &RemovalFilter) -> usize;

    fn len(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<Args: 'static> ErasedSlotList for SlotList<Args> {
    fn remove_matching(&mut self, filter: &RemovalFilter) -> usize {
        let before = self.slots.len();
        self.slots
            .retain(|slot| !filter.matches(slot.object_id(), slot.callback_id()));
        before - self.slots.len()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Registry of bound slots, keyed by signal
///
/// Entries are created on the first bind to a signal and erased as soon as
/// a removal leaves them empty. The table owns every wrapper it holds;
/// bound receivers are only referenced.
#[derive(Default)]
pub struct SignalTable {
    signals: HashMap<SignalId, Box<dyn ErasedSlotList>, RandomState>,
}

impl SignalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `slot` to the list for `signal`. No deduplication.
    pub fn store<Args: 'static>(&mut self, signal: SignalId, slot: SharedSlot<Args>) {
        let list = self.signals.entry(signal).or_insert_with(|| {
            Box::new(SlotList::<Args> { slots: Vec::new() })
        });

        match list.as_any_mut().downcast_mut::<SlotList<Args>>() {
            Some(list) => {
                list.slots.push(slot);
                debug!(
                    signal = %signal,
                    callback = ?list.slots.last().map(|s| s.callback_id()),
                    position = list.slots.len() - 1,
                    "stored slot"
                );
            }
            // SignalId keys on the argument type, so a list never changes shape
            None => error!(signal = %signal, "slot list argument type mismatch"),
        }
    }

    /// Slot at `index` in the list for `signal`, if any
    pub fn lookup<Args: 'static>(&self, signal: &SignalId, index: usize) -> Option<SharedSlot<Args>> {
        self.signals
            .get(signal)?
            .as_any()
            .downcast_ref::<SlotList<Args>>()?
            .slots
            .get(index)
            .cloned()
    }

    /// Remove every slot matching `filter` across all signals
    ///
    /// Signals left without slots are erased. Returns the number of slots removed.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self, filter: RemovalFilter) -> usize {
        if filter.is_nothing() {
            return 0;
        }

        let mut removed = 0;
        self.signals.retain(|signal, list| {
            let count = list.remove_matching(&filter);
            if count > 0 {
                debug!(signal = %signal, removed = count, remaining = list.len(), "removed slots");
            }
            removed += count;
            list.len() > 0
        });
        removed
    }

    /// Number of signals with at least one slot
    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Number of slots bound to `signal`
    pub fn slot_count(&self, signal: &SignalId) -> usize {
        self.signals.get(signal).map_or(0, |list| list.len())
    }

    /// Total number of slots across all signals
    pub fn total_slots(&self) -> usize {
        self.signals.values().map(|list| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}
