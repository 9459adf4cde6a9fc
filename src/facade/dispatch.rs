/*!
 * Slot Dispatch
 * Inline and fire-and-forget invocation of bound slots
 */

use crate::core::{DispatchPolicy, SlotError, SlotResult};
use crate::monitoring::AtomicSlotStats;
use crate::slots::{Delivery, SharedSlot, SignalId, Slot};
use std::sync::Arc;
use std::thread;
use tracing::{error, trace};

/// Name given to detached invocation threads
const DISPATCH_THREAD_NAME: &str = "slot-dispatch";

/// Invokes slots according to the configured dispatch policy
pub(crate) struct Dispatcher {
    policy: DispatchPolicy,
    stats: Arc<AtomicSlotStats>,
}

impl Dispatcher {
    pub fn new(policy: DispatchPolicy, stats: Arc<AtomicSlotStats>) -> Self {
        Self { policy, stats }
    }

    /// Invoke `slot` inline, or submit it and return immediately
    pub fn dispatch<Args>(&self, signal: &SignalId, slot: SharedSlot<Args>, args: &Arc<Args>)
    where
        Args: Send + Sync + 'static,
    {
        match self.policy {
            DispatchPolicy::Synchronous => deliver(&self.stats, signal.name(), slot.as_ref(), args),
            DispatchPolicy::Detached => {
                if let Err(e) = self.submit(signal, slot, args) {
                    self.stats.inc_spawn_failures();
                    error!(signal = %signal, error = %e, "Detached slot invocation dropped");
                }
            }
        }
    }

    /// Hand the invocation to an unsupervised task
    ///
    /// Runs on the current tokio runtime's blocking pool when there is one,
    /// on a fresh OS thread otherwise. The handle is dropped: nothing joins
    /// the task and its panics are never observed.
    fn submit<Args>(&self, signal: &SignalId, slot: SharedSlot<Args>, args: &Arc<Args>) -> SlotResult<()>
    where
        Args: Send + Sync + 'static,
    {
        let stats = Arc::clone(&self.stats);
        let args = Arc::clone(args);
        let name = signal.name();
        let task = move || deliver(&stats, name, slot.as_ref(), &args);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                drop(handle.spawn_blocking(task));
            }
            Err(_) => {
                thread::Builder::new()
                    .name(DISPATCH_THREAD_NAME.to_string())
                    .spawn(task)
                    .map_err(SlotError::from)?;
            }
        }

        self.stats.inc_detached();
        trace!(signal = name, "submitted detached slot invocation");
        Ok(())
    }
}

fn deliver<Args: 'static>(stats: &AtomicSlotStats, signal: &'static str, slot: &dyn Slot<Args>, args: &Args) {
    match slot.invoke(args) {
        Delivery::Delivered => {
            stats.inc_invocations();
            trace!(signal, callback = ?slot.callback_id(), "invoked slot");
        }
        Delivery::ReceiverDropped => stats.inc_skipped(),
    }
}
