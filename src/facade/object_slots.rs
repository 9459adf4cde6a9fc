/*!
 * Object Slots
 * Per-emitter bind/unbind/emit surface over the signal table
 */

use super::dispatch::Dispatcher;
use crate::core::SlotConfig;
use crate::monitoring::{AtomicSlotStats, SlotStats};
use crate::registry::{RemovalFilter, SignalTable};
use crate::slots::{
    CallbackId, FunctionSlot, Handler, LambdaSlot, MethodHandler, MethodSlot, ObjectId, SharedSlot,
    Signal, SignalId,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Signal/slot registry owned by one emitter instance
///
/// An emitter embeds one `ObjectSlots` and declares its signals as methods
/// that forward to [`ObjectSlots::emit`]:
///
/// ```
/// use object_slots::{Emitter, ObjectSlots};
///
/// #[derive(Default)]
/// struct Thermometer {
///     slots: ObjectSlots,
/// }
///
/// impl Thermometer {
///     fn changed(&self, celsius: f32) {
///         self.slots.emit(Self::changed, (celsius,));
///     }
/// }
///
/// impl Emitter for Thermometer {
///     fn slots(&self) -> &ObjectSlots {
///         &self.slots
///     }
/// }
///
/// fn on_changed(celsius: &f32) {
///     println!("now {celsius}");
/// }
///
/// let thermometer = Thermometer::default();
/// thermometer.bind_function(Thermometer::changed, on_changed);
/// thermometer.changed(21.5);
/// ```
///
/// Bound receivers are referenced, not owned: unbind them (or let them go
/// and have their slots skipped) before dropping them. Dropping the
/// `ObjectSlots` drops every binding, regardless of detached invocations
/// still pending; those run on their own copy of the slot and may outlive
/// the emitter.
pub struct ObjectSlots {
    table: RwLock<SignalTable>,
    config: SlotConfig,
    dispatcher: Dispatcher,
    stats: Arc<AtomicSlotStats>,
    next_synthetic_id: AtomicU64,
}

impl ObjectSlots {
    /// Registry with build-time policies
    pub fn new() -> Self {
        Self::with_config(SlotConfig::default())
    }

    pub fn with_config(config: SlotConfig) -> Self {
        let stats = Arc::new(AtomicSlotStats::new());
        debug!(?config, "Object slots initialized");
        Self {
            table: RwLock::new(SignalTable::new()),
            config,
            dispatcher: Dispatcher::new(config.dispatch, Arc::clone(&stats)),
            stats,
            next_synthetic_id: AtomicU64::new(1),
        }
    }

    pub fn config(&self) -> SlotConfig {
        self.config
    }

    /// Bind `method` on `receiver` to `signal`
    pub fn bind_method<E, S, Args, R, M>(&self, signal: S, receiver: &Arc<R>, method: M)
    where
        S: Signal<E, Args>,
        Args: 'static,
        R: Send + Sync + 'static,
        M: MethodHandler<R, Args>,
    {
        let slot: SharedSlot<Args> = Arc::new(MethodSlot::new(receiver, method));
        self.store(SignalId::of(signal), slot);
    }

    /// Bind a free function to `signal`
    ///
    /// The function is identified by its item type, so pass the function
    /// itself (`on_changed`), not a `fn` pointer.
    pub fn bind_function<E, S, Args, F>(&self, signal: S, function: F)
    where
        S: Signal<E, Args>,
        Args: 'static,
        F: Handler<Args>,
    {
        let slot: SharedSlot<Args> = Arc::new(FunctionSlot::new(function));
        self.store(SignalId::of(signal), slot);
    }

    /// Bind a closure to `signal`
    ///
    /// The binding gets a synthetic identity nobody else holds, so it cannot
    /// be unbound on its own; it lives until this registry is dropped.
    pub fn bind_closure<E, S, Args, F>(&self, signal: S, closure: F)
    where
        S: Signal<E, Args>,
        Args: 'static,
        F: Handler<Args>,
    {
        let synthetic_id = self.next_synthetic_id.fetch_add(1, Ordering::Relaxed);
        let slot: SharedSlot<Args> = Arc::new(LambdaSlot::new(closure, synthetic_id));
        self.store(SignalId::of(signal), slot);
    }

    /// Remove every binding of `method` on `receiver`
    pub fn unbind_method<R, M>(&self, receiver: &Arc<R>, method: M) -> usize
    where
        M: Copy + 'static,
    {
        self.remove(Some(ObjectId::of_arc(receiver)), Some(CallbackId::of(&method)))
    }

    /// Remove every binding of `function`, on every signal
    ///
    /// Passing a method item removes its bindings on every receiver.
    pub fn unbind_function<F>(&self, function: F) -> usize
    where
        F: Copy + 'static,
    {
        self.remove(None, Some(CallbackId::of(&function)))
    }

    /// Remove every binding on `receiver`, across all signals
    pub fn unbind_object<R>(&self, receiver: &Arc<R>) -> usize {
        self.remove(Some(ObjectId::of_arc(receiver)), None)
    }

    /// Remove every binding whose callable has identity `callback`
    pub fn unbind_callback(&self, callback: CallbackId) -> usize {
        self.remove(None, Some(callback))
    }

    /// Invoke every slot bound to `signal` with `args`, in binding order
    ///
    /// All slots of one emission observe the same argument value. Under
    /// detached dispatch this returns once every invocation is submitted.
    /// Under the thread-safe policy a shared lock is held until then, and a
    /// slot that binds or unbinds on this registry deadlocks.
    ///
    /// Without that lock the list is re-read by index after every slot.
    /// Slots bound during the emission run in it. If a slot unbinds itself
    /// or an earlier slot, the next slot in line shifts onto the position
    /// already visited and does not run this time.
    pub fn emit<E, S, Args>(&self, signal: S, args: Args)
    where
        S: Signal<E, Args>,
        Args: Send + Sync + 'static,
    {
        let id = SignalId::of(signal);
        self.stats.inc_emissions();

        let args = Arc::new(args);
        let guard = self.config.is_thread_safe().then(|| self.table.read_recursive());

        let mut index = 0;
        loop {
            let slot: Option<SharedSlot<Args>> = match &guard {
                Some(table) => table.lookup(&id, index),
                None => self.table.read().lookup(&id, index),
            };
            let Some(slot) = slot else { break };

            self.dispatcher.dispatch(&id, slot, &args);
            index += 1;
        }
    }

    /// Number of signals with at least one bound slot
    pub fn signal_count(&self) -> usize {
        self.table.read().signal_count()
    }

    /// Number of slots bound to `signal`
    pub fn slot_count<E, S, Args>(&self, signal: S) -> usize
    where
        S: Signal<E, Args>,
        Args: 'static,
    {
        self.table.read().slot_count(&SignalId::of(signal))
    }

    /// Activity counters plus current binding gauges
    pub fn stats(&self) -> SlotStats {
        let table = self.table.read();
        SlotStats {
            active_signals: table.signal_count(),
            active_slots: table.total_slots(),
            ..self.stats.snapshot()
        }
    }

    fn store<Args: 'static>(&self, signal: SignalId, slot: SharedSlot<Args>) {
        self.table.write().store(signal, slot);
        self.stats.inc_bound();
    }

    fn remove(&self, object: Option<ObjectId>, callback: Option<CallbackId>) -> usize {
        let removed = self.table.write().remove(RemovalFilter::new(object, callback));
        self.stats.add_unbound(removed);
        removed
    }
}

impl Default for ObjectSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ObjectSlots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table.read();
        f.debug_struct("ObjectSlots")
            .field("config", &self.config)
            .field("signals", &table.signal_count())
            .field("slots", &table.total_slots())
            .finish()
    }
}

impl Drop for ObjectSlots {
    fn drop(&mut self) {
        let table = self.table.get_mut();
        if !table.is_empty() {
            debug!(
                signals = table.signal_count(),
                slots = table.total_slots(),
                "Dropping object slots with live bindings"
            );
        }
    }
}
