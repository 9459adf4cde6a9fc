/*!
 * Emitter Trait
 * Bind/unbind surface for types that own an ObjectSlots registry
 */

use super::object_slots::ObjectSlots;
use crate::slots::{CallbackId, Handler, MethodHandler, Signal};
use std::sync::Arc;

/// A type that declares signals and owns the registry they are bound in
///
/// Implementors only provide [`Emitter::slots`]. Signals are the
/// implementor's own `&self` methods, which call
/// [`ObjectSlots::emit`] with their own item as the signal:
///
/// ```
/// # use object_slots::{Emitter, ObjectSlots};
/// # #[derive(Default)]
/// # struct Door { slots: ObjectSlots }
/// # impl Emitter for Door { fn slots(&self) -> &ObjectSlots { &self.slots } }
/// impl Door {
///     fn opened(&self, by: String) {
///         self.slots.emit(Self::opened, (by,));
///     }
/// }
/// ```
pub trait Emitter: Sized + 'static {
    fn slots(&self) -> &ObjectSlots;

    fn bind_method<S, Args, R, M>(&self, signal: S, receiver: &Arc<R>, method: M)
    where
        S: Signal<Self, Args>,
        Args: 'static,
        R: Send + Sync + 'static,
        M: MethodHandler<R, Args>,
    {
        self.slots().bind_method(signal, receiver, method)
    }

    fn bind_function<S, Args, F>(&self, signal: S, function: F)
    where
        S: Signal<Self, Args>,
        Args: 'static,
        F: Handler<Args>,
    {
        self.slots().bind_function(signal, function)
    }

    fn bind_closure<S, Args, F>(&self, signal: S, closure: F)
    where
        S: Signal<Self, Args>,
        Args: 'static,
        F: Handler<Args>,
    {
        self.slots().bind_closure(signal, closure)
    }

    fn unbind_method<R, M>(&self, receiver: &Arc<R>, method: M) -> usize
    where
        M: Copy + 'static,
    {
        self.slots().unbind_method(receiver, method)
    }

    fn unbind_function<F>(&self, function: F) -> usize
    where
        F: Copy + 'static,
    {
        self.slots().unbind_function(function)
    }

    fn unbind_object<R>(&self, receiver: &Arc<R>) -> usize {
        self.slots().unbind_object(receiver)
    }

    fn unbind_callback(&self, callback: CallbackId) -> usize {
        self.slots().unbind_callback(callback)
    }
}
