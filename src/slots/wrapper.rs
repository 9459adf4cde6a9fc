/*!
 * Callback Wrappers
 * Method, function and lambda slot variants
 */

use super::identity::{CallbackId, ObjectId};
use super::traits::{Delivery, Handler, MethodHandler, Slot};
use std::sync::{Arc, Weak};
use tracing::warn;

/// A method bound to a receiver instance
///
/// Holds a non-owning reference to the receiver. Keeping the receiver alive
/// while it is bound is the caller's business; invoking a slot whose
/// receiver is gone runs nothing.
pub struct MethodSlot<R, M> {
    receiver: Weak<R>,
    object: ObjectId,
    method: M,
    callback: CallbackId,
}

impl<R, M> MethodSlot<R, M>
where
    M: Copy + 'static,
{
    pub fn new(receiver: &Arc<R>, method: M) -> Self {
        Self {
            receiver: Arc::downgrade(receiver),
            object: ObjectId::of_arc(receiver),
            callback: CallbackId::of(&method),
            method,
        }
    }
}

impl<R, M, Args> Slot<Args> for MethodSlot<R, M>
where
    R: Send + Sync + 'static,
    M: MethodHandler<R, Args>,
{
    fn object_id(&self) -> Option<ObjectId> {
        Some(self.object)
    }

    fn callback_id(&self) -> CallbackId {
        self.callback
    }

    fn invoke(&self, args: &Args) -> Delivery {
        match self.receiver.upgrade() {
            Some(receiver) => {
                self.method.call(&receiver, args);
                Delivery::Delivered
            }
            None => {
                warn!(object = ?self.object, callback = ?self.callback, "Receiver dropped, skipping slot");
                Delivery::ReceiverDropped
            }
        }
    }
}

/// A free function (or stateless closure) identified by its item type
pub struct FunctionSlot<F> {
    function: F,
    callback: CallbackId,
}

impl<F: 'static> FunctionSlot<F> {
    pub fn new(function: F) -> Self {
        Self {
            callback: CallbackId::of(&function),
            function,
        }
    }
}

impl<F, Args> Slot<Args> for FunctionSlot<F>
where
    F: Handler<Args>,
{
    fn callback_id(&self) -> CallbackId {
        self.callback
    }

    fn invoke(&self, args: &Args) -> Delivery {
        self.function.call(args);
        Delivery::Delivered
    }
}

/// An owned closure with a per-binding synthetic identity
///
/// Its object identity is the wrapper's own address, so it never matches a
/// real receiver. The synthetic identity is not handed back to the binder,
/// so a lambda binding cannot be removed on its own; it lives as long as
/// the registry that owns it.
pub struct LambdaSlot<F> {
    closure: F,
    callback: CallbackId,
}

impl<F> LambdaSlot<F> {
    pub fn new(closure: F, synthetic_id: u64) -> Self {
        Self {
            closure,
            callback: CallbackId::synthetic(synthetic_id),
        }
    }
}

impl<F, Args> Slot<Args> for LambdaSlot<F>
where
    F: Handler<Args>,
{
    fn object_id(&self) -> Option<ObjectId> {
        Some(ObjectId::of(self as *const Self))
    }

    fn callback_id(&self) -> CallbackId {
        self.callback
    }

    fn invoke(&self, args: &Args) -> Delivery {
        self.closure.call(args);
        Delivery::Delivered
    }
}
