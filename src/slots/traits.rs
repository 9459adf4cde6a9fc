/*!
 * Slot Traits
 * Typed signal/slot shapes and the type-erased callback capability
 */

use super::identity::{CallbackId, ObjectId};

/// A signal-declaring method of emitter `E` carrying `Args`
///
/// Implemented for every `Fn(&E, A, B, ..)` function item with up to four
/// arguments. `Args` is the argument tuple: `()`, `(A,)`, `(A, B)`, ...
///
/// Arguments are moved into the emission and must be owned: `emit` needs
/// `Args: Send + Sync + 'static`, so a signal cannot take a borrowed
/// argument such as `&str`. Declare `fn hello(&self, message: String)`
/// instead; slots still receive it as `&String`.
pub trait Signal<E, Args>: Copy + 'static {}

/// A free function or closure that can be bound to a signal carrying `Args`
///
/// Slots receive every argument by reference: a signal `fn(&self, String)`
/// binds slots of shape `Fn(&String)`.
pub trait Handler<Args>: Send + Sync + 'static {
    fn call(&self, args: &Args);
}

/// A method of receiver type `R` that can be bound to a signal carrying `Args`
pub trait MethodHandler<R, Args>: Copy + Send + Sync + 'static {
    fn call(&self, receiver: &R, args: &Args);
}

/// Outcome of a single slot invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The callable ran
    Delivered,
    /// The receiver of a method slot was dropped; nothing ran
    ReceiverDropped,
}

/// Type-erased callback wrapper stored in the registry
pub trait Slot<Args>: Send + Sync + 'static {
    /// Address of the bound receiver, if any
    fn object_id(&self) -> Option<ObjectId> {
        None
    }

    /// Identity of the underlying callable
    fn callback_id(&self) -> CallbackId;

    /// Run the callable with `args`
    fn invoke(&self, args: &Args) -> Delivery;
}

macro_rules! impl_slot_arity {
    ($($arg:ident),*) => {
        impl<E, F, $($arg,)*> Signal<E, ($($arg,)*)> for F
        where
            F: Fn(&E $(, $arg)*) + Copy + 'static,
        {
        }

        impl<F, $($arg,)*> Handler<($($arg,)*)> for F
        where
            F: Fn($(&$arg),*) + Send + Sync + 'static,
        {
            #[allow(non_snake_case)]
            fn call(&self, args: &($($arg,)*)) {
                let ($($arg,)*) = args;
                (self)($($arg),*)
            }
        }

        impl<R, F, $($arg,)*> MethodHandler<R, ($($arg,)*)> for F
        where
            F: Fn(&R $(, &$arg)*) + Copy + Send + Sync + 'static,
        {
            #[allow(non_snake_case)]
            fn call(&self, receiver: &R, args: &($($arg,)*)) {
                let ($($arg,)*) = args;
                (self)(receiver $(, $arg)*)
            }
        }
    };
}

impl_slot_arity!();
impl_slot_arity!(A);
impl_slot_arity!(A, B);
impl_slot_arity!(A, B, C);
impl_slot_arity!(A, B, C, D);
