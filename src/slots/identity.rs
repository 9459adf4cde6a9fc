/*!
 * Slot Identities
 * Opaque, equality-only identities for signals, receivers and callbacks
 */

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::Arc;

use super::traits::Signal;

/// Identity of a declared signal
///
/// Derived from the function item type of the signal-declaring method. Every
/// function item has its own zero-sized type, so two identities are equal
/// iff they denote the same declared method (and argument shape).
#[derive(Clone, Copy)]
pub struct SignalId {
    signal: TypeId,
    args: TypeId,
    name: &'static str,
}

impl SignalId {
    /// Identity of `signal`, a signal-declaring method of emitter `E`
    pub fn of<E, Args, S>(signal: S) -> Self
    where
        S: Signal<E, Args>,
        Args: 'static,
    {
        let _ = signal;
        Self {
            signal: TypeId::of::<S>(),
            args: TypeId::of::<Args>(),
            name: type_name::<S>(),
        }
    }

    /// Diagnostic name of the signal method
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for SignalId {
    fn eq(&self, other: &Self) -> bool {
        self.signal == other.signal && self.args == other.args
    }
}

impl Eq for SignalId {}

impl Hash for SignalId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.signal.hash(state);
        self.args.hash(state);
    }
}

impl fmt::Debug for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SignalId").field(&self.name).finish()
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Address of a bound receiver (or of a lambda wrapper)
///
/// Never dereferenced; compared only.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub fn of<T>(ptr: *const T) -> Self {
        Self(ptr as *const () as usize)
    }

    /// Identity of the value behind `receiver`
    pub fn of_arc<R>(receiver: &Arc<R>) -> Self {
        Self::of(Arc::as_ptr(receiver))
    }

    pub fn addr(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({:#x})", self.0)
    }
}

/// Identity of a bound callable
#[derive(Clone, Copy)]
pub enum CallbackId {
    /// A function or method item, identified by its item type
    Item { ty: TypeId, name: &'static str },
    /// Per-binding identity handed to a closure at bind time
    Synthetic(u64),
}

struct ZeroSized<F>(PhantomData<F>);

impl<F> ZeroSized<F> {
    const CHECK: () = assert!(
        std::mem::size_of::<F>() == 0,
        "functions and methods are identified by their item type: pass the fn item itself, not a fn pointer or a capturing closure"
    );
}

impl CallbackId {
    /// Identity of a function or method item
    ///
    /// Fails to compile for callables that carry state (fn pointers,
    /// capturing closures), since their type does not identify them.
    pub fn of<F: 'static>(callable: &F) -> Self {
        let () = ZeroSized::<F>::CHECK;
        let _ = callable;
        CallbackId::Item {
            ty: TypeId::of::<F>(),
            name: type_name::<F>(),
        }
    }

    pub fn synthetic(id: u64) -> Self {
        CallbackId::Synthetic(id)
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, CallbackId::Synthetic(_))
    }
}

impl PartialEq for CallbackId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CallbackId::Item { ty: a, .. }, CallbackId::Item { ty: b, .. }) => a == b,
            (CallbackId::Synthetic(a), CallbackId::Synthetic(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CallbackId {}

impl fmt::Debug for CallbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallbackId::Item { name, .. } => write!(f, "CallbackId({})", name),
            CallbackId::Synthetic(id) => write!(f, "CallbackId(#{})", id),
        }
    }
}
