/*!
 * Removal Filter
 * Selects which bindings an unbind removes
 */

use crate::slots::{CallbackId, ObjectId};

/// Removal predicate, chosen by which identities were supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalFilter {
    /// Neither identity given; matches nothing
    Nothing,
    /// Every binding of this callable, whatever its receiver
    Callback(CallbackId),
    /// Every binding on this receiver, across all signals
    Object(ObjectId),
    /// Bindings of this callable on this receiver
    Exact(ObjectId, CallbackId),
}

impl RemovalFilter {
    pub fn new(object: Option<ObjectId>, callback: Option<CallbackId>) -> Self {
        match (object, callback) {
            (None, None) => RemovalFilter::Nothing,
            (None, Some(callback)) => RemovalFilter::Callback(callback),
            (Some(object), None) => RemovalFilter::Object(object),
            (Some(object), Some(callback)) => RemovalFilter::Exact(object, callback),
        }
    }

    #[inline]
    pub fn matches(&self, object: Option<ObjectId>, callback: CallbackId) -> bool {
        match *self {
            RemovalFilter::Nothing => false,
            RemovalFilter::Callback(target) => callback == target,
            RemovalFilter::Object(target) => object == Some(target),
            RemovalFilter::Exact(target_object, target_callback) => {
                object == Some(target_object) && callback == target_callback
            }
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, RemovalFilter::Nothing)
    }
}
