//! Plain-registry entries: a bare listener or a one-shot wrapper.

use std::sync::Arc;

use crate::core::once::OnceListener;
use crate::listeners::{same_listener, Listen, ListenerRef};

/// One slot item in the plain registry.
pub(crate) enum Entry<P: ?Sized + 'static> {
    /// Listener registered with `on`.
    Plain(ListenerRef<P>),
    /// Wrapper registered with `once`.
    Once(Arc<OnceListener<P>>),
}

impl<P: ?Sized + 'static> Clone for Entry<P> {
    fn clone(&self) -> Self {
        match self {
            Entry::Plain(l) => Entry::Plain(Arc::clone(l)),
            Entry::Once(o) => Entry::Once(Arc::clone(o)),
        }
    }
}

impl<P: ?Sized + 'static> Entry<P> {
    pub(crate) fn call(&self, payload: &P) {
        match self {
            Entry::Plain(l) => l.call(payload),
            Entry::Once(o) => o.call(payload),
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Entry::Plain(l) => l.name(),
            Entry::Once(o) => o.name(),
        }
    }

    /// Removal match: the listener itself, or a wrapper around it.
    ///
    /// A handle obtained from `Emitter::listeners` for a wrapper also matches
    /// that wrapper.
    pub(crate) fn matches(&self, listener: &ListenerRef<P>) -> bool {
        match self {
            Entry::Plain(l) => same_listener(l, listener),
            Entry::Once(o) => {
                std::ptr::addr_eq(Arc::as_ptr(o), Arc::as_ptr(listener))
                    || same_listener(o.inner(), listener)
            }
        }
    }

    /// Identity match against a specific wrapper.
    pub(crate) fn is_once(&self, once: *const OnceListener<P>) -> bool {
        matches!(self, Entry::Once(o) if std::ptr::eq(Arc::as_ptr(o), once))
    }

    /// The entry as a listener handle.
    pub(crate) fn to_listener(&self) -> ListenerRef<P> {
        match self {
            Entry::Plain(l) => Arc::clone(l),
            Entry::Once(o) => Arc::clone(o) as ListenerRef<P>,
        }
    }
}
