//! # One-shot listener wrapper.
//!
//! [`OnceListener`] decorates a listener registered with
//! [`Emitter::once`](crate::Emitter::once). On its first call it unregisters
//! itself from the plain registry and only then forwards the payload, so a
//! re-entrant `emit` from inside the wrapped listener cannot reach it again.
//!
//! ## Ownership
//! ```text
//! Registry ──owns──► Entry::Once(Arc<OnceListener>)
//!    ▲                         │
//!    └────── Weak (no own) ────┘
//! ```
//! The wrapper never keeps the registry alive: once the emitter is dropped the
//! back-reference fails to upgrade and the wrapper just forwards.
//!
//! ## Rules
//! - Fires at most once, even if several snapshots (concurrent or re-entrant
//!   dispatches) captured it before it was removed.
//! - Removes exactly itself (by identity), never another wrapper around the
//!   same listener.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use crate::core::entry::Entry;
use crate::core::registry::Registry;
use crate::listeners::{Listen, ListenerRef};

/// Listener that removes itself from its event before its first invocation.
pub(crate) struct OnceListener<P: ?Sized + 'static> {
    event: String,
    inner: ListenerRef<P>,
    fired: AtomicBool,
    registry: Weak<Registry<Entry<P>>>,
}

impl<P: ?Sized + 'static> OnceListener<P> {
    pub(crate) fn new(
        event: &str,
        inner: ListenerRef<P>,
        registry: &Arc<Registry<Entry<P>>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            event: event.to_owned(),
            inner,
            fired: AtomicBool::new(false),
            registry: Arc::downgrade(registry),
        })
    }

    /// The listener this wrapper forwards to.
    pub(crate) fn inner(&self) -> &ListenerRef<P> {
        &self.inner
    }
}

impl<P: ?Sized + 'static> Listen<P> for OnceListener<P> {
    fn call(&self, payload: &P) {
        if self.fired.swap(true, Ordering::AcqRel) {
            return;
        }

        if let Some(registry) = self.registry.upgrade() {
            let me: *const Self = self;
            registry.remove_first(&self.event, |entry| entry.is_once(me));
        }
        tracing::trace!(event = %self.event, listener = self.inner.name(), "once listener fired");

        self.inner.call(payload);
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
