//! # Listener abstraction.
//!
//! This module defines the [`Listen`] trait (synchronous, one payload) and the
//! shared handle [`ListenerRef`], an `Arc<dyn Listen<P>>` that the emitter stores
//! in its registry.
//!
//! ## Identity
//! Listeners have no identity of their own. Two handles are the same listener
//! when they point at the same allocation (see [`same_listener`]); cloning a
//! [`ListenerRef`] keeps its identity, wrapping the same closure twice does not.

use std::sync::Arc;

/// # Synchronous event listener.
///
/// Invoked by [`Emitter::emit`](crate::Emitter::emit) on the emitting thread with a
/// borrowed payload. A panic inside [`call`](Listen::call) propagates to the caller
/// of `emit` and stops the rest of that dispatch pass.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use emitter::{Emitter, Listen, ListenerRef};
///
/// struct Counter(AtomicUsize);
///
/// impl Listen<str> for Counter {
///     fn call(&self, _payload: &str) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let counter = Arc::new(Counter(AtomicUsize::new(0)));
/// let emitter: Emitter<str> = Emitter::new();
/// emitter.on("tick", counter.clone() as ListenerRef<str>).emit("tick", "now");
/// assert_eq!(counter.0.load(Ordering::Relaxed), 1);
/// ```
pub trait Listen<P: ?Sized>: Send + Sync + 'static {
    /// Handles one emitted payload.
    fn call(&self, payload: &P);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a listener.
pub type ListenerRef<P> = Arc<dyn Listen<P>>;

/// Returns `true` if both handles refer to the same listener allocation.
///
/// Only the data pointer is compared; vtable pointers of the same type may
/// differ between codegen units.
#[inline]
pub fn same_listener<P: ?Sized>(a: &ListenerRef<P>, b: &ListenerRef<P>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
