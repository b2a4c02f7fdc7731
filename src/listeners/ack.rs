//! # Acknowledgement-capable listeners.
//!
//! [`AckListen`] receives the payload together with an acknowledgement handle
//! supplied by the caller of [`Emitter::emit_ack`](crate::Emitter::emit_ack).
//! The emitter never inspects the handle; acknowledging is a side channel between
//! the listener and whoever issued the handle.

use std::sync::Arc;

/// # Listener invoked with a payload and an acknowledgement handle.
///
/// # Example
/// ```
/// use std::sync::mpsc;
/// use emitter::{AckListenerFn, AckListenerRef, Emitter};
///
/// let emitter: Emitter<str, mpsc::Sender<String>> = Emitter::new();
/// let echo: AckListenerRef<str, mpsc::Sender<String>> =
///     AckListenerFn::arc("echo", |msg: &str, ack: &mpsc::Sender<String>| {
///         let _ = ack.send(format!("got {msg}"));
///     });
/// emitter.on_ack("ping", echo);
///
/// let (tx, rx) = mpsc::channel();
/// emitter.emit_ack("ping", "hello", &tx).unwrap();
/// assert_eq!(rx.recv().unwrap(), "got hello");
/// ```
pub trait AckListen<P: ?Sized, A: ?Sized>: Send + Sync + 'static {
    /// Handles one emitted payload; `ack` is the caller's acknowledgement handle.
    fn call(&self, payload: &P, ack: &A);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to an ack listener.
pub type AckListenerRef<P, A> = Arc<dyn AckListen<P, A>>;

/// Returns `true` if both handles refer to the same ack listener allocation.
#[inline]
pub fn same_ack_listener<P: ?Sized, A: ?Sized>(
    a: &AckListenerRef<P, A>,
    b: &AckListenerRef<P, A>,
) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
