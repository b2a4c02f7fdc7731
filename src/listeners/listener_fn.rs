//! # Function-backed listeners (`ListenerFn`, `AckListenerFn`)
//!
//! Both wrap a closure together with a name used in logs. The closure is `Fn`,
//! not `FnMut`: listeners may be called from several threads at once, so any
//! shared state must be explicit (`Arc<Mutex<_>>`, atomics, channels).
//!
//! ## Example
//! ```rust
//! use emitter::{ListenerFn, ListenerRef};
//!
//! let l: ListenerRef<str> = ListenerFn::arc("printer", |msg: &str| println!("{msg}"));
//! assert_eq!(l.name(), "printer");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::listeners::ack::AckListen;
use crate::listeners::listener::Listen;

/// Function-backed listener implementation.
#[derive(Debug)]
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the listener and returns it as a shared handle.
    ///
    /// Every call allocates a new listener identity, even for the same closure.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<P, F> Listen<P> for ListenerFn<F>
where
    P: ?Sized,
    F: Fn(&P) + Send + Sync + 'static,
{
    fn call(&self, payload: &P) {
        (self.f)(payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Function-backed ack listener implementation.
#[derive(Debug)]
pub struct AckListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> AckListenerFn<F> {
    /// Creates a new function-backed ack listener.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the ack listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<P, A, F> AckListen<P, A> for AckListenerFn<F>
where
    P: ?Sized,
    A: ?Sized,
    F: Fn(&P, &A) + Send + Sync + 'static,
{
    fn call(&self, payload: &P, ack: &A) {
        (self.f)(payload, ack)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
