//! # Emitter - registration, removal, query and synchronous dispatch.
//!
//! [`Emitter`] owns two independent registries:
//! - plain listeners ([`Listen`]), dispatched by [`emit`](Emitter::emit);
//! - ack listeners ([`AckListen`]), dispatched by [`emit_ack`](Emitter::emit_ack).
//!
//! ## Dispatch
//! ```text
//! emit(event, payload)
//!     │
//!     ├─► snapshot(event) ── clone of [l1, l2, once(l3)], no lock kept
//!     │
//!     ├─► l1.call(payload)
//!     ├─► l2.call(payload)
//!     └─► once(l3).call(payload) ─► remove self ─► l3.call(payload)
//! ```
//!
//! ## Rules
//! - **Synchronous**: listeners run on the emitting thread, in registration order.
//! - **Snapshot**: registrations and removals made during a pass affect the next
//!   pass, never the current one; listeners may re-enter the emitter freely.
//! - **Faults propagate**: a panicking listener unwinds through `emit` and the
//!   rest of the pass is skipped. [`try_emit`](Emitter::try_emit) catches the
//!   panic and reports it as [`EmitterError::ListenerPanicked`] instead.
//! - **Absent events** are "no listeners": no error, no effect.
//! - **Cloning** is cheap and shares the registries.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::core::config::EmitterConfig;
use crate::core::entry::Entry;
use crate::core::once::OnceListener;
use crate::core::registry::Registry;
use crate::error::EmitterError;
use crate::listeners::{same_ack_listener, AckListen, AckListenerRef, Listen, ListenerRef};

/// Thread-safe named-event emitter.
///
/// `P` is the payload type, `A` the acknowledgement handle type used by
/// [`emit_ack`](Emitter::emit_ack). Both are passed by reference and may be
/// unsized (`Emitter<str>`).
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use emitter::{Emitter, ListenerFn, ListenerRef};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let s = seen.clone();
/// let record: ListenerRef<str> = ListenerFn::arc("record", move |msg: &str| {
///     s.lock().unwrap().push(msg.to_string());
/// });
///
/// let emitter: Emitter<str> = Emitter::new();
/// emitter
///     .on("greet", record.clone())
///     .once("greet", record.clone())
///     .emit("greet", "hi")
///     .emit("greet", "again");
///
/// assert_eq!(*seen.lock().unwrap(), ["hi", "hi", "again"]);
/// ```
pub struct Emitter<P: ?Sized + 'static, A: ?Sized + 'static = ()> {
    listeners: Arc<Registry<Entry<P>>>,
    acks: Arc<Registry<AckListenerRef<P, A>>>,
    config: EmitterConfig,
}

impl<P: ?Sized + 'static, A: ?Sized + 'static> Emitter<P, A> {
    /// Creates an emitter with [`EmitterConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration.
    #[must_use]
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            listeners: Arc::new(Registry::new(&config)),
            acks: Arc::new(Registry::new(&config)),
            config,
        }
    }

    /// Returns the configuration this emitter was created with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    // ---------------------------
    // Registration
    // ---------------------------

    /// Appends `listener` to the listeners of `event`.
    ///
    /// The same handle may be registered several times; each registration is a
    /// separate entry and is called separately.
    pub fn on(&self, event: &str, listener: ListenerRef<P>) -> &Self {
        tracing::debug!(event = %event, listener = listener.name(), "listener registered");
        self.listeners.append(event, Entry::Plain(listener));
        self
    }

    /// Appends `listener` to the ack listeners of `event`.
    pub fn on_ack(&self, event: &str, listener: AckListenerRef<P, A>) -> &Self {
        tracing::debug!(event = %event, listener = listener.name(), "ack listener registered");
        self.acks.append(event, listener);
        self
    }

    /// Registers `listener` for the next emission of `event` only.
    ///
    /// The listener is wrapped; the wrapper unregisters itself before
    /// forwarding, so it runs at most once even under re-entrant or concurrent
    /// emits. [`remove_listener`](Self::remove_listener) with the original handle
    /// also removes the wrapper.
    pub fn once(&self, event: &str, listener: ListenerRef<P>) -> &Self {
        tracing::debug!(event = %event, listener = listener.name(), "once listener registered");
        let wrapper = OnceListener::new(event, listener, &self.listeners);
        self.listeners.append(event, Entry::Once(wrapper));
        self
    }

    // ---------------------------
    // Removal
    // ---------------------------

    /// Removes every plain listener of every event. Ack listeners are kept.
    pub fn remove_all_listeners(&self) -> &Self {
        self.listeners.clear();
        tracing::debug!("all listeners removed");
        self
    }

    /// Removes every plain listener of `event`.
    pub fn remove_event(&self, event: &str) -> &Self {
        let removed = self.listeners.remove_event(event);
        tracing::debug!(event = %event, removed, "event listeners removed");
        self
    }

    /// Removes the first registration of `listener` on `event`.
    ///
    /// A one-shot wrapper around `listener` counts as a registration of it.
    /// Later duplicates stay registered. Unknown events and listeners are a no-op.
    pub fn remove_listener(&self, event: &str, listener: &ListenerRef<P>) -> &Self {
        if self.listeners.remove_first(event, |entry| entry.matches(listener)) {
            tracing::debug!(event = %event, listener = listener.name(), "listener removed");
        }
        self
    }

    /// Removes every ack listener of every event. Plain listeners are kept.
    pub fn remove_all_ack_listeners(&self) -> &Self {
        self.acks.clear();
        tracing::debug!("all ack listeners removed");
        self
    }

    /// Removes every ack listener of `event`.
    pub fn remove_ack_event(&self, event: &str) -> &Self {
        let removed = self.acks.remove_event(event);
        tracing::debug!(event = %event, removed, "event ack listeners removed");
        self
    }

    /// Removes the first registration of the ack `listener` on `event`.
    pub fn remove_ack_listener(&self, event: &str, listener: &AckListenerRef<P, A>) -> &Self {
        if self
            .acks
            .remove_first(event, |l| same_ack_listener(l, listener))
        {
            tracing::debug!(event = %event, listener = listener.name(), "ack listener removed");
        }
        self
    }

    // ---------------------------
    // Dispatch
    // ---------------------------

    /// Calls every listener of `event` with `payload`, in registration order.
    ///
    /// A panicking listener unwinds through this call; listeners after it are
    /// not called.
    pub fn emit(&self, event: &str, payload: &P) -> &Self {
        let Some(entries) = self.listeners.snapshot(event) else {
            tracing::trace!(event = %event, "emit without listeners");
            return self;
        };

        tracing::trace!(event = %event, listeners = entries.len(), "emit");
        for entry in &entries {
            entry.call(payload);
        }
        self
    }

    /// Like [`emit`](Self::emit), but a listener panic is caught and returned
    /// as [`EmitterError::ListenerPanicked`]. Listeners after the panicking one
    /// are not called.
    pub fn try_emit(&self, event: &str, payload: &P) -> Result<&Self, EmitterError> {
        let Some(entries) = self.listeners.snapshot(event) else {
            return Ok(self);
        };

        tracing::trace!(event = %event, listeners = entries.len(), "try_emit");
        dispatch_isolated(event, &entries, Entry::name, |entry| entry.call(payload))?;
        Ok(self)
    }

    /// Calls every ack listener of `event` with `payload` and `ack`.
    ///
    /// With no ack listeners registered the call is a no-op, unless the
    /// emitter is configured with [`MissingAckPolicy::Reject`](crate::MissingAckPolicy::Reject),
    /// in which case it fails with [`EmitterError::NoAckListeners`].
    pub fn emit_ack(&self, event: &str, payload: &P, ack: &A) -> Result<&Self, EmitterError> {
        let listeners = self.ack_targets(event)?;

        tracing::trace!(event = %event, listeners = listeners.len(), "emit_ack");
        for listener in &listeners {
            listener.call(payload, ack);
        }
        Ok(self)
    }

    /// Like [`emit_ack`](Self::emit_ack), with the panic isolation of
    /// [`try_emit`](Self::try_emit).
    pub fn try_emit_ack(&self, event: &str, payload: &P, ack: &A) -> Result<&Self, EmitterError> {
        let listeners = self.ack_targets(event)?;

        tracing::trace!(event = %event, listeners = listeners.len(), "try_emit_ack");
        dispatch_isolated(
            event,
            &listeners,
            |l: &AckListenerRef<P, A>| l.name(),
            |l| l.call(payload, ack),
        )?;
        Ok(self)
    }

    fn ack_targets(&self, event: &str) -> Result<Vec<AckListenerRef<P, A>>, EmitterError> {
        match self.acks.snapshot(event) {
            Some(listeners) => Ok(listeners),
            None if self.config.rejects_missing_ack() => {
                tracing::debug!(event = %event, "emit_ack rejected: no ack listeners");
                Err(EmitterError::NoAckListeners {
                    event: event.to_owned(),
                })
            }
            None => {
                tracing::trace!(event = %event, "emit_ack without listeners");
                Ok(Vec::new())
            }
        }
    }

    // ---------------------------
    // Queries
    // ---------------------------

    /// Returns a snapshot of the listeners of `event` (empty if none).
    ///
    /// One-shot registrations appear as their wrapper: calling it consumes the
    /// registration exactly like an emit would.
    pub fn listeners(&self, event: &str) -> Vec<ListenerRef<P>> {
        self.listeners
            .snapshot(event)
            .map(|entries| entries.iter().map(Entry::to_listener).collect())
            .unwrap_or_default()
    }

    /// Returns a snapshot of the ack listeners of `event` (empty if none).
    pub fn ack_listeners(&self, event: &str) -> Vec<AckListenerRef<P, A>> {
        self.acks.snapshot(event).unwrap_or_default()
    }

    /// Returns `true` if `event` has at least one plain listener.
    pub fn has_listeners(&self, event: &str) -> bool {
        self.listeners.has_entries(event)
    }

    /// Returns `true` if `event` has at least one ack listener.
    pub fn has_ack_listeners(&self, event: &str) -> bool {
        self.acks.has_entries(event)
    }

    /// Number of plain registrations for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners.count(event)
    }

    /// Number of ack registrations for `event`.
    pub fn ack_listener_count(&self, event: &str) -> usize {
        self.acks.count(event)
    }

    /// Sorted names of the events that have plain listeners.
    pub fn events(&self) -> Vec<String> {
        self.listeners.events()
    }
}

impl<P: ?Sized + 'static, A: ?Sized + 'static> Default for Emitter<P, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized + 'static, A: ?Sized + 'static> Clone for Emitter<P, A> {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
            acks: Arc::clone(&self.acks),
            config: self.config.clone(),
        }
    }
}

impl<P: ?Sized + 'static, A: ?Sized + 'static> fmt::Debug for Emitter<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("events", &self.listeners.len())
            .field("ack_events", &self.acks.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Calls `call` on each item, stopping at (and reporting) the first panic.
fn dispatch_isolated<T, N, C>(event: &str, items: &[T], name: N, call: C) -> Result<(), EmitterError>
where
    N: Fn(&T) -> &str,
    C: Fn(&T),
{
    for item in items {
        if let Err(panic_err) = panic::catch_unwind(AssertUnwindSafe(|| call(item))) {
            let info = panic_message(&*panic_err);
            let listener = name(item).to_owned();
            tracing::warn!(event = %event, listener = %listener, info = %info, "listener panicked");
            return Err(EmitterError::ListenerPanicked {
                event: event.to_owned(),
                listener,
                info,
            });
        }
    }
    Ok(())
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MissingAckPolicy;
    use crate::listeners::{AckListenerFn, ListenerFn};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::thread;

    type Log = Arc<Mutex<Vec<String>>>;

    fn log() -> Log {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().unwrap().clone()
    }

    fn recorder(log: &Log, tag: &'static str) -> ListenerRef<str> {
        let log = log.clone();
        ListenerFn::arc(tag, move |payload: &str| {
            log.lock().unwrap().push(format!("{tag}:{payload}"));
        })
    }

    fn counter(hits: &Arc<AtomicUsize>) -> ListenerRef<str> {
        let hits = hits.clone();
        ListenerFn::arc("counter", move |_: &str| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_registration_order_is_preserved() {
        let log = log();
        let emitter: Emitter<str> = Emitter::new();
        emitter
            .on("e", recorder(&log, "l1"))
            .on("e", recorder(&log, "l2"))
            .on("e", recorder(&log, "l3"))
            .emit("e", "p");

        assert_eq!(entries(&log), ["l1:p", "l2:p", "l3:p"]);
    }

    #[test]
    fn test_duplicate_registrations_are_called_separately() {
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counter(&hits);
        let emitter: Emitter<str> = Emitter::new();
        emitter.on("e", l.clone()).on("e", l.clone()).emit("e", "p");

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(emitter.listener_count("e"), 2);
    }

    #[test]
    fn test_once_fires_exactly_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();
        emitter.once("e", counter(&hits));
        assert!(emitter.has_listeners("e"));

        emitter.emit("e", "p");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!emitter.has_listeners("e"));

        emitter.emit("e", "p");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_listener_matches_once_wrapper() {
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counter(&hits);
        let emitter: Emitter<str> = Emitter::new();
        emitter.once("e", l.clone()).remove_listener("e", &l).emit("e", "p");

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!emitter.has_listeners("e"));
    }

    #[test]
    fn test_remove_listener_accepts_handle_from_listeners() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();
        emitter.once("e", counter(&hits));

        let wrapper = emitter.listeners("e").remove(0);
        emitter.remove_listener("e", &wrapper).emit("e", "p");

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(!emitter.has_listeners("e"));
    }

    #[test]
    fn test_remove_listener_removes_only_first_match() {
        let log = log();
        let l = recorder(&log, "dup");
        let emitter: Emitter<str> = Emitter::new();
        emitter
            .on("e", l.clone())
            .on("e", recorder(&log, "other"))
            .on("e", l.clone())
            .remove_listener("e", &l)
            .emit("e", "p");

        assert_eq!(entries(&log), ["other:p", "dup:p"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let hits = Arc::new(AtomicUsize::new(0));
        let l = counter(&hits);
        let stranger = counter(&hits);
        let emitter: Emitter<str> = Emitter::new();

        emitter
            .remove_listener("missing", &l)
            .on("e", l.clone())
            .remove_listener("e", &stranger)
            .remove_listener("e", &l)
            .remove_listener("e", &l)
            .remove_event("missing");

        assert!(!emitter.has_listeners("e"));
        assert!(emitter.listeners("e").is_empty());
    }

    #[test]
    fn test_registries_are_independent() {
        let emitter: Emitter<str> = Emitter::new();
        emitter.on_ack("x", AckListenerFn::arc("ack", |_: &str, _: &()| {}));
        assert!(emitter.has_ack_listeners("x"));
        assert!(!emitter.has_listeners("x"));

        emitter.on("y", ListenerFn::arc("plain", |_: &str| {}));
        assert!(emitter.has_listeners("y"));
        assert!(!emitter.has_ack_listeners("y"));
    }

    #[test]
    fn test_remove_all_and_remove_event_keep_acks() {
        let emitter: Emitter<str> = Emitter::new();
        emitter
            .on("a", ListenerFn::arc("a", |_: &str| {}))
            .on("b", ListenerFn::arc("b", |_: &str| {}))
            .on_ack("a", AckListenerFn::arc("ack", |_: &str, _: &()| {}));

        emitter.remove_event("a");
        assert!(!emitter.has_listeners("a"));
        assert!(emitter.has_listeners("b"));

        emitter.remove_all_listeners();
        assert!(emitter.events().is_empty());
        assert!(emitter.has_ack_listeners("a"));
    }

    #[test]
    fn test_concurrent_registration_loses_nothing() {
        const THREADS: usize = 16;
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();

        thread::scope(|s| {
            for _ in 0..THREADS {
                let emitter = &emitter;
                let l = counter(&hits);
                s.spawn(move || {
                    emitter.on("fresh", l);
                });
            }
        });

        assert_eq!(emitter.listener_count("fresh"), THREADS);
        emitter.emit("fresh", "p");
        assert_eq!(hits.load(Ordering::SeqCst), THREADS);
    }

    #[test]
    fn test_concurrent_emits_fire_once_listener_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();
        emitter.once("race", counter(&hits));

        thread::scope(|s| {
            for _ in 0..8 {
                let emitter = &emitter;
                s.spawn(move || {
                    emitter.emit("race", "go");
                });
            }
        });

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!emitter.has_listeners("race"));
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let emitter: Emitter<str> = Emitter::new();
        emitter.emit("nonexistent", "p");
        assert!(emitter.try_emit("nonexistent", "p").is_ok());
        assert!(!emitter.has_listeners("nonexistent"));
    }

    #[test]
    fn test_greet_scenario() {
        let log = log();
        let emitter: Emitter<str> = Emitter::new();
        emitter
            .on("greet", recorder(&log, "l1"))
            .on("greet", recorder(&log, "l2"))
            .once("greet", recorder(&log, "l3"));

        emitter.emit("greet", "hi");
        assert_eq!(entries(&log), ["l1:hi", "l2:hi", "l3:hi"]);

        log.lock().unwrap().clear();
        emitter.emit("greet", "hi");
        assert_eq!(entries(&log), ["l1:hi", "l2:hi"]);
    }

    #[test]
    fn test_reentrant_emit_does_not_refire_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();

        let reentered = Arc::new(AtomicBool::new(false));
        let inner = emitter.clone();
        let flag = reentered.clone();
        emitter.on(
            "e",
            ListenerFn::arc("reenter", move |payload: &str| {
                if !flag.swap(true, Ordering::SeqCst) {
                    inner.emit("e", payload);
                }
            }),
        );
        emitter.once("e", counter(&hits));

        emitter.emit("e", "p");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(emitter.listener_count("e"), 1);

        emitter.remove_all_listeners();
    }

    #[test]
    fn test_mutation_during_dispatch_applies_to_next_pass() {
        let log = log();
        let emitter: Emitter<str> = Emitter::new();
        let late = recorder(&log, "late");
        let victim = recorder(&log, "victim");

        let inner = emitter.clone();
        let (late_h, victim_h) = (late.clone(), victim.clone());
        let mutator: ListenerRef<str> = ListenerFn::arc("mutator", move |_: &str| {
            inner.on("e", late_h.clone());
            inner.remove_listener("e", &victim_h);
        });
        emitter.once("e", mutator).on("e", victim);

        emitter.emit("e", "1");
        assert_eq!(entries(&log), ["victim:1"]);

        emitter.emit("e", "2");
        assert_eq!(entries(&log), ["victim:1", "late:2"]);
    }

    #[test]
    fn test_panicking_listener_aborts_pass() {
        let log = log();
        let emitter: Emitter<str> = Emitter::new();
        emitter
            .on("e", recorder(&log, "before"))
            .on("e", ListenerFn::arc("bomb", |_: &str| panic!("boom")))
            .on("e", recorder(&log, "after"));

        let res = panic::catch_unwind(AssertUnwindSafe(|| {
            emitter.emit("e", "p");
        }));

        assert!(res.is_err());
        assert_eq!(entries(&log), ["before:p"]);
    }

    #[test]
    fn test_try_emit_reports_panic() {
        let log = log();
        let emitter: Emitter<str> = Emitter::new();
        emitter
            .on("e", recorder(&log, "before"))
            .on(
                "e",
                ListenerFn::arc("bomb", |p: &str| panic!("bad payload {p}")),
            )
            .on("e", recorder(&log, "after"));

        let err = emitter.try_emit("e", "p").unwrap_err();
        assert_eq!(
            err,
            EmitterError::ListenerPanicked {
                event: "e".into(),
                listener: "bomb".into(),
                info: "bad payload p".into(),
            }
        );
        assert_eq!(entries(&log), ["before:p"]);
    }

    #[test]
    fn test_emit_ack_passes_handle_in_order() {
        let emitter: Emitter<str, Mutex<Vec<String>>> = Emitter::new();
        for tag in ["a1", "a2"] {
            emitter.on_ack(
                "job",
                AckListenerFn::arc(tag, move |p: &str, ack: &Mutex<Vec<String>>| {
                    ack.lock().unwrap().push(format!("{tag}:{p}"));
                }),
            );
        }

        let acks = Mutex::new(Vec::new());
        emitter.emit_ack("job", "done", &acks).unwrap();
        assert_eq!(*acks.lock().unwrap(), ["a1:done", "a2:done"]);
    }

    #[test]
    fn test_emit_ack_missing_event_policy() {
        let lenient: Emitter<str> = Emitter::new();
        assert!(lenient.emit_ack("none", "p", &()).is_ok());

        let strict: Emitter<str> = Emitter::with_config(EmitterConfig {
            missing_ack: MissingAckPolicy::Reject,
            ..EmitterConfig::default()
        });
        let err = strict.emit_ack("none", "p", &()).unwrap_err();
        assert_eq!(
            err,
            EmitterError::NoAckListeners {
                event: "none".into()
            }
        );
        assert!(strict.try_emit_ack("none", "p", &()).is_err());
    }

    #[test]
    fn test_try_emit_ack_reports_panic() {
        let emitter: Emitter<str> = Emitter::new();
        emitter.on_ack(
            "job",
            AckListenerFn::arc("faulty", |_: &str, _: &()| panic!("no ack")),
        );

        let err = emitter.try_emit_ack("job", "p", &()).unwrap_err();
        assert_eq!(err.as_label(), "emitter_listener_panicked");
        assert_eq!(err.event(), "job");
    }

    #[test]
    fn test_ack_removal_empties_event() {
        let emitter: Emitter<str> = Emitter::new();
        let a: AckListenerRef<str, ()> = AckListenerFn::arc("a", |_: &str, _: &()| {});
        let b: AckListenerRef<str, ()> = AckListenerFn::arc("b", |_: &str, _: &()| {});
        emitter.on_ack("x", a.clone()).on_ack("x", b.clone());
        assert_eq!(emitter.ack_listener_count("x"), 2);

        emitter.remove_ack_listener("x", &a);
        assert_eq!(emitter.ack_listeners("x").len(), 1);
        emitter.remove_ack_listener("x", &b);
        assert!(!emitter.has_ack_listeners("x"));

        emitter.on_ack("y", a).remove_ack_event("y");
        assert!(!emitter.has_ack_listeners("y"));
        emitter.on_ack("z", b).remove_all_ack_listeners();
        assert!(!emitter.has_ack_listeners("z"));
    }

    #[test]
    fn test_listeners_snapshot_is_independent() {
        let emitter: Emitter<str> = Emitter::new();
        let l: ListenerRef<str> = ListenerFn::arc("l", |_: &str| {});
        emitter.on("e", l.clone());

        let snap = emitter.listeners("e");
        emitter.on("e", l.clone()).remove_event("e");

        assert_eq!(snap.len(), 1);
        assert!(crate::listeners::same_listener(&snap[0], &l));
        assert!(emitter.listeners("e").is_empty());
    }

    #[test]
    fn test_once_wrapper_from_snapshot_consumes_registration() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();
        emitter.once("e", counter(&hits));

        let wrapper = emitter.listeners("e").remove(0);
        assert_eq!(wrapper.name(), "counter");
        wrapper.call("direct");
        wrapper.call("again");

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!emitter.has_listeners("e"));
    }

    #[test]
    fn test_once_wrapper_outlives_emitter() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();
        emitter.once("e", counter(&hits));
        let wrapper = emitter.listeners("e").remove(0);
        drop(emitter);

        wrapper.call("late");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_events_lists_sorted_names() {
        let emitter: Emitter<str> = Emitter::new();
        for name in ["tick", "greet", "close"] {
            emitter.on(name, ListenerFn::arc("l", |_: &str| {}));
        }
        emitter.on_ack("ack-only", AckListenerFn::arc("a", |_: &str, _: &()| {}));

        assert_eq!(emitter.events(), ["close", "greet", "tick"]);
    }

    #[test]
    fn test_clone_shares_registries() {
        let hits = Arc::new(AtomicUsize::new(0));
        let emitter: Emitter<str> = Emitter::new();
        let other = emitter.clone();
        other.on("e", counter(&hits));

        emitter.emit("e", "p");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_custom_config_is_kept() {
        let emitter: Emitter<u64> = Emitter::with_config(EmitterConfig {
            shard_amount: 3,
            capacity: 16,
            ..EmitterConfig::default()
        });
        assert_eq!(emitter.config().shard_amount(), Some(4));
        assert!(format!("{emitter:?}").starts_with("Emitter"));
    }

    #[tokio::test]
    async fn test_ack_handle_signals_async_waiter() {
        use tokio::sync::mpsc;

        let emitter: Emitter<u32, mpsc::UnboundedSender<u32>> = Emitter::new();
        emitter.on_ack(
            "square",
            AckListenerFn::arc("square", |n: &u32, ack: &mpsc::UnboundedSender<u32>| {
                let _ = ack.send(n * n);
            }),
        );

        let (tx, mut rx) = mpsc::unbounded_channel();
        emitter.emit_ack("square", &7, &tx).unwrap();
        drop(tx);

        assert_eq!(rx.recv().await, Some(49));
        assert_eq!(rx.recv().await, None);
    }
}
