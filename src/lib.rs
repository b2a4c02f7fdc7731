//! # emitter
//!
//! **emitter** is a small, thread-safe, in-process event emitter.
//!
//! Callers register listeners under an event name and later trigger them
//! synchronously with a payload. A second, independent registry holds
//! acknowledgement-capable listeners, which also receive a caller-supplied
//! acknowledgement handle.
//!
//! ## Architecture
//! ```text
//!   on / once / remove_*            on_ack / remove_ack_*
//!          │                                │
//!          ▼                                ▼
//! ┌──────────────────────┐       ┌──────────────────────┐
//! │  listener registry   │       │    ack registry      │
//! │  DashMap<event,Vec>  │       │  DashMap<event,Vec>  │
//! │  [l1, l2, once(l3)]  │       │  [a1, a2]            │
//! └──────────┬───────────┘       └──────────┬───────────┘
//!            │ snapshot                     │ snapshot
//!            ▼                              ▼
//!   emit(event, &payload)        emit_ack(event, &payload, &ack)
//!     l1(p) → l2(p) → l3(p)        a1(p, ack) → a2(p, ack)
//! ```
//!
//! ## Features
//! | Area              | Description                                                | Key types / traits                       |
//! |-------------------|------------------------------------------------------------|------------------------------------------|
//! | **Emitter**       | Registration, removal, queries, synchronous dispatch.      | [`Emitter`]                              |
//! | **Listeners**     | Listener capabilities and closure wrappers.                | [`Listen`], [`AckListen`], [`ListenerFn`] |
//! | **Errors**        | Strict ack dispatch and panic-isolated dispatch.           | [`EmitterError`]                         |
//! | **Configuration** | Missing-ack policy and registry sizing.                    | [`EmitterConfig`], [`MissingAckPolicy`]  |
//!
//! ## Optional features
//! - `logging`: exports [`LogListener`], a listener that records payloads via `tracing`.
//!
//! ## Logging
//! The crate emits `tracing` records (`debug` for registration and removal,
//! `trace` for dispatch, `warn` for caught listener panics). Install any
//! subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use emitter::{Emitter, ListenerFn, ListenerRef};
//!
//! let greetings = Arc::new(AtomicUsize::new(0));
//! let g = greetings.clone();
//! let greet: ListenerRef<str> = ListenerFn::arc("greet", move |name: &str| {
//!     println!("hello {name}");
//!     g.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! let emitter: Emitter<str> = Emitter::new();
//! emitter.once("join", greet.clone());
//! emitter.emit("join", "ann").emit("join", "bob");
//!
//! assert_eq!(greetings.load(Ordering::Relaxed), 1);
//! assert!(!emitter.has_listeners("join"));
//! ```
mod core;
mod error;
mod listeners;

// ---- Public re-exports ----

pub use crate::core::{Emitter, EmitterConfig, MissingAckPolicy};
pub use error::EmitterError;
pub use listeners::{
    same_ack_listener, same_listener, AckListen, AckListenerFn, AckListenerRef, Listen,
    ListenerFn, ListenerRef,
};

// Optional: expose a simple built-in logging listener.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
