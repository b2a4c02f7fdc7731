//! # Listener capabilities.
//!
//! The emitter invokes two listener shapes:
//! - [`Listen`] - `call(payload)`, registered with `on` / `once`;
//! - [`AckListen`] - `call(payload, ack)`, registered with `on_ack`.
//!
//! Both are stored as shared handles ([`ListenerRef`], [`AckListenerRef`]) and
//! compared by identity ([`same_listener`], [`same_ack_listener`]).
//!
//! ## Closures
//! [`ListenerFn`] and [`AckListenerFn`] turn a named closure into a listener:
//! ```rust
//! use emitter::{Emitter, ListenerFn};
//!
//! let emitter: Emitter<String> = Emitter::new();
//! emitter.on("greet", ListenerFn::arc("hello", |who: &String| println!("hello {who}")));
//! emitter.emit("greet", &"world".to_string());
//! ```

mod ack;
mod listener;
mod listener_fn;
#[cfg(feature = "logging")]
mod log;

pub use ack::{same_ack_listener, AckListen, AckListenerRef};
pub use listener::{same_listener, Listen, ListenerRef};
pub use listener_fn::{AckListenerFn, ListenerFn};
#[cfg(feature = "logging")]
pub use log::LogListener;
