//! Emitter core: registries and dispatch.
//!
//! The public API from this module is [`Emitter`] and its configuration
//! ([`EmitterConfig`], [`MissingAckPolicy`]).
//!
//! Internal modules:
//! - [`registry`]: sharded event → ordered collection map;
//! - [`entry`]: plain-registry item (bare listener or one-shot wrapper);
//! - [`once`]: self-removing one-shot wrapper;
//! - [`emitter`]: registration, removal, query and dispatch.

mod config;
mod emitter;
mod entry;
mod once;
mod registry;

pub use config::{EmitterConfig, MissingAckPolicy};
pub use emitter::Emitter;
