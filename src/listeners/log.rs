//! # LogListener — payload recorder
//!
//! A minimal listener that records every payload it receives through
//! `tracing::info!`. Use it for tests, demos, or to watch an event stream
//! while debugging.
//!
//! ## Example output (fmt subscriber)
//! ```text
//! INFO emitter::listeners::log: event observed listener="chat-log" payload=Message { from: "ann", text: "hi" }
//! ```

use std::borrow::Cow;
use std::fmt::Debug;

use crate::listeners::Listen;

/// Listener that logs each payload with its `Debug` representation.
#[derive(Debug, Clone)]
pub struct LogListener {
    name: Cow<'static, str>,
}

impl LogListener {
    /// Construct a new [`LogListener`] labelled `name` in log records.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for LogListener {
    fn default() -> Self {
        Self::new("LogListener")
    }
}

impl<P> Listen<P> for LogListener
where
    P: Debug + ?Sized,
{
    fn call(&self, payload: &P) {
        tracing::info!(listener = %self.name, payload = ?payload, "event observed");
    }

    fn name(&self) -> &str {
        &self.name
    }
}
