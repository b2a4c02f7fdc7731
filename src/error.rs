//! Error types used by the emitter.
//!
//! The emitter has almost no failure paths: lookups for unknown events are
//! treated as "no listeners". [`EmitterError`] covers the two cases a caller
//! can opt into:
//!
//! - strict acknowledgement dispatch ([`MissingAckPolicy::Reject`](crate::MissingAckPolicy::Reject));
//! - panic-isolating dispatch ([`Emitter::try_emit`](crate::Emitter::try_emit)).
//!
//! Like the rest of the crate, the type provides `as_label` / `as_message`
//! helpers for logs and metrics.

use thiserror::Error;

/// # Errors produced by the emitter.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// Acknowledgement dispatch targeted an event with no ack listeners
    /// while the emitter was configured to reject such calls.
    #[error("no ack listeners registered for event {event:?}")]
    NoAckListeners {
        /// The event that was emitted.
        event: String,
    },

    /// A listener panicked during an isolated dispatch; the remaining
    /// listeners of that pass were skipped.
    #[error("listener {listener:?} panicked on event {event:?}: {info}")]
    ListenerPanicked {
        /// The event being dispatched.
        event: String,
        /// Name of the listener that panicked.
        listener: String,
        /// Panic message (or `"unknown panic"`).
        info: String,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use emitter::EmitterError;
    ///
    /// let err = EmitterError::NoAckListeners { event: "ping".into() };
    /// assert_eq!(err.as_label(), "emitter_no_ack_listeners");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::NoAckListeners { .. } => "emitter_no_ack_listeners",
            EmitterError::ListenerPanicked { .. } => "emitter_listener_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::NoAckListeners { event } => format!("no ack listeners: event={event}"),
            EmitterError::ListenerPanicked {
                event,
                listener,
                info,
            } => format!("listener panicked: event={event} listener={listener} info={info}"),
        }
    }

    /// Returns the event name the error refers to.
    pub fn event(&self) -> &str {
        match self {
            EmitterError::NoAckListeners { event } => event,
            EmitterError::ListenerPanicked { event, .. } => event,
        }
    }
}
