//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the settings an [`Emitter`](crate::Emitter) is
//! created with, and [`MissingAckPolicy`].
//!
//! ## Sentinel values
//! - `shard_amount = 0` → dashmap default shard count
//! - `capacity = 0` → registries start empty and grow on demand

/// What [`Emitter::emit_ack`](crate::Emitter::emit_ack) does when the event has
/// no ack listeners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingAckPolicy {
    /// Treat the call as a no-op, like [`Emitter::emit`](crate::Emitter::emit).
    #[default]
    Ignore,
    /// Fail with [`EmitterError::NoAckListeners`](crate::EmitterError::NoAckListeners).
    Reject,
}

/// Configuration for an [`Emitter`](crate::Emitter).
///
/// ## Field semantics
/// - `missing_ack`: behavior of ack dispatch to an event nobody listens to
/// - `shard_amount`: shard count of each registry map (`0` = default; otherwise
///   rounded up to a power of two, min 2)
/// - `capacity`: initial number of event slots per registry (`0` = none)
#[derive(Clone, Debug, Default)]
pub struct EmitterConfig {
    /// Behavior of `emit_ack` on an event without ack listeners.
    pub missing_ack: MissingAckPolicy,

    /// Number of shards in each registry map.
    ///
    /// More shards reduce contention between threads that register on
    /// different events. `0` keeps the dashmap default.
    pub shard_amount: usize,

    /// Initial event-slot capacity of each registry.
    pub capacity: usize,
}

impl EmitterConfig {
    /// Returns the shard count as an `Option`, normalized for dashmap.
    ///
    /// - `None` → use the default shard count
    /// - `Some(n)` → `n` is a power of two and `>= 2`
    #[inline]
    pub fn shard_amount(&self) -> Option<usize> {
        if self.shard_amount == 0 {
            None
        } else {
            Some(self.shard_amount.max(2).next_power_of_two())
        }
    }

    /// Returns `true` when ack dispatch to a missing event is an error.
    #[inline]
    pub fn rejects_missing_ack(&self) -> bool {
        self.missing_ack == MissingAckPolicy::Reject
    }
}
