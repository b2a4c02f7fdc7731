//! # Event registry - concurrent map from event name to ordered listeners.
//!
//! One [`Registry`] backs the plain listeners and another backs the ack
//! listeners; they share this implementation and nothing else.
//!
//! ## Architecture
//! ```text
//! DashMap<String, Vec<T>>   (sharded; each shard has its own RwLock)
//!   "greet" ─► [l1, l2, once(l3)]
//!   "tick"  ─► [l4]
//! ```
//!
//! ## Rules
//! - Slot creation goes through the entry API under the shard lock, so racing
//!   first registrations converge on one slot and no append is lost.
//! - Every mutation of a slot happens under its shard write lock.
//! - Readers get clones ([`Registry::snapshot`]); no lock is held while the
//!   caller works with them, so listeners may re-enter the registry.
//! - A slot emptied by removal is dropped, so an existing slot is never empty.

use dashmap::DashMap;

use crate::core::config::EmitterConfig;

/// Concurrent registry of per-event ordered collections.
pub(crate) struct Registry<T> {
    slots: DashMap<String, Vec<T>>,
}

impl<T: Clone> Registry<T> {
    /// Creates an empty registry sized according to `cfg`.
    pub(crate) fn new(cfg: &EmitterConfig) -> Self {
        let slots = match cfg.shard_amount() {
            Some(shards) => DashMap::with_capacity_and_shard_amount(cfg.capacity, shards),
            None => DashMap::with_capacity(cfg.capacity),
        };
        Self { slots }
    }

    /// Appends `item` to the slot for `event`, creating the slot if absent.
    pub(crate) fn append(&self, event: &str, item: T) {
        if let Some(mut slot) = self.slots.get_mut(event) {
            slot.push(item);
            return;
        }
        self.slots
            .entry(event.to_owned())
            .or_insert_with(Vec::new)
            .push(item);
    }

    /// Removes the first item of `event`'s slot matching `pred`.
    ///
    /// Returns `true` if an item was removed.
    pub(crate) fn remove_first<F>(&self, event: &str, pred: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let emptied = {
            let Some(mut slot) = self.slots.get_mut(event) else {
                return false;
            };
            let Some(pos) = slot.iter().position(&pred) else {
                return false;
            };
            slot.remove(pos);
            slot.is_empty()
        };

        if emptied {
            // Re-checked under the shard lock: a concurrent append may have refilled it.
            self.slots.remove_if(event, |_, slot| slot.is_empty());
        }
        true
    }

    /// Drops the whole slot for `event`; returns how many items it held.
    pub(crate) fn remove_event(&self, event: &str) -> usize {
        self.slots
            .remove(event)
            .map_or(0, |(_, slot)| slot.len())
    }

    /// Drops every slot.
    pub(crate) fn clear(&self) {
        self.slots.clear();
    }

    /// Returns a copy of `event`'s slot, independent of later mutation.
    pub(crate) fn snapshot(&self, event: &str) -> Option<Vec<T>> {
        self.slots.get(event).map(|slot| slot.value().clone())
    }

    /// Returns `true` if `event` has at least one item.
    pub(crate) fn has_entries(&self, event: &str) -> bool {
        self.slots.get(event).is_some_and(|slot| !slot.is_empty())
    }

    /// Returns the number of items registered for `event`.
    pub(crate) fn count(&self, event: &str) -> usize {
        self.slots.get(event).map_or(0, |slot| slot.len())
    }

    /// Returns sorted list of event names with at least one item.
    pub(crate) fn events(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .slots
            .iter()
            .filter(|slot| !slot.value().is_empty())
            .map(|slot| slot.key().clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of events with a slot.
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
