//! Shared cart store.

use std::sync::{Arc, Mutex};

use crate::cart::event::CartEvent;
use crate::cart::model::CartEntry;
use crate::catalog::{CatalogEntry, MediaKind};
use crate::error::Result;
use crate::storage::{KeyValueStorage, keys};
use crate::subscription::{Subscribers, SubscriptionId};

/// The ordered cart and its derived aggregates.
///
/// One shared instance per process; hydrated from the `cart.items` record at
/// construction, and the full sequence is written back after every mutation.
/// Insertion order is preserved and nothing is deduplicated.
pub struct CartStore {
    storage: Arc<dyn KeyValueStorage>,
    entries: Mutex<Vec<CartEntry>>,
    subscribers: Mutex<Subscribers<CartEvent>>,
}

impl CartStore {
    /// Creates the cart store and hydrates it from storage.
    ///
    /// An absent record is an empty cart. A record that fails to decode is
    /// also an empty cart: the failure is logged as a warning and never
    /// surfaces to the caller.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let entries = match storage.get(keys::CART_ITEMS) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<CartEntry>>(&raw) {
                Ok(entries) => {
                    tracing::debug!(count = entries.len(), "restored persisted cart");
                    entries
                }
                Err(err) => {
                    tracing::warn!(%err, "discarding undecodable persisted cart record");
                    Vec::new()
                }
            },
        };

        Self {
            storage,
            entries: Mutex::new(entries),
            subscribers: Mutex::new(Subscribers::new()),
        }
    }

    /// Appends `entry` to the cart as a new line.
    ///
    /// Always succeeds for a well-formed catalog entry: adding the same
    /// entry twice creates two independent lines with distinct `cart_id`s.
    /// The updated sequence is persisted and subscribers are notified before
    /// this returns.
    pub fn add_item(&self, entry: &CatalogEntry, kind: MediaKind) -> Result<CartEntry> {
        let line = CartEntry::new(entry, kind);

        {
            let mut entries = self.entries.lock().expect("cart state lock poisoned");
            entries.push(line.clone());
            self.persist(&entries)?;
        }

        tracing::debug!(cart_id = %line.cart_id, title = %line.entry.title, "cart line added");
        self.publish(&CartEvent::ItemAdded {
            entry: line.clone(),
        });
        Ok(line)
    }

    /// Removes the line whose `cart_id` matches exactly.
    ///
    /// Returns `Ok(false)` and leaves the sequence untouched when no line
    /// matches; an unknown id is not an error and nothing is persisted or
    /// published for it. Removal is by `cart_id` rather than catalog id so
    /// that two lines for the same product stay distinguishable.
    pub fn remove_item(&self, cart_id: &str) -> Result<bool> {
        {
            let mut entries = self.entries.lock().expect("cart state lock poisoned");
            let Some(index) = entries.iter().position(|line| line.cart_id == cart_id) else {
                return Ok(false);
            };
            entries.remove(index);
            self.persist(&entries)?;
        }

        tracing::debug!(%cart_id, "cart line removed");
        self.publish(&CartEvent::ItemRemoved {
            cart_id: cart_id.to_string(),
        });
        Ok(true)
    }

    /// Empties the cart and deletes the persisted record entirely.
    ///
    /// Deleting rather than writing an empty sequence makes a freshly
    /// cleared cart and a never-populated cart indistinguishable at
    /// hydration. Idempotent; clearing an empty cart still completes and
    /// notifies.
    pub fn clear(&self) -> Result<()> {
        {
            let mut entries = self.entries.lock().expect("cart state lock poisoned");
            entries.clear();
            self.storage.remove(keys::CART_ITEMS)?;
        }

        tracing::debug!("cart cleared");
        self.publish(&CartEvent::Cleared);
        Ok(())
    }

    /// Sum of line prices in insertion order. Pure query.
    ///
    /// IEEE-754 double summation; currency-scale values can accumulate the
    /// usual binary rounding, so compare with a tolerance.
    pub fn total_price(&self) -> f64 {
        self.entries
            .lock()
            .expect("cart state lock poisoned")
            .iter()
            .map(CartEntry::price)
            .sum()
    }

    /// Number of lines in the cart. Pure query.
    pub fn item_count(&self) -> usize {
        self.entries.lock().expect("cart state lock poisoned").len()
    }

    /// Snapshot of the cart in insertion order. Pure query.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.entries
            .lock()
            .expect("cart state lock poisoned")
            .clone()
    }

    /// Registers a listener for cart mutations.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        self.subscribers
            .lock()
            .expect("cart subscriber lock poisoned")
            .subscribe(listener)
    }

    /// Removes a previously registered listener.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .lock()
            .expect("cart subscriber lock poisoned")
            .unsubscribe(id)
    }

    // The full sequence is rewritten on every mutation; the record never
    // holds a partial cart.
    fn persist(&self, entries: &[CartEntry]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.storage.set(keys::CART_ITEMS, &raw)
    }

    // Delivered synchronously, after the state lock is released, so
    // listeners can query the store.
    fn publish(&self, event: &CartEvent) {
        self.subscribers
            .lock()
            .expect("cart subscriber lock poisoned")
            .emit(event);
    }
}
