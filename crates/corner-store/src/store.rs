//! The persisted cart store.
//!
//! One [`CartStore`] owns the in-memory cart for a single execution
//! context and keeps it in lockstep with the shared snapshot. Every
//! mutation commits in a fixed order: persist the whole snapshot, notify
//! local watchers, then publish a change event for other contexts. A
//! failed write keeps the in-memory change and stays local, so the
//! session remains usable on a read-only profile.

use std::sync::Arc;

use corner_commerce::cart::{Cart, CartTotals, LineItem};
use corner_commerce::money::Money;

use crate::backend::StorageBackend;
use crate::codec;
use crate::sync::{ChangeBus, ContextId, StorageEvent};

/// Storage key the cart snapshot lives under.
pub const CART_KEY: &str = "cart";

/// Handle for removing a registered watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatcherId(usize);

type Watcher = Box<dyn FnMut(&Cart) + Send>;

/// Cart state bound to a storage backend and a change bus.
pub struct CartStore {
    key: String,
    context: ContextId,
    backend: Arc<dyn StorageBackend>,
    bus: Arc<ChangeBus>,
    cart: Cart,
    watchers: Vec<(WatcherId, Watcher)>,
    next_watcher_id: usize,
}

impl CartStore {
    /// Open the store, reading whatever snapshot `key` currently holds.
    ///
    /// An absent or unreadable snapshot opens as an empty cart. Loaded
    /// lines are re-normalized, so duplicate names merge and out-of-range
    /// values clamp exactly as they would on a live add.
    pub fn open(
        key: impl Into<String>,
        backend: Arc<dyn StorageBackend>,
        bus: Arc<ChangeBus>,
    ) -> Self {
        let key = key.into();
        let cart = Self::read_snapshot(backend.as_ref(), &key);
        Self {
            key,
            context: ContextId::next(),
            backend,
            bus,
            cart,
            watchers: Vec::new(),
            next_watcher_id: 0,
        }
    }

    fn read_snapshot(backend: &dyn StorageBackend, key: &str) -> Cart {
        let items = backend
            .load(key)
            .map(|raw| codec::decode(&raw))
            .unwrap_or_default();
        Cart::from_items(items)
    }

    /// The storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// This store's context identity on the change bus.
    pub fn context(&self) -> ContextId {
        self.context
    }

    /// The current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Derived totals for the current contents.
    pub fn aggregates(&self) -> CartTotals {
        CartTotals::compute(&self.cart.items)
    }

    /// Register a watcher called after every contents change.
    pub fn on_change<F>(&mut self, watcher: F) -> WatcherId
    where
        F: FnMut(&Cart) + Send + 'static,
    {
        let id = WatcherId(self.next_watcher_id);
        self.next_watcher_id += 1;
        self.watchers.push((id, Box::new(watcher)));
        id
    }

    /// Remove a watcher. Returns false if it was already gone.
    pub fn remove_watcher(&mut self, id: WatcherId) -> bool {
        let before = self.watchers.len();
        self.watchers.retain(|(watcher_id, _)| *watcher_id != id);
        self.watchers.len() < before
    }

    /// Add `quantity` of a product, merging into an existing line by name.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        image: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) {
        self.cart.add(name, image, unit_price, quantity);
        self.commit();
    }

    /// Adjust the quantity of the line at `index` by `delta`, clamping
    /// into the allowed range. Returns false if the index is out of range.
    pub fn set_quantity(&mut self, index: usize, delta: i64) -> bool {
        if !self.cart.set_quantity(index, delta) {
            return false;
        }
        self.commit();
        true
    }

    /// Remove the line at `index`.
    pub fn remove(&mut self, index: usize) -> Option<LineItem> {
        let removed = self.cart.remove(index)?;
        self.commit();
        Some(removed)
    }

    /// Empty the cart, persisting an empty snapshot.
    pub fn clear(&mut self) {
        self.cart.clear();
        self.commit();
    }

    /// Empty the cart and delete the snapshot key outright.
    ///
    /// Used when an order is placed: the next session starts from a clean
    /// slate rather than an explicit empty list.
    pub fn purge(&mut self) {
        self.cart.clear();
        let removed = match self.backend.remove(&self.key) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "failed to delete cart snapshot");
                false
            }
        };
        self.notify();
        if removed {
            self.publish();
        }
    }

    /// Re-read the snapshot, replacing in-memory contents.
    ///
    /// This is the foreign-change path: it never writes and never
    /// publishes, only notifies local watchers.
    pub fn refresh(&mut self) {
        self.cart = Self::read_snapshot(self.backend.as_ref(), &self.key);
        self.notify();
    }

    /// Persist, notify, publish. Watchers always hear about the change;
    /// other contexts only do once the snapshot is actually on disk.
    fn commit(&mut self) {
        let saved = match codec::encode(&self.cart.items) {
            Ok(raw) => match self.backend.save(&self.key, &raw) {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(
                        key = %self.key,
                        %err,
                        "cart snapshot write failed; keeping in-memory state"
                    );
                    false
                }
            },
            Err(err) => {
                tracing::warn!(key = %self.key, %err, "cart snapshot encode failed");
                false
            }
        };

        self.notify();
        if saved {
            self.publish();
        }
    }

    fn notify(&mut self) {
        for (_, watcher) in self.watchers.iter_mut() {
            watcher(&self.cart);
        }
    }

    fn publish(&self) {
        self.bus.publish(&StorageEvent {
            key: self.key.clone(),
            origin: self.context,
        });
    }
}
