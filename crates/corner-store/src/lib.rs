//! Persisted cart state and cross-context sync for CornerShop.
//!
//! A [`CartStore`] pairs the in-memory cart with a [`StorageBackend`]
//! snapshot and a shared [`ChangeBus`]. Commits persist first, then
//! notify local watchers, then announce the write to other contexts; a
//! [`SyncBridge`] on the receiving side queues those announcements and
//! folds them in with a single re-read.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use corner_commerce::money::Money;
//! use corner_store::{CartStore, ChangeBus, MemoryBackend, StorageBackend, SyncBridge, CART_KEY};
//!
//! let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
//! let bus = Arc::new(ChangeBus::new());
//!
//! let mut tab_a = CartStore::open(CART_KEY, Arc::clone(&backend), Arc::clone(&bus));
//! let mut tab_b = CartStore::open(CART_KEY, Arc::clone(&backend), Arc::clone(&bus));
//! let bridge_b = SyncBridge::attach(Arc::clone(&bus), &tab_b);
//!
//! tab_a.add("Arabian Coffee Beans", "p1.png", Money::from_cents(1500), 2);
//!
//! bridge_b.pump(&mut tab_b);
//! assert_eq!(tab_b.cart().item_count(), 2);
//! ```

pub mod backend;
pub mod codec;
pub mod error;
pub mod store;
pub mod sync;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use store::{CartStore, WatcherId, CART_KEY};
pub use sync::{ChangeBus, ContextId, StorageEvent, SubscriberId, SyncBridge};
