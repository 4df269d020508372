//! Cross-context change propagation.
//!
//! Several cart stores can share one backing snapshot (think multiple
//! open shop windows over the same profile). After a store commits a
//! write it publishes a [`StorageEvent`] on the shared [`ChangeBus`].
//! Each other context runs a [`SyncBridge`] that queues incoming events
//! and folds them into its store on the next pump. The writing context
//! is excluded from delivery, so a commit can never echo back into the
//! store that made it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::store::CartStore;

/// Identifies one store context (one "tab") on a shared bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

impl ContextId {
    /// Allocate the next context id.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

/// Notification that some context committed a change under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Storage key the write landed under.
    pub key: String,
    /// The context that performed the write.
    pub origin: ContextId,
}

/// Handle for cancelling a bus subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(usize);

type Callback = Arc<dyn Fn(&StorageEvent) + Send + Sync>;

/// Fan-out of storage events to every context except the writer.
#[derive(Default)]
pub struct ChangeBus {
    subscribers: RwLock<Vec<(SubscriberId, ContextId, Callback)>>,
    next_subscriber_id: Mutex<usize>,
}

impl ChangeBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback on behalf of `origin`.
    ///
    /// The callback fires for events published by *other* contexts only.
    pub fn subscribe<F>(&self, origin: ContextId, callback: F) -> SubscriberId
    where
        F: Fn(&StorageEvent) + Send + Sync + 'static,
    {
        let id = {
            let mut guard = self.next_subscriber_id.lock().unwrap();
            let id = SubscriberId(*guard);
            *guard += 1;
            id
        };

        let mut subscribers = self.subscribers.write().unwrap();
        subscribers.push((id, origin, Arc::new(callback)));
        id
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = self.subscribers.write().unwrap();
        let before = subscribers.len();
        subscribers.retain(|(subscriber_id, _, _)| *subscriber_id != id);
        subscribers.len() < before
    }

    /// Deliver an event to all subscribers registered under a different
    /// origin than the event's.
    pub fn publish(&self, event: &StorageEvent) {
        let subscribers = self.subscribers.read().unwrap();
        for (_, origin, callback) in subscribers.iter() {
            if *origin == event.origin {
                continue;
            }
            callback(event);
        }
    }
}

/// Receives foreign cart changes for one store and applies them on demand.
///
/// Events queue in an inbox as they arrive; [`SyncBridge::pump`] drains
/// the queue and performs a single re-read no matter how many writes
/// piled up. Dropping the bridge cancels its subscription.
pub struct SyncBridge {
    bus: Arc<ChangeBus>,
    subscription: SubscriberId,
    inbox: Arc<Mutex<Vec<StorageEvent>>>,
}

impl SyncBridge {
    /// Subscribe to changes of `store`'s key made by other contexts.
    pub fn attach(bus: Arc<ChangeBus>, store: &CartStore) -> Self {
        let inbox: Arc<Mutex<Vec<StorageEvent>>> = Arc::default();

        let key = store.key().to_string();
        let queue = Arc::clone(&inbox);
        let subscription = bus.subscribe(store.context(), move |event| {
            if event.key == key {
                queue.lock().unwrap().push(event.clone());
            }
        });

        Self {
            bus,
            subscription,
            inbox,
        }
    }

    /// Number of queued events not yet folded into the store.
    pub fn pending(&self) -> usize {
        self.inbox.lock().unwrap().len()
    }

    /// Apply queued changes to `store`.
    ///
    /// All pending events coalesce into one [`CartStore::refresh`], which
    /// re-reads the snapshot without writing anything back. Returns true
    /// if a refresh happened.
    pub fn pump(&self, store: &mut CartStore) -> bool {
        let drained = {
            let mut inbox = self.inbox.lock().unwrap();
            std::mem::take(&mut *inbox)
        };
        if drained.is_empty() {
            return false;
        }

        tracing::debug!(events = drained.len(), "folding in external cart changes");
        store.refresh();
        true
    }
}

impl Drop for SyncBridge {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscription);
    }
}
