use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ports::{ResizeCallback, SubscriptionId};

/// Callback registry shared by the resize-notifier adapters.
///
/// Dispatch works on a snapshot: the registry lock is released before any
/// callback runs, so callbacks may freely subscribe, unsubscribe, or drop a
/// detector mid-notification. A callback removed while a notification is in
/// flight may still run once from the snapshot.
#[derive(Default)]
pub(crate) struct CallbackRegistry {
    next_id: AtomicU64,
    subscribers: Mutex<HashMap<SubscriptionId, Arc<ResizeCallback>>>,
}

impl CallbackRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&self, callback: ResizeCallback) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().insert(id, Arc::new(callback));
        id
    }

    /// Removing an unknown id is a no-op.
    pub(crate) fn remove(&self, id: SubscriptionId) {
        self.subscribers.lock().remove(&id);
    }

    /// Invoke every registered callback on the calling thread.
    pub(crate) fn notify_all(&self) {
        let snapshot: Vec<Arc<ResizeCallback>> =
            self.subscribers.lock().values().cloned().collect();
        for callback in snapshot {
            callback();
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_registry_add_remove() {
        let registry = CallbackRegistry::new();
        let id_a = registry.add(Box::new(|| {}));
        let id_b = registry.add(Box::new(|| {}));
        assert_ne!(id_a, id_b);
        assert_eq!(registry.len(), 2);

        registry.remove(id_a);
        assert_eq!(registry.len(), 1);

        // Unknown or repeated removal is harmless.
        registry.remove(id_a);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_notifies_all_subscribers() {
        let registry = CallbackRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let hits = hits.clone();
            registry.add(Box::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            }));
        }

        registry.notify_all();
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_callback_may_unsubscribe_itself_during_notify() {
        let registry = Arc::new(CallbackRegistry::new());
        let id_slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let registry_cb = registry.clone();
        let id_slot_cb = id_slot.clone();
        let id = registry.add(Box::new(move || {
            if let Some(id) = *id_slot_cb.lock() {
                registry_cb.remove(id);
            }
        }));
        *id_slot.lock() = Some(id);

        // Would deadlock if the registry lock were held during dispatch.
        registry.notify_all();
        assert_eq!(registry.len(), 0);
    }
}
