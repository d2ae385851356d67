use parking_lot::RwLock;
use tracing::debug;

use crate::adapters::registry::CallbackRegistry;
use crate::domain::{DomainError, ViewportSize};
use crate::ports::{ResizeCallback, ResizeNotifier, SubscriptionId, ViewportQuery};

/// In-process viewport driven programmatically by the host.
///
/// Embedders that already own a size source (a windowing loop, a layout
/// engine) push dimensions in via [`set_size`](SharedViewport::set_size);
/// every registered resize subscriber is then invoked synchronously on the
/// calling thread. Doubles as the test environment for the detector.
pub struct SharedViewport {
    size: RwLock<ViewportSize>,
    registry: CallbackRegistry,
}

impl SharedViewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: RwLock::new(ViewportSize::new(width, height)),
            registry: CallbackRegistry::new(),
        }
    }

    /// Update dimensions and notify all subscribers.
    pub fn set_size(&self, width: u32, height: u32) {
        *self.size.write() = ViewportSize::new(width, height);
        debug!(width, height, "Viewport resized");
        self.registry.notify_all();
    }

    /// Number of active resize subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl ViewportQuery for SharedViewport {
    fn size(&self) -> Result<ViewportSize, DomainError> {
        Ok(*self.size.read())
    }
}

impl ResizeNotifier for SharedViewport {
    fn subscribe(&self, callback: ResizeCallback) -> SubscriptionId {
        self.registry.add(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.registry.remove(id);
    }
}
