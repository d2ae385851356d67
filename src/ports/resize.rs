/// Callback invoked by a notifier whenever the viewport dimensions change.
pub type ResizeCallback = Box<dyn Fn() + Send + Sync>;

/// Handle identifying one resize subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Port for the host's resize-notification channel.
///
/// Multiple subscribers may coexist independently; a detector registers at
/// most one. Unsubscription always succeeds, including for ids that were
/// already removed.
pub trait ResizeNotifier: Send + Sync {
    /// Register a callback to run on every resize notification.
    fn subscribe(&self, callback: ResizeCallback) -> SubscriptionId;

    /// Remove a previously registered callback.
    fn unsubscribe(&self, id: SubscriptionId);
}
