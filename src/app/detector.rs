use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::domain::{
    DetectionEvent, DetectionResult, DetectorConfig, DomainError, SortedThresholds,
};
use crate::ports::{ResizeNotifier, SubscriptionId, ViewportQuery};

const EVENT_CHANNEL_CAPACITY: usize = 16;

struct DetectorState {
    config: DetectorConfig,
    thresholds: SortedThresholds,
    subscription: Option<SubscriptionId>,
    result: DetectionResult,
}

/// Reactive screen-category and orientation detector.
///
/// Built over two injected host capabilities: a [`ViewportQuery`] for reading
/// dimensions and a [`ResizeNotifier`] for resize notifications. The detector
/// computes its output once at construction; with live detection enabled it
/// also recomputes on every resize notification. Consumers read the current
/// output via [`current`](ScreenDetector::current) or follow changes through
/// the broadcast channel returned by [`subscribe`](ScreenDetector::subscribe).
pub struct ScreenDetector {
    viewport: Arc<dyn ViewportQuery>,
    resize: Arc<dyn ResizeNotifier>,
    state: RwLock<DetectorState>,
    events: broadcast::Sender<DetectionEvent>,
}

impl ScreenDetector {
    /// Build a detector and populate its initial output.
    ///
    /// Fails with `InvalidConfiguration` on an empty breakpoint set and with
    /// `EnvironmentUnavailable` when the viewport cannot be queried; no
    /// partial detector is produced in either case.
    pub fn new(
        config: DetectorConfig,
        viewport: Arc<dyn ViewportQuery>,
        resize: Arc<dyn ResizeNotifier>,
    ) -> Result<Arc<Self>, DomainError> {
        let thresholds = SortedThresholds::derive(&config.breakpoints)?;

        let size = viewport.size()?;
        let result = DetectionResult {
            screen: thresholds.select(size.width),
            landscape: size.is_landscape(),
        };

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let live_detection = config.live_detection;

        let detector = Arc::new(Self {
            viewport,
            resize,
            state: RwLock::new(DetectorState {
                config,
                thresholds,
                subscription: None,
                result,
            }),
            events,
        });

        if live_detection {
            Self::attach(&detector);
        }

        info!(
            screen = %result.screen,
            landscape = result.landscape,
            live_detection,
            "ScreenDetector initialized"
        );

        Ok(detector)
    }

    /// Register the resize callback. The callback holds a weak reference, so
    /// a dropped detector never reacts to a late notification.
    fn attach(detector: &Arc<Self>) {
        let weak: Weak<Self> = Arc::downgrade(detector);
        let id = detector.resize.subscribe(Box::new(move || {
            if let Some(detector) = weak.upgrade() {
                if let Err(e) = detector.refresh() {
                    warn!(error = %e, "Refresh on resize notification failed");
                }
            }
        }));
        detector.state.write().subscription = Some(id);
    }

    /// Re-read the viewport and recompute category and orientation.
    ///
    /// Emits a [`DetectionEvent::Refreshed`] to subscribers on success.
    /// Idempotent for unchanged viewport dimensions.
    pub fn refresh(&self) -> Result<DetectionResult, DomainError> {
        self.recompute(false)
    }

    fn recompute(&self, reconfigured: bool) -> Result<DetectionResult, DomainError> {
        let size = self.viewport.size()?;

        let result = {
            let mut state = self.state.write();
            let result = DetectionResult {
                screen: state.thresholds.select(size.width),
                landscape: size.is_landscape(),
            };
            state.result = result;
            result
        };

        debug!(
            width = size.width,
            height = size.height,
            screen = %result.screen,
            landscape = result.landscape,
            "Detection recomputed"
        );

        let event = if reconfigured {
            DetectionEvent::Reconfigured { result }
        } else {
            DetectionEvent::Refreshed { result }
        };
        let _ = self.events.send(event);

        Ok(result)
    }

    /// Replace the breakpoint set and live-detection flag.
    ///
    /// Tears down any existing resize subscription, recomputes the output,
    /// then re-subscribes iff live detection is enabled, in that order, so
    /// repeated reconfiguration never accumulates subscriptions.
    pub fn reconfigure(self: &Arc<Self>, config: DetectorConfig) -> Result<(), DomainError> {
        let thresholds = SortedThresholds::derive(&config.breakpoints)?;

        let old = self.state.write().subscription.take();
        if let Some(id) = old {
            self.resize.unsubscribe(id);
        }

        let live_detection = config.live_detection;
        {
            let mut state = self.state.write();
            state.thresholds = thresholds;
            state.config = config;
        }

        self.recompute(true)?;

        if live_detection {
            Self::attach(self);
        }

        info!(live_detection, "ScreenDetector reconfigured");
        Ok(())
    }

    /// The last computed output.
    pub fn current(&self) -> DetectionResult {
        self.state.read().result
    }

    /// The active configuration.
    pub fn config(&self) -> DetectorConfig {
        self.state.read().config.clone()
    }

    /// Subscribe to detection events.
    pub fn subscribe(&self) -> broadcast::Receiver<DetectionEvent> {
        self.events.subscribe()
    }
}

impl std::fmt::Debug for ScreenDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenDetector").finish_non_exhaustive()
    }
}

impl Drop for ScreenDetector {
    fn drop(&mut self) {
        if let Some(id) = self.state.get_mut().subscription.take() {
            self.resize.unsubscribe(id);
            debug!("Resize subscription released");
        }
    }
}
