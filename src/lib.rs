#![forbid(unsafe_code)]

//! Reactive screen-category and orientation detection.
//!
//! Given a mapping from named screen tiers to pixel-width thresholds, a
//! [`ScreenDetector`] derives which tier the current viewport falls into and
//! whether it is in landscape orientation, optionally re-deriving both on
//! every resize notification. The host environment is injected through two
//! ports: [`ports::ViewportQuery`] and [`ports::ResizeNotifier`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use screenwatch::{DetectorConfig, ScreenDetector, SharedViewport};
//!
//! let viewport = Arc::new(SharedViewport::new(1280, 720));
//! let config = DetectorConfig {
//!     live_detection: true,
//!     ..DetectorConfig::default()
//! };
//! let detector = ScreenDetector::new(config, viewport.clone(), viewport.clone()).unwrap();
//!
//! viewport.set_size(500, 800);
//! let result = detector.current();
//! assert_eq!(result.screen.as_str(), "mobile");
//! assert!(!result.landscape);
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use adapters::{SharedViewport, TerminalViewport, TomlConfigStore};
pub use app::ScreenDetector;
pub use domain::{
    BreakpointSet, DetectionEvent, DetectionResult, DetectorConfig, DomainError, LoggingConfig,
    Screen, ViewportSize, WatchConfig,
};
pub use infrastructure::init_logging;
pub use ports::{ConfigStore, ResizeCallback, ResizeNotifier, SubscriptionId, ViewportQuery};
