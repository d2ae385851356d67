pub mod breakpoints;
pub mod config;
pub mod error;
pub mod screen;
pub mod viewport;

pub use breakpoints::{BreakpointSet, SortedThresholds};
pub use config::{DetectorConfig, LoggingConfig, WatchConfig};
pub use error::DomainError;
pub use screen::Screen;
pub use viewport::{DetectionEvent, DetectionResult, ViewportSize};
