pub mod config;
pub mod resize;
pub mod viewport;

pub use config::ConfigStore;
pub use resize::{ResizeCallback, ResizeNotifier, SubscriptionId};
pub use viewport::ViewportQuery;
