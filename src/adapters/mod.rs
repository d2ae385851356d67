pub mod config_store;
mod registry;
pub mod shared_viewport;
pub mod terminal_viewport;

pub use config_store::TomlConfigStore;
pub use shared_viewport::SharedViewport;
pub use terminal_viewport::TerminalViewport;
