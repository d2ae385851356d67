use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::debug;

use crate::adapters::registry::CallbackRegistry;
use crate::domain::{DomainError, ViewportSize};
use crate::ports::{ResizeCallback, ResizeNotifier, SubscriptionId, ViewportQuery};

/// Terminal-backed viewport using crossterm.
///
/// Size queries read the terminal dimensions directly. Resize notifications
/// are pull-driven: the host event loop calls [`pump`](TerminalViewport::pump)
/// to drain crossterm events, and subscribers fire when a resize arrives.
/// Columns and rows stand in for pixels; the selection algorithm only needs
/// widths to be comparable against the configured thresholds.
pub struct TerminalViewport {
    registry: CallbackRegistry,
}

impl TerminalViewport {
    pub fn new() -> Self {
        Self {
            registry: CallbackRegistry::new(),
        }
    }

    /// Poll for one terminal event, dispatching subscribers on resize.
    ///
    /// Returns `Ok(true)` when a resize was observed within the timeout.
    /// Non-resize events are drained and ignored.
    pub fn pump(&self, timeout: Duration) -> Result<bool, DomainError> {
        let ready = event::poll(timeout).map_err(|e| {
            DomainError::EnvironmentUnavailable(format!("terminal event poll failed: {}", e))
        })?;
        if !ready {
            return Ok(false);
        }

        match event::read().map_err(|e| {
            DomainError::EnvironmentUnavailable(format!("terminal event read failed: {}", e))
        })? {
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.registry.notify_all();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Number of active resize subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for TerminalViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportQuery for TerminalViewport {
    fn size(&self) -> Result<ViewportSize, DomainError> {
        let (columns, rows) = terminal::size().map_err(|e| {
            DomainError::EnvironmentUnavailable(format!("terminal size query failed: {}", e))
        })?;
        Ok(ViewportSize::new(u32::from(columns), u32::from(rows)))
    }
}

impl ResizeNotifier for TerminalViewport {
    fn subscribe(&self, callback: ResizeCallback) -> SubscriptionId {
        self.registry.add(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.registry.remove(id);
    }
}
