use serde::{Deserialize, Serialize};

use crate::domain::Screen;

/// Viewport dimensions in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Landscape iff strictly wider than tall. A square viewport is portrait.
    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// Current detector output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    pub screen: Screen,
    pub landscape: bool,
}

/// Events emitted by the detector to its subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DetectionEvent {
    /// Output recomputed, either explicitly or on a resize notification.
    /// Fired after every refresh, whether or not the result changed.
    Refreshed { result: DetectionResult },
    /// Breakpoint set or live-detection flag was replaced.
    Reconfigured { result: DetectionResult },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_strictly_wider() {
        assert!(ViewportSize::new(800, 600).is_landscape());
        assert!(!ViewportSize::new(600, 800).is_landscape());
    }

    #[test]
    fn test_square_viewport_is_portrait() {
        assert!(!ViewportSize::new(700, 700).is_landscape());
    }
}
