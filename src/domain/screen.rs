use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed screen-size tiers, ordered narrowest to widest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Mobile,
    Tablet,
    Desktop,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Mobile => "mobile",
            Screen::Tablet => "tablet",
            Screen::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_display() {
        assert_eq!(Screen::Mobile.to_string(), "mobile");
        assert_eq!(Screen::Tablet.to_string(), "tablet");
        assert_eq!(Screen::Desktop.to_string(), "desktop");
    }

    #[test]
    fn test_screen_tier_ordering() {
        assert!(Screen::Mobile < Screen::Tablet);
        assert!(Screen::Tablet < Screen::Desktop);
    }
}
