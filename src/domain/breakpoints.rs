use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Screen};

/// Mapping from screen tier to minimum width threshold in pixels.
///
/// Supplied by the caller; must contain at least one entry before a detector
/// can be built from it. Validation happens when [`SortedThresholds::derive`]
/// is called, so partially-built sets can exist freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointSet(BTreeMap<Screen, u32>);

impl BreakpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, screen: Screen, width: u32) -> Self {
        self.0.insert(screen, width);
        self
    }

    pub fn insert(&mut self, screen: Screen, width: u32) {
        self.0.insert(screen, width);
    }

    pub fn get(&self, screen: Screen) -> Option<u32> {
        self.0.get(&screen).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Screen, u32)> + '_ {
        self.0.iter().map(|(screen, width)| (*screen, *width))
    }
}

impl FromIterator<(Screen, u32)> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = (Screen, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Breakpoint entries sorted ascending by width threshold.
///
/// Derived from a validated [`BreakpointSet`]; never mutated directly.
/// Entries with equal widths keep tier order (stable sort over a tier-ordered
/// map).
#[derive(Debug, Clone)]
pub struct SortedThresholds {
    entries: Vec<(Screen, u32)>,
}

impl SortedThresholds {
    /// Sort the set ascending by width.
    ///
    /// Returns `InvalidConfiguration` when the set has no entries, so no
    /// detector is ever built over an empty list.
    pub fn derive(set: &BreakpointSet) -> Result<Self, DomainError> {
        if set.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "breakpoint set must contain at least one entry".to_string(),
            ));
        }

        let mut entries: Vec<(Screen, u32)> = set.iter().collect();
        entries.sort_by_key(|&(_, width)| width);

        Ok(Self { entries })
    }

    /// Select the category for a viewport width.
    ///
    /// The result is the largest-width entry whose threshold is strictly less
    /// than `width`. A width equal to a threshold does not select that entry.
    /// When no threshold qualifies, the smallest-width category is returned.
    pub fn select(&self, width: u32) -> Screen {
        let mut selected = self.entries[0].0;
        for &(screen, threshold) in &self.entries {
            if threshold < width {
                selected = screen;
            }
        }
        selected
    }

    /// The fallback category (smallest width threshold).
    pub fn smallest(&self) -> Screen {
        self.entries[0].0
    }

    pub fn entries(&self) -> &[(Screen, u32)] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_set() -> BreakpointSet {
        BreakpointSet::new()
            .with(Screen::Mobile, 0)
            .with(Screen::Tablet, 768)
            .with(Screen::Desktop, 1024)
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = SortedThresholds::derive(&BreakpointSet::new()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_entries_sorted_ascending() {
        // Insert widths that contradict tier order to exercise the sort.
        let set = BreakpointSet::new()
            .with(Screen::Desktop, 100)
            .with(Screen::Mobile, 900)
            .with(Screen::Tablet, 500);

        let sorted = SortedThresholds::derive(&set).unwrap();
        let widths: Vec<u32> = sorted.entries().iter().map(|&(_, w)| w).collect();
        assert_eq!(widths, vec![100, 500, 900]);
        assert_eq!(sorted.smallest(), Screen::Desktop);
    }

    #[test]
    fn test_select_standard_widths() {
        let sorted = SortedThresholds::derive(&standard_set()).unwrap();

        assert_eq!(sorted.select(500), Screen::Mobile);
        assert_eq!(sorted.select(900), Screen::Tablet);
        assert_eq!(sorted.select(1280), Screen::Desktop);
    }

    #[test]
    fn test_select_width_equal_to_threshold_falls_through() {
        let sorted = SortedThresholds::derive(&standard_set()).unwrap();

        // Strict comparison: a width sitting exactly on a threshold selects
        // the next-smaller category.
        assert_eq!(sorted.select(768), Screen::Mobile);
        assert_eq!(sorted.select(1024), Screen::Tablet);
    }

    #[test]
    fn test_select_defaults_to_smallest() {
        let set = BreakpointSet::new()
            .with(Screen::Tablet, 768)
            .with(Screen::Desktop, 1024);
        let sorted = SortedThresholds::derive(&set).unwrap();

        // No threshold strictly below the width: smallest entry wins even
        // though its own threshold does not qualify.
        assert_eq!(sorted.select(300), Screen::Tablet);
        assert_eq!(sorted.select(0), Screen::Tablet);
    }

    #[test]
    fn test_select_single_entry() {
        let set = BreakpointSet::new().with(Screen::Desktop, 1024);
        let sorted = SortedThresholds::derive(&set).unwrap();

        assert_eq!(sorted.select(10), Screen::Desktop);
        assert_eq!(sorted.select(5000), Screen::Desktop);
    }

    #[test]
    fn test_zero_threshold_qualifies_for_any_positive_width() {
        let sorted = SortedThresholds::derive(&standard_set()).unwrap();

        // 0 < 1, so the mobile entry is selected on its own merit.
        assert_eq!(sorted.select(1), Screen::Mobile);
        // 0 < 0 is false: pure fallback.
        assert_eq!(sorted.select(0), Screen::Mobile);
    }

    #[test]
    fn test_breakpoint_set_accessors() {
        let set = standard_set();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.get(Screen::Tablet), Some(768));
        assert_eq!(set.get(Screen::Mobile), Some(0));
    }
}
