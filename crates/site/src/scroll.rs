//! Scroll-driven effects: sticky header state, anchor offsets, scroll-spy, reveal stagger.

use std::time::Duration;

/// Header switches to its compact "scrolled" style past this offset (px).
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
/// Fixed header height subtracted from smooth-scroll targets (px).
pub const HEADER_OFFSET: f64 = 80.0;
/// Sections count as active this far (px) before their top reaches the viewport top.
pub const SPY_LEAD: f64 = 100.0;

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Absolute scroll position for an in-page anchor, given the target's viewport-relative top.
pub fn anchor_scroll_target(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - HEADER_OFFSET
}

/// A page section with an id, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        let top = self.offset_top - SPY_LEAD;
        scroll_y > top && scroll_y <= top + self.height
    }
}

/// Id of the section whose nav link should be highlighted; later sections win on overlap.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| s.contains(scroll_y))
        .last()
        .map(|s| s.id.as_str())
}

/// Transition delay for the `index`-th card in a reveal group. Saturates instead of overflowing.
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 600.0),
            Section::new("services", 600.0, 800.0),
            Section::new("contact", 1400.0, 500.0),
        ]
    }

    #[test]
    fn test_header_threshold_is_exclusive() {
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
    }

    #[test]
    fn test_anchor_target_subtracts_header() {
        assert_eq!(anchor_scroll_target(500.0, 200.0), 620.0);
    }

    #[test]
    fn test_active_section_uses_lead_offset() {
        let sections = sections();
        assert_eq!(active_section(&sections, 10.0), Some("home"));
        // 520 is past services' top minus the 100px lead
        assert_eq!(active_section(&sections, 520.0), Some("services"));
        assert_eq!(active_section(&sections, 1300.0), Some("services"));
        assert_eq!(active_section(&sections, 1301.0), Some("contact"));
        assert_eq!(active_section(&sections, 5000.0), None);
    }

    #[test]
    fn test_stagger_delay() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(3, step), Duration::from_millis(300));
    }

    #[test]
    fn test_stagger_delay_saturates_on_huge_index() {
        assert_eq!(stagger_delay(usize::MAX, Duration::MAX), Duration::MAX);
        assert_eq!(
            stagger_delay(usize::MAX, Duration::from_secs(1)),
            Duration::from_secs(u64::from(u32::MAX))
        );
    }
}
