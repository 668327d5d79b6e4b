//! Section registry and the scroll-position to active-section mapping.
//!
//! Everything here is plain data so it can be exercised without a browser;
//! `app::scroll` feeds it live offsets measured from the rendered page.

use std::fmt;

/// Added to the raw scroll offset so a section becomes active slightly before
/// its top reaches the viewport edge (the fixed nav bar covers that strip).
pub const ACTIVATION_OFFSET: f64 = 100.0;

/// Scroll offset past which the back-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    About,
    Projects,
    Skills,
    Experience,
}

impl SectionId {
    /// Page order. Both the nav bar and the rendered anchors come from this.
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: SectionId,
    pub label: &'static str,
}

pub fn nav_items() -> impl Iterator<Item = NavItem> {
    SectionId::ALL.into_iter().map(|section| NavItem {
        section,
        label: section.label(),
    })
}

/// Measured position of a rendered section anchor, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub section: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionLayout {
    pub fn new(section: SectionId, top: f64, height: f64) -> Self {
        Self {
            section,
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

/// The section under `scroll_y`, if any.
///
/// Sections are checked in page order and the first whose band contains the
/// biased offset wins. Sections missing from `layouts` are skipped.
pub fn section_at(scroll_y: f64, layouts: &[SectionLayout]) -> Option<SectionId> {
    let position = scroll_y + ACTIVATION_OFFSET;
    SectionId::ALL.into_iter().find(|id| {
        layouts
            .iter()
            .find(|l| l.section == *id)
            .is_some_and(|l| l.contains(position))
    })
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Remembers the last matched section so gaps and overscroll keep the
/// highlight where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSectionTracker {
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Recomputes the active section, returning `true` if it changed.
    pub fn update(&mut self, scroll_y: f64, layouts: &[SectionLayout]) -> bool {
        match section_at(scroll_y, layouts) {
            Some(next) if next != self.active => {
                self.active = next;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionLayout> {
        vec![
            SectionLayout::new(SectionId::About, 0.0, 1100.0),
            SectionLayout::new(SectionId::Projects, 1100.0, 900.0),
            SectionLayout::new(SectionId::Skills, 2000.0, 500.0),
            SectionLayout::new(SectionId::Experience, 2500.0, 300.0),
        ]
    }

    #[test]
    fn test_anchors_match_nav() {
        let anchors = nav_items().map(|n| n.section.anchor()).collect::<Vec<_>>();
        assert_eq!(anchors, vec!["about", "projects", "skills", "experience"]);
        for id in SectionId::ALL {
            assert_eq!(id.href(), format!("#{id}"));
        }
    }

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!show_scroll_top(0.0));
        assert!(!show_scroll_top(400.0));
        assert!(show_scroll_top(400.5));
        assert!(show_scroll_top(5000.0));
    }

    #[test]
    fn test_section_at_applies_offset() {
        let layouts = page();
        assert_eq!(section_at(0.0, &layouts), Some(SectionId::About));
        // 999 + 100 is still inside About
        assert_eq!(section_at(999.0, &layouts), Some(SectionId::About));
        // 1000 + 100 hits the Projects top exactly
        assert_eq!(section_at(1000.0, &layouts), Some(SectionId::Projects));
        assert_eq!(section_at(1899.0, &layouts), Some(SectionId::Projects));
        assert_eq!(section_at(1900.0, &layouts), Some(SectionId::Skills));
        assert_eq!(section_at(2699.0, &layouts), Some(SectionId::Experience));
        assert_eq!(section_at(2700.0, &layouts), None);
    }

    #[test]
    fn test_every_offset_in_band_maps_to_section() {
        let layouts = page();
        for layout in &layouts {
            let start = (layout.top - ACTIVATION_OFFSET).max(0.0) as i64;
            let end = (layout.top + layout.height - ACTIVATION_OFFSET) as i64;
            for s in (start..end).step_by(37) {
                assert_eq!(section_at(s as f64, &layouts), Some(layout.section));
            }
        }
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let layouts = vec![
            SectionLayout::new(SectionId::About, 0.0, 1100.0),
            SectionLayout::new(SectionId::Skills, 2000.0, 500.0),
        ];
        assert_eq!(section_at(1500.0, &layouts), None);
        assert_eq!(section_at(2000.0, &layouts), Some(SectionId::Skills));
        assert_eq!(section_at(0.0, &[]), None);
    }

    #[test]
    fn test_tracker_retains_last_match() {
        let layouts = vec![
            SectionLayout::new(SectionId::About, 0.0, 1100.0),
            SectionLayout::new(SectionId::Projects, 1100.0, 900.0),
        ];
        let mut tracker = ActiveSectionTracker::new();
        assert_eq!(tracker.active(), SectionId::About);

        assert!(tracker.update(1200.0, &layouts));
        assert_eq!(tracker.active(), SectionId::Projects);

        // nothing defined down here
        assert!(!tracker.update(3000.0, &layouts));
        assert_eq!(tracker.active(), SectionId::Projects);

        // same section again is not a change
        assert!(!tracker.update(1300.0, &layouts));

        assert!(tracker.update(10.0, &layouts));
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_layout_order_does_not_matter() {
        let mut layouts = page();
        layouts.reverse();
        assert_eq!(section_at(1200.0, &layouts), Some(SectionId::Projects));
    }
}
