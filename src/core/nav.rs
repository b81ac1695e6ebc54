//! Active navigation link tracking.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::layout::Section;

/// A menu anchor pointing at a section id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Section id without the leading `#`
    pub target: String,
    pub active: bool,
}

impl NavLink {
    /// Build from an `href` attribute; only in-page anchors qualify.
    pub fn from_href(href: &str) -> Option<Self> {
        anchor_id(href).map(|id| Self { target: id.to_string(), active: false })
    }
}

/// Section id referenced by an in-page `href`, if any.
///
/// A bare `#` references nothing.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Tracks which link is active as the viewport moves
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavTracker {
    links: Vec<NavLink>,
    lookahead: f64,
}

impl NavTracker {
    pub fn new(lookahead: f64) -> Self {
        Self { links: Vec::new(), lookahead }
    }

    pub fn with_links<I, S>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.links = hrefs.into_iter().filter_map(|h| NavLink::from_href(h.as_ref())).collect();
        self
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&str> {
        self.links.iter().find(|l| l.active).map(|l| l.target.as_str())
    }

    /// Whether the link pointing at `target` is currently highlighted
    pub fn is_active(&self, target: &str) -> bool {
        self.links.iter().any(|l| l.active && l.target == target)
    }

    /// Recompute the active link for a scroll offset.
    ///
    /// Returns the newly active section id when the selection changed. If no
    /// section contains the probe point the previous selection persists. A
    /// section without a link of its own clears every link.
    pub fn update(&mut self, sections: &[Section], scroll_y: f64) -> Option<String> {
        let probe = scroll_y + self.lookahead;
        let hit = sections.iter().rev().find(|s| s.contains(probe))?;

        if self.active() == Some(hit.id.as_str()) {
            return None;
        }
        for link in &mut self.links {
            link.active = link.target == hit.id;
        }
        debug!(section = %hit.id, probe, "nav: active section changed");
        Some(hit.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 600.0),
            Section::new("projects", 1400.0, 1000.0),
        ]
    }

    fn tracker() -> NavTracker {
        NavTracker::new(100.0).with_links(["#home", "#about", "#projects", "resume.pdf"])
    }

    #[test]
    fn external_links_are_ignored() {
        assert_eq!(tracker().links().len(), 3);
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("#about"), Some("about"));
        assert_eq!(anchor_id("https://x.dev/#a"), None);
    }

    #[test]
    fn lookahead_shifts_the_boundary() {
        let mut nav = tracker();
        assert_eq!(nav.update(&sections(), 699.0).as_deref(), Some("home"));
        assert_eq!(nav.update(&sections(), 700.0).as_deref(), Some("about"));
        assert_eq!(nav.active(), Some("about"));
    }

    #[test]
    fn exactly_one_link_active() {
        let mut nav = tracker();
        for y in (0..2300).step_by(37) {
            nav.update(&sections(), y as f64);
            assert_eq!(nav.links().iter().filter(|l| l.active).count(), 1, "y = {y}");
        }
    }

    #[test]
    fn gap_keeps_previous_selection() {
        let gapped = vec![Section::new("home", 200.0, 300.0), Section::new("about", 900.0, 300.0)];
        let mut nav = tracker();

        // before first section
        assert_eq!(nav.update(&gapped, 0.0), None);
        assert_eq!(nav.active(), None);

        nav.update(&gapped, 150.0);
        assert_eq!(nav.active(), Some("home"));
        assert_eq!(nav.update(&gapped, 600.0), None);
        assert_eq!(nav.active(), Some("home"));
    }

    #[test]
    fn unlinked_section_clears_every_link() {
        let sections = vec![
            Section::new("home", 0.0, 600.0),
            Section::new("stats", 600.0, 400.0),
            Section::new("about", 1000.0, 600.0),
        ];
        let mut nav = NavTracker::new(100.0).with_links(["#home", "#about"]);

        nav.update(&sections, 0.0);
        assert!(nav.is_active("home"));

        assert_eq!(nav.update(&sections, 800.0).as_deref(), Some("stats"));
        assert_eq!(nav.active(), None);
        assert!(nav.links().iter().all(|l| !l.active));
        assert!(!nav.is_active("home"));

        nav.update(&sections, 1200.0);
        assert!(nav.is_active("about"));
    }

    #[test]
    fn unchanged_selection_reports_nothing() {
        let mut nav = tracker();
        assert!(nav.update(&sections(), 10.0).is_some());
        assert!(nav.update(&sections(), 20.0).is_none());
    }
}
