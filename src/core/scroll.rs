//! In-page scrolling: anchor destinations and the scroll-to-top control.

use super::layout::Layout;
use super::nav::anchor_id;

/// Where an in-page anchor should scroll to, clearing the sticky header.
/// `None` when the href points at nothing on this page.
pub fn anchor_destination(href: &str, layout: &impl Layout) -> Option<f64> {
    let id = anchor_id(href)?;
    let top = layout.element_top(id)?;
    Some(top - layout.header_height())
}

/// Visibility of the scroll-to-top control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTop {
    threshold: f64,
    visible: bool,
}

impl ScrollTop {
    pub const DESTINATION: f64 = 0.0;

    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    /// Update for a scroll offset; strictly above the threshold shows it.
    pub fn update(&mut self, offset: f64) -> bool {
        self.visible = offset > self.threshold;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::FixedLayout;

    #[test]
    fn destination_clears_header() {
        let layout = FixedLayout::stacked(72.0, 0.0, &[("home", 700.0), ("contact", 500.0)]);
        assert_eq!(anchor_destination("#contact", &layout), Some(628.0));
        assert_eq!(anchor_destination("#home", &layout), Some(-72.0));
    }

    #[test]
    fn missing_target_is_noop() {
        let layout = FixedLayout::stacked(72.0, 0.0, &[("home", 700.0)]);
        assert_eq!(anchor_destination("#blog", &layout), None);
        assert_eq!(anchor_destination("#", &layout), None);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut top = ScrollTop::new(300.0);
        assert!(!top.update(300.0));
        assert!(top.update(300.5));
        assert!(!top.update(0.0));
    }
}
