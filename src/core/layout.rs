//! Geometry queries the coordinator needs from the rendering surface.
//!
//! The browser binding answers these from the live DOM; tests answer them
//! from a fixed table.

use serde::{Deserialize, Serialize};

/// A vertically bounded page region tied to one navigation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub trait Layout {
    /// Rendered height of the sticky header
    fn header_height(&self) -> f64;

    /// Sections in document order
    fn sections(&self) -> Vec<Section>;

    /// Document-relative top of the element with this id
    fn element_top(&self, id: &str) -> Option<f64>;
}

/// Static layout table
#[derive(Debug, Clone, Default)]
pub struct FixedLayout {
    pub header_height: f64,
    pub sections: Vec<Section>,
}

impl FixedLayout {
    pub fn new(header_height: f64) -> Self {
        Self { header_height, sections: Vec::new() }
    }

    pub fn with_section(mut self, id: &str, top: f64, height: f64) -> Self {
        self.sections.push(Section::new(id, top, height));
        self
    }

    /// Lay sections end to end starting at `start`
    pub fn stacked(header_height: f64, start: f64, sections: &[(&str, f64)]) -> Self {
        let mut layout = Self::new(header_height);
        let mut top = start;
        for (id, height) in sections {
            layout = layout.with_section(id, top, *height);
            top += height;
        }
        layout
    }
}

impl Layout for FixedLayout {
    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.sections.iter().find(|s| s.id == id).map(|s| s.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_range_is_half_open() {
        let s = Section::new("about", 100.0, 50.0);
        assert!(s.contains(100.0));
        assert!(s.contains(149.9));
        assert!(!s.contains(150.0));
        assert!(!s.contains(99.9));
    }

    #[test]
    fn stacked_sections_are_contiguous() {
        let layout = FixedLayout::stacked(70.0, 0.0, &[("home", 600.0), ("about", 400.0)]);
        assert_eq!(layout.element_top("about"), Some(600.0));
        assert_eq!(layout.element_top("missing"), None);
        assert_eq!(layout.header_height(), 70.0);
    }
}
