//! Custom cursor: two followers easing toward the pointer every frame.
//!
//! ```text
//! pointer ──► dot      (k = 0.8, tight)
//!        └──► outline  (k = 0.2, trailing)
//!
//! per frame:  p += (pointer - p) * k
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A point exponentially approaching a target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Follower {
    pub pos: Point,
    pub k: f64,
}

impl Follower {
    pub fn new(k: f64) -> Self {
        Self { pos: Point::default(), k }
    }

    pub fn step(&mut self, target: Point) -> Point {
        self.pos.x += (target.x - self.pos.x) * self.k;
        self.pos.y += (target.y - self.pos.y) * self.k;
        self.pos
    }
}

/// Sizes the overlay should render at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorLook {
    pub dot_scale: f64,
    pub outline_size: f64,
}

impl CursorLook {
    pub fn dot_transform(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.dot_scale)
    }

    pub fn outline_px(&self) -> String {
        format!("{}px", self.outline_size)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorState {
    pub pointer: Point,
    pub dot: Follower,
    pub outline: Follower,
    pub hovering: bool,
    rest: CursorLook,
    hover: CursorLook,
}

impl CursorState {
    pub fn new(dot_k: f64, outline_k: f64, rest: CursorLook, hover: CursorLook) -> Self {
        Self {
            pointer: Point::default(),
            dot: Follower::new(dot_k),
            outline: Follower::new(outline_k),
            hovering: false,
            rest,
            hover,
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = Point::new(x, y);
    }

    /// Advance both followers by one frame; returns (dot, outline).
    pub fn frame(&mut self) -> (Point, Point) {
        let target = self.pointer;
        (self.dot.step(target), self.outline.step(target))
    }

    /// Enter or leave an interactive element; returns the look to apply.
    pub fn set_hover(&mut self, hovering: bool) -> CursorLook {
        self.hovering = hovering;
        self.look()
    }

    pub fn look(&self) -> CursorLook {
        if self.hovering { self.hover } else { self.rest }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> CursorState {
        CursorState::new(
            0.8,
            0.2,
            CursorLook { dot_scale: 1.0, outline_size: 40.0 },
            CursorLook { dot_scale: 1.5, outline_size: 60.0 },
        )
    }

    #[test]
    fn followers_decay_geometrically() {
        let mut c = cursor();
        c.pointer_moved(300.0, 400.0);
        let start = Point::default().distance(c.pointer);

        for n in 1..=8 {
            let (dot, outline) = c.frame();
            let dot_expected = start * 0.2f64.powi(n);
            let outline_expected = start * 0.8f64.powi(n);
            assert!((dot.distance(c.pointer) - dot_expected).abs() < 1e-9, "frame {n}");
            assert!((outline.distance(c.pointer) - outline_expected).abs() < 1e-9, "frame {n}");
        }
    }

    #[test]
    fn outline_lags_dot() {
        let mut c = cursor();
        c.pointer_moved(100.0, 0.0);
        let (dot, outline) = c.frame();
        assert!(dot.x > outline.x);
        assert!((dot.x - 80.0).abs() < 1e-9);
        assert!((outline.x - 20.0).abs() < 1e-9);
    }

    #[test]
    fn hover_swaps_look() {
        let mut c = cursor();
        let look = c.set_hover(true);
        assert_eq!(look.dot_transform(), "translate(-50%, -50%) scale(1.5)");
        assert_eq!(look.outline_px(), "60px");

        let look = c.set_hover(false);
        assert_eq!(look.dot_transform(), "translate(-50%, -50%) scale(1)");
        assert_eq!(look.outline_px(), "40px");
    }
}
