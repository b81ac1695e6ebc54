//! Sticky header: hide on scroll-down, show on scroll-up, pin at the top.

use serde::{Deserialize, Serialize};

pub const SHADOW_LIGHT: &str = "0 2px 10px rgba(0, 0, 0, 0.3)";
pub const SHADOW_HEAVY: &str = "0 4px 20px rgba(0, 0, 0, 0.5)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Presentational state of the header bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderState {
    /// At the top of the page: visible, light shadow
    Pinned,
    /// Scrolling down: slid out of view
    Hidden,
    /// Scrolling up: visible, heavy shadow
    Shown,
}

impl HeaderState {
    pub fn transform(&self) -> &'static str {
        match self {
            HeaderState::Hidden => "translateY(-100%)",
            HeaderState::Pinned | HeaderState::Shown => "translateY(0)",
        }
    }

    /// Shadow to apply, or `None` to leave the current one untouched
    pub fn shadow(&self) -> Option<&'static str> {
        match self {
            HeaderState::Pinned => Some(SHADOW_LIGHT),
            HeaderState::Shown => Some(SHADOW_HEAVY),
            HeaderState::Hidden => None,
        }
    }
}

/// Last and current scroll offset plus the derived direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub last: f64,
    pub current: f64,
    pub direction: Option<Direction>,
}

impl ScrollState {
    /// Record a new offset and return the header state it implies.
    pub fn advance(&mut self, offset: f64) -> HeaderState {
        self.last = self.current;
        self.current = offset;

        if offset <= 0.0 {
            self.direction = None;
            return HeaderState::Pinned;
        }

        if offset > self.last {
            self.direction = Some(Direction::Down);
            HeaderState::Hidden
        } else {
            self.direction = Some(Direction::Up);
            HeaderState::Shown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_always_pins() {
        let mut state = ScrollState::default();
        state.advance(400.0);
        assert_eq!(state.advance(0.0), HeaderState::Pinned);
        assert_eq!(state.advance(-12.0), HeaderState::Pinned);
        assert_eq!(HeaderState::Pinned.shadow(), Some(SHADOW_LIGHT));
        assert_eq!(HeaderState::Pinned.transform(), "translateY(0)");
    }

    #[test]
    fn direction_follows_delta_sign() {
        let mut state = ScrollState::default();
        let trace = [(50.0, HeaderState::Hidden), (120.0, HeaderState::Hidden),
                     (80.0, HeaderState::Shown), (81.0, HeaderState::Hidden),
                     (81.0, HeaderState::Shown)];
        for (offset, expected) in trace {
            assert_eq!(state.advance(offset), expected, "offset {offset}");
        }
        assert_eq!(state.direction, Some(Direction::Up));
    }

    #[test]
    fn leaving_top_compares_against_zero() {
        let mut state = ScrollState::default();
        state.advance(300.0);
        state.advance(0.0);
        assert_eq!(state.advance(10.0), HeaderState::Hidden);
    }

    #[test]
    fn hidden_keeps_shadow() {
        assert_eq!(HeaderState::Hidden.shadow(), None);
        assert_eq!(HeaderState::Hidden.transform(), "translateY(-100%)");
        assert_eq!(HeaderState::Shown.shadow(), Some(SHADOW_HEAVY));
    }
}
