//! Decorative effects: parallax, card tilt, staggered and randomized
//! animation timing. Each produces the CSS value to write; the browser
//! layer does the writing.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";
pub const LOAD_FADE_TRANSITION: &str = "opacity 0.5s ease";

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    format!("translateY({}px)", scroll_y * speed)
}

/// Card rotation for a pointer at `(x, y)` relative to the card's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let (cx, cy) = (width / 2.0, height / 2.0);
        Self {
            rotate_x: (y - cy) / divisor,
            rotate_y: (cx - x) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }
}

pub fn stagger_delay(index: usize, step_s: f64) -> String {
    format!("{}s", index as f64 * step_s)
}

/// Randomized bounce timing for one floating badge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BadgeAnimation {
    pub duration_s: f64,
    pub delay_s: f64,
}

impl BadgeAnimation {
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            duration_s: rng.gen_range(2.0..4.0),
            delay_s: rng.gen_range(0.0..2.0),
        }
    }

    pub fn animation(&self) -> String {
        format!("bounce {}s ease-in-out infinite", self.duration_s)
    }

    pub fn delay(&self) -> String {
        format!("{}s", self.delay_s)
    }
}

/// Document loading stage at the moment the page is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Readiness {
    Loading,
    Interactive,
    Complete,
}

impl Readiness {
    /// `load` has already fired, so the fade-in must start now instead of
    /// waiting for an event that will not come.
    pub fn load_fired(self) -> bool {
        matches!(self, Readiness::Complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(400.0, 0.5), "translateY(200px)");
        assert_eq!(parallax_transform(0.0, 0.5), "translateY(0px)");
    }

    #[test]
    fn centred_pointer_has_no_tilt() {
        let tilt = Tilt::from_pointer(150.0, 100.0, 300.0, 200.0, 20.0);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn corner_pointer_tilts_toward_it() {
        let tilt = Tilt::from_pointer(0.0, 0.0, 300.0, 200.0, 20.0);
        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 7.5);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5deg) rotateY(7.5deg) translateY(-10px)"
        );
    }

    #[test]
    fn stagger_is_linear() {
        assert_eq!(stagger_delay(0, 0.05), "0s");
        assert_eq!(stagger_delay(4, 0.05), "0.2s");
    }

    #[test]
    fn late_start_fades_immediately() {
        assert!(Readiness::Complete.load_fired());
        assert!(!Readiness::Interactive.load_fired());
        assert!(!Readiness::Loading.load_fired());
    }

    #[test]
    fn badge_timing_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let badge = BadgeAnimation::sample(&mut rng);
            assert!((2.0..4.0).contains(&badge.duration_s));
            assert!((0.0..2.0).contains(&badge.delay_s));
            assert!(badge.animation().starts_with("bounce "));
            assert!(badge.animation().ends_with("s ease-in-out infinite"));
        }
    }
}
