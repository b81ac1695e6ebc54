//! Coordinator configuration
//!
//! Every tuning constant the behaviors use lives here. Defaults match the
//! stylesheet the page ships with; the browser host can override any subset
//! by passing JSON to `FolioPage.withConfig`.

use serde::{Deserialize, Serialize};

use super::error::{FolioError, FolioResult};

/// Coordinator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorConfig {
    /// Margin added to the scroll offset when picking the active section
    pub nav_lookahead: f64,
    /// Trailing quiet period for the active-section recomputation
    pub nav_debounce_ms: u32,
    /// Fraction of an element that must be visible before it reveals
    pub reveal_threshold: f64,
    /// Intersection root margin (CSS shorthand)
    pub reveal_root_margin: String,
    /// Delay before the subtitle starts typing
    pub typing_delay_ms: u32,
    /// Interval between typed characters
    pub typing_interval_ms: u32,
    /// Smoothing factor for the cursor dot
    pub dot_smoothing: f64,
    /// Smoothing factor for the cursor outline
    pub outline_smoothing: f64,
    /// Dot scale while hovering an interactive element
    pub dot_hover_scale: f64,
    /// Outline diameter at rest, px
    pub outline_size: f64,
    /// Outline diameter while hovering, px
    pub outline_hover_size: f64,
    /// Scroll offset above which the scroll-to-top control shows
    pub scroll_top_threshold: f64,
    /// Hero parallax factor
    pub parallax_speed: f64,
    /// Divisor turning pointer offset into card tilt degrees
    pub tilt_divisor: f64,
    /// Stagger between consecutive skill-tag animations, seconds
    pub skill_tag_stagger_s: f64,
    /// Delay before the page fades in after load
    pub load_fade_delay_ms: u32,
    /// Tick interval for counter animations
    pub counter_tick_ms: u32,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            nav_lookahead: 100.0,
            nav_debounce_ms: 10,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".into(),
            typing_delay_ms: 500,
            typing_interval_ms: 100,
            dot_smoothing: 0.8,
            outline_smoothing: 0.2,
            dot_hover_scale: 1.5,
            outline_size: 40.0,
            outline_hover_size: 60.0,
            scroll_top_threshold: 300.0,
            parallax_speed: 0.5,
            tilt_divisor: 20.0,
            skill_tag_stagger_s: 0.05,
            load_fade_delay_ms: 100,
            counter_tick_ms: 16,
        }
    }
}

impl CoordinatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from JSON. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_nav_lookahead(mut self, px: f64) -> Self { self.nav_lookahead = px; self }
    pub fn with_nav_debounce_ms(mut self, ms: u32) -> Self { self.nav_debounce_ms = ms; self }
    pub fn with_typing(mut self, delay_ms: u32, interval_ms: u32) -> Self {
        self.typing_delay_ms = delay_ms;
        self.typing_interval_ms = interval_ms;
        self
    }
    pub fn with_smoothing(mut self, dot: f64, outline: f64) -> Self {
        self.dot_smoothing = dot;
        self.outline_smoothing = outline;
        self
    }
    pub fn with_scroll_top_threshold(mut self, px: f64) -> Self { self.scroll_top_threshold = px; self }
    pub fn with_parallax_speed(mut self, speed: f64) -> Self { self.parallax_speed = speed; self }

    /// Time after startup at which subtitle character `index` appears.
    /// The first one lands on the delay itself, the rest follow at the interval.
    pub fn typing_char_due_ms(&self, index: u32) -> u32 {
        self.typing_delay_ms.saturating_add(index.saturating_mul(self.typing_interval_ms))
    }

    /// Reject values that would make a behavior diverge or never fire.
    pub fn validate(&self) -> FolioResult<()> {
        for (name, k) in [("dot_smoothing", self.dot_smoothing), ("outline_smoothing", self.outline_smoothing)] {
            if !(k > 0.0 && k <= 1.0) {
                return Err(FolioError::invalid(format!("{name} must be in (0, 1], got {k}")));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(FolioError::invalid(format!(
                "reveal_threshold must be in [0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return Err(FolioError::invalid(format!(
                "reveal_root_margin must be 1-4 px or % lengths, got {:?}",
                self.reveal_root_margin
            )));
        }
        if self.typing_interval_ms == 0 || self.counter_tick_ms == 0 {
            return Err(FolioError::invalid("timer intervals must be non-zero"));
        }
        if self.tilt_divisor == 0.0 {
            return Err(FolioError::invalid("tilt_divisor must be non-zero"));
        }
        Ok(())
    }
}

/// IntersectionObserver root margins accept one to four `px`/`%` lengths.
fn is_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&parts.len()) && parts.iter().all(|part| is_margin_length(part))
}

fn is_margin_length(part: &str) -> bool {
    if part == "0" {
        return true;
    }
    let number = part.strip_suffix("px").or_else(|| part.strip_suffix('%'));
    number.map(|n| n.parse::<f64>().map(f64::is_finite).unwrap_or(false)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CoordinatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.nav_lookahead, 100.0);
        assert_eq!(config.nav_debounce_ms, 10);
        assert_eq!(config.scroll_top_threshold, 300.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CoordinatorConfig::from_json(r#"{"typing_interval_ms": 40}"#).unwrap();
        assert_eq!(config.typing_interval_ms, 40);
        assert_eq!(config.typing_delay_ms, 500);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn rejects_divergent_smoothing() {
        let err = CoordinatorConfig::from_json(r#"{"dot_smoothing": 1.5}"#).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));

        let zero = CoordinatorConfig::new().with_smoothing(0.8, 0.0);
        assert!(zero.validate().is_err());
    }

    #[test]
    fn root_margin_must_be_css_lengths() {
        for good in ["0px 0px -50px 0px", "0", "10%", "-20px 5%", "1px 2px 3px"] {
            let json = format!(r#"{{"reveal_root_margin": "{good}"}}"#);
            assert!(CoordinatorConfig::from_json(&json).is_ok(), "{good}");
        }
        for bad in ["bogus", "", "10em", "1px 2px 3px 4px 5px", "px", "5"] {
            let json = format!(r#"{{"reveal_root_margin": "{bad}"}}"#);
            let err = CoordinatorConfig::from_json(&json).unwrap_err();
            assert!(matches!(err, FolioError::InvalidConfig(_)), "{bad}");
        }
    }

    #[test]
    fn first_character_lands_on_the_delay() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.typing_char_due_ms(0), 500);
        assert_eq!(config.typing_char_due_ms(1), 600);
        assert_eq!(config.typing_char_due_ms(4), 900);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = CoordinatorConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn builder_overrides() {
        let config = CoordinatorConfig::new()
            .with_nav_lookahead(64.0)
            .with_typing(0, 50)
            .with_scroll_top_threshold(120.0);
        assert_eq!(config.nav_lookahead, 64.0);
        assert_eq!(config.typing_delay_ms, 0);
        assert_eq!(config.typing_interval_ms, 50);
        assert_eq!(config.scroll_top_threshold, 120.0);
    }
}
