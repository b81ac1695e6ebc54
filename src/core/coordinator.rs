//! Coordinator: the single context object every page handler shares.
//!
//! ```text
//!  scroll ─────► on_scroll ──► header / scroll-top / parallax
//!                   └─ ticket ──(quiet period)──► settle_nav ──► active link
//!  pointer ────► on_pointer_move
//!  frame ──────► on_frame ──► dot / outline positions
//!  intersect ──► on_intersection ──► reveal (once)
//!  timer ──────► typing_tick ──► next subtitle char
//!  media ──────► set_theme ──► marker classes
//! ```
//!
//! No DOM access happens here. Geometry comes in through [`Layout`], and
//! every method returns what the host should render.

use serde::Serialize;
use tracing::debug;

use super::config::CoordinatorConfig;
use super::counter::Counter;
use super::cursor::{CursorLook, CursorState, Point};
use super::debounce::{Debouncer, Ticket};
use super::effects::{parallax_transform, stagger_delay, Tilt};
use super::error::FolioResult;
use super::header::{HeaderState, ScrollState};
use super::layout::Layout;
use super::menu::MenuState;
use super::nav::NavTracker;
use super::reveal::RevealSet;
use super::scroll::{anchor_destination, ScrollTop};
use super::theme::Theme;
use super::typing::Typewriter;

/// What a single scroll event changes
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollOutcome {
    pub header: HeaderState,
    pub scroll_top_visible: bool,
    pub parallax: String,
    /// Hand back to [`Coordinator::settle_nav`] after the quiet period
    pub nav_ticket: Ticket,
}

/// Serializable view of the coordinator, for debugging from the console
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub scroll_y: f64,
    pub header: HeaderState,
    pub active_section: Option<String>,
    pub scroll_top_visible: bool,
    pub menu_open: bool,
    pub theme: Option<Theme>,
    pub revealed: usize,
    pub observed: usize,
    pub typed: Option<String>,
    pub pointer: Point,
    pub dot: Point,
    pub outline: Point,
}

pub struct Coordinator {
    config: CoordinatorConfig,
    scroll: ScrollState,
    header: HeaderState,
    nav: NavTracker,
    nav_debounce: Debouncer,
    reveal: RevealSet,
    cursor: CursorState,
    typing: Option<Typewriter>,
    scroll_top: ScrollTop,
    menu: MenuState,
    theme: Option<Theme>,
}

impl Coordinator {
    pub fn new(config: CoordinatorConfig) -> FolioResult<Self> {
        config.validate()?;
        let rest = CursorLook { dot_scale: 1.0, outline_size: config.outline_size };
        let hover = CursorLook { dot_scale: config.dot_hover_scale, outline_size: config.outline_hover_size };
        Ok(Self {
            scroll: ScrollState::default(),
            header: HeaderState::Pinned,
            nav: NavTracker::new(config.nav_lookahead),
            nav_debounce: Debouncer::new(config.nav_debounce_ms),
            reveal: RevealSet::new(),
            cursor: CursorState::new(config.dot_smoothing, config.outline_smoothing, rest, hover),
            typing: None,
            scroll_top: ScrollTop::new(config.scroll_top_threshold),
            menu: MenuState::default(),
            theme: None,
            config,
        })
    }

    pub fn with_defaults() -> FolioResult<Self> {
        Self::new(CoordinatorConfig::default())
    }

    /// Register the menu's link targets, in document order
    pub fn with_nav_links<I, S>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.nav = self.nav.with_links(hrefs);
        self
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    // =========================================================================
    // Scroll
    // =========================================================================

    pub fn on_scroll(&mut self, offset: f64) -> ScrollOutcome {
        self.header = self.scroll.advance(offset);
        ScrollOutcome {
            header: self.header,
            scroll_top_visible: self.scroll_top.update(offset),
            parallax: parallax_transform(offset, self.config.parallax_speed),
            nav_ticket: self.nav_debounce.schedule(),
        }
    }

    pub fn nav_debounce_ms(&self) -> u32 {
        self.nav_debounce.wait_ms()
    }

    /// Debounced active-link recomputation. Stale tickets do nothing.
    pub fn settle_nav(&mut self, ticket: Ticket, layout: &impl Layout, scroll_y: f64) -> Option<String> {
        if !self.nav_debounce.fire(ticket) {
            return None;
        }
        self.refresh_nav(layout, scroll_y)
    }

    /// Immediate active-link recomputation (startup)
    pub fn refresh_nav(&mut self, layout: &impl Layout, scroll_y: f64) -> Option<String> {
        self.nav.update(&layout.sections(), scroll_y)
    }

    pub fn active_section(&self) -> Option<&str> {
        self.nav.active()
    }

    pub fn nav(&self) -> &NavTracker {
        &self.nav
    }

    pub fn anchor_destination(&self, href: &str, layout: &impl Layout) -> Option<f64> {
        let destination = anchor_destination(href, layout);
        if destination.is_none() {
            debug!(href, "smooth-scroll: no target, ignoring");
        }
        destination
    }

    pub fn scroll_top_destination(&self) -> f64 {
        ScrollTop::DESTINATION
    }

    // =========================================================================
    // Reveal
    // =========================================================================

    pub fn observe_reveal(&mut self) -> usize {
        self.reveal.observe()
    }

    /// True when the element should reveal now (first time only)
    pub fn on_intersection(&mut self, index: usize, intersecting: bool) -> bool {
        self.reveal.report(index, intersecting)
    }

    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    // =========================================================================
    // Cursor
    // =========================================================================

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor.pointer_moved(x, y);
    }

    pub fn on_frame(&mut self) -> (Point, Point) {
        self.cursor.frame()
    }

    pub fn on_hover(&mut self, hovering: bool) -> CursorLook {
        self.cursor.set_hover(hovering)
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    // =========================================================================
    // Typing
    // =========================================================================

    /// Arm the typewriter. A second call is ignored: typing never replays.
    pub fn start_typing(&mut self, text: &str) -> bool {
        if self.typing.is_some() {
            return false;
        }
        self.typing = Some(Typewriter::new(text));
        true
    }

    pub fn typing_tick(&mut self) -> Option<char> {
        self.typing.as_mut()?.tick()
    }

    pub fn typed_text(&self) -> Option<String> {
        self.typing.as_ref().map(Typewriter::text)
    }

    pub fn typing_done(&self) -> bool {
        self.typing.as_ref().map(Typewriter::is_done).unwrap_or(false)
    }

    // =========================================================================
    // Menu, theme, decorations
    // =========================================================================

    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    pub fn menu_open(&self) -> bool {
        self.menu.open
    }

    pub fn set_theme(&mut self, prefers_dark: bool) -> Theme {
        let theme = Theme::from_prefers_dark(prefers_dark);
        if self.theme != Some(theme) {
            debug!(?theme, "theme: system preference applied");
        }
        self.theme = Some(theme);
        theme
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }

    pub fn tilt(&self, x: f64, y: f64, width: f64, height: f64) -> Tilt {
        Tilt::from_pointer(x, y, width, height, self.config.tilt_divisor)
    }

    pub fn skill_tag_delay(&self, index: usize) -> String {
        stagger_delay(index, self.config.skill_tag_stagger_s)
    }

    pub fn counter(&self, target: u64, duration_ms: Option<u32>) -> Counter {
        Counter::new(
            target,
            duration_ms.unwrap_or(Counter::DEFAULT_DURATION_MS),
            self.config.counter_tick_ms,
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scroll_y: self.scroll.current,
            header: self.header,
            active_section: self.nav.active().map(str::to_string),
            scroll_top_visible: self.scroll_top.is_visible(),
            menu_open: self.menu.open,
            theme: self.theme,
            revealed: self.reveal.revealed_count(),
            observed: self.reveal.len(),
            typed: self.typed_text(),
            pointer: self.cursor.pointer,
            dot: self.cursor.dot.pos,
            outline: self.cursor.outline.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::FixedLayout;

    fn layout() -> FixedLayout {
        FixedLayout::stacked(70.0, 0.0, &[("home", 900.0), ("about", 700.0), ("contact", 500.0)])
    }

    fn coordinator() -> Coordinator {
        Coordinator::with_defaults()
            .unwrap()
            .with_nav_links(["#home", "#about", "#contact"])
    }

    #[test]
    fn scroll_burst_settles_once() {
        let mut c = coordinator();
        let tickets: Vec<_> = [100.0, 500.0, 850.0].iter().map(|y| c.on_scroll(*y).nav_ticket).collect();

        assert_eq!(c.settle_nav(tickets[0], &layout(), 850.0), None);
        assert_eq!(c.settle_nav(tickets[1], &layout(), 850.0), None);
        assert_eq!(c.settle_nav(tickets[2], &layout(), 850.0).as_deref(), Some("about"));
        assert_eq!(c.active_section(), Some("about"));
    }

    #[test]
    fn scroll_outcome_combines_behaviors() {
        let mut c = coordinator();
        let down = c.on_scroll(400.0);
        assert_eq!(down.header, HeaderState::Hidden);
        assert!(down.scroll_top_visible);
        assert_eq!(down.parallax, "translateY(200px)");

        let up = c.on_scroll(250.0);
        assert_eq!(up.header, HeaderState::Shown);
        assert!(!up.scroll_top_visible);
    }

    #[test]
    fn typing_never_replays() {
        let mut c = coordinator();
        assert!(c.start_typing("Hi"));
        assert!(!c.start_typing("Other"));
        assert_eq!(c.typing_tick(), Some('H'));
        assert_eq!(c.typing_tick(), Some('i'));
        assert_eq!(c.typing_tick(), None);
        assert!(c.typing_done());
        assert_eq!(c.typed_text().as_deref(), Some("Hi"));
    }

    #[test]
    fn typing_tick_before_start_is_inert() {
        let mut c = coordinator();
        assert_eq!(c.typing_tick(), None);
        assert!(!c.typing_done());
    }

    #[test]
    fn snapshot_serializes() {
        let mut c = coordinator();
        c.set_theme(true);
        c.on_scroll(10.0);
        let json = serde_json::to_value(c.snapshot()).unwrap();
        assert_eq!(json["theme"], "dark");
        assert_eq!(json["header"], "hidden");
        assert_eq!(json["menu_open"], false);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = CoordinatorConfig::new().with_smoothing(2.0, 0.2);
        assert!(Coordinator::new(config).is_err());
    }
}
