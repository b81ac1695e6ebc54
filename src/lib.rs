//! Folio: viewport interaction coordinator for a static portfolio page.
//!
//! # Architecture
//!
//! ```text
//! Browser events (scroll, pointer, frame, timer, media, intersection)
//!   │
//!   ├── wasm::FolioPage (feature "wasm")
//!   │     ├── Listener / Timeout / Interval / AnimationLoop handles
//!   │     └── DomLayout (live geometry)
//!   │
//!   └── core::Coordinator (compiles everywhere)
//!         ├── ScrollState → HeaderState      sticky header
//!         ├── NavTracker + Debouncer         active section
//!         ├── RevealSet                      one-way fade-in
//!         ├── CursorState                    dot / outline followers
//!         ├── Typewriter                     hero subtitle
//!         ├── ScrollTop, MenuState, Theme
//!         └── effects                        parallax, tilt, badges
//! ```
//!
//! # Features
//!
//! - `native` - tracing-subscriber log output for native test runs
//! - `wasm` - browser bindings (wasm-bindgen, web-sys)
//!
//! # Usage
//!
//! ```
//! use folio::{Coordinator, FixedLayout, HeaderState};
//!
//! let layout = FixedLayout::stacked(70.0, 0.0, &[("home", 800.0), ("about", 600.0)]);
//! let mut coordinator = Coordinator::with_defaults()?.with_nav_links(["#home", "#about"]);
//!
//! let outcome = coordinator.on_scroll(750.0);
//! assert_eq!(outcome.header, HeaderState::Hidden);
//!
//! let active = coordinator.settle_nav(outcome.nav_ticket, &layout, 750.0);
//! assert_eq!(active.as_deref(), Some("about"));
//! # Ok::<(), folio::FolioError>(())
//! ```

// =============================================================================
// Shared modules (compile everywhere)
// =============================================================================
pub mod core;

// =============================================================================
// Native-only modules
// =============================================================================
#[cfg(feature = "native")]
pub mod logging;

// =============================================================================
// WASM-only modules (browser, wasm-bindgen)
// =============================================================================
#[cfg(feature = "wasm")]
pub mod wasm;

// =============================================================================
// Re-exports: Shared
// =============================================================================
pub use crate::core::config::CoordinatorConfig;
pub use crate::core::coordinator::{Coordinator, ScrollOutcome, Snapshot};
pub use crate::core::counter::{Counter, CounterFrame};
pub use crate::core::cursor::{CursorLook, CursorState, Follower, Point};
pub use crate::core::debounce::{Debouncer, Ticket};
pub use crate::core::effects::{BadgeAnimation, Readiness, Tilt};
pub use crate::core::error::{FolioError, FolioResult};
pub use crate::core::header::{Direction, HeaderState, ScrollState};
pub use crate::core::layout::{FixedLayout, Layout, Section};
pub use crate::core::nav::{NavLink, NavTracker};
pub use crate::core::reveal::RevealSet;
pub use crate::core::scroll::ScrollTop;
pub use crate::core::theme::Theme;
pub use crate::core::typing::Typewriter;

// =============================================================================
// Re-exports: WASM
// =============================================================================
#[cfg(feature = "wasm")]
pub use wasm::{CounterAnimation, FolioPage};
