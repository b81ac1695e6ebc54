//! Selector and class-name constants for the page structure.
//!
//! Centralized registry of every hook the coordinator reads from or
//! writes to. The markup and stylesheet own these names.

/// Navigation: hamburger toggle, collapsible menu, header bar
pub mod nav {
    pub const TOGGLE: &str = ".hamburger";
    pub const MENU: &str = ".nav-menu";
    pub const LINK: &str = ".nav-link";
    pub const HEADER: &str = ".navbar";
    pub const SECTION: &str = "section";
    pub const IN_PAGE_ANCHOR: &str = "a[href^=\"#\"]";
}

/// Fade-in targets
pub mod reveal {
    pub const TARGETS: &[&str] = &[
        ".education-card",
        ".timeline-item",
        ".project-card",
        ".skill-category",
        ".extra-card",
        ".contact-card",
    ];
}

/// Hero and decorative elements
pub mod hero {
    pub const SUBTITLE: &str = ".hero-subtitle";
    pub const PARALLAX: &str = ".hero-image";
    pub const SKILL_TAG: &str = ".skill-tag";
    pub const PROJECT_CARD: &str = ".project-card";
    pub const FLOATING_BADGE: &str = ".floating-badge";
}

/// Elements that grow the cursor on hover
pub mod cursor {
    pub const HOVER_TARGETS: &str = "a, button, .btn, .project-card, .skill-tag";
}

/// Class names toggled by the coordinator
pub mod class {
    pub const ACTIVE: &str = "active";
    pub const FADE_IN: &str = "fade-in";
    pub const VISIBLE: &str = "visible";
    pub const CURSOR_DOT: &str = "cursor-dot";
    pub const CURSOR_OUTLINE: &str = "cursor-outline";
    pub const SCROLL_TOP: &str = "scroll-top-btn";
    pub const DARK_THEME: &str = "dark-theme";
    pub const LIGHT_THEME: &str = "light-theme";
}

/// Media queries
pub mod media {
    pub const PREFERS_DARK: &str = "(prefers-color-scheme: dark)";
}

/// Combined selector for every fade-in target
pub fn reveal_targets() -> String {
    reveal::TARGETS.join(", ")
}
