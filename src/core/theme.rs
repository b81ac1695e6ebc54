//! System light/dark preference mirrored onto marker classes.

use serde::{Deserialize, Serialize};

use super::selectors::class;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Theme::Light => class::LIGHT_THEME,
            Theme::Dark => class::DARK_THEME,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// `(add, remove)` pair that leaves exactly this theme's class set
    pub fn class_swap(&self) -> (&'static str, &'static str) {
        (self.class(), self.other().class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn apply(classes: &mut BTreeSet<&'static str>, theme: Theme) {
        let (add, remove) = theme.class_swap();
        classes.insert(add);
        classes.remove(remove);
    }

    #[test]
    fn exactly_one_marker_after_every_change() {
        let mut classes = BTreeSet::new();
        for dark in [false, true, true, false, true] {
            apply(&mut classes, Theme::from_prefers_dark(dark));
            assert_eq!(classes.len(), 1);
            let expected = if dark { "dark-theme" } else { "light-theme" };
            assert!(classes.contains(expected));
        }
    }
}
