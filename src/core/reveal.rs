//! One-way fade-in tracking.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-element reveal flags, indexed by observation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching one more element; returns its index.
    pub fn observe(&mut self) -> usize {
        self.revealed.push(false);
        self.revealed.len() - 1
    }

    /// Feed an intersection report. Returns true only on the first
    /// intersecting report for this element; the watcher can be detached
    /// afterwards.
    pub fn report(&mut self, index: usize, intersecting: bool) -> bool {
        let Some(flag) = self.revealed.get_mut(index) else {
            return false;
        };
        if !intersecting || *flag {
            return false;
        }
        *flag = true;
        debug!(index, "reveal: element became visible");
        true
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_monotonic() {
        let mut set = RevealSet::new();
        let card = set.observe();

        assert!(!set.report(card, false));
        assert!(set.report(card, true));
        assert!(!set.report(card, false));
        assert!(set.is_revealed(card));
        assert!(!set.report(card, true));
        assert!(set.is_revealed(card));
    }

    #[test]
    fn elements_are_independent() {
        let mut set = RevealSet::new();
        let a = set.observe();
        let b = set.observe();
        set.report(b, true);
        assert!(!set.is_revealed(a));
        assert_eq!(set.revealed_count(), 1);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut set = RevealSet::new();
        assert!(!set.report(3, true));
        assert!(!set.is_revealed(3));
    }
}
