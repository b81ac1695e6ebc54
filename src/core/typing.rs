//! One-shot typewriter for the hero subtitle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Typewriter {
    source: Vec<char>,
    index: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { source: text.chars().collect(), index: 0 }
    }

    /// Reveal the next character. `None` once the text is exhausted, and
    /// forever after.
    pub fn tick(&mut self) -> Option<char> {
        let c = *self.source.get(self.index)?;
        self.index += 1;
        Some(c)
    }

    pub fn text(&self) -> String {
        self.source[..self.index].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.source.len()
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.index, self.source.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_hello_in_five_ticks() {
        let mut t = Typewriter::new("Hello");
        for _ in 0..5 {
            assert!(t.tick().is_some());
        }
        assert_eq!(t.text(), "Hello");
        assert!(t.is_done());
        assert_eq!(t.tick(), None);
        assert_eq!(t.tick(), None);
        assert_eq!(t.text(), "Hello");
    }

    #[test]
    fn multibyte_characters_are_single_ticks() {
        let mut t = Typewriter::new("Dév ✓");
        assert_eq!(t.progress(), (0, 5));
        t.tick();
        t.tick();
        assert_eq!(t.text(), "Dé");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut t = Typewriter::new("");
        assert!(t.is_done());
        assert_eq!(t.tick(), None);
    }
}
