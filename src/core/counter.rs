//! Count-up animation for numeric stats.
//!
//! Nothing on the page binds this yet; the browser layer exposes it as
//! `animateCounter` for markup that opts in.

use serde::{Deserialize, Serialize};

/// Value to display after a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CounterFrame {
    Counting(u64),
    Done(u64),
}

impl CounterFrame {
    pub fn value(&self) -> u64 {
        match self {
            CounterFrame::Counting(v) | CounterFrame::Done(v) => *v,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl Counter {
    pub const DEFAULT_DURATION_MS: u32 = 2000;

    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = (duration_ms as f64 / tick_ms.max(1) as f64).max(1.0);
        Self { target, increment: target as f64 / steps, current: 0.0, done: false }
    }

    /// Advance one tick. Once `Done` is returned the counter is inert.
    pub fn tick(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame::Done(self.target);
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            CounterFrame::Done(self.target)
        } else {
            CounterFrame::Counting(self.current.floor() as u64)
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_snaps_to_target() {
        let mut c = Counter::new(250, 2000, 16);
        let mut last = 0;
        let mut ticks = 0;
        loop {
            ticks += 1;
            match c.tick() {
                CounterFrame::Counting(v) => {
                    assert!(v >= last && v < 250);
                    last = v;
                }
                CounterFrame::Done(v) => {
                    assert_eq!(v, 250);
                    break;
                }
            }
            assert!(ticks < 1000);
        }
        assert_eq!(ticks, 125);
        assert!(c.is_done());
        assert_eq!(c.tick(), CounterFrame::Done(250));
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let mut c = Counter::new(0, 2000, 16);
        assert_eq!(c.tick(), CounterFrame::Done(0));
    }

    #[test]
    fn duration_shorter_than_tick() {
        let mut c = Counter::new(7, 5, 16);
        assert_eq!(c.tick().value(), 7);
    }
}
