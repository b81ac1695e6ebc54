//! Trailing debounce driven by tickets.
//!
//! Each call hands out a ticket; the host schedules a timer carrying it.
//! When a timer fires only the most recent ticket is honored, so the last
//! call in a quiet window wins and earlier ones are dropped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Debouncer {
    wait_ms: u32,
    issued: u64,
    fired: Option<u64>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, issued: 0, fired: None }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Supersede any pending call and issue a new ticket.
    pub fn schedule(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Consume a ticket when its timer fires. True only for the latest
    /// ticket, and only once.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.issued || self.fired == Some(ticket.0) {
            return false;
        }
        self.fired = Some(ticket.0);
        true
    }

    pub fn is_pending(&self) -> bool {
        self.issued > 0 && self.fired != Some(self.issued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_call_wins() {
        let mut d = Debouncer::new(10);
        let a = d.schedule();
        let b = d.schedule();
        let c = d.schedule();
        assert!(!d.fire(a));
        assert!(!d.fire(b));
        assert!(d.fire(c));
        assert!(!d.is_pending());
    }

    #[test]
    fn ticket_fires_once() {
        let mut d = Debouncer::new(10);
        let t = d.schedule();
        assert!(d.is_pending());
        assert!(d.fire(t));
        assert!(!d.fire(t));
    }

    #[test]
    fn stale_ticket_after_new_burst() {
        let mut d = Debouncer::new(10);
        let first = d.schedule();
        assert!(d.fire(first));
        let second = d.schedule();
        assert!(!d.fire(first));
        assert!(d.fire(second));
    }
}
