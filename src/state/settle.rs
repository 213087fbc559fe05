//! Arbitration of deferred menu-height reports
//!
//! A level that becomes current waits for the settle delay, then measures
//! itself and writes the shared menu height. Several levels may have a report
//! in flight at once, so every report carries a ticket. A ticket dies when its
//! level stops being current or unmounts, and only a live ticket belonging to
//! the current level may write.

use std::collections::HashMap;

use crate::state::ActivePath;
use crate::types::LevelKey;

/// Permission for one pending height report
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettleTicket {
    key: LevelKey,
    generation: u64,
}

impl SettleTicket {
    pub fn key(&self) -> &LevelKey {
        &self.key
    }
}

/// Outcome of a height report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleOutcome {
    Applied,
    /// The ticket was cancelled or replaced
    Stale,
    /// The level is no longer the one on screen
    NotCurrent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeightArbiter {
    height: f64,
    live: HashMap<LevelKey, u64>,
    next_generation: u64,
}

impl HeightArbiter {
    pub fn new(initial_height: f64) -> Self {
        Self {
            height: initial_height,
            live: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Shared menu content height (px)
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Start a report for `key`, replacing any earlier one for the same level
    pub fn begin(&mut self, key: &LevelKey) -> SettleTicket {
        self.next_generation += 1;
        self.live.insert(key.clone(), self.next_generation);
        SettleTicket {
            key: key.clone(),
            generation: self.next_generation,
        }
    }

    /// Drop the pending report of `key`, if any
    pub fn cancel(&mut self, key: &LevelKey) -> bool {
        self.live.remove(key).is_some()
    }

    pub fn is_pending(&self, key: &LevelKey) -> bool {
        self.live.contains_key(key)
    }

    /// Deliver a measured height. Consumes the ticket either way.
    pub fn complete(&mut self, ticket: SettleTicket, height: f64, path: &ActivePath) -> SettleOutcome {
        if self.live.get(&ticket.key) != Some(&ticket.generation) {
            return SettleOutcome::Stale;
        }
        self.live.remove(&ticket.key);

        if !path.is_current(ticket.key.depth, &ticket.key.title) {
            return SettleOutcome::NotCurrent;
        }
        self.height = height;
        SettleOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guides_path() -> ActivePath {
        let mut path = ActivePath::new("Home");
        path.push("Guides");
        path
    }

    #[test]
    fn test_report_applies_after_settling() {
        let path = guides_path();
        let key = LevelKey::new(1, "Guides");
        let mut heights = HeightArbiter::new(1000.0);

        let ticket = heights.begin(&key);
        assert!(heights.is_pending(&key));
        assert_eq!(heights.complete(ticket, 420.0, &path), SettleOutcome::Applied);
        assert_eq!(heights.height(), 420.0);
        assert!(!heights.is_pending(&key));
    }

    #[test]
    fn test_cancelled_report_leaves_height() {
        let path = guides_path();
        let key = LevelKey::new(1, "Guides");
        let mut heights = HeightArbiter::new(1000.0);

        let ticket = heights.begin(&key);
        assert!(heights.cancel(&key));
        assert_eq!(heights.complete(ticket, 420.0, &path), SettleOutcome::Stale);
        assert_eq!(heights.height(), 1000.0);
    }

    #[test]
    fn test_rescheduled_level_invalidates_old_ticket() {
        let path = guides_path();
        let key = LevelKey::new(1, "Guides");
        let mut heights = HeightArbiter::new(1000.0);

        let first = heights.begin(&key);
        let second = heights.begin(&key);
        assert_eq!(heights.complete(first, 10.0, &path), SettleOutcome::Stale);
        assert_eq!(heights.complete(second, 300.0, &path), SettleOutcome::Applied);
        assert_eq!(heights.height(), 300.0);
    }

    #[test]
    fn test_same_titled_siblings_keep_separate_tickets() {
        let path = guides_path();
        let first = LevelKey::new(1, "Guides").at(vec![0]);
        let second = LevelKey::new(1, "Guides").at(vec![1]);
        let mut heights = HeightArbiter::new(1000.0);

        let first_ticket = heights.begin(&first);
        let second_ticket = heights.begin(&second);
        assert!(heights.is_pending(&first));
        assert!(heights.is_pending(&second));

        heights.cancel(&second);
        assert_eq!(heights.complete(second_ticket, 10.0, &path), SettleOutcome::Stale);
        assert_eq!(heights.complete(first_ticket, 320.0, &path), SettleOutcome::Applied);
        assert_eq!(heights.height(), 320.0);
    }

    #[test]
    fn test_only_current_level_writes() {
        let mut path = guides_path();
        let home = LevelKey::new(0, "Home");
        let guides = LevelKey::new(1, "Guides");
        let mut heights = HeightArbiter::new(1000.0);

        let home_ticket = heights.begin(&home);
        let guides_ticket = heights.begin(&guides);
        assert_eq!(heights.complete(home_ticket, 900.0, &path), SettleOutcome::NotCurrent);
        assert_eq!(heights.height(), 1000.0);

        path.pop();
        assert_eq!(heights.complete(guides_ticket, 200.0, &path), SettleOutcome::NotCurrent);
        assert_eq!(heights.height(), 1000.0);
    }
}
