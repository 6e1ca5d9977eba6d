use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Running winnings total with the animated count-up/down.
///
/// `apply_delta` books the payout instantly into `target`; the displayed
/// value then catches up one whole unit per `step`, so the counter
/// always terminates on exactly the booked total with no float drift.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WinningsLedger {
    current: i64,
    target: i64,
}

impl WinningsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The booked total, the truth regardless of animation progress.
    pub fn total(&self) -> i64 {
        self.target
    }

    /// The value the counter is currently showing.
    pub fn displayed(&self) -> i64 {
        self.current
    }

    pub fn is_settling(&self) -> bool {
        self.current != self.target
    }

    /// Books a signed payout.
    pub fn apply_delta(&mut self, amount: i64) {
        self.target = self.current + amount;
    }

    /// Moves the displayed value one unit toward the booked total.
    /// `Some` carries the value to show for this step; `None` means the
    /// count has settled.
    pub fn step(&mut self) -> Option<i64> {
        match self.current.cmp(&self.target) {
            Ordering::Less => {
                self.current += 1;
                Some(self.current)
            }
            Ordering::Greater => {
                self.current -= 1;
                Some(self.current)
            }
            Ordering::Equal => None,
        }
    }
}
