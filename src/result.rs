//! Settlement types for the end of a round.

extern crate alloc;

use alloc::vec::Vec;

/// Outcome of a single player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busted or player has the higher value).
    Win,
    /// Player loses (player busted or dealer has the higher value).
    Lose,
    /// Player and dealer values are equal.
    Tie,
}

/// Result of settling a round: player hand indices partitioned by outcome.
///
/// Indices refer to the table's player hands at settlement time. No payout
/// amounts are computed here; callers apply ledger effects from the
/// partitions and each hand's own bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    /// Hands that beat the dealer.
    pub winning: Vec<usize>,
    /// Hands that busted or fell below a non-busted dealer.
    pub losing: Vec<usize>,
    /// Hands whose value equals the dealer's.
    pub tied: Vec<usize>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl Settlement {
    /// Returns the outcome of the hand at `index`, or `None` if the index
    /// was not part of the settled round.
    #[must_use]
    pub fn outcome_of(&self, index: usize) -> Option<HandOutcome> {
        if self.winning.contains(&index) {
            Some(HandOutcome::Win)
        } else if self.losing.contains(&index) {
            Some(HandOutcome::Lose)
        } else if self.tied.contains(&index) {
            Some(HandOutcome::Tie)
        } else {
            None
        }
    }
}
