//! Error types for game operations.
//!
//! Every failure here is a caller-correctable precondition violation,
//! surfaced synchronously; nothing is transient or retryable.

use thiserror::Error;

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during hand actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The hand has already stood, busted, or reached blackjack.
    #[error("hand is no longer active")]
    HandNotActive,
    /// The hand was dealt without a bet.
    #[error("no stake was placed on this hand")]
    NoStake,
    /// The hand does not hold two cards of equal value.
    #[error("hand cannot be split")]
    CannotSplit,
    /// No hand exists at the given index.
    #[error("hand not found")]
    HandNotFound,
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DrawError> for ActionError {
    fn from(err: DrawError) -> Self {
        match err {
            DrawError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur during settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// One or more player hands have not finished their turn.
    #[error("active hands still exist")]
    ActiveHands,
    /// The deck ran out while the dealer had to draw.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur in the bet ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The bet amount must be positive.
    #[error("bet amount must be positive")]
    InvalidAmount,
    /// No bet has been placed for this player.
    #[error("no existing bet found for this player")]
    NoBet,
}
