//! A deterministic single-deck blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages one round: a shared
//! [`Deck`], the dealer's [`Hand`], player hands with hit/stand/double/split
//! actions, and value-based settlement into winning, losing, and tied
//! partitions. Stake bookkeeping lives outside the core in [`BetLedger`].
//!
//! # Example
//!
//! ```
//! use pontoon::Table;
//!
//! let mut table = Table::new(42);
//! let player = table.create_new_hand(Some(25), Some("alice".into())).unwrap();
//!
//! while table.player_hand(player).unwrap().can_hit()
//!     && table.player_hand(player).unwrap().value() < 17
//! {
//!     table.hit(player).unwrap();
//! }
//!
//! if table.player_hand(player).unwrap().can_stand() {
//!     table.stand(player, false).unwrap();
//! }
//!
//! let settlement = table.finalize().unwrap();
//! let _ = settlement.outcome_of(player);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod hand;
pub mod ledger;
pub mod result;
pub mod table;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DrawError, LedgerError, SettlementError};
pub use events::{HandEvent, TableEvent, TableEventData};
pub use hand::{Hand, HandStatus};
pub use ledger::BetLedger;
pub use result::{HandOutcome, Settlement};
pub use table::Table;
