//! Deck construction and random draw.

use alloc::boxed::Box;
use alloc::vec::Vec;

use core::fmt;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// A single 52-card deck that deals without replacement.
///
/// Each draw removes a uniformly random card from the remaining population.
/// The randomness source is injected at construction so rounds are
/// reproducible under test.
///
/// # Example
///
/// ```
/// use pontoon::Deck;
///
/// let mut deck = Deck::new(42);
/// assert_eq!(deck.remaining(), 52);
///
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.remaining(), 51);
/// let _ = card;
/// ```
pub struct Deck {
    /// Cards not yet drawn.
    cards: Vec<Card>,
    /// Random number generator used to pick draws.
    rng: Box<dyn RngCore>,
}

impl Deck {
    /// Creates a full deck with a generator seeded from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a full deck drawing through the given generator.
    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        Self::from_cards(Self::population(), rng)
    }

    /// Creates a deck over an explicit card population.
    ///
    /// Mainly useful for tests and deterministic replays; normal play starts
    /// from the full population via [`Deck::new`].
    pub fn from_cards(cards: Vec<Card>, rng: impl RngCore + 'static) -> Self {
        Self {
            cards,
            rng: Box::new(rng),
        }
    }

    /// One card per (rank, suit) pairing, 52 in total.
    fn population() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards
    }

    /// Removes and returns one card chosen uniformly at random from the
    /// remaining population.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::EmptyDeck);
        }

        let index = self.rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(index))
    }

    /// Returns the cards not yet drawn, in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards)
            .finish_non_exhaustive()
    }
}
