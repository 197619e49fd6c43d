//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, in deck-construction order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
            Self::Ace => "ace",
        };
        f.write_str(name)
    }
}

/// Point value of a card.
///
/// Every non-ace card is `Resolved` at construction and keeps that value for
/// its lifetime. An ace starts `Unresolved` and is resolved to 11 or 1
/// exactly once, by the hand that draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// Value not yet fixed (aces before the owning hand resolves them).
    Unresolved,
    /// Fixed point value (2-11).
    Resolved(u8),
}

impl CardValue {
    /// Returns the fixed value, or `None` while unresolved.
    #[must_use]
    pub const fn resolved(self) -> Option<u8> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(value) => Some(value),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Point value, derived from the rank at construction.
    value: CardValue,
}

impl Card {
    /// Creates a new card with its value derived from the rank.
    ///
    /// Face cards are worth 10, numeric ranks their pip value, and aces are
    /// left unresolved until the owning hand values them.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        let value = match rank {
            Rank::Two => CardValue::Resolved(2),
            Rank::Three => CardValue::Resolved(3),
            Rank::Four => CardValue::Resolved(4),
            Rank::Five => CardValue::Resolved(5),
            Rank::Six => CardValue::Resolved(6),
            Rank::Seven => CardValue::Resolved(7),
            Rank::Eight => CardValue::Resolved(8),
            Rank::Nine => CardValue::Resolved(9),
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => CardValue::Resolved(10),
            Rank::Ace => CardValue::Unresolved,
        };

        Self { rank, suit, value }
    }

    /// Returns the current point value of the card.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.value
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Fixes an unresolved ace's value. Called once per ace by the owning
    /// hand; never called for other cards.
    pub(crate) const fn resolve(&mut self, value: u8) {
        self.value = CardValue::Resolved(value);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a single deck.
pub const DECK_SIZE: usize = 52;
