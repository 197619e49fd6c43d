//! Per-hand play rules: hit, stand, double down, split, and ace valuation.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;
use core::mem;

use crate::card::{Card, CardValue};
use crate::deck::Deck;
use crate::error::{ActionError, DrawError};
use crate::events::{HandEmitter, HandEvent};

/// Hand status.
///
/// `Active` is the only state that accepts actions; the other three are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stand,
    /// Hand has busted (over 21).
    Bust,
    /// Hand value is exactly 21.
    Blackjack,
}

/// A hand of cards held by a player or the dealer.
///
/// A hand is dealt two cards at construction and mutated through
/// [`hit`](Hand::hit), [`stand`](Hand::stand),
/// [`double_down`](Hand::double_down), and [`split`](Hand::split). Its value
/// is recomputed on every mutation; aces are resolved to 11 or 1 in draw
/// order, permanently, the first time the hand sees them.
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Cached hand value, kept in sync with the resolved card values.
    value: u8,
    /// Stake on this hand; `None` for the dealer.
    bet: Option<usize>,
    /// Number of hits taken.
    play_count: usize,
    /// Opaque caller-supplied label.
    identifier: Option<String>,
    /// Event listeners and the pre-listener queue.
    events: HandEmitter,
}

impl Hand {
    /// Deals a new hand of two cards from the deck.
    ///
    /// Aces among the starting cards are resolved immediately; a resolved
    /// value of exactly 21 moves the hand straight to
    /// [`HandStatus::Blackjack`]. The `NewHand` event (and `Blackjack`, if
    /// dealt) is queued for the first subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards.
    pub fn deal(
        deck: &mut Deck,
        bet: Option<usize>,
        identifier: Option<String>,
    ) -> Result<Self, DrawError> {
        let mut hand = Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            value: 0,
            bet,
            play_count: 0,
            identifier,
            events: HandEmitter::new(),
        };

        hand.add_card(deck)?;
        hand.add_card(deck)?;

        hand.emit(HandEvent::NewHand);

        if hand.value == 21 {
            hand.status = HandStatus::Blackjack;
            hand.emit(HandEvent::Blackjack);
        }

        Ok(hand)
    }

    /// Builds one child hand of a split: one parent card plus one fresh draw.
    fn from_split(
        card: Card,
        deck: &mut Deck,
        bet: usize,
        identifier: Option<String>,
    ) -> Result<Self, DrawError> {
        let mut hand = Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            value: 0,
            bet: Some(bet),
            play_count: 0,
            identifier,
            events: HandEmitter::new(),
        };

        hand.validate();
        hand.add_card(deck)?;

        hand.emit(HandEvent::NewHand);

        if hand.value == 21 {
            hand.status = HandStatus::Blackjack;
            hand.emit(HandEvent::Blackjack);
        }

        Ok(hand)
    }

    /// Draws one card, appends it, and revalidates the hand value.
    fn add_card(&mut self, deck: &mut Deck) -> Result<(), DrawError> {
        let card = deck.draw()?;
        self.cards.push(card);
        self.validate();
        Ok(())
    }

    /// Recomputes the hand value and resolves any unresolved aces.
    ///
    /// The base value is the sum of all already-resolved cards. Each
    /// unresolved ace is then resolved in hand order: 11 if the running
    /// total stays at or under 21, else 1. Resolution is permanent; an ace
    /// valued at 11 never demotes on later draws.
    fn validate(&mut self) {
        let mut total: u8 = self
            .cards
            .iter()
            .filter_map(|card| card.value().resolved())
            .sum();

        for card in &mut self.cards {
            if card.value() == CardValue::Unresolved {
                if total + 11 <= 21 {
                    card.resolve(11);
                    total += 11;
                } else {
                    card.resolve(1);
                    total += 1;
                }
            }
        }

        self.value = total;
    }

    /// Draws one card from the deck.
    ///
    /// A value over 21 busts the hand; exactly 21 is a blackjack; anything
    /// else leaves the hand active. Each outcome fires the matching event.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not active or the deck is empty.
    pub fn hit(&mut self, deck: &mut Deck) -> Result<(), ActionError> {
        if self.status != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        self.add_card(deck)?;
        self.play_count += 1;

        if self.value > 21 {
            self.status = HandStatus::Bust;
            self.emit(HandEvent::Bust);
        } else if self.value == 21 {
            self.status = HandStatus::Blackjack;
            self.emit(HandEvent::Blackjack);
        } else {
            self.emit(HandEvent::Changed);
        }

        Ok(())
    }

    /// Ends the hand's turn.
    ///
    /// With `force_validation` set, the ace valuation is re-run first. This
    /// is a defensive re-check; validation already runs after every card
    /// addition, so it is normally a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is not active.
    pub fn stand(&mut self, force_validation: bool) -> Result<(), ActionError> {
        if self.status != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        if force_validation {
            self.validate();
        }

        self.status = HandStatus::Stand;
        Ok(())
    }

    /// Doubles the stake, then draws exactly one card.
    ///
    /// The draw inherits [`hit`](Hand::hit)'s transition rules; the hand is
    /// not forced to stand afterwards. All preconditions are checked before
    /// the bet is touched, so a failed call leaves the hand unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand carries no stake, is not active, or the
    /// deck is empty.
    pub fn double_down(&mut self, deck: &mut Deck) -> Result<(), ActionError> {
        let Some(bet) = self.bet else {
            return Err(ActionError::NoStake);
        };

        if self.status != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        if deck.is_empty() {
            return Err(ActionError::EmptyDeck);
        }

        self.bet = Some(bet * 2);
        self.hit(deck)
    }

    /// Splits the hand into two new hands.
    ///
    /// Each child receives one of the two original cards plus one fresh
    /// draw, carries the full original bet (doubling total exposure), and
    /// inherits the identifier. The parent is left untouched; callers
    /// should treat it as replaced by the children.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand carries no stake, cannot be split, or
    /// the deck holds fewer than two cards.
    pub fn split(&self, deck: &mut Deck) -> Result<[Self; 2], ActionError> {
        let Some(bet) = self.bet else {
            return Err(ActionError::NoStake);
        };

        if !self.can_split() {
            return Err(ActionError::CannotSplit);
        }

        if deck.remaining() < 2 {
            return Err(ActionError::EmptyDeck);
        }

        let first = Self::from_split(self.cards[0], deck, bet, self.identifier.clone())?;
        let second = Self::from_split(self.cards[1], deck, bet, self.identifier.clone())?;

        Ok([first, second])
    }

    /// Returns whether the hand can be split.
    ///
    /// The criterion is resolved-value equality over exactly two cards: a
    /// king/queen pair splits, while a pair of aces resolved to 11 and 1
    /// does not.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].value() == self.cards[1].value()
    }

    /// Returns whether the hand can double down (no hits taken yet).
    #[must_use]
    pub const fn can_double_down(&self) -> bool {
        self.play_count == 0
    }

    /// Returns whether the hand can hit.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Returns whether the hand can stand.
    #[must_use]
    pub fn can_stand(&self) -> bool {
        self.status == HandStatus::Active
    }

    /// Registers a listener for the given event.
    ///
    /// Events fired before any listener existed (notably the
    /// construction-time `NewHand` and `Blackjack`) are buffered and
    /// replayed here; buffered events whose name still has no listener are
    /// dropped.
    pub fn subscribe(&mut self, event: HandEvent, listener: impl FnMut(&Self) + 'static) {
        self.events.listeners.push((event, Box::new(listener)));
        self.flush_queued();
    }

    /// Fires `event`, or queues it when nothing listens for it yet.
    fn emit(&mut self, event: HandEvent) {
        if !self.events.has_listener(event) {
            self.events.queued.push(event);
            return;
        }

        let mut listeners = mem::take(&mut self.events.listeners);
        for (name, listener) in &mut listeners {
            if *name == event {
                listener(&*self);
            }
        }
        self.events.listeners = listeners;
    }

    /// Drains the queue, delivering events that now have a listener.
    fn flush_queued(&mut self) {
        if self.events.queued.is_empty() {
            return;
        }

        let queued = mem::take(&mut self.events.queued);
        let mut listeners = mem::take(&mut self.events.listeners);

        for event in queued {
            for (name, listener) in &mut listeners {
                if *name == event {
                    listener(&*self);
                }
            }
        }

        self.events.listeners = listeners;
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Forces a status transition, bypassing the active-hand precondition.
    pub(crate) const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the current hand value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns the stake on this hand, if any.
    #[must_use]
    pub const fn bet(&self) -> Option<usize> {
        self.bet
    }

    /// Returns the caller-supplied label, if any.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Returns the number of hits taken on this hand.
    #[must_use]
    pub const fn play_count(&self) -> usize {
        self.play_count
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("cards", &self.cards)
            .field("status", &self.status)
            .field("value", &self.value)
            .field("bet", &self.bet)
            .field("play_count", &self.play_count)
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}
