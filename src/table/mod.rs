//! Round orchestration: one dealer hand, player hands, one shared deck.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use core::fmt;

use crate::deck::Deck;
use crate::error::{ActionError, DrawError};
use crate::events::{TableEvent, TableEventData, TableListener};
use crate::hand::{Hand, HandStatus};

mod settle;

/// A blackjack round: a shared deck, the dealer's hand, and the player
/// hands drawn against it.
///
/// The deck and the dealer hand are created together at round start; player
/// hands are added on demand. Once every player hand has finished its turn,
/// [`finalize`](Table::finalize) plays out the dealer and partitions the
/// players into winners, losers, and ties.
///
/// # Example
///
/// ```
/// use pontoon::{HandStatus, Table};
///
/// let mut table = Table::new(42);
/// let index = table.create_new_hand(Some(10), None).unwrap();
///
/// if table.player_hand(index).unwrap().status() == HandStatus::Active {
///     table.stand(index, false).unwrap();
/// }
///
/// let settlement = table.finalize().unwrap();
/// let _ = settlement;
/// ```
pub struct Table {
    /// The shared deck.
    deck: Deck,
    /// The dealer's hand, dealt at construction.
    dealer: Hand,
    /// Player hands, in creation order.
    player_hands: Vec<Hand>,
    /// Registered (event, callback) pairs.
    listeners: Vec<(TableEvent, TableListener)>,
}

impl Table {
    /// Creates a table with a fresh 52-card deck seeded from `seed` and
    /// deals the dealer's hand.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh 52-card deck cannot be exhausted by the opening deal"
    )]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(Deck::new(seed))
            .expect("a fresh 52-card deck covers the dealer's two cards")
    }

    /// Creates a table over a caller-supplied deck and deals the dealer's
    /// hand from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck holds fewer than two cards.
    pub fn with_deck(mut deck: Deck) -> Result<Self, DrawError> {
        let dealer = Hand::deal(&mut deck, None, None)?;

        Ok(Self {
            deck,
            dealer,
            player_hands: Vec::new(),
            listeners: Vec::new(),
        })
    }

    /// Deals a new player hand from the shared deck and appends it.
    ///
    /// Emits `NewHandCreated` with the hand and returns its index.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out of cards.
    pub fn create_new_hand(
        &mut self,
        bet: Option<usize>,
        identifier: Option<String>,
    ) -> Result<usize, DrawError> {
        let hand = Hand::deal(&mut self.deck, bet, identifier)?;
        self.player_hands.push(hand);

        let index = self.player_hands.len() - 1;
        Self::notify(
            &mut self.listeners,
            TableEventData::NewHandCreated(&self.player_hands[index]),
        );

        Ok(index)
    }

    /// Hits the player hand at `index` against the shared deck.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand exists at `index`, the hand is not
    /// active, or the deck is empty.
    pub fn hit(&mut self, index: usize) -> Result<(), ActionError> {
        let hand = self
            .player_hands
            .get_mut(index)
            .ok_or(ActionError::HandNotFound)?;
        hand.hit(&mut self.deck)
    }

    /// Stands the player hand at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand exists at `index` or the hand is not
    /// active.
    pub fn stand(&mut self, index: usize, force_validation: bool) -> Result<(), ActionError> {
        let hand = self
            .player_hands
            .get_mut(index)
            .ok_or(ActionError::HandNotFound)?;
        hand.stand(force_validation)
    }

    /// Doubles down the player hand at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand exists at `index`, the hand carries no
    /// stake, is not active, or the deck is empty.
    pub fn double_down(&mut self, index: usize) -> Result<(), ActionError> {
        let hand = self
            .player_hands
            .get_mut(index)
            .ok_or(ActionError::HandNotFound)?;
        hand.double_down(&mut self.deck)
    }

    /// Splits the player hand at `index`, replacing it with its two
    /// children at positions `index` and `index + 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if no hand exists at `index`, the hand carries no
    /// stake, cannot be split, or the deck holds fewer than two cards.
    pub fn split(&mut self, index: usize) -> Result<(), ActionError> {
        let hand = self
            .player_hands
            .get(index)
            .ok_or(ActionError::HandNotFound)?;
        let [first, second] = hand.split(&mut self.deck)?;

        self.player_hands[index] = first;
        self.player_hands.insert(index + 1, second);

        Ok(())
    }

    /// Forces every still-active player hand to stand.
    ///
    /// This is a bulk administrative transition; it bypasses
    /// [`Hand::stand`]'s precondition rather than failing on hands that
    /// already finished. Emits `StoodAll` with the affected indices.
    pub fn stand_all(&mut self) {
        let mut stood = Vec::new();

        for (index, hand) in self.player_hands.iter_mut().enumerate() {
            if hand.status() == HandStatus::Active {
                hand.set_status(HandStatus::Stand);
                stood.push(index);
            }
        }

        Self::notify(&mut self.listeners, TableEventData::StoodAll(&stood));
    }

    /// Registers a listener for the given event.
    pub fn subscribe(
        &mut self,
        event: TableEvent,
        listener: impl FnMut(TableEventData<'_>) + 'static,
    ) {
        self.listeners.push((event, Box::new(listener)));
    }

    /// Removes listeners for `event`, or all listeners when `None`.
    pub fn remove_listeners(&mut self, event: Option<TableEvent>) {
        match event {
            Some(event) => self.listeners.retain(|(name, _)| *name != event),
            None => self.listeners.clear(),
        }
    }

    /// Delivers `data` to every listener registered for its event.
    fn notify(listeners: &mut [(TableEvent, TableListener)], data: TableEventData<'_>) {
        for (name, listener) in listeners {
            if *name == data.event() {
                listener(data);
            }
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the dealer's hand mutably (e.g. to subscribe to its events).
    pub fn dealer_hand_mut(&mut self) -> &mut Hand {
        &mut self.dealer
    }

    /// Returns the player hands, in creation order.
    #[must_use]
    pub fn player_hands(&self) -> &[Hand] {
        &self.player_hands
    }

    /// Returns the player hand at `index`.
    #[must_use]
    pub fn player_hand(&self, index: usize) -> Option<&Hand> {
        self.player_hands.get(index)
    }

    /// Returns the player hand at `index` mutably.
    pub fn player_hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.player_hands.get_mut(index)
    }

    /// Returns the number of cards remaining in the shared deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("deck", &self.deck)
            .field("dealer", &self.dealer)
            .field("player_hands", &self.player_hands)
            .finish_non_exhaustive()
    }
}
