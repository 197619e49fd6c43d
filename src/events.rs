//! Event names and listener plumbing.
//!
//! Hands and tables each expose a closed set of named events backed by
//! explicit callback lists; there is no global event bus. Listeners are
//! registered with [`Hand::subscribe`](crate::hand::Hand::subscribe) and
//! [`Table::subscribe`](crate::table::Table::subscribe).

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::hand::Hand;
use crate::result::Settlement;

/// Events emitted by a [`Hand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandEvent {
    /// The hand was dealt its two starting cards.
    NewHand,
    /// The hand's value exceeded 21.
    Bust,
    /// The hand's value reached exactly 21.
    Blackjack,
    /// The hand drew a card and remains active.
    Changed,
}

/// Events emitted by a [`Table`](crate::table::Table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEvent {
    /// A player hand was created and dealt.
    NewHandCreated,
    /// All remaining active hands were forced to stand.
    StoodAll,
    /// The round was settled.
    End,
}

/// Payload delivered to table listeners.
#[derive(Clone, Copy)]
pub enum TableEventData<'a> {
    /// The newly created player hand.
    NewHandCreated(&'a Hand),
    /// Indices of the hands that were forced to stand.
    StoodAll(&'a [usize]),
    /// The settlement partitions.
    End(&'a Settlement),
}

impl TableEventData<'_> {
    /// Returns the event name this payload belongs to.
    #[must_use]
    pub const fn event(&self) -> TableEvent {
        match self {
            Self::NewHandCreated(_) => TableEvent::NewHandCreated,
            Self::StoodAll(_) => TableEvent::StoodAll,
            Self::End(_) => TableEvent::End,
        }
    }
}

/// Callback registered on a hand.
pub(crate) type HandListener = Box<dyn FnMut(&Hand)>;

/// Callback registered on a table.
pub(crate) type TableListener = Box<dyn FnMut(TableEventData<'_>)>;

/// Listener registry for a hand, with a queue for events fired before any
/// listener existed. The queue is drained on the first subscription.
pub(crate) struct HandEmitter {
    /// Registered (event, callback) pairs, in subscription order.
    pub(crate) listeners: Vec<(HandEvent, HandListener)>,
    /// Events fired while no listener for them was registered.
    pub(crate) queued: Vec<HandEvent>,
}

impl HandEmitter {
    pub(crate) const fn new() -> Self {
        Self {
            listeners: Vec::new(),
            queued: Vec::new(),
        }
    }

    /// Returns whether any listener is registered for `event`.
    pub(crate) fn has_listener(&self, event: HandEvent) -> bool {
        self.listeners.iter().any(|(name, _)| *name == event)
    }
}
