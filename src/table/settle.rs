use alloc::vec::Vec;

use crate::error::SettlementError;
use crate::events::TableEventData;
use crate::hand::HandStatus;
use crate::result::Settlement;

use super::Table;

impl Table {
    /// Plays out the dealer and settles the round.
    ///
    /// The dealer hits while its value is below 17, then stands. Player
    /// hands are partitioned against the dealer's final value: a bust or a
    /// value below a non-busted dealer loses, an equal value ties, and
    /// everything else wins. Emits `End` with the settlement and returns
    /// it; no payout amounts are computed.
    ///
    /// # Errors
    ///
    /// Returns an error if any player hand is still active, or the deck
    /// runs out while the dealer must draw.
    pub fn finalize(&mut self) -> Result<Settlement, SettlementError> {
        if self
            .player_hands
            .iter()
            .any(|hand| hand.status() == HandStatus::Active)
        {
            return Err(SettlementError::ActiveHands);
        }

        // The dealer can only be Active here while under 17; Bust and
        // Blackjack both imply a value outside the loop condition.
        while self.dealer.value() < 17 {
            self.dealer
                .hit(&mut self.deck)
                .map_err(|_| SettlementError::EmptyDeck)?;
        }

        if self.dealer.status() == HandStatus::Active {
            self.dealer.set_status(HandStatus::Stand);
        }

        let dealer_value = self.dealer.value();
        let dealer_bust = dealer_value > 21;

        let mut winning = Vec::new();
        let mut losing = Vec::new();
        let mut tied = Vec::new();

        // Partitioned on value, not status; busts are checked first so a
        // mutual bust still loses.
        for (index, hand) in self.player_hands.iter().enumerate() {
            let value = hand.value();

            if value > 21 || (value < dealer_value && !dealer_bust) {
                losing.push(index);
            } else if value == dealer_value {
                tied.push(index);
            } else {
                winning.push(index);
            }
        }

        let settlement = Settlement {
            winning,
            losing,
            tied,
            dealer_value,
            dealer_bust,
        };

        Self::notify(&mut self.listeners, TableEventData::End(&settlement));

        Ok(settlement)
    }
}
