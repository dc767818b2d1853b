//! Royal Marriage deal.
//!
//! The King of the anchor suit opens the line and the Queen of the same
//! suit closes it. The other 50 cards lie between them in deck order.

use super::RoyalMarriageSession;
use crate::core::{EngineResult, Rank, SessionConfig, Suit};
use crate::deck::{fresh_deck, take_card, DeckProvider, SeededDeck};
use crate::rules::SuitOrRankRule;
use crate::session::Session;
use crate::topology::Linear;

/// Builder for Royal Marriage sessions.
#[derive(Clone, Debug)]
pub struct RoyalMarriageBuilder {
    anchor_suit: Suit,
    config: SessionConfig,
}

impl Default for RoyalMarriageBuilder {
    fn default() -> Self {
        Self {
            anchor_suit: Suit::Hearts,
            config: SessionConfig::default(),
        }
    }
}

impl RoyalMarriageBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suit of the King and Queen protagonists.
    #[must_use]
    pub fn anchor_suit(mut self, suit: Suit) -> Self {
        self.anchor_suit = suit;
        self
    }

    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Deal from `provider`.
    pub fn build<P: DeckProvider + ?Sized>(
        self,
        provider: &mut P,
    ) -> EngineResult<RoyalMarriageSession> {
        let mut deck = fresh_deck(provider)?;
        let king = take_card(&mut deck, self.anchor_suit, Rank::King)?;
        let queen = take_card(&mut deck, self.anchor_suit, Rank::Queen)?;

        let mut line = Vec::with_capacity(deck.len() + 2);
        line.push(king);
        line.append(&mut deck);
        line.push(queen);

        Ok(Session::new(Linear::new(line), SuitOrRankRule, self.config))
    }

    /// Deal from a seeded shuffle.
    pub fn build_seeded(self, seed: u64) -> EngineResult<RoyalMarriageSession> {
        self.build(&mut SeededDeck::new(seed))
    }
}
