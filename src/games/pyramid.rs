//! Pyramid Solitaire deal.
//!
//! The first 28 cards of the deck build the pyramid row by row, apex
//! first. The remaining 24 form the stock.

use super::PyramidSession;
use crate::core::{EngineResult, SessionConfig};
use crate::deck::{fresh_deck, DeckProvider, SeededDeck};
use crate::rules::SumRule;
use crate::session::Session;
use crate::topology::pyramid::{cell_count, PYRAMID_ROWS};
use crate::topology::Pyramid;

/// Builder for Pyramid Solitaire sessions.
#[derive(Clone, Debug, Default)]
pub struct PyramidBuilder {
    config: SessionConfig,
}

impl PyramidBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session configuration. `sum_target` and `redeals` apply here.
    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Deal from `provider`.
    pub fn build<P: DeckProvider + ?Sized>(self, provider: &mut P) -> EngineResult<PyramidSession> {
        let mut deck = fresh_deck(provider)?;
        let stock = deck.split_off(cell_count(PYRAMID_ROWS));
        let topology = Pyramid::new(deck, stock, self.config.redeals)?;
        let rule = SumRule::from_config(&self.config);
        Ok(Session::new(topology, rule, self.config))
    }

    /// Deal from a seeded shuffle.
    pub fn build_seeded(self, seed: u64) -> EngineResult<PyramidSession> {
        self.build(&mut SeededDeck::new(seed))
    }
}
