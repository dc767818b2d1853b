//! Meeting in the Garden deal.
//!
//! The King protagonist starts in the top-left corner and the Queen in the
//! bottom-right. Every other cell is dealt row-major from the deck and the
//! rest of the deck becomes the stock.

use super::GardenSession;
use crate::core::{EngineResult, Rank, Role, SessionConfig, Suit};
use crate::deck::{fresh_deck, take_card, DeckProvider, SeededDeck};
use crate::rules::SuitOrRankRule;
use crate::session::Session;
use crate::topology::grid::{MAX_SIZE, MIN_SIZE};
use crate::topology::Grid;

/// Builder for Meeting in the Garden sessions.
#[derive(Clone, Debug)]
pub struct GardenBuilder {
    size: usize,
    anchor_suit: Suit,
    config: SessionConfig,
}

impl Default for GardenBuilder {
    fn default() -> Self {
        Self {
            size: MIN_SIZE,
            anchor_suit: Suit::Hearts,
            config: SessionConfig::default(),
        }
    }
}

impl GardenBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the garden.
    ///
    /// # Panics
    ///
    /// Panics unless `size` is 5 or 6.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        assert!(
            (MIN_SIZE..=MAX_SIZE).contains(&size),
            "Garden size must be {MIN_SIZE}-{MAX_SIZE}"
        );
        self.size = size;
        self
    }

    /// Suit of the King and Queen protagonists.
    #[must_use]
    pub fn anchor_suit(mut self, suit: Suit) -> Self {
        self.anchor_suit = suit;
        self
    }

    /// Session configuration. `suitor_rule` and `early_meeting` apply here.
    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Deal from `provider`.
    pub fn build<P: DeckProvider + ?Sized>(self, provider: &mut P) -> EngineResult<GardenSession> {
        let mut deck = fresh_deck(provider)?;
        let king = take_card(&mut deck, self.anchor_suit, Rank::King)?;
        let queen = take_card(&mut deck, self.anchor_suit, Rank::Queen)?;

        let total = self.size * self.size;
        let stock = deck.split_off(total - 2);

        let mut cells = Vec::with_capacity(total);
        cells.push(Some(king.with_role(Role::KingProtagonist)));
        cells.extend(deck.into_iter().map(Some));
        cells.push(Some(queen.with_role(Role::QueenProtagonist)));

        let topology = Grid::new(self.size, cells, stock)?;
        Ok(Session::new(topology, SuitOrRankRule, self.config))
    }

    /// Deal from a seeded shuffle.
    pub fn build_seeded(self, seed: u64) -> EngineResult<GardenSession> {
        self.build(&mut SeededDeck::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::FixedDeck;
    use crate::rules::Outcome;
    use crate::topology::{GridPos, Topology};

    #[test]
    fn test_five_by_five_deal() {
        let session = GardenBuilder::new().build_seeded(42).unwrap();
        let grid = session.topology();

        assert_eq!(grid.size(), 5);
        assert_eq!(grid.cards_on_board(), 25);
        assert_eq!(grid.stock_len(), 27);
        assert_eq!(grid.king(), GridPos::new(0, 0));
        assert_eq!(grid.queen(), GridPos::new(4, 4));
        assert_eq!(session.dealt(), 52);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_six_by_six_deal() {
        let session = GardenBuilder::new().size(6).build_seeded(42).unwrap();
        let grid = session.topology();

        assert_eq!(grid.cards_on_board(), 36);
        assert_eq!(grid.stock_len(), 16);
        assert_eq!(grid.queen(), GridPos::new(5, 5));
    }

    #[test]
    #[should_panic(expected = "Garden size must be 5-6")]
    fn test_size_out_of_range() {
        let _ = GardenBuilder::new().size(7);
    }

    #[test]
    fn test_tagged_provider_card_is_plain() {
        let mut cards = crate::deck::standard_deck();
        cards[4] = cards[4].with_role(crate::core::Role::QueenProtagonist);
        let session = GardenBuilder::new().build(&mut FixedDeck::new(cards)).unwrap();
        let grid = session.topology();

        let anchors = grid
            .positions()
            .into_iter()
            .filter(|&pos| grid.is_anchor(pos))
            .count();
        assert_eq!(anchors, 2);
        assert_eq!(grid.queen(), GridPos::new(4, 4));
        assert!(grid
            .card_at(grid.queen())
            .unwrap()
            .same_face(&crate::core::Card::new(Suit::Hearts, Rank::Queen)));
        assert!(grid.stock().all(|c| !c.is_anchor()));
    }

    #[test]
    fn test_fixed_deck_fills_row_major() {
        let session = GardenBuilder::new()
            .anchor_suit(Suit::Clubs)
            .build(&mut FixedDeck::standard())
            .unwrap();
        let grid = session.topology();

        assert!(grid.is_anchor(GridPos::new(0, 0)));
        assert_eq!(
            grid.card_at(GridPos::new(0, 1)),
            Some(&crate::core::Card::new(Suit::Spades, Rank::Ace))
        );
        assert!(grid.is_anchor(GridPos::new(4, 4)));
    }
}
