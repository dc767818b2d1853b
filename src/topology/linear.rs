//! Linear topology (Royal Marriage).
//!
//! Cards lie in a single row. The first cell holds the King protagonist and
//! the last the Queen protagonist; neither ever moves. Removed cards leave
//! empty cells behind and nothing is refilled, so the protagonists draw
//! closer in terms of the occupied cells between them.

use super::{Board, BoardSnapshot, Layout, Removed, Topology};
use crate::core::{Card, Role, SessionConfig};

/// Most occupied cells allowed between two matching cards.
pub const MAX_SEPARATION: usize = 2;

/// A row of cards anchored by King and Queen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Linear {
    cells: Board,
}

impl Linear {
    /// Lay `cards` out in a row.
    ///
    /// The first card is tagged King protagonist and the last Queen
    /// protagonist, whatever their faces.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two cards are given.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        assert!(cards.len() >= 2, "A line needs at least its two anchors");

        let last = cards.len() - 1;
        cards[0] = cards[0].with_role(Role::KingProtagonist);
        cards[last] = cards[last].with_role(Role::QueenProtagonist);

        Self {
            cells: cards.into_iter().map(Some).collect(),
        }
    }

    /// Number of cells, including emptied ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A line always holds its anchors, so it is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of the King protagonist.
    #[must_use]
    pub fn king(&self) -> usize {
        0
    }

    /// Position of the Queen protagonist.
    #[must_use]
    pub fn queen(&self) -> usize {
        self.cells.len() - 1
    }

    /// Occupied cells strictly between `a` and `b`.
    #[must_use]
    pub fn separation(&self, a: usize, b: usize) -> usize {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        ((lo + 1)..hi).filter(|&i| self.cells.is_occupied(i)).count()
    }
}

impl Topology for Linear {
    type Position = usize;

    fn positions(&self) -> Vec<usize> {
        (0..self.cells.len()).collect()
    }

    fn contains(&self, pos: usize) -> bool {
        pos < self.cells.len()
    }

    fn card_at(&self, pos: usize) -> Option<&Card> {
        self.cells.get(pos)
    }

    fn reachable(&self, a: usize, b: usize) -> bool {
        a != b && self.separation(a, b) <= MAX_SEPARATION
    }

    fn remove(&mut self, positions: &[usize]) -> Removed {
        let removed: Removed = positions
            .iter()
            .filter_map(|&pos| self.cells.take(pos))
            .collect();
        log::trace!("line: removed {} card(s), {} left", removed.len(), self.cells.occupied());
        removed
    }

    fn cards_on_board(&self) -> usize {
        self.cells.occupied()
    }

    fn is_won(&self, _config: &SessionConfig) -> bool {
        let king = self.card_at(self.king());
        let queen = self.card_at(self.queen());
        self.cells.occupied() == 2
            && king.is_some_and(|c| c.role == Role::KingProtagonist)
            && queen.is_some_and(|c| c.role == Role::QueenProtagonist)
            && self.separation(self.king(), self.queen()) == 0
    }

    fn detects_stalemate(&self) -> bool {
        true
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            layout: Layout::Linear { len: self.cells.len() },
            cells: self.cells.clone(),
            stock: 0,
            waste_top: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn line() -> Linear {
        Linear::new(vec![
            c(Suit::Hearts, Rank::King),
            c(Suit::Clubs, Rank::Five),
            c(Suit::Spades, Rank::Two),
            c(Suit::Diamonds, Rank::Nine),
            c(Suit::Spades, Rank::Seven),
            c(Suit::Hearts, Rank::Five),
            c(Suit::Hearts, Rank::Queen),
        ])
    }

    #[test]
    fn test_anchors_tagged() {
        let line = line();
        assert!(line.is_anchor(0));
        assert!(line.is_anchor(6));
        assert!(!line.is_anchor(3));
        assert!(!line.is_selectable(0));
        assert!(line.is_selectable(1));
    }

    #[test]
    fn test_separation_counts_occupied_only() {
        let mut line = line();
        assert_eq!(line.separation(1, 5), 3);
        assert!(!line.reachable(1, 5));

        line.remove(&[3]);
        assert_eq!(line.separation(1, 5), 2);
        assert_eq!(line.separation(5, 1), 2);
        assert!(line.reachable(1, 5));
    }

    #[test]
    fn test_reachable_bounds() {
        let line = line();
        assert!(line.reachable(1, 2)); // nothing between
        assert!(line.reachable(1, 3)); // one between
        assert!(line.reachable(1, 4)); // two between
        assert!(!line.reachable(1, 5)); // three between
        assert!(!line.reachable(2, 2));
    }

    #[test]
    fn test_remove_leaves_holes() {
        let mut line = line();
        let removed = line.remove(&[1, 5]);
        assert_eq!(removed.len(), 2);
        assert_eq!(line.len(), 7);
        assert_eq!(line.cards_on_board(), 5);
        assert!(line.card_at(1).is_none());
        assert!(line.contains(1));
        assert!(!line.contains(7));
    }

    #[test]
    fn test_won_when_only_anchors_remain() {
        let config = SessionConfig::default();
        let mut line = line();
        assert!(!line.is_won(&config));

        line.remove(&[1, 2]);
        line.remove(&[3, 4]);
        assert!(!line.is_won(&config));

        line.remove(&[5]);
        assert!(line.is_won(&config));
    }
}
