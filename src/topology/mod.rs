//! Board topologies.
//!
//! A topology owns the cards on the table and knows three things about
//! them: which positions exist, which pairs of positions are close enough
//! to match, and how the board settles after cards are removed.
//!
//! ## Variants
//!
//! - [`Linear`]: Royal Marriage. One row, King and Queen anchors at the ends.
//! - [`Grid`]: Meeting in the Garden. Square lattice with refill and
//!   compression.
//! - [`Pyramid`]: Pyramid Solitaire. Seven-row triangle with coverage, a
//!   stock and a waste pile.
//!
//! Topologies never decide whether two cards *match*; that belongs to a
//! [`MatchRule`](crate::rules::MatchRule). They only answer the
//! positional half of the question.

pub mod board;
pub mod grid;
pub mod linear;
pub mod pyramid;

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;
use smallvec::SmallVec;

use crate::core::{Card, SessionConfig};

pub use board::{Board, BoardSnapshot, Layout};
pub use grid::{Grid, GridPos};
pub use linear::Linear;
pub use pyramid::{Pyramid, PyramidPos};

/// Cards removed by one move. Never more than two.
pub type Removed = SmallVec<[Card; 2]>;

/// Board shape and post-removal maintenance.
///
/// ## Implementation Notes
///
/// - `card_at` returns `None` for both empty and out-of-range positions;
///   use `contains` to tell them apart.
/// - `remove` is only called with positions the session has already
///   validated (in range, occupied, not anchors, not covered).
/// - `is_won` must be a pure function of the current board.
pub trait Topology: Clone + Debug {
    /// Coordinate type for this board.
    type Position: Copy + Eq + Ord + Hash + Debug + Display + Serialize + DeserializeOwned;

    /// Every valid position, in canonical order.
    fn positions(&self) -> Vec<Self::Position>;

    /// Is `pos` a position on this board?
    fn contains(&self, pos: Self::Position) -> bool;

    /// The card at `pos`, if any.
    fn card_at(&self, pos: Self::Position) -> Option<&Card>;

    /// Does `pos` hold a protagonist anchor?
    fn is_anchor(&self, pos: Self::Position) -> bool {
        self.card_at(pos).is_some_and(Card::is_anchor)
    }

    /// Is the card at `pos` held down by other cards?
    fn is_covered(&self, _pos: Self::Position) -> bool {
        false
    }

    /// Could `pos` take part in a move: occupied, not an anchor, not covered.
    fn is_selectable(&self, pos: Self::Position) -> bool {
        self.card_at(pos).is_some_and(|card| !card.is_anchor()) && !self.is_covered(pos)
    }

    /// Are `a` and `b` positioned so that their cards may be paired?
    fn reachable(&self, a: Self::Position, b: Self::Position) -> bool;

    /// Remove the cards at `positions` and settle the board.
    fn remove(&mut self, positions: &[Self::Position]) -> Removed;

    /// Turn a card from the stock, if this board has one.
    ///
    /// Returns `false` when nothing changed.
    fn draw(&mut self) -> bool {
        false
    }

    /// Cards on the board itself.
    fn cards_on_board(&self) -> usize;

    /// Cards off the board but still in play (stock and waste).
    fn cards_in_reserve(&self) -> usize {
        0
    }

    /// Has the goal state been reached?
    fn is_won(&self, config: &SessionConfig) -> bool;

    /// Does this game end in a loss once no legal move remains?
    fn detects_stalemate(&self) -> bool {
        false
    }

    /// Presentation view of the board.
    fn snapshot(&self) -> BoardSnapshot;
}

/// Chebyshev (king-move) distance between two grid-like coordinates.
pub(crate) fn chebyshev(a: (usize, usize), b: (usize, usize)) -> usize {
    a.0.abs_diff(b.0).max(a.1.abs_diff(b.1))
}
