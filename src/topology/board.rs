//! Cell storage shared by every topology, and the snapshot handed to
//! observers.
//!
//! Cells live in an `im::Vector`, so a snapshot is an O(1) structural
//! share of the live board rather than a copy.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Card;

/// A fixed number of cells, each empty or holding one card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vector<Option<Card>>,
}

impl Board {
    /// A board of `len` empty cells.
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            cells: std::iter::repeat(None).take(len).collect(),
        }
    }

    /// Number of cells, occupied or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Does the board have no cells at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Card in cell `idx`, if any.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Card> {
        self.cells.get(idx).and_then(Option::as_ref)
    }

    /// Is cell `idx` occupied?
    #[must_use]
    pub fn is_occupied(&self, idx: usize) -> bool {
        self.get(idx).is_some()
    }

    /// Empty cell `idx`, returning what it held.
    pub fn take(&mut self, idx: usize) -> Option<Card> {
        self.cells.get_mut(idx).and_then(Option::take)
    }

    /// Put `card` in cell `idx`, returning the previous occupant.
    ///
    /// Out-of-range indices are ignored; topologies only pass indices they
    /// derived from valid positions.
    pub fn place(&mut self, idx: usize, card: Card) -> Option<Card> {
        self.cells.get_mut(idx).and_then(|cell| cell.replace(card))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Card>> + '_ {
        self.cells.iter().map(Option::as_ref)
    }

    /// Iterate occupied cells as `(index, card)`.
    pub fn cards(&self) -> impl Iterator<Item = (usize, &Card)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.as_ref().map(|card| (idx, card)))
    }

    /// Remove every card, returning them in index order.
    pub fn drain(&mut self) -> Vec<Card> {
        let cards: Vec<Card> = self.cells.iter().flatten().copied().collect();
        self.cells = Self::empty(self.cells.len()).cells;
        cards
    }
}

impl FromIterator<Option<Card>> for Board {
    fn from_iter<I: IntoIterator<Item = Option<Card>>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Shape of the board, so a renderer knows how to lay cells out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// A single row of `len` cells.
    Linear { len: usize },
    /// A `size`×`size` square, row-major.
    Grid { size: usize },
    /// A triangle of `rows` rows, row `r` holding `r + 1` cells.
    Pyramid { rows: usize },
}

/// Read-only view of a board handed to observers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub layout: Layout,
    pub cells: Board,
    /// Cards still waiting in the stock.
    pub stock: usize,
    /// Top of the waste pile, for layouts that have one.
    pub waste_top: Option<Card>,
}
