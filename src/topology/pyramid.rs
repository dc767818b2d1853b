//! Pyramid topology (Pyramid Solitaire).
//!
//! Twenty-eight cards in a seven-row triangle, row `r` holding `r + 1`
//! cards. A card is covered while both cards directly below it are still
//! in place. The rest of the deck forms a stock that is turned one card at
//! a time onto a waste pile whose top card is always playable.
//!
//! Removed pyramid cells stay empty for the rest of the game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{Board, BoardSnapshot, Layout, Removed, Topology};
use crate::core::{Card, EngineError, EngineResult, SessionConfig};

/// Rows in a standard pyramid.
pub const PYRAMID_ROWS: usize = 7;

/// Cells in a pyramid of `rows` rows.
#[must_use]
pub const fn cell_count(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

/// A pyramid cell or the waste pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PyramidPos {
    /// Cell `col` of row `row`, valid iff `col <= row < rows`.
    Cell { row: usize, col: usize },
    /// Top of the waste pile.
    Waste,
}

impl PyramidPos {
    /// Shorthand for a cell position.
    #[must_use]
    pub const fn cell(row: usize, col: usize) -> Self {
        PyramidPos::Cell { row, col }
    }
}

impl std::fmt::Display for PyramidPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PyramidPos::Cell { row, col } => write!(f, "({row}, {col})"),
            PyramidPos::Waste => write!(f, "waste"),
        }
    }
}

/// The pyramid, its stock and its waste pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pyramid {
    rows: usize,
    cells: Board,
    /// Coverage per cell, recomputed after every removal.
    covered: Vec<bool>,
    /// Draw order: front first.
    stock: Vector<Card>,
    /// Top is the back.
    waste: Vector<Card>,
    redeals_left: u32,
}

impl Pyramid {
    /// Deal a full pyramid from `cards` (row by row, left to right) and put
    /// `stock` behind it.
    pub fn new(cards: Vec<Card>, stock: Vec<Card>, redeals: u32) -> EngineResult<Self> {
        Self::with_cells(PYRAMID_ROWS, cards.into_iter().map(Some).collect(), stock, redeals)
    }

    /// Build a pyramid of `rows` rows from explicit cells, some possibly
    /// already empty.
    pub fn with_cells(
        rows: usize,
        cells: Vec<Option<Card>>,
        stock: Vec<Card>,
        redeals: u32,
    ) -> EngineResult<Self> {
        if rows == 0 || cells.len() != cell_count(rows) {
            return Err(EngineError::InvalidLayout(format!(
                "{} cells for a {rows}-row pyramid",
                cells.len()
            )));
        }

        let mut pyramid = Self {
            rows,
            cells: cells.into_iter().collect(),
            covered: vec![false; cell_count(rows)],
            stock: stock.into_iter().collect(),
            waste: Vector::new(),
            redeals_left: redeals,
        };
        pyramid.recompute_coverage();
        Ok(pyramid)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cards left in the stock.
    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Stock cards in draw order.
    pub fn stock(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock.iter()
    }

    /// Waste cards, bottom first.
    pub fn waste(&self) -> impl Iterator<Item = &Card> + '_ {
        self.waste.iter()
    }

    /// Cards on the waste pile.
    #[must_use]
    pub fn waste_len(&self) -> usize {
        self.waste.len()
    }

    /// The playable waste card.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Stock recycles still available.
    #[must_use]
    pub fn redeals_left(&self) -> u32 {
        self.redeals_left
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (col <= row && row < self.rows).then(|| cell_count(row) + col)
    }

    fn occupied(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|idx| self.cells.is_occupied(idx))
    }

    fn recompute_coverage(&mut self) {
        for row in 0..self.rows {
            for col in 0..=row {
                let covered = self.occupied(row + 1, col) && self.occupied(row + 1, col + 1);
                self.covered[cell_count(row) + col] = covered;
            }
        }
    }
}

impl Topology for Pyramid {
    type Position = PyramidPos;

    fn positions(&self) -> Vec<PyramidPos> {
        (0..self.rows)
            .flat_map(|row| (0..=row).map(move |col| PyramidPos::cell(row, col)))
            .chain(std::iter::once(PyramidPos::Waste))
            .collect()
    }

    fn contains(&self, pos: PyramidPos) -> bool {
        match pos {
            PyramidPos::Cell { row, col } => self.index(row, col).is_some(),
            PyramidPos::Waste => true,
        }
    }

    fn card_at(&self, pos: PyramidPos) -> Option<&Card> {
        match pos {
            PyramidPos::Cell { row, col } => self.cells.get(self.index(row, col)?),
            PyramidPos::Waste => self.waste_top(),
        }
    }

    fn is_covered(&self, pos: PyramidPos) -> bool {
        match pos {
            PyramidPos::Cell { row, col } => self
                .index(row, col)
                .is_some_and(|idx| self.covered[idx]),
            PyramidPos::Waste => false,
        }
    }

    fn reachable(&self, a: PyramidPos, b: PyramidPos) -> bool {
        a != b && !self.is_covered(a) && !self.is_covered(b)
    }

    fn remove(&mut self, positions: &[PyramidPos]) -> Removed {
        let mut removed = Removed::new();
        for &pos in positions {
            let card = match pos {
                PyramidPos::Cell { row, col } => {
                    self.index(row, col).and_then(|idx| self.cells.take(idx))
                }
                PyramidPos::Waste => self.waste.pop_back(),
            };
            removed.extend(card);
        }
        self.recompute_coverage();
        removed
    }

    fn draw(&mut self) -> bool {
        if let Some(card) = self.stock.pop_front() {
            self.waste.push_back(card);
            log::trace!("pyramid: drew {card}, {} left in stock", self.stock.len());
            return true;
        }

        if self.waste.is_empty() || self.redeals_left == 0 {
            return false;
        }

        self.redeals_left -= 1;
        self.stock = std::mem::take(&mut self.waste);
        log::debug!(
            "pyramid: waste turned back into stock, {} redeal(s) left",
            self.redeals_left
        );
        true
    }

    fn cards_on_board(&self) -> usize {
        self.cells.occupied()
    }

    fn cards_in_reserve(&self) -> usize {
        self.stock.len() + self.waste.len()
    }

    fn is_won(&self, _config: &SessionConfig) -> bool {
        self.cells.occupied() == 0
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            layout: Layout::Pyramid { rows: self.rows },
            cells: self.cells.clone(),
            stock: self.stock.len(),
            waste_top: self.waste_top().copied(),
        }
    }
}
