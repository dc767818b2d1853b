//! Grid topology (Meeting in the Garden).
//!
//! A square lattice with the King protagonist in one corner and the Queen
//! protagonist in the opposite one. Two cells are within reach when they
//! touch (including diagonally), or when they sit two apart on a straight
//! line with a card in the middle.
//!
//! After a removal the board is refilled row-major from the stock. Once the
//! stock runs dry the remaining cards are packed towards the top-left in
//! row-major order, which can move the protagonists.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{chebyshev, Board, BoardSnapshot, Layout, Removed, Topology};
use crate::core::{Card, EngineError, EngineResult, Rank, Role, SessionConfig};

/// Smallest supported grid.
pub const MIN_SIZE: usize = 5;

/// Largest supported grid.
pub const MAX_SIZE: usize = 6;

/// A `(row, col)` cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub row: usize,
    pub col: usize,
}

impl GridPos {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    fn pair(self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square board with a stock behind it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Board,
    /// Refill order: front first.
    stock: Vector<Card>,
    king: GridPos,
    queen: GridPos,
}

impl Grid {
    /// Build a grid from row-major `cells` and a `stock`.
    ///
    /// The protagonists are found by their role tags.
    pub fn new(size: usize, cells: Vec<Option<Card>>, stock: Vec<Card>) -> EngineResult<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(EngineError::InvalidLayout(format!("grid size {size}")));
        }
        if cells.len() != size * size {
            return Err(EngineError::InvalidLayout(format!(
                "{} cells for a {size}x{size} grid",
                cells.len()
            )));
        }

        let cells: Board = cells.into_iter().collect();
        let king = Self::find_role(size, &cells, Role::KingProtagonist)
            .ok_or_else(|| EngineError::MissingCard("King protagonist".into()))?;
        let queen = Self::find_role(size, &cells, Role::QueenProtagonist)
            .ok_or_else(|| EngineError::MissingCard("Queen protagonist".into()))?;

        Ok(Self {
            size,
            cells,
            stock: stock.into_iter().collect(),
            king,
            queen,
        })
    }

    fn find_role(size: usize, cells: &Board, role: Role) -> Option<GridPos> {
        cells
            .cards()
            .find(|(_, card)| card.role == role)
            .map(|(idx, _)| GridPos::new(idx / size, idx % size))
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Where the King protagonist currently sits.
    #[must_use]
    pub fn king(&self) -> GridPos {
        self.king
    }

    /// Where the Queen protagonist currently sits.
    #[must_use]
    pub fn queen(&self) -> GridPos {
        self.queen
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

    fn index(&self, pos: GridPos) -> usize {
        pos.row * self.size + pos.col
    }

    fn pos(&self, idx: usize) -> GridPos {
        GridPos::new(idx / self.size, idx % self.size)
    }

    /// Cells touching `pos`, diagonals included.
    #[must_use]
    pub fn neighbors(&self, pos: GridPos) -> SmallVec<[GridPos; 8]> {
        let mut out = SmallVec::new();
        for row in pos.row.saturating_sub(1)..=(pos.row + 1).min(self.size - 1) {
            for col in pos.col.saturating_sub(1)..=(pos.col + 1).min(self.size - 1) {
                let other = GridPos::new(row, col);
                if other != pos {
                    out.push(other);
                }
            }
        }
        out
    }

    /// Is a rival King or Queen standing next to either protagonist?
    #[must_use]
    pub fn suitor_blocks(&self) -> bool {
        [self.king, self.queen]
            .iter()
            .flat_map(|&anchor| self.neighbors(anchor))
            .filter_map(|pos| self.card_at(pos))
            .any(|card| !card.is_anchor() && matches!(card.rank, Rank::King | Rank::Queen))
    }

    /// Fill empty cells row-major from the front of the stock.
    fn refill(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells.is_occupied(idx) {
                continue;
            }
            let Some(card) = self.stock.pop_front() else {
                break;
            };
            self.cells.place(idx, card);
        }
        log::trace!("grid: refilled, {} card(s) left in stock", self.stock.len());
    }

    /// Pack every card towards the top-left in row-major order.
    fn compress(&mut self) {
        let cards = self.cells.drain();
        for (idx, card) in cards.into_iter().enumerate() {
            match card.role {
                Role::KingProtagonist => self.king = self.pos(idx),
                Role::QueenProtagonist => self.queen = self.pos(idx),
                Role::None => {}
            }
            self.cells.place(idx, card);
        }
        log::debug!(
            "grid: compressed to {} card(s), king {} queen {}",
            self.cells.occupied(),
            self.king,
            self.queen
        );
    }
}

impl Topology for Grid {
    type Position = GridPos;

    fn positions(&self) -> Vec<GridPos> {
        (0..self.cells.len()).map(|idx| self.pos(idx)).collect()
    }

    fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn card_at(&self, pos: GridPos) -> Option<&Card> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(self.index(pos))
    }

    fn reachable(&self, a: GridPos, b: GridPos) -> bool {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);

        match chebyshev(a.pair(), b.pair()) {
            1 => true,
            // Two apart on a row, column or diagonal, with a card in between.
            2 if dr % 2 == 0 && dc % 2 == 0 => {
                let mid = GridPos::new((a.row + b.row) / 2, (a.col + b.col) / 2);
                self.card_at(mid).is_some()
            }
            _ => false,
        }
    }

    fn remove(&mut self, positions: &[GridPos]) -> Removed {
        let removed: Removed = positions
            .iter()
            .filter_map(|&pos| {
                let idx = self.index(pos);
                self.cells.take(idx)
            })
            .collect();

        self.refill();
        if self.stock.is_empty() && self.cells.occupied() < self.cells.len() {
            self.compress();
        }
        removed
    }

    fn cards_on_board(&self) -> usize {
        self.cells.occupied()
    }

    fn cards_in_reserve(&self) -> usize {
        self.stock.len()
    }

    fn is_won(&self, config: &SessionConfig) -> bool {
        let meeting = chebyshev(self.king.pair(), self.queen.pair()) == 1;
        let cleared = config.early_meeting || self.cells.occupied() == 2;
        let blocked = config.suitor_rule && self.suitor_blocks();
        meeting && cleared && !blocked
    }

    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            layout: Layout::Grid { size: self.size },
            cells: self.cells.clone(),
            stock: self.stock.len(),
            waste_top: None,
        }
    }
}
