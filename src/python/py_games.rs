//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineError, SessionConfig, Suit};
use crate::games::{
    GardenBuilder, GardenSession, PyramidBuilder, PyramidSession, RoyalMarriageBuilder,
    RoyalMarriageSession,
};
use crate::rules::{Move, Outcome};
use crate::session::Activation;
use crate::topology::grid::{MAX_SIZE, MIN_SIZE};
use crate::topology::{GridPos, PyramidPos, Topology};

fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "in_progress",
        Outcome::Won => "won",
        Outcome::Lost => "lost",
    }
}

fn activation_name<P>(activation: &Activation<P>) -> &'static str {
    match activation {
        Activation::Ignored => "ignored",
        Activation::Selected(_) => "selected",
        Activation::Deselected(_) => "deselected",
        Activation::Matched(_) => "matched",
        Activation::Reselected { .. } => "reselected",
        Activation::RemovedAlone(_) => "removed_alone",
    }
}

fn parse_suit(name: &str) -> PyResult<Suit> {
    match name.to_ascii_lowercase().as_str() {
        "spades" => Ok(Suit::Spades),
        "hearts" => Ok(Suit::Hearts),
        "diamonds" => Ok(Suit::Diamonds),
        "clubs" => Ok(Suit::Clubs),
        other => Err(PyErr::new::<PyValueError, _>(format!("unknown suit {other:?}"))),
    }
}

/// Waste is reported as `None`, pyramid cells as `(row, col)`.
fn pyramid_pos(pos: PyramidPos) -> Option<(usize, usize)> {
    match pos {
        PyramidPos::Cell { row, col } => Some((row, col)),
        PyramidPos::Waste => None,
    }
}

/// Python wrapper for Pyramid Solitaire.
#[pyclass(name = "Pyramid", unsendable)]
pub struct PyPyramid {
    session: PyramidSession,
}

#[pymethods]
impl PyPyramid {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - seed: shuffle seed
    /// - redeals: times the waste may be turned back into the stock
    /// - points_per_move: score for each removal
    #[new]
    #[pyo3(signature = (seed = 42, redeals = 2, points_per_move = 10))]
    fn new(seed: u64, redeals: u32, points_per_move: i64) -> PyResult<Self> {
        let config = SessionConfig::new()
            .with_redeals(redeals)
            .with_points_per_move(points_per_move);
        let session = PyramidBuilder::new()
            .config(config)
            .build_seeded(seed)
            .map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Click a pyramid cell.
    fn activate(&mut self, row: usize, col: usize) -> PyResult<&'static str> {
        let activation = self
            .session
            .activate(PyramidPos::cell(row, col))
            .map_err(to_py_err)?;
        Ok(activation_name(&activation))
    }

    /// Click the waste card.
    fn activate_waste(&mut self) -> PyResult<&'static str> {
        let activation = self.session.activate(PyramidPos::Waste).map_err(to_py_err)?;
        Ok(activation_name(&activation))
    }

    /// Turn the next stock card. Returns False if nothing could be drawn.
    fn draw(&mut self) -> bool {
        self.session.draw()
    }

    /// Positions of a suggested move (`None` stands for the waste).
    fn hint(&self) -> Option<Vec<Option<(usize, usize)>>> {
        self.session
            .hint()
            .map(|m| m.positions().into_iter().map(pyramid_pos).collect())
    }

    /// Label of the card at a cell, e.g. "10♦", or None if empty.
    fn card(&self, row: usize, col: usize) -> Option<String> {
        self.session
            .topology()
            .card_at(PyramidPos::cell(row, col))
            .map(ToString::to_string)
    }

    #[getter]
    fn waste_top(&self) -> Option<String> {
        self.session.topology().waste_top().map(ToString::to_string)
    }

    #[getter]
    fn stock_len(&self) -> usize {
        self.session.topology().stock_len()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.session.outcome())
    }
}

/// Python wrapper for Royal Marriage.
#[pyclass(name = "RoyalMarriage", unsendable)]
pub struct PyRoyalMarriage {
    session: RoyalMarriageSession,
}

#[pymethods]
impl PyRoyalMarriage {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - seed: shuffle seed
    /// - anchor_suit: suit of the King and Queen ("hearts" by default)
    #[new]
    #[pyo3(signature = (seed = 42, anchor_suit = "hearts"))]
    fn new(seed: u64, anchor_suit: &str) -> PyResult<Self> {
        let session = RoyalMarriageBuilder::new()
            .anchor_suit(parse_suit(anchor_suit)?)
            .build_seeded(seed)
            .map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Click the card at `index`.
    fn activate(&mut self, index: usize) -> PyResult<&'static str> {
        let activation = self.session.activate(index).map_err(to_py_err)?;
        Ok(activation_name(&activation))
    }

    /// Always False: the line has no stock.
    fn draw(&mut self) -> bool {
        self.session.draw()
    }

    /// Indices of a suggested pair.
    fn hint(&self) -> Option<Vec<usize>> {
        self.session.hint().map(|m| m.positions().into_vec())
    }

    /// Labels of the line, `None` for removed cards.
    fn cards(&self) -> Vec<Option<String>> {
        self.session
            .snapshot()
            .cells
            .iter()
            .map(|cell| cell.map(ToString::to_string))
            .collect()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.session.outcome())
    }
}

/// Python wrapper for Meeting in the Garden.
#[pyclass(name = "Garden", unsendable)]
pub struct PyGarden {
    session: GardenSession,
}

#[pymethods]
impl PyGarden {
    /// Deal a new game.
    ///
    /// # Arguments
    /// - seed: shuffle seed
    /// - size: 5 or 6
    /// - suitor_rule: rival Kings and Queens next to a protagonist block the win
    /// - early_meeting: win as soon as the protagonists touch
    #[new]
    #[pyo3(signature = (seed = 42, size = 5, suitor_rule = false, early_meeting = false))]
    fn new(seed: u64, size: usize, suitor_rule: bool, early_meeting: bool) -> PyResult<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "garden size must be 5 or 6, got {size}"
            )));
        }
        let config = SessionConfig::new()
            .with_suitor_rule(suitor_rule)
            .with_early_meeting(early_meeting);
        let session = GardenBuilder::new()
            .size(size)
            .config(config)
            .build_seeded(seed)
            .map_err(to_py_err)?;
        Ok(Self { session })
    }

    /// Click the cell at `(row, col)`.
    fn activate(&mut self, row: usize, col: usize) -> PyResult<&'static str> {
        let activation = self
            .session
            .activate(GridPos::new(row, col))
            .map_err(to_py_err)?;
        Ok(activation_name(&activation))
    }

    /// Always False: the garden refills by itself.
    fn draw(&mut self) -> bool {
        self.session.draw()
    }

    /// Cells of a suggested pair.
    fn hint(&self) -> Option<Vec<(usize, usize)>> {
        self.session.hint().map(|m| match m {
            Move::Single(p) => vec![(p.row, p.col)],
            Move::Pair(a, b) => vec![(a.row, a.col), (b.row, b.col)],
        })
    }

    #[getter]
    fn king(&self) -> (usize, usize) {
        let pos = self.session.topology().king();
        (pos.row, pos.col)
    }

    #[getter]
    fn queen(&self) -> (usize, usize) {
        let pos = self.session.topology().queen();
        (pos.row, pos.col)
    }

    #[getter]
    fn score(&self) -> i64 {
        self.session.score()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.session.moves()
    }

    #[getter]
    fn outcome(&self) -> &'static str {
        outcome_name(self.session.outcome())
    }
}
