//! Python bindings for the solitaire engine.
//!
//! # Quick Start
//!
//! ```python
//! import solitaire_match as sm
//!
//! game = sm.Pyramid(seed=42)
//! hint = game.hint()          # e.g. [(6, 2), (6, 5)]
//! game.activate(6, 2)         # "selected"
//! game.activate(6, 5)         # "matched"
//! game.draw()
//! print(game.score, game.moves, game.outcome)
//! ```
//!
//! Sessions hold observer boxes, so the classes are `unsendable` and stay
//! on the thread that created them.

use pyo3::prelude::*;

mod py_games;

pub use py_games::*;

/// solitaire_match: positional card-matching solitaire engines.
#[pymodule]
fn solitaire_match(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPyramid>()?;
    m.add_class::<PyRoyalMarriage>()?;
    m.add_class::<PyGarden>()?;
    Ok(())
}
