//! Concrete games.
//!
//! Each game is one topology composed with one match rule, dealt from a
//! [`DeckProvider`](crate::deck::DeckProvider) by a builder:
//!
//! | Game | Topology | Rule |
//! |------|----------|------|
//! | Pyramid Solitaire | [`Pyramid`] | [`SumRule`] |
//! | Royal Marriage | [`Linear`] | [`SuitOrRankRule`] |
//! | Meeting in the Garden | [`Grid`] | [`SuitOrRankRule`] |

mod garden;
mod pyramid;
mod royal_marriage;

use crate::rules::{SuitOrRankRule, SumRule};
use crate::session::Session;
use crate::topology::{Grid, Linear, Pyramid};

pub use garden::GardenBuilder;
pub use pyramid::PyramidBuilder;
pub use royal_marriage::RoyalMarriageBuilder;

/// Pyramid Solitaire.
pub type PyramidSession = Session<Pyramid, SumRule>;

/// Royal Marriage.
pub type RoyalMarriageSession = Session<Linear, SuitOrRankRule>;

/// Meeting in the Garden.
pub type GardenSession = Session<Grid, SuitOrRankRule>;
