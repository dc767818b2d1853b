//! Match rule trait and game outcome.
//!
//! A rule decides which cards may take part in a move and whether two of
//! them pair up. It consults the topology for the positional half of that
//! question but owns the card half (sums, suits, ranks).

use serde::{Deserialize, Serialize};

use crate::topology::Topology;

/// State of a session from the player's point of view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves may still be made.
    #[default]
    InProgress,
    /// The goal state was reached.
    Won,
    /// No legal move remains and the goal was not reached.
    Lost,
}

impl Outcome {
    /// Has the session ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Match rule trait.
///
/// Rules are generic over the topology so that any rule family can be
/// paired with any board shape.
///
/// ## Implementation Notes
///
/// - `is_eligible`: must reject anchors, empty and covered positions
/// - `matches`: both positions are already known to be eligible and distinct
/// - `removable_alone`: `false` unless a single card can leave the board
///   without a partner
pub trait MatchRule<T: Topology> {
    /// May the card at `pos` take part in a move?
    fn is_eligible(&self, topology: &T, pos: T::Position) -> bool {
        topology.is_selectable(pos)
    }

    /// Do the cards at `a` and `b` pair up?
    fn matches(&self, topology: &T, a: T::Position, b: T::Position) -> bool;

    /// Can the card at `pos` be removed on its own?
    fn removable_alone(&self, _topology: &T, _pos: T::Position) -> bool {
        false
    }
}
