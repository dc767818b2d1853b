//! Selection state and the results of a click.

use serde::{Deserialize, Serialize};

use super::history::MoveRecord;
use crate::core::Card;

/// The provisional selection.
///
/// A selected position always holds the snapshotted card and is eligible
/// under the session's rule. The session clears the selection as soon as
/// either stops being true (the card moved, was removed, or got covered).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<P> {
    /// Nothing selected.
    Idle,
    /// One card selected, waiting for a partner.
    One { position: P, card: Card },
}

impl<P> Default for Selection<P> {
    fn default() -> Self {
        Selection::Idle
    }
}

impl<P: Copy> Selection<P> {
    /// The selected position, if any.
    #[must_use]
    pub fn position(&self) -> Option<P> {
        match self {
            Selection::Idle => None,
            Selection::One { position, .. } => Some(*position),
        }
    }

    /// The selected card, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            Selection::Idle => None,
            Selection::One { card, .. } => Some(*card),
        }
    }

    /// Is nothing selected?
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// What a click on a position did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation<P> {
    /// Empty, anchor, covered or out of play. Nothing changed.
    Ignored,
    /// Nothing was selected; the position is now selected.
    Selected(P),
    /// The selected position was clicked again and released.
    Deselected(P),
    /// The clicked card paired with the selection and both left the board.
    Matched(MoveRecord<P>),
    /// The clicked card did not pair; it replaces the old selection.
    Reselected { previous: P, current: P },
    /// The clicked card left the board on its own.
    RemovedAlone(MoveRecord<P>),
}

impl<P> Activation<P> {
    /// Did this click remove cards?
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Activation::Matched(_) | Activation::RemovedAlone(_))
    }
}
