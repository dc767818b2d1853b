//! Move records.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Card;

/// A completed removal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord<P> {
    /// Move number, starting at 1.
    pub sequence: u32,
    /// Where the removed cards were.
    pub positions: SmallVec<[P; 2]>,
    /// The removed cards, in the same order as `positions`.
    pub cards: SmallVec<[Card; 2]>,
    /// Score once this move was applied.
    pub score_after: i64,
}

/// Result of asking the engine to pair two positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome<P> {
    /// Both cards were removed.
    Matched(MoveRecord<P>),
    /// The cards do not pair. The board is untouched.
    Rejected,
}

impl<P> MatchOutcome<P> {
    /// Did the match go through?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }
}
