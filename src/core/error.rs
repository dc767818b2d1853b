//! Engine errors.
//!
//! Only caller misuse is an error. A mismatched pair or a stuck board is an
//! ordinary game state and is reported through `MatchOutcome` / `Outcome`.

use thiserror::Error;

/// Precondition violations raised by the match engine and deal builders.
///
/// Positions are carried pre-formatted so the error stays independent of
/// the topology that raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The position does not exist on this board.
    #[error("position {0} is out of range")]
    InvalidPosition(String),

    /// The position exists but holds no card.
    #[error("position {0} is empty")]
    EmptyPosition(String),

    /// The position holds a protagonist anchor, which never moves.
    #[error("position {0} holds an anchor")]
    AnchorPosition(String),

    /// The position is covered and cannot take part in a move.
    #[error("position {0} is covered")]
    Covered(String),

    /// Both sides of a match name the same position.
    #[error("cannot match position {0} with itself")]
    SamePosition(String),

    /// The card is not removable on its own.
    #[error("card at {0} cannot be removed alone")]
    NotRemovableAlone(String),

    /// The session already reached a terminal outcome.
    #[error("session is already over")]
    SessionOver,

    /// A board was built with an impossible shape.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// The deck provider broke its contract.
    #[error("deck must hold {expected} cards, got {actual}")]
    DeckSize { expected: usize, actual: usize },

    /// The same face appeared twice in a deck.
    #[error("deck holds {0} more than once")]
    DuplicateCard(String),

    /// A card the game needs was missing from the deck.
    #[error("deck is missing {0}")]
    MissingCard(String),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
