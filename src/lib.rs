//! # solitaire-match
//!
//! One rule engine for positional card-matching solitaires: Pyramid
//! Solitaire, Royal Marriage and Meeting in the Garden.
//!
//! ## Design Principles
//!
//! 1. **Topology x Rule**: A game is a board shape (`Topology`) composed
//!    with a pairing rule (`MatchRule`). Neither knows about the other's
//!    half of the question.
//!
//! 2. **Clicks In, Snapshots Out**: The only inbound event is
//!    `Session::activate`. Renderers observe the session through
//!    `SessionObserver`; they never drive it.
//!
//! 3. **No Hidden Randomness**: Decks come from a `DeckProvider`. A seed
//!    fully determines a deal, and every move is deterministic.
//!
//! ## Architecture
//!
//! - **Synchronous Moves**: Selection, removal, refill and evaluation run
//!   to completion inside one call.
//!
//! - **Persistent Data Structures**: Board cells, stock and history use
//!   `im-rs`, so snapshots handed to observers are O(1) copies.
//!
//! ## Modules
//!
//! - `core`: Cards, RNG, configuration, errors
//! - `deck`: Deck provider contract and seeded shuffles
//! - `topology`: Linear, Grid and Pyramid boards
//! - `rules`: Sum and suit-or-rank rules, legal moves, win/loss evaluation
//! - `session`: Selection state machine and match engine
//! - `games`: Builders dealing the three games
//! - `playout`: Policy-driven automatic play

pub mod core;
pub mod deck;
pub mod topology;
pub mod rules;
pub mod session;
pub mod games;
pub mod playout;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Card, Rank, Role, Suit,
    GameRng, SessionConfig,
    EngineError, EngineResult,
};

pub use crate::deck::{DeckProvider, FixedDeck, SeededDeck};

pub use crate::topology::{
    Topology, Board, BoardSnapshot, Layout,
    Linear, Grid, GridPos, Pyramid, PyramidPos,
};

pub use crate::rules::{
    MatchRule, Outcome, Move,
    SumRule, SuitOrRankRule,
    evaluate, legal_moves, has_legal_move,
};

pub use crate::session::{
    Session, Selection, Activation,
    MatchOutcome, MoveRecord, SessionObserver,
};

pub use crate::games::{
    PyramidBuilder, RoyalMarriageBuilder, GardenBuilder,
    PyramidSession, RoyalMarriageSession, GardenSession,
};

pub use crate::playout::{
    playout, PlayoutPolicy, PlayoutReport,
    FirstMovePolicy, RandomPlayout,
};
