//! Match rules and win/loss evaluation.
//!
//! Two rule families ship with the engine:
//! - [`SumRule`]: pairs summing to a target, lone cards worth the target
//! - [`SuitOrRankRule`]: same suit or same rank, within topological reach
//!
//! Either can be composed with any [`Topology`](crate::topology::Topology).

pub mod engine;
pub mod evaluator;
pub mod moves;
pub mod suit_rank;
pub mod sum;

pub use engine::{MatchRule, Outcome};
pub use evaluator::evaluate;
pub use moves::{has_legal_move, legal_moves, Move};
pub use suit_rank::SuitOrRankRule;
pub use sum::SumRule;
