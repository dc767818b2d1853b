//! Policy-driven automatic play.
//!
//! A playout repeatedly asks a policy to pick one of the legal moves and
//! plays it through [`Session::activate`], exactly as a player clicking
//! the board would. When no move is left the stock is drawn (Pyramid); the
//! playout stops once the session ends, nothing can be drawn, or the step
//! limit is reached.
//!
//! ## Key Types
//!
//! - `PlayoutPolicy`: picks a move from the legal list
//! - `FirstMovePolicy`: always the first legal move (same order as hints)
//! - `RandomPlayout`: uniform choice from a seeded `GameRng`
//! - `PlayoutReport`: where the playout ended

use serde::{Deserialize, Serialize};

use crate::core::{EngineResult, GameRng};
use crate::rules::{MatchRule, Move, Outcome};
use crate::session::Session;
use crate::topology::Topology;

// =============================================================================
// Policies
// =============================================================================

/// Chooses which legal move to play.
pub trait PlayoutPolicy<P> {
    /// Index into `moves` of the move to play, or `None` to stop.
    ///
    /// `moves` is never empty.
    fn choose(&mut self, moves: &[Move<P>]) -> Option<usize>;
}

/// Always plays the first legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMovePolicy;

impl<P> PlayoutPolicy<P> for FirstMovePolicy {
    fn choose(&mut self, _moves: &[Move<P>]) -> Option<usize> {
        Some(0)
    }
}

/// Plays uniformly random legal moves.
#[derive(Clone, Debug)]
pub struct RandomPlayout {
    rng: GameRng,
}

impl RandomPlayout {
    /// A policy whose choices are fixed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("playout"),
        }
    }
}

impl<P> PlayoutPolicy<P> for RandomPlayout {
    fn choose(&mut self, moves: &[Move<P>]) -> Option<usize> {
        Some(self.rng.gen_range_usize(0..moves.len()))
    }
}

// =============================================================================
// Playout
// =============================================================================

/// Summary of a finished playout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutReport {
    /// Moves and draws performed by this playout.
    pub steps: u32,
    pub outcome: Outcome,
    /// Session move count afterwards.
    pub moves: u32,
    /// Session score afterwards.
    pub score: i64,
}

/// Play `session` forward with `policy`.
///
/// `max_steps == 0` means no limit.
pub fn playout<T, R, S>(
    session: &mut Session<T, R>,
    policy: &mut S,
    max_steps: u32,
) -> EngineResult<PlayoutReport>
where
    T: Topology,
    R: MatchRule<T>,
    S: PlayoutPolicy<T::Position> + ?Sized,
{
    let mut steps = 0;

    while !session.outcome().is_terminal() && (max_steps == 0 || steps < max_steps) {
        let moves = session.legal_moves();

        if moves.is_empty() {
            if !session.draw() {
                break;
            }
            steps += 1;
            continue;
        }

        let Some(chosen) = policy.choose(&moves).and_then(|idx| moves.get(idx)) else {
            break;
        };
        if !play(session, *chosen)? {
            log::warn!("playout: {chosen:?} was legal but did not apply");
            break;
        }
        steps += 1;
    }

    log::debug!(
        "playout: {steps} step(s), {:?}, score {}",
        session.outcome(),
        session.score()
    );

    Ok(PlayoutReport {
        steps,
        outcome: session.outcome(),
        moves: session.moves(),
        score: session.score(),
    })
}

/// Click through one move. Returns whether cards left the board.
fn play<T, R>(session: &mut Session<T, R>, chosen: Move<T::Position>) -> EngineResult<bool>
where
    T: Topology,
    R: MatchRule<T>,
{
    session.clear_selection();
    let activation = match chosen {
        Move::Single(pos) => session.activate(pos)?,
        Move::Pair(a, b) => {
            session.activate(a)?;
            session.activate(b)?
        }
    };
    Ok(activation.is_move())
}
