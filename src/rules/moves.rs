//! Legal move enumeration.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::MatchRule;
use crate::topology::Topology;

/// A removal the rules currently allow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move<P> {
    /// One card that leaves on its own.
    Single(P),
    /// Two cards that pair up.
    Pair(P, P),
}

impl<P: Copy> Move<P> {
    /// Positions touched by this move.
    #[must_use]
    pub fn positions(&self) -> SmallVec<[P; 2]> {
        match *self {
            Move::Single(p) => smallvec![p],
            Move::Pair(a, b) => smallvec![a, b],
        }
    }
}

/// Every legal move, singles first, then pairs in position order.
pub fn legal_moves<T, R>(topology: &T, rule: &R) -> Vec<Move<T::Position>>
where
    T: Topology,
    R: MatchRule<T> + ?Sized,
{
    let eligible: Vec<T::Position> = topology
        .positions()
        .into_iter()
        .filter(|&pos| rule.is_eligible(topology, pos))
        .collect();

    let mut moves: Vec<Move<T::Position>> = eligible
        .iter()
        .filter(|&&pos| rule.removable_alone(topology, pos))
        .map(|&pos| Move::Single(pos))
        .collect();

    for (i, &a) in eligible.iter().enumerate() {
        for &b in &eligible[i + 1..] {
            if rule.matches(topology, a, b) {
                moves.push(Move::Pair(a, b));
            }
        }
    }

    moves
}

/// Is at least one legal move available?
///
/// Stops at the first hit instead of enumerating everything.
pub fn has_legal_move<T, R>(topology: &T, rule: &R) -> bool
where
    T: Topology,
    R: MatchRule<T> + ?Sized,
{
    let eligible: Vec<T::Position> = topology
        .positions()
        .into_iter()
        .filter(|&pos| rule.is_eligible(topology, pos))
        .collect();

    eligible.iter().any(|&pos| rule.removable_alone(topology, pos))
        || eligible.iter().enumerate().any(|(i, &a)| {
            eligible[i + 1..]
                .iter()
                .any(|&b| rule.matches(topology, a, b))
        })
}
