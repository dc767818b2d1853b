//! Suit-or-rank rule (Royal Marriage, Meeting in the Garden).
//!
//! Two cards pair when they share a suit or a rank and the topology says
//! they are close enough. Protagonists never pair.

use super::MatchRule;
use crate::topology::Topology;

/// Pairs reachable cards of the same suit or the same rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SuitOrRankRule;

impl<T: Topology> MatchRule<T> for SuitOrRankRule {
    fn matches(&self, topology: &T, a: T::Position, b: T::Position) -> bool {
        let (Some(x), Some(y)) = (topology.card_at(a), topology.card_at(b)) else {
            return false;
        };
        !x.is_anchor() && !y.is_anchor() && x.shares_suit_or_rank(y) && topology.reachable(a, b)
    }
}
