//! Sum rule (Pyramid Solitaire).
//!
//! Two cards pair when their values add up to the target, 13 by
//! default. A card worth the whole target on its own (a King) leaves
//! without a partner.

use super::MatchRule;
use crate::core::SessionConfig;
use crate::topology::Topology;

/// Pairs cards whose values sum to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SumRule {
    target: u8,
    ace_high: bool,
}

impl Default for SumRule {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_SUM_TARGET)
    }
}

impl SumRule {
    /// A rule summing to `target`.
    #[must_use]
    pub const fn new(target: u8) -> Self {
        Self {
            target,
            ace_high: false,
        }
    }

    /// A rule using the configured target and Ace value.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            target: config.sum_target,
            ace_high: config.ace_high,
        }
    }

    /// The sum a pair must reach.
    #[must_use]
    pub const fn target(&self) -> u8 {
        self.target
    }
}

impl<T: Topology> MatchRule<T> for SumRule {
    fn matches(&self, topology: &T, a: T::Position, b: T::Position) -> bool {
        let (Some(x), Some(y)) = (topology.card_at(a), topology.card_at(b)) else {
            return false;
        };
        x.value(self.ace_high) + y.value(self.ace_high) == self.target && topology.reachable(a, b)
    }

    fn removable_alone(&self, topology: &T, pos: T::Position) -> bool {
        self.is_eligible(topology, pos)
            && topology
                .card_at(pos)
                .is_some_and(|card| card.value(self.ace_high) == self.target)
    }
}
