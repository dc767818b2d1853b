//! Session configuration.
//!
//! Every game shares one `SessionConfig`. Knobs that only make sense for
//! one topology are ignored by the others.

use serde::{Deserialize, Serialize};

/// Points awarded per successful move unless configured otherwise.
pub const DEFAULT_POINTS_PER_MOVE: i64 = 10;

/// Pyramid pairs must sum to this unless configured otherwise.
pub const DEFAULT_SUM_TARGET: u8 = 13;

/// Pyramid stock recycles allowed unless configured otherwise.
pub const DEFAULT_REDEALS: u32 = 2;

/// Rule knobs for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Score added for every successful removal move.
    pub points_per_move: i64,

    /// Target sum for the sum rule. A lone card of this value is removable
    /// on its own.
    pub sum_target: u8,

    /// Grid: suppress the win while a rival King or Queen sits next to a
    /// protagonist.
    pub suitor_rule: bool,

    /// Grid: the protagonists win as soon as they are adjacent, even if
    /// other cards remain on the board.
    pub early_meeting: bool,

    /// Pyramid: how many times the waste may be turned back into the stock.
    pub redeals: u32,

    /// Count Aces as 14 when a numeric rank value is needed.
    pub ace_high: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            points_per_move: DEFAULT_POINTS_PER_MOVE,
            sum_target: DEFAULT_SUM_TARGET,
            suitor_rule: false,
            early_meeting: false,
            redeals: DEFAULT_REDEALS,
            ace_high: false,
        }
    }
}

impl SessionConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the score awarded per move.
    #[must_use]
    pub fn with_points_per_move(mut self, points: i64) -> Self {
        self.points_per_move = points;
        self
    }

    /// Set the sum-rule target.
    #[must_use]
    pub fn with_sum_target(mut self, target: u8) -> Self {
        self.sum_target = target;
        self
    }

    /// Enable or disable the blocking-suitor rule.
    #[must_use]
    pub fn with_suitor_rule(mut self, enabled: bool) -> Self {
        self.suitor_rule = enabled;
        self
    }

    /// Let Grid protagonists win on adjacency alone.
    #[must_use]
    pub fn with_early_meeting(mut self, enabled: bool) -> Self {
        self.early_meeting = enabled;
        self
    }

    /// Set the number of Pyramid stock recycles.
    #[must_use]
    pub fn with_redeals(mut self, redeals: u32) -> Self {
        self.redeals = redeals;
        self
    }

    /// Count Aces high.
    #[must_use]
    pub fn with_ace_high(mut self, ace_high: bool) -> Self {
        self.ace_high = ace_high;
        self
    }
}
