//! Outbound notifications for the presentation layer.

use crate::rules::Outcome;
use crate::topology::BoardSnapshot;

/// Receives board changes and the end of a session.
///
/// Both methods default to doing nothing, so a renderer that only cares
/// about one of them implements just that one.
///
/// `on_session_ended` is called exactly once per session and observer:
/// on the terminal transition, or on subscription if the session had
/// already ended by then.
pub trait SessionObserver {
    /// The board changed (cards removed, refilled, compressed or drawn).
    fn on_board_changed(&mut self, _board: &BoardSnapshot) {}

    /// The session reached a terminal outcome.
    fn on_session_ended(&mut self, _outcome: Outcome) {}
}
