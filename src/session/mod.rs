//! Game sessions.
//!
//! ## Key Types
//!
//! - `Session`: board + rule + selection + counters, driven by clicks
//! - `Selection`: at most one provisionally selected card
//! - `Activation`: what a click did
//! - `MoveRecord`: one completed removal
//! - `SessionObserver`: outbound notifications for renderers

pub mod history;
pub mod observer;
pub mod selection;
pub mod state;

pub use history::{MatchOutcome, MoveRecord};
pub use observer::SessionObserver;
pub use selection::{Activation, Selection};
pub use state::Session;
