//! Core value types: cards, configuration, errors, RNG.
//!
//! Nothing in here knows about a particular board shape. Topologies, rules
//! and sessions build on these.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, Rank, Role, Suit};
pub use config::SessionConfig;
pub use error::{EngineError, EngineResult};
pub use rng::GameRng;
