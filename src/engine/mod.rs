//! Season engine: state, snapshots, commands, and errors.
//!
//! The engine is the crate's boundary. Presentation sends commands in
//! (`advance_phase`, placement overrides, lipsync verdicts, crowning)
//! and reads `SeasonSnapshot` values out; nothing else mutates a season.

pub mod error;
pub mod season;
pub mod state;

pub use error::EngineError;
pub use season::{PerformanceTicket, SeasonEngine};
pub use state::{EpisodeOutcome, SeasonSnapshot};
