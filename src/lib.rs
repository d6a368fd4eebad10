//! # runway-sim
//!
//! A single-session simulation engine for a competitive reality-show
//! season: a cast of contestants progresses through episodes, receives
//! noisy performance-based placements, generates backstage drama, and is
//! whittled down through lipsync eliminations until one winner is
//! crowned.
//!
//! ## Design Principles
//!
//! 1. **Engine, not screen**: this crate is the state machine and its
//!    invariants. Rendering, animation, and image assets belong to a
//!    presentation layer that consumes [`engine::SeasonSnapshot`] values
//!    and sends commands back in.
//!
//! 2. **Deterministic randomness**: scoring jitter and drama selection
//!    draw from a seedable [`core::SeasonRng`] with independent context
//!    streams, so any season replays exactly from (cast, catalog, seed).
//!
//! 3. **Atomic commands**: every engine command validates before it
//!    mutates. A rejected command returns an [`engine::EngineError`] and
//!    leaves the season untouched.
//!
//! ## Modules
//!
//! - `core`: contestant identity and lifecycle, placements, phases, RNG
//! - `cast`: contestant registry and the seeded season roster
//! - `episodes`: episode definitions and the season catalog
//! - `scoring`: noisy ranking and count-aware placement bands
//! - `drama`: backstage flavor-event generation
//! - `engine`: the phase machine, elimination resolver, and snapshots

pub mod cast;
pub mod core;
pub mod drama;
pub mod engine;
pub mod episodes;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    Contestant, ContestantId, Phase, Placement, SeasonRng, SeasonRngState, SkillCategory, Skills,
    Status,
};

pub use crate::cast::{season_five_cast, CastRegistry};

pub use crate::episodes::{season_five_catalog, Episode, EpisodeCatalog};

pub use crate::scoring::{band_for_rank, derive_placements, score_episode, RankedScore};

pub use crate::drama::{generate_drama, DramaEvent, DRAMA_TEMPLATES};

pub use crate::engine::{
    EngineError, EpisodeOutcome, PerformanceTicket, SeasonEngine, SeasonSnapshot,
};
