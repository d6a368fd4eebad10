//! Core types: contestant identity and lifecycle, placement labels,
//! season phases, and the deterministic RNG.

pub mod contestant;
pub mod phase;
pub mod placement;
pub mod rng;

pub use contestant::{Contestant, ContestantId, SkillCategory, Skills, Status};
pub use phase::Phase;
pub use placement::Placement;
pub use rng::{SeasonRng, SeasonRngState};
