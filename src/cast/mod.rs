//! Cast registry and the seeded season roster.

pub mod registry;
pub mod seed;

pub use registry::CastRegistry;
pub use seed::season_five_cast;
