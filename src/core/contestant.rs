//! Contestant identity, skills, and lifecycle.
//!
//! ## ContestantId
//!
//! Type-safe contestant identifier.
//!
//! ## Skills
//!
//! Fixed per-season skill levels, one per `SkillCategory`. Values are
//! static once the cast is seeded; only placements and status change
//! during a season.
//!
//! ## Status
//!
//! Monotonic lifecycle: `Active` moves to exactly one of `Eliminated`,
//! `Winner`, or `RunnerUp` and never reverses.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::placement::Placement;

/// Contestant identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContestantId(pub u32);

impl ContestantId {
    /// Create a new contestant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContestantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Contestant({})", self.0)
    }
}

/// The fixed set of challenge skill categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Design,
    Comedy,
    Acting,
    Improv,
    Dancing,
    Lipsync,
    Makeover,
    Singing,
    Branding,
}

impl SkillCategory {
    /// All categories, in declaration order.
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::Design,
        SkillCategory::Comedy,
        SkillCategory::Acting,
        SkillCategory::Improv,
        SkillCategory::Dancing,
        SkillCategory::Lipsync,
        SkillCategory::Makeover,
        SkillCategory::Singing,
        SkillCategory::Branding,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index into a skills array.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SkillCategory::Design => "design",
            SkillCategory::Comedy => "comedy",
            SkillCategory::Acting => "acting",
            SkillCategory::Improv => "improv",
            SkillCategory::Dancing => "dancing",
            SkillCategory::Lipsync => "lipsync",
            SkillCategory::Makeover => "makeover",
            SkillCategory::Singing => "singing",
            SkillCategory::Branding => "branding",
        };
        write!(f, "{name}")
    }
}

/// Per-category skill levels, fixed for the season.
///
/// ## Example
///
/// ```
/// use runway_sim::core::{SkillCategory, Skills};
///
/// let skills = Skills::new()
///     .with(SkillCategory::Comedy, 10)
///     .with(SkillCategory::Design, 4);
///
/// assert_eq!(skills.get(SkillCategory::Comedy), 10);
/// assert_eq!(skills.get(SkillCategory::Dancing), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills([u8; SkillCategory::COUNT]);

impl Skills {
    /// Create a skill grid with all levels at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category level, builder-style.
    #[must_use]
    pub fn with(mut self, category: SkillCategory, level: u8) -> Self {
        self.0[category.index()] = level;
        self
    }

    /// Get the level for a category.
    #[must_use]
    pub fn get(&self, category: SkillCategory) -> u8 {
        self.0[category.index()]
    }

    /// Mean skill level across the given categories.
    ///
    /// Returns 0.0 for an empty category list (episodes guarantee at
    /// least one category, so this is a defensive default).
    #[must_use]
    pub fn mean_over(&self, categories: &[SkillCategory]) -> f64 {
        if categories.is_empty() {
            return 0.0;
        }
        let total: u32 = categories.iter().map(|&c| u32::from(self.get(c))).sum();
        f64::from(total) / categories.len() as f64
    }
}

/// Contestant lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Still competing, eligible for elimination.
    Active,
    /// Sashayed away.
    Eliminated,
    /// Crowned at the finale.
    Winner,
    /// Finalist who was not crowned.
    RunnerUp,
}

/// One member of the cast.
///
/// The track record gains exactly one entry per episode the contestant
/// participated in, plus a terminal marker at crowning for finalists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contestant {
    /// Unique identifier.
    pub id: ContestantId,
    /// Display name.
    pub name: String,
    /// Narrative blurb for presentation.
    pub storyline: String,
    /// Fixed skill levels for the season.
    pub skills: Skills,
    /// Ordered placement history, one entry per episode participated.
    pub track_record: Vector<Placement>,
    /// Lifecycle status.
    pub status: Status,
    /// Episode number at which the contestant was eliminated, if any.
    pub eliminated_episode: Option<u32>,
}

impl Contestant {
    /// Create a new active contestant with an empty track record.
    #[must_use]
    pub fn new(
        id: ContestantId,
        name: impl Into<String>,
        storyline: impl Into<String>,
        skills: Skills,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            storyline: storyline.into(),
            skills,
            track_record: Vector::new(),
            status: Status::Active,
            eliminated_episode: None,
        }
    }

    /// Whether the contestant is still competing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }

    /// Append a placement to the track record.
    pub fn record_placement(&mut self, placement: Placement) {
        self.track_record.push_back(placement);
    }

    /// Mark the contestant eliminated at the given episode.
    ///
    /// Appends ELIM to the track record and sets the elimination marker.
    /// Panics if the contestant is not active; callers gate on status.
    pub fn eliminate(&mut self, episode_number: u32) {
        assert!(self.is_active(), "cannot eliminate {}: not active", self.name);
        self.status = Status::Eliminated;
        self.eliminated_episode = Some(episode_number);
        self.record_placement(Placement::Eliminated);
    }

    /// Crown the contestant as the season winner.
    ///
    /// Panics if the contestant is not active; callers gate on status.
    pub fn crown_winner(&mut self) {
        assert!(self.is_active(), "cannot crown {}: not active", self.name);
        self.status = Status::Winner;
        self.record_placement(Placement::Winner);
    }

    /// Mark the contestant as a runner-up at the finale.
    ///
    /// Panics if the contestant is not active; callers gate on status.
    pub fn finish_runner_up(&mut self) {
        assert!(self.is_active(), "cannot place {}: not active", self.name);
        self.status = Status::RunnerUp;
        self.record_placement(Placement::RunnerUp);
    }
}
