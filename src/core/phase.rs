//! Season phases.
//!
//! The phase machine itself lives in `engine::season`; this module only
//! defines the closed set of phases and their display names.

use serde::{Deserialize, Serialize};

/// Where the season currently stands.
///
/// Phases advance in a fixed per-episode cycle until the cast is small
/// enough to crown: PROMO, then for each episode INTRO, PERFORMING,
/// UNTUCKED, PRODUCER_HUB, LIPSYNC (or straight to RESULTS on a
/// non-elimination), RESULTS, and finally CROWNING and SEASON_END.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pre-season cast reveal.
    Promo,
    /// Episode title card and challenge description.
    EpisodeIntro,
    /// The timed challenge window; scoring and drama run here.
    Performing,
    /// Backstage drama between judging and the producer hub.
    Untucked,
    /// Producers review and may override tentative placements.
    ProducerHub,
    /// The bottom two face off; resolved only by a verdict.
    Lipsync,
    /// Episode outcome and standings.
    Results,
    /// Finalists await the crowning decision.
    Crowning,
    /// Terminal. The season is over.
    SeasonEnd,
}

impl Phase {
    /// Whether any further command can move the season forward.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Phase::SeasonEnd
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Promo => "PROMO",
            Phase::EpisodeIntro => "EPISODE_INTRO",
            Phase::Performing => "PERFORMING",
            Phase::Untucked => "UNTUCKED",
            Phase::ProducerHub => "PRODUCER_HUB",
            Phase::Lipsync => "LIPSYNC",
            Phase::Results => "RESULTS",
            Phase::Crowning => "CROWNING",
            Phase::SeasonEnd => "SEASON_END",
        };
        write!(f, "{name}")
    }
}
