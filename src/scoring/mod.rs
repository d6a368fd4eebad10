//! Challenge scoring and placement derivation.
//!
//! Scoring is a pure function of (skills, episode categories, random
//! draw, active count): each active contestant's base score is the mean
//! of their skill levels over the episode's challenge categories, plus a
//! uniform jitter to break ties and model performance variance. The
//! ranking is by descending perturbed score; ties resolve however the
//! jitter lands them, with no secondary key.
//!
//! Placement bands are count-aware:
//!
//! - rank 0 is always WIN, even at an active count of 2
//! - the bottom two ranks are BTM2 (except rank 0)
//! - counts above 6 give ranks 1-2 HIGH; counts 4-6 give rank 1 HIGH
//! - counts above 5 give the rank just above the bottom two LOW
//! - everything else is SAFE

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Contestant, ContestantId, Placement, SeasonRng};
use crate::episodes::Episode;

/// Symmetric range of the per-episode score perturbation.
pub const SCORE_JITTER: f64 = 1.5;

/// One contestant's perturbed score for an episode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedScore {
    /// Who scored.
    pub id: ContestantId,
    /// Mean challenge-category skill plus jitter.
    pub score: f64,
}

/// Score the active contestants for an episode.
///
/// Returns the ranking in descending score order. The caller owns the
/// RNG; an identical RNG state reproduces the identical ranking.
#[must_use]
pub fn score_episode(
    active: &[&Contestant],
    episode: &Episode,
    rng: &mut SeasonRng,
) -> Vec<RankedScore> {
    let mut ranking: Vec<RankedScore> = active
        .iter()
        .map(|contestant| RankedScore {
            id: contestant.id,
            score: contestant.skills.mean_over(&episode.challenge) + rng.gen_jitter(SCORE_JITTER),
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranking
}

/// Placement label for a rank position given the active count.
#[must_use]
pub fn band_for_rank(rank: usize, count: usize) -> Placement {
    if rank == 0 {
        return Placement::Win;
    }
    if rank + 2 >= count {
        return Placement::Bottom2;
    }
    let high_band = if count > 6 {
        rank <= 2
    } else {
        count >= 4 && rank == 1
    };
    if high_band {
        return Placement::High;
    }
    if count > 5 && rank + 3 == count {
        return Placement::Low;
    }
    Placement::Safe
}

/// Map a ranking to tentative placement labels.
#[must_use]
pub fn derive_placements(ranking: &[RankedScore]) -> FxHashMap<ContestantId, Placement> {
    let count = ranking.len();
    ranking
        .iter()
        .enumerate()
        .map(|(rank, scored)| (scored.id, band_for_rank(rank, count)))
        .collect()
}
