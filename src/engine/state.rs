//! Season state and its read-only snapshot.
//!
//! The engine owns a single mutable `SeasonState`; the presentation
//! layer only ever sees `SeasonSnapshot` values cloned from it. The
//! roster's track records are `im` vectors, so snapshots are cheap even
//! taken every step.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::cast::CastRegistry;
use crate::core::{Contestant, ContestantId, Phase, Placement};
use crate::drama::DramaEvent;
use crate::episodes::{Episode, EpisodeCatalog};

/// How the most recent episode was resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodeOutcome {
    /// One bottom contestant sashayed away.
    Elimination(ContestantId),
    /// Both bottom contestants sashayed away in one atomic step.
    DoubleElimination(ContestantId, ContestantId),
    /// Both bottom contestants were saved after the lipsync.
    DoubleSave,
    /// Nobody was placed in the bottom; nobody left.
    NonElimination,
}

impl EpisodeOutcome {
    /// Whether anyone left the competition.
    #[must_use]
    pub fn eliminated_anyone(&self) -> bool {
        matches!(
            self,
            EpisodeOutcome::Elimination(_) | EpisodeOutcome::DoubleElimination(_, _)
        )
    }
}

/// The engine's single mutable state object.
///
/// Mutated only by `SeasonEngine` commands; each command either fully
/// succeeds or leaves this untouched.
#[derive(Clone, Debug)]
pub(crate) struct SeasonState {
    pub(crate) phase: Phase,
    /// Zero-based index into the catalog; `None` before the season starts.
    pub(crate) episode_index: Option<usize>,
    pub(crate) cast: CastRegistry,
    pub(crate) catalog: EpisodeCatalog,
    /// Tentative placements, meaningful from UNTUCKED through LIPSYNC.
    pub(crate) pending: FxHashMap<ContestantId, Placement>,
    /// Contestants whose pending placement was overridden by producers.
    pub(crate) overridden: FxHashSet<ContestantId>,
    /// The resolved bottom two, set when entering LIPSYNC.
    pub(crate) bottom_two: Vec<ContestantId>,
    /// This episode's drama events, set when PERFORMING completes.
    pub(crate) drama: Vec<DramaEvent>,
    /// How the most recent episode resolved.
    pub(crate) last_outcome: Option<EpisodeOutcome>,
}

impl SeasonState {
    pub(crate) fn new(cast: CastRegistry, catalog: EpisodeCatalog) -> Self {
        Self {
            phase: Phase::Promo,
            episode_index: None,
            cast,
            catalog,
            pending: FxHashMap::default(),
            overridden: FxHashSet::default(),
            bottom_two: Vec::new(),
            drama: Vec::new(),
            last_outcome: None,
        }
    }

    /// The episode currently in play.
    pub(crate) fn current_episode(&self) -> Option<&Episode> {
        self.episode_index.and_then(|i| self.catalog.get(i))
    }

    /// Pending placement for a contestant, defaulting to SAFE.
    pub(crate) fn pending_or_safe(&self, id: ContestantId) -> Placement {
        self.pending.get(&id).copied().unwrap_or(Placement::Safe)
    }

    /// Active contestants currently marked BTM2 in the pending map.
    pub(crate) fn pending_bottom(&self) -> Vec<ContestantId> {
        self.cast
            .active()
            .filter(|c| self.pending.get(&c.id) == Some(&Placement::Bottom2))
            .map(|c| c.id)
            .collect()
    }

    /// Clear the per-episode scratch state when a new episode begins.
    pub(crate) fn reset_episode_scratch(&mut self) {
        self.pending.clear();
        self.overridden.clear();
        self.bottom_two.clear();
        self.drama.clear();
        self.last_outcome = None;
    }
}

/// Read-only snapshot of the season for the presentation layer.
///
/// Every field is a value; holding a snapshot never blocks or observes
/// later engine mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// The episode in play, if the season has started.
    pub episode: Option<Episode>,
    /// Full roster in promo order, with per-contestant status/history.
    pub roster: Vec<Contestant>,
    /// Tentative placements; only meaningful during PRODUCER_HUB.
    pub pending_placements: FxHashMap<ContestantId, Placement>,
    /// Contestants whose placement was manually overridden this episode.
    pub overridden: Vec<ContestantId>,
    /// The bottom two; only meaningful during LIPSYNC.
    pub bottom_two: Vec<ContestantId>,
    /// This episode's drama events, for UNTUCKED rendering.
    pub drama: Vec<DramaEvent>,
    /// How the last episode resolved, for RESULTS rendering.
    pub last_outcome: Option<EpisodeOutcome>,
}

impl SeasonSnapshot {
    pub(crate) fn of(state: &SeasonState) -> Self {
        let mut overridden: Vec<_> = state.overridden.iter().copied().collect();
        overridden.sort_by_key(|id| id.raw());
        Self {
            phase: state.phase,
            episode: state.current_episode().cloned(),
            roster: state.cast.iter().cloned().collect(),
            pending_placements: state.pending.clone(),
            overridden,
            bottom_two: state.bottom_two.clone(),
            drama: state.drama.clone(),
            last_outcome: state.last_outcome.clone(),
        }
    }

    /// Still-competing contestants in promo order.
    #[must_use]
    pub fn active(&self) -> Vec<&Contestant> {
        self.roster.iter().filter(|c| c.is_active()).collect()
    }

    /// Roster ordered for a standings table: active contestants first in
    /// promo order, then everyone else by descending exit episode.
    #[must_use]
    pub fn standings(&self) -> Vec<&Contestant> {
        let mut rows: Vec<&Contestant> = self.roster.iter().collect();
        rows.sort_by_key(|c| {
            (
                !c.is_active(),
                std::cmp::Reverse(c.eliminated_episode.unwrap_or(u32::MAX)),
            )
        });
        rows
    }
}
