//! The season engine: phase machine, producer overrides, and the
//! elimination resolver.
//!
//! The engine processes one command at a time. Every command validates
//! its preconditions before touching state, so a rejected command leaves
//! the season exactly as it was.
//!
//! ## Phase flow
//!
//! ```text
//! PROMO -> EPISODE_INTRO -> PERFORMING -> UNTUCKED -> PRODUCER_HUB
//!             ^                                        |        |
//!             |                                   (2 bottom) (0 bottom)
//!             |                                        v        v
//!             +------------------ RESULTS <------- LIPSYNC     |
//!                                    |  ^----------------------+
//!                                    v
//!                                CROWNING -> SEASON_END
//! ```
//!
//! PERFORMING is a suspended window: entering it hands the caller a
//! [`PerformanceTicket`], and the presentation layer redeems the ticket
//! after its fixed delay via [`SeasonEngine::finish_performance`]. A
//! ticket from a superseded window is rejected, which is how a pending
//! delayed callback is "cancelled" without the engine owning a timer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cast::CastRegistry;
use crate::core::{Contestant, ContestantId, Phase, Placement, SeasonRng};
use crate::drama::generate_drama;
use crate::episodes::EpisodeCatalog;
use crate::scoring::{derive_placements, score_episode};

use super::error::EngineError;
use super::state::{EpisodeOutcome, SeasonSnapshot, SeasonState};

/// Token for one PERFORMING window.
///
/// Issued when PERFORMING begins; redeemed exactly once to complete the
/// challenge. Tickets from earlier windows are stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceTicket {
    epoch: u64,
}

/// Single-season simulation engine.
///
/// ## Example
///
/// ```
/// use runway_sim::cast::season_five_cast;
/// use runway_sim::episodes::season_five_catalog;
/// use runway_sim::engine::SeasonEngine;
/// use runway_sim::core::Phase;
///
/// let mut engine = SeasonEngine::new(season_five_cast(), season_five_catalog(), 42);
///
/// assert_eq!(engine.phase(), Phase::Promo);
/// engine.advance_phase().unwrap(); // EPISODE_INTRO
/// engine.advance_phase().unwrap(); // PERFORMING
///
/// let ticket = engine.performance_ticket().unwrap();
/// engine.finish_performance(ticket).unwrap(); // UNTUCKED, placements drawn
/// ```
pub struct SeasonEngine {
    state: SeasonState,
    scoring_rng: SeasonRng,
    drama_rng: SeasonRng,
    epoch: u64,
    ticket: Option<PerformanceTicket>,
}

impl SeasonEngine {
    /// Create an engine for one season run.
    ///
    /// Scoring and drama draw from independent streams of the seed, so
    /// identical (cast, catalog, seed) inputs replay identically.
    ///
    /// Panics if the catalog is empty or fewer than two contestants are
    /// active; neither is a meaningful season.
    #[must_use]
    pub fn new(cast: CastRegistry, catalog: EpisodeCatalog, seed: u64) -> Self {
        assert!(!catalog.is_empty(), "season needs at least one episode");
        assert!(cast.active_count() >= 2, "season needs at least two active contestants");

        let rng = SeasonRng::new(seed);
        Self {
            scoring_rng: rng.for_context("scoring"),
            drama_rng: rng.for_context("drama"),
            state: SeasonState::new(cast, catalog),
            epoch: 0,
            ticket: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The ticket for the in-flight PERFORMING window, if any.
    #[must_use]
    pub fn performance_ticket(&self) -> Option<PerformanceTicket> {
        self.ticket
    }

    /// Take a read-only snapshot of the season.
    #[must_use]
    pub fn snapshot(&self) -> SeasonSnapshot {
        SeasonSnapshot::of(&self.state)
    }

    /// Generic advance signal from the presentation layer.
    ///
    /// Returns the new phase. LIPSYNC and CROWNING never advance this
    /// way; they resolve only through their decision commands.
    pub fn advance_phase(&mut self) -> Result<Phase, EngineError> {
        match self.state.phase {
            Phase::Promo => {
                self.state.episode_index = Some(0);
                self.transition(Phase::EpisodeIntro)
            }
            Phase::EpisodeIntro => {
                self.epoch += 1;
                self.ticket = Some(PerformanceTicket { epoch: self.epoch });
                self.transition(Phase::Performing)
            }
            Phase::Untucked => self.transition(Phase::ProducerHub),
            Phase::ProducerHub => {
                let bottom = self.state.pending_bottom();
                match bottom.len() {
                    2 => {
                        self.state.bottom_two = bottom;
                        self.transition(Phase::Lipsync)
                    }
                    0 => self.resolve_non_elimination(),
                    found => Err(EngineError::InvalidPlacementConfiguration { found }),
                }
            }
            Phase::Results => {
                if self.state.cast.active_count() <= 3 {
                    self.transition(Phase::Crowning)
                } else if let Some(index) =
                    self.state.episode_index.filter(|&i| self.state.catalog.has_next(i))
                {
                    self.state.episode_index = Some(index + 1);
                    self.state.reset_episode_scratch();
                    self.transition(Phase::EpisodeIntro)
                } else {
                    self.transition(Phase::Crowning)
                }
            }
            phase @ (Phase::Performing
            | Phase::Lipsync
            | Phase::Crowning
            | Phase::SeasonEnd) => Err(EngineError::InvalidPhaseTransition { phase }),
        }
    }

    /// Complete the PERFORMING window: run scoring and drama, move to
    /// UNTUCKED.
    ///
    /// Called by the presentation layer when its fixed challenge delay
    /// elapses. A ticket that no longer matches the in-flight window is
    /// rejected with `StalePerformance` and mutates nothing.
    pub fn finish_performance(&mut self, ticket: PerformanceTicket) -> Result<Phase, EngineError> {
        if self.ticket != Some(ticket) {
            return Err(EngineError::StalePerformance);
        }
        let Some(episode) = self.state.current_episode() else {
            return Err(EngineError::InvalidPhaseTransition { phase: self.state.phase });
        };

        let active: Vec<&Contestant> = self.state.cast.active().collect();
        let ranking = score_episode(&active, episode, &mut self.scoring_rng);
        let pending = derive_placements(&ranking);
        let drama = generate_drama(&active, &mut self.drama_rng);

        debug!(
            episode = episode.number,
            contestants = active.len(),
            events = drama.len(),
            "challenge scored"
        );

        self.state.pending = pending;
        self.state.drama = drama;
        self.ticket = None;
        self.transition(Phase::Untucked)
    }

    /// Producer override of a tentative placement.
    ///
    /// Valid only during PRODUCER_HUB, only for the five competition
    /// labels, and only for contestants still competing. Overrides are
    /// tracked separately from scored placements and logged.
    pub fn set_pending_placement(
        &mut self,
        id: ContestantId,
        placement: Placement,
    ) -> Result<(), EngineError> {
        if self.state.phase != Phase::ProducerHub {
            return Err(EngineError::InvalidPhaseTransition { phase: self.state.phase });
        }
        if !placement.is_producer_assignable() {
            return Err(EngineError::RestrictedPlacement(placement));
        }
        let active = self
            .state
            .cast
            .get(id)
            .is_some_and(Contestant::is_active);
        if !active {
            return Err(EngineError::ContestantNotFound(id));
        }

        let previous = self.state.pending_or_safe(id);
        self.state.pending.insert(id, placement);
        self.state.overridden.insert(id);
        info!(
            target: "producer",
            contestant = %id,
            from = %previous,
            to = %placement,
            "placement override"
        );
        Ok(())
    }

    /// Non-elimination path: every active contestant keeps their current
    /// label, nobody lipsyncs, nobody leaves.
    ///
    /// Valid only during PRODUCER_HUB with zero contestants marked BTM2.
    pub fn resolve_non_elimination(&mut self) -> Result<Phase, EngineError> {
        if self.state.phase != Phase::ProducerHub {
            return Err(EngineError::InvalidPhaseTransition { phase: self.state.phase });
        }
        let found = self.state.pending_bottom().len();
        if found != 0 {
            return Err(EngineError::InvalidPlacementConfiguration { found });
        }

        for id in self.state.cast.active_ids() {
            let label = self.state.pending_or_safe(id);
            if let Some(contestant) = self.state.cast.get_mut(id) {
                contestant.record_placement(label);
            }
        }
        self.state.last_outcome = Some(EpisodeOutcome::NonElimination);
        info!(episode = self.episode_number(), "non-elimination episode");
        self.transition(Phase::Results)
    }

    /// Resolve the lipsync.
    ///
    /// With `double_save` the verdict saves both bottom contestants
    /// (their histories get DOUBLE SHANTAY, statuses unchanged) and any
    /// `eliminated` argument is ignored, matching the producer calling
    /// "shantay you both stay". Otherwise `eliminated` must name one of
    /// the bottom two, who leaves the competition; the other bottom
    /// contestant survives with their pending label.
    pub fn resolve_lipsync(
        &mut self,
        eliminated: Option<ContestantId>,
        double_save: bool,
    ) -> Result<Phase, EngineError> {
        if self.state.phase != Phase::Lipsync {
            return Err(EngineError::InvalidPhaseTransition { phase: self.state.phase });
        }

        if double_save {
            let bottom = self.state.bottom_two.clone();
            for id in self.state.cast.active_ids() {
                let label = if bottom.contains(&id) {
                    Placement::DoubleShantay
                } else {
                    self.state.pending_or_safe(id)
                };
                if let Some(contestant) = self.state.cast.get_mut(id) {
                    contestant.record_placement(label);
                }
            }
            self.state.last_outcome = Some(EpisodeOutcome::DoubleSave);
            info!(episode = self.episode_number(), "double shantay");
            return self.transition(Phase::Results);
        }

        let Some(loser) = eliminated else {
            return Err(EngineError::EmptyLipsyncVerdict);
        };
        if !self.state.cast.contains(loser) {
            return Err(EngineError::ContestantNotFound(loser));
        }
        if !self.state.bottom_two.contains(&loser) {
            return Err(EngineError::NotFacingElimination(loser));
        }

        let episode_number = self.episode_number();
        for id in self.state.cast.active_ids() {
            let label = self.state.pending_or_safe(id);
            if let Some(contestant) = self.state.cast.get_mut(id) {
                if id == loser {
                    contestant.eliminate(episode_number);
                } else {
                    contestant.record_placement(label);
                }
            }
        }
        self.state.last_outcome = Some(EpisodeOutcome::Elimination(loser));
        info!(episode = episode_number, contestant = %loser, "sashay away");
        self.transition(Phase::Results)
    }

    /// Chaotic path: eliminate both bottom contestants atomically.
    ///
    /// A single resolution step, never two chained single eliminations;
    /// either both leave or the command fails with state untouched.
    pub fn resolve_double_sashay(&mut self) -> Result<Phase, EngineError> {
        if self.state.phase != Phase::Lipsync {
            return Err(EngineError::InvalidPhaseTransition { phase: self.state.phase });
        }
        let [first, second] = self.state.bottom_two[..] else {
            // LIPSYNC guarantees exactly two; anything else is a gate bug.
            return Err(EngineError::InvalidPlacementConfiguration {
                found: self.state.bottom_two.len(),
            });
        };

        let episode_number = self.episode_number();
        for id in self.state.cast.active_ids() {
            let label = self.state.pending_or_safe(id);
            if let Some(contestant) = self.state.cast.get_mut(id) {
                if id == first || id == second {
                    contestant.eliminate(episode_number);
                } else {
                    contestant.record_placement(label);
                }
            }
        }
        self.state.last_outcome = Some(EpisodeOutcome::DoubleElimination(first, second));
        info!(episode = episode_number, first = %first, second = %second, "double sashay");
        self.transition(Phase::Results)
    }

    /// Crown the winner from the remaining finalists.
    ///
    /// The winner must be one of the at-most-three active finalists;
    /// every other finalist becomes a runner-up. Moves to SEASON_END.
    pub fn crown(&mut self, winner: ContestantId) -> Result<Phase, EngineError> {
        if self.state.phase != Phase::Crowning {
            return Err(EngineError::InvalidPhaseTransition { phase: self.state.phase });
        }
        let finalists = self.state.cast.active_ids();
        if !(2..=3).contains(&finalists.len()) {
            return Err(EngineError::InvalidCrowningRequest {
                reason: format!("expected 2 or 3 finalists, found {}", finalists.len()),
            });
        }
        if !self.state.cast.contains(winner) {
            return Err(EngineError::ContestantNotFound(winner));
        }
        if !finalists.contains(&winner) {
            return Err(EngineError::InvalidCrowningRequest {
                reason: format!("{winner} is not among the finalists"),
            });
        }

        for id in finalists {
            if let Some(contestant) = self.state.cast.get_mut(id) {
                if id == winner {
                    contestant.crown_winner();
                } else {
                    contestant.finish_runner_up();
                }
            }
        }
        info!(contestant = %winner, "crowned");
        self.transition(Phase::SeasonEnd)
    }

    fn episode_number(&self) -> u32 {
        self.state.current_episode().map_or(0, |e| e.number)
    }

    fn transition(&mut self, to: Phase) -> Result<Phase, EngineError> {
        debug!(from = %self.state.phase, to = %to, "phase transition");
        self.state.phase = to;
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::season_five_cast;
    use crate::episodes::season_five_catalog;

    fn engine() -> SeasonEngine {
        SeasonEngine::new(season_five_cast(), season_five_catalog(), 42)
    }

    /// Drive a fresh engine to UNTUCKED with placements populated.
    fn engine_at_untucked() -> SeasonEngine {
        let mut e = engine();
        e.advance_phase().unwrap(); // EPISODE_INTRO
        e.advance_phase().unwrap(); // PERFORMING
        let ticket = e.performance_ticket().unwrap();
        e.finish_performance(ticket).unwrap();
        e
    }

    #[test]
    fn test_promo_to_first_episode() {
        let mut e = engine();
        assert_eq!(e.phase(), Phase::Promo);
        assert_eq!(e.advance_phase().unwrap(), Phase::EpisodeIntro);
        assert_eq!(e.snapshot().episode.unwrap().number, 1);
    }

    #[test]
    fn test_ticket_only_exists_while_performing() {
        let mut e = engine();
        assert!(e.performance_ticket().is_none());

        e.advance_phase().unwrap();
        e.advance_phase().unwrap();
        let ticket = e.performance_ticket().unwrap();

        e.finish_performance(ticket).unwrap();
        assert!(e.performance_ticket().is_none());
    }

    #[test]
    fn test_finishing_twice_is_stale() {
        let mut e = engine();
        e.advance_phase().unwrap();
        e.advance_phase().unwrap();
        let ticket = e.performance_ticket().unwrap();

        e.finish_performance(ticket).unwrap();
        assert_eq!(e.finish_performance(ticket), Err(EngineError::StalePerformance));
        assert_eq!(e.phase(), Phase::Untucked);
    }

    #[test]
    fn test_ticket_from_previous_episode_is_stale() {
        let mut e = engine_at_untucked();
        let old_ticket = PerformanceTicket { epoch: 1 };

        // Resolve the episode and start the next one.
        e.advance_phase().unwrap(); // PRODUCER_HUB
        e.advance_phase().unwrap(); // LIPSYNC
        let loser = e.snapshot().bottom_two[0];
        e.resolve_lipsync(Some(loser), false).unwrap();
        e.advance_phase().unwrap(); // EPISODE_INTRO (episode 2)
        e.advance_phase().unwrap(); // PERFORMING again

        assert_eq!(e.finish_performance(old_ticket), Err(EngineError::StalePerformance));
        // The fresh ticket still works.
        let fresh = e.performance_ticket().unwrap();
        assert_eq!(e.finish_performance(fresh).unwrap(), Phase::Untucked);
    }

    #[test]
    fn test_generic_advance_rejected_in_lipsync() {
        let mut e = engine_at_untucked();
        e.advance_phase().unwrap(); // PRODUCER_HUB
        e.advance_phase().unwrap(); // LIPSYNC

        assert_eq!(
            e.advance_phase(),
            Err(EngineError::InvalidPhaseTransition { phase: Phase::Lipsync })
        );
        assert_eq!(e.phase(), Phase::Lipsync);
    }

    #[test]
    fn test_producer_gate_rejects_odd_bottom_count() {
        let mut e = engine_at_untucked();
        e.advance_phase().unwrap(); // PRODUCER_HUB

        // Rig a third bottom placement.
        let extra = e
            .snapshot()
            .pending_placements
            .iter()
            .find(|(_, &p)| p == Placement::Safe)
            .map(|(&id, _)| id)
            .unwrap();
        e.set_pending_placement(extra, Placement::Bottom2).unwrap();

        assert_eq!(
            e.advance_phase(),
            Err(EngineError::InvalidPlacementConfiguration { found: 3 })
        );
        assert_eq!(e.phase(), Phase::ProducerHub);
    }

    #[test]
    fn test_override_outside_hub_rejected() {
        let mut e = engine_at_untucked();
        let id = e.snapshot().roster[0].id;

        assert_eq!(
            e.set_pending_placement(id, Placement::Win),
            Err(EngineError::InvalidPhaseTransition { phase: Phase::Untucked })
        );
    }

    #[test]
    fn test_override_restricted_to_competition_labels() {
        let mut e = engine_at_untucked();
        e.advance_phase().unwrap();
        let id = e.snapshot().roster[0].id;

        assert_eq!(
            e.set_pending_placement(id, Placement::Eliminated),
            Err(EngineError::RestrictedPlacement(Placement::Eliminated))
        );
        assert_eq!(
            e.set_pending_placement(id, Placement::DoubleShantay),
            Err(EngineError::RestrictedPlacement(Placement::DoubleShantay))
        );
    }

    #[test]
    fn test_overrides_are_tracked_in_snapshot() {
        let mut e = engine_at_untucked();
        e.advance_phase().unwrap();
        let id = e.snapshot().roster[0].id;

        assert!(e.snapshot().overridden.is_empty());
        e.set_pending_placement(id, Placement::Low).unwrap();
        assert_eq!(e.snapshot().overridden, vec![id]);
    }

    #[test]
    fn test_unknown_contestant_rejected() {
        let mut e = engine_at_untucked();
        e.advance_phase().unwrap();
        let ghost = ContestantId::new(999);

        assert_eq!(
            e.set_pending_placement(ghost, Placement::Win),
            Err(EngineError::ContestantNotFound(ghost))
        );
    }
}
