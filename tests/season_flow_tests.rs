//! Full-season progression tests.
//!
//! These drive the engine command-by-command the way a presentation
//! layer would, and verify the phase routing, history invariants, and
//! finale behavior over whole seasons.

use runway_sim::core::{Phase, Placement, Status};
use runway_sim::engine::{EngineError, EpisodeOutcome, SeasonEngine};
use runway_sim::{season_five_cast, season_five_catalog, ContestantId};

/// Drive an engine from EPISODE_INTRO through to PRODUCER_HUB.
fn run_episode_to_hub(engine: &mut SeasonEngine) {
    assert_eq!(engine.phase(), Phase::EpisodeIntro);
    engine.advance_phase().unwrap(); // PERFORMING
    let ticket = engine.performance_ticket().unwrap();
    engine.finish_performance(ticket).unwrap(); // UNTUCKED
    engine.advance_phase().unwrap(); // PRODUCER_HUB
}

fn fresh_engine(seed: u64) -> SeasonEngine {
    SeasonEngine::new(season_five_cast(), season_five_catalog(), seed)
}

#[test]
fn test_episode_one_elimination_scenario() {
    let mut engine = fresh_engine(42);
    engine.advance_phase().unwrap(); // EPISODE_INTRO
    run_episode_to_hub(&mut engine);

    let snapshot = engine.snapshot();
    let bottom: Vec<ContestantId> = snapshot
        .pending_placements
        .iter()
        .filter(|(_, &p)| p == Placement::Bottom2)
        .map(|(&id, _)| id)
        .collect();
    assert_eq!(bottom.len(), 2);

    engine.advance_phase().unwrap();
    assert_eq!(engine.phase(), Phase::Lipsync);
    let bottom_two = engine.snapshot().bottom_two;
    assert_eq!(bottom_two.len(), 2);

    let (survivor, loser) = (bottom_two[0], bottom_two[1]);
    engine.resolve_lipsync(Some(loser), false).unwrap();
    assert_eq!(engine.phase(), Phase::Results);

    let snapshot = engine.snapshot();
    let eliminated = snapshot.roster.iter().find(|c| c.id == loser).unwrap();
    assert_eq!(eliminated.status, Status::Eliminated);
    assert_eq!(eliminated.eliminated_episode, Some(1));
    assert_eq!(eliminated.track_record.last(), Some(&Placement::Eliminated));

    let saved = snapshot.roster.iter().find(|c| c.id == survivor).unwrap();
    assert_eq!(saved.status, Status::Active);
    assert_eq!(saved.track_record.last(), Some(&Placement::Bottom2));

    assert_eq!(snapshot.last_outcome, Some(EpisodeOutcome::Elimination(loser)));
}

#[test]
fn test_full_season_single_eliminations() {
    let mut engine = fresh_engine(7);
    engine.advance_phase().unwrap(); // EPISODE_INTRO

    let mut episodes_played = 0;
    loop {
        run_episode_to_hub(&mut engine);
        engine.advance_phase().unwrap(); // LIPSYNC
        let loser = engine.snapshot().bottom_two[1];
        engine.resolve_lipsync(Some(loser), false).unwrap();
        episodes_played += 1;

        match engine.advance_phase().unwrap() {
            Phase::EpisodeIntro => {}
            Phase::Crowning => break,
            other => panic!("unexpected phase {other}"),
        }
    }

    // 14 queens minus one per episode hits the final three after the
    // 11-episode catalog is exhausted.
    assert_eq!(episodes_played, 11);
    let finalists: Vec<ContestantId> = engine
        .snapshot()
        .roster
        .iter()
        .filter(|c| c.is_active())
        .map(|c| c.id)
        .collect();
    assert_eq!(finalists.len(), 3);

    engine.crown(finalists[0]).unwrap();
    assert_eq!(engine.phase(), Phase::SeasonEnd);

    let snapshot = engine.snapshot();
    let winners: Vec<_> = snapshot.roster.iter().filter(|c| c.status == Status::Winner).collect();
    let runners: Vec<_> = snapshot.roster.iter().filter(|c| c.status == Status::RunnerUp).collect();
    assert_eq!(winners.len(), 1);
    assert_eq!(runners.len(), 2);
    assert_eq!(winners[0].id, finalists[0]);

    // History invariant: one entry per episode participated (ELIM is
    // the exit episode's entry), plus a terminal marker for finalists.
    for contestant in &snapshot.roster {
        let expected = match contestant.status {
            Status::Eliminated => contestant.eliminated_episode.unwrap() as usize,
            _ => 12, // 11 episode labels + WINNER/RUNNER-UP
        };
        assert_eq!(
            contestant.track_record.len(),
            expected,
            "bad history for {}",
            contestant.name
        );
    }
}

#[test]
fn test_final_three_routes_to_crowning_with_episodes_left() {
    let mut engine = fresh_engine(3);
    engine.advance_phase().unwrap();

    // Double sashays burn the cast down fast: 14 -> 12 -> 10 -> 8 -> 6 -> 4.
    for _ in 0..5 {
        run_episode_to_hub(&mut engine);
        engine.advance_phase().unwrap(); // LIPSYNC
        engine.resolve_double_sashay().unwrap();
        assert_eq!(engine.advance_phase().unwrap(), Phase::EpisodeIntro);
    }

    // One single elimination: 4 -> 3.
    run_episode_to_hub(&mut engine);
    engine.advance_phase().unwrap();
    let loser = engine.snapshot().bottom_two[0];
    engine.resolve_lipsync(Some(loser), false).unwrap();

    // Five catalog episodes remain, but the final three routes straight
    // to crowning.
    assert_eq!(engine.advance_phase().unwrap(), Phase::Crowning);
    assert_eq!(engine.snapshot().active().len(), 3);
}

#[test]
fn test_non_elimination_episode() {
    let mut engine = fresh_engine(11);
    engine.advance_phase().unwrap();
    run_episode_to_hub(&mut engine);

    // Producers pull both queens out of the bottom.
    let bottom: Vec<ContestantId> = engine
        .snapshot()
        .pending_placements
        .iter()
        .filter(|(_, &p)| p == Placement::Bottom2)
        .map(|(&id, _)| id)
        .collect();
    for id in &bottom {
        engine.set_pending_placement(*id, Placement::Safe).unwrap();
    }

    let labels_before = engine.snapshot().pending_placements.clone();
    engine.advance_phase().unwrap();
    assert_eq!(engine.phase(), Phase::Results);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.last_outcome, Some(EpisodeOutcome::NonElimination));
    assert!(!snapshot.last_outcome.as_ref().unwrap().eliminated_anyone());

    // Everyone stayed and got their (possibly overridden) label.
    for contestant in &snapshot.roster {
        assert_eq!(contestant.status, Status::Active);
        assert_eq!(contestant.track_record.len(), 1);
        assert_eq!(contestant.track_record.last(), labels_before.get(&contestant.id));
    }
}

#[test]
fn test_untucked_drama_is_populated() {
    let mut engine = fresh_engine(19);
    engine.advance_phase().unwrap();
    engine.advance_phase().unwrap();
    let ticket = engine.performance_ticket().unwrap();
    engine.finish_performance(ticket).unwrap();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, Phase::Untucked);
    assert_eq!(snapshot.drama.len(), 6); // floor(14 / 1.5) clamped to 6

    // Drama never touches anyone's track record.
    assert!(snapshot.roster.iter().all(|c| c.track_record.is_empty()));
}

#[test]
fn test_seasons_replay_identically_from_same_seed() {
    let run = |seed: u64| {
        let mut engine = fresh_engine(seed);
        engine.advance_phase().unwrap();
        let mut outcomes = Vec::new();
        loop {
            run_episode_to_hub(&mut engine);
            engine.advance_phase().unwrap();
            let loser = engine.snapshot().bottom_two[1];
            engine.resolve_lipsync(Some(loser), false).unwrap();
            outcomes.push(engine.snapshot().last_outcome.unwrap());
            if engine.advance_phase().unwrap() == Phase::Crowning {
                break;
            }
        }
        outcomes
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn test_advance_rejected_after_season_end() {
    let mut engine = fresh_engine(5);
    engine.advance_phase().unwrap();

    loop {
        run_episode_to_hub(&mut engine);
        engine.advance_phase().unwrap();
        let loser = engine.snapshot().bottom_two[0];
        engine.resolve_lipsync(Some(loser), false).unwrap();
        if engine.advance_phase().unwrap() == Phase::Crowning {
            break;
        }
    }

    let winner = engine.snapshot().active()[0].id;
    engine.crown(winner).unwrap();
    assert_eq!(engine.phase(), Phase::SeasonEnd);
    assert!(engine.phase().is_terminal());

    assert_eq!(
        engine.advance_phase(),
        Err(EngineError::InvalidPhaseTransition { phase: Phase::SeasonEnd })
    );
}
