//! Integration test: Game Session, Side Modes and Simulator
//!
//! The top-level session threading one progression through daily play, the
//! zen and time-attack modes that sit beside the streak, and seeded
//! simulation runs.

use keep_the_streak::challenges::DifficultyTier;
use keep_the_streak::crafting::ItemStore;
use keep_the_streak::leaderboard::offline_board;
use keep_the_streak::modes::{TimeAttackRun, ZenRun};
use keep_the_streak::progression::{AnswerOutcome, ItemEffect, LifeOutcome};
use keep_the_streak::simulator::{run_simulation, simulate_single_run, SimConfig};
use keep_the_streak::unlocks::unlocked_droids;
use keep_the_streak::{
    CalendarDay, ChallengeRng, GameSession, Progression, ProgressionError, ProgressionState,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn session(seed: u64) -> GameSession {
    GameSession::start(Progression::new(), ChallengeRng::from_seed(seed))
        .expect("built-in catalog is valid")
}

fn play_days(s: &mut GameSession, days: u32) {
    for _ in 0..days {
        let answer = s.todays_challenge(None).solution;
        assert!(matches!(s.submit_answer(answer), Ok(AnswerOutcome::Correct(_))));
    }
}

// =========================================================================
// Daily session
// =========================================================================

#[test]
fn test_session_runs_a_month() {
    let mut s = session(1);
    play_days(&mut s, 30);
    let state = s.progression().state();
    assert_eq!(state.streak(), 30);
    assert_eq!(state.day_index(), 31);
    assert!(state.has_achievement("streak-30"));
    assert!(unlocked_droids(state.streak()).len() > unlocked_droids(0).len());
}

#[test]
fn test_anniversary_day_in_session() {
    let mut s = session(2);
    play_days(&mut s, 4);
    let challenge = s.todays_challenge(Some(CalendarDay::new(7, 20))).clone();
    assert_eq!(challenge.solution, 1969);

    match s.submit_answer(1969) {
        Ok(AnswerOutcome::Correct(report)) => {
            assert_eq!(report.rare_unlock.as_deref(), Some("anniversary_token"));
        }
        other => panic!("unexpected {other:?}"),
    }
    let state = s.progression().state();
    assert_eq!(state.last_solution(), 1969);
    assert_eq!(state.inventory().count("anniversary_token"), 1);
}

#[test]
fn test_session_reset_returns_to_tutorial() {
    let mut s = session(3);
    play_days(&mut s, 5);
    let answer = s.todays_challenge(None).solution;
    let mut last = None;
    for _ in 0..3 {
        last = Some(s.submit_answer(answer + 7));
    }
    assert!(matches!(
        last,
        Some(Ok(AnswerOutcome::Wrong(LifeOutcome::StreakReset { lost_streak: 5 })))
    ));
    let tutorial = s.todays_challenge(None);
    assert_eq!(tutorial.difficulty_tier, DifficultyTier::Tutorial);
    assert_eq!(tutorial.solution, 1);
}

#[test]
fn test_hint_item_needs_a_puzzle_in_play() {
    let mut s = session(4);
    s.progression_mut().add_item("hint_token");
    assert_eq!(
        s.use_item("hint_token", None).unwrap_err(),
        ProgressionError::NoOutstandingChallenge
    );

    let answer = s.todays_challenge(None).solution;
    assert!(matches!(
        s.use_item("hint_token", None),
        Ok(ItemEffect::RevealHint { solution }) if solution == answer
    ));
}

#[test]
fn test_hostile_save_resumes_playable() {
    let state: ProgressionState = serde_json::from_str(
        r#"{ "streak": 4, "day_index": 1, "last_solution": 9223372036854775807 }"#,
    )
    .expect("well-formed save");
    let mut s = GameSession::start(Progression::restore(state), ChallengeRng::from_seed(8))
        .expect("built-in catalog is valid");

    let challenge = s.todays_challenge(None).clone();
    assert_ne!(challenge.difficulty_tier, DifficultyTier::Tutorial);
    assert!((0..=999_999).contains(&challenge.solution));
    assert!(matches!(
        s.submit_answer(challenge.solution),
        Ok(AnswerOutcome::Correct(_))
    ));
    assert_eq!(s.progression().state().day_index(), 6);
}

// =========================================================================
// Side modes
// =========================================================================

#[test]
fn test_zen_never_touches_streak() {
    let mut rng = ChallengeRng::from_seed(5);
    let mut p = Progression::new();
    let mut zen = ZenRun::start(p.state().last_solution(), &mut rng);

    let wrong = zen.current().solution + 1;
    assert!(!zen.submit(wrong, &mut p, &mut rng));
    for _ in 0..15 {
        let answer = zen.current().solution;
        assert!(zen.submit(answer, &mut p, &mut rng));
    }
    assert_eq!(zen.credits_earned(), 3);
    assert_eq!(p.state().streak(), 0);
    assert_eq!(p.state().lives(), 3);
}

#[test]
fn test_time_attack_awards_consumables() {
    let mut rng = ChallengeRng::from_seed(6);
    let mut p = Progression::new();
    let mut run = TimeAttackRun::start(&mut rng);

    let mut loot = Vec::new();
    for _ in 0..10 {
        run.tick(3);
        let answer = run.current().solution;
        let result = run.submit(answer, &mut p, &mut rng);
        assert!(result.correct);
        loot.extend(result.loot);
    }
    assert_eq!(run.score(), 1000);
    assert_eq!(loot.len(), 2);
    assert!(loot.iter().all(|item| item.consumable_effect().is_some()));
    assert_eq!(p.state().inventory().total(), 2);

    run.tick(600);
    assert!(run.is_over());
    let answer = run.current().solution;
    assert!(!run.submit(answer, &mut p, &mut rng).correct);
}

#[test]
fn test_offline_board_ranks_player() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let board = offline_board(200, 0, &mut rng);
    assert!(board[0].is_player);
    assert!(board.windows(2).all(|w| w[0].streak >= w[1].streak));
}

// =========================================================================
// Simulator
// =========================================================================

#[test]
fn test_seeded_simulation_is_reproducible() {
    let config = SimConfig {
        num_runs: 4,
        days: 90,
        seed: Some(2024),
        verbosity: 0,
        ..Default::default()
    };
    let a = run_simulation(&config);
    let b = run_simulation(&config);
    assert_eq!(a.to_json(), b.to_json());
    assert_eq!(a.num_runs, 4);
}

#[test]
fn test_items_soften_resets() {
    let base = SimConfig {
        days: 365,
        accuracy: 0.75,
        verbosity: 0,
        ..Default::default()
    };
    let careless = SimConfig {
        use_items: false,
        ..base.clone()
    };
    let with_items = simulate_single_run(&base, 11);
    let without = simulate_single_run(&careless, 11);
    assert_eq!(without.protections_used, 0);
    assert!(with_items.peak_streak > 0);
    assert!(without.resets > 0);
}
