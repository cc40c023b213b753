//! Main simulation runner.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::challenges::{generate, ChallengeRequest};
use crate::core::rng::ChallengeRng;
use crate::crafting::ItemStore;
use crate::items::Category;
use crate::progression::{AnswerOutcome, LifeOutcome, Progression};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Every this many streak days the simulated player is handed one consumable,
/// standing in for time-attack rewards.
const SIM_LOOT_EVERY_DAYS: u32 = 5;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = match config.seed {
            Some(seed) => seed.wrapping_add(run_idx as u64),
            None => rand::thread_rng().gen(),
        };

        let stats = simulate_single_run(config, seed);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Final {}, Peak {}, Resets {}, Achievements {}, Rare {}",
                run_idx + 1,
                config.num_runs,
                stats.final_streak,
                stats.peak_streak,
                stats.resets,
                stats.achievements_unlocked,
                stats.rare_unlocks.len()
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.days)
}

/// Play `config.days` calendar days for one player.
pub fn simulate_single_run(config: &SimConfig, seed: u64) -> RunStats {
    let mut challenge_rng = ChallengeRng::from_seed(seed);
    let mut player = ChaCha8Rng::seed_from_u64(seed.rotate_left(17));
    let mut progression = Progression::new();
    let mut stats = RunStats::default();

    for _ in 0..config.days {
        let state = progression.state();
        let request = ChallengeRequest::new(state.day_index(), state.last_solution(), false);
        let challenge = generate(&request, &mut challenge_rng);
        *stats
            .challenges_by_tier
            .entry(challenge.difficulty_tier.name().to_string())
            .or_insert(0) += 1;
        if challenge.is_corrupted {
            stats.corrupted_challenges += 1;
        }
        progression.begin_challenge(&challenge);

        // Keep guessing until today is solved or the streak resets
        loop {
            if config.use_items && progression.state().at_risk() {
                spend_protection(&mut progression);
            }

            let guess = if player.gen_bool(config.accuracy.clamp(0.0, 1.0)) {
                challenge.solution
            } else {
                challenge.solution + 1
            };

            match progression.submit_answer(guess) {
                Ok(AnswerOutcome::Correct(report)) => {
                    stats.achievements_unlocked += report.new_achievements.len() as u32;
                    stats.rare_unlocks.extend(report.rare_unlock);
                    if report.streak % SIM_LOOT_EVERY_DAYS == 0 {
                        progression.grant_loot(Some(Category::Consumable), &mut challenge_rng.gameplay);
                    }
                    break;
                }
                Ok(AnswerOutcome::Wrong(LifeOutcome::StreakReset { lost_streak })) => {
                    stats.resets += 1;
                    debug!(seed, lost_streak, "simulated reset");
                    break;
                }
                Ok(AnswerOutcome::Wrong(LifeOutcome::ProtectionAbsorbed)) => {
                    stats.protections_used += 1;
                }
                Ok(AnswerOutcome::Wrong(LifeOutcome::Decremented { .. })) => {}
                Err(e) => {
                    debug!(seed, error = %e, "simulated answer rejected");
                    break;
                }
            }
        }
    }

    let state = progression.state();
    stats.final_streak = state.streak();
    stats.peak_streak = state.peak_streak();
    stats.items_held = state.inventory().total();
    stats
}

/// Arm a streak freeze if one is held, else spend an extra life.
fn spend_protection(progression: &mut Progression) {
    let inventory = progression.state().inventory();
    let item = if inventory.has("streak_freeze", 1) {
        "streak_freeze"
    } else if inventory.has("extra_life", 1) {
        "extra_life"
    } else {
        return;
    };
    if let Err(e) = progression.use_consumable(item) {
        debug!(item, error = %e, "simulated item use failed");
    }
}
