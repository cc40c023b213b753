//! Side modes that never touch the daily streak.
//!
//! Zen chains its own private sequence of puzzles and mines currency. Time
//! attack races the clock through arcade puzzles and awards consumables.

use crate::challenges::{generate, generate_arcade, ArcadeDifficulty, Challenge, ChallengeRequest};
use crate::core::constants::{
    TIME_ATTACK_BONUS_SECONDS, TIME_ATTACK_LOOT_EVERY_POINTS, TIME_ATTACK_MAX_SECONDS,
    TIME_ATTACK_POINTS_PER_SOLVE, TIME_ATTACK_START_SECONDS, ZEN_SOLVES_PER_CREDIT,
};
use crate::core::rng::ChallengeRng;
use crate::items::{Category, LootItem};
use crate::progression::Progression;
use tracing::debug;

/// A relaxed endless chain. Wrong answers cost nothing.
#[derive(Debug, Clone)]
pub struct ZenRun {
    day: u32,
    mining_progress: u32,
    credits_earned: u32,
    solves: u32,
    current: Challenge,
}

impl ZenRun {
    /// Start a chain on top of `previous_solution`.
    pub fn start(previous_solution: i64, rng: &mut ChallengeRng) -> Self {
        let day = 2;
        Self {
            day,
            mining_progress: 0,
            credits_earned: 0,
            solves: 0,
            current: generate(&ChallengeRequest::new(day, previous_solution, false), rng),
        }
    }

    pub fn current(&self) -> &Challenge {
        &self.current
    }

    pub fn solves(&self) -> u32 {
        self.solves
    }

    pub fn credits_earned(&self) -> u32 {
        self.credits_earned
    }

    /// Solves banked toward the next credit.
    pub fn mining_progress(&self) -> u32 {
        self.mining_progress
    }

    /// Returns true if the guess was right. Every `ZEN_SOLVES_PER_CREDIT`
    /// solves add one currency to `progression`.
    pub fn submit(&mut self, guess: i64, progression: &mut Progression, rng: &mut ChallengeRng) -> bool {
        if !self.current.is_correct(guess) {
            return false;
        }

        self.solves += 1;
        self.mining_progress += 1;
        if self.mining_progress >= ZEN_SOLVES_PER_CREDIT {
            self.mining_progress = 0;
            self.credits_earned += 1;
            progression.add_currency(1);
            debug!(credits = self.credits_earned, "zen block mined");
        }

        self.day += 1;
        let request = ChallengeRequest::new(self.day, self.current.solution, false);
        self.current = generate(&request, rng);
        true
    }
}

/// Result of one time-attack answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAttackAnswer {
    pub correct: bool,
    /// Consumable awarded for crossing a loot threshold.
    pub loot: Option<&'static LootItem>,
}

#[derive(Debug, Clone)]
pub struct TimeAttackRun {
    score: u32,
    seconds_left: u32,
    current: Challenge,
}

impl TimeAttackRun {
    pub fn start(rng: &mut ChallengeRng) -> Self {
        Self {
            score: 0,
            seconds_left: TIME_ATTACK_START_SECONDS,
            current: generate_arcade(ArcadeDifficulty::Medium, rng),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn current(&self) -> &Challenge {
        &self.current
    }

    pub fn is_over(&self) -> bool {
        self.seconds_left == 0
    }

    /// Advance the clock. Returns true while the run is still live.
    pub fn tick(&mut self, seconds: u32) -> bool {
        self.seconds_left = self.seconds_left.saturating_sub(seconds);
        !self.is_over()
    }

    /// Answer the current puzzle. Answers after the clock runs out are ignored.
    pub fn submit(
        &mut self,
        guess: i64,
        progression: &mut Progression,
        rng: &mut ChallengeRng,
    ) -> TimeAttackAnswer {
        if self.is_over() || !self.current.is_correct(guess) {
            return TimeAttackAnswer {
                correct: false,
                loot: None,
            };
        }

        self.score += TIME_ATTACK_POINTS_PER_SOLVE;
        self.seconds_left = (self.seconds_left + TIME_ATTACK_BONUS_SECONDS).min(TIME_ATTACK_MAX_SECONDS);

        let loot = if self.score % TIME_ATTACK_LOOT_EVERY_POINTS == 0 {
            Some(progression.grant_loot(Some(Category::Consumable), &mut rng.gameplay))
        } else {
            None
        };

        self.current = generate_arcade(ArcadeDifficulty::Medium, rng);
        TimeAttackAnswer {
            correct: true,
            loot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zen_mines_a_credit_every_five_solves() {
        let mut rng = ChallengeRng::from_seed(10);
        let mut progression = Progression::new();
        let mut zen = ZenRun::start(1, &mut rng);

        for i in 1..=10 {
            let answer = zen.current().solution;
            assert!(zen.submit(answer, &mut progression, &mut rng));
            assert_eq!(zen.mining_progress(), i % 5);
        }
        assert_eq!(zen.credits_earned(), 2);
        assert_eq!(progression.state().currency(), 3);
        assert_eq!(progression.state().streak(), 0);
    }

    #[test]
    fn test_zen_chains_previous_solution() {
        let mut rng = ChallengeRng::from_seed(12);
        let mut progression = Progression::new();
        let mut zen = ZenRun::start(7, &mut rng);
        let first = zen.current().solution;
        zen.submit(first, &mut progression, &mut rng);
        let eq = zen.current().equation.clone().unwrap();
        assert_eq!(eq.evaluate(first), zen.current().solution);
    }

    #[test]
    fn test_zen_wrong_answer_is_free() {
        let mut rng = ChallengeRng::from_seed(1);
        let mut progression = Progression::new();
        let mut zen = ZenRun::start(1, &mut rng);
        let wrong = zen.current().solution + 1;
        assert!(!zen.submit(wrong, &mut progression, &mut rng));
        assert_eq!(zen.solves(), 0);
        assert_eq!(progression.state().lives(), 3);
    }

    #[test]
    fn test_time_attack_scoring_and_loot() {
        let mut rng = ChallengeRng::from_seed(5);
        let mut progression = Progression::new();
        let mut run = TimeAttackRun::start(&mut rng);

        run.tick(20);
        for solve in 1..=5 {
            let answer = run.current().solution;
            let result = run.submit(answer, &mut progression, &mut rng);
            assert!(result.correct);
            if solve < 5 {
                assert!(result.loot.is_none());
            } else {
                let loot = result.loot.unwrap();
                assert_eq!(loot.category(), Category::Consumable);
                assert_eq!(progression.state().inventory().total(), 1);
            }
        }
        assert_eq!(run.score(), 500);
        assert_eq!(run.seconds_left(), 60);
    }

    #[test]
    fn test_time_attack_clock() {
        let mut rng = ChallengeRng::from_seed(5);
        let mut progression = Progression::new();
        let mut run = TimeAttackRun::start(&mut rng);
        assert!(run.tick(59));
        assert!(!run.tick(5));
        let answer = run.current().solution;
        assert!(!run.submit(answer, &mut progression, &mut rng).correct);
        assert_eq!(run.score(), 0);
    }
}
