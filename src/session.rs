//! Top-level game context tying the generator to the progression machine.

use crate::catalog::validate_catalog;
use crate::challenges::{generate, Challenge, ChallengeRequest};
use crate::core::rng::{CalendarDay, ChallengeRng};
use crate::error::{CatalogError, CraftError, ProgressionError};
use crate::progression::{
    load_progression, save_progression, AnswerOutcome, ItemEffect, LifeOutcome, Progression,
    ProgressionState,
};
use std::io;
use tracing::{debug, info};

/// One player's session: their progression, the random streams, and
/// whether today's puzzle has been simplified.
#[derive(Debug, Clone)]
pub struct GameSession {
    progression: Progression,
    rng: ChallengeRng,
    easy_mode: bool,
}

impl GameSession {
    /// Validate the catalogs and wrap `progression`.
    pub fn start(progression: Progression, rng: ChallengeRng) -> Result<Self, CatalogError> {
        validate_catalog()?;
        Ok(Self {
            progression,
            rng,
            easy_mode: false,
        })
    }

    /// Resume the saved player with fresh entropy.
    pub fn resume() -> Result<Self, CatalogError> {
        let progression = Progression::restore(load_progression());
        info!(
            streak = progression.state().streak(),
            day = progression.state().day_index(),
            "session resumed"
        );
        Self::start(progression, ChallengeRng::from_entropy())
    }

    pub fn save(&self) -> io::Result<()> {
        save_progression(self.progression.state())
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn progression_mut(&mut self) -> &mut Progression {
        &mut self.progression
    }

    pub fn rng_mut(&mut self) -> &mut ChallengeRng {
        &mut self.rng
    }

    pub fn easy_mode(&self) -> bool {
        self.easy_mode
    }

    /// Today's puzzle. Generated on first call and kept until it is solved
    /// or the streak resets.
    pub fn todays_challenge(&mut self, today: Option<CalendarDay>) -> &Challenge {
        let (rng, easy_mode) = (&mut self.rng, self.easy_mode);
        self.progression
            .outstanding_or_begin(|state| generate(&daily_request(state, easy_mode, today), rng))
    }

    /// Submit a guess for today's puzzle.
    pub fn submit_answer(&mut self, guess: i64) -> Result<AnswerOutcome, ProgressionError> {
        let outcome = self.progression.submit_answer(guess)?;
        if matches!(
            outcome,
            AnswerOutcome::Correct(_) | AnswerOutcome::Wrong(LifeOutcome::StreakReset { .. })
        ) {
            self.easy_mode = false;
        }
        Ok(outcome)
    }

    /// Use a consumable. Debug mode replaces today's puzzle with an easier one
    /// built on the same previous solution.
    pub fn use_item(
        &mut self,
        item_id: &str,
        today: Option<CalendarDay>,
    ) -> Result<ItemEffect, ProgressionError> {
        let effect = self.progression.use_consumable(item_id)?;
        match effect {
            ItemEffect::SimplifyChallenge => {
                self.easy_mode = true;
                let request = daily_request(self.progression.state(), true, today);
                let easier = generate(&request, &mut self.rng);
                debug!(expression = %easier.expression, "challenge simplified");
                self.progression.begin_challenge(&easier);
            }
            ItemEffect::ChallengeBypassed(_) => self.easy_mode = false,
            _ => {}
        }
        Ok(effect)
    }

    pub fn craft(&mut self, recipe_id: &str) -> Result<&'static str, CraftError> {
        self.progression.craft(recipe_id)
    }
}

fn daily_request(
    state: &ProgressionState,
    easy_mode: bool,
    today: Option<CalendarDay>,
) -> ChallengeRequest {
    ChallengeRequest {
        day_index: state.day_index(),
        previous_solution: state.last_solution(),
        easy_mode,
        today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::DifficultyTier;

    fn session(seed: u64) -> GameSession {
        GameSession::start(Progression::new(), ChallengeRng::from_seed(seed)).unwrap()
    }

    #[test]
    fn test_first_day_is_tutorial() {
        let mut s = session(1);
        let c = s.todays_challenge(None);
        assert_eq!(c.solution, 1);
        assert_eq!(c.difficulty_tier, DifficultyTier::Tutorial);
    }

    #[test]
    fn test_challenge_is_stable_until_answered() {
        let mut s = session(2);
        let first = s.todays_challenge(None).id.clone();
        let again = s.todays_challenge(None).id.clone();
        assert_eq!(first, again);
        s.submit_answer(1).unwrap();
        assert_ne!(s.todays_challenge(None).id, first);
    }

    #[test]
    fn test_easy_mode_regenerates_basic() {
        let mut s = session(3);
        for _ in 0..40 {
            let answer = s.todays_challenge(None).solution;
            s.submit_answer(answer).unwrap();
        }
        assert_eq!(s.progression().state().day_index(), 41);
        assert_eq!(s.todays_challenge(None).difficulty_tier, DifficultyTier::Advanced);

        s.progression_mut().add_item("easy_mode");
        s.use_item("easy_mode", None).unwrap();
        assert!(s.easy_mode());
        let easier = s.todays_challenge(None).clone();
        assert_eq!(easier.difficulty_tier, DifficultyTier::Basic);

        let previous = s.progression().state().last_solution();
        assert_eq!(easier.equation.unwrap().evaluate(previous), easier.solution);

        s.submit_answer(easier.solution).unwrap();
        assert!(!s.easy_mode());
    }
}
