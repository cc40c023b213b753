//! The progression state machine.
//!
//! A run moves between three states: maintained (lives > 1 or protection
//! armed), at risk (one life, no protection), and reset. Every mutating
//! operation applies its whole effect before returning, so no caller ever
//! observes a streak that has advanced without its achievements.

use super::inventory::Inventory;
use super::state::ProgressionState;
use crate::achievements::{self, AchievementDef};
use crate::challenges::Challenge;
use crate::core::constants::{BOOTSTRAP_SOLUTION, DEFAULT_LIVES, FIRST_DAY, MAX_LIVES};
use crate::crafting::{self, ItemStore};
use crate::error::{CraftError, ProgressionError};
use crate::items::{get_item, roll_loot, Category, ConsumableEffect, LootItem};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// What a correct answer changed.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessReport {
    pub streak: u32,
    /// Achievements unlocked for the first time by this success.
    pub new_achievements: Vec<&'static AchievementDef>,
    /// One combined message for everything in `new_achievements`.
    pub notification: Option<String>,
    /// Artifact granted by the solved challenge, if any.
    pub rare_unlock: Option<String>,
}

/// What a wrong answer changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeOutcome {
    /// Lost a life; the streak is intact.
    Decremented { lives: u8 },
    /// The last life was lost but streak protection absorbed it.
    ProtectionAbsorbed,
    /// The last life was lost with no protection.
    StreakReset { lost_streak: u32 },
}

#[derive(Debug, Clone, Serialize)]
pub enum AnswerOutcome {
    Correct(SuccessReport),
    Wrong(LifeOutcome),
}

/// Result of using a consumable.
#[derive(Debug, Clone, Serialize)]
pub enum ItemEffect {
    ExtraLife { lives: u8 },
    StreakProtected,
    RevealHint { solution: i64 },
    /// The caller should regenerate today's puzzle in easy mode.
    SimplifyChallenge,
    RecallPrevious { previous_solution: i64 },
    ChallengeBypassed(SuccessReport),
}

#[derive(Debug, Clone, Default)]
pub struct Progression {
    state: ProgressionState,
    outstanding: Option<Challenge>,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a loaded state, repairing out-of-range fields.
    pub fn restore(mut state: ProgressionState) -> Self {
        if state.sanitize() {
            warn!("repaired out-of-range progression fields");
        }
        Self {
            state,
            outstanding: None,
        }
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    pub fn outstanding(&self) -> Option<&Challenge> {
        self.outstanding.as_ref()
    }

    /// Register the puzzle the player is now solving.
    pub fn begin_challenge(&mut self, challenge: &Challenge) -> &Challenge {
        debug!(id = %challenge.id, day = self.state.day_index, "challenge begun");
        self.outstanding.insert(challenge.clone())
    }

    /// The outstanding challenge, or one built by `make` from the current
    /// state and registered if nothing is in play.
    pub fn outstanding_or_begin(
        &mut self,
        make: impl FnOnce(&ProgressionState) -> Challenge,
    ) -> &Challenge {
        let state = &self.state;
        self.outstanding.get_or_insert_with(|| {
            let challenge = make(state);
            debug!(id = %challenge.id, day = state.day_index, "challenge begun");
            challenge
        })
    }

    /// Check `guess` against the outstanding challenge and apply the result.
    pub fn submit_answer(&mut self, guess: i64) -> Result<AnswerOutcome, ProgressionError> {
        let challenge = self
            .outstanding
            .as_ref()
            .ok_or(ProgressionError::NoOutstandingChallenge)?;

        if challenge.is_correct(guess) {
            let solution = challenge.solution;
            self.record_success(solution).map(AnswerOutcome::Correct)
        } else {
            self.lose_life().map(AnswerOutcome::Wrong)
        }
    }

    /// Advance the streak after a correct answer.
    ///
    /// Lives refill, the peak is raised, and achievements are evaluated
    /// against the new streak. Achievements already unlocked are not
    /// reported again.
    pub fn record_success(&mut self, solution: i64) -> Result<SuccessReport, ProgressionError> {
        let challenge = self
            .outstanding
            .take()
            .ok_or(ProgressionError::NoOutstandingChallenge)?;

        let s = &mut self.state;
        s.streak = s.streak.saturating_add(1);
        s.day_index = ProgressionState::day_for_streak(s.streak);
        s.last_solution = solution;
        s.lives = DEFAULT_LIVES;
        s.peak_streak = s.peak_streak.max(s.streak);

        let new_achievements: Vec<&'static AchievementDef> = achievements::evaluate(s.streak)
            .into_iter()
            .filter(|def| s.unlocked_achievement_ids.insert(def.id.to_string()))
            .collect();
        let notification = achievements::notification(&new_achievements);

        let rare_unlock = challenge.rare_unlock_id;
        if let Some(id) = &rare_unlock {
            s.inventory.add(id, 1);
            info!(item = %id, "rare unlock granted");
        }

        info!(
            streak = s.streak,
            day = s.day_index,
            achievements = new_achievements.len(),
            "success recorded"
        );
        s.check_invariants();

        Ok(SuccessReport {
            streak: s.streak,
            new_achievements,
            notification,
            rare_unlock,
        })
    }

    /// Apply a wrong answer.
    pub fn lose_life(&mut self) -> Result<LifeOutcome, ProgressionError> {
        if self.outstanding.is_none() {
            return Err(ProgressionError::NoOutstandingChallenge);
        }

        let s = &mut self.state;
        let outcome = if s.lives > 1 {
            s.lives -= 1;
            debug!(lives = s.lives, "life lost");
            LifeOutcome::Decremented { lives: s.lives }
        } else if s.streak_protected {
            s.lives = DEFAULT_LIVES;
            s.streak_protected = false;
            info!(streak = s.streak, "streak protection absorbed a game over");
            LifeOutcome::ProtectionAbsorbed
        } else {
            let lost_streak = s.streak;
            s.streak = 0;
            s.day_index = FIRST_DAY;
            s.last_solution = BOOTSTRAP_SOLUTION;
            s.lives = DEFAULT_LIVES;
            s.streak_protected = false;
            s.total_failures += 1;
            self.outstanding = None;
            info!(lost_streak, failures = s.total_failures, "streak reset");
            LifeOutcome::StreakReset { lost_streak }
        };

        self.state.check_invariants();
        Ok(outcome)
    }

    pub fn add_currency(&mut self, amount: u64) {
        self.state.currency = self.state.currency.saturating_add(amount);
    }

    pub fn add_item(&mut self, item_id: &str) {
        self.state.inventory.add(item_id, 1);
        debug!(item = item_id, "item added");
    }

    /// Roll the loot table and add the result to the inventory.
    pub fn grant_loot(&mut self, forced: Option<Category>, rng: &mut impl Rng) -> &'static LootItem {
        let item = roll_loot(forced, rng);
        self.add_item(item.id);
        item
    }

    /// Remove one unit per listed id (repeats remove more). Nothing is
    /// removed unless every unit is held.
    pub fn consume_items(&mut self, item_ids: &[&str]) -> Result<(), ProgressionError> {
        let mut wanted: BTreeMap<&str, u32> = BTreeMap::new();
        for &id in item_ids {
            *wanted.entry(id).or_insert(0) += 1;
        }
        check_held(&self.state.inventory, &wanted)?;
        for (id, count) in wanted {
            self.state.inventory.remove(id, count)?;
        }
        Ok(())
    }

    /// Use one unit of a consumable. A failed use never consumes the item.
    pub fn use_consumable(&mut self, item_id: &str) -> Result<ItemEffect, ProgressionError> {
        if !self.state.inventory.has(item_id, 1) {
            return Err(ProgressionError::ItemNotHeld(item_id.to_string()));
        }
        let effect = get_item(item_id)
            .and_then(|item| item.consumable_effect())
            .ok_or_else(|| ProgressionError::NotConsumable(item_id.to_string()))?;

        let needs_challenge = matches!(
            effect,
            ConsumableEffect::HintToken
                | ConsumableEffect::EasyMode
                | ConsumableEffect::BypassProtocol
        );
        if needs_challenge && self.outstanding.is_none() {
            return Err(ProgressionError::NoOutstandingChallenge);
        }
        if effect == ConsumableEffect::StreakFreeze && self.state.streak_protected {
            return Err(ProgressionError::ProtectionAlreadyActive);
        }

        self.state.inventory.remove(item_id, 1)?;
        info!(item = item_id, "consumable used");

        let result = match effect {
            ConsumableEffect::ExtraLife => {
                self.state.lives = (self.state.lives + 1).min(MAX_LIVES);
                ItemEffect::ExtraLife {
                    lives: self.state.lives,
                }
            }
            ConsumableEffect::StreakFreeze => {
                self.state.streak_protected = true;
                ItemEffect::StreakProtected
            }
            ConsumableEffect::HintToken => ItemEffect::RevealHint {
                solution: self.outstanding.as_ref().map_or(0, |c| c.solution),
            },
            ConsumableEffect::EasyMode => ItemEffect::SimplifyChallenge,
            ConsumableEffect::MemoryJog => ItemEffect::RecallPrevious {
                previous_solution: self.state.last_solution,
            },
            ConsumableEffect::BypassProtocol => {
                let solution = self.outstanding.as_ref().map_or(0, |c| c.solution);
                ItemEffect::ChallengeBypassed(self.record_success(solution)?)
            }
        };

        self.state.check_invariants();
        Ok(result)
    }

    /// Craft a recipe from the inventory.
    pub fn craft(&mut self, recipe_id: &str) -> Result<&'static str, CraftError> {
        crafting::craft(recipe_id, &mut self.state.inventory)
    }

    /// Flip the pro entitlement. Returns false if it was already set.
    pub fn unlock_pro(&mut self) -> bool {
        let newly = !self.state.pro_unlocked;
        self.state.pro_unlocked = true;
        newly
    }
}

fn check_held(inventory: &Inventory, wanted: &BTreeMap<&str, u32>) -> Result<(), ProgressionError> {
    for (&id, &count) in wanted {
        let held = inventory.count(id);
        if held == 0 {
            return Err(ProgressionError::ItemNotHeld(id.to_string()));
        }
        if held < count {
            return Err(ProgressionError::InsufficientItems {
                item_id: id.to_string(),
                required: count,
                held,
            });
        }
    }
    Ok(())
}
