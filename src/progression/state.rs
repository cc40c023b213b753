//! The persisted progression record.

use super::inventory::Inventory;
use crate::challenges::is_chainable;
use crate::core::constants::{
    BOOTSTRAP_SOLUTION, DEFAULT_LIVES, FIRST_DAY, MAX_LIVES, STARTING_CURRENCY,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything about a player that survives between sessions.
///
/// Fields are only mutated through [`super::Progression`]; read them through
/// the getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionState {
    pub(super) streak: u32,
    pub(super) peak_streak: u32,
    pub(super) lives: u8,
    pub(super) currency: u64,
    pub(super) day_index: u32,
    pub(super) last_solution: i64,
    pub(super) streak_protected: bool,
    pub(super) unlocked_achievement_ids: BTreeSet<String>,
    pub(super) inventory: Inventory,
    pub(super) total_failures: u32,
    pub(super) pro_unlocked: bool,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            streak: 0,
            peak_streak: 0,
            lives: DEFAULT_LIVES,
            currency: STARTING_CURRENCY,
            day_index: FIRST_DAY,
            last_solution: BOOTSTRAP_SOLUTION,
            streak_protected: false,
            unlocked_achievement_ids: BTreeSet::new(),
            inventory: Inventory::new(),
            total_failures: 0,
            pro_unlocked: false,
        }
    }
}

impl ProgressionState {
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn peak_streak(&self) -> u32 {
        self.peak_streak
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn currency(&self) -> u64 {
        self.currency
    }

    pub fn day_index(&self) -> u32 {
        self.day_index
    }

    pub fn last_solution(&self) -> i64 {
        self.last_solution
    }

    pub fn streak_protected(&self) -> bool {
        self.streak_protected
    }

    pub fn unlocked_achievement_ids(&self) -> &BTreeSet<String> {
        &self.unlocked_achievement_ids
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.unlocked_achievement_ids.contains(id)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn total_failures(&self) -> u32 {
        self.total_failures
    }

    pub fn pro_unlocked(&self) -> bool {
        self.pro_unlocked
    }

    /// The streak is "at risk" when one more miss without protection resets it.
    pub fn at_risk(&self) -> bool {
        self.lives == 1 && !self.streak_protected
    }

    /// The day a streak of `streak` is working on.
    pub(super) fn day_for_streak(streak: u32) -> u32 {
        streak.saturating_add(FIRST_DAY)
    }

    /// Repair fields a hand-edited or truncated save could leave out of range.
    /// The streak is trusted over the day index. Returns true if anything
    /// changed.
    pub(super) fn sanitize(&mut self) -> bool {
        let mut changed = false;
        if self.lives == 0 || self.lives > MAX_LIVES {
            self.lives = DEFAULT_LIVES;
            changed = true;
        }
        let day_index = Self::day_for_streak(self.streak);
        if self.day_index != day_index {
            self.day_index = day_index;
            changed = true;
        }
        if !is_chainable(self.last_solution) {
            self.last_solution = BOOTSTRAP_SOLUTION;
            changed = true;
        }
        if self.peak_streak < self.streak {
            self.peak_streak = self.streak;
            changed = true;
        }
        changed
    }

    pub(super) fn check_invariants(&self) {
        assert!(
            (1..=MAX_LIVES).contains(&self.lives),
            "lives out of range: {}",
            self.lives
        );
        debug_assert!(self.peak_streak >= self.streak);
        debug_assert_eq!(
            self.day_index,
            Self::day_for_streak(self.streak),
            "day index drifted from streak"
        );
    }
}
