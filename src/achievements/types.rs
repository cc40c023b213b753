//! Achievement definition types.

use serde::Serialize;

/// Predicate over the new streak value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AchievementRule {
    /// Fires exactly once on the run, at this streak.
    Exact(u32),
    /// Prime streak greater than 1.
    Prime,
    /// Perfect-square streak greater than 1.
    PerfectSquare,
    /// Streak is a Fibonacci number.
    Fibonacci,
}

impl AchievementRule {
    pub fn name(&self) -> &'static str {
        match self {
            AchievementRule::Exact(_) => "Milestone",
            AchievementRule::Prime => "Prime",
            AchievementRule::PerfectSquare => "Perfect Square",
            AchievementRule::Fibonacci => "Fibonacci",
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, Serialize)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: AchievementRule,
}
