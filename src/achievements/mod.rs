//! Achievement evaluator.
//!
//! Maps a streak value to every achievement it satisfies. Unlock bookkeeping
//! lives in the progression state; this module is pure.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use logic::{evaluate, notification};
pub use types::{AchievementDef, AchievementRule};
