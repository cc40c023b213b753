//! Keep the Streak - daily chained math puzzle library
//!
//! Each day's puzzle is built on the previous day's answer. This crate holds
//! the game core: challenge generation, the progression state machine,
//! achievements, loot, crafting and persistence. Presentation lives elsewhere.

pub mod achievements;
pub mod catalog;
pub mod challenges;
pub mod core;
pub mod crafting;
pub mod error;
pub mod items;
pub mod leaderboard;
pub mod modes;
pub mod progression;
pub mod session;
pub mod simulator;
pub mod unlocks;

pub use challenges::{Challenge, ChallengeRequest, DifficultyTier};
pub use core::rng::{CalendarDay, ChallengeRng};
pub use error::{CatalogError, CraftError, ProgressionError};
pub use progression::{Progression, ProgressionState};
pub use session::GameSession;
