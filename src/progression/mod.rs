//! Progression state machine: streak, lives, currency, protection,
//! achievements and inventory.
//!
//! Saved to `~/.keep-the-streak/progression.json`.

pub mod inventory;
pub mod machine;
pub mod persistence;
pub mod state;

pub use inventory::Inventory;
pub use machine::{AnswerOutcome, ItemEffect, LifeOutcome, Progression, SuccessReport};
pub use persistence::{load_progression, load_progression_from, save_progression, save_progression_to};
pub use state::ProgressionState;
