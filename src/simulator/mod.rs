//! Balance simulator for Monte Carlo analysis.
//!
//! Plays many seeded runs of the daily chain with a fixed answer accuracy to
//! show how long streaks survive, how often resets happen, and how quickly
//! achievements and rare unlocks arrive.
//!
//! Runs use the real generator and `Progression`, so results match gameplay.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
