//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated players
    pub num_runs: u32,

    /// Calendar days each player plays
    pub days: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Probability that any single guess is right
    pub accuracy: f64,

    /// Whether the player spends streak freezes and extra lives when at risk
    pub use_items: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            days: 365,
            seed: None,
            accuracy: 0.9,
            use_items: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// A careful player over a long horizon
    pub fn marathon(days: u32) -> Self {
        Self {
            days,
            accuracy: 0.97,
            ..Default::default()
        }
    }
}
