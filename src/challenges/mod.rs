//! Challenge generation: the daily chain, its overrides, and the standalone
//! arcade puzzles.

pub mod arcade;
pub mod flavor;
pub mod generation;
pub mod overrides;
pub mod types;

pub use arcade::{generate_arcade, generate_global_daily};
pub use generation::{
    generate, is_chainable, resolve_operation, tutorial_challenge, ChallengeRequest,
};
pub use overrides::{is_corruption_day, override_unlock_ids};
pub use types::{ArcadeDifficulty, Challenge, DifficultyTier, Equation, Operand, Operator};
