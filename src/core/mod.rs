pub mod constants;
pub mod rng;

pub use rng::{CalendarDay, ChallengeRng};
