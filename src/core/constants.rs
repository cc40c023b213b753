// Lives
pub const DEFAULT_LIVES: u8 = 3;
pub const MAX_LIVES: u8 = 5;

// Fresh-run defaults
pub const BOOTSTRAP_SOLUTION: i64 = 1;
pub const STARTING_CURRENCY: u64 = 1;
pub const FIRST_DAY: u32 = 1;

// Difficulty tiers (day index thresholds, exclusive)
pub const BASIC_TIER_END_DAY: u32 = 10;
pub const INTERMEDIATE_TIER_END_DAY: u32 = 30;

// Corrupted challenges: every Nth day once past the threshold
pub const CORRUPTION_CADENCE: u32 = 4;
pub const CORRUPTION_MIN_DAY: u32 = 10;
pub const CORRUPTION_MIN_OFFSET: i64 = 3;
pub const CORRUPTION_SPREAD: i64 = 50;

// Solutions above this are steered back down by subtracting instead of multiplying
pub const SOLUTION_CEILING: i64 = 999_999;

// Forced Nokia override
pub const NOKIA_TARGET: i64 = 3210;
pub const NOKIA_FORCED_MIN_DAY: u32 = 100;
pub const NOKIA_FORCED_CHANCE: f64 = 0.01;

// Loot tier thresholds (roll strictly above)
pub const LOOT_LEGENDARY_THRESHOLD: f64 = 0.99;
pub const LOOT_RARE_THRESHOLD: f64 = 0.90;
pub const LOOT_UNCOMMON_THRESHOLD: f64 = 0.60;

// Achievement math predicates only look at streaks up to this value for Fibonacci membership
pub const FIBONACCI_CEILING: u32 = 1000;

// Zen mode: solves per mined credit
pub const ZEN_SOLVES_PER_CREDIT: u32 = 5;

// Time attack
pub const TIME_ATTACK_START_SECONDS: u32 = 60;
pub const TIME_ATTACK_MAX_SECONDS: u32 = 60;
pub const TIME_ATTACK_BONUS_SECONDS: u32 = 5;
pub const TIME_ATTACK_POINTS_PER_SOLVE: u32 = 100;
pub const TIME_ATTACK_LOOT_EVERY_POINTS: u32 = 500;

// Salt mixed into the seed of the cosmetic RNG stream
pub const FLAVOR_STREAM_SALT: u64 = 0x9e37_79b9_7f4a_7c15;
