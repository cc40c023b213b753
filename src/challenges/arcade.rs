//! Standalone puzzles outside the daily chain: the shared global daily and
//! the arcade pool used by zen and time attack runs.
//!
//! These never reference a previous answer. Operands are literals,
//! subtraction is ordered so the result stays non-negative, and division is
//! built backwards from its quotient so it is always exact.

use super::flavor::{self, ARCADE_HINT, GLOBAL_DAILY_INTRO};
use super::generation::challenge_id;
use super::types::{ArcadeDifficulty, Challenge, DifficultyTier, Equation, Operand, Operator};
use crate::core::rng::ChallengeRng;
use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

fn literal_challenge(
    id: String,
    mut lhs: i64,
    operator: Operator,
    mut rhs: i64,
    tier: DifficultyTier,
    hint: String,
) -> Challenge {
    if operator == Operator::Subtract && lhs < rhs {
        std::mem::swap(&mut lhs, &mut rhs);
    }
    let equation = Equation {
        lhs: Operand::Literal(lhs),
        operator,
        rhs,
    };
    Challenge {
        id,
        expression: equation.to_string(),
        solution: equation.evaluate(0),
        equation: Some(equation),
        difficulty_tier: tier,
        hint: Some(hint),
        success_text: None,
        rare_unlock_id: None,
        is_corrupted: false,
        displayed_result: None,
    }
}

/// The same puzzle for every player on `date`.
pub fn generate_global_daily(date: NaiveDate) -> Challenge {
    let mut rng = ChallengeRng::from_date(date);
    let g = &mut rng.gameplay;

    let roll = g.gen::<f64>();
    let tier = if roll < 0.3 {
        DifficultyTier::Basic
    } else if roll < 0.8 {
        DifficultyTier::Intermediate
    } else {
        DifficultyTier::Advanced
    };

    let mut lhs: i64 = g.gen_range(5..=24);
    let mut rhs: i64 = g.gen_range(2..=11);
    let mut operator = if g.gen_bool(0.5) {
        Operator::Add
    } else {
        Operator::Subtract
    };

    match tier {
        DifficultyTier::Intermediate => {
            if g.gen_bool(0.5) {
                operator = Operator::Multiply;
            } else {
                operator = Operator::Divide;
                lhs *= rhs;
            }
        }
        DifficultyTier::Advanced => {
            lhs = g.gen_range(10..=59);
            rhs = g.gen_range(3..=14);
            operator = Operator::Multiply;
        }
        _ => {}
    }

    let hint = format!("{} {}", GLOBAL_DAILY_INTRO, flavor::narrative(&mut rng.flavor));
    let id = format!("daily-{}-{}", date.format("%Y-%m-%d"), Uuid::new_v4().simple());
    literal_challenge(id, lhs, operator, rhs, tier, hint)
}

/// A single arcade puzzle.
pub fn generate_arcade(difficulty: ArcadeDifficulty, rng: &mut ChallengeRng) -> Challenge {
    let g = &mut rng.gameplay;
    let add_or_sub = |coin: bool| if coin { Operator::Add } else { Operator::Subtract };

    let (lhs, operator, rhs, tier) = match difficulty {
        ArcadeDifficulty::Easy => {
            let lhs = g.gen_range(1..=20);
            let rhs = g.gen_range(1..=9);
            (lhs, add_or_sub(g.gen_bool(0.5)), rhs, DifficultyTier::Basic)
        }
        ArcadeDifficulty::Medium => {
            if g.gen::<f64>() < 0.4 {
                let lhs = g.gen_range(2..=11);
                let rhs = g.gen_range(2..=10);
                (lhs, Operator::Multiply, rhs, DifficultyTier::Intermediate)
            } else {
                let lhs = g.gen_range(10..=59);
                let rhs = g.gen_range(5..=24);
                (lhs, add_or_sub(g.gen_bool(0.5)), rhs, DifficultyTier::Intermediate)
            }
        }
        ArcadeDifficulty::Hard => {
            let roll = g.gen::<f64>();
            if roll < 0.5 {
                let lhs = g.gen_range(3..=17);
                let rhs = g.gen_range(2..=13);
                (lhs, Operator::Multiply, rhs, DifficultyTier::Advanced)
            } else if roll < 0.7 {
                let rhs: i64 = g.gen_range(2..=10);
                let quotient: i64 = g.gen_range(2..=13);
                (quotient * rhs, Operator::Divide, rhs, DifficultyTier::Advanced)
            } else {
                let lhs = g.gen_range(20..=119);
                let rhs = g.gen_range(10..=59);
                (lhs, add_or_sub(g.gen_bool(0.5)), rhs, DifficultyTier::Advanced)
            }
        }
    };

    literal_challenge(
        challenge_id("arcade", 0),
        lhs,
        operator,
        rhs,
        tier,
        ARCADE_HINT.to_string(),
    )
}
