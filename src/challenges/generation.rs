//! Daily chained challenge generation.
//!
//! Each day's puzzle applies one operator to the previous day's solution, so
//! the player has to remember yesterday's answer to solve today's.

use super::flavor::{self, TUTORIAL_HINT};
use super::overrides::{
    anniversary_challenge, apply_collectibles, corrupt, find_anniversary, is_corruption_day,
};
use super::types::{Challenge, DifficultyTier, Equation, Operand, Operator};
use crate::core::constants::{
    BASIC_TIER_END_DAY, BOOTSTRAP_SOLUTION, FIRST_DAY, INTERMEDIATE_TIER_END_DAY,
    SOLUTION_CEILING,
};
use crate::core::rng::{CalendarDay, ChallengeRng};
use rand::Rng;
use tracing::{debug, warn};
use uuid::Uuid;

/// Inputs for one day's puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeRequest {
    pub day_index: u32,
    pub previous_solution: i64,
    pub easy_mode: bool,
    /// `None` when the calendar collaborator is unavailable; anniversaries are skipped.
    pub today: Option<CalendarDay>,
}

impl ChallengeRequest {
    pub fn new(day_index: u32, previous_solution: i64, easy_mode: bool) -> Self {
        Self {
            day_index,
            previous_solution,
            easy_mode,
            today: None,
        }
    }

    pub fn on(mut self, today: CalendarDay) -> Self {
        self.today = Some(today);
        self
    }
}

pub(crate) fn challenge_id(kind: &str, day_index: u32) -> String {
    format!("{}-{}-{}", kind, day_index, Uuid::new_v4().simple())
}

pub fn difficulty_for_day(day_index: u32, easy_mode: bool) -> DifficultyTier {
    if day_index <= FIRST_DAY {
        DifficultyTier::Tutorial
    } else if easy_mode || day_index < BASIC_TIER_END_DAY {
        DifficultyTier::Basic
    } else if day_index < INTERMEDIATE_TIER_END_DAY {
        DifficultyTier::Intermediate
    } else {
        DifficultyTier::Advanced
    }
}

/// The fixed first-day puzzle that seeds every chain.
pub fn tutorial_challenge() -> Challenge {
    Challenge {
        id: challenge_id("legacy-day", FIRST_DAY),
        expression: "The Answer is 1".to_string(),
        equation: None,
        solution: BOOTSTRAP_SOLUTION,
        difficulty_tier: DifficultyTier::Tutorial,
        hint: Some(TUTORIAL_HINT.to_string()),
        success_text: None,
        rare_unlock_id: None,
        is_corrupted: false,
        displayed_result: None,
    }
}

/// Draw an operator and operand for a tier from the gameplay stream.
pub fn draw_operation<R: Rng>(tier: DifficultyTier, easy_mode: bool, rng: &mut R) -> (Operator, i64) {
    match tier {
        DifficultyTier::Basic | DifficultyTier::Tutorial | DifficultyTier::Special => {
            let operand = if easy_mode {
                rng.gen_range(1..=5)
            } else {
                rng.gen_range(1..=9)
            };
            (add_or_sub(&mut *rng), operand)
        }
        DifficultyTier::Intermediate => {
            let roll = rng.gen::<f64>();
            if roll < 0.4 {
                (Operator::Multiply, rng.gen_range(2..=6))
            } else if roll < 0.6 {
                (Operator::Divide, rng.gen_range(2..=4))
            } else {
                let op = add_or_sub(&mut *rng);
                (op, rng.gen_range(5..=24))
            }
        }
        DifficultyTier::Advanced => {
            let roll = rng.gen::<f64>();
            if roll < 0.3 {
                (Operator::Multiply, rng.gen_range(2..=9))
            } else if roll < 0.6 {
                (Operator::Divide, rng.gen_range(2..=9))
            } else {
                let op = add_or_sub(&mut *rng);
                (op, rng.gen_range(10..=99))
            }
        }
    }
}

/// Settle the drawn operator against the previous solution.
///
/// - addition past `SOLUTION_CEILING` becomes subtraction
/// - subtraction that would go negative becomes addition
/// - division that is not exact (or divides zero) becomes multiplication
/// - multiplication past `SOLUTION_CEILING` becomes subtraction, or addition
///   if that would go negative
///
/// The operand never changes. For `previous` in `0..=SOLUTION_CEILING` the
/// solution stays in that range too; outside it the arithmetic saturates
/// instead of overflowing. Returns the final operator and the solution.
pub fn resolve_operation(previous: i64, operator: Operator, operand: i64) -> (Operator, i64) {
    assert!(operand > 0, "operand must be positive, got {operand}");

    let settled = match operator {
        Operator::Add => add_or_subtract(previous, operand),
        Operator::Subtract => subtract_or_add(previous, operand),
        Operator::Divide if previous != 0 && previous % operand == 0 => Operator::Divide,
        Operator::Divide | Operator::Multiply => match previous.checked_mul(operand) {
            Some(product) if product.unsigned_abs() <= SOLUTION_CEILING.unsigned_abs() => {
                Operator::Multiply
            }
            _ => subtract_or_add(previous, operand),
        },
    };

    (settled, settled.apply(previous, operand))
}

/// Whether `previous` can seed a chained puzzle.
pub fn is_chainable(previous: i64) -> bool {
    (0..=SOLUTION_CEILING).contains(&previous)
}

fn add_or_sub<R: Rng>(rng: &mut R) -> Operator {
    if rng.gen_bool(0.5) {
        Operator::Add
    } else {
        Operator::Subtract
    }
}

fn add_or_subtract(previous: i64, operand: i64) -> Operator {
    match previous.checked_add(operand) {
        Some(sum) if sum <= SOLUTION_CEILING => Operator::Add,
        _ => subtract_or_add(previous, operand),
    }
}

fn subtract_or_add(previous: i64, operand: i64) -> Operator {
    match previous.checked_sub(operand) {
        Some(difference) if difference >= 0 => Operator::Subtract,
        _ => Operator::Add,
    }
}

/// Generate the challenge for `request`.
///
/// Day 1 is always the tutorial. Otherwise an anniversary (outside easy mode)
/// replaces the puzzle outright; else an arithmetic puzzle is built on the
/// previous solution, decorated with any matching collectible, and overlaid
/// with a false result on corruption days.
///
/// A previous solution outside `0..=SOLUTION_CEILING` cannot be chained on.
/// The puzzle is then built on the literal `BOOTSTRAP_SOLUTION` instead, so
/// the chain restarts from a self-contained equation.
pub fn generate(request: &ChallengeRequest, rng: &mut ChallengeRng) -> Challenge {
    let day = request.day_index;
    if day <= FIRST_DAY {
        return tutorial_challenge();
    }

    if !request.easy_mode {
        if let Some(anniversary) = request.today.and_then(find_anniversary) {
            debug!(day, answer = anniversary.answer, "anniversary override");
            return anniversary_challenge(challenge_id("history", day), anniversary, rng);
        }
    }

    let tier = difficulty_for_day(day, request.easy_mode);
    let variable = flavor::variable_name(&mut rng.flavor);
    let (previous, lhs) = if is_chainable(request.previous_solution) {
        (request.previous_solution, Operand::Previous(variable.to_string()))
    } else {
        warn!(
            day,
            previous = request.previous_solution,
            "previous solution out of range, restarting chain"
        );
        (BOOTSTRAP_SOLUTION, Operand::Literal(BOOTSTRAP_SOLUTION))
    };
    let (drawn, operand) = draw_operation(tier, request.easy_mode, &mut rng.gameplay);
    let (operator, solution) = resolve_operation(previous, drawn, operand);

    let equation = Equation {
        lhs: lhs.clone(),
        operator,
        rhs: operand,
    };
    let challenge = Challenge {
        id: challenge_id("streak", day),
        expression: equation.to_string(),
        equation: Some(equation),
        solution,
        difficulty_tier: tier,
        hint: Some(flavor::narrative(&mut rng.flavor).to_string()),
        success_text: Some(flavor::success_line(variable, solution, &mut rng.flavor)),
        rare_unlock_id: None,
        is_corrupted: false,
        displayed_result: None,
    };

    let challenge = apply_collectibles(challenge, day, previous, lhs, request.easy_mode, rng);
    if let Some(unlock) = &challenge.rare_unlock_id {
        debug!(day, unlock = %unlock, "collectible override");
    }

    if is_corruption_day(day) {
        debug!(day, "corrupted display");
        return corrupt(challenge, rng);
    }
    challenge
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_difficulty_for_day() {
        assert_eq!(difficulty_for_day(1, false), DifficultyTier::Tutorial);
        assert_eq!(difficulty_for_day(2, false), DifficultyTier::Basic);
        assert_eq!(difficulty_for_day(9, false), DifficultyTier::Basic);
        assert_eq!(difficulty_for_day(10, false), DifficultyTier::Intermediate);
        assert_eq!(difficulty_for_day(29, false), DifficultyTier::Intermediate);
        assert_eq!(difficulty_for_day(30, false), DifficultyTier::Advanced);
        assert_eq!(difficulty_for_day(300, true), DifficultyTier::Basic);
    }

    #[test]
    fn test_division_exact_is_kept() {
        assert_eq!(resolve_operation(10, Operator::Divide, 5), (Operator::Divide, 2));
    }

    #[test]
    fn test_division_inexact_falls_back_to_multiplication() {
        assert_eq!(resolve_operation(10, Operator::Divide, 3), (Operator::Multiply, 30));
    }

    #[test]
    fn test_division_of_zero_falls_back() {
        assert_eq!(resolve_operation(0, Operator::Divide, 4), (Operator::Multiply, 0));
    }

    #[test]
    fn test_negative_subtraction_becomes_addition() {
        assert_eq!(resolve_operation(3, Operator::Subtract, 5), (Operator::Add, 8));
        assert_eq!(resolve_operation(5, Operator::Subtract, 5), (Operator::Subtract, 0));
    }

    #[test]
    fn test_multiplication_over_ceiling_subtracts() {
        assert_eq!(
            resolve_operation(500_000, Operator::Multiply, 3),
            (Operator::Subtract, 499_997)
        );
        assert_eq!(
            resolve_operation(i64::MAX / 2, Operator::Multiply, 9),
            (Operator::Subtract, i64::MAX / 2 - 9)
        );
    }

    #[test]
    fn test_addition_over_ceiling_subtracts() {
        assert_eq!(
            resolve_operation(999_998, Operator::Add, 5),
            (Operator::Subtract, 999_993)
        );
        assert_eq!(resolve_operation(999_990, Operator::Add, 9), (Operator::Add, 999_999));
    }

    #[test]
    fn test_extreme_previous_does_not_overflow() {
        for operator in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide] {
            assert_eq!(resolve_operation(i64::MAX, operator, 10).1, i64::MAX - 10);
            resolve_operation(i64::MIN + 1, operator, 9);
            resolve_operation(-(1 << 62), operator, 4);
        }
    }

    #[test]
    fn test_is_chainable() {
        assert!(is_chainable(0));
        assert!(is_chainable(SOLUTION_CEILING));
        assert!(!is_chainable(-1));
        assert!(!is_chainable(SOLUTION_CEILING + 1));
    }

    #[test]
    #[should_panic]
    fn test_zero_operand_is_a_defect() {
        resolve_operation(10, Operator::Divide, 0);
    }

    #[test]
    fn test_draw_operation_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..2000 {
            let (op, n) = draw_operation(DifficultyTier::Basic, false, &mut rng);
            assert!(matches!(op, Operator::Add | Operator::Subtract));
            assert!((1..=9).contains(&n));

            let (_, n) = draw_operation(DifficultyTier::Basic, true, &mut rng);
            assert!((1..=5).contains(&n));

            let (op, n) = draw_operation(DifficultyTier::Intermediate, false, &mut rng);
            match op {
                Operator::Multiply => assert!((2..=6).contains(&n)),
                Operator::Divide => assert!((2..=4).contains(&n)),
                _ => assert!((5..=24).contains(&n)),
            }
        }
    }

    #[test]
    fn test_intermediate_uses_every_operator() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(draw_operation(DifficultyTier::Intermediate, false, &mut rng).0);
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_day_one_is_tutorial() {
        let mut rng = ChallengeRng::from_seed(4);
        for prev in [-50, 0, 1, 777] {
            let c = generate(&ChallengeRequest::new(1, prev, false), &mut rng);
            assert_eq!(c.solution, 1);
            assert_eq!(c.difficulty_tier, DifficultyTier::Tutorial);
        }
    }

    #[test]
    fn test_anniversary_replaces_puzzle() {
        let mut rng = ChallengeRng::from_seed(4);
        let request = ChallengeRequest::new(5, 12, false).on(CalendarDay::new(7, 20));
        let c = generate(&request, &mut rng);
        assert_eq!(c.solution, 1969);
        assert_eq!(c.difficulty_tier, DifficultyTier::Special);
        assert_eq!(c.rare_unlock_id.as_deref(), Some("anniversary_token"));
        assert!(c.equation.is_none());
    }

    #[test]
    fn test_easy_mode_skips_anniversary() {
        let mut rng = ChallengeRng::from_seed(4);
        let request = ChallengeRequest::new(5, 12, true).on(CalendarDay::new(7, 20));
        let c = generate(&request, &mut rng);
        assert_eq!(c.difficulty_tier, DifficultyTier::Basic);
        assert!(c.equation.is_some());
    }

    #[test]
    fn test_ids_are_unique_per_generation() {
        let a = generate(&ChallengeRequest::new(5, 12, false), &mut ChallengeRng::from_seed(1));
        let b = generate(&ChallengeRequest::new(5, 12, false), &mut ChallengeRng::from_seed(1));
        assert_ne!(a.id, b.id);
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.expression, b.expression);
    }

    #[test]
    fn test_solution_matches_equation() {
        for seed in 0..200u64 {
            let mut rng = ChallengeRng::from_seed(seed);
            let prev = (seed as i64 * 37) % 500;
            for day in [2, 9, 10, 15, 29, 30, 45, 120] {
                let c = generate(&ChallengeRequest::new(day, prev, false), &mut rng);
                let eq = c.equation.as_ref().expect("arithmetic day has an equation");
                assert_eq!(eq.evaluate(prev), c.solution, "day {day} prev {prev}: {}", c.expression);
            }
        }
    }

    #[test]
    fn test_corruption_day_shows_false_result() {
        let mut rng = ChallengeRng::from_seed(2);
        let c = generate(&ChallengeRequest::new(12, 40, false), &mut rng);
        assert!(c.is_corrupted);
        let shown = c.displayed_result.unwrap();
        assert_ne!(shown, c.solution);
        assert_eq!(c.equation.as_ref().unwrap().evaluate(40), c.solution);
        assert!(c.rendered().ends_with(&format!("= {shown}")));
    }
}
