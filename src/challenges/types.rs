use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty bracket of a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Tutorial,
    Basic,
    Intermediate,
    Advanced,
    /// Trivia and forced-collectible challenges.
    Special,
}

impl DifficultyTier {
    pub fn name(&self) -> &'static str {
        match self {
            DifficultyTier::Tutorial => "Tutorial",
            DifficultyTier::Basic => "Basic",
            DifficultyTier::Intermediate => "Intermediate",
            DifficultyTier::Advanced => "Advanced",
            DifficultyTier::Special => "Special",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply to `(lhs, rhs)`, saturating at the `i64` bounds. Division must
    /// already be known to be exact.
    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operator::Add => lhs.saturating_add(rhs),
            Operator::Subtract => lhs.saturating_sub(rhs),
            Operator::Multiply => lhs.saturating_mul(rhs),
            Operator::Divide => {
                assert!(rhs != 0, "division operand must be non-zero");
                debug_assert_eq!(lhs % rhs, 0, "division must be exact");
                lhs.saturating_div(rhs)
            }
        }
    }
}

/// Left-hand side of an equation: a literal, or the player's remembered
/// answer from the previous day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operand {
    Literal(i64),
    /// Rendered as the placeholder name, e.g. `X`.
    Previous(String),
}

/// The structured form of an arithmetic puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub lhs: Operand,
    pub operator: Operator,
    pub rhs: i64,
}

impl Equation {
    /// Honest evaluation, substituting `previous` for a placeholder.
    pub fn evaluate(&self, previous: i64) -> i64 {
        let lhs = match self.lhs {
            Operand::Literal(v) => v,
            Operand::Previous(_) => previous,
        };
        self.operator.apply(lhs, self.rhs)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lhs {
            Operand::Literal(v) => write!(f, "{}", v)?,
            Operand::Previous(name) => write!(f, "{}", name)?,
        }
        write!(f, " {} {}", self.operator.symbol(), self.rhs)
    }
}

/// One generated puzzle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Unique per generation.
    pub id: String,
    pub expression: String,
    /// `None` for trivia and the tutorial.
    pub equation: Option<Equation>,
    pub solution: i64,
    pub difficulty_tier: DifficultyTier,
    pub hint: Option<String>,
    /// Shown after a correct answer; mentions the new solution.
    pub success_text: Option<String>,
    /// Artifact granted on success.
    pub rare_unlock_id: Option<String>,
    pub is_corrupted: bool,
    /// The false result shown on a corrupted challenge.
    pub displayed_result: Option<i64>,
}

impl Challenge {
    /// Text the presentation layer renders. For corrupted challenges this
    /// includes the false result.
    pub fn rendered(&self) -> String {
        match (self.is_corrupted, self.displayed_result) {
            (true, Some(shown)) => format!("{} = {}", self.expression, shown),
            _ => self.expression.clone(),
        }
    }

    pub fn is_correct(&self, guess: i64) -> bool {
        guess == self.solution
    }
}

/// Standalone puzzle difficulty for the arcade modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArcadeDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equation_display_and_evaluate() {
        let eq = Equation {
            lhs: Operand::Previous("X".to_string()),
            operator: Operator::Multiply,
            rhs: 4,
        };
        assert_eq!(eq.to_string(), "X × 4");
        assert_eq!(eq.evaluate(6), 24);

        let literal = Equation {
            lhs: Operand::Literal(36),
            operator: Operator::Divide,
            rhs: 4,
        };
        assert_eq!(literal.to_string(), "36 ÷ 4");
        assert_eq!(literal.evaluate(999), 9);
    }

    #[test]
    fn test_apply_saturates() {
        assert_eq!(Operator::Add.apply(i64::MAX, 5), i64::MAX);
        assert_eq!(Operator::Subtract.apply(i64::MIN + 1, 9), i64::MIN);
        assert_eq!(Operator::Multiply.apply(-(1 << 62), 4), i64::MIN);
    }

    #[test]
    #[should_panic]
    fn test_divide_by_zero_panics() {
        Operator::Divide.apply(10, 0);
    }

    #[test]
    fn test_rendered_corrupted() {
        let challenge = Challenge {
            id: "t".to_string(),
            expression: "X + 5".to_string(),
            equation: None,
            solution: 12,
            difficulty_tier: DifficultyTier::Intermediate,
            hint: None,
            success_text: None,
            rare_unlock_id: None,
            is_corrupted: true,
            displayed_result: Some(40),
        };
        assert_eq!(challenge.rendered(), "X + 5 = 40");
        assert!(challenge.is_correct(12));
        assert!(!challenge.is_correct(40));
    }
}
