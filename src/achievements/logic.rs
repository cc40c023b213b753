//! Pure achievement evaluation against a streak value.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{AchievementDef, AchievementRule};
use crate::core::constants::FIBONACCI_CEILING;

pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2u32;
    while i.saturating_mul(i) <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

pub fn is_perfect_square(n: u32) -> bool {
    let root = (n as f64).sqrt() as u32;
    (root.saturating_sub(1)..=root + 1).any(|r| r.checked_mul(r) == Some(n))
}

/// Fibonacci membership, over the sequence up to `FIBONACCI_CEILING`.
pub fn is_fibonacci(n: u32) -> bool {
    let (mut a, mut b) = (1u32, 2u32);
    while a <= FIBONACCI_CEILING {
        if a == n {
            return true;
        }
        (a, b) = (b, a + b);
    }
    false
}

impl AchievementRule {
    pub fn matches(&self, streak: u32) -> bool {
        match *self {
            AchievementRule::Exact(target) => streak == target,
            AchievementRule::Prime => is_prime(streak),
            AchievementRule::PerfectSquare => streak > 1 && is_perfect_square(streak),
            AchievementRule::Fibonacci => is_fibonacci(streak),
        }
    }
}

/// Every definition whose rule matches `streak`, in display order.
pub fn evaluate(streak: u32) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|def| def.rule.matches(streak))
        .collect()
}

/// One combined toast for everything that fired together.
pub fn notification(fired: &[&AchievementDef]) -> Option<String> {
    if fired.is_empty() {
        return None;
    }
    let titles: Vec<&str> = fired.iter().map(|def| def.title).collect();
    Some(format!("🏆 {}!", titles.join(" & ")))
}
