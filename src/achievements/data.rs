//! Static achievement definitions.

use super::types::{AchievementDef, AchievementRule};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // STREAK MILESTONES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "streak-3",
        title: "Insert Coin",
        description: "Maintained a streak for 3 days. The arcade is open.",
        icon: "🪙",
        rule: AchievementRule::Exact(3),
    },
    AchievementDef {
        id: "streak-7",
        title: "8-Bit Hero",
        description: "7 days. Now you're playing with power!",
        icon: "👾",
        rule: AchievementRule::Exact(7),
    },
    AchievementDef {
        id: "streak-16",
        title: "Blast Processing",
        description: "16 days. High definition graphics!",
        icon: "🦔",
        rule: AchievementRule::Exact(16),
    },
    AchievementDef {
        id: "streak-30",
        title: "64-Bit Era",
        description: "30 days. Welcome to the third dimension.",
        icon: "🧊",
        rule: AchievementRule::Exact(30),
    },
    AchievementDef {
        id: "streak-100",
        title: "The Wizard",
        description: "100 days. I love the Power Glove. It's so bad.",
        icon: "🥊",
        rule: AchievementRule::Exact(100),
    },
    // ═══════════════════════════════════════════════════════════════
    // HARDWARE MILESTONES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "artifact-abacus",
        title: "The Abacus",
        description: "Before pixels, there were beads. (~2700 BC)",
        icon: "🧮",
        rule: AchievementRule::Exact(5),
    },
    AchievementDef {
        id: "artifact-mechanism",
        title: "Antikythera",
        description: "First analog computer. Found in a shipwreck. (100 BC)",
        icon: "⚙️",
        rule: AchievementRule::Exact(12),
    },
    AchievementDef {
        id: "artifact-nes",
        title: "8-Bit Console",
        description: "It revived the industry. Blow on it. (1985)",
        icon: "🕹️",
        rule: AchievementRule::Exact(19),
    },
    AchievementDef {
        id: "artifact-gb",
        title: "Pocket Power",
        description: "Green screens and AA batteries. Tetris machine. (1989)",
        icon: "📱",
        rule: AchievementRule::Exact(25),
    },
    AchievementDef {
        id: "artifact-snes",
        title: "Super Power",
        description: "Mode 7 graphics and 16-bit sound. (1990)",
        icon: "🎮",
        rule: AchievementRule::Exact(42),
    },
    AchievementDef {
        id: "artifact-calc",
        title: "Ti-83",
        description: "The ultimate tool for math and Snake. (1996)",
        icon: "📟",
        rule: AchievementRule::Exact(50),
    },
    // ═══════════════════════════════════════════════════════════════
    // MATH MILESTONES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: "prime_time",
        title: "Prime Time",
        description: "Reached a Prime Number day",
        icon: "🔢",
        rule: AchievementRule::Prime,
    },
    AchievementDef {
        id: "perfect_square",
        title: "Perfect Square",
        description: "Reached a Perfect Square day",
        icon: "📐",
        rule: AchievementRule::PerfectSquare,
    },
    AchievementDef {
        id: "fibonacci_friend",
        title: "Fibonacci Friend",
        description: "Reached a Fibonacci sequence day",
        icon: "🐚",
        rule: AchievementRule::Fibonacci,
    },
];

/// Look up a definition by id.
pub fn get_achievement_def(id: &str) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = ALL_ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ALL_ACHIEVEMENTS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_achievement_def("streak-7").unwrap().title, "8-Bit Hero");
        assert!(get_achievement_def("streak-8").is_none());
    }
}
