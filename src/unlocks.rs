//! Streak-gated droid chassis, the cosmetic unlock track.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DroidChassis {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub traits: [&'static str; 3],
    pub unlock_streak: u32,
}

/// In unlock order.
pub const DROID_CHASSIS: &[DroidChassis] = &[
    DroidChassis {
        id: "box-orb",
        name: "BOX-ORB UNIT",
        description: "Standard maintenance droid. Spherical head on cubic chassis.",
        traits: ["Reliable", "Observant", "Patient"],
        unlock_streak: 0,
    },
    DroidChassis {
        id: "bipedal",
        name: "BIPEDAL MODEL",
        description: "Humanoid service unit. Mobile and expressive.",
        traits: ["Agile", "Expressive", "Helpful"],
        unlock_streak: 3,
    },
    DroidChassis {
        id: "tank",
        name: "TANK CHASSIS",
        description: "Heavy-duty platform. Built for persistence.",
        traits: ["Durable", "Steady", "Tireless"],
        unlock_streak: 7,
    },
    DroidChassis {
        id: "minimal-core",
        name: "MINIMAL CORE",
        description: "Stripped-down efficiency unit. Only essentials.",
        traits: ["Efficient", "Focused", "Silent"],
        unlock_streak: 14,
    },
    DroidChassis {
        id: "scout",
        name: "SCOUT DRONE",
        description: "Lightweight reconnaissance unit. Fast and nimble.",
        traits: ["Swift", "Alert", "Curious"],
        unlock_streak: 21,
    },
    DroidChassis {
        id: "heavy",
        name: "HEAVY FRAME",
        description: "Reinforced industrial chassis. Maximum durability.",
        traits: ["Tough", "Resolute", "Unwavering"],
        unlock_streak: 30,
    },
    DroidChassis {
        id: "stealth",
        name: "STEALTH UNIT",
        description: "Low-profile covert operations frame.",
        traits: ["Quiet", "Precise", "Invisible"],
        unlock_streak: 45,
    },
    DroidChassis {
        id: "titan",
        name: "TITAN CLASS",
        description: "Military-grade autonomous platform.",
        traits: ["Powerful", "Commanding", "Elite"],
        unlock_streak: 50,
    },
    DroidChassis {
        id: "quantum",
        name: "QUANTUM CORE",
        description: "Experimental quantum-state processor.",
        traits: ["Unpredictable", "Brilliant", "Evolving"],
        unlock_streak: 60,
    },
    DroidChassis {
        id: "orbital",
        name: "ORBITAL FRAME",
        description: "Zero-gravity optimized satellite unit.",
        traits: ["Weightless", "Expansive", "Eternal"],
        unlock_streak: 70,
    },
    DroidChassis {
        id: "nexus",
        name: "NEXUS PRIME",
        description: "Network hub droid. Connected to all systems.",
        traits: ["Connected", "Omniscient", "Harmonious"],
        unlock_streak: 80,
    },
    DroidChassis {
        id: "genesis-droid",
        name: "GENESIS",
        description: "The final evolution. System architect.",
        traits: ["Transcendent", "Creative", "Infinite"],
        unlock_streak: 90,
    },
];

pub fn get_droid(id: &str) -> Option<&'static DroidChassis> {
    DROID_CHASSIS.iter().find(|d| d.id == id)
}

pub fn unlocked_droids(streak: u32) -> Vec<&'static DroidChassis> {
    DROID_CHASSIS
        .iter()
        .filter(|d| d.unlock_streak <= streak)
        .collect()
}

/// e.g. `3/12 UNLOCKED`
pub fn unlock_count_text(streak: u32) -> String {
    format!(
        "{}/{} UNLOCKED",
        unlocked_droids(streak).len(),
        DROID_CHASSIS.len()
    )
}

/// Chassis crossed when the streak moves from `before` to `after`.
pub fn newly_unlocked(before: u32, after: u32) -> Vec<&'static DroidChassis> {
    DROID_CHASSIS
        .iter()
        .filter(|d| d.unlock_streak > before && d.unlock_streak <= after)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlock_order_is_ascending() {
        assert!(DROID_CHASSIS
            .windows(2)
            .all(|w| w[0].unlock_streak < w[1].unlock_streak));
    }

    #[test]
    fn test_unlock_count_text() {
        assert_eq!(unlock_count_text(0), "1/12 UNLOCKED");
        assert_eq!(unlock_count_text(7), "3/12 UNLOCKED");
        assert_eq!(unlock_count_text(500), "12/12 UNLOCKED");
    }

    #[test]
    fn test_newly_unlocked() {
        let ids: Vec<_> = newly_unlocked(6, 7).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["tank"]);
        assert!(newly_unlocked(7, 8).is_empty());
        // A reset never unlocks anything
        assert!(newly_unlocked(40, 0).is_empty());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(get_droid("titan").unwrap().unlock_streak, 50);
    }
}
