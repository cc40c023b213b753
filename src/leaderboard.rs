//! Leaderboard ordering.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub streak: u32,
    /// 0 is a perfect run.
    pub failures: u32,
    pub is_player: bool,
}

impl LeaderboardEntry {
    pub fn player(streak: u32, failures: u32) -> Self {
        Self {
            id: "player".to_string(),
            name: "YOU".to_string(),
            streak,
            failures,
            is_player: true,
        }
    }
}

const RIVAL_NAMES: &[&str] = &["AlgebraAlf", "MathWhiz99", "StreakKing", "Pithon", "GeoMetric"];

/// Longest streak first; ties go to fewer failures. Stable otherwise.
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by_key(|e| (Reverse(e.streak), e.failures));
    entries
}

/// Offline board: the player among a handful of generated rivals.
pub fn offline_board(
    player_streak: u32,
    player_failures: u32,
    rng: &mut impl Rng,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = RIVAL_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| LeaderboardEntry {
            id: format!("bot-{i}"),
            name: name.to_string(),
            streak: 50 - (i as u32 * 8) + rng.gen_range(0..5),
            failures: if i == 0 { 0 } else { rng.gen_range(0..5) },
            is_player: false,
        })
        .collect();
    entries.push(LeaderboardEntry::player(player_streak, player_failures));
    rank_entries(entries)
}
