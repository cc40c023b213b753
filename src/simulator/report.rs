//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// What happened to one simulated player.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_streak: u32,
    pub peak_streak: u32,
    pub resets: u32,
    pub protections_used: u32,
    pub achievements_unlocked: u32,
    pub rare_unlocks: Vec<String>,
    pub corrupted_challenges: u32,
    pub items_held: u32,
    pub challenges_by_tier: BTreeMap<String, u32>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub days: u32,

    pub avg_final_streak: f64,
    pub avg_peak_streak: f64,
    pub best_peak_streak: u32,
    pub avg_resets: f64,
    pub avg_protections_used: f64,
    pub avg_achievements: f64,
    pub avg_items_held: f64,

    /// Players whose streak never broke
    pub flawless_runs: u32,

    pub rare_unlock_counts: BTreeMap<String, u32>,
    pub tier_distribution: BTreeMap<String, u32>,
    pub corrupted_challenges: u32,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> u32) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(|r| f(r) as f64).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, days: u32) -> Self {
        let mut rare_unlock_counts = BTreeMap::new();
        let mut tier_distribution = BTreeMap::new();
        for run in &runs {
            for id in &run.rare_unlocks {
                *rare_unlock_counts.entry(id.clone()).or_insert(0) += 1;
            }
            for (tier, n) in &run.challenges_by_tier {
                *tier_distribution.entry(tier.clone()).or_insert(0) += n;
            }
        }

        Self {
            num_runs: runs.len() as u32,
            days,
            avg_final_streak: mean(&runs, |r| r.final_streak),
            avg_peak_streak: mean(&runs, |r| r.peak_streak),
            best_peak_streak: runs.iter().map(|r| r.peak_streak).max().unwrap_or(0),
            avg_resets: mean(&runs, |r| r.resets),
            avg_protections_used: mean(&runs, |r| r.protections_used),
            avg_achievements: mean(&runs, |r| r.achievements_unlocked),
            avg_items_held: mean(&runs, |r| r.items_held),
            flawless_runs: runs.iter().filter(|r| r.resets == 0).count() as u32,
            rare_unlock_counts,
            tier_distribution,
            corrupted_challenges: runs.iter().map(|r| r.corrupted_challenges).sum(),
            run_stats: runs,
        }
    }

    /// Generate a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    STREAK SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Players:          {}\n", self.num_runs));
        report.push_str(&format!("Days each:        {}\n", self.days));
        report.push_str(&format!(
            "Flawless runs:    {} ({:.1}%)\n\n",
            self.flawless_runs,
            self.percent(self.flawless_runs)
        ));

        report.push_str("STREAKS\n");
        report.push_str(&format!("  Avg final:      {:.1}\n", self.avg_final_streak));
        report.push_str(&format!("  Avg peak:       {:.1}\n", self.avg_peak_streak));
        report.push_str(&format!("  Best peak:      {}\n", self.best_peak_streak));
        report.push_str(&format!("  Avg resets:     {:.2}\n", self.avg_resets));
        report.push_str(&format!("  Avg protected:  {:.2}\n\n", self.avg_protections_used));

        report.push_str("REWARDS\n");
        report.push_str(&format!("  Avg achievements: {:.1}\n", self.avg_achievements));
        report.push_str(&format!("  Avg items held:   {:.1}\n", self.avg_items_held));
        if self.rare_unlock_counts.is_empty() {
            report.push_str("  Rare unlocks:     none\n");
        } else {
            report.push_str("  Rare unlocks:\n");
            for (id, n) in &self.rare_unlock_counts {
                report.push_str(&format!("    {:<20} {}\n", id, n));
            }
        }

        report.push_str("\nCHALLENGES\n");
        for (tier, n) in &self.tier_distribution {
            report.push_str(&format!("  {:<14} {}\n", tier, n));
        }
        report.push_str(&format!("  Corrupted      {}\n", self.corrupted_challenges));

        if self.num_runs > 0 && self.avg_peak_streak < 7.0 {
            report.push_str("\n  ⚠️  Average peak below a week - difficulty too steep?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    fn percent(&self, n: u32) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        n as f64 / self.num_runs as f64 * 100.0
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
