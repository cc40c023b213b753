//! Streak balance simulator CLI.
//!
//! Plays many seeded players through the daily chain to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 100 players, 365 days
//!   cargo run --bin simulate -- -n 90 -r 500        # 500 players, 90 days
//!   cargo run --bin simulate -- --accuracy 0.8      # Sloppier players
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use keep_the_streak::catalog::validate_catalog;
use keep_the_streak::simulator::{run_simulation, SimConfig};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, write_json) = parse_args(&args);

    if let Err(e) = validate_catalog() {
        eprintln!("Catalog error: {e}");
        return ExitCode::FAILURE;
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              KEEP THE STREAK BALANCE SIMULATOR                ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Players:        {}", config.num_runs);
    println!("  Days:           {}", config.days);
    println!("  Accuracy:       {:.0}%", config.accuracy * 100.0);
    println!("  Use items:      {}", config.use_items);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    // Optionally save JSON report
    if write_json {
        let filename = format!(
            "streak_report_{}.json",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--days" => {
                if i + 1 < args.len() {
                    config.days = args[i + 1].parse().unwrap_or(365);
                    i += 1;
                }
            }
            "-r" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--accuracy" => {
                if i + 1 < args.len() {
                    if let Ok(acc) = args[i + 1].parse::<f64>() {
                        config.accuracy = acc.clamp(0.0, 1.0);
                        i += 1;
                    }
                }
            }
            "--no-items" => {
                config.use_items = false;
            }
            "--marathon" => {
                config = SimConfig::marathon(1000);
            }
            "--json" => {
                write_json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, write_json)
}

fn print_help() {
    println!("Keep the Streak Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --days <N>       Days each player plays (default: 365)");
    println!("    -r, --runs <N>       Number of simulated players (default: 100)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    --accuracy <P>       Chance each guess is right, 0..1 (default: 0.9)");
    println!("    --no-items           Never spend streak freezes or extra lives");
    println!("    --marathon           1000 days with a careful player");
    println!("    -v, --verbose        Per-player output");
    println!("    --json               Save JSON report");
    println!("    -h, --help           Show this help");
    println!();
    println!("Set RUST_LOG=debug for state-transition logs.");
}
