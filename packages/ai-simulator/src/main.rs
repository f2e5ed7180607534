//! CLI driver: runs batches of CPU-only games for strategy comparison.

mod simulator;

use clap::{Parser, ValueEnum};
use oh_hell_engine::{Difficulty, GameConfig, PlayerSpec, RoundSchedule};
use simulator::{GameResult, Simulator};
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "In-memory Oh Hell simulator for comparing CPU difficulty tiers")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Number of seats at the table (2-6)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Difficulty for all seats (shortcut overriding the per-seat flags)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3", "seat4", "seat5"])]
    seats: Option<Tier>,

    /// Difficulty for seat 0
    #[arg(long, default_value = "medium")]
    seat0: Tier,

    /// Difficulty for seat 1
    #[arg(long, default_value = "medium")]
    seat1: Tier,

    /// Difficulty for seat 2
    #[arg(long, default_value = "medium")]
    seat2: Tier,

    /// Difficulty for seat 3
    #[arg(long, default_value = "medium")]
    seat3: Tier,

    /// Difficulty for seat 4
    #[arg(long, default_value = "medium")]
    seat4: Tier,

    /// Difficulty for seat 5
    #[arg(long, default_value = "medium")]
    seat5: Tier,

    /// Base seed for deterministic runs; game N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Use the ascending-then-descending round schedule
    #[arg(long)]
    ladder: bool,

    /// Largest hand size in the schedule
    #[arg(long, default_value = "7")]
    max_round_size: u8,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tier {
    Easy,
    Medium,
    Hard,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let per_seat = [
        args.seat0, args.seat1, args.seat2, args.seat3, args.seat4, args.seat5,
    ];
    let tiers: Vec<Tier> = (0..args.players)
        .map(|seat| args.seats.unwrap_or(per_seat[seat.min(5)]))
        .collect();
    let roster: Vec<PlayerSpec> = tiers
        .iter()
        .map(|&t| PlayerSpec::cpu(t.into()))
        .collect();
    let schedule = if args.ladder {
        RoundSchedule::Ladder
    } else {
        RoundSchedule::Flat
    };
    let config = GameConfig::new(roster, true, schedule, args.max_round_size, 0)?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 0..args.games {
        let seed = base_seed.wrapping_add(u64::from(game_num));
        match Simulator::new(config.clone(), seed).simulate_game() {
            Ok(result) => results.push(result),
            Err(e) => {
                errors += 1;
                warn!(game_num, seed, "game failed: {e}");
            }
        }
    }

    print_summary(&results, &tiers, errors, start.elapsed(), args.games);
    Ok(())
}

fn print_summary(
    results: &[GameResult],
    tiers: &[Tier],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }

    let seats = tiers.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0u64; seats];
    let mut max_scores = vec![u32::MIN; seats];
    let mut min_scores = vec![u32::MAX; seats];

    for result in results {
        for (seat, &score) in result.final_scores.iter().enumerate() {
            total_scores[seat] += u64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
        }
        for &seat in &result.winners {
            wins[seat] += 1;
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = f64::from(wins[seat]) / results.len() as f64 * 100.0;
        println!(
            "Seat {} ({:?}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat, tiers[seat], avg, min_scores[seat], max_scores[seat], wins[seat], win_rate
        );
    }
}
