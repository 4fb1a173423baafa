//! Standalone seeded random self-play runner.
//!
//! Run with:
//! `cargo run --release --bin random_match_series`
//! `cargo run --release --bin random_match_series -- --games 500 --seed 42`

use plum_checkers::utils::match_harness::{play_random_series, MatchConfig};

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), String> {
    let games = parse_arg_u64("--games", 100).min(u64::from(u16::MAX)) as u16;
    let base_seed = parse_arg_u64("--seed", 1234);

    let stats = play_random_series(games, base_seed, &MatchConfig::default())?;

    println!("{}", stats.report());
    Ok(())
}
