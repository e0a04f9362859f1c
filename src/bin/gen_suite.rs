use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use quadchess::board::random::random_position;
use quadchess::search::{SolveParams, Solver};
use quadchess::suite::SuiteCase;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

// Writes random legal positions with their solved verdicts as a JSONL suite.
//
// Usage:
//   cargo run --release --bin gen_suite -- --count 200 --plies 4 --out suites/random.jsonl

#[derive(Parser, Debug)]
#[command(name = "gen_suite", about = "Generate a random JSONL regression suite")]
struct Args {
    /// Number of positions
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// RNG seed
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Ply budget for every position
    #[arg(long, default_value_t = 3)]
    plies: u32,
    /// Maximum pieces per side (1..=5)
    #[arg(long, default_value_t = 5)]
    max_pieces: usize,
    /// Output file
    #[arg(long)]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let max = args.max_pieces.clamp(1, 5);
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut solver = Solver::new(SolveParams::default());

    let f = File::create(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let mut w = BufWriter::new(f);
    let bar = ProgressBar::new(args.count as u64);
    let mut wins = 0usize;
    for _ in 0..args.count {
        let white = rng.gen_range(1..=max);
        let black = rng.gen_range(1..=max);
        let mut board = random_position(&mut rng, white, black);
        let res = solver.solve(&mut board, args.plies);
        if res.win { wins += 1; }
        let case = SuiteCase::from_board(&board, args.plies, res.win);
        writeln!(w, "{}", serde_json::to_string(&case)?)?;
        bar.inc(1);
    }
    bar.finish_and_clear();
    w.flush()?;
    println!("wrote {} positions ({} wins) to {}", args.count, wins, args.out.display());
    Ok(())
}
