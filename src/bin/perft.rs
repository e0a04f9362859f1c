use anyhow::{Context, Result};
use quadchess::board::Side;
use quadchess::io::parse_placement;
use quadchess::perft::perft;
use quadchess::Game;
use std::time::Instant;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the 4x4 move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// White placements, comma separated, e.g. "Q A 4,N B 2"
    #[arg(long)]
    white: String,
    /// Black placements, comma separated
    #[arg(long)]
    black: String,
    /// Side to move first
    #[arg(long, default_value = "white")]
    side: String,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn placements(list: &str) -> Result<Vec<(quadchess::board::PieceKind, quadchess::board::Square)>> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_placement(0, s.trim()).with_context(|| format!("placement {s:?}")))
        .collect()
}

fn main() -> Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();

    let side = match args.side.to_ascii_lowercase().as_str() {
        "w" | "white" => Side::White,
        "b" | "black" => Side::Black,
        other => anyhow::bail!("invalid side {other:?}: use 'white' or 'black'"),
    };
    let game = Game::new(&placements(&args.white)?, &placements(&args.black)?, 1)?;
    let mut board = game.board;
    println!("{board}");

    let t0 = Instant::now();
    let nodes = perft(&mut board, side, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.1}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
