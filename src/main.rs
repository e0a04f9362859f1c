use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use quadchess::io::{parse_games, verdict, write_verdicts};
use quadchess::search::solver::DEFAULT_TT_ENTRIES;
use quadchess::search::SolveParams;
use quadchess::solve_all;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Decide whether White forces a queen attack within m plies", long_about = None)]
struct Args {
    /// Game file; reads stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Append YES/NO lines to this file instead of stdout
    #[arg(long, env = "OUTPUT_PATH")]
    output: Option<PathBuf>,

    /// Games solved in parallel
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Disable the transposition table
    #[arg(long)]
    no_tt: bool,

    /// Transposition table capacity in entries
    #[arg(long, default_value_t = DEFAULT_TT_ENTRIES)]
    tt_entries: usize,

    /// Print the first winning move, node count and board per game to stderr
    #[arg(long)]
    explain: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let mut text = String::new();
    match path {
        Some(p) if p.as_os_str() != "-" => {
            text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
        }
        _ => {
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
        }
    }
    Ok(text)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = read_input(args.input.as_ref())?;
    let games = parse_games(&text).context("parsing games")?;
    info!("loaded {} games", games.len());

    let params = SolveParams { use_tt: !args.no_tt, tt_entries: args.tt_entries };
    let t0 = Instant::now();
    let results = solve_all(&games, params, args.threads);
    info!("solved in {:.3}s", t0.elapsed().as_secs_f64());

    if args.explain {
        for (i, (game, res)) in games.iter().zip(&results).enumerate() {
            let first = res.first_move.map_or_else(|| "-".to_string(), |m| m.to_string());
            eprintln!(
                "game {} plies={} verdict={} first={} nodes={} tt_hits={}\n{}",
                i + 1, game.plies, verdict(res.win), first, res.nodes, res.tt_hits, game.board
            );
        }
    }

    let wins = results.iter().map(|r| r.win);
    match args.output {
        Some(path) => {
            let mut f = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            write_verdicts(&mut f, wins)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_verdicts(&mut out, wins)?;
            out.flush()?;
        }
    }
    Ok(())
}
