use indicatif::{ProgressBar, ProgressStyle};
use quadchess::io::verdict;
use quadchess::search::SolveParams;
use quadchess::suite::load_jsonl;
use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

fn env_flag(name: &str) -> bool { std::env::var(name).ok().map(|v| v == "1").unwrap_or(false) }

fn main() -> anyhow::Result<()> {
    env_logger::init();
    // Inputs via env (for simplicity)
    let default = format!("{}/suites/basic.jsonl", env!("CARGO_MANIFEST_DIR"));
    let path = PathBuf::from(std::env::var("QUADCHESS_SUITE_FILE").unwrap_or(default));
    let cases = load_jsonl(&path)?;
    let params = SolveParams { use_tt: !env_flag("QUADCHESS_NO_TT"), ..SolveParams::default() };
    let verbose = env_flag("QUADCHESS_TIMING");
    let only: Option<HashSet<usize>> = std::env::var("QUADCHESS_ONLY_IDX")
        .ok()
        .map(|s| s.split(',').filter_map(|t| t.trim().parse().ok()).collect());

    let bar = ProgressBar::new(cases.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let t_total = Instant::now();
    let mut failures: Vec<String> = Vec::new();
    let (mut processed, mut sum_nodes) = (0usize, 0u64);
    for (i, case) in cases.iter().enumerate() {
        bar.inc(1);
        if let Some(ref filt) = only { if !filt.contains(&i) { continue; } }
        let game = match case.game() {
            Ok(g) => g,
            Err(e) => { failures.push(format!("idx={} invalid: {:#}", i, e)); continue; }
        };
        let t_case = Instant::now();
        let res = game.solve(params);
        processed += 1;
        sum_nodes += res.nodes;
        if verbose {
            bar.println(format!("idx={} plies={} got={} dt={:.3}s nodes={}", i, game.plies, verdict(res.win), t_case.elapsed().as_secs_f64(), res.nodes));
        }
        if res.win != case.expect {
            let note = case.note.as_deref().unwrap_or("");
            failures.push(format!("idx={} white={:?} black={:?} plies={} expect={} got={} {}", i, case.white, case.black, case.plies, verdict(case.expect), verdict(res.win), note));
        }
    }
    bar.finish_and_clear();

    let total = t_total.elapsed().as_secs_f64();
    println!("summary: suite={} cases={} elapsed={:.3}s nodes={} tt={}", path.display(), processed, total, sum_nodes, params.use_tt);
    if !failures.is_empty() {
        eprintln!("failures ({}):\n{}", failures.len(), failures.join("\n"));
        std::process::exit(1);
    }
    Ok(())
}
