//! JSONL regression suites: one position per line with its expected verdict.
//!
//! `{"white": ["Q A 4"], "black": ["Q D 4"], "plies": 1, "expect": true}`

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::board::{Board, PieceKind, Side, Square};
use crate::game::Game;
use crate::io::parse_placement;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteCase {
    pub white: Vec<String>,
    pub black: Vec<String>,
    pub plies: u32,
    pub expect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SuiteCase {
    pub fn game(&self) -> Result<Game> {
        // Placements are numbered from 1 within each side's list.
        let parse = |side: Side, lines: &[String]| -> Result<Vec<(PieceKind, Square)>> {
            lines
                .iter()
                .enumerate()
                .map(|(i, l)| {
                    parse_placement(i + 1, l).with_context(|| format!("{side} placement {} ({l:?})", i + 1))
                })
                .collect()
        };
        let whites = parse(Side::White, &self.white)?;
        let blacks = parse(Side::Black, &self.black)?;
        Ok(Game::new(&whites, &blacks, self.plies)?)
    }

    /// Describes `board` in suite form; `expect` is filled in by the caller.
    pub fn from_board(board: &Board, plies: u32, expect: bool) -> SuiteCase {
        let describe = |side: Side| -> Vec<String> {
            board
                .pieces()
                .filter(|p| p.piece.side == side)
                .map(|p| {
                    let at = p.at.to_string().to_ascii_uppercase();
                    let mut chars = at.chars();
                    let (file, rank) = (chars.next().unwrap_or('A'), chars.next().unwrap_or('1'));
                    format!("{} {} {}", p.piece.kind.to_char(), file, rank)
                })
                .collect()
        };
        SuiteCase { white: describe(Side::White), black: describe(Side::Black), plies, expect, note: None }
    }
}

pub fn load_jsonl(path: &Path) -> Result<Vec<SuiteCase>> {
    let f = File::open(path).with_context(|| format!("opening suite {}", path.display()))?;
    let mut out = Vec::new();
    for (i, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        let case: SuiteCase = serde_json::from_str(l)
            .with_context(|| format!("{}:{}: bad suite record", path.display(), i + 1))?;
        out.push(case);
    }
    Ok(out)
}
