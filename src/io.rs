//! Text protocol around the solver.
//!
//! Input is a game count followed, per game, by a `w b m` header line, `w`
//! White placements and `b` Black placements. A placement is a piece letter, a
//! file and a rank, e.g. `Q B 1`. Output is one `YES`/`NO` line per game.

use std::io::{self, Read, Write};

use crate::board::{PieceKind, Square};
use crate::error::ParseError;
use crate::game::Game;

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self { inner: input.lines().enumerate(), last: 0 }
    }

    /// Next non-blank line and its 1-based number.
    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), ParseError> {
        for (i, line) in self.inner.by_ref() {
            self.last = i + 1;
            let line = line.trim();
            if !line.is_empty() { return Ok((i + 1, line)); }
        }
        Err(ParseError::UnexpectedEof { line: self.last + 1, expected })
    }
}

fn parse_number(line: usize, token: &str, expected: &'static str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber { line, expected, token: token.to_string() })
}

/// Parses one placement line, `Q B 1` or the compact `QB1`.
pub fn parse_placement(line_no: usize, line: &str) -> Result<(PieceKind, Square), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (kind, file, rank) = match tokens.as_slice() {
        [k, f, r] => (*k, *f, *r),
        [compact] if compact.chars().count() == 3 => {
            let at: Vec<usize> = compact.char_indices().map(|(i, _)| i).collect();
            (&compact[..at[1]], &compact[at[1]..at[2]], &compact[at[2]..])
        }
        _ => return Err(ParseError::FieldCount { line: line_no, expected: 3, got: tokens.len() }),
    };

    let piece = single_char(kind)
        .and_then(PieceKind::from_char)
        .ok_or_else(|| ParseError::InvalidPiece { line: line_no, token: kind.to_string() })?;
    let square = match (single_char(file), single_char(rank)) {
        (Some(f), Some(r)) => Square::from_algebraic(f, r),
        _ => None,
    }
    .ok_or_else(|| ParseError::InvalidSquare { line: line_no, file: file.to_string(), rank: rank.to_string() })?;
    Ok((piece, square))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

pub fn parse_games(input: &str) -> Result<Vec<Game>, ParseError> {
    let mut lines = Lines::new(input);
    let (line_no, first) = lines.next_line("game count")?;
    let count = parse_number(line_no, first, "game count")?;

    // `count` is untrusted; games are pushed as they parse.
    let mut games = Vec::new();
    for game_idx in 0..count {
        let (line_no, header) = lines.next_line("`w b m` header")?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ParseError::FieldCount { line: line_no, expected: 3, got: fields.len() });
        }
        let whites = parse_number(line_no, fields[0], "white piece count")?;
        let blacks = parse_number(line_no, fields[1], "black piece count")?;
        let plies = parse_number(line_no, fields[2], "ply budget")?;

        let mut read_side = |n: usize| -> Result<Vec<(PieceKind, Square)>, ParseError> {
            (0..n)
                .map(|_| {
                    let (no, line) = lines.next_line("piece placement")?;
                    if looks_like_header(line) {
                        return Err(ParseError::HeaderMismatch {
                            line: no,
                            game: game_idx + 1,
                            found: "a header where a piece was expected",
                        });
                    }
                    parse_placement(no, line)
                })
                .collect()
        };
        let white_pieces = read_side(whites)?;
        let black_pieces = read_side(blacks)?;

        let plies = u32::try_from(plies).map_err(|_| ParseError::InvalidNumber {
            line: line_no,
            expected: "ply budget",
            token: fields[2].to_string(),
        })?;
        let game = Game::new(&white_pieces, &black_pieces, plies)
            .map_err(|source| ParseError::Position { game: game_idx + 1, source })?;
        games.push(game);
    }
    if let Ok((line, _)) = lines.next_line("end of input") {
        return Err(ParseError::HeaderMismatch { line, game: count, found: "an extra line after the last game" });
    }
    Ok(games)
}

/// Three numeric fields: a `w b m` header rather than a placement.
fn looks_like_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.len() == 3 && fields.iter().all(|f| f.parse::<usize>().is_ok())
}

pub fn read_games<R: Read>(mut reader: R) -> Result<Vec<Game>, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_games(&input)
}

pub fn verdict(win: bool) -> &'static str {
    if win { "YES" } else { "NO" }
}

pub fn write_verdicts<W: Write>(out: &mut W, wins: impl IntoIterator<Item = bool>) -> io::Result<()> {
    for win in wins {
        writeln!(out, "{}", verdict(win))?;
    }
    out.flush()
}
