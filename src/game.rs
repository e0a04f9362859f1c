use log::{info, warn};
use rayon::prelude::*;

use crate::board::random::{MAX_MINORS, MAX_PIECES_PER_SIDE, MAX_ROOKS};
use crate::board::{Board, Piece, PieceKind, Side, Square};
use crate::error::PositionError;
use crate::search::{SolveParams, SolveResult, Solver};

/// Budgets above this are accepted but may take a long time.
pub const RECOMMENDED_MAX_PLIES: u32 = 6;

/// One independent problem: a starting board and White's ply budget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub plies: u32,
}

impl Game {
    /// Builds and validates a game from each side's placements.
    pub fn new(
        whites: &[(PieceKind, Square)],
        blacks: &[(PieceKind, Square)],
        plies: u32,
    ) -> Result<Game, PositionError> {
        if plies == 0 {
            return Err(PositionError::ZeroPlies);
        }
        let mut board = Board::empty();
        for (side, placements) in [(Side::White, whites), (Side::Black, blacks)] {
            check_roster(side, placements.iter().map(|(k, _)| *k))?;
            for &(kind, sq) in placements {
                board.place(sq, Piece::new(kind, side))?;
            }
        }
        if plies > RECOMMENDED_MAX_PLIES {
            warn!("ply budget {} exceeds {}; search may be slow", plies, RECOMMENDED_MAX_PLIES);
        }
        Ok(Game { board, plies })
    }

    /// Solves on a copy of the board; the game itself is left untouched.
    pub fn solve(&self, params: SolveParams) -> SolveResult {
        let mut board = self.board;
        Solver::new(params).solve(&mut board, self.plies)
    }
}

fn check_roster(side: Side, kinds: impl Iterator<Item = PieceKind>) -> Result<(), PositionError> {
    let (mut total, mut queens, mut rooks, mut minors) = (0usize, 0usize, 0usize, 0usize);
    for kind in kinds {
        total += 1;
        match kind {
            PieceKind::Queen => queens += 1,
            PieceKind::Rook => rooks += 1,
            k if k.is_minor() => minors += 1,
            _ => {}
        }
    }
    if total == 0 {
        return Err(PositionError::NoPieces(side));
    }
    if total > MAX_PIECES_PER_SIDE {
        return Err(PositionError::TooManyPieces { side, count: total, max: MAX_PIECES_PER_SIDE });
    }
    match queens {
        0 => return Err(PositionError::MissingQueen(side)),
        1 => {}
        count => return Err(PositionError::ExtraQueen { side, count }),
    }
    if rooks > MAX_ROOKS {
        return Err(PositionError::TooManyRooks { side, count: rooks, max: MAX_ROOKS });
    }
    if minors > MAX_MINORS {
        return Err(PositionError::TooManyMinors { side, count: minors, max: MAX_MINORS });
    }
    Ok(())
}

/// Solves every game, in parallel when `threads > 1`. Results keep input order.
pub fn solve_all(games: &[Game], params: SolveParams, threads: usize) -> Vec<SolveResult> {
    let threads = threads.max(1);
    info!("solving {} games on {} thread(s), tt={}", games.len(), threads, params.use_tt);
    if threads == 1 {
        return games.iter().map(|g| g.solve(params)).collect();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(|| games.par_iter().map(|g| g.solve(params)).collect()),
        Err(e) => {
            warn!("thread pool unavailable ({e}); solving sequentially");
            games.iter().map(|g| g.solve(params)).collect()
        }
    }
}
