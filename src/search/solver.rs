use log::{debug, trace};

use crate::board::{Board, Move, Side};
use crate::search::movegen::{generate_moves, legal_moves};
use crate::search::snapshot::Snapshot;
use crate::search::tt::{Entry, Tt};

pub const DEFAULT_TT_ENTRIES: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveParams {
    pub use_tt: bool,
    pub tt_entries: usize,
}

impl Default for SolveParams {
    fn default() -> Self {
        Self { use_tt: true, tt_entries: DEFAULT_TT_ENTRIES }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub win: bool,
    /// White's first move on a winning line, when the win needed a move at all.
    pub first_move: Option<Move>,
    pub nodes: u64,
    pub tt_hits: u64,
}

/// Bounded forced-win search for White.
///
/// The board is shared across the whole recursion and every move is undone
/// before the call that made it returns.
pub struct Solver {
    tt: Option<Tt>,
    nodes: u64,
    tt_hits: u64,
    first_move: Option<Move>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolveParams::default())
    }
}

impl Solver {
    pub fn new(params: SolveParams) -> Self {
        let tt = params.use_tt.then(|| Tt::with_capacity(params.tt_entries));
        Self { tt, nodes: 0, tt_hits: 0, first_move: None }
    }

    /// Can White force Black's queen into attack within `plies` half-moves?
    pub fn solve(&mut self, board: &mut Board, plies: u32) -> SolveResult {
        self.nodes = 0;
        self.tt_hits = 0;
        self.first_move = None;
        if let Some(tt) = self.tt.as_mut() { tt.clear(); }

        let win = self.search_ply(board, plies, 0);
        debug!(
            "solved plies={} win={} first={} nodes={} tt_hits={}",
            plies,
            win,
            self.first_move.map_or_else(|| "-".to_string(), |m| m.to_string()),
            self.nodes,
            self.tt_hits
        );
        SolveResult { win, first_move: self.first_move, nodes: self.nodes, tt_hits: self.tt_hits }
    }

    pub(crate) fn search_ply(&mut self, board: &mut Board, plies: u32, current: u32) -> bool {
        self.nodes += 1;
        let snap = Snapshot::scan(board);
        let side = Side::to_move_at(current);

        // White has already delivered the attack coming into its ply.
        if side == Side::White && snap.queen_in_danger(board, Side::Black) {
            return true;
        }
        if current + 1 >= plies {
            return false;
        }

        let key = board.packed();
        let remaining = plies - current;
        if current > 0 {
            if let Some(win) = self.tt.as_ref().and_then(|tt| tt.get(key, side, remaining)) {
                self.tt_hits += 1;
                return win;
            }
        }

        let win = match side {
            Side::White => self.white_ply(board, &snap, plies, current),
            Side::Black => self.black_ply(board, &snap, plies, current),
        };
        debug_assert_eq!(board.packed(), key, "board not restored after ply {current}");

        if let Some(tt) = self.tt.as_mut() {
            tt.put(Entry { key, side, remaining, win });
        }
        win
    }

    fn white_ply(&mut self, board: &mut Board, snap: &Snapshot, plies: u32, current: u32) -> bool {
        for mv in legal_moves(board, snap, Side::White) {
            board.apply(&mv);
            let win = self.search_ply(board, plies, current + 1);
            board.undo(&mv);
            if current == 0 {
                trace!("root {} -> {}", mv, if win { "win" } else { "no" });
            }
            if win {
                if current == 0 { self.first_move = Some(mv); }
                return true;
            }
        }
        false
    }

    fn black_ply(&mut self, board: &mut Board, snap: &Snapshot, plies: u32, current: u32) -> bool {
        // No self-check filter for Black, and a Black side with no moves loses.
        for mv in generate_moves(board, &snap.blacks) {
            board.apply(&mv);
            let win = self.search_ply(board, plies, current + 1);
            board.undo(&mv);
            if !win {
                return false;
            }
        }
        true
    }
}

/// Plain recursive search from ply `current` with a budget of `plies`, no table.
pub fn search(board: &mut Board, plies: u32, current: u32) -> bool {
    let mut solver = Solver::new(SolveParams { use_tt: false, ..SolveParams::default() });
    solver.search_ply(board, plies, current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Square};

    fn put(b: &mut Board, kind: PieceKind, side: Side, row: u8, col: u8) {
        b.set(Square::new(row, col), Some(Piece::new(kind, side)));
    }

    #[test]
    fn open_row_is_an_immediate_win() {
        let mut b = Board::empty();
        put(&mut b, PieceKind::Queen, Side::White, 0, 0);
        put(&mut b, PieceKind::Queen, Side::Black, 0, 3);
        let res = Solver::default().solve(&mut b, 1);
        assert!(res.win);
        assert_eq!(res.first_move, None);
        assert_eq!(res.nodes, 1);
    }

    #[test]
    fn black_without_pieces_is_helpless() {
        let mut b = Board::empty();
        put(&mut b, PieceKind::Queen, Side::White, 3, 3);
        // Ply 1 is cut off by the budget before Black's empty move list is seen.
        assert!(!search(&mut b, 2, 0));
        assert!(search(&mut b, 3, 0));
    }

    #[test]
    fn white_without_legal_moves_loses() {
        // The lone white queen on a4 can only capture on b4, a3 or b3, and each
        // of those squares is covered by another black piece.
        let mut b = Board::empty();
        put(&mut b, PieceKind::Queen, Side::White, 0, 0);
        put(&mut b, PieceKind::Rook, Side::Black, 0, 1);
        put(&mut b, PieceKind::Rook, Side::Black, 1, 0);
        put(&mut b, PieceKind::Bishop, Side::Black, 1, 1);
        put(&mut b, PieceKind::Queen, Side::Black, 0, 3);
        put(&mut b, PieceKind::Knight, Side::Black, 3, 1);
        let snap = Snapshot::scan(&b);
        assert_eq!(generate_moves(&b, &snap.whites).len(), 3);
        assert!(legal_moves(&mut b, &snap, Side::White).is_empty());
        let res = Solver::default().solve(&mut b, 5);
        assert!(!res.win);
        assert_eq!(res.nodes, 1);
    }

    #[test]
    fn root_records_winning_move() {
        let mut b = Board::empty();
        put(&mut b, PieceKind::Queen, Side::Black, 0, 0);
        put(&mut b, PieceKind::Rook, Side::Black, 0, 1);
        put(&mut b, PieceKind::Rook, Side::Black, 1, 0);
        put(&mut b, PieceKind::Bishop, Side::Black, 1, 1);
        put(&mut b, PieceKind::Queen, Side::White, 2, 3);
        put(&mut b, PieceKind::Knight, Side::White, 3, 3);
        let before = b;
        let res = Solver::default().solve(&mut b, 3);
        assert!(res.win);
        let mv = res.first_move.expect("winning line starts with a move");
        assert_eq!(mv.piece.kind, PieceKind::Knight);
        assert!(mv.to == Square::new(1, 2) || mv.to == Square::new(2, 1));
        assert_eq!(b, before);
    }
}
