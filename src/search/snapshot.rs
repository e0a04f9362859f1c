use crate::board::{Board, PieceKind, PlacedPiece, Side, Square};
use crate::search::attacks::can_reach;

/// Per-ply index of the board: each side's pieces in row-major order and where
/// each queen stands. Built fresh from the live board and never updated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub whites: Vec<PlacedPiece>,
    pub blacks: Vec<PlacedPiece>,
    pub white_queen: Option<Square>,
    pub black_queen: Option<Square>,
}

impl Snapshot {
    pub fn scan(board: &Board) -> Snapshot {
        let mut snap = Snapshot::default();
        for placed in board.pieces() {
            let (list, queen) = match placed.piece.side {
                Side::White => (&mut snap.whites, &mut snap.white_queen),
                Side::Black => (&mut snap.blacks, &mut snap.black_queen),
            };
            list.push(placed);
            if placed.piece.kind == PieceKind::Queen {
                *queen = Some(placed.at);
            }
        }
        snap
    }

    pub fn pieces(&self, side: Side) -> &[PlacedPiece] {
        match side {
            Side::White => &self.whites,
            Side::Black => &self.blacks,
        }
    }

    pub fn queen(&self, side: Side) -> Option<Square> {
        match side {
            Side::White => self.white_queen,
            Side::Black => self.black_queen,
        }
    }

    /// Whether any opposing piece can reach `side`'s queen. A side without a
    /// queen is never in danger.
    pub fn queen_in_danger(&self, board: &Board, side: Side) -> bool {
        let Some(queen) = self.queen(side) else { return false };
        self.pieces(side.opponent()).iter().any(|p| can_reach(board, p, queen))
    }
}
