use crate::board::{Board, Move, PlacedPiece, Side, Square};
use crate::search::attacks::can_reach;
use crate::search::snapshot::Snapshot;

/// All geometrically reachable moves for one side's pieces.
///
/// Destinations are visited in row-major order and, per destination, pieces in
/// the order given, so the output is deterministic. Squares held by the moving
/// side are skipped; opponent squares are captures. No self-check filtering.
pub fn generate_moves(board: &Board, pieces: &[PlacedPiece]) -> Vec<Move> {
    let Some(first) = pieces.first() else { return Vec::new() };
    let side = first.piece.side;
    let mut moves = Vec::new();
    for to in Square::all() {
        let occupant = board.get(to);
        if occupant.map(|p| p.side) == Some(side) { continue; }
        for piece in pieces {
            if can_reach(board, piece, to) {
                moves.push(Move { from: piece.at, piece: piece.piece, to, captured: occupant });
            }
        }
    }
    moves
}

/// Moves `side` may actually play. White may not leave its queen attackable;
/// Black's moves are not filtered.
pub fn legal_moves(board: &mut Board, snap: &Snapshot, side: Side) -> Vec<Move> {
    let mut moves = generate_moves(board, snap.pieces(side));
    if side == Side::White {
        moves.retain(|mv| !exposes_queen(board, mv, side));
    }
    moves
}

/// Plays `mv`, checks whether `side`'s queen is then attackable, and takes it back.
pub fn exposes_queen(board: &mut Board, mv: &Move, side: Side) -> bool {
    board.apply(mv);
    let exposed = Snapshot::scan(board).queen_in_danger(board, side);
    board.undo(mv);
    exposed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind};

    #[test]
    fn no_pieces_no_moves() {
        assert!(generate_moves(&Board::empty(), &[]).is_empty());
    }

    #[test]
    fn own_squares_are_never_destinations() {
        let mut b = Board::empty();
        b.set(Square::new(0, 0), Some(Piece::new(PieceKind::Rook, Side::White)));
        b.set(Square::new(0, 1), Some(Piece::new(PieceKind::Knight, Side::White)));
        let snap = Snapshot::scan(&b);
        let moves = generate_moves(&b, &snap.whites);
        assert!(moves.iter().all(|m| b.side_at(m.to) != Some(Side::White)));
        // Rook on a4 only runs down the a-file; the knight on b4 blocks its rank.
        let rook_moves = moves.iter().filter(|m| m.piece.kind == PieceKind::Rook).count();
        assert_eq!(rook_moves, 3);
    }
}
