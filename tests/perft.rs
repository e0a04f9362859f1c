use quadchess::board::{Board, Piece, PieceKind, Side, Square};
use quadchess::perft::perft;

fn lone(kind: PieceKind, row: u8, col: u8) -> Board {
    let mut b = Board::empty();
    b.set(Square::new(row, col), Some(Piece::new(kind, Side::White)));
    b
}

#[test]
fn perft_single_pieces_depth_one() {
    assert_eq!(perft(&mut lone(PieceKind::Queen, 0, 0), Side::White, 1), 9);
    assert_eq!(perft(&mut lone(PieceKind::Queen, 1, 1), Side::White, 1), 11);
    assert_eq!(perft(&mut lone(PieceKind::Rook, 1, 1), Side::White, 1), 6);
    assert_eq!(perft(&mut lone(PieceKind::Bishop, 1, 1), Side::White, 1), 5);
    assert_eq!(perft(&mut lone(PieceKind::Knight, 0, 0), Side::White, 1), 2);
    assert_eq!(perft(&mut lone(PieceKind::Knight, 1, 1), Side::White, 1), 4);
}

#[test]
fn perft_depth_zero_and_empty_side() {
    let mut b = lone(PieceKind::Queen, 0, 0);
    assert_eq!(perft(&mut b, Side::White, 0), 1);
    assert_eq!(perft(&mut b, Side::Black, 1), 0);
}

#[test]
fn perft_two_queens_counts_captures() {
    // Queens on a4 and d1 share the long diagonal.
    let mut b = Board::empty();
    b.set(Square::new(0, 0), Some(Piece::new(PieceKind::Queen, Side::White)));
    b.set(Square::new(3, 3), Some(Piece::new(PieceKind::Queen, Side::Black)));
    let before = b;
    assert_eq!(perft(&mut b, Side::White, 1), 9);
    // Every reply count is positive, and the tree is undone afterwards.
    assert!(perft(&mut b, Side::White, 2) > 9);
    assert_eq!(b, before);
}
