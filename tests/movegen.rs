use quadchess::board::{Board, Piece, PieceKind, Side, Square};
use quadchess::search::movegen::{exposes_queen, generate_moves, legal_moves};
use quadchess::search::snapshot::Snapshot;

fn put(b: &mut Board, kind: PieceKind, side: Side, row: u8, col: u8) {
    b.set(Square::new(row, col), Some(Piece::new(kind, side)));
}

/// White queen a1 shielded from the a4 rook by its own rook on a2.
fn pinned_rook() -> Board {
    let mut b = Board::empty();
    put(&mut b, PieceKind::Queen, Side::White, 3, 0);
    put(&mut b, PieceKind::Rook, Side::White, 2, 0);
    put(&mut b, PieceKind::Rook, Side::Black, 0, 0);
    b
}

#[test]
fn self_check_filter_drops_exposing_moves() {
    let mut b = pinned_rook();
    let snap = Snapshot::scan(&b);
    let all = generate_moves(&b, &snap.whites);
    assert_eq!(all.len(), 11);

    let legal = legal_moves(&mut b, &snap, Side::White);
    assert_eq!(legal.len(), 7);
    // The rook may only stay on the a-file; the queen may not step onto the 4th rank.
    for mv in &legal {
        if mv.piece.kind == PieceKind::Rook {
            assert_eq!(mv.to.col(), 0, "rook left the file: {mv}");
        } else {
            assert_ne!(mv.to, Square::new(0, 3), "queen walked into the rook: {mv}");
        }
    }
    assert_eq!(b, pinned_rook());
}

#[test]
fn black_moves_are_not_filtered() {
    // Mirror image: black rook pinned in front of its queen still gets every move.
    let mut b = Board::empty();
    put(&mut b, PieceKind::Queen, Side::Black, 3, 0);
    put(&mut b, PieceKind::Rook, Side::Black, 2, 0);
    put(&mut b, PieceKind::Rook, Side::White, 0, 0);
    let snap = Snapshot::scan(&b);
    let all = generate_moves(&b, &snap.blacks);
    let legal = legal_moves(&mut b, &snap, Side::Black);
    assert_eq!(all, legal);
    assert!(legal.iter().any(|mv| exposes_queen(&mut b, mv, Side::Black)));
}

#[test]
fn captures_record_the_victim() {
    let b = pinned_rook();
    let snap = Snapshot::scan(&b);
    let capture = generate_moves(&b, &snap.whites)
        .into_iter()
        .find(|mv| mv.to == Square::new(0, 0))
        .expect("rook can take on a4");
    assert_eq!(capture.captured, Some(Piece::new(PieceKind::Rook, Side::Black)));
    assert_eq!(capture.to_string(), "Ra2xa4");
}

#[test]
fn generation_order_is_row_major_by_destination() {
    let b = pinned_rook();
    let snap = Snapshot::scan(&b);
    let moves = generate_moves(&b, &snap.whites);
    let idx: Vec<usize> = moves.iter().map(|m| m.to.index()).collect();
    let mut sorted = idx.clone();
    sorted.sort();
    assert_eq!(idx, sorted);
}
