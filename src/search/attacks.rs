use crate::board::{Board, Movement, PlacedPiece, Square};

/// Whether `piece` can move to (or capture on) `target` in one step.
///
/// Knights jump. Sliders walk each of their rays and stop at the board edge or
/// at the first occupied square that is not `target`; blockers of either side
/// count. An occupied `target` is still reachable.
pub fn can_reach(board: &Board, piece: &PlacedPiece, target: Square) -> bool {
    let from = piece.at;
    match piece.piece.kind.movement() {
        Movement::Leap => {
            let dr = (from.row() as i8 - target.row() as i8).abs();
            let dc = (from.col() as i8 - target.col() as i8).abs();
            (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
        }
        Movement::Slide(rays) => rays.iter().any(|&(dr, dc)| ray_hits(board, from, dr, dc, target)),
    }
}

fn ray_hits(board: &Board, from: Square, dr: i8, dc: i8, target: Square) -> bool {
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if sq == target { return true; }
        if !board.is_empty(sq) { return false; }
        cur = sq.offset(dr, dc);
    }
    false
}

/// Every square `piece` could move to, ignoring who stands there.
pub fn reachable_squares(board: &Board, piece: &PlacedPiece) -> Vec<Square> {
    Square::all().filter(|&sq| sq != piece.at && can_reach(board, piece, sq)).collect()
}
