use crate::board::{Board, Side};
use crate::search::movegen::generate_moves;
use crate::search::snapshot::Snapshot;

// Make/unmake perft over the raw move tree (no self-check filter), sides alternating.
pub fn perft(board: &mut Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let snap = Snapshot::scan(board);
    let moves = generate_moves(board, snap.pieces(side));
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for mv in moves {
        board.apply(&mv);
        nodes += perft(board, side.opponent(), depth - 1);
        board.undo(&mv);
    }
    nodes
}
