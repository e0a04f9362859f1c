use rand::seq::SliceRandom;
use rand::Rng;

use super::grid::Board;
use super::types::{Piece, PieceKind, Side, Square};

pub const MAX_PIECES_PER_SIDE: usize = 5;
pub const MAX_ROOKS: usize = 2;
pub const MAX_MINORS: usize = 2;

/// Draws a roster for one side: one queen plus `count - 1` rooks/minors within the caps.
pub fn random_roster<R: Rng>(rng: &mut R, count: usize) -> Vec<PieceKind> {
    let count = count.clamp(1, MAX_PIECES_PER_SIDE);
    let mut roster = vec![PieceKind::Queen];
    let (mut rooks, mut minors) = (0usize, 0usize);
    while roster.len() < count {
        let mut options = Vec::with_capacity(3);
        if rooks < MAX_ROOKS { options.push(PieceKind::Rook); }
        if minors < MAX_MINORS { options.extend([PieceKind::Bishop, PieceKind::Knight]); }
        let Some(&kind) = options.choose(rng) else { break };
        if kind == PieceKind::Rook { rooks += 1; } else { minors += 1; }
        roster.push(kind);
    }
    roster
}

/// A random position that satisfies the game's roster rules.
pub fn random_position<R: Rng>(rng: &mut R, white: usize, black: usize) -> Board {
    let mut squares: Vec<Square> = Square::all().collect();
    squares.shuffle(rng);
    let mut free = squares.into_iter();
    let mut board = Board::empty();
    for (side, count) in [(Side::White, white), (Side::Black, black)] {
        for kind in random_roster(rng, count) {
            if let Some(sq) = free.next() {
                board.set(sq, Some(Piece::new(kind, side)));
            }
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn rosters_respect_caps() {
        let mut rng = SmallRng::seed_from_u64(7);
        for count in 1..=5 {
            for _ in 0..50 {
                let roster = random_roster(&mut rng, count);
                assert_eq!(roster.len(), count);
                assert_eq!(roster.iter().filter(|k| **k == PieceKind::Queen).count(), 1);
                assert!(roster.iter().filter(|k| **k == PieceKind::Rook).count() <= MAX_ROOKS);
                assert!(roster.iter().filter(|k| k.is_minor()).count() <= MAX_MINORS);
            }
        }
    }

    #[test]
    fn positions_have_requested_counts() {
        let mut rng = SmallRng::seed_from_u64(11);
        let b = random_position(&mut rng, 5, 5);
        for side in [Side::White, Side::Black] {
            assert_eq!(b.pieces().filter(|p| p.piece.side == side).count(), 5);
        }
    }
}
