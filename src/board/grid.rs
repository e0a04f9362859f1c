use std::fmt;

use super::moves::Move;
use super::types::{Piece, PlacedPiece, Side, Square, SIZE};
use crate::error::PositionError;

/// The 4x4 board: a flat value grid addressed by (row, column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn set(&mut self, sq: Square, cell: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    pub fn side_at(&self, sq: Square) -> Option<Side> {
        self.get(sq).map(|p| p.side)
    }

    /// Puts `piece` on an empty square.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), PositionError> {
        if let Some(existing) = self.get(sq) {
            return Err(PositionError::Occupied { square: sq, existing, incoming: piece });
        }
        self.set(sq, Some(piece));
        Ok(())
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        Square::all().filter_map(move |at| self.get(at).map(|piece| PlacedPiece { piece, at }))
    }

    pub fn apply(&mut self, mv: &Move) {
        debug_assert_eq!(self.get(mv.from), Some(mv.piece), "apply {mv}: mover not on source");
        debug_assert_eq!(self.get(mv.to), mv.captured, "apply {mv}: stale destination");
        self.set(mv.to, Some(mv.piece));
        self.set(mv.from, None);
    }

    pub fn undo(&mut self, mv: &Move) {
        debug_assert_eq!(self.get(mv.to), Some(mv.piece), "undo {mv}: mover not on destination");
        self.set(mv.to, mv.captured);
        self.set(mv.from, Some(mv.piece));
    }

    /// The whole board as one `u64`, four bits per cell in row-major order.
    ///
    /// Distinct boards always produce distinct keys, so this doubles as an
    /// exact transposition key.
    pub fn packed(&self) -> u64 {
        Square::all().fold(0u64, |key, sq| {
            let code = self.get(sq).map_or(0, |p| p.code()) as u64;
            key | (code << (4 * sq.index()))
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE as u8 {
            let rank = Square::new(row, 0).rank_char();
            write!(f, "{rank} |")?;
            for col in 0..SIZE as u8 {
                let c = self.get(Square::new(row, col)).map_or('.', |p| p.to_char());
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..SIZE as u8 {
            write!(f, " {}", Square::new(0, col).file_char())?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::PieceKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn capture_then_undo_restores_victim() {
        let mut b = Board::empty();
        let wq = Piece::new(PieceKind::Queen, Side::White);
        let br = Piece::new(PieceKind::Rook, Side::Black);
        b.place(Square::new(0, 0), wq).unwrap();
        b.place(Square::new(0, 3), br).unwrap();
        let before = b;
        let mv = Move { from: Square::new(0, 0), piece: wq, to: Square::new(0, 3), captured: Some(br) };
        b.apply(&mv);
        assert_eq!(b.get(Square::new(0, 3)), Some(wq));
        assert!(b.is_empty(Square::new(0, 0)));
        b.undo(&mv);
        assert_eq!(b, before);
    }

    #[test]
    fn place_rejects_occupied() {
        let mut b = Board::empty();
        let sq = Square::new(1, 2);
        b.place(sq, Piece::new(PieceKind::Knight, Side::White)).unwrap();
        assert!(b.place(sq, Piece::new(PieceKind::Rook, Side::Black)).is_err());
    }

    #[test]
    fn packed_distinguishes_side_and_square() {
        let mut a = Board::empty();
        let mut b = Board::empty();
        a.set(Square::new(0, 0), Some(Piece::new(PieceKind::Bishop, Side::White)));
        b.set(Square::new(0, 0), Some(Piece::new(PieceKind::Bishop, Side::Black)));
        assert_ne!(a.packed(), b.packed());
        assert_eq!(Board::empty().packed(), 0);
    }

    #[test]
    fn display_shows_rank_four_on_top() {
        let mut b = Board::empty();
        b.set(Square::new(0, 0), Some(Piece::new(PieceKind::Queen, Side::Black)));
        b.set(Square::new(3, 3), Some(Piece::new(PieceKind::Queen, Side::White)));
        let text = b.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "4 | q . . .");
        assert_eq!(lines[3], "1 | . . . Q");
        assert_eq!(lines[4], "    a b c d");
    }
}
