use std::fmt;

use super::types::{Piece, Square};

/// A single move, carrying whatever stood on the destination so undo is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub piece: Piece,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}{}", self.piece.kind.to_char(), self.from, sep, self.to)
    }
}
