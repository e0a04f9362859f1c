use std::fmt;

/// Board edge length. Rows and columns both run `0..SIZE`.
pub const SIZE: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Side to move at 0-indexed ply `ply` (White moves on even plies).
    pub fn to_move_at(ply: u32) -> Side {
        if ply % 2 == 0 { Side::White } else { Side::Black }
    }

    pub fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Queen,
    Knight,
    Bishop,
    Rook,
}

/// How a piece covers the board in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// L-shaped jump that ignores anything in between.
    Leap,
    /// Walk along each (drow, dcol) ray until the edge or the first occupied square.
    Slide(&'static [(i8, i8)]),
}

// Rows grow downwards, so "up" is drow = -1.
const QUEEN_RAYS: [(i8, i8); 8] =
    [(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(-1, 1), (1, 1), (1, -1), (-1, -1)];
const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

impl PieceKind {
    pub const ALL: [PieceKind; 4] =
        [PieceKind::Queen, PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook];

    pub fn movement(self) -> Movement {
        match self {
            PieceKind::Queen => Movement::Slide(&QUEEN_RAYS),
            PieceKind::Knight => Movement::Leap,
            PieceKind::Bishop => Movement::Slide(&BISHOP_RAYS),
            PieceKind::Rook => Movement::Slide(&ROOK_RAYS),
        }
    }

    /// Parses the protocol letter (`Q`, `N`, `B`, `R`), either case.
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_uppercase() {
            'Q' => Some(PieceKind::Queen),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Queen => 'Q',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
        }
    }

    pub fn is_minor(self) -> bool {
        matches!(self, PieceKind::Knight | PieceKind::Bishop)
    }

    fn index(self) -> u8 {
        match self {
            PieceKind::Queen => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    /// Uppercase for White, lowercase for Black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.side {
            Side::White => c,
            Side::Black => c.to_ascii_lowercase(),
        }
    }

    /// Nibble code in `1..=8`; 0 is reserved for an empty cell.
    pub fn code(self) -> u8 {
        1 + self.kind.index() + 4 * self.side.index() as u8
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A board coordinate. Row 0 is the top row (rank 4), column 0 is file A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!((row as usize) < SIZE && (col as usize) < SIZE, "square ({row},{col}) off board");
        Square { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Square> {
        let size = SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Square { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..16`.
    pub fn index(self) -> usize {
        self.row as usize * SIZE + self.col as usize
    }

    pub fn offset(self, drow: i8, dcol: i8) -> Option<Square> {
        Square::try_new(self.row as i8 + drow, self.col as i8 + dcol)
    }

    /// All squares in row-major order, top-left first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE as u8).flat_map(|row| (0..SIZE as u8).map(move |col| Square { row, col }))
    }

    /// Translates a protocol file (`A..D`) and rank (`1..4`).
    pub fn from_algebraic(file: char, rank: char) -> Option<Square> {
        let file = file.to_ascii_uppercase();
        if !('A'..='D').contains(&file) || !('1'..='4').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'A';
        let row = SIZE as u8 - (rank as u8 - b'0');
        Some(Square { row, col })
    }

    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank_char(self) -> char {
        (b'0' + (SIZE as u8 - self.row)) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// A piece together with the square it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub at: Square,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_maps_rank_four_to_top_row() {
        assert_eq!(Square::from_algebraic('A', '4'), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic('d', '1'), Some(Square::new(3, 3)));
        assert_eq!(Square::from_algebraic('B', '2'), Some(Square::new(2, 1)));
        assert_eq!(Square::from_algebraic('E', '1'), None);
        assert_eq!(Square::from_algebraic('A', '5'), None);
        assert_eq!(Square::new(2, 1).to_string(), "b2");
    }

    #[test]
    fn piece_codes_are_distinct_and_nonzero() {
        let mut seen = Vec::new();
        for side in [Side::White, Side::Black] {
            for kind in PieceKind::ALL {
                let code = Piece::new(kind, side).code();
                assert!((1..=8).contains(&code));
                assert!(!seen.contains(&code), "duplicate code {code}");
                seen.push(code);
            }
        }
    }

    #[test]
    fn offset_leaves_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Square::new(1, 1)));
        assert_eq!(Square::all().count(), 16);
    }
}
