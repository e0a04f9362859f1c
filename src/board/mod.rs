pub mod grid;
pub mod moves;
pub mod random;
pub mod types;

pub use grid::Board;
pub use moves::Move;
pub use types::{Movement, Piece, PieceKind, PlacedPiece, Side, Square, SIZE};
