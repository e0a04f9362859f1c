use thiserror::Error;

use crate::board::{Piece, Side, Square};

/// A position that breaks the game's setup rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("square {square} already holds {existing}, cannot place {incoming}")]
    Occupied { square: Square, existing: Piece, incoming: Piece },
    #[error("{0} has no pieces")]
    NoPieces(Side),
    #[error("{0} has no queen")]
    MissingQueen(Side),
    #[error("{side} has {count} queens, expected exactly one")]
    ExtraQueen { side: Side, count: usize },
    #[error("{side} has {count} pieces, at most {max} allowed")]
    TooManyPieces { side: Side, count: usize, max: usize },
    #[error("{side} has {count} rooks, at most {max} allowed")]
    TooManyRooks { side: Side, count: usize, max: usize },
    #[error("{side} has {count} bishops and knights, at most {max} allowed")]
    TooManyMinors { side: Side, count: usize, max: usize },
    #[error("ply budget must be at least 1")]
    ZeroPlies,
}

/// Failure to read the textual game protocol.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: unexpected end of input, expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },
    #[error("line {line}: expected {expected}, got {token:?}")]
    InvalidNumber { line: usize, expected: &'static str, token: String },
    #[error("line {line}: expected {expected} fields, got {got}")]
    FieldCount { line: usize, expected: usize, got: usize },
    #[error("line {line}: unknown piece {token:?}")]
    InvalidPiece { line: usize, token: String },
    #[error("line {line}: invalid square {file}{rank}")]
    InvalidSquare { line: usize, file: String, rank: String },
    #[error("line {line}: game {game} header does not match its piece lines, found {found}")]
    HeaderMismatch { line: usize, game: usize, found: &'static str },
    #[error("game {game}: {source}")]
    Position { game: usize, #[source] source: PositionError },
}
