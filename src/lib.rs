// Bounded forced-win solver for the 4x4 queen-hunt variant
pub mod board;
pub mod error;
pub mod game;
pub mod io;
pub mod perft;
pub mod search;
pub mod suite;

pub use error::{ParseError, PositionError};
pub use game::{solve_all, Game};
