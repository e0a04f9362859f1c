pub mod attacks;
pub mod movegen;
pub mod snapshot;
pub mod solver;
pub mod tt;

pub use solver::{search, SolveParams, SolveResult, Solver};
