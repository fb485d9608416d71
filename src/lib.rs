//! Counts every legal completion of a 9x9 sudoku board, either with a plain
//! recursive search or with an equivalent fork-join search on a rayon pool.

mod board;
mod candidates;
mod groups;
mod loader;
mod propagate;
mod solver;
#[cfg(test)]
mod testing;

pub use board::{Board, SolutionSpaceEstimate};
pub use loader::{load_board, parse_board, LoadError};
pub use solver::{parallel, sequential};
