//! Errors raised while setting up a puzzle.
//!
//! Playing a puzzle never fails: lookups outside the grid yield `None` and
//! rejected bridge toggles are reported as a no-op.

use thiserror::Error;

use crate::hex::Coord;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// At least one island has to be requested.
    #[error("island count must be at least 1, got {0}")]
    InvalidIslandCount(usize),

    #[error("line hit threshold must be a positive number, got {0}")]
    InvalidLineThreshold(f64),

    #[error("canvas size {width}x{height} is not usable")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("a {rows}x{columns} grid exceeds the supported number of cells")]
    GridTooLarge { rows: usize, columns: usize },

    /// A hand-placed island lies outside the grid.
    #[error("island {coord} is outside of the {rows}x{columns} grid")]
    OutOfBounds {
        coord: Coord,
        rows: usize,
        columns: usize,
    },

    #[error("island {0} is listed more than once")]
    DuplicateIsland(Coord),

    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}
