//! Puzzle model for hex bridges: islands on a hex grid, connected by single or
//! double bridges that must not cross.

pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod hashi;
pub mod hex;
pub mod options;
pub mod view;

pub use error::GridError;
pub use generator::GenerationReport;
pub use geometry::{CELL_RADIUS, Vector2};
pub use grid::PuzzleGrid;
pub use hashi::{Bridge, BridgeKey, BridgeWeight, Cell, CellState};
pub use hex::{Coord, CoordinateSystem, Direction, HexSystem, MAX_CELLS};
pub use options::{Difficulty, GridOptions};
pub use view::{BridgeView, IslandView, PointerOutcome, PreviewLine, PuzzleSnapshot};
