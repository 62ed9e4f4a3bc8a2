//! Read-only values handed to the presentation layer.

use serde::Serialize;

use crate::geometry::Vector2;
use crate::hashi::CellState;
use crate::hex::Coord;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IslandView {
    pub coord: Coord,
    pub position: Vector2,
    pub radius: f64,
    pub demand: u32,
    pub state: CellState,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BridgeView {
    pub start: Coord,
    pub end: Coord,
    pub from: Vector2,
    pub to: Vector2,
    pub weight: u32,
}

///
/// Line from a hovered island to one of the islands it can be bridged to.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PreviewLine {
    pub neighbor: Coord,
    pub from: Vector2,
    pub to: Vector2,
}

///
/// What a pointer-down did to the puzzle.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerOutcome {
    /// The pointer is on an island. Nothing changed.
    #[serde(rename_all = "camelCase")]
    Hover {
        island: Coord,
        preview_lines: Vec<PreviewLine>,
    },
    /// A bridge got its next weight. Weight 0 means it was removed.
    Toggled { bridge: BridgeView },
    /// Missed everything, or the bridge would cross another one.
    Noop,
}

impl PointerOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, PointerOutcome::Noop)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PuzzleSnapshot {
    pub rows: usize,
    pub columns: usize,
    pub islands: Vec<IslandView>,
    pub bridges: Vec<BridgeView>,
    pub solved: bool,
}
