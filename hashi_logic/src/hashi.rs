use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::geometry::Vector2;
use crate::hex::Coord;

///
/// Number of lines drawn for a bridge.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BridgeWeight {
    #[default]
    Empty,
    Single,
    Double,
}

impl BridgeWeight {
    pub const fn from_count(count: u32) -> Option<Self> {
        match count {
            0 => Some(BridgeWeight::Empty),
            1 => Some(BridgeWeight::Single),
            2 => Some(BridgeWeight::Double),
            _ => None,
        }
    }

    ///
    /// Next weight when a bridge is clicked: 0, 1, 2, back to 0.
    ///
    pub const fn cycle(self) -> Self {
        match self {
            BridgeWeight::Empty => BridgeWeight::Single,
            BridgeWeight::Single => BridgeWeight::Double,
            BridgeWeight::Double => BridgeWeight::Empty,
        }
    }

    pub const fn count(self) -> u32 {
        match self {
            BridgeWeight::Empty => 0,
            BridgeWeight::Single => 1,
            BridgeWeight::Double => 2,
        }
    }

    pub const fn max_count() -> u32 {
        2
    }
}

///
/// Derived display state of an island.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// No bridge touches the island.
    Empty,
    /// Some bridges, but not the demanded weight.
    Active,
    /// Incident weight equals the demand.
    Full,
}

impl CellState {
    pub fn derive(incident_weight: u32, demand: u32) -> Self {
        if incident_weight == demand {
            CellState::Full
        } else if incident_weight == 0 {
            CellState::Empty
        } else {
            CellState::Active
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub radius: f64,
    pub empty: bool,
    /// Required sum of incident bridge weights. Only meaningful for islands.
    pub demand: u32,
    pub position: Vector2,
}

impl Cell {
    pub fn new(coord: Coord, radius: f64) -> Self {
        Cell {
            coord,
            radius,
            empty: true,
            demand: 0,
            position: Vector2::grid_to_canvas_position(coord.row, coord.col),
        }
    }

    pub fn is_island(&self) -> bool {
        !self.empty
    }
}

///
/// Undirected identity of a bridge: endpoints ordered so that `(a, b)` and
/// `(b, a)` give the same key.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BridgeKey(Coord, Coord);

impl BridgeKey {
    pub fn new(a: Coord, b: Coord) -> Self {
        BridgeKey(std::cmp::min(a, b), std::cmp::max(a, b))
    }

    pub fn first(&self) -> Coord {
        self.0
    }

    pub fn second(&self) -> Coord {
        self.1
    }

    pub fn touches(&self, coord: Coord) -> bool {
        self.0 == coord || self.1 == coord
    }

    pub fn shares_endpoint(&self, other: &BridgeKey) -> bool {
        self.touches(other.0) || self.touches(other.1)
    }
}

///
/// Bridge between two islands.
///
/// Equality and hashing only look at the unordered endpoints, never at the weight.
///
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Bridge {
    pub start: Coord,
    pub end: Coord,
    pub weight: BridgeWeight,
}

impl Bridge {
    pub fn new(start: Coord, end: Coord, weight: BridgeWeight) -> Self {
        debug_assert_ne!(start, end, "bridge must connect two distinct islands");
        Bridge { start, end, weight }
    }

    pub fn key(&self) -> BridgeKey {
        BridgeKey::new(self.start, self.end)
    }

    pub fn with_weight(&self, weight: BridgeWeight) -> Self {
        Bridge { weight, ..*self }
    }

    pub fn cycle(&mut self) -> BridgeWeight {
        self.weight = self.weight.cycle();
        self.weight
    }

    pub fn touches(&self, coord: Coord) -> bool {
        self.start == coord || self.end == coord
    }

    pub fn other_end(&self, coord: Coord) -> Option<Coord> {
        if self.start == coord {
            Some(self.end)
        } else if self.end == coord {
            Some(self.start)
        } else {
            None
        }
    }
}

impl PartialEq for Bridge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Bridge {}

impl Hash for Bridge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
