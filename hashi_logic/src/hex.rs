use std::fmt::Display;

use serde::{Deserialize, Serialize};

///
/// Position of a cell: `row` counts downwards, `col` to the right.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

///
/// The six hex directions, clockwise from upper left.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    DownRight,
    Down,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::UpLeft,
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
    ];

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::UpLeft => Direction::DownRight,
            Direction::Up => Direction::Down,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownRight => Direction::UpLeft,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
        }
    }
}

/// Largest grid, in cells, that a puzzle may be built on.
pub const MAX_CELLS: usize = 1 << 20;

pub trait CoordinateSystem {
    fn rows(&self) -> usize;

    fn columns(&self) -> usize;

    fn adjacent(&self, from: Coord, direction: Direction) -> Option<Coord>;

    fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows() && coord.col < self.columns()
    }

    ///
    /// Linear index of `coord` for a row-major cell store.
    ///
    fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row * self.columns() + coord.col)
    }

    ///
    /// Directly adjacent cells in the order of [`Direction::ALL`].
    ///
    fn connections(&self, from: Coord) -> [Option<Coord>; 6] {
        Direction::ALL.map(|direction| self.adjacent(from, direction))
    }
}

///
/// Offset layout with shifted columns:
/// odd columns sit half a cell lower than even columns.
///
///  even column j             odd column j
///
///  (i-1,j-1) (i-1,j) (i-1,j+1)             (i-1,j)
///          \    |    /              (i,j-1)   |   (i,j+1)
///            (i, j)                   \     (i, j)    /
///          /    |    \               (i+1,j-1) | (i+1,j+1)
///   (i,j-1)  (i+1,j)  (i,j+1)               (i+1,j)
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexSystem {
    rows: usize,
    columns: usize,
}

impl HexSystem {
    pub const fn new(rows: usize, columns: usize) -> Self {
        HexSystem { rows, columns }
    }

    ///
    /// Grid dimensions covering a canvas of `width` x `height`.
    ///
    /// The grid is made larger than the canvas so that the random walk does
    /// not hit the border too early. Returns `None` for canvases that are not
    /// finite and non-negative or that would need more than [`MAX_CELLS`] cells.
    ///
    pub fn for_canvas(width: f64, height: f64, cell_radius: f64) -> Option<Self> {
        let rows = (height / (2.0 * cell_radius)).floor() + 2.0;
        let columns = (width / (2.0 * cell_radius)).floor() + 6.0;
        // Negated so that NaN is rejected as well.
        if !(width >= 0.0 && height >= 0.0 && rows * columns <= MAX_CELLS as f64) {
            return None;
        }
        Some(HexSystem::new(rows as usize, columns as usize))
    }

    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn center(&self) -> Coord {
        Coord::new(self.rows / 2, self.columns / 2)
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| Coord::new(row, col)))
    }
}

impl CoordinateSystem for HexSystem {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn adjacent(&self, from: Coord, direction: Direction) -> Option<Coord> {
        if !self.contains(from) {
            return None;
        }
        let odd_column = from.col % 2 == 1;
        let (d_row, d_col): (isize, isize) = match (direction, odd_column) {
            (Direction::Up, _) => (-1, 0),
            (Direction::Down, _) => (1, 0),
            (Direction::UpLeft, true) => (0, -1),
            (Direction::UpRight, true) => (0, 1),
            (Direction::DownRight, true) => (1, 1),
            (Direction::DownLeft, true) => (1, -1),
            (Direction::UpLeft, false) => (-1, -1),
            (Direction::UpRight, false) => (-1, 1),
            (Direction::DownRight, false) => (0, 1),
            (Direction::DownLeft, false) => (0, -1),
        };
        let to = Coord::new(
            from.row.checked_add_signed(d_row)?,
            from.col.checked_add_signed(d_col)?,
        );
        self.contains(to).then_some(to)
    }
}

#[cfg(test)]
mod test {
    use super::{Coord, CoordinateSystem, Direction, HexSystem, MAX_CELLS};

    fn c(row: usize, col: usize) -> Option<Coord> {
        Some(Coord::new(row, col))
    }

    // UL, U, UR, DR, D, DL
    #[test]
    fn check_connections() {
        let system = HexSystem::new(3, 4);
        for coord in system.coords() {
            let x = system.connections(coord);
            let res: [Option<Coord>; 6] = match (coord.row, coord.col) {
                (0, 0) => [None, None, None, c(0, 1), c(1, 0), None],
                (0, 1) => [c(0, 0), None, c(0, 2), c(1, 2), c(1, 1), c(1, 0)],
                (0, 2) => [None, None, None, c(0, 3), c(1, 2), c(0, 1)],
                (0, 3) => [c(0, 2), None, None, None, c(1, 3), c(1, 2)],
                (1, 0) => [None, c(0, 0), c(0, 1), c(1, 1), c(2, 0), None],
                (1, 1) => [c(1, 0), c(0, 1), c(1, 2), c(2, 2), c(2, 1), c(2, 0)],
                (1, 2) => [c(0, 1), c(0, 2), c(0, 3), c(1, 3), c(2, 2), c(1, 1)],
                (1, 3) => [c(1, 2), c(0, 3), None, None, c(2, 3), c(2, 2)],
                (2, 0) => [None, c(1, 0), c(1, 1), c(2, 1), None, None],
                (2, 1) => [c(2, 0), c(1, 1), c(2, 2), None, None, None],
                (2, 2) => [c(1, 1), c(1, 2), c(1, 3), c(2, 3), None, c(2, 1)],
                (2, 3) => [c(2, 2), c(1, 3), None, None, None, None],
                _ => unreachable!(),
            };
            assert_eq!(res, x, "connections of {coord}");
        }
    }

    #[test]
    fn outside_cells_have_no_neighbors() {
        let system = HexSystem::new(3, 4);
        assert_eq!(system.connections(Coord::new(3, 0)), [None; 6]);
        assert_eq!(system.connections(Coord::new(0, 4)), [None; 6]);
    }

    #[test]
    fn opposite_direction_leads_back() {
        let system = HexSystem::new(5, 7);
        for coord in system.coords() {
            for direction in Direction::ALL {
                if let Some(next) = system.adjacent(coord, direction) {
                    assert_eq!(system.adjacent(next, direction.opposite()), Some(coord));
                }
            }
        }
    }

    #[test]
    fn size_calc() {
        assert_eq!(HexSystem::for_canvas(800.0, 600.0, 30.0), Some(HexSystem::new(12, 19)));
        assert_eq!(HexSystem::for_canvas(0.0, 0.0, 30.0), Some(HexSystem::new(2, 6)));
        assert_eq!(HexSystem::for_canvas(59.9, 60.0, 30.0), Some(HexSystem::new(3, 6)));
        assert_eq!(HexSystem::new(12, 19).size(), 228);
        assert_eq!(HexSystem::new(12, 19).center(), Coord::new(6, 9));
    }

    #[test]
    fn huge_canvas_has_no_grid() {
        assert_eq!(HexSystem::for_canvas(f64::MAX, 100.0, 30.0), None);
        assert_eq!(HexSystem::for_canvas(1e7, 1e7, 30.0), None);
        assert_eq!(HexSystem::for_canvas(f64::INFINITY, 0.0, 30.0), None);
        assert_eq!(HexSystem::for_canvas(f64::NAN, 0.0, 30.0), None);
        assert_eq!(HexSystem::for_canvas(-1.0, 0.0, 30.0), None);

        let largest = HexSystem::for_canvas(60_000.0, 60_000.0, 30.0).unwrap();
        assert_eq!(largest, HexSystem::new(1002, 1006));
        assert!(largest.size() <= MAX_CELLS);
        assert_eq!(HexSystem::for_canvas(60_000.0, 70_000.0, 30.0), None);
    }

    #[test]
    fn index_is_row_major() {
        let system = HexSystem::new(3, 4);
        assert_eq!(system.index_of(Coord::new(0, 0)), Some(0));
        assert_eq!(system.index_of(Coord::new(2, 3)), Some(11));
        assert_eq!(system.index_of(Coord::new(1, 2)), Some(6));
        assert_eq!(system.index_of(Coord::new(3, 0)), None);
    }
}
