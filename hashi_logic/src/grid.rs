use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    fmt::Display,
};

use log::{debug, trace};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::GridError;
use crate::generator::{self, GenerationReport};
use crate::geometry::{CELL_RADIUS, Vector2, intersects};
use crate::hashi::{Bridge, BridgeKey, BridgeWeight, Cell, CellState};
use crate::hex::{Coord, CoordinateSystem, Direction, HexSystem, MAX_CELLS};
use crate::options::GridOptions;
use crate::view::{BridgeView, IslandView, PointerOutcome, PreviewLine, PuzzleSnapshot};

///
/// A hex bridges puzzle and the bridges the player placed so far.
///
/// Cells are stored row-major in a single vector, islands are the coordinates
/// of the non-empty cells in the order they were created.
///
#[derive(Clone, Debug)]
pub struct PuzzleGrid {
    system: HexSystem,
    options: GridOptions,
    cells: Vec<Cell>,
    islands: Vec<Coord>,
    bridges: BTreeMap<BridgeKey, Bridge>,
    candidates: Vec<Bridge>,
    solution: BTreeMap<BridgeKey, Bridge>,
    report: GenerationReport,
}

impl Display for PuzzleGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let columns = self.system.columns();
        let width = 3 * columns;
        writeln!(f, "\u{250f}{:\u{2501}<width$}\u{2513}", "")?;
        for row in 0..self.system.rows() {
            // Odd columns sit half a row lower, so they get their own text line.
            for odd in [false, true] {
                f.write_str("\u{2503}")?;
                for cell in &self.cells[row * columns..(row + 1) * columns] {
                    if (cell.coord.col % 2 == 1) != odd {
                        f.write_str("   ")?;
                    } else if cell.is_island() {
                        write!(f, "{:>2} ", cell.demand)?;
                    } else {
                        f.write_str(" \u{00b7} ")?;
                    }
                }
                f.write_str("\u{2503}\n")?;
            }
        }
        write!(f, "\u{2517}{:\u{2501}<width$}\u{251b}", "")
    }
}

impl PuzzleGrid {
    ///
    /// Generate a new puzzle for a canvas of `width` x `height`.
    ///
    pub fn new(width: f64, height: f64, options: GridOptions) -> Result<Self, GridError> {
        let mut rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        PuzzleGrid::generate_with_rng(width, height, options, &mut rng)
    }

    pub fn generate_with_rng<R: Rng>(
        width: f64,
        height: f64,
        options: GridOptions,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        options.validate()?;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(GridError::InvalidCanvas { width, height });
        }
        let system = HexSystem::for_canvas(width, height, CELL_RADIUS)
            .ok_or(GridError::InvalidCanvas { width, height })?;
        let mut grid = PuzzleGrid::blank(system, options);
        grid.report = generator::generate(&mut grid, rng);
        Ok(grid)
    }

    ///
    /// Puzzle with fixed islands and demands, no generation involved.
    ///
    pub fn from_islands(
        rows: usize,
        columns: usize,
        islands: &[(Coord, u32)],
        options: GridOptions,
    ) -> Result<Self, GridError> {
        options.validate()?;
        if rows.checked_mul(columns).is_none_or(|size| size > MAX_CELLS) {
            return Err(GridError::GridTooLarge { rows, columns });
        }
        let system = HexSystem::new(rows, columns);
        let mut grid = PuzzleGrid::blank(system, options);
        for &(coord, demand) in islands {
            if !system.contains(coord) {
                return Err(GridError::OutOfBounds {
                    coord,
                    rows,
                    columns,
                });
            }
            if !grid.promote(coord) {
                return Err(GridError::DuplicateIsland(coord));
            }
            if let Some(cell) = grid.cell_mut(coord) {
                cell.demand = demand;
            }
        }
        grid.candidates = grid.enumerate_candidates();
        grid.report = GenerationReport {
            requested_islands: islands.len(),
            placed_islands: islands.len(),
            ..GenerationReport::default()
        };
        Ok(grid)
    }

    fn blank(system: HexSystem, options: GridOptions) -> Self {
        PuzzleGrid {
            system,
            options,
            cells: system
                .coords()
                .map(|coord| Cell::new(coord, CELL_RADIUS / 2.0))
                .collect(),
            islands: vec![],
            bridges: BTreeMap::new(),
            candidates: vec![],
            solution: BTreeMap::new(),
            report: GenerationReport::default(),
        }
    }

    pub fn system(&self) -> &HexSystem {
        &self.system
    }

    pub fn rows(&self) -> usize {
        self.system.rows()
    }

    pub fn columns(&self) -> usize {
        self.system.columns()
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.system.index_of(coord).map(|index| &self.cells[index])
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.system.index_of(coord).map(|index| &mut self.cells[index])
    }

    pub fn is_island(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_island)
    }

    ///
    /// Island cells in creation order.
    ///
    pub fn islands(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.islands.iter().filter_map(|coord| self.cell(*coord))
    }

    pub fn island_coords(&self) -> &[Coord] {
        &self.islands
    }

    /// Bridges with weight 1 or 2.
    pub fn bridges(&self) -> impl Iterator<Item = &Bridge> + '_ {
        self.bridges.values()
    }

    pub fn bridge(&self, a: Coord, b: Coord) -> Option<&Bridge> {
        self.bridges.get(&BridgeKey::new(a, b))
    }

    pub fn candidates(&self) -> &[Bridge] {
        &self.candidates
    }

    ///
    /// Bridges the demands were computed from.
    ///
    pub fn solution(&self) -> impl Iterator<Item = &Bridge> + '_ {
        self.solution.values()
    }

    ///
    /// Turn an empty cell into an island.
    /// Returns `false` if the cell is outside the grid or already an island.
    ///
    pub(crate) fn promote(&mut self, coord: Coord) -> bool {
        match self.cell_mut(coord) {
            Some(cell) if cell.empty => {
                cell.empty = false;
                self.islands.push(coord);
                true
            }
            _ => false,
        }
    }

    ///
    /// Store `bridge` as placed, or remove it for weight 0.
    ///
    pub(crate) fn set_bridge(&mut self, bridge: Bridge) {
        debug_assert!(
            self.is_island(bridge.start) && self.is_island(bridge.end),
            "bridge {} - {} does not connect two islands",
            bridge.start,
            bridge.end
        );
        if bridge.weight == BridgeWeight::Empty {
            self.bridges.remove(&bridge.key());
        } else {
            self.bridges.insert(bridge.key(), bridge);
        }
    }

    pub fn clear_bridges(&mut self) {
        self.bridges.clear();
    }

    ///
    /// Nearest island from `from` in `direction`, skipping empty cells.
    ///
    pub fn first_non_empty_neighbor(&self, from: Coord, direction: Direction) -> Option<Coord> {
        let mut current = self.system.adjacent(from, direction)?;
        while self.cell(current)?.empty {
            current = self.system.adjacent(current, direction)?;
        }
        Some(current)
    }

    pub fn first_non_empty_neighbors(&self, from: Coord) -> Vec<Coord> {
        Direction::ALL
            .iter()
            .filter_map(|direction| self.first_non_empty_neighbor(from, *direction))
            .collect()
    }

    ///
    /// All bridges that could be drawn, each pair of islands once.
    ///
    pub(crate) fn enumerate_candidates(&self) -> Vec<Bridge> {
        let mut seen = HashSet::new();
        let mut candidates = vec![];
        for &island in &self.islands {
            for neighbor in self.first_non_empty_neighbors(island) {
                let bridge = Bridge::new(island, neighbor, BridgeWeight::Empty);
                if seen.insert(bridge.key()) {
                    candidates.push(bridge);
                }
            }
        }
        candidates
    }

    fn segment(&self, bridge: &Bridge) -> Option<(Vector2, Vector2)> {
        Some((self.cell(bridge.start)?.position, self.cell(bridge.end)?.position))
    }

    ///
    /// Whether `candidate` crosses any placed bridge it does not share an island with.
    ///
    pub fn would_cross(&self, candidate: &Bridge) -> bool {
        let Some((p1, q1)) = self.segment(candidate) else {
            return false;
        };
        let key = candidate.key();
        self.bridges.values().any(|other| {
            let other_key = other.key();
            if other_key == key || other_key.shares_endpoint(&key) {
                return false;
            }
            self.segment(other)
                .is_some_and(|(p2, q2)| intersects(p1, q1, p2, q2))
        })
    }

    ///
    /// Sum of the weights of placed bridges touching `coord`.
    ///
    pub fn incident_weight(&self, coord: Coord) -> u32 {
        self.bridges
            .values()
            .filter(|bridge| bridge.touches(coord))
            .map(|bridge| bridge.weight.count())
            .sum()
    }

    ///
    /// Display state of an island, computed from the placed bridges.
    ///
    pub fn cell_state(&self, coord: Coord) -> Option<CellState> {
        let cell = self.cell(coord).filter(|cell| cell.is_island())?;
        Some(CellState::derive(self.incident_weight(coord), cell.demand))
    }

    ///
    /// Every island has its demand and all islands are connected.
    ///
    pub fn is_solved(&self) -> bool {
        !self.islands.is_empty()
            && self
                .islands
                .iter()
                .all(|coord| self.cell_state(*coord) == Some(CellState::Full))
            && connects_all(&self.islands, self.bridges.values())
    }

    ///
    /// Handle a pointer-down at (`x`, `y`) in canvas coordinates.
    ///
    /// A hit on an island only previews its possible bridges. Otherwise the first
    /// bridge under the pointer gets its next weight, unless that would make it
    /// cross another bridge.
    ///
    pub fn toggle_pointer(&mut self, x: f64, y: f64) -> PointerOutcome {
        let point = Vector2::new(x, y);

        if let Some(island) = self.island_at(point) {
            let preview_lines = self.preview_lines(island);
            trace!("hover on island {island} with {} neighbors", preview_lines.len());
            return PointerOutcome::Hover {
                island,
                preview_lines,
            };
        }

        let Some(candidate) = self.candidate_at(point) else {
            trace!("pointer at ({x}, {y}) hit nothing");
            return PointerOutcome::Noop;
        };
        let current = self
            .bridges
            .get(&candidate.key())
            .map_or(BridgeWeight::Empty, |bridge| bridge.weight);
        let next = candidate.with_weight(current.cycle());
        if self.would_cross(&next) {
            debug!(
                "rejected bridge {} - {}: crosses a placed bridge",
                next.start, next.end
            );
            return PointerOutcome::Noop;
        }

        self.set_bridge(next);
        debug!(
            "bridge {} - {} now has weight {}",
            next.start,
            next.end,
            next.weight.count()
        );
        match self.bridge_view(&next) {
            Some(bridge) => PointerOutcome::Toggled { bridge },
            None => PointerOutcome::Noop,
        }
    }

    fn island_at(&self, point: Vector2) -> Option<Coord> {
        self.islands()
            .find(|cell| point.is_in_range_of_point(cell.position, cell.radius))
            .map(|cell| cell.coord)
    }

    fn candidate_at(&self, point: Vector2) -> Option<Bridge> {
        let threshold = self.options.line_hit_threshold;
        self.candidates
            .iter()
            .find(|bridge| {
                self.segment(bridge)
                    .is_some_and(|(a, b)| point.is_on_line(a, b, threshold))
            })
            .copied()
    }

    pub fn preview_lines(&self, island: Coord) -> Vec<PreviewLine> {
        let Some(from) = self.cell(island).map(|cell| cell.position) else {
            return vec![];
        };
        self.first_non_empty_neighbors(island)
            .into_iter()
            .filter_map(|neighbor| {
                Some(PreviewLine {
                    neighbor,
                    from,
                    to: self.cell(neighbor)?.position,
                })
            })
            .collect()
    }

    fn bridge_view(&self, bridge: &Bridge) -> Option<BridgeView> {
        let (from, to) = self.segment(bridge)?;
        Some(BridgeView {
            start: bridge.start,
            end: bridge.end,
            from,
            to,
            weight: bridge.weight.count(),
        })
    }

    pub fn island_views(&self) -> Vec<IslandView> {
        self.islands()
            .map(|cell| IslandView {
                coord: cell.coord,
                position: cell.position,
                radius: cell.radius,
                demand: cell.demand,
                state: CellState::derive(self.incident_weight(cell.coord), cell.demand),
            })
            .collect()
    }

    pub fn bridge_views(&self) -> Vec<BridgeView> {
        self.bridges
            .values()
            .filter_map(|bridge| self.bridge_view(bridge))
            .collect()
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        PuzzleSnapshot {
            rows: self.rows(),
            columns: self.columns(),
            islands: self.island_views(),
            bridges: self.bridge_views(),
            solved: self.is_solved(),
        }
    }

    ///
    /// Fix every island's demand to the weights of the currently placed bridges,
    /// keep those bridges as the solution and clear the board.
    ///
    pub(crate) fn freeze_demands(&mut self) -> u32 {
        let mut total = 0;
        for index in 0..self.islands.len() {
            let coord = self.islands[index];
            let demand = self.incident_weight(coord);
            if let Some(cell) = self.cell_mut(coord) {
                cell.demand = demand;
            }
            total += demand;
        }
        self.solution = std::mem::take(&mut self.bridges);
        total
    }

    pub(crate) fn set_candidates(&mut self, candidates: Vec<Bridge>) {
        self.candidates = candidates;
    }

    pub(crate) fn has_bridge(&self, key: &BridgeKey) -> bool {
        self.bridges.contains_key(key)
    }
}

///
/// Whether `bridges` connect every island in `islands` with each other.
///
pub fn connects_all<'a>(islands: &[Coord], bridges: impl IntoIterator<Item = &'a Bridge>) -> bool {
    let Some(&start) = islands.first() else {
        return true;
    };
    let bridges: Vec<&Bridge> = bridges.into_iter().collect();
    let mut reached = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(coord) = queue.pop_front() {
        for other in bridges.iter().filter_map(|bridge| bridge.other_end(coord)) {
            if reached.insert(other) {
                queue.push_back(other);
            }
        }
    }
    islands.iter().all(|coord| reached.contains(coord))
}
