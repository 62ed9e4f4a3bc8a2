//! Random walk puzzle generation.
//!
//! The walk starts in the center of the grid and steps to a directly adjacent
//! cell in a random direction, bridging every step. The walk is a valid
//! solution, so every generated puzzle can be solved.

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::grid::PuzzleGrid;
use crate::hashi::{Bridge, BridgeWeight};
use crate::hex::{CoordinateSystem, Direction};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub requested_islands: usize,
    /// Islands actually created, including the start.
    pub placed_islands: usize,
    /// Walk steps dropped because they led off the grid.
    pub skipped_steps: usize,
    pub walk_bridges: usize,
    pub seeded_bridges: usize,
}

fn random_weight<R: Rng>(rng: &mut R) -> BridgeWeight {
    let count = rng.random_range(1..=BridgeWeight::max_count());
    BridgeWeight::from_count(count).unwrap_or(BridgeWeight::Single)
}

///
/// Walk `steps` times from the center. A step off the grid is dropped, not retried.
///
pub(crate) fn random_walk<R: Rng>(grid: &mut PuzzleGrid, steps: usize, rng: &mut R) -> usize {
    let mut current = grid.system().center();
    grid.promote(current);

    let mut skipped = 0;
    for _ in 0..steps {
        let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let Some(next) = grid.system().adjacent(current, direction) else {
            skipped += 1;
            continue;
        };
        grid.promote(next);
        grid.set_bridge(Bridge::new(current, next, random_weight(rng)));
        current = next;
    }
    skipped
}

///
/// Place random weights on a third of the unused candidates, as long as they
/// do not cross anything placed before.
///
pub(crate) fn seed_extra_bridges<R: Rng>(grid: &mut PuzzleGrid, rng: &mut R) -> usize {
    let unused: Vec<Bridge> = grid
        .candidates()
        .iter()
        .filter(|bridge| !grid.has_bridge(&bridge.key()))
        .map(|bridge| bridge.with_weight(random_weight(rng)))
        .collect();

    let mut seeded = 0;
    for bridge in unused.iter().take(unused.len() / 3) {
        if !grid.would_cross(bridge) {
            grid.set_bridge(*bridge);
            seeded += 1;
        }
    }
    seeded
}

pub(crate) fn generate<R: Rng>(grid: &mut PuzzleGrid, rng: &mut R) -> GenerationReport {
    let requested_islands = grid.options().island_count;
    let skipped_steps = random_walk(grid, requested_islands, rng);
    let walk_bridges = grid.bridges().count();
    if skipped_steps > 0 {
        debug!("random walk dropped {skipped_steps} of {requested_islands} steps at the border");
    }

    let candidates = grid.enumerate_candidates();
    grid.set_candidates(candidates);
    debug!(
        "{} islands, {} candidate bridges",
        grid.island_coords().len(),
        grid.candidates().len()
    );

    let seeded_bridges = if grid.options().seed_extra_bridges {
        seed_extra_bridges(grid, rng)
    } else {
        0
    };

    let total_demand = grid.freeze_demands();
    debug!(
        "generated {} islands from {walk_bridges} walk and {seeded_bridges} seeded bridges, total demand {total_demand}",
        grid.island_coords().len()
    );

    GenerationReport {
        requested_islands,
        placed_islands: grid.island_coords().len(),
        skipped_steps,
        walk_bridges,
        seeded_bridges,
    }
}
