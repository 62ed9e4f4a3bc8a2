use std::collections::HashSet;

use hexbridges_logic::geometry::intersects;
use hexbridges_logic::grid::connects_all;
use hexbridges_logic::{
    BridgeWeight, CoordinateSystem, Direction, GridOptions, HexSystem, PointerOutcome, PuzzleGrid,
};
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn generate(seed: u64, island_count: usize, seed_extra_bridges: bool, width: f64, height: f64) -> PuzzleGrid {
    let options = GridOptions {
        island_count,
        seed_extra_bridges,
        ..GridOptions::default()
    }
    .with_seed(seed);
    PuzzleGrid::new(width, height, options).unwrap()
}

///
/// Placed bridges must not cross unless they meet at an island.
///
fn assert_no_crossings(grid: &PuzzleGrid, bridges: &[hexbridges_logic::Bridge]) {
    for (index, a) in bridges.iter().enumerate() {
        for b in &bridges[index + 1..] {
            if a.key().shares_endpoint(&b.key()) {
                continue;
            }
            let position = |coord| grid.cell(coord).unwrap().position;
            assert!(
                !intersects(position(a.start), position(a.end), position(b.start), position(b.end)),
                "{} - {} crosses {} - {}",
                a.start,
                a.end,
                b.start,
                b.end
            );
        }
    }
}

fn canvas() -> impl Strategy<Value = (f64, f64)> {
    (200.0f64..900.0, 150.0f64..700.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adjacency_is_symmetric(rows in 1usize..15, columns in 1usize..15) {
        let system = HexSystem::new(rows, columns);
        for coord in system.coords() {
            for direction in Direction::ALL {
                if let Some(next) = system.adjacent(coord, direction) {
                    prop_assert!(system.contains(next));
                    prop_assert_eq!(system.adjacent(next, direction.opposite()), Some(coord));
                }
            }
        }
    }

    #[test]
    fn candidates_are_unique_and_mutual(
        seed in any::<u64>(),
        island_count in 1usize..40,
        (width, height) in canvas(),
    ) {
        let grid = generate(seed, island_count, true, width, height);
        let mut keys = HashSet::new();
        for candidate in grid.candidates() {
            prop_assert!(keys.insert(candidate.key()));
            prop_assert_eq!(candidate.weight, BridgeWeight::Empty);
            prop_assert!(grid.first_non_empty_neighbors(candidate.start).contains(&candidate.end));
            prop_assert!(grid.first_non_empty_neighbors(candidate.end).contains(&candidate.start));
        }
        for bridge in grid.solution() {
            prop_assert!(keys.contains(&bridge.key()));
        }
    }

    #[test]
    fn walk_connects_all_islands(
        seed in any::<u64>(),
        island_count in 1usize..60,
        (width, height) in canvas(),
    ) {
        let grid = generate(seed, island_count, false, width, height);
        prop_assert_eq!(grid.report().seeded_bridges, 0);
        prop_assert!(grid.report().placed_islands <= island_count + 1);
        prop_assert!(connects_all(grid.island_coords(), grid.solution()));
    }

    #[test]
    fn demand_is_twice_the_solution_weight(
        seed in any::<u64>(),
        island_count in 1usize..60,
        seed_extra_bridges in any::<bool>(),
        (width, height) in canvas(),
    ) {
        let grid = generate(seed, island_count, seed_extra_bridges, width, height);
        let demand: u32 = grid.islands().map(|cell| cell.demand).sum();
        let weight: u32 = grid.solution().map(|bridge| bridge.weight.count()).sum();
        prop_assert_eq!(demand, 2 * weight);
        prop_assert_eq!(grid.bridges().count(), 0);

        let solution: Vec<_> = grid.solution().copied().collect();
        assert_no_crossings(&grid, &solution);
        prop_assert!(connects_all(grid.island_coords(), &solution));
    }

    #[test]
    fn clicks_keep_the_board_consistent(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0.0f64..600.0, 0.0f64..450.0), 1..80),
    ) {
        init_logger();
        let mut grid = generate(seed, 30, true, 600.0, 450.0);
        for (x, y) in clicks {
            let before: Vec<_> = grid.bridges().map(|bridge| (bridge.key(), bridge.weight)).collect();
            let outcome = grid.toggle_pointer(x, y);
            let after: Vec<_> = grid.bridges().map(|bridge| (bridge.key(), bridge.weight)).collect();
            match outcome {
                PointerOutcome::Hover { .. } | PointerOutcome::Noop => prop_assert_eq!(before, after),
                PointerOutcome::Toggled { bridge } => {
                    prop_assert!(grid.is_island(bridge.start) && grid.is_island(bridge.end));
                }
            }
            prop_assert!(grid.bridges().all(|bridge| bridge.weight != BridgeWeight::Empty));
            let placed: Vec<_> = grid.bridges().copied().collect();
            assert_no_crossings(&grid, &placed);
        }
    }

    #[test]
    fn island_centers_only_hover(seed in any::<u64>(), repeats in 1usize..4) {
        let mut grid = generate(seed, 25, true, 500.0, 400.0);
        let centers: Vec<_> = grid.islands().map(|cell| cell.position).collect();
        for _ in 0..repeats {
            for center in &centers {
                let outcome = grid.toggle_pointer(center.x, center.y);
                let hover = matches!(outcome, PointerOutcome::Hover { .. });
                prop_assert!(hover, "click at ({}, {}) was not a hover", center.x, center.y);
            }
        }
        prop_assert_eq!(grid.bridges().count(), 0);
    }
}
