//! End-to-end runs over the channel network.
//!
//! Every test here spawns real worker threads, so anything that depends on
//! message ordering or the boundary exchange is exercised for real.

use lifegrid_engine::step_grid;
use lifegrid_simulation::{random_grid, SimulationRunner};
use lifegrid_test_helpers::{grid_from_ascii, patterns};
use lifegrid_types::{Grid, SimulationParams};

fn run(initial: &Grid, iterations: u64, workers: usize) -> (Grid, u64) {
    let params = SimulationParams::new(initial.rows(), initial.cols(), iterations, workers);
    let report = SimulationRunner::new(params, initial.clone())
        .unwrap()
        .run()
        .unwrap();
    (report.final_grid, report.alive_cells)
}

/// Sequential reference: evolve the whole grid on one thread.
fn reference(initial: &Grid, iterations: u64) -> Grid {
    (0..iterations).fold(initial.clone(), |grid, _| step_grid(&grid))
}

#[test]
fn test_fixed_seed_same_result_for_any_worker_count() {
    let base = SimulationParams::new(96, 100, 10, 1);
    let runner = SimulationRunner::seeded(base, 42, 0.5).unwrap();
    let expected = runner.run().unwrap();

    for workers in [2, 4, 8] {
        let report = runner.with_workers(workers).unwrap().run().unwrap();
        assert_eq!(report.alive_cells, expected.alive_cells, "workers = {workers}");
        assert_eq!(report.final_grid, expected.final_grid, "workers = {workers}");
    }
}

#[test]
fn test_matches_sequential_reference() {
    let initial = random_grid(12, 15, 7, 0.35).unwrap();
    let expected = reference(&initial, 25);

    for workers in 1..=6 {
        let (grid, alive) = run(&initial, 25, workers);
        assert_eq!(grid, expected, "workers = {workers}");
        assert_eq!(alive, expected.alive_count());
    }
}

#[test]
fn test_uneven_partition() {
    // 3 workers over 10 rows: the last rank owns rows 6..=9.
    let initial = random_grid(10, 10, 11, 0.5).unwrap();
    let expected = reference(&initial, 12);

    let params = SimulationParams::new(10, 10, 12, 3);
    let report = SimulationRunner::new(params, initial).unwrap().run().unwrap();

    assert_eq!(report.final_grid, expected);
    assert_eq!(report.workers[2].band.len(), 4);
}

#[test]
fn test_one_row_per_worker() {
    let initial = random_grid(6, 9, 5, 0.5).unwrap();
    let expected = reference(&initial, 8);

    let (grid, _) = run(&initial, 8, 6);
    assert_eq!(grid, expected);
}

#[test]
fn test_glider_crosses_band_boundaries() {
    let initial = patterns::glider(16, 16, 0, 0);

    // Four workers own four rows each; a glider moves one row every four
    // generations, so after 32 steps it has crossed two band edges.
    let (grid, alive) = run(&initial, 32, 4);
    assert_eq!(grid, patterns::glider(16, 16, 8, 8));
    assert_eq!(alive, 5);
}

#[test]
fn test_static_patterns_unchanged() {
    let empty = Grid::new(8, 8);
    let block = patterns::block(8, 8, 3, 3);

    for workers in [1, 2, 4] {
        assert_eq!(run(&empty, 5, workers), (empty.clone(), 0));
        assert_eq!(run(&block, 5, workers), (block.clone(), 4));
    }
}

#[test]
fn test_block_single_worker_ten_steps() {
    let initial = grid_from_ascii(&["....", ".##.", ".##.", "...."]);
    let (grid, alive) = run(&initial, 10, 1);
    assert_eq!(grid, initial);
    assert_eq!(alive, 4);
}

#[test]
fn test_isolated_cell_dies() {
    let initial = patterns::single_cell(6, 6, 2, 3);
    for workers in [1, 2, 3] {
        assert_eq!(run(&initial, 1, workers).1, 0, "workers = {workers}");
    }
}

#[test]
fn test_bottom_row_never_wraps_to_top() {
    // Blinker on the last row. Counting is clamped, so row 0 stays dead even
    // though the boundary exchange links row 5 with row 0.
    let initial = patterns::blinker(6, 5, 5, 2);
    let expected = Grid::with_alive(6, 5, &[(4, 2), (5, 2)]);

    for workers in [1, 2, 3] {
        let (grid, alive) = run(&initial, 1, workers);
        assert_eq!(grid, expected, "workers = {workers}");
        assert_eq!(alive, 2);
        assert!(grid.row(0).iter().all(|c| !c.is_alive()));
    }
}

#[test]
fn test_zero_iterations_returns_initial_grid() {
    let initial = random_grid(8, 8, 1, 0.5).unwrap();
    let (grid, alive) = run(&initial, 0, 4);
    assert_eq!(grid, initial);
    assert_eq!(alive, initial.alive_count());
}
