//! Integration tests for the floor grid simulator.

use fh_thermal::{FloorGrid, RunOptions, Termination, run_to_steady_state};

#[test]
fn heated_floor_reaches_a_warm_steady_state() {
    let mut grid = FloorGrid::new(2.0, 2.0, 0.1, 5.0).unwrap();
    // a short row of pipe cells near the middle of the room
    for i in 0..8 {
        grid.add_heat_source(0.6 + 0.1 * i as f64, 1.0, 32.5);
    }

    let opts = RunOptions {
        max_steps: 50_000,
        ..Default::default()
    };
    let outcome = run_to_steady_state(&mut grid, &opts).unwrap();

    assert_eq!(outcome.termination, Termination::Converged);
    assert!(outcome.last_max_change < opts.tol_c);
    assert!(!grid.cfl_exceeded());

    // warmer than the cold outside, cooler than the water
    let avg = grid.average_temperature();
    assert!(avg > 5.0, "avg = {avg}");
    assert!(avg < 32.5, "avg = {avg}");

    // the pipe row stays pinned near the water temperature
    assert!((grid.temperature_at(1.0, 1.0) - 32.5).abs() < 1.0);

    // temperature falls off toward the walls
    let near = grid.temperature_at(1.0, 1.1);
    let far = grid.temperature_at(1.0, 1.9);
    assert!(near > far, "near = {near}, far = {far}");
}

#[test]
fn snapshot_matches_query_view() {
    let mut grid = FloorGrid::new(1.0, 1.5, 0.25, 10.0).unwrap();
    grid.add_heat_source(0.5, 0.75, 40.0);
    for _ in 0..200 {
        grid.step(1.0);
    }

    let snap = grid.snapshot();
    assert_eq!(snap.nrows(), grid.rows());
    assert_eq!(snap.ncols(), grid.cols());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let x = (col as f64 + 0.5) * grid.cell_size_m();
            let y = (row as f64 + 0.5) * grid.cell_size_m();
            assert_eq!(snap[(row, col)], grid.temperature_at(x, y));
        }
    }
}
