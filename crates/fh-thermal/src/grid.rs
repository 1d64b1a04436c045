//! Double-buffered temperature grid with explicit diffusion steps.

use crate::error::{ThermalError, ThermalResult};
use nalgebra::DMatrix;

/// Ambient fill temperature in °C.
pub const AMBIENT_C: f64 = 20.0;

/// Thermal diffusivity of the concrete screed, m²/s.
pub const DIFFUSIVITY_M2_S: f64 = 1.0e-4;

/// Thermal transmittance of the envelope, W/(m²·K). 1950s wall construction.
pub const WALL_U_VALUE: f64 = 1.4;

/// Empirical per-step scaling of the boundary loss rule.
pub const BOUNDARY_LOSS_COEFF: f64 = 0.01;

/// Stability bound on r = α·dt/dx² for the explicit scheme.
pub const CFL_LIMIT: f64 = 0.25;

/// A grid cell pinned to a fixed temperature at the start of every step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeatSource {
    pub row: usize,
    pub col: usize,
    pub temp_c: f64,
}

/// Instantaneous temperature field over the floor, in °C.
///
/// Coordinates map x across the room width (columns) and y along the room
/// length (rows). The grid owns both buffers; `step` mutates them in place
/// and `snapshot` hands out an independent copy.
#[derive(Clone, Debug)]
pub struct FloorGrid {
    rows: usize,
    cols: usize,
    cell_size_m: f64,
    outside_c: f64,
    current: DMatrix<f64>,
    next: DMatrix<f64>,
    sources: Vec<HeatSource>,
    cfl_exceeded: bool,
}

impl FloorGrid {
    /// Build a grid covering `width_m` × `height_m`, both buffers filled
    /// with the ambient default.
    pub fn new(width_m: f64, height_m: f64, cell_size_m: f64, outside_c: f64) -> ThermalResult<Self> {
        if width_m <= 0.0 || height_m <= 0.0 {
            return Err(ThermalError::InvalidArg {
                what: "room dimensions must be positive",
            });
        }
        if cell_size_m <= 0.0 {
            return Err(ThermalError::InvalidArg {
                what: "cell_size_m must be positive",
            });
        }

        let rows = (height_m / cell_size_m).ceil() as usize;
        let cols = (width_m / cell_size_m).ceil() as usize;

        Ok(Self {
            rows,
            cols,
            cell_size_m,
            outside_c,
            current: DMatrix::from_element(rows, cols, AMBIENT_C),
            next: DMatrix::from_element(rows, cols, AMBIENT_C),
            sources: Vec::new(),
            cfl_exceeded: false,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size_m(&self) -> f64 {
        self.cell_size_m
    }

    /// Whether any step so far violated the stability bound.
    pub fn cfl_exceeded(&self) -> bool {
        self.cfl_exceeded
    }

    fn cell_at(&self, x_m: f64, y_m: f64) -> Option<(usize, usize)> {
        if x_m < 0.0 || y_m < 0.0 {
            return None;
        }
        let col = (x_m / self.cell_size_m).floor() as usize;
        let row = (y_m / self.cell_size_m).floor() as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Pin the cell under (x, y) to a fixed temperature each step.
    /// Out-of-range coordinates are silently ignored.
    pub fn add_heat_source(&mut self, x_m: f64, y_m: f64, temp_c: f64) {
        if let Some((row, col)) = self.cell_at(x_m, y_m) {
            self.sources.push(HeatSource { row, col, temp_c });
        }
    }

    /// Advance the field by one explicit step of size `dt_s` seconds.
    ///
    /// A step with r = α·dt/dx² above the stability bound still executes;
    /// the violation is logged once and latched on `cfl_exceeded`.
    pub fn step(&mut self, dt_s: f64) {
        let dx = self.cell_size_m;
        let r = DIFFUSIVITY_M2_S * dt_s / (dx * dx);
        if r > CFL_LIMIT && !self.cfl_exceeded {
            self.cfl_exceeded = true;
            tracing::warn!(
                r,
                limit = CFL_LIMIT,
                "explicit diffusion step exceeds stability bound"
            );
        }

        for src in &self.sources {
            self.current[(src.row, src.col)] = src.temp_c;
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let t = self.current[(row, col)];
                let on_ring =
                    row == 0 || col == 0 || row + 1 == self.rows || col + 1 == self.cols;
                self.next[(row, col)] = if on_ring {
                    // linear loss through the envelope
                    t - WALL_U_VALUE * (t - self.outside_c) * BOUNDARY_LOSS_COEFF
                } else {
                    let laplacian = self.current[(row - 1, col)]
                        + self.current[(row + 1, col)]
                        + self.current[(row, col - 1)]
                        + self.current[(row, col + 1)]
                        - 4.0 * t;
                    t + r * laplacian
                };
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Mean temperature over the whole field.
    pub fn average_temperature(&self) -> f64 {
        self.current.mean()
    }

    /// Temperature of the cell under (x, y); ambient for out-of-range
    /// coordinates, never an error.
    pub fn temperature_at(&self, x_m: f64, y_m: f64) -> f64 {
        match self.cell_at(x_m, y_m) {
            Some((row, col)) => self.current[(row, col)],
            None => AMBIENT_C,
        }
    }

    /// Deep copy of the current field for external rendering. Changes to
    /// the copy never feed back into the simulation.
    pub fn snapshot(&self) -> DMatrix<f64> {
        self.current.clone()
    }

    /// Largest absolute per-cell difference against an earlier snapshot.
    pub fn max_abs_diff(&self, reference: &DMatrix<f64>) -> f64 {
        (&self.current - reference).amax()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_round_up_to_cover_the_room() {
        let grid = FloorGrid::new(3.5, 3.7, 1.0, 0.0).unwrap();
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 4);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(FloorGrid::new(0.0, 3.0, 0.1, 0.0).is_err());
        assert!(FloorGrid::new(3.0, -1.0, 0.1, 0.0).is_err());
        assert!(FloorGrid::new(3.0, 3.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn starts_at_ambient_everywhere() {
        let grid = FloorGrid::new(2.0, 2.0, 0.1, AMBIENT_C).unwrap();
        assert_eq!(grid.average_temperature(), AMBIENT_C);
        assert_eq!(grid.temperature_at(1.0, 1.0), AMBIENT_C);
    }

    #[test]
    fn out_of_range_sources_are_ignored() {
        let mut grid = FloorGrid::new(2.0, 2.0, 0.1, AMBIENT_C).unwrap();
        grid.add_heat_source(-0.5, 1.0, 50.0);
        grid.add_heat_source(1.0, 5.0, 50.0);
        grid.step(1.0);
        // nothing was pinned, outside matches ambient: steady no-op
        assert_eq!(grid.average_temperature(), AMBIENT_C);
    }

    #[test]
    fn heat_source_warms_its_neighbors() {
        let mut grid = FloorGrid::new(2.0, 2.0, 0.1, AMBIENT_C).unwrap();
        grid.add_heat_source(1.0, 1.0, 50.0);
        grid.step(1.0);
        assert!(grid.temperature_at(1.1, 1.0) > AMBIENT_C);
        assert!(grid.temperature_at(1.0, 1.1) > AMBIENT_C);
    }

    #[test]
    fn boundary_ring_cools_toward_outside() {
        let mut grid = FloorGrid::new(2.0, 2.0, 0.1, 0.0).unwrap();
        grid.step(1.0);
        // 20 - 1.4 * (20 - 0) * 0.01 = 19.72
        assert!((grid.temperature_at(0.05, 0.05) - 19.72).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_query_returns_ambient() {
        let mut grid = FloorGrid::new(2.0, 2.0, 0.1, 0.0).unwrap();
        grid.add_heat_source(1.0, 1.0, 50.0);
        for _ in 0..10 {
            grid.step(1.0);
        }
        assert_eq!(grid.temperature_at(-1.0, 1.0), AMBIENT_C);
        assert_eq!(grid.temperature_at(1.0, 99.0), AMBIENT_C);
    }

    #[test]
    fn snapshot_is_independent_of_the_grid() {
        let mut grid = FloorGrid::new(2.0, 2.0, 0.1, AMBIENT_C).unwrap();
        let mut snap = grid.snapshot();
        snap[(0, 0)] = 999.0;
        assert_eq!(grid.temperature_at(0.05, 0.05), AMBIENT_C);

        // and the grid stepping does not disturb an earlier snapshot
        let snap2 = grid.snapshot();
        grid.add_heat_source(1.0, 1.0, 50.0);
        grid.step(1.0);
        assert_eq!(snap2[(10, 10)], AMBIENT_C);
    }

    #[test]
    fn cfl_violation_latches_but_does_not_stop_the_step() {
        let mut grid = FloorGrid::new(2.0, 2.0, 0.1, AMBIENT_C).unwrap();
        assert!(!grid.cfl_exceeded());
        grid.step(1.0); // r = 0.01, stable
        assert!(!grid.cfl_exceeded());
        grid.step(50.0); // r = 0.5, beyond the bound
        assert!(grid.cfl_exceeded());
    }
}
