//! Steady-state runner over a floor grid.

use crate::error::{ThermalError, ThermalResult};
use crate::grid::FloorGrid;

/// Options for a steady-state run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Maximum number of steps (step budget)
    pub max_steps: usize,
    /// Convergence check interval, in steps
    pub check_every: usize,
    /// Per-cell convergence tolerance (°C per step)
    pub tol_c: f64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dt: 1.0,
            max_steps: 10_000,
            check_every: 100,
            tol_c: 0.01,
        }
    }
}

/// How a run ended. Exhausting the step budget is a normal termination
/// mode, distinct from convergence for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Converged,
    Exhausted,
}

/// Result of a steady-state run.
#[derive(Clone, Copy, Debug)]
pub struct RunOutcome {
    pub termination: Termination,
    /// Steps actually taken
    pub steps: usize,
    /// Max per-cell change at the last convergence check; infinite if the
    /// budget ran out before the first check
    pub last_max_change: f64,
}

/// Step the grid until the field stops changing or the budget runs out.
pub fn run_to_steady_state(grid: &mut FloorGrid, opts: &RunOptions) -> ThermalResult<RunOutcome> {
    if opts.dt <= 0.0 {
        return Err(ThermalError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.max_steps == 0 {
        return Err(ThermalError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.check_every == 0 {
        return Err(ThermalError::InvalidArg {
            what: "check_every must be positive",
        });
    }
    if opts.tol_c <= 0.0 {
        return Err(ThermalError::InvalidArg {
            what: "tol_c must be positive",
        });
    }

    let mut last_max_change = f64::INFINITY;
    let mut steps = 0;

    while steps < opts.max_steps {
        if (steps + 1) % opts.check_every == 0 {
            let before = grid.snapshot();
            grid.step(opts.dt);
            steps += 1;
            last_max_change = grid.max_abs_diff(&before);
            if last_max_change < opts.tol_c {
                return Ok(RunOutcome {
                    termination: Termination::Converged,
                    steps,
                    last_max_change,
                });
            }
        } else {
            grid.step(opts.dt);
            steps += 1;
        }
    }

    Ok(RunOutcome {
        termination: Termination::Exhausted,
        steps,
        last_max_change,
    })
}
