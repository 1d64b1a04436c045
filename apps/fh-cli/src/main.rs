use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fh_core::ids::RoomId;
use fh_geometry::SegmentShape;
use fh_project::{Plan, PriceTable, RoomDef, room_params};
use fh_solver::{CircuitSolution, solve};
use fh_thermal::{FloorGrid, RunOptions, Termination, run_to_steady_state};
use uom::si::pressure::millibar;
use uom::si::volume_rate::liter_per_minute;

#[derive(Parser)]
#[command(name = "fh-cli")]
#[command(about = "floorheat CLI - underfloor heating sizing and simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate plan file syntax and structure
    Validate {
        /// Path to the plan YAML file
        plan_path: PathBuf,
    },
    /// List rooms in a plan
    Rooms {
        /// Path to the plan YAML file
        plan_path: PathBuf,
    },
    /// Size the heating circuit for a room
    Solve {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Room ID to solve for
        room_id: String,
        /// Emit the solution as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the floor temperature simulation for a room
    Simulate {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Room ID to simulate
        room_id: String,
        /// Grid cell size in meters
        #[arg(long, default_value_t = 0.1)]
        cell_size: f64,
        /// Time step in seconds
        #[arg(long, default_value_t = 1.0)]
        dt: f64,
        /// Step budget
        #[arg(long, default_value_t = 10_000)]
        max_steps: usize,
    },
    /// Export the steady-state temperature grid as CSV
    ExportHeatmap {
        /// Path to the plan YAML file
        plan_path: PathBuf,
        /// Room ID to simulate
        room_id: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Room not found: {id}")]
    RoomNotFound { id: String },

    #[error(transparent)]
    Plan(#[from] fh_project::PlanError),

    #[error(transparent)]
    Solve(#[from] fh_solver::SolveError),

    #[error(transparent)]
    Thermal(#[from] fh_thermal::ThermalError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { plan_path } => cmd_validate(&plan_path),
        Commands::Rooms { plan_path } => cmd_rooms(&plan_path),
        Commands::Solve {
            plan_path,
            room_id,
            json,
        } => cmd_solve(&plan_path, &room_id, json),
        Commands::Simulate {
            plan_path,
            room_id,
            cell_size,
            dt,
            max_steps,
        } => cmd_simulate(&plan_path, &room_id, cell_size, dt, max_steps),
        Commands::ExportHeatmap {
            plan_path,
            room_id,
            output,
        } => cmd_export_heatmap(&plan_path, &room_id, output.as_deref()),
    }
}

fn find_room<'a>(plan: &'a Plan, room_id: &str) -> CliResult<(usize, &'a RoomDef)> {
    plan.rooms
        .iter()
        .enumerate()
        .find(|(_, r)| r.id == room_id)
        .ok_or_else(|| CliError::RoomNotFound {
            id: room_id.to_string(),
        })
}

fn solve_room(plan: &Plan, room_id: &str) -> CliResult<(usize, CircuitSolution)> {
    let (index, room) = find_room(plan, room_id)?;
    let params = room_params(room);
    let prices = PriceTable::new(plan.prices.clone());
    let solution = solve(
        &params,
        RoomId::from_index(index as u32),
        &prices,
        plan.budget_eur,
    )?;
    Ok((index, solution))
}

fn cmd_validate(plan_path: &Path) -> CliResult<()> {
    println!("Validating plan: {}", plan_path.display());
    fh_project::load_yaml(plan_path)?;
    println!("✓ Plan is valid");
    Ok(())
}

fn cmd_rooms(plan_path: &Path) -> CliResult<()> {
    let plan = fh_project::load_yaml(plan_path)?;

    if plan.rooms.is_empty() {
        println!("No rooms found in plan");
    } else {
        println!("Rooms in plan '{}':", plan.name);
        for room in &plan.rooms {
            println!(
                "  {} - {} ({:.1} m², {:.0} W demand)",
                room.id, room.name, room.area_m2, room.heat_demand_w
            );
        }
    }
    Ok(())
}

fn cmd_solve(plan_path: &Path, room_id: &str, json: bool) -> CliResult<()> {
    let plan = fh_project::load_yaml(plan_path)?;
    let (_, room) = find_room(&plan, room_id)?;
    let room_name = room.name.clone();
    let demand_w = room.heat_demand_w;
    let (_, solution) = solve_room(&plan, room_id)?;

    if json {
        let dto = SolutionJson::from_solution(room_id, &solution);
        println!("{}", serde_json::to_string_pretty(&dto)?);
        return Ok(());
    }

    println!("Sizing circuit for room: {} ({})", room_id, room_name);
    println!(
        "  Pipe length:      {:.1} m  ({} segments)",
        solution.total_length.value,
        solution.circuit.segments.len()
    );
    println!(
        "  Flow rate:        {:.1} L/h",
        solution.flow_rate.get::<liter_per_minute>() * 60.0
    );
    println!(
        "  Pressure loss:    {:.1} mbar",
        solution.pressure_loss.get::<millibar>()
    );
    println!(
        "  Estimated output: {:.0} W  (required {:.0} W)",
        solution.estimated_output.value, demand_w
    );

    if solution.critical {
        println!("⚠ Pressure loss exceeds the pump limit (300 mbar); split the circuit");
    } else {
        println!("✓ Circuit within pump limits");
    }

    println!("\nCost breakdown:");
    for line in &solution.cost.lines {
        println!(
            "  {:<20} {:>8.2} {:<3} × {:>7.2} € = {:>8.2} €",
            line.material.as_str(),
            line.quantity,
            line.material.unit(),
            line.unit_price_eur,
            line.total_eur
        );
    }
    println!("  Total: {:.2} €", solution.cost.total_spent_eur);
    println!("  Remaining budget: {:.2} €", solution.cost.remaining_budget_eur);

    Ok(())
}

fn cmd_simulate(
    plan_path: &Path,
    room_id: &str,
    cell_size: f64,
    dt: f64,
    max_steps: usize,
) -> CliResult<()> {
    let plan = fh_project::load_yaml(plan_path)?;
    let (_, room) = find_room(&plan, room_id)?;
    let room = room.clone();
    let (_, solution) = solve_room(&plan, room_id)?;

    println!("Simulating floor for room: {}", room_id);
    let mut grid = heated_grid(&room, &solution, cell_size)?;
    println!(
        "  Grid: {} × {} cells ({:.2} m)",
        grid.cols(),
        grid.rows(),
        grid.cell_size_m()
    );

    let opts = RunOptions {
        dt,
        max_steps,
        ..Default::default()
    };
    let outcome = run_to_steady_state(&mut grid, &opts)?;

    match outcome.termination {
        Termination::Converged => println!(
            "✓ Converged after {} steps (max change {:.4} °C)",
            outcome.steps, outcome.last_max_change
        ),
        Termination::Exhausted => println!(
            "Step budget exhausted after {} steps (max change {:.4} °C)",
            outcome.steps, outcome.last_max_change
        ),
    }
    if grid.cfl_exceeded() {
        println!("⚠ Time step exceeds the explicit stability bound; results may oscillate");
    }

    println!(
        "  Average floor temperature: {:.1} °C",
        grid.average_temperature()
    );

    Ok(())
}

fn cmd_export_heatmap(plan_path: &Path, room_id: &str, output: Option<&Path>) -> CliResult<()> {
    let plan = fh_project::load_yaml(plan_path)?;
    let (_, room) = find_room(&plan, room_id)?;
    let room = room.clone();
    let (_, solution) = solve_room(&plan, room_id)?;

    let mut grid = heated_grid(&room, &solution, 0.1)?;
    run_to_steady_state(&mut grid, &RunOptions::default())?;
    let snapshot = grid.snapshot();

    let mut csv = String::new();
    for row in 0..snapshot.nrows() {
        let cells: Vec<String> = (0..snapshot.ncols())
            .map(|col| format!("{:.2}", snapshot[(row, col)]))
            .collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} × {} heatmap to {}",
            snapshot.nrows(),
            snapshot.ncols(),
            path.display()
        );
    } else {
        print!("{}", csv);
        io::stdout().flush()?;
    }

    Ok(())
}

/// Build a floor grid for the room with heat sources along the straight
/// pipe runs, pinned at the mean water temperature.
fn heated_grid(
    room: &RoomDef,
    solution: &CircuitSolution,
    cell_size: f64,
) -> CliResult<FloorGrid> {
    let params = room_params(room);
    let mut grid = FloorGrid::new(
        params.room_width.value,
        params.room_length.value,
        cell_size,
        room.outside_temp_c,
    )?;

    let mean_water_c = (room.supply_temp_c + room.return_temp_c) / 2.0;
    for segment in &solution.circuit.segments {
        if segment.shape != SegmentShape::Straight {
            continue;
        }
        let samples = (segment.length().value / cell_size).ceil().max(1.0) as usize;
        for i in 0..=samples {
            let p = segment.start.lerp(segment.end, i as f64 / samples as f64);
            grid.add_heat_source(p.x, p.y, mean_water_c);
        }
    }

    Ok(grid)
}

#[derive(serde::Serialize)]
struct SolutionJson {
    room_id: String,
    total_length_m: f64,
    segment_count: usize,
    flow_rate_l_h: f64,
    pressure_loss_mbar: f64,
    critical: bool,
    estimated_output_w: f64,
    cost: CostJson,
}

#[derive(serde::Serialize)]
struct CostJson {
    lines: Vec<CostLineJson>,
    total_spent_eur: f64,
    remaining_budget_eur: f64,
}

#[derive(serde::Serialize)]
struct CostLineJson {
    material: String,
    quantity: f64,
    unit: String,
    unit_price_eur: f64,
    total_eur: f64,
}

impl SolutionJson {
    fn from_solution(room_id: &str, solution: &CircuitSolution) -> Self {
        Self {
            room_id: room_id.to_string(),
            total_length_m: solution.total_length.value,
            segment_count: solution.circuit.segments.len(),
            flow_rate_l_h: solution.flow_rate.get::<liter_per_minute>() * 60.0,
            pressure_loss_mbar: solution.pressure_loss.get::<millibar>(),
            critical: solution.critical,
            estimated_output_w: solution.estimated_output.value,
            cost: CostJson {
                lines: solution
                    .cost
                    .lines
                    .iter()
                    .map(|l| CostLineJson {
                        material: l.material.as_str().to_string(),
                        quantity: l.quantity,
                        unit: l.material.unit().to_string(),
                        unit_price_eur: l.unit_price_eur,
                        total_eur: l.total_eur,
                    })
                    .collect(),
                total_spent_eur: solution.cost.total_spent_eur,
                remaining_budget_eur: solution.cost.remaining_budget_eur,
            },
        }
    }
}
