//! `swroute` — route a drone fleet across a hub map.
//!
//! Reads a JSON map file, plans the whole fleet, and prints the turn-by-turn
//! movement transcript to stdout.  Progress goes to stderr so the transcript
//! stays pipeable.  Exits 0 on success and 1 on any failure (unreadable or
//! invalid map, unreachable destination).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sw_core::{DroneId, Turn};
use sw_output::{CsvWriter, PlanWriter, build_rows};
use sw_route::{FleetPlanner, PlanObserver};
use sw_topology::load_topology_path;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "swroute", about = "Route a drone fleet across a hub map")]
struct Cli {
    /// Path to the JSON map file.
    map: PathBuf,

    /// Also write movements.csv, drones.csv, and schedule.txt here.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Suppress the progress report on stderr.
    #[arg(long)]
    quiet: bool,
}

// ── Progress reporting ────────────────────────────────────────────────────────

struct StderrProgress;

impl PlanObserver for StderrProgress {
    fn on_horizon(&mut self, horizon: Turn) {
        eprintln!("routing horizon: {horizon}");
    }

    fn on_drone_routed(&mut self, drone: DroneId, arrival: Turn) {
        eprintln!("D{} lands at {arrival}", drone.number());
    }

    fn on_plan_done(&mut self, makespan: Turn) {
        eprintln!("fleet delivered by {makespan}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let topo = load_topology_path(&cli.map)
        .with_context(|| format!("failed to load map {}", cli.map.display()))?;

    let plan = if cli.quiet {
        FleetPlanner::plan(&topo)?
    } else {
        FleetPlanner::plan_observed(&topo, &mut StderrProgress)?
    };

    for line in &plan.transcript {
        println!("{line}");
    }

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let (movements, drones) = build_rows(&topo, &plan);
        let mut writer = CsvWriter::new(dir)?;
        writer.write_movements(&movements)?;
        writer.write_drones(&drones)?;
        writer.finish()?;
        sw_output::write_transcript_file(dir, &plan.transcript)?;
    }

    Ok(())
}
