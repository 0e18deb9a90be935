//! convoy — smallest end-to-end example for the rust_swarm routing engine.
//!
//! Routes a 3-drone convoy across a 6-hub map that exercises every zone
//! kind: a restricted corridor, a priority surveillance detour, and a
//! blocked hub that must be flown around.

use std::io::Cursor;

use anyhow::Result;

use sw_graph::TimeGraph;
use sw_route::FleetPlanner;
use sw_topology::load_topology_reader;

// ── Embedded map ──────────────────────────────────────────────────────────────

// Two routes from base to depot: north through the restricted canyon, south
// through the priority ridge.  The old quarry is blocked outright.
const MAP_JSON: &str = r#"{
    "nb_drones": 3,
    "hubs": [
        { "name": "base",   "role": "start", "x": 0, "y": 0, "max_drones": 3 },
        { "name": "canyon", "zone": "restricted", "x": 2, "y": 2 },
        { "name": "ridge",  "zone": "priority",   "x": 2, "y": -2 },
        { "name": "quarry", "zone": "blocked",    "x": 3, "y": 0 },
        { "name": "pass",   "x": 4, "y": -1, "max_drones": 2 },
        { "name": "depot",  "role": "end", "x": 6, "y": 0, "max_drones": 3 }
    ],
    "links": [
        { "a": "base",   "b": "canyon" },
        { "a": "base",   "b": "ridge",  "capacity": 2 },
        { "a": "base",   "b": "quarry", "capacity": 3 },
        { "a": "quarry", "b": "depot",  "capacity": 3 },
        { "a": "canyon", "b": "depot" },
        { "a": "ridge",  "b": "pass",   "capacity": 2 },
        { "a": "pass",   "b": "depot",  "capacity": 2 }
    ]
}"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== convoy — rust_swarm fleet routing ===");
    println!();

    // 1. Load the embedded map.
    let topo = load_topology_reader(Cursor::new(MAP_JSON))?;
    println!(
        "Map: {} hubs, {} links, {} drones",
        topo.hub_count(),
        topo.link_count(),
        topo.nb_drones
    );

    // 2. Plan the fleet.
    let plan = FleetPlanner::plan(&topo)?;
    println!(
        "Horizon {} — fleet delivered by {}",
        plan.horizon, plan.makespan
    );
    println!();

    // 3. Movement transcript.
    println!("Schedule:");
    for line in &plan.transcript {
        println!("  {line}");
    }
    println!();

    // 4. Per-drone summary table.
    let graph = TimeGraph::build(&topo, plan.horizon);
    println!("{:<8} {:<10} {:<8} {:<14}", "Drone", "Arrival", "Steps", "Priority hubs");
    println!("{}", "-".repeat(42));
    for route in &plan.routes {
        println!(
            "{:<8} {:<10} {:<8} {:<14}",
            format!("D{}", route.drone.number()),
            route.arrival(&graph).to_string(),
            route.step_count(),
            route.priority_entries(&graph),
        );
    }

    Ok(())
}
