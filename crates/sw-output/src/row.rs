//! Flat row types derived from a completed plan.
//!
//! Rows are the machine-readable counterpart of the transcript: one
//! [`MovementRow`] per route step (waits included, unlike the transcript)
//! and one [`DroneRow`] per drone.  Derivation rebuilds the routing graph
//! from the plan's horizon, which is cheap and reproduces the exact node
//! handles the routes were committed against.

use sw_graph::TimeGraph;
use sw_route::FleetPlan;
use sw_topology::Topology;

/// One route step of one drone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    /// Turn the step begins.
    pub turn: u32,
    /// 1-based drone number.
    pub drone: u32,
    pub from: String,
    pub to: String,
    /// `move`, `restricted`, or `wait`.
    pub kind: &'static str,
}

/// Per-drone summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroneRow {
    /// 1-based drone number.
    pub drone: u32,
    pub arrival_turn: u32,
    /// Edges traversed, waits included.
    pub steps: u32,
    /// Distinct PRIORITY hubs entered.
    pub priority_hubs: u32,
}

/// Expand a plan into movement and summary rows, both in drone-id order.
pub fn build_rows(topo: &Topology, plan: &FleetPlan) -> (Vec<MovementRow>, Vec<DroneRow>) {
    let graph = TimeGraph::build(topo, plan.horizon);

    let mut movements = Vec::new();
    let mut drones = Vec::with_capacity(plan.routes.len());

    for route in &plan.routes {
        let number = route.drone.number();
        for pair in route.nodes.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            let from = topo.hub(graph.hub_of(u)).name.clone();
            let to   = topo.hub(graph.hub_of(v)).name.clone();
            let kind = if graph.slot_of(u) == graph.slot_of(v) {
                "wait"
            } else if graph.turn_of(v) - graph.turn_of(u) == 2 {
                "restricted"
            } else {
                "move"
            };
            movements.push(MovementRow {
                turn: graph.turn_of(u).0,
                drone: number,
                from,
                to,
                kind,
            });
        }
        drones.push(DroneRow {
            drone: number,
            arrival_turn: route.arrival(&graph).0,
            steps: route.step_count() as u32,
            priority_hubs: route.priority_entries(&graph),
        });
    }

    (movements, drones)
}
