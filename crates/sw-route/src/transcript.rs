//! Turn-by-turn movement transcript.
//!
//! # Record format
//!
//! One line per turn in which at least one drone moves; records within a
//! line are space-separated and ordered by ascending drone id.
//!
//! | Record                 | Meaning                                        |
//! |------------------------|------------------------------------------------|
//! | `D3-relay`             | drone 3 arrives at `relay` this turn           |
//! | `D3-base-relay`        | drone 3 is crossing into RESTRICTED `relay`    |
//!
//! A RESTRICTED crossing consumes two turns and its record appears on
//! *both* of them, so a reader always sees where an airborne drone is.
//! Waiting emits nothing; turns in which every undelivered drone waits
//! produce no line at all.

use sw_graph::TimeGraph;
use sw_topology::Topology;

use crate::route::DroneRoute;

/// Render the committed routes as transcript lines.
///
/// Routes must be ordered by drone id (the planner emits them that way);
/// each drone contributes at most one record per turn because its route
/// turns are strictly monotonic.
pub fn emit(topo: &Topology, graph: &TimeGraph, routes: &[DroneRoute]) -> Vec<String> {
    let last_arrival = routes
        .iter()
        .map(|r| r.arrival(graph).0)
        .max()
        .unwrap_or(0);

    // One record bucket per turn; drone-id order falls out of iterating the
    // routes in id order.
    let mut turns: Vec<Vec<String>> = vec![Vec::new(); last_arrival as usize];

    for route in routes {
        let id = route.drone.number();
        for pair in route.nodes.windows(2) {
            let (u, v) = (pair[0], pair[1]);
            if graph.slot_of(u) == graph.slot_of(v) {
                continue; // waiting in place
            }
            let entry = graph.turn_of(u).0 as usize;
            let dst = &topo.hub(graph.hub_of(v)).name;
            if graph.turn_of(v) - graph.turn_of(u) == 2 {
                let src = &topo.hub(graph.hub_of(u)).name;
                turns[entry].push(format!("D{id}-{src}-{dst}"));
                turns[entry + 1].push(format!("D{id}-{src}-{dst}"));
            } else {
                turns[entry].push(format!("D{id}-{dst}"));
            }
        }
    }

    turns
        .into_iter()
        .filter(|records| !records.is_empty())
        .map(|records| records.join(" "))
        .collect()
}
