//! Committed per-drone routes.

use sw_core::{DroneId, TimeNodeId, Turn};
use sw_graph::TimeGraph;

/// One drone's committed path through the time-expanded graph, from
/// `(START, 0)` to `(END, arrival)`.
///
/// Turns along `nodes` are strictly monotonic and every consecutive pair is
/// connected by a graph edge.  Written once by the planner, never revised.
#[derive(Debug, Clone)]
pub struct DroneRoute {
    pub drone: DroneId,
    pub nodes: Vec<TimeNodeId>,
}

impl DroneRoute {
    /// The turn this drone reaches the destination.
    pub fn arrival(&self, graph: &TimeGraph) -> Turn {
        self.nodes.last().map_or(Turn::ZERO, |&n| graph.turn_of(n))
    }

    /// Number of edges traversed, waits included.
    pub fn step_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Distinct moves into PRIORITY hubs along this route (waits at a
    /// PRIORITY hub do not recount it).
    pub fn priority_entries(&self, graph: &TimeGraph) -> u32 {
        self.nodes
            .windows(2)
            .filter(|pair| {
                graph.slot_of(pair[0]) != graph.slot_of(pair[1]) && graph.is_priority(pair[1])
            })
            .count() as u32
    }
}
