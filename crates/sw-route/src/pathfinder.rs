//! Lexicographic Dijkstra over the time-expanded graph.
//!
//! # Objective
//!
//! A partial path is ranked by [`PathCost`]: fewest turns first, and among
//! equal-turn paths the one entering *more* PRIORITY hubs wins.  Every edge
//! strictly increases the primary component (durations are 1 or 2), so the
//! classic Dijkstra argument carries over to the lexicographic order: the
//! first time a node is settled, its recorded cost is optimal.
//!
//! # Determinism
//!
//! Heap entries carry a push-time insertion counter as the final key, so
//! equal-cost entries pop in push order on every run.  Node handles are
//! never compared structurally.
//!
//! # Capacity awareness
//!
//! The search is a read-only consumer of the reservation state: an edge
//! already full on any turn of its interval, or a target hub already at
//! capacity, is simply not relaxed.  The start node is exempt from the
//! occupancy check — it is pre-loaded with the whole fleet by construction
//! and no edge re-enters turn 0 anyway.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use sw_core::{DroneId, TimeEdgeId, TimeNodeId};
use sw_graph::{ReservationTracker, TimeGraph};

use crate::route::DroneRoute;
use crate::{RouteError, RouteResult};

// ── PathCost ──────────────────────────────────────────────────────────────────

/// Lexicographic route cost: turns ascending, then PRIORITY entries
/// descending.
///
/// `Ord` is a total order with "less is better" semantics, so it can drive
/// both the min-heap (via `Reverse`) and plain `<` improvement checks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PathCost {
    pub turns:    u32,
    pub priority: u32,
}

impl PathCost {
    pub const ZERO: PathCost = PathCost { turns: 0, priority: 0 };
}

impl Ord for PathCost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.turns
            .cmp(&other.turns)
            .then_with(|| other.priority.cmp(&self.priority))
    }
}

impl PartialOrd for PathCost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Find the best currently-feasible route for `drone` from `(START, 0)` to
/// the earliest reachable END node.
///
/// Reads but never mutates `graph` occupancy and `tracker` state.
pub fn shortest_route(
    graph: &TimeGraph,
    tracker: &ReservationTracker,
    drone: DroneId,
) -> RouteResult<DroneRoute> {
    let n = graph.node_count();
    // Cheapest cost recorded per node so far; None until first reached.
    let mut best: Vec<Option<PathCost>> = vec![None; n];
    // Edge each node was best reached through, INVALID until first reached.
    let mut prev = vec![TimeEdgeId::INVALID; n];
    let mut settled = vec![false; n];

    let start = graph.start_node();
    best[start.index()] = Some(PathCost::ZERO);

    // Min-heap on (cost, seq, node); seq is the insertion counter that makes
    // equal-cost pops deterministic.
    let mut seq: u64 = 0;
    let mut heap: BinaryHeap<Reverse<(PathCost, u64, TimeNodeId)>> = BinaryHeap::new();
    heap.push(Reverse((PathCost::ZERO, seq, start)));

    while let Some(Reverse((cost, _, node))) = heap.pop() {
        if settled[node.index()] {
            continue; // superseded heap entry
        }
        settled[node.index()] = true;

        if graph.is_end(node) {
            return Ok(reconstruct(graph, &prev, node, drone));
        }

        for edge in graph.out_edges(node) {
            let target = graph.target(edge);
            if settled[target.index()] {
                continue;
            }
            if !tracker.edge_traversable(graph, edge) {
                continue;
            }
            if target != start && !graph.can_enter(target) {
                continue;
            }

            let candidate = PathCost {
                turns:    cost.turns + graph.duration(edge),
                priority: cost.priority + u32::from(graph.is_priority(target)),
            };
            let improves = match best[target.index()] {
                None => true,
                Some(recorded) => candidate < recorded,
            };
            if improves {
                best[target.index()] = Some(candidate);
                prev[target.index()] = edge;
                seq += 1;
                heap.push(Reverse((candidate, seq, target)));
            }
        }
    }

    Err(RouteError::NoFeasibleRoute { drone })
}

/// Trace the predecessor edges back from `end` and return the node sequence
/// in travel order.
fn reconstruct(
    graph: &TimeGraph,
    prev: &[TimeEdgeId],
    end: TimeNodeId,
    drone: DroneId,
) -> DroneRoute {
    let mut nodes = vec![end];
    let mut cursor = end;
    loop {
        let edge = prev[cursor.index()];
        if edge == TimeEdgeId::INVALID {
            break;
        }
        cursor = graph.source(edge);
        nodes.push(cursor);
    }
    nodes.reverse();
    DroneRoute { drone, nodes }
}
