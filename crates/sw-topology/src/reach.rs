//! Reachability check and horizon estimation.
//!
//! Both operations work on the [`Topology`] alone, before any time expansion:
//!
//! - [`has_path`] answers "is END reachable at all?" ignoring capacities, so
//!   callers can fail early with a clear diagnostic.
//! - [`min_entry_turns`] is the capacity-blind lower bound on a single
//!   drone's travel time, counting two turns for every RESTRICTED hub
//!   entered.
//! - [`horizon`] turns that bound into the last turn the routing graph must
//!   represent: even a one-drone-wide bottleneck lets the fleet trickle
//!   through one per turn, so `min + (nb_drones - 1)` always suffices and
//!   the planner never needs a retry loop.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use sw_core::{HubId, Turn};

use crate::Topology;

/// `true` iff END is reachable from START over non-blocked hubs, ignoring
/// all capacities.
pub fn has_path(topo: &Topology) -> bool {
    let mut visited = vec![false; topo.hub_count()];
    let mut queue = VecDeque::new();

    visited[topo.start.index()] = true;
    queue.push_back(topo.start);

    while let Some(hub) = queue.pop_front() {
        if hub == topo.end {
            return true;
        }
        for (neighbor, _) in topo.out_links(hub) {
            if visited[neighbor.index()] || topo.hub(neighbor).is_blocked() {
                continue;
            }
            visited[neighbor.index()] = true;
            queue.push_back(neighbor);
        }
    }
    false
}

/// Minimum turns a single unobstructed drone needs from START to END, or
/// `None` if END is unreachable.
///
/// Dijkstra over hubs where entering hub `h` costs `h.zone.entry_turns()`
/// (1, or 2 for RESTRICTED); the START hub contributes 0.
pub fn min_entry_turns(topo: &Topology) -> Option<u32> {
    let n = topo.hub_count();
    // Cheapest arrival found so far, per hub.
    let mut dist = vec![u32::MAX; n];
    dist[topo.start.index()] = 0;

    // BinaryHeap is a max-heap, so entries go in wrapped in Reverse; the
    // HubId in the tuple keeps equal-cost pops in a fixed order.
    let mut heap: BinaryHeap<Reverse<(u32, HubId)>> = BinaryHeap::new();
    heap.push(Reverse((0, topo.start)));

    while let Some(Reverse((cost, hub))) = heap.pop() {
        if hub == topo.end {
            return Some(cost);
        }

        // A cheaper entry for this hub was already processed.
        if cost > dist[hub.index()] {
            continue;
        }

        for (neighbor, _) in topo.out_links(hub) {
            let target = topo.hub(neighbor);
            if target.is_blocked() {
                continue;
            }
            let new_cost = cost + target.zone.entry_turns();
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }
    None
}

/// The last turn the time-expanded graph must represent:
/// `min_entry_turns + (nb_drones - 1)`.
///
/// `None` if END is unreachable.
pub fn horizon(topo: &Topology) -> Option<Turn> {
    min_entry_turns(topo).map(|min| Turn(min + u32::from(topo.nb_drones) - 1))
}
