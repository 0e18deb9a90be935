//! Per-edge, per-turn reservation accounting.
//!
//! # Interval accounting
//!
//! A move into a RESTRICTED hub holds its link for *two* consecutive turns:
//! a drone entering the edge at `t` is airborne on it during `t` and `t+1`.
//! Every query and every reservation therefore quantifies over the full
//! interval `[source_turn, source_turn + duration)` — checking the entry
//! turn alone would let a second drone slip onto a full link mid-flight.
//!
//! Counters are sparse: a `(edge, turn)` pair absent from the map means no
//! drone holds that slot.  The map is only ever queried by key, never
//! iterated, so its ordering cannot leak into any output.

use rustc_hash::FxHashMap;

use sw_core::{TimeEdgeId, Turn};

use crate::graph::TimeGraph;
use crate::{GraphError, GraphResult};

/// Tracks how many committed routes hold each edge at each turn.
#[derive(Default)]
pub struct ReservationTracker {
    edge_use: FxHashMap<(TimeEdgeId, Turn), u32>,
}

impl ReservationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drones currently committed to `edge` during `turn`.
    #[inline]
    pub fn occupied(&self, edge: TimeEdgeId, turn: Turn) -> u32 {
        self.edge_use.get(&(edge, turn)).copied().unwrap_or(0)
    }

    /// `true` iff `edge` has spare capacity on *every* turn it would consume.
    pub fn edge_traversable(&self, graph: &TimeGraph, edge: TimeEdgeId) -> bool {
        let entry = graph.turn_of(graph.source(edge));
        (0..graph.duration(edge))
            .all(|i| self.occupied(edge, entry.offset(i)) < graph.capacity(edge))
    }

    /// Commit one drone to `edge` for every turn it consumes.
    ///
    /// Fails if any slot in the interval is already at capacity; the planner
    /// only reserves edges the pathfinder found traversable, so a failure
    /// here is an engine bug surfaced with the offending edge and turn.
    pub fn reserve_edge(&mut self, graph: &TimeGraph, edge: TimeEdgeId) -> GraphResult<()> {
        let entry = graph.turn_of(graph.source(edge));
        let capacity = graph.capacity(edge);

        for i in 0..graph.duration(edge) {
            let turn = entry.offset(i);
            if self.occupied(edge, turn) >= capacity {
                return Err(GraphError::EdgeCapacityExceeded { edge, turn, capacity });
            }
        }
        for i in 0..graph.duration(edge) {
            *self.edge_use.entry((edge, entry.offset(i))).or_insert(0) += 1;
        }
        Ok(())
    }
}
