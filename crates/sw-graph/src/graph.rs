//! Time-expanded routing graph.
//!
//! # Data layout
//!
//! The graph lifts a [`Topology`] into `(hub, turn)` nodes for every
//! non-blocked hub and every turn in `[0, H]`, where `H` is the routing
//! horizon.  Non-blocked hubs get dense *slot* indices in topology order, and
//! node handles are plain arithmetic:
//!
//! ```text
//! TimeNodeId = slot * (H + 1) + turn
//! ```
//!
//! so no `(hub, turn) → node` map is needed and all per-node state lives in
//! flat `Vec`s indexed by handle.
//!
//! Edges reuse the compressed-sparse-row idea from the hub adjacency one
//! level down: `node_out_start[n]` and `node_out_start[n + 1]` bracket node
//! `n`'s block in the edge arrays.  Generation walks nodes in ascending
//! handle order and, within a node, emits move edges in hub-adjacency order
//! followed by the wait edge — which pins the relaxation order of every
//! later search.
//!
//! # Edge kinds
//!
//! | Kind | Endpoints               | Duration                  | Capacity          |
//! |------|-------------------------|---------------------------|-------------------|
//! | move | `a@t → b@(t+dur)`       | `zone(b).entry_turns()`   | link capacity     |
//! | wait | `h@t → h@(t+1)`         | 1                         | hub `max_drones`  |
//!
//! No edge is emitted whose arrival turn would cross the horizon.
//!
//! # Mutability
//!
//! Structure is immutable after [`TimeGraph::build`]; only the per-node
//! `occupancy` counters change, and only through [`TimeGraph::enter`] while a
//! freshly accepted route is being reserved.

use sw_core::{HubId, HubRole, TimeEdgeId, TimeNodeId, Turn, Zone};
use sw_topology::Topology;

use crate::{GraphError, GraphResult};

/// The time-expanded graph for one routing run.
///
/// Array fields are `pub` so the pathfinder can subscript them freely;
/// [`TimeGraph::build`] is the only intended constructor.
pub struct TimeGraph {
    /// Last represented turn (the routing horizon `H`).
    pub horizon: Turn,

    // ── Slot data (one entry per non-blocked hub, topology order) ─────────
    /// Topology hub behind each slot.
    pub slot_hub: Vec<HubId>,

    /// Zone of each slot's hub.
    pub slot_zone: Vec<Zone>,

    /// Role of each slot's hub.
    pub slot_role: Vec<HubRole>,

    /// Simultaneity capacity (`max_drones`) of each slot's hub.
    pub slot_capacity: Vec<u32>,

    // ── Node data (indexed by TimeNodeId) ─────────────────────────────────
    /// Drones committed to be present at each node after all reservations
    /// so far.  `start_node()` begins at the fleet size; everything else 0.
    pub occupancy: Vec<u32>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// Row offsets into the edge arrays: node `n` owns edges
    /// `node_out_start[n]` up to `node_out_start[n + 1]`.  One entry per
    /// node plus a final end-of-array sentinel.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.  Recoverable from the row offsets, but
    /// stored flat because the reservation interval (`turn_of(source)`) and
    /// route reconstruction both read it per edge.
    pub edge_source: Vec<TimeNodeId>,

    /// Target node of each edge.
    pub edge_target: Vec<TimeNodeId>,

    /// Turns consumed by each edge: 1, or 2 for a move into RESTRICTED.
    pub edge_duration: Vec<u32>,

    /// Simultaneity capacity of each edge.
    pub edge_capacity: Vec<u32>,

    /// Dense slot of each topology hub; `u32::MAX` marks a blocked hub.
    hub_slot: Vec<u32>,

    start_slot: u32,
}

impl TimeGraph {
    /// Materialize the graph for `topo` up to and including turn `horizon`.
    ///
    /// Blocked hubs are filtered out entirely: they own no slot, no nodes,
    /// and no edge touches them.
    pub fn build(topo: &Topology, horizon: Turn) -> Self {
        // ── Slot assignment (topology order, blocked filtered) ────────────
        let mut slot_hub      = Vec::new();
        let mut slot_zone     = Vec::new();
        let mut slot_role     = Vec::new();
        let mut slot_capacity = Vec::new();
        let mut hub_slot      = vec![u32::MAX; topo.hub_count()];

        for (i, hub) in topo.hubs.iter().enumerate() {
            if hub.is_blocked() {
                continue;
            }
            hub_slot[i] = slot_hub.len() as u32;
            slot_hub.push(HubId(i as u32));
            slot_zone.push(hub.zone);
            slot_role.push(hub.role);
            slot_capacity.push(hub.max_drones);
        }

        let turns_per_slot = horizon.0 + 1;
        let node_count = slot_hub.len() * turns_per_slot as usize;

        // ── Node and edge materialization (ascending node order) ──────────
        let mut occupancy = vec![0u32; node_count];

        let mut node_out_start = Vec::with_capacity(node_count + 1);
        let mut edge_source    = Vec::new();
        let mut edge_target    = Vec::new();
        let mut edge_duration  = Vec::new();
        let mut edge_capacity  = Vec::new();

        node_out_start.push(0);
        for slot in 0..slot_hub.len() {
            let hub = slot_hub[slot];
            for t in 0..turns_per_slot {
                let node = TimeNodeId(slot as u32 * turns_per_slot + t);

                // Move edges, in hub-adjacency (link insertion) order.
                for (neighbor, link) in topo.out_links(hub) {
                    let target_slot = hub_slot[neighbor.index()];
                    if target_slot == u32::MAX {
                        continue; // blocked neighbor
                    }
                    let duration = topo.hub(neighbor).zone.entry_turns();
                    let arrival = t + duration;
                    if arrival > horizon.0 {
                        continue;
                    }
                    edge_source.push(node);
                    edge_target.push(TimeNodeId(target_slot * turns_per_slot + arrival));
                    edge_duration.push(duration);
                    edge_capacity.push(topo.link(link).capacity);
                }

                // Wait edge.
                if t < horizon.0 {
                    edge_source.push(node);
                    edge_target.push(TimeNodeId(node.0 + 1));
                    edge_duration.push(1);
                    edge_capacity.push(slot_capacity[slot]);
                }

                node_out_start.push(edge_source.len() as u32);
            }
        }

        let start_slot = hub_slot[topo.start.index()];
        // All drones are parked at the start hub before the first turn.
        occupancy[(start_slot * turns_per_slot) as usize] = u32::from(topo.nb_drones);

        Self {
            horizon,
            slot_hub,
            slot_zone,
            slot_role,
            slot_capacity,
            occupancy,
            node_out_start,
            edge_source,
            edge_target,
            edge_duration,
            edge_capacity,
            hub_slot,
            start_slot,
        }
    }

    // ── Sizes ─────────────────────────────────────────────────────────────

    pub fn slot_count(&self) -> usize {
        self.slot_hub.len()
    }

    pub fn node_count(&self) -> usize {
        self.occupancy.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_target.len()
    }

    // ── Node handles ──────────────────────────────────────────────────────

    /// The `(START, 0)` node every route begins at.
    #[inline]
    pub fn start_node(&self) -> TimeNodeId {
        TimeNodeId(self.start_slot * (self.horizon.0 + 1))
    }

    /// Node handle for `(slot, turn)`.
    #[inline]
    pub fn node_at(&self, slot: u32, turn: Turn) -> TimeNodeId {
        debug_assert!(turn <= self.horizon);
        TimeNodeId(slot * (self.horizon.0 + 1) + turn.0)
    }

    /// Dense slot of `hub`, or `None` for blocked hubs.
    #[inline]
    pub fn slot_of_hub(&self, hub: HubId) -> Option<u32> {
        match self.hub_slot[hub.index()] {
            u32::MAX => None,
            slot => Some(slot),
        }
    }

    #[inline]
    pub fn slot_of(&self, node: TimeNodeId) -> u32 {
        node.0 / (self.horizon.0 + 1)
    }

    #[inline]
    pub fn turn_of(&self, node: TimeNodeId) -> Turn {
        Turn(node.0 % (self.horizon.0 + 1))
    }

    #[inline]
    pub fn hub_of(&self, node: TimeNodeId) -> HubId {
        self.slot_hub[self.slot_of(node) as usize]
    }

    // ── Node flags ────────────────────────────────────────────────────────

    /// `true` if entering this node counts toward the surveillance objective.
    #[inline]
    pub fn is_priority(&self, node: TimeNodeId) -> bool {
        self.slot_zone[self.slot_of(node) as usize] == Zone::Priority
    }

    /// `true` if this node's hub is the fleet destination.
    #[inline]
    pub fn is_end(&self, node: TimeNodeId) -> bool {
        self.slot_role[self.slot_of(node) as usize] == HubRole::End
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    #[inline]
    pub fn occupancy(&self, node: TimeNodeId) -> u32 {
        self.occupancy[node.index()]
    }

    /// `true` iff one more drone fits at `node`.
    ///
    /// The start node at turn 0 is pre-loaded with the whole fleet and is
    /// exempt from this check; callers apply the exemption (the pathfinder
    /// never relaxes *into* turn 0, and the planner never reserves it).
    #[inline]
    pub fn can_enter(&self, node: TimeNodeId) -> bool {
        self.occupancy[node.index()] < self.slot_capacity[self.slot_of(node) as usize]
    }

    /// Commit one drone to be present at `node`.
    pub fn enter(&mut self, node: TimeNodeId) -> GraphResult<()> {
        let capacity = self.slot_capacity[self.slot_of(node) as usize];
        if self.occupancy[node.index()] >= capacity {
            return Err(GraphError::HubCapacityExceeded { node, capacity });
        }
        self.occupancy[node.index()] += 1;
        Ok(())
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// The edges leaving `node`, in generation order.
    ///
    /// Yields handles straight out of the CSR block; nothing is allocated.
    #[inline]
    pub fn out_edges(&self, node: TimeNodeId) -> impl Iterator<Item = TimeEdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| TimeEdgeId(i as u32))
    }

    #[inline]
    pub fn source(&self, edge: TimeEdgeId) -> TimeNodeId {
        self.edge_source[edge.index()]
    }

    #[inline]
    pub fn target(&self, edge: TimeEdgeId) -> TimeNodeId {
        self.edge_target[edge.index()]
    }

    #[inline]
    pub fn duration(&self, edge: TimeEdgeId) -> u32 {
        self.edge_duration[edge.index()]
    }

    #[inline]
    pub fn capacity(&self, edge: TimeEdgeId) -> u32 {
        self.edge_capacity[edge.index()]
    }

    /// `true` for an edge that parks the drone at its current hub.
    #[inline]
    pub fn is_wait(&self, edge: TimeEdgeId) -> bool {
        self.slot_of(self.source(edge)) == self.slot_of(self.target(edge))
    }

    /// Locate the edge connecting two consecutive route nodes.
    pub fn find_edge(&self, from: TimeNodeId, to: TimeNodeId) -> GraphResult<TimeEdgeId> {
        self.out_edges(from)
            .find(|&e| self.target(e) == to)
            .ok_or(GraphError::NoSuchEdge { from, to })
    }
}
