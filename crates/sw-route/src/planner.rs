//! Sequential fleet planning.
//!
//! # Planning pipeline
//!
//! ```text
//! Topology ──▶ reachability gate ──▶ horizon ──▶ TimeGraph
//!                                                    │
//!                  for each drone, in id order:      ▼
//!                    ① pathfind against current reservations
//!                    ② reserve the route (edges + hub occupancy)
//!                    ③ record it — never revisited
//!                                                    │
//!                                                    ▼
//!                                          transcript lines
//! ```
//!
//! The horizon (`minimum travel + nb_drones - 1`) guarantees step ① always
//! succeeds on a validated topology, so there is no retry loop: one pass
//! over the fleet produces the final plan.  Later drones see earlier
//! reservations, which is exactly the mutation discipline the graph
//! documents — occupancy and edge counters change only in step ②.

use sw_core::{DroneId, Turn};
use sw_graph::{ReservationTracker, TimeGraph};
use sw_topology::{Topology, reach};

use crate::observer::{NoopObserver, PlanObserver};
use crate::route::DroneRoute;
use crate::{RouteError, RouteResult, pathfinder, transcript};

// ── FleetPlan ─────────────────────────────────────────────────────────────────

/// The completed output of one planning run.
#[derive(Debug)]
pub struct FleetPlan {
    /// One route per drone, in drone-id order.
    pub routes: Vec<DroneRoute>,

    /// Turn-by-turn movement lines (see [`transcript`]).
    pub transcript: Vec<String>,

    /// Last turn represented in the routing graph.
    pub horizon: Turn,

    /// Arrival turn of the last drone.
    pub makespan: Turn,
}

// ── FleetPlanner ──────────────────────────────────────────────────────────────

/// Routes an entire fleet through a validated [`Topology`].
pub struct FleetPlanner;

impl FleetPlanner {
    /// Plan the whole fleet without progress callbacks.
    pub fn plan(topo: &Topology) -> RouteResult<FleetPlan> {
        Self::plan_observed(topo, &mut NoopObserver)
    }

    /// Plan the whole fleet, reporting progress to `observer`.
    pub fn plan_observed<O: PlanObserver>(
        topo: &Topology,
        observer: &mut O,
    ) -> RouteResult<FleetPlan> {
        if !reach::has_path(topo) {
            return Err(Self::unreachable(topo));
        }
        // has_path passed, so the minimum is finite.
        let Some(horizon) = reach::horizon(topo) else {
            return Err(Self::unreachable(topo));
        };
        observer.on_horizon(horizon);

        let mut graph = TimeGraph::build(topo, horizon);
        let mut tracker = ReservationTracker::new();

        let mut routes = Vec::with_capacity(usize::from(topo.nb_drones));
        for d in 0..topo.nb_drones {
            let drone = DroneId(d);
            let route = pathfinder::shortest_route(&graph, &tracker, drone)?;
            Self::reserve_route(&mut graph, &mut tracker, &route)?;
            observer.on_drone_routed(drone, route.arrival(&graph));
            routes.push(route);
        }

        let makespan = routes
            .iter()
            .map(|r| r.arrival(&graph))
            .max()
            .unwrap_or(Turn::ZERO);
        let transcript = transcript::emit(topo, &graph, &routes);
        observer.on_plan_done(makespan);

        Ok(FleetPlan { routes, transcript, horizon, makespan })
    }

    /// Commit a freshly accepted route: every edge over its full turn
    /// interval, and every node except the pre-loaded start.
    fn reserve_route(
        graph: &mut TimeGraph,
        tracker: &mut ReservationTracker,
        route: &DroneRoute,
    ) -> RouteResult<()> {
        for pair in route.nodes.windows(2) {
            let edge = graph.find_edge(pair[0], pair[1])?;
            tracker.reserve_edge(graph, edge)?;
        }
        let start = graph.start_node();
        for &node in &route.nodes {
            if node != start {
                graph.enter(node)?;
            }
        }
        Ok(())
    }

    fn unreachable(topo: &Topology) -> RouteError {
        RouteError::Unreachable {
            start: topo.hub(topo.start).name.clone(),
            end:   topo.hub(topo.end).name.clone(),
        }
    }
}
