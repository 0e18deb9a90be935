//! Progress hooks for planning runs.

use sw_core::{DroneId, Turn};

/// Receives notifications while [`FleetPlanner`][crate::FleetPlanner] works
/// through a fleet.
///
/// The planner itself is silent; binaries that want progress output hang it
/// on these hooks instead.  Each method has an empty default body, so an
/// implementation overrides only the events it cares about: `on_horizon`
/// fires once the graph size is known, `on_drone_routed` after each route is
/// committed, and `on_plan_done` when the whole fleet is scheduled.
///
/// ```rust,ignore
/// struct LandingLog;
///
/// impl PlanObserver for LandingLog {
///     fn on_drone_routed(&mut self, drone: DroneId, arrival: Turn) {
///         eprintln!("D{} down at {arrival}", drone.number());
///     }
/// }
/// ```
pub trait PlanObserver {
    /// The horizon is fixed; graph construction is about to begin.
    fn on_horizon(&mut self, _horizon: Turn) {}

    /// `drone`'s route has been found and its reservations committed.
    fn on_drone_routed(&mut self, _drone: DroneId, _arrival: Turn) {}

    /// Every drone is scheduled; `makespan` is the last arrival turn.
    fn on_plan_done(&mut self, _makespan: Turn) {}
}

/// Observer that swallows every event, for callers with no use for
/// progress reporting.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
