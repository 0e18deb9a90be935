//! Planning failures.

use thiserror::Error;

use sw_core::DroneId;
use sw_graph::GraphError;

/// Ways a planning run can end without a plan.
#[derive(Debug, Error)]
pub enum RouteError {
    /// END cannot be reached from START even ignoring every capacity.
    #[error("no route from {start:?} to {end:?}: the hubs are not connected")]
    Unreachable { start: String, end: String },

    /// The pathfinder exhausted its frontier.  The horizon is sized so this
    /// cannot happen on a validated topology; reaching it means the input
    /// bypassed validation.
    #[error("drone D{} has no feasible route", .drone.number())]
    NoFeasibleRoute { drone: DroneId },

    /// A reservation invariant broke while committing a route.
    #[error("reservation failed: {0}")]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
