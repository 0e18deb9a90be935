//! Reservation invariant failures.

use thiserror::Error;

use sw_core::{TimeEdgeId, TimeNodeId, Turn};

/// Capacity bookkeeping gone wrong.
///
/// Every variant here signals a broken reservation invariant: the planner
/// only reserves routes the pathfinder found traversable, so hitting one of
/// these at runtime means a bug, not bad input.  The offending node/edge and
/// turn are named so the diagnostic is actionable.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge {edge} already carries its maximum of {capacity} drones at {turn}")]
    EdgeCapacityExceeded {
        edge:     TimeEdgeId,
        turn:     Turn,
        capacity: u32,
    },

    #[error("node {node} already holds its maximum of {capacity} drones")]
    HubCapacityExceeded {
        node:     TimeNodeId,
        capacity: u32,
    },

    #[error("no edge links {from} to {to}")]
    NoSuchEdge {
        from: TimeNodeId,
        to:   TimeNodeId,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
