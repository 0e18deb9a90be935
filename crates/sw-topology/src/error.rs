//! Map validation and parsing failures.

use thiserror::Error;

use sw_core::{GridPoint, HubId};

/// Everything that can be wrong with a map before routing even starts.
///
/// Variants name the offending hub or link so the operator can fix the map
/// file without guessing.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("hub name {0:?} must be non-empty, without whitespace or '-'")]
    BadHubName(String),

    #[error("duplicate hub {0:?}")]
    DuplicateHub(String),

    #[error("hubs {name:?} and {other:?} share coordinates {pos}")]
    CoordinateClash {
        name:  String,
        other: String,
        pos:   GridPoint,
    },

    #[error("hub {0:?} must allow at least one drone")]
    ZeroHubCapacity(String),

    #[error("link endpoint {0} does not exist")]
    UnknownHub(HubId),

    #[error("hub {0:?} cannot be linked to itself")]
    SelfLink(String),

    #[error("duplicate link between {a:?} and {b:?}")]
    DuplicateLink { a: String, b: String },

    #[error("link between {a:?} and {b:?} must carry at least one drone")]
    ZeroLinkCapacity { a: String, b: String },

    #[error("map declares no start hub")]
    MissingStart,

    #[error("map declares no end hub")]
    MissingEnd,

    #[error("map declares more than one start hub ({first:?} and {second:?})")]
    DuplicateStart { first: String, second: String },

    #[error("map declares more than one end hub ({first:?} and {second:?})")]
    DuplicateEnd { first: String, second: String },

    #[error("terminal hub {0:?} cannot be blocked")]
    BlockedTerminal(String),

    #[error("terminal hub {name:?} holds {max_drones} drones but the fleet has {nb_drones}")]
    TerminalCapacity {
        name:       String,
        max_drones: u32,
        nb_drones:  u16,
    },

    #[error("fleet must contain at least one drone")]
    NoDrones,

    #[error("map parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TopologyResult<T> = Result<T, TopologyError>;
