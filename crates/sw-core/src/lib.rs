//! `sw-core` — foundational types for the `rust_swarm` drone routing engine.
//!
//! Everything here is a leaf: the other `sw-*` crates all depend on this
//! one, and this one depends on nothing of ours.  External dependencies are
//! kept to `thiserror` plus an opt-in `serde`.
//!
//! # Contents
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `HubId`, `LinkId`, `TimeNodeId`, `TimeEdgeId`, `DroneId`  |
//! | [`turn`]    | `Turn` — the discrete fleet clock                         |
//! | [`zone`]    | `Zone`, `HubRole`                                         |
//! | [`grid`]    | `GridPoint`                                               |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the public types.     |

pub mod error;
pub mod grid;
pub mod ids;
pub mod turn;
pub mod zone;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::GridPoint;
pub use ids::{DroneId, HubId, LinkId, TimeEdgeId, TimeNodeId};
pub use turn::Turn;
pub use zone::{HubRole, Zone};
