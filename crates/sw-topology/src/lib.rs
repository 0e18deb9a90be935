//! `sw-topology` — the static hub/connection map and its analysis.
//!
//! # Modules
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`hub`]      | `Hub`, `Link`                                            |
//! | [`topology`] | `Topology` (CSR adjacency), `TopologyBuilder`            |
//! | [`loader`]   | `load_topology_path`, `load_topology_reader` (JSON maps) |
//! | [`reach`]    | `has_path`, `min_entry_turns`, `horizon`                 |
//! | [`error`]    | `TopologyError`, `TopologyResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Turns on `sw-core/serde` for the embedded core types.       |

pub mod error;
pub mod hub;
pub mod loader;
pub mod reach;
pub mod topology;


pub use error::{TopologyError, TopologyResult};
pub use hub::{Hub, Link};
pub use loader::{load_topology_path, load_topology_reader};
pub use topology::{Topology, TopologyBuilder};
