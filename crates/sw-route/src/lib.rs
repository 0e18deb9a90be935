//! `sw-route` — sequential capacity-aware fleet routing.
//!
//! # Modules
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`pathfinder`] | `PathCost`, `shortest_route` (lexicographic Dijkstra)  |
//! | [`planner`]    | `FleetPlanner`, `FleetPlan`                            |
//! | [`route`]      | `DroneRoute`                                           |
//! | [`transcript`] | transcript line rendering                              |
//! | [`observer`]   | `PlanObserver`, `NoopObserver`                         |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                         |
//!
//! # Typical use
//!
//! ```rust,ignore
//! use sw_route::FleetPlanner;
//! use sw_topology::load_topology_path;
//!
//! let topo = load_topology_path(Path::new("map.json"))?;
//! let plan = FleetPlanner::plan(&topo)?;
//! for line in &plan.transcript {
//!     println!("{line}");
//! }
//! ```

pub mod error;
pub mod observer;
pub mod pathfinder;
pub mod planner;
pub mod route;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use observer::{NoopObserver, PlanObserver};
pub use pathfinder::{PathCost, shortest_route};
pub use planner::{FleetPlan, FleetPlanner};
pub use route::DroneRoute;
