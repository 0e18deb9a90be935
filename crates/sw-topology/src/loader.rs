//! JSON map loader.
//!
//! # Map format
//!
//! One JSON object per map.  Hub and link order in the file fixes `HubId` /
//! `LinkId` assignment, and with it every iteration order downstream.
//!
//! ```json
//! {
//!   "nb_drones": 2,
//!   "hubs": [
//!     { "name": "base",  "role": "start", "x": 0, "y": 0, "max_drones": 2 },
//!     { "name": "relay", "zone": "restricted", "x": 2, "y": 1 },
//!     { "name": "depot", "role": "end", "x": 4, "y": 0, "max_drones": 2 }
//!   ],
//!   "links": [
//!     { "a": "base",  "b": "relay" },
//!     { "a": "relay", "b": "depot", "capacity": 2 }
//!   ]
//! }
//! ```
//!
//! Optional fields and their defaults:
//!
//! | Field             | Default          |
//! |-------------------|------------------|
//! | hub `role`        | `"intermediate"` |
//! | hub `zone`        | `"normal"`       |
//! | hub `max_drones`  | `1`              |
//! | link `capacity`   | `1`              |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sw_core::{GridPoint, HubRole, Zone};

use crate::{Topology, TopologyBuilder, TopologyError, TopologyResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapFile {
    nb_drones: u16,
    hubs:      Vec<HubRecord>,
    #[serde(default)]
    links:     Vec<LinkRecord>,
}

#[derive(Deserialize)]
struct HubRecord {
    name: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    zone: Option<String>,
    x: i32,
    y: i32,
    #[serde(default = "one")]
    max_drones: u32,
}

#[derive(Deserialize)]
struct LinkRecord {
    a: String,
    b: String,
    #[serde(default = "one")]
    capacity: u32,
}

fn one() -> u32 {
    1
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Topology`] from a JSON map file.
pub fn load_topology_path(path: &Path) -> TopologyResult<Topology> {
    let file = std::fs::File::open(path).map_err(TopologyError::Io)?;
    load_topology_reader(file)
}

/// [`load_topology_path`] generalized over the byte source, so embedded
/// maps and in-memory test fixtures can skip the filesystem.
pub fn load_topology_reader<R: Read>(reader: R) -> TopologyResult<Topology> {
    let map: MapFile = serde_json::from_reader(reader)
        .map_err(|e| TopologyError::Parse(e.to_string()))?;

    let mut builder = TopologyBuilder::new(map.nb_drones);

    for record in &map.hubs {
        builder.add_hub(
            record.name.clone(),
            parse_role(record.role.as_deref())?,
            parse_zone(record.zone.as_deref())?,
            GridPoint::new(record.x, record.y),
            record.max_drones,
        )?;
    }

    for record in &map.links {
        let a = builder
            .hub_id(&record.a)
            .ok_or_else(|| TopologyError::Parse(format!("link endpoint {:?} is not a hub", record.a)))?;
        let b = builder
            .hub_id(&record.b)
            .ok_or_else(|| TopologyError::Parse(format!("link endpoint {:?} is not a hub", record.b)))?;
        builder.add_link(a, b, record.capacity)?;
    }

    builder.build()
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_role(s: Option<&str>) -> TopologyResult<HubRole> {
    match s.map(str::trim) {
        None | Some("") | Some("intermediate") => Ok(HubRole::Intermediate),
        Some("start") => Ok(HubRole::Start),
        Some("end")   => Ok(HubRole::End),
        Some(other) => Err(TopologyError::Parse(format!(
            "invalid role {other:?}: expected \"start\", \"end\", or \"intermediate\""
        ))),
    }
}

fn parse_zone(s: Option<&str>) -> TopologyResult<Zone> {
    match s.map(str::trim) {
        None | Some("") | Some("normal") => Ok(Zone::Normal),
        Some("blocked")    => Ok(Zone::Blocked),
        Some("restricted") => Ok(Zone::Restricted),
        Some("priority")   => Ok(Zone::Priority),
        Some(other) => Err(TopologyError::Parse(format!(
            "invalid zone {other:?}: expected \"normal\", \"blocked\", \"restricted\", or \"priority\""
        ))),
    }
}
