//! Frozen topology snapshot and its builder.
//!
//! # Data layout
//!
//! Every undirected [`Link`] is split into two directed half-links, and the
//! half-links are packed into a compressed-sparse-row layout: three flat
//! arrays where `hub_out_start[h] .. hub_out_start[h+1]` brackets the block
//! of half-links leaving hub `h`.  Walking a hub's neighbors is then one
//! contiguous slice scan, and `out_link` points each half-link back at the
//! undirected link whose capacity both directions share.
//!
//! Within a hub's block, half-links appear in link insertion order.  That
//! ordering is load-bearing: every downstream traversal inherits it, and the
//! engine's byte-for-byte reproducibility depends on it never changing.
//!
//! # Lifecycle
//!
//! A `Topology` is produced once by [`TopologyBuilder::build`] (which owns
//! all input validation) and is immutable afterwards.

use rustc_hash::FxHashMap;

use sw_core::{GridPoint, HubId, HubRole, LinkId, Zone};

use crate::hub::{Hub, Link};
use crate::{TopologyError, TopologyResult};

// ── Topology ──────────────────────────────────────────────────────────────────

/// The validated, immutable input to the routing engine.
///
/// The array fields are `pub` so hot paths can subscript them without an
/// accessor per field; construction still has to go through
/// [`TopologyBuilder`], which is the only place invariants are checked.
#[derive(Debug)]
pub struct Topology {
    /// Hubs in insertion (map) order.  Indexed by `HubId`.
    pub hubs: Vec<Hub>,

    /// Undirected connections in insertion order.  Indexed by `LinkId`.
    pub links: Vec<Link>,

    // ── CSR half-link adjacency ───────────────────────────────────────────
    /// Row offsets: hub `h` owns half-links `hub_out_start[h]` up to (not
    /// including) `hub_out_start[h + 1]`.  One entry per hub plus a final
    /// end-of-array sentinel.
    pub hub_out_start: Vec<u32>,

    /// Neighbor hub of each half-link.
    pub out_neighbor: Vec<HubId>,

    /// Underlying undirected link of each half-link (for capacity lookup).
    pub out_link: Vec<LinkId>,

    /// Fleet size.
    pub nb_drones: u16,

    /// The unique START hub.
    pub start: HubId,

    /// The unique END hub.
    pub end: HubId,

    name_index: FxHashMap<String, HubId>,
}

impl Topology {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn hub_count(&self) -> usize {
        self.hubs.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    #[inline]
    pub fn hub(&self, id: HubId) -> &Hub {
        &self.hubs[id.index()]
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.index()]
    }

    /// Resolve a hub by name.
    pub fn hub_id(&self, name: &str) -> Option<HubId> {
        self.name_index.get(name).copied()
    }

    /// The `(neighbor, link)` pairs of all half-links leaving `hub`, in link
    /// insertion order.
    ///
    /// Yields straight out of the CSR block, so iterating allocates nothing.
    /// Blocked neighbors are *not* filtered here; traversals skip them.
    #[inline]
    pub fn out_links(&self, hub: HubId) -> impl Iterator<Item = (HubId, LinkId)> + '_ {
        let start = self.hub_out_start[hub.index()] as usize;
        let end   = self.hub_out_start[hub.index() + 1] as usize;
        (start..end).map(|i| (self.out_neighbor[i], self.out_link[i]))
    }

    /// How many half-links leave `hub`.
    #[inline]
    pub fn out_degree(&self, hub: HubId) -> usize {
        let start = self.hub_out_start[hub.index()] as usize;
        let end   = self.hub_out_start[hub.index() + 1] as usize;
        end - start
    }
}

// ── TopologyBuilder ───────────────────────────────────────────────────────────

/// Accumulates hubs and links, then freezes them into a [`Topology`] via
/// [`build`](Self::build).
///
/// Per-item rules (names, coordinates, capacities, duplicate links) are
/// enforced at `add_*` time; rules that span the whole map (exactly one
/// START and END, terminal capacity covering the fleet) wait until
/// `build()`.
///
/// # Example
///
/// ```
/// use sw_core::{GridPoint, HubRole, Zone};
/// use sw_topology::TopologyBuilder;
///
/// let mut b = TopologyBuilder::new(2);
/// let s = b.add_hub("base", HubRole::Start, Zone::Normal, GridPoint::new(0, 0), 2)?;
/// let g = b.add_hub("depot", HubRole::End, Zone::Normal, GridPoint::new(4, 0), 2)?;
/// b.add_link(s, g, 1)?;
/// let topo = b.build()?;
/// assert_eq!(topo.hub_count(), 2);
/// # Ok::<(), sw_topology::TopologyError>(())
/// ```
pub struct TopologyBuilder {
    nb_drones:   u16,
    hubs:        Vec<Hub>,
    links:       Vec<Link>,
    name_index:  FxHashMap<String, HubId>,
    coord_index: FxHashMap<GridPoint, HubId>,
    link_index:  FxHashMap<(HubId, HubId), LinkId>,
}

impl TopologyBuilder {
    pub fn new(nb_drones: u16) -> Self {
        Self {
            nb_drones,
            hubs:        Vec::new(),
            links:       Vec::new(),
            name_index:  FxHashMap::default(),
            coord_index: FxHashMap::default(),
            link_index:  FxHashMap::default(),
        }
    }

    /// Register a hub; ids are handed out in registration order from 0.
    ///
    /// Rejects empty names, names containing whitespace or `-` (the record
    /// delimiter in movement transcripts), duplicate names, duplicate
    /// coordinates, and a zero `max_drones`.
    pub fn add_hub(
        &mut self,
        name: impl Into<String>,
        role: HubRole,
        zone: Zone,
        pos: GridPoint,
        max_drones: u32,
    ) -> TopologyResult<HubId> {
        let name = name.into();
        if name.is_empty() || name.contains(char::is_whitespace) || name.contains('-') {
            return Err(TopologyError::BadHubName(name));
        }
        if self.name_index.contains_key(&name) {
            return Err(TopologyError::DuplicateHub(name));
        }
        if let Some(&other) = self.coord_index.get(&pos) {
            return Err(TopologyError::CoordinateClash {
                name,
                other: self.hubs[other.index()].name.clone(),
                pos,
            });
        }
        if max_drones == 0 {
            return Err(TopologyError::ZeroHubCapacity(name));
        }

        let id = HubId(self.hubs.len() as u32);
        self.name_index.insert(name.clone(), id);
        self.coord_index.insert(pos, id);
        self.hubs.push(Hub { name, role, zone, pos, max_drones });
        Ok(id)
    }

    /// Resolve a previously added hub by name (used by the map loader to
    /// connect link records to hub records).
    pub fn hub_id(&self, name: &str) -> Option<HubId> {
        self.name_index.get(name).copied()
    }

    /// Add an undirected link between two existing, distinct hubs.
    ///
    /// Duplicate detection is order-insensitive: `a-b` and `b-a` are the
    /// same link.
    pub fn add_link(&mut self, a: HubId, b: HubId, capacity: u32) -> TopologyResult<LinkId> {
        if a.index() >= self.hubs.len() {
            return Err(TopologyError::UnknownHub(a));
        }
        if b.index() >= self.hubs.len() {
            return Err(TopologyError::UnknownHub(b));
        }
        if a == b {
            return Err(TopologyError::SelfLink(self.hubs[a.index()].name.clone()));
        }

        let key = if a < b { (a, b) } else { (b, a) };
        if self.link_index.contains_key(&key) {
            return Err(TopologyError::DuplicateLink {
                a: self.hubs[a.index()].name.clone(),
                b: self.hubs[b.index()].name.clone(),
            });
        }
        if capacity == 0 {
            return Err(TopologyError::ZeroLinkCapacity {
                a: self.hubs[a.index()].name.clone(),
                b: self.hubs[b.index()].name.clone(),
            });
        }

        let id = LinkId(self.links.len() as u32);
        self.link_index.insert(key, id);
        self.links.push(Link { a, b, capacity });
        Ok(id)
    }

    pub fn hub_count(&self) -> usize { self.hubs.len() }
    pub fn link_count(&self) -> usize { self.links.len() }

    /// Run the whole-map checks and freeze the result.
    ///
    /// Verifies: at least one drone, exactly one START and one END, neither
    /// terminal blocked, and both terminals able to hold the whole fleet
    /// simultaneously.
    pub fn build(self) -> TopologyResult<Topology> {
        if self.nb_drones == 0 {
            return Err(TopologyError::NoDrones);
        }

        let start = self.find_terminal(HubRole::Start)?;
        let end   = self.find_terminal(HubRole::End)?;

        for &terminal in &[start, end] {
            let hub = &self.hubs[terminal.index()];
            if hub.is_blocked() {
                return Err(TopologyError::BlockedTerminal(hub.name.clone()));
            }
            if hub.max_drones < u32::from(self.nb_drones) {
                return Err(TopologyError::TerminalCapacity {
                    name:       hub.name.clone(),
                    max_drones: hub.max_drones,
                    nb_drones:  self.nb_drones,
                });
            }
        }

        // ── CSR half-link construction (two-pass) ─────────────────────────
        let hub_count = self.hubs.len();
        let mut hub_out_start = vec![0u32; hub_count + 1];
        for link in &self.links {
            hub_out_start[link.a.index() + 1] += 1;
            hub_out_start[link.b.index() + 1] += 1;
        }
        for i in 1..=hub_count {
            hub_out_start[i] += hub_out_start[i - 1];
        }

        let half_count = self.links.len() * 2;
        let mut cursor       = hub_out_start.clone();
        let mut out_neighbor = vec![HubId::INVALID; half_count];
        let mut out_link     = vec![LinkId::INVALID; half_count];
        for (i, link) in self.links.iter().enumerate() {
            for (from, to) in [(link.a, link.b), (link.b, link.a)] {
                let slot = cursor[from.index()] as usize;
                cursor[from.index()] += 1;
                out_neighbor[slot] = to;
                out_link[slot]     = LinkId(i as u32);
            }
        }
        debug_assert_eq!(hub_out_start[hub_count] as usize, half_count);

        Ok(Topology {
            hubs: self.hubs,
            links: self.links,
            hub_out_start,
            out_neighbor,
            out_link,
            nb_drones: self.nb_drones,
            start,
            end,
            name_index: self.name_index,
        })
    }

    fn find_terminal(&self, role: HubRole) -> TopologyResult<HubId> {
        let mut found: Option<HubId> = None;
        for (i, hub) in self.hubs.iter().enumerate() {
            if hub.role != role {
                continue;
            }
            match found {
                None => found = Some(HubId(i as u32)),
                Some(first) => {
                    let first_name  = self.hubs[first.index()].name.clone();
                    let second_name = hub.name.clone();
                    return Err(match role {
                        HubRole::Start => TopologyError::DuplicateStart {
                            first: first_name, second: second_name,
                        },
                        _ => TopologyError::DuplicateEnd {
                            first: first_name, second: second_name,
                        },
                    });
                }
            }
        }
        found.ok_or(match role {
            HubRole::Start => TopologyError::MissingStart,
            _ => TopologyError::MissingEnd,
        })
    }
}
