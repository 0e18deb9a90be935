//! Hub classification enums shared across all routing crates.
//!
//! `Zone` drives traversal cost and graph membership; `HubRole` marks the
//! fleet's single origin and destination.  Both are closed enums — the map
//! loader rejects anything it cannot name here.

/// Airspace classification of a hub.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Zone {
    /// Ordinary hub: entering costs one turn.
    #[default]
    Normal,
    /// No-fly hub: excluded from every graph operation.
    Blocked,
    /// Controlled airspace: entering costs two turns.
    Restricted,
    /// Surveillance hub: preferred when routes tie on arrival turn.
    Priority,
}

impl Zone {
    /// Turns consumed by a move that *enters* a hub of this zone.
    ///
    /// `Blocked` hubs are filtered out before any cost is computed, so the
    /// value returned for them is never used.
    #[inline]
    pub fn entry_turns(self) -> u32 {
        match self {
            Zone::Restricted => 2,
            _ => 1,
        }
    }

    /// Human-readable label, matching the map-file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Zone::Normal     => "normal",
            Zone::Blocked    => "blocked",
            Zone::Restricted => "restricted",
            Zone::Priority   => "priority",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of a hub in the delivery problem.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HubRole {
    /// The single hub every drone departs from at turn 0.
    Start,
    /// The single hub every drone must reach.
    End,
    /// Any other hub.
    #[default]
    Intermediate,
}

impl HubRole {
    /// Human-readable label, matching the map-file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            HubRole::Start        => "start",
            HubRole::End          => "end",
            HubRole::Intermediate => "intermediate",
        }
    }
}

impl std::fmt::Display for HubRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
