//! Hub and connection value types.

use sw_core::{GridPoint, HubId, HubRole, Zone};

/// One physical location a drone can occupy.
///
/// `max_drones` is the simultaneity capacity: how many drones may be present
/// at this hub during the same turn.
#[derive(Clone, Debug)]
pub struct Hub {
    pub name:       String,
    pub role:       HubRole,
    pub zone:       Zone,
    pub pos:        GridPoint,
    pub max_drones: u32,
}

impl Hub {
    /// `true` for hubs excluded from every graph operation.
    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.zone == Zone::Blocked
    }
}

/// An undirected connection between two distinct hubs.
///
/// `capacity` is the simultaneity capacity: how many drones may traverse the
/// connection (in either direction) during the same turn.
#[derive(Copy, Clone, Debug)]
pub struct Link {
    pub a:        HubId,
    pub b:        HubId,
    pub capacity: u32,
}

impl Link {
    /// The endpoint opposite `from`.
    ///
    /// # Panics
    /// Panics in debug mode if `from` is not an endpoint of this link.
    #[inline]
    pub fn other(&self, from: HubId) -> HubId {
        debug_assert!(from == self.a || from == self.b);
        if from == self.a { self.b } else { self.a }
    }
}
