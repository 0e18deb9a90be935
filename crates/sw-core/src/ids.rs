//! Integer-backed handle types.
//!
//! Engine state lives in flat `Vec`s, and these wrappers are the subscripts
//! into them.  Giving each kind of handle its own type lets the compiler
//! refuse a `HubId` where a `TimeNodeId` belongs, while the runtime
//! representation stays a bare integer.  Every handle is `Copy`, hashable,
//! and ordered, so it works directly as a map key or sort key; go through
//! `.index()` when subscripting storage.

use std::fmt;

/// Define a handle type wrapping an unsigned integer.
macro_rules! id_type {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Marker for "points nowhere": the all-ones value, which no
            /// real collection ever grows large enough to hand out.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// The wrapped value, widened for subscripting a `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Defaults to [`Self::INVALID`], not zero — zero is a real
            /// handle and an unset one must stay detectable.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

id_type! {
    /// Index of a hub in the topology's insertion-ordered hub list.
    pub struct HubId(u32);
}

id_type! {
    /// Index of an undirected connection between two hubs.
    pub struct LinkId(u32);
}

id_type! {
    /// Handle of a `(hub, turn)` node in the time-expanded graph.
    pub struct TimeNodeId(u32);
}

id_type! {
    /// Handle of a directed move/wait edge in the time-expanded graph.
    pub struct TimeEdgeId(u32);
}

id_type! {
    /// Index of a drone in the fleet.  `u16` keeps route arrays compact
    /// (max 65,534 drones).
    pub struct DroneId(u16);
}

impl DroneId {
    /// The 1-based fleet number used in movement records (`D1`, `D2`, …).
    #[inline]
    pub fn number(self) -> u32 {
        u32::from(self.0) + 1
    }
}
