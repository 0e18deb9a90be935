//! Discrete time model.
//!
//! The fleet moves on a shared clock: during one `Turn` every airborne drone
//! advances simultaneously.  Time is a plain counter rather than a duration
//! type because the engine only ever asks "which turn" and "how many turns
//! apart" — integer arithmetic answers both exactly.
//!
//! Turn 0 is the instant before the first movement, with every drone still
//! parked at the start hub.  The routing horizon bounds how high the counter
//! can go, so `u32` has room to spare.

use std::fmt;

/// An absolute turn counter, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn `n` steps later.
    #[inline]
    pub fn offset(self, n: u32) -> Turn {
        Turn(self.0 + n)
    }

    /// How many turns separate `self` from an `earlier` turn.
    ///
    /// # Panics
    /// Debug builds panic when `earlier` is actually later.
    #[inline]
    pub fn since(self, earlier: Turn) -> u32 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u32> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u32) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl std::ops::Sub for Turn {
    type Output = u32;
    #[inline]
    fn sub(self, rhs: Turn) -> u32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
