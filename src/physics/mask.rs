//! Collision layer masks.
//!
//! A ray participates against geometry only when the ray's mask and the
//! geometry's layer share at least one bit.

use std::ops::{BitAnd, BitOr};
use serde::{Deserialize, Serialize};

/// Bit set of collision layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollisionMask(pub u32);

impl CollisionMask {
    /// Matches nothing. Rays cast with this mask never hit.
    pub const NONE: Self = Self(0);

    /// Static level geometry - walls, floors, slopes.
    pub const GROUND: Self = Self(1 << 0);

    /// Moving platforms and other kinematic geometry.
    pub const PLATFORM: Self = Self(1 << 1);

    /// Geometry that only blocks the mover, not other queries.
    pub const PLAYER_CLIP: Self = Self(1 << 2);

    /// Every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Mask for a single layer index (0-31).
    #[inline]
    pub const fn layer(index: u8) -> Self {
        Self(1 << (index as u32 % 32))
    }

    /// Check if any bit is shared.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Check if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if no bit is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for CollisionMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for CollisionMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CollisionMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
