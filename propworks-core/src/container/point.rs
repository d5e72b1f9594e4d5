//! World-space coordinates

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point (or direction) in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    /// Origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector along +X
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared distance to `other` in the horizontal (x/z) plane
    ///
    /// Height is ignored, so a lowered carriage is still "above" the slot
    /// it was aimed at. Squared distances order the same way as plain
    /// ones, which is all the arrival check needs (`core` has no `sqrt`).
    pub fn horizontal_distance_sq(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    /// Offset this point by `dir * amount`
    pub fn offset(&self, dir: &Point3, amount: f32) -> Point3 {
        Point3::new(
            self.x + dir.x * amount,
            self.y + dir.y * amount,
            self.z + dir.z * amount,
        )
    }
}

/// Linear interpolation with `t` clamped to `[0, 1]`
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    from + (to - from) * t
}
