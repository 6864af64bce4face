//! Local coordinate frames
//!
//! The game nests three pixel spaces: a hole's 240×80 grid sits inside the
//! course plot's 240×120 grid, which sits inside the shared reference
//! space. Each nesting is described by a [`Frame`] (origin and rotation in
//! the parent space) plus a fixed scale between the two spaces.

use super::Vector2;
use std::f64::consts::TAU;
use std::fmt;

/// Rotations are stored as fractions of a full turn out of this many units.
pub const TURN_UNITS: f64 = 600.0;

/// Hole pixels per course-plot pixel.
pub const HOLE_SCALE: f64 = 4.0;

/// Course-plot pixels per reference unit (32 reference units per plot pixel).
pub const PLOT_SCALE: f64 = 1.0 / 32.0;

/// Convert a rotation in 1/600-turn units to radians
pub fn turn_units_to_radians(r: f64) -> f64 {
    r / TURN_UNITS * TAU
}

/// Convert radians to (fractional) 1/600-turn units
pub fn radians_to_turn_units(angle: f64) -> f64 {
    angle / TAU * TURN_UNITS
}

/// Origin and rotation of a local space within its parent space.
///
/// `r` is in 1/600-turn units. A positive `r` turns the local axes
/// clockwise relative to the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub r: i32,
}

impl Frame {
    /// Create a new frame
    pub const fn new(x: i32, y: i32, r: i32) -> Self {
        Frame { x, y, r }
    }

    /// Origin in parent coordinates
    pub fn origin(&self) -> Vector2 {
        Vector2::new(self.x as f64, self.y as f64)
    }

    /// Rotation in radians
    pub fn radians(&self) -> f64 {
        turn_units_to_radians(self.r as f64)
    }

    /// Map a local point into the parent space.
    ///
    /// `scale` is local units per parent unit.
    pub fn to_parent(&self, local: Vector2, scale: f64) -> Vector2 {
        self.origin() + local.rotate(-self.radians()) / scale
    }

    /// Map a parent point into this frame's local space.
    pub fn from_parent(&self, parent: Vector2, scale: f64) -> Vector2 {
        ((parent - self.origin()) * scale).rotate(self.radians())
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) r={}/600", self.x, self.y, self.r)
    }
}
