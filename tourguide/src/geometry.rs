//! Planar position geometry.
//!
//! Positions are eastings/northings in an arbitrary linear unit (metres in
//! practice). All calculations are flat-plane: tours cover walking distances,
//! where curvature is irrelevant.
//!
//! # Compass Convention
//!
//! Bearings are measured in degrees clockwise from north, so `atan2` is fed
//! `(east, north)` rather than the mathematical `(y, x)`:
//!
//! ```text
//!            N 0°
//!             │
//!   W 270° ───┼─── E 90°
//!             │
//!          S 180°
//! ```

use std::f64::consts::PI;

/// A point on the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    /// Easting.
    pub east: f64,
    /// Northing.
    pub north: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(east: f64, north: f64) -> Self {
        Self { east, north }
    }

    /// Displacement from this position to `target`.
    pub fn displacement_to(&self, target: Position) -> Displacement {
        Displacement::between(*self, target)
    }

    /// Straight-line distance to `target`.
    pub fn distance_to(&self, target: Position) -> f64 {
        self.displacement_to(target).distance()
    }
}

/// The vector difference between two positions.
///
/// Transient value: computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    /// Displacement due east.
    pub east: f64,
    /// Displacement due north.
    pub north: f64,
}

impl Displacement {
    /// Create a displacement from its components.
    pub fn new(east: f64, north: f64) -> Self {
        Self { east, north }
    }

    /// Displacement travelled going from `from` to `to`.
    pub fn between(from: Position, to: Position) -> Self {
        Self {
            east: to.east - from.east,
            north: to.north - from.north,
        }
    }

    /// Euclidean length of the displacement.
    pub fn distance(&self) -> f64 {
        (self.east * self.east + self.north * self.north).sqrt()
    }

    /// Compass bearing in degrees, in `[0, 360)`.
    ///
    /// A zero displacement has bearing 0.
    pub fn bearing(&self) -> f64 {
        let mut radians = self.east.atan2(self.north);
        if radians < 0.0 {
            radians += 2.0 * PI;
        }
        let degrees = radians.to_degrees();

        // Tiny negative angles can round up to a full turn
        if degrees >= 360.0 {
            0.0
        } else {
            degrees
        }
    }
}
