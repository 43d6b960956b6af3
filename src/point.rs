//! A 2D coordinate pair with epsilon-tolerant equality.

use crate::math::{approx_eq, calc_distance, calc_sq_distance};

/// An (x, y) coordinate pair in double precision.
///
/// Value semantics throughout; nothing in the crate holds a `Point` by
/// reference across mutation. Equality is epsilon-tolerant (see
/// [`crate::math::EPSILON`]) and therefore not transitive — two points a
/// hair under the tolerance apart compare equal while their neighbors may
/// not. Code that needs exact coordinate identity compares the raw fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// A point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates.
    pub fn set_location(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        calc_distance(self.x, self.y, other.x, other.y)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_sq(&self, other: &Point) -> f64 {
        calc_sq_distance(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to the coordinates (`x`, `y`).
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        calc_distance(self.x, self.y, x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
