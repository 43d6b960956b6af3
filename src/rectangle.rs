//! Axis-aligned rectangle arithmetic and Cohen–Sutherland line clipping.

use crate::point::Point;

// ============================================================================
// Outcode bits
// ============================================================================
//
// Stable, consumer-visible layout: combinable by bitwise OR.

/// The point lies to the left of the rectangle.
pub const OUT_LEFT: u32 = 1;
/// The point lies above the rectangle (smaller y).
pub const OUT_TOP: u32 = 2;
/// The point lies to the right of the rectangle.
pub const OUT_RIGHT: u32 = 4;
/// The point lies below the rectangle (larger y).
pub const OUT_BOTTOM: u32 = 8;

/// An axis-aligned rectangle at (x, y) with the given extent.
///
/// A rectangle is *empty* when `width <= 0` or `height <= 0`; an empty
/// rectangle contains no point and intersects nothing. All mutators work
/// in place.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// A rectangle with the given origin and extent.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Overwrite origin and extent.
    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// True when the rectangle has no interior.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    // ========================================================================
    // Outcode and containment
    // ========================================================================

    /// 4-bit mask of the half-planes the point (`x`, `y`) lies outside of.
    ///
    /// A degenerate extent excludes everything on that axis: `width <= 0`
    /// sets both `OUT_LEFT` and `OUT_RIGHT`, `height <= 0` sets both
    /// `OUT_TOP` and `OUT_BOTTOM`.
    pub fn outcode(&self, x: f64, y: f64) -> u32 {
        let mut out = 0;
        if self.width <= 0.0 {
            out |= OUT_LEFT | OUT_RIGHT;
        } else if x < self.x {
            out |= OUT_LEFT;
        } else if x > self.x + self.width {
            out |= OUT_RIGHT;
        }
        if self.height <= 0.0 {
            out |= OUT_TOP | OUT_BOTTOM;
        } else if y < self.y {
            out |= OUT_TOP;
        } else if y > self.y + self.height {
            out |= OUT_BOTTOM;
        }
        out
    }

    /// True iff the point lies within `[x, x+w) × [y, y+h)` — inclusive on
    /// the low edges, exclusive on the high edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    /// True iff the non-empty candidate `(x, y, w, h)` is fully enclosed.
    /// The high edges of the candidate may touch this rectangle's bounds.
    pub fn contains_bounds(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if self.is_empty() || w <= 0.0 || h <= 0.0 {
            return false;
        }
        x >= self.x
            && y >= self.y
            && x + w <= self.x + self.width
            && y + h <= self.y + self.height
    }

    /// True iff the non-empty rectangle `r` is fully enclosed.
    pub fn contains_rect(&self, r: &Rectangle) -> bool {
        self.contains_bounds(r.x, r.y, r.width, r.height)
    }

    // ========================================================================
    // Intersection
    // ========================================================================

    /// True iff this rectangle and the candidate `(x, y, w, h)` overlap on
    /// both axes as open intervals. Empty operands never intersect.
    pub fn intersects_bounds(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if self.is_empty() || w <= 0.0 || h <= 0.0 {
            return false;
        }
        x + w > self.x && y + h > self.y && x < self.x + self.width && y < self.y + self.height
    }

    /// True iff this rectangle and `r` overlap on both axes.
    pub fn intersects(&self, r: &Rectangle) -> bool {
        self.intersects_bounds(r.x, r.y, r.width, r.height)
    }

    /// True iff the line segment from (`x1`, `y1`) to (`x2`, `y2`) touches
    /// the rectangle.
    ///
    /// Cohen–Sutherland clipping loop: the second endpoint inside means an
    /// immediate hit; both endpoints outside on the same side means a miss;
    /// otherwise the first endpoint is clipped to the rectangle edge named
    /// by its outcode (horizontal correction first) and the loop repeats.
    /// Each iteration moves the first endpoint onto the boundary, so the
    /// loop terminates.
    pub fn intersects_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
        let out2 = self.outcode(x2, y2);
        if out2 == 0 {
            return true;
        }
        let (mut x1, mut y1) = (x1, y1);
        loop {
            let out1 = self.outcode(x1, y1);
            if out1 == 0 {
                return true;
            }
            if out1 & out2 != 0 {
                return false;
            }
            if out1 & (OUT_LEFT | OUT_RIGHT) != 0 {
                let mut x = self.x;
                if out1 & OUT_RIGHT != 0 {
                    x += self.width;
                }
                y1 += (x - x1) * (y2 - y1) / (x2 - x1);
                x1 = x;
            } else {
                let mut y = self.y;
                if out1 & OUT_BOTTOM != 0 {
                    y += self.height;
                }
                x1 += (y - y1) * (x2 - x1) / (y2 - y1);
                y1 = y;
            }
        }
    }

    // ========================================================================
    // Union
    // ========================================================================

    /// Extend the bounds to cover the point (`x`, `y`).
    ///
    /// Recomputed via min/max of the corners, which also repairs emptiness
    /// whenever the union has positive extent.
    pub fn add(&mut self, x: f64, y: f64) {
        let x1 = self.min_x().min(x);
        let x2 = self.max_x().max(x);
        let y1 = self.min_y().min(y);
        let y2 = self.max_y().max(y);
        self.set_rect(x1, y1, x2 - x1, y2 - y1);
    }

    /// Extend the bounds to cover `pt`.
    pub fn add_point(&mut self, pt: &Point) {
        self.add(pt.x, pt.y);
    }

    /// Extend the bounds to the union with `r`.
    pub fn add_rect(&mut self, r: &Rectangle) {
        let x1 = self.min_x().min(r.min_x());
        let x2 = self.max_x().max(r.max_x());
        let y1 = self.min_y().min(r.min_y());
        let y2 = self.max_y().max(r.max_y());
        self.set_rect(x1, y1, x2 - x1, y2 - y1);
    }
}
