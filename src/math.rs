//! Scalar comparison and distance helpers shared by the geometry types.

use core::cmp::Ordering;

/// Tolerance used by [`approx_eq`], [`approx_cmp`], and point equality.
pub const EPSILON: f64 = 1e-7;

/// Epsilon-tolerant equality: true iff `|a - b| < EPSILON`.
///
/// Not a true equivalence relation — transitivity fails for chains of
/// values spaced just under the tolerance. Callers that need exact
/// matching (e.g. duplicate-point collapsing during append) compare with
/// `==` instead.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Epsilon-tolerant three-way comparison.
///
/// Values closer than [`EPSILON`] compare equal; unordered operands
/// (NaN) also fall through to equal.
pub fn approx_cmp(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < EPSILON {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(1.0, 1.0 + 1e-8));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn test_approx_eq_not_transitive() {
        // a ~ b and b ~ c, but a !~ c: the inherited quirk.
        let a = 0.0;
        let b = 0.9e-7;
        let c = 1.8e-7;
        assert!(approx_eq(a, b));
        assert!(approx_eq(b, c));
        assert!(!approx_eq(a, c));
    }

    #[test]
    fn test_approx_cmp() {
        assert_eq!(approx_cmp(1.0, 1.0 + 1e-8), Ordering::Equal);
        assert_eq!(approx_cmp(1.0, 2.0), Ordering::Less);
        assert_eq!(approx_cmp(2.0, 1.0), Ordering::Greater);
        assert_eq!(approx_cmp(f64::NAN, 1.0), Ordering::Equal);
    }

    #[test]
    fn test_calc_distance() {
        assert!((calc_distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-10);
        assert!(calc_distance(1.0, 1.0, 1.0, 1.0).abs() < 1e-10);
        assert!((calc_sq_distance(0.0, 0.0, 3.0, 4.0) - 25.0).abs() < 1e-10);
    }
}
