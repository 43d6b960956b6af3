//! A borrowed cursor over a path's segments.

use crate::path::{Path, SegmentType, WindingRule};
use crate::trans_affine::CoordTransform;

/// Walks a [`Path`]'s segments in order without copying the structure,
/// optionally applying a coordinate transform per segment.
///
/// The cursor protocol is `is_done` / `current_segment` / `next`. The
/// "copy" and "transform" flavors differ only in whether a transform was
/// supplied at creation time.
///
/// The iterator borrows the path, so structural mutation during a walk is
/// normally a compile error. All access is bounds-checked: should the
/// path shrink under an aliased cursor, reads come back `None` — stale,
/// never out of bounds. The winding rule is read live from the path, not
/// snapshotted.
pub struct PathIterator<'a> {
    path: &'a Path,
    type_idx: usize,
    coord_idx: usize,
    transform: Option<&'a dyn CoordTransform>,
}

impl<'a> PathIterator<'a> {
    pub(crate) fn new(path: &'a Path, transform: Option<&'a dyn CoordTransform>) -> Self {
        Self {
            path,
            type_idx: 0,
            coord_idx: 0,
            transform,
        }
    }

    /// The bound path's current winding rule.
    pub fn winding_rule(&self) -> WindingRule {
        self.path.winding_rule()
    }

    /// True once the cursor has passed the last segment.
    pub fn is_done(&self) -> bool {
        self.type_idx >= self.path.types.len()
    }

    /// Advance to the next segment, consuming the coordinate pairs of the
    /// segment just visited. Does nothing once exhausted.
    pub fn next(&mut self) {
        if let Some(ty) = self.path.types.get(self.type_idx) {
            self.type_idx += 1;
            self.coord_idx += ty.num_coords();
        }
    }

    /// The segment under the cursor.
    ///
    /// Its coordinates are written into the front of `coords` (up to six
    /// scalars for a cubic), transformed if a transform was supplied.
    /// Returns `None` when the cursor is exhausted or the underlying path
    /// no longer covers the cursor position. Never mutates the path.
    pub fn current_segment(&self, coords: &mut [f64; 6]) -> Option<SegmentType> {
        let ty = *self.path.types.get(self.type_idx)?;
        let n = ty.num_coords();
        if n > 0 {
            let src = self.path.coords.get(self.coord_idx..self.coord_idx + n)?;
            coords[..n].copy_from_slice(src);
            if let Some(at) = self.transform {
                at.apply(&mut coords[..n]);
            }
        }
        Some(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trans_affine::AffineTransform;

    fn sample_path() -> Path {
        let mut p = Path::new();
        p.move_to(1.0, 2.0).unwrap();
        p.line_to(3.0, 4.0).unwrap();
        p.quad_to(5.0, 6.0, 7.0, 8.0).unwrap();
        p.curve_to(9.0, 10.0, 11.0, 12.0, 13.0, 14.0).unwrap();
        p.close_path().unwrap();
        p
    }

    #[test]
    fn test_walk_in_order() {
        let p = sample_path();
        let mut pi = p.path_iterator(None);
        let mut coords = [0.0; 6];

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::MoveTo));
        assert_eq!(&coords[..2], &[1.0, 2.0]);
        pi.next();

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::LineTo));
        assert_eq!(&coords[..2], &[3.0, 4.0]);
        pi.next();

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::QuadTo));
        assert_eq!(&coords[..4], &[5.0, 6.0, 7.0, 8.0]);
        pi.next();

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::CubicTo));
        assert_eq!(&coords[..6], &[9.0, 10.0, 11.0, 12.0, 13.0, 14.0]);
        pi.next();

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::Close));
        assert!(!pi.is_done());
        pi.next();

        assert!(pi.is_done());
        assert_eq!(pi.current_segment(&mut coords), None);
        // Advancing past the end stays put.
        pi.next();
        assert!(pi.is_done());
    }

    #[test]
    fn test_empty_path_is_done_immediately() {
        let p = Path::new();
        let mut coords = [0.0; 6];
        let pi = p.path_iterator(None);
        assert!(pi.is_done());
        assert_eq!(pi.current_segment(&mut coords), None);
    }

    #[test]
    fn test_transform_flavor_applies_per_segment() {
        let p = sample_path();
        let at = AffineTransform::new_translation(10.0, 20.0);
        let mut pi = p.path_iterator(Some(&at));
        let mut coords = [0.0; 6];

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::MoveTo));
        assert_eq!(&coords[..2], &[11.0, 22.0]);
        pi.next();
        pi.next();

        assert_eq!(pi.current_segment(&mut coords), Some(SegmentType::QuadTo));
        assert_eq!(&coords[..4], &[15.0, 26.0, 17.0, 28.0]);
        // The stored coordinates are untouched.
        assert_eq!(&p.coords()[..2], &[1.0, 2.0]);
    }

    #[test]
    fn test_winding_rule_delegates_to_path() {
        let mut p = sample_path();
        p.set_winding_rule(WindingRule::EvenOdd);
        let pi = p.path_iterator(None);
        assert_eq!(pi.winding_rule(), WindingRule::EvenOdd);
    }
}
