//! Mutable path storage — the primary geometry container.
//!
//! Stores an ordered sequence of drawing commands as two parallel growable
//! arrays: one of segment tags and one of flattened (x, y) coordinate
//! pairs. The per-tag coordinate arity lives on [`SegmentType`] so that
//! construction, iteration, and the interchange codec all consult one
//! table.

use tracing::trace;

use crate::error::PathError;
use crate::path_iterator::PathIterator;
use crate::rectangle::Rectangle;
use crate::trans_affine::CoordTransform;

/// Default capacity, in segments, for a freshly constructed path.
pub const INIT_SIZE: usize = 20;
/// Growth-increment cap for the segment-tag array.
pub const EXPAND_MAX: usize = 500;
/// Growth-increment cap for the coordinate array.
pub const EXPAND_MAX_COORDS: usize = EXPAND_MAX * 2;
/// Growth-increment floor for both arrays; must stay above 6 so one
/// cubic segment's coordinates always fit in a single expansion.
pub const EXPAND_MIN: usize = 10;

// ============================================================================
// Segment types and winding rules
// ============================================================================

/// One drawing command tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    /// Begin a new sub-path at the given point.
    MoveTo,
    /// Straight line to the given point.
    LineTo,
    /// Quadratic Bezier: control point, then end point.
    QuadTo,
    /// Cubic Bezier: two control points, then end point.
    CubicTo,
    /// Close the current sub-path; carries no coordinates.
    Close,
}

impl SegmentType {
    /// Number of coordinate pairs carried by this segment type.
    ///
    /// The single source of truth for the tag-to-arity mapping.
    pub const fn num_points(self) -> usize {
        match self {
            SegmentType::MoveTo | SegmentType::LineTo => 1,
            SegmentType::QuadTo => 2,
            SegmentType::CubicTo => 3,
            SegmentType::Close => 0,
        }
    }

    /// Number of scalar coordinates carried by this segment type.
    pub const fn num_coords(self) -> usize {
        self.num_points() * 2
    }
}

/// Fill-parity policy attached to a path. Stored, not evaluated, by this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingRule {
    /// A point is inside when a ray from it crosses the outline an odd
    /// number of times.
    EvenOdd,
    /// A point is inside when the outline's signed crossing count is
    /// non-zero.
    #[default]
    NonZero,
}

impl WindingRule {
    /// Wire encoding of the rule.
    pub const fn as_byte(self) -> u8 {
        match self {
            WindingRule::EvenOdd => 0,
            WindingRule::NonZero => 1,
        }
    }

    /// Decode a wire byte; anything outside {0, 1} is rejected.
    pub fn from_byte(b: u8) -> Result<Self, PathError> {
        match b {
            0 => Ok(WindingRule::EvenOdd),
            1 => Ok(WindingRule::NonZero),
            _ => Err(PathError::InvalidWindingRule(b)),
        }
    }
}

// ============================================================================
// Growth machinery
// ============================================================================

/// Compute the next backing capacity for an array of `old_size` slots that
/// needs `needed` more.
///
/// Pure sizing: the increment starts at `old_size`, is clamped to
/// `max(expand_max, old_size / 8)` above the cap, and raised to
/// [`EXPAND_MIN`] below the floor. An unrepresentable minimum size is a
/// hard failure; an overflowing *tentative* size falls back to
/// `usize::MAX` (allocation will then shrink toward the minimum).
fn grow_size(old_size: usize, needed: usize, expand_max: usize) -> Result<usize, PathError> {
    let new_size_min = old_size
        .checked_add(needed)
        .ok_or(PathError::CapacityExceeded)?;
    let mut grow = old_size;
    if grow > expand_max {
        grow = expand_max.max(old_size >> 3);
    } else if grow < EXPAND_MIN {
        grow = EXPAND_MIN;
    }
    let new_size = old_size.checked_add(grow).unwrap_or(usize::MAX);
    Ok(new_size.max(new_size_min))
}

/// Grow `vec`'s backing capacity to hold `needed` more elements beyond its
/// current capacity, retrying smaller sizes on allocation failure.
///
/// On failure the target is repeatedly moved halfway back toward the
/// minimum required size; failure at the minimum itself is resource
/// exhaustion and is reported as such, never as a validation error.
fn expand<T>(vec: &mut Vec<T>, needed: usize, expand_max: usize) -> Result<(), PathError> {
    let old_size = vec.capacity();
    let new_size_min = old_size
        .checked_add(needed)
        .ok_or(PathError::CapacityExceeded)?;
    let mut new_size = grow_size(old_size, needed, expand_max)?;
    trace!(old_size, new_size, "expanding path storage");
    loop {
        match vec.try_reserve_exact(new_size - vec.len()) {
            Ok(()) => return Ok(()),
            Err(_) if new_size == new_size_min => {
                return Err(PathError::StorageExhausted {
                    required: new_size_min,
                });
            }
            Err(_) => {
                new_size = new_size_min + (new_size - new_size_min) / 2;
            }
        }
    }
}

// ============================================================================
// Path
// ============================================================================

/// A mutable sequence of path segments with amortized-growth storage.
///
/// Segment tags and coordinates live in two parallel arrays kept in
/// lockstep: the sum of each stored tag's coordinate arity always equals
/// the coordinate array's length. Every path must begin with a
/// [`SegmentType::MoveTo`]; drawing commands against an empty path fail
/// with [`PathError::MissingInitialMoveTo`].
///
/// There is no internal synchronization. All mutators take `&mut self`,
/// so exclusive ownership (or an external lock held across a whole
/// logical operation) is the concurrency contract, enforced by the
/// borrow checker rather than per-call locking.
pub struct Path {
    pub(crate) types: Vec<SegmentType>,
    pub(crate) coords: Vec<f64>,
    winding_rule: WindingRule,
}

impl Path {
    /// An empty path with the non-zero winding rule and default capacity.
    pub fn new() -> Self {
        Self::with_capacity(WindingRule::NonZero, INIT_SIZE)
    }

    /// An empty path with the given winding rule and default capacity.
    pub fn with_winding_rule(rule: WindingRule) -> Self {
        Self::with_capacity(rule, INIT_SIZE)
    }

    /// An empty path sized for `initial_segments` segments (and twice as
    /// many coordinates, enough for a path of single-point segments).
    pub fn with_capacity(rule: WindingRule, initial_segments: usize) -> Self {
        Self {
            types: Vec::with_capacity(initial_segments),
            coords: Vec::with_capacity(initial_segments * 2),
            winding_rule: rule,
        }
    }

    pub(crate) fn with_raw_capacity(
        rule: WindingRule,
        type_capacity: usize,
        coord_capacity: usize,
    ) -> Self {
        Self {
            types: Vec::with_capacity(type_capacity),
            coords: Vec::with_capacity(coord_capacity),
            winding_rule: rule,
        }
    }

    /// A trimmed deep copy of `src`, its coordinates passed through the
    /// optional transform.
    pub fn from_path(src: &Path, at: Option<&dyn CoordTransform>) -> Self {
        Self {
            types: src.types.clone(),
            coords: src.clone_coords(at),
            winding_rule: src.winding_rule,
        }
    }

    // ========================================================================
    // Construction commands
    // ========================================================================

    /// Ensure room for one more segment and `new_coords` more scalars.
    ///
    /// `need_move` enforces the initial-move invariant for drawing
    /// commands; `move_to` itself passes `false`.
    fn need_room(&mut self, need_move: bool, new_coords: usize) -> Result<(), PathError> {
        if need_move && self.types.is_empty() {
            return Err(PathError::MissingInitialMoveTo);
        }
        if self.types.len() == self.types.capacity() {
            expand(&mut self.types, 1, EXPAND_MAX)?;
        }
        if new_coords > self.coords.capacity() - self.coords.len() {
            expand(&mut self.coords, new_coords, EXPAND_MAX_COORDS)?;
        }
        Ok(())
    }

    /// Begin a new sub-path at (`x`, `y`).
    ///
    /// When the previous segment is itself a move, its coordinates are
    /// overwritten in place instead of appending a second move. Performs
    /// no validation; the `Result` covers storage growth only.
    pub fn move_to(&mut self, x: f64, y: f64) -> Result<(), PathError> {
        if self.types.last() == Some(&SegmentType::MoveTo) {
            let n = self.coords.len();
            self.coords[n - 2] = x;
            self.coords[n - 1] = y;
        } else {
            self.need_room(false, 2)?;
            self.types.push(SegmentType::MoveTo);
            self.coords.push(x);
            self.coords.push(y);
        }
        Ok(())
    }

    /// Append a straight line to (`x`, `y`).
    pub fn line_to(&mut self, x: f64, y: f64) -> Result<(), PathError> {
        self.need_room(true, 2)?;
        self.types.push(SegmentType::LineTo);
        self.coords.push(x);
        self.coords.push(y);
        Ok(())
    }

    /// Append a quadratic Bezier through control point (`x1`, `y1`) to
    /// (`x2`, `y2`).
    pub fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), PathError> {
        self.need_room(true, 4)?;
        self.types.push(SegmentType::QuadTo);
        self.coords.extend_from_slice(&[x1, y1, x2, y2]);
        Ok(())
    }

    /// Append a cubic Bezier through control points (`x1`, `y1`) and
    /// (`x2`, `y2`) to (`x3`, `y3`).
    pub fn curve_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> Result<(), PathError> {
        self.need_room(true, 6)?;
        self.types.push(SegmentType::CubicTo);
        self.coords.extend_from_slice(&[x1, y1, x2, y2, x3, y3]);
        Ok(())
    }

    /// Close the current sub-path.
    ///
    /// A no-op (not an error) when the path is empty or the last segment
    /// is already a close.
    pub fn close_path(&mut self) -> Result<(), PathError> {
        if !self.types.is_empty() && self.types.last() != Some(&SegmentType::Close) {
            self.need_room(true, 0)?;
            self.types.push(SegmentType::Close);
        }
        Ok(())
    }

    /// Append a raw segment and its coordinates, bypassing the move-merge
    /// and close-idempotence rules. Used by the stream reader, which must
    /// reproduce the stored sequence verbatim.
    pub(crate) fn push_raw(&mut self, ty: SegmentType, coords: &[f64]) -> Result<(), PathError> {
        debug_assert_eq!(coords.len(), ty.num_coords());
        self.need_room(ty != SegmentType::MoveTo, coords.len())?;
        self.types.push(ty);
        self.coords.extend_from_slice(coords);
        Ok(())
    }

    /// Replay every segment of `pi` into this path.
    ///
    /// With `connect` set and this path non-empty, the first move of the
    /// replayed geometry is turned into a line — unless the last stored
    /// point already equals the move target bit-for-bit (deliberately an
    /// exact comparison, not the epsilon one) and the last segment is not
    /// a close, in which case the move is dropped entirely. `connect`
    /// never applies past the first segment.
    pub fn append(&mut self, mut pi: PathIterator<'_>, connect: bool) -> Result<(), PathError> {
        let mut connect = connect;
        let mut coords = [0.0f64; 6];
        while !pi.is_done() {
            let ty = match pi.current_segment(&mut coords) {
                Some(ty) => ty,
                None => break,
            };
            match ty {
                SegmentType::MoveTo => {
                    if !connect || self.types.is_empty() {
                        self.move_to(coords[0], coords[1])?;
                    } else if self.types.last() != Some(&SegmentType::Close)
                        && self.coords[self.coords.len() - 2] == coords[0]
                        && self.coords[self.coords.len() - 1] == coords[1]
                    {
                        // Already there; drop the redundant initial move.
                    } else {
                        self.line_to(coords[0], coords[1])?;
                    }
                }
                SegmentType::LineTo => self.line_to(coords[0], coords[1])?,
                SegmentType::QuadTo => self.quad_to(coords[0], coords[1], coords[2], coords[3])?,
                SegmentType::CubicTo => self.curve_to(
                    coords[0], coords[1], coords[2], coords[3], coords[4], coords[5],
                )?,
                SegmentType::Close => self.close_path()?,
            }
            pi.next();
            connect = false;
        }
        Ok(())
    }

    // ========================================================================
    // Queries and maintenance
    // ========================================================================

    /// The current winding rule.
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// Replace the winding rule. Total: the enum admits no invalid value;
    /// byte-level validation happens in [`WindingRule::from_byte`].
    pub fn set_winding_rule(&mut self, rule: WindingRule) {
        self.winding_rule = rule;
    }

    /// Number of stored segments.
    pub fn num_segments(&self) -> usize {
        self.types.len()
    }

    /// Number of stored scalar coordinates.
    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    /// True when no segments are stored.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The stored segment tags, in order.
    pub fn segment_types(&self) -> &[SegmentType] {
        &self.types
    }

    /// The stored coordinates, flattened (x, y) pairs in segment order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Shrink the backing storage to the logical length. Pure capacity
    /// optimization; contents are unchanged.
    pub fn trim_to_size(&mut self) {
        self.types.shrink_to_fit();
        self.coords.shrink_to_fit();
    }

    /// The minimal axis-aligned box covering every stored coordinate pair.
    ///
    /// Curve control points count directly, so a curve's apex may lie
    /// outside the box. An empty path yields the zero rectangle at the
    /// origin.
    pub fn bounds(&self) -> Rectangle {
        let mut pairs = self.coords.chunks_exact(2);
        let (mut x1, mut y1, mut x2, mut y2) = match pairs.next() {
            Some(p) => (p[0], p[1], p[0], p[1]),
            None => return Rectangle::new(0.0, 0.0, 0.0, 0.0),
        };
        for p in pairs {
            let (x, y) = (p[0], p[1]);
            if x < x1 {
                x1 = x;
            }
            if y < y1 {
                y1 = y;
            }
            if x > x2 {
                x2 = x;
            }
            if y > y2 {
                y2 = y;
            }
        }
        Rectangle::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// A trimmed copy of the coordinate array, each pair passed through
    /// the optional transform.
    pub fn clone_coords(&self, at: Option<&dyn CoordTransform>) -> Vec<f64> {
        let mut ret = self.coords.clone();
        if let Some(at) = at {
            at.apply(&mut ret);
        }
        ret
    }

    /// Transform every stored coordinate pair in place.
    pub fn transform(&mut self, at: &dyn CoordTransform) {
        at.apply(&mut self.coords);
    }

    /// A cursor over this path's segments, optionally transformed.
    ///
    /// The cursor borrows the path; structural mutation while a walk is
    /// active is rejected by the borrow checker.
    pub fn path_iterator<'a>(&'a self, at: Option<&'a dyn CoordTransform>) -> PathIterator<'a> {
        PathIterator::new(self, at)
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Path {
    fn clone(&self) -> Self {
        Self::from_path(self, None)
    }
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Path")
            .field("segments", &self.types.len())
            .field("coords", &self.coords.len())
            .field("winding_rule", &self.winding_rule)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_path() -> Path {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).unwrap();
        p.line_to(4.0, 0.0).unwrap();
        p.line_to(4.0, 3.0).unwrap();
        p.line_to(0.0, 3.0).unwrap();
        p.close_path().unwrap();
        p
    }

    #[test]
    fn test_new_empty() {
        let p = Path::new();
        assert!(p.is_empty());
        assert_eq!(p.num_segments(), 0);
        assert_eq!(p.num_coords(), 0);
        assert_eq!(p.winding_rule(), WindingRule::NonZero);
    }

    #[test]
    fn test_segment_arity_table() {
        assert_eq!(SegmentType::MoveTo.num_points(), 1);
        assert_eq!(SegmentType::LineTo.num_points(), 1);
        assert_eq!(SegmentType::QuadTo.num_points(), 2);
        assert_eq!(SegmentType::CubicTo.num_points(), 3);
        assert_eq!(SegmentType::Close.num_points(), 0);
        assert_eq!(SegmentType::CubicTo.num_coords(), 6);
    }

    #[test]
    fn test_coords_match_arity_invariant() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).unwrap();
        p.quad_to(1.0, 2.0, 3.0, 4.0).unwrap();
        p.curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0).unwrap();
        p.close_path().unwrap();
        let expected: usize = p.segment_types().iter().map(|t| t.num_coords()).sum();
        assert_eq!(expected, p.num_coords());
    }

    #[test]
    fn test_move_to_collapses_consecutive_moves() {
        let mut p = Path::new();
        p.move_to(1.0, 1.0).unwrap();
        p.move_to(2.0, 2.0).unwrap();
        p.move_to(3.0, 4.0).unwrap();
        assert_eq!(p.segment_types(), &[SegmentType::MoveTo]);
        assert_eq!(p.coords(), &[3.0, 4.0]);
    }

    #[test]
    fn test_move_after_drawing_is_not_collapsed() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).unwrap();
        p.line_to(1.0, 0.0).unwrap();
        p.move_to(5.0, 5.0).unwrap();
        assert_eq!(
            p.segment_types(),
            &[SegmentType::MoveTo, SegmentType::LineTo, SegmentType::MoveTo]
        );
    }

    #[test]
    fn test_drawing_requires_initial_move() {
        let mut p = Path::new();
        assert!(matches!(
            p.line_to(1.0, 1.0),
            Err(PathError::MissingInitialMoveTo)
        ));
        assert!(matches!(
            p.quad_to(1.0, 1.0, 2.0, 2.0),
            Err(PathError::MissingInitialMoveTo)
        ));
        assert!(matches!(
            p.curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0),
            Err(PathError::MissingInitialMoveTo)
        ));
        p.move_to(0.0, 0.0).unwrap();
        assert!(p.line_to(1.0, 1.0).is_ok());
        assert!(p.quad_to(1.0, 1.0, 2.0, 2.0).is_ok());
        assert!(p.curve_to(1.0, 1.0, 2.0, 2.0, 3.0, 3.0).is_ok());
    }

    #[test]
    fn test_close_path_on_empty_is_noop() {
        let mut p = Path::new();
        p.close_path().unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn test_close_path_idempotent() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).unwrap();
        p.line_to(1.0, 1.0).unwrap();
        p.close_path().unwrap();
        p.close_path().unwrap();
        assert_eq!(
            p.segment_types(),
            &[SegmentType::MoveTo, SegmentType::LineTo, SegmentType::Close]
        );
        // A drawing command in between re-enables closing.
        p.line_to(2.0, 2.0).unwrap();
        p.close_path().unwrap();
        assert_eq!(p.num_segments(), 5);
    }

    #[test]
    fn test_bounds_of_rectangle_path() {
        let p = rect_path();
        assert_eq!(p.bounds(), Rectangle::new(0.0, 0.0, 4.0, 3.0));
    }

    #[test]
    fn test_bounds_of_empty_path() {
        assert_eq!(Path::new().bounds(), Rectangle::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_bounds_counts_control_points() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).unwrap();
        // Control point above the curve's actual apex.
        p.quad_to(5.0, 10.0, 10.0, 0.0).unwrap();
        assert_eq!(p.bounds(), Rectangle::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_growth_transparency() {
        // A path built via many small appends equals one built into
        // pre-sized storage; crosses the 500/1000 growth caps.
        const N: usize = 10_000;
        let mut grown = Path::new();
        let mut presized = Path::with_capacity(WindingRule::NonZero, N + 1);
        grown.move_to(0.0, 0.0).unwrap();
        presized.move_to(0.0, 0.0).unwrap();
        for i in 0..N {
            let (x, y) = (i as f64, (i * 2) as f64);
            grown.line_to(x, y).unwrap();
            presized.line_to(x, y).unwrap();
        }
        assert_eq!(grown.num_segments(), N + 1);
        assert_eq!(grown.segment_types(), presized.segment_types());
        assert_eq!(grown.coords(), presized.coords());
        assert!(grown.types.capacity() >= grown.types.len());
        assert!(grown.coords.capacity() >= grown.coords.len());
    }

    #[test]
    fn test_grow_size_floor() {
        // Small arrays grow by at least the floor.
        assert_eq!(grow_size(0, 1, EXPAND_MAX).unwrap(), EXPAND_MIN);
        assert_eq!(grow_size(4, 6, EXPAND_MAX_COORDS).unwrap(), 14);
    }

    #[test]
    fn test_grow_size_doubles_in_midrange() {
        assert_eq!(grow_size(64, 1, EXPAND_MAX).unwrap(), 128);
        assert_eq!(grow_size(500, 1, EXPAND_MAX).unwrap(), 1000);
    }

    #[test]
    fn test_grow_size_cap_and_eighth() {
        // Above the cap the increment clamps to max(cap, old/8).
        assert_eq!(grow_size(501, 1, EXPAND_MAX).unwrap(), 1001);
        assert_eq!(grow_size(1000, 2, EXPAND_MAX_COORDS).unwrap(), 2000);
        assert_eq!(grow_size(1001, 2, EXPAND_MAX_COORDS).unwrap(), 2001);
        // 8000/8 = 1000 == cap; 16000/8 = 2000 > cap.
        assert_eq!(grow_size(8000, 2, EXPAND_MAX_COORDS).unwrap(), 9000);
        assert_eq!(grow_size(16000, 2, EXPAND_MAX_COORDS).unwrap(), 18000);
    }

    #[test]
    fn test_grow_size_overflow() {
        assert!(matches!(
            grow_size(usize::MAX, 1, EXPAND_MAX),
            Err(PathError::CapacityExceeded)
        ));
        // Tentative overflow falls back to usize::MAX.
        assert_eq!(
            grow_size(usize::MAX - 4, 2, EXPAND_MAX).unwrap(),
            usize::MAX
        );
    }

    #[test]
    fn test_trim_to_size() {
        let mut p = rect_path();
        p.trim_to_size();
        assert_eq!(p.types.capacity(), p.types.len());
        assert_eq!(p.coords.capacity(), p.coords.len());
        assert_eq!(p.bounds(), Rectangle::new(0.0, 0.0, 4.0, 3.0));
    }

    #[test]
    fn test_clone_is_trimmed_deep_copy() {
        let mut p = rect_path();
        let q = p.clone();
        p.line_to(100.0, 100.0).unwrap();
        assert_eq!(q.num_segments(), 5);
        assert_eq!(q.types.capacity(), q.types.len());
        assert_eq!(q.bounds(), Rectangle::new(0.0, 0.0, 4.0, 3.0));
        assert_eq!(q.winding_rule(), p.winding_rule());
    }

    #[test]
    fn test_append_without_connect() {
        let src = rect_path();
        let mut dst = Path::new();
        dst.move_to(-1.0, -1.0).unwrap();
        dst.append(src.path_iterator(None), false).unwrap();
        assert_eq!(dst.num_segments(), 1 + src.num_segments());
        assert_eq!(dst.segment_types()[1], SegmentType::MoveTo);
    }

    #[test]
    fn test_append_connect_turns_move_into_line() {
        let src = rect_path();
        let mut dst = Path::new();
        dst.move_to(-1.0, -1.0).unwrap();
        dst.append(src.path_iterator(None), true).unwrap();
        assert_eq!(dst.segment_types()[1], SegmentType::LineTo);
        assert_eq!(&dst.coords()[2..4], &[0.0, 0.0]);
    }

    #[test]
    fn test_append_connect_collapses_exact_duplicate_point() {
        let src = rect_path();
        let mut dst = Path::new();
        dst.move_to(0.0, 0.0).unwrap();
        dst.append(src.path_iterator(None), true).unwrap();
        // The initial move is dropped: the line segments follow directly.
        assert_eq!(dst.segment_types()[0], SegmentType::MoveTo);
        assert_eq!(dst.segment_types()[1], SegmentType::LineTo);
        assert_eq!(dst.num_segments(), src.num_segments());
    }

    #[test]
    fn test_append_connect_exact_comparison_not_epsilon() {
        // A point inside the epsilon tolerance but not bit-identical is
        // connected with a line, not collapsed.
        let src = rect_path();
        let mut dst = Path::new();
        dst.move_to(1e-9, 0.0).unwrap();
        dst.append(src.path_iterator(None), true).unwrap();
        assert_eq!(dst.segment_types()[1], SegmentType::LineTo);
    }

    #[test]
    fn test_append_connect_after_close_keeps_line() {
        let mut src = Path::new();
        src.move_to(0.0, 0.0).unwrap();
        src.line_to(1.0, 0.0).unwrap();

        let mut dst = rect_path(); // ends with Close, last point (0, 3)
        let n = dst.num_segments();
        dst.append(src.path_iterator(None), true).unwrap();
        // After a close the move is always converted, never dropped.
        assert_eq!(dst.segment_types()[n], SegmentType::LineTo);
    }

    #[test]
    fn test_append_into_empty_ignores_connect() {
        let src = rect_path();
        let mut dst = Path::new();
        dst.append(src.path_iterator(None), true).unwrap();
        assert_eq!(dst.segment_types()[0], SegmentType::MoveTo);
        assert_eq!(dst.num_segments(), src.num_segments());
    }

    #[test]
    fn test_clone_coords_with_transform() {
        use crate::trans_affine::AffineTransform;
        let mut p = Path::new();
        p.move_to(1.0, 2.0).unwrap();
        p.line_to(3.0, 4.0).unwrap();
        let at = AffineTransform::new_scaling(2.0, 10.0);
        assert_eq!(p.clone_coords(None), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(p.clone_coords(Some(&at)), vec![2.0, 20.0, 6.0, 40.0]);
        // The path itself is untouched.
        assert_eq!(p.coords(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_transform_in_place() {
        use crate::trans_affine::AffineTransform;
        let mut p = Path::new();
        p.move_to(1.0, 1.0).unwrap();
        p.line_to(2.0, 3.0).unwrap();
        p.transform(&AffineTransform::new_translation(10.0, -10.0));
        assert_eq!(p.coords(), &[11.0, -9.0, 12.0, -7.0]);
    }

    #[test]
    fn test_from_path_transformed() {
        use crate::trans_affine::AffineTransform;
        let p = rect_path();
        let at = AffineTransform::new_scaling(2.0, 2.0);
        let q = Path::from_path(&p, Some(&at));
        assert_eq!(q.segment_types(), p.segment_types());
        assert_eq!(q.bounds(), Rectangle::new(0.0, 0.0, 8.0, 6.0));
        assert_eq!(p.bounds(), Rectangle::new(0.0, 0.0, 4.0, 3.0));
    }

    #[test]
    fn test_winding_rule_bytes() {
        assert_eq!(WindingRule::EvenOdd.as_byte(), 0);
        assert_eq!(WindingRule::NonZero.as_byte(), 1);
        assert_eq!(WindingRule::from_byte(0).unwrap(), WindingRule::EvenOdd);
        assert_eq!(WindingRule::from_byte(1).unwrap(), WindingRule::NonZero);
        assert!(matches!(
            WindingRule::from_byte(2),
            Err(PathError::InvalidWindingRule(2))
        ));
    }

    #[test]
    fn test_set_winding_rule() {
        let mut p = Path::new();
        p.set_winding_rule(WindingRule::EvenOdd);
        assert_eq!(p.winding_rule(), WindingRule::EvenOdd);
    }
}
