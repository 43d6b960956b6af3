//! Coordinate transforms: the capability trait the path core depends on,
//! plus a 2D affine matrix implementing it.

/// Maps flattened (x, y) coordinate pairs in place.
///
/// The path container and iterator depend only on this capability, never
/// on a concrete matrix representation, so identity, affine, or
/// perspective implementations can be injected without touching path
/// code. `coords.len()` is always even.
pub trait CoordTransform {
    /// Transform every (x, y) pair of `coords` in place.
    fn apply(&self, coords: &mut [f64]);
}

/// Blanket implementation so `&T` can be used as a `CoordTransform`.
impl<T: CoordTransform + ?Sized> CoordTransform for &T {
    fn apply(&self, coords: &mut [f64]) {
        (**self).apply(coords)
    }
}

/// 2D affine transformation matrix.
///
/// Stores six components: `[sx, shy, shx, sy, tx, ty]` representing the
/// matrix:
///
/// ```text
///   | sx  shx tx |
///   | shy  sy ty |
///   |  0    0  1 |
/// ```
///
/// Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineTransform {
    /// Identity matrix.
    pub fn new() -> Self {
        Self {
            sx: 1.0,
            shy: 0.0,
            shx: 0.0,
            sy: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Custom matrix from six components.
    pub fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Translation matrix.
    pub fn new_translation(x: f64, y: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Non-uniform scaling matrix.
    pub fn new_scaling(x: f64, y: f64) -> Self {
        Self::new_custom(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Rotation matrix.
    pub fn new_rotation(a: f64) -> Self {
        let (sa, ca) = a.sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    /// Transform a single point in place.
    pub fn transform(&self, x: &mut f64, y: &mut f64) {
        let tmp = *x;
        *x = tmp * self.sx + *y * self.shx + self.tx;
        *y = tmp * self.shy + *y * self.sy + self.ty;
    }

    /// Multiply by `m` on the right: `self = self * m`.
    pub fn multiply(&mut self, m: &AffineTransform) {
        let t0 = self.sx * m.sx + self.shy * m.shx;
        let t2 = self.shx * m.sx + self.sy * m.shx;
        let t4 = self.tx * m.sx + self.ty * m.shx + m.tx;
        self.shy = self.sx * m.shy + self.shy * m.sy;
        self.sy = self.shx * m.shy + self.sy * m.sy;
        self.ty = self.tx * m.shy + self.ty * m.sy + m.ty;
        self.sx = t0;
        self.shx = t2;
        self.tx = t4;
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordTransform for AffineTransform {
    fn apply(&self, coords: &mut [f64]) {
        for pair in coords.chunks_exact_mut(2) {
            let (x, y) = (pair[0], pair[1]);
            pair[0] = x * self.sx + y * self.shx + self.tx;
            pair[1] = x * self.shy + y * self.sy + self.ty;
        }
    }
}
