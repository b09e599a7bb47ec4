use super::Point;

/// A 2x3 affine matrix in SVG `matrix(a b c d e f)` order:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::new(1., 0., 0., 1., 0., 0.)
    }

    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1., 0., 0., 1., tx, ty)
    }

    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0., 0., sy, 0., 0.)
    }

    /// Rotation by `angle` degrees about the origin
    pub fn rotate(angle: f64) -> Self {
        let (sin_a, cos_a) = angle.to_radians().sin_cos();
        Self::new(cos_a, sin_a, -sin_a, cos_a, 0., 0.)
    }

    /// Rotation by `angle` degrees about (cx, cy)
    pub fn rotate_around(angle: f64, cx: f64, cy: f64) -> Self {
        Self::translate(cx, cy)
            .then(&Self::rotate(angle))
            .then(&Self::translate(-cx, -cy))
    }

    pub fn skew_x(angle: f64) -> Self {
        Self::new(1., 0., angle.to_radians().tan(), 1., 0., 0.)
    }

    pub fn skew_y(angle: f64) -> Self {
        Self::new(1., angle.to_radians().tan(), 0., 1., 0., 0.)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Compose with `inner`, which is applied to points *before* `self`.
    ///
    /// This matches SVG's left-to-right reading of a transform list:
    /// `translate(10,0) scale(2)` is `translate.then(&scale)`.
    pub fn then(&self, inner: &AffineTransform) -> Self {
        Self {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Largest factor by which this transform can stretch a distance
    /// (the larger singular value of the linear part).
    pub fn max_scale(&self) -> f64 {
        let p = self.a * self.a + self.b * self.b;
        let q = self.a * self.c + self.b * self.d;
        let r = self.c * self.c + self.d * self.d;
        let mean = (p + r) / 2.;
        let diff = ((p - r) / 2.).hypot(q);
        (mean + diff).sqrt()
    }
}
