use std::ops::{Add, Mul, Sub};

#[cfg(feature = "json")]
use serde_derive::{Deserialize, Serialize};

/// A point in output (post-transform) coordinates.
///
/// `#[repr(C)]` so a `[Point]` slice can be handed directly across the C
/// boundary as `struct { double x; double y; }` values.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(into = "(f64, f64)", from = "(f64, f64)"))]
#[repr(C)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An ordered, non-empty sequence of points in drawing order.
pub type Polyline = Vec<Point>;

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation; `t == 0` gives `self`, `t == 1` gives `other`.
    pub fn lerp(&self, other: Point, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    pub fn midpoint(&self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2., (self.y + other.y) / 2.)
    }

    /// Reflect `self` through `center`.
    pub fn reflect(&self, center: Point) -> Self {
        Self::new(2. * center.x - self.x, 2. * center.y - self.y)
    }

    /// Distance from `self` to the line segment `a`-`b`.
    ///
    /// Degenerates to the distance to `a` when the segment has no length.
    pub fn distance_to_segment(&self, a: Point, b: Point) -> f64 {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0. {
            return self.distance(a);
        }
        let t = ((self.x - a.x) * dx + (self.y - a.y) * dy) / len_sq;
        self.distance(a.lerp(b, t.clamp(0., 1.)))
    }
}

impl From<(f64, f64)> for Point {
    fn from(val: (f64, f64)) -> Self {
        Self { x: val.0, y: val.1 }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}
