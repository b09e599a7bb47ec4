use super::arc::EllipticalArc;
use super::command::Segment;
use crate::geometry::{AffineTransform, Point};

/// Approximates curved segments with straight line runs.
///
/// `tolerance` is the maximum permitted distance between the curve and
/// its approximation; `max_depth` bounds Bézier subdivision regardless
/// of tolerance so degenerate input can't recurse indefinitely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flattener {
    tolerance: f64,
    max_depth: u32,
}

impl Flattener {
    pub fn new(tolerance: f64, max_depth: u32) -> Self {
        Self {
            tolerance,
            max_depth,
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// A flattener for local coordinates which will subsequently be mapped
    /// through `transform`, keeping the deviation bound in output space.
    pub fn for_transform(&self, transform: &AffineTransform) -> Self {
        let scale = transform.max_scale();
        if scale.is_finite() && scale > 0. {
            Self::new(self.tolerance / scale, self.max_depth)
        } else {
            *self
        }
    }

    /// Append the points approximating `segment` to `out`.
    ///
    /// The segment's start point is not emitted; the final point emitted is
    /// always exactly the segment end point. Moves and closes emit nothing
    /// here as they are the assembler's concern.
    pub fn flatten(&self, segment: &Segment, out: &mut Vec<Point>) {
        match *segment {
            Segment::MoveTo(_) | Segment::ClosePath(_) => {}
            Segment::LineTo(to) => out.push(to),
            Segment::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => {
                // overflowed control points can never pass the flatness test
                if [from, ctrl1, ctrl2].iter().all(Point::is_finite) {
                    self.cubic(from, ctrl1, ctrl2, to, 0, out)
                } else {
                    out.push(to)
                }
            }
            Segment::Quadratic { from, ctrl, to } => {
                if from.is_finite() && ctrl.is_finite() {
                    self.quadratic(from, ctrl, to, 0, out)
                } else {
                    out.push(to)
                }
            }
            Segment::Arc {
                from,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to,
            } => {
                match EllipticalArc::from_endpoints(
                    from,
                    to,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                ) {
                    Some(arc) => self.arc(&arc, out),
                    None => out.push(to),
                }
                // guarantee the exact endpoint rather than a computed one
                if let Some(last) = out.last_mut() {
                    *last = to;
                }
            }
        }
    }

    fn cubic(&self, p0: Point, p1: Point, p2: Point, p3: Point, depth: u32, out: &mut Vec<Point>) {
        // The curve lies within the convex hull of its control points, so if
        // both inner points are within tolerance of the chord, so is the curve.
        if depth >= self.max_depth
            || (p1.distance_to_segment(p0, p3) <= self.tolerance
                && p2.distance_to_segment(p0, p3) <= self.tolerance)
        {
            out.push(p3);
            return;
        }
        // de Casteljau split at t = 0.5
        let p01 = p0.midpoint(p1);
        let p12 = p1.midpoint(p2);
        let p23 = p2.midpoint(p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let mid = p012.midpoint(p123);
        self.cubic(p0, p01, p012, mid, depth + 1, out);
        self.cubic(mid, p123, p23, p3, depth + 1, out);
    }

    fn quadratic(&self, p0: Point, p1: Point, p2: Point, depth: u32, out: &mut Vec<Point>) {
        if depth >= self.max_depth || p1.distance_to_segment(p0, p2) <= self.tolerance {
            out.push(p2);
            return;
        }
        let p01 = p0.midpoint(p1);
        let p12 = p1.midpoint(p2);
        let mid = p01.midpoint(p12);
        self.quadratic(p0, p01, mid, depth + 1, out);
        self.quadratic(mid, p12, p2, depth + 1, out);
    }

    fn arc(&self, arc: &EllipticalArc, out: &mut Vec<Point>) {
        let steps = arc.step_count(self.tolerance);
        log::trace!("arc {:?} in {steps} steps", arc.center);
        out.extend(
            (1..=steps).map(|i| arc.point_at(arc.theta1 + arc.delta * i as f64 / steps as f64)),
        );
    }
}
