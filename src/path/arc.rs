use std::f64::consts::PI;

use crate::geometry::Point;

/// Center parameterization of an SVG elliptical arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation, radians
    pub phi: f64,
    /// start angle, radians
    pub theta1: f64,
    /// signed sweep, radians; positive is the positive-angle direction
    pub delta: f64,
}

impl EllipticalArc {
    /// Convert from SVG endpoint parameterization.
    ///
    /// Returns `None` for arcs which SVG renders as a straight line (or not
    /// at all): zero radii or coincident endpoints.
    ///
    /// Implements https://www.w3.org/TR/SVG2/implnote.html#ArcConversionEndpointToCenter
    pub fn from_endpoints(
        start: Point,
        end: Point,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc_flag: bool,
        sweep_flag: bool,
    ) -> Option<Self> {
        const EPSILON: f64 = 1e-12;

        if start == end {
            return None;
        }
        // "If rx = 0 or ry = 0, then treat this as a straight line segment"
        // and "if rx or ry have negative signs, these are dropped"
        let (mut rx, mut ry) = (rx.abs(), ry.abs());
        if rx < EPSILON || ry < EPSILON {
            return None;
        }

        let phi = x_axis_rotation.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (x1, y1) = start.as_xy();
        let (x2, y2) = end.as_xy();

        // Step 1: Compute (x1', y1')
        let x1_prime = cos_phi * (x1 - x2) / 2.0 + sin_phi * (y1 - y2) / 2.0;
        let y1_prime = -sin_phi * (x1 - x2) / 2.0 + cos_phi * (y1 - y2) / 2.0;

        // Scale radii if required to reach the endpoint
        // https://www.w3.org/TR/SVG2/implnote.html#ArcCorrectionOutOfRangeRadii
        let lambda = (x1_prime * x1_prime) / (rx * rx) + (y1_prime * y1_prime) / (ry * ry);
        if lambda > 1.0 {
            rx *= lambda.sqrt();
            ry *= lambda.sqrt();
        }

        // Step 2: Compute (cx', cy')
        let sign = if large_arc_flag != sweep_flag {
            1.0
        } else {
            -1.0
        };
        let coeff_sq = ((rx * ry).powi(2) - (rx * y1_prime).powi(2) - (ry * x1_prime).powi(2))
            / ((rx * y1_prime).powi(2) + (ry * x1_prime).powi(2));
        let coeff = sign * coeff_sq.max(0.0).sqrt();
        let cx_prime = coeff * (rx * y1_prime) / ry;
        let cy_prime = coeff * -(ry * x1_prime) / rx;

        // Step 3: Compute (cx, cy) from (cx', cy')
        let cx = cos_phi * cx_prime - sin_phi * cy_prime + (x1 + x2) / 2.0;
        let cy = sin_phi * cx_prime + cos_phi * cy_prime + (y1 + y2) / 2.0;

        // Step 4: Compute theta1 and delta_theta angles
        fn angle_between(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
            let dot = ux * vx + uy * vy;
            let det = ux * vy - uy * vx;
            // atan2 is more robust than the arccos formulation
            det.atan2(dot)
        }

        // theta1 = angle((1,0), ((x1'-cx')/rx, (y1'-cy')/ry))
        let theta1 = angle_between(
            1.0,
            0.0,
            (x1_prime - cx_prime) / rx,
            (y1_prime - cy_prime) / ry,
        );

        // delta_theta = angle(((x1'-cx')/rx, (y1'-cy')/ry), ((-x1'-cx')/rx, (-y1'-cy')/ry))
        let mut delta = angle_between(
            (x1_prime - cx_prime) / rx,
            (y1_prime - cy_prime) / ry,
            (-x1_prime - cx_prime) / rx,
            (-y1_prime - cy_prime) / ry,
        );

        // Adjust delta_theta according to sweep flag
        if sweep_flag && delta < 0.0 {
            delta += 2.0 * PI;
        } else if !sweep_flag && delta > 0.0 {
            delta -= 2.0 * PI;
        }

        let arc = Self {
            center: Point::new(cx, cy),
            rx,
            ry,
            phi,
            theta1,
            delta,
        };
        [cx, cy, rx, ry, theta1, delta]
            .iter()
            .all(|v| v.is_finite())
            .then_some(arc)
    }

    /// Point on the ellipse at parametric angle `t` (radians)
    pub fn point_at(&self, t: f64) -> Point {
        let (sin_t, cos_t) = t.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();

        Point::new(
            self.center.x + self.rx * cos_t * cos_phi - self.ry * sin_t * sin_phi,
            self.center.y + self.rx * cos_t * sin_phi + self.ry * sin_t * cos_phi,
        )
    }

    /// Number of equal angular steps needed so no chord deviates from the
    /// arc by more than `tolerance`.
    pub fn step_count(&self, tolerance: f64) -> usize {
        let r = self.rx.max(self.ry);
        // sagitta of a chord subtending angle θ on a circle of radius r is
        // r(1 - cos(θ/2)); the ellipse is an affine image of such a circle
        // stretched by at most r.
        let max_step = if tolerance < r {
            (2. * (1. - tolerance / r).acos()).min(PI / 2.)
        } else {
            PI / 2.
        };
        let steps = (self.delta.abs() / max_step).ceil();
        if steps.is_finite() && steps >= 1. {
            steps as usize
        } else {
            1
        }
    }
}
