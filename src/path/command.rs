use crate::geometry::Point;

/// A drawing instruction as written in path data.
///
/// Coordinates are relative to the pen position when `abs` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo {
        abs: bool,
        x: f64,
        y: f64,
    },
    LineTo {
        abs: bool,
        x: f64,
        y: f64,
    },
    HLineTo {
        abs: bool,
        x: f64,
    },
    VLineTo {
        abs: bool,
        y: f64,
    },
    CubicCurveTo {
        abs: bool,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadraticCurveTo {
        abs: bool,
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    SmoothCubicCurveTo {
        abs: bool,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    SmoothQuadraticCurveTo {
        abs: bool,
        x: f64,
        y: f64,
    },
    ArcTo {
        abs: bool,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    },
    ClosePath {
        abs: bool,
    },
}

/// A path command with every coordinate resolved to absolute (but still
/// untransformed) user space, and implicit control points made explicit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    Cubic {
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    Quadratic {
        from: Point,
        ctrl: Point,
        to: Point,
    },
    Arc {
        from: Point,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    /// Return to the given sub-path start point
    ClosePath(Point),
}

impl Segment {
    /// The pen position after this segment is drawn
    pub fn end(&self) -> Point {
        match *self {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::ClosePath(p) => p,
            Segment::Cubic { to, .. } | Segment::Quadratic { to, .. } | Segment::Arc { to, .. } => {
                to
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LastControl {
    Cubic(Point),
    Quadratic(Point),
}

/// Pen state for one path element.
///
/// Tracks what is needed to turn relative and 'smooth' commands into
/// absolute [`Segment`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PenState {
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // final control point of the previous command, if it was a curve;
    // needed to evaluate 'S'/'s' and 'T'/'t'
    last_control: Option<LastControl>,
}

impl PenState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn subpath_start(&self) -> Point {
        self.subpath_start
    }

    fn point(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            Point::new(x, y)
        } else {
            Point::new(self.position.x + x, self.position.y + y)
        }
    }

    /// Resolve `cmd` against the current state, returning the absolute
    /// segment and advancing the pen to its end point.
    pub fn resolve(&mut self, cmd: &PathCommand) -> Segment {
        let from = self.position;
        let mut last_control = None;
        let segment = match *cmd {
            PathCommand::MoveTo { abs, x, y } => {
                let to = self.point(abs, x, y);
                self.subpath_start = to;
                Segment::MoveTo(to)
            }
            PathCommand::LineTo { abs, x, y } => Segment::LineTo(self.point(abs, x, y)),
            PathCommand::HLineTo { abs, x } => {
                let x = if abs { x } else { from.x + x };
                Segment::LineTo(Point::new(x, from.y))
            }
            PathCommand::VLineTo { abs, y } => {
                let y = if abs { y } else { from.y + y };
                Segment::LineTo(Point::new(from.x, y))
            }
            PathCommand::CubicCurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let ctrl2 = self.point(abs, x2, y2);
                last_control = Some(LastControl::Cubic(ctrl2));
                Segment::Cubic {
                    from,
                    ctrl1: self.point(abs, x1, y1),
                    ctrl2,
                    to: self.point(abs, x, y),
                }
            }
            PathCommand::SmoothCubicCurveTo { abs, x2, y2, x, y } => {
                // "The first control point is assumed to be the reflection of the second
                //  control point on the previous command relative to the current point.
                //  If there is no previous command or if the previous command was not an
                //  C, c, S or s, assume the first control point is coincident with the
                //  current point."
                let ctrl1 = match self.last_control {
                    Some(LastControl::Cubic(prev)) => prev.reflect(from),
                    _ => from,
                };
                let ctrl2 = self.point(abs, x2, y2);
                last_control = Some(LastControl::Cubic(ctrl2));
                Segment::Cubic {
                    from,
                    ctrl1,
                    ctrl2,
                    to: self.point(abs, x, y),
                }
            }
            PathCommand::QuadraticCurveTo { abs, x1, y1, x, y } => {
                let ctrl = self.point(abs, x1, y1);
                last_control = Some(LastControl::Quadratic(ctrl));
                Segment::Quadratic {
                    from,
                    ctrl,
                    to: self.point(abs, x, y),
                }
            }
            PathCommand::SmoothQuadraticCurveTo { abs, x, y } => {
                // "The control point is assumed to be the reflection of the control point
                //  on the previous command relative to the current point. (If there is no
                //  previous command or if the previous command was not a Q, q, T or t,
                //  assume the control point is coincident with the current point.)"
                let ctrl = match self.last_control {
                    Some(LastControl::Quadratic(prev)) => prev.reflect(from),
                    _ => from,
                };
                last_control = Some(LastControl::Quadratic(ctrl));
                Segment::Quadratic {
                    from,
                    ctrl,
                    to: self.point(abs, x, y),
                }
            }
            PathCommand::ArcTo {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => Segment::Arc {
                from,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to: self.point(abs, x, y),
            },
            PathCommand::ClosePath { .. } => Segment::ClosePath(self.subpath_start),
        };
        self.position = segment.end();
        self.last_control = last_control;
        segment
    }
}
