use super::command::{PenState, Segment};
use super::flatten::Flattener;
use super::parser::PathParser;
use crate::errors::{Error, Result};
use crate::geometry::{AffineTransform, Point, Polyline};

/// Groups flattened points into one polyline per sub-path.
///
/// Points are given in local coordinates and mapped through `transform`
/// as they are appended.
pub struct PolylineBuilder<'a> {
    transform: &'a AffineTransform,
    flattener: Flattener,
    polylines: Vec<Polyline>,
    current: Option<Polyline>,
    scratch: Vec<Point>,
}

impl<'a> PolylineBuilder<'a> {
    pub fn new(transform: &'a AffineTransform, flattener: &Flattener) -> Self {
        Self {
            transform,
            flattener: flattener.for_transform(transform),
            polylines: Vec::new(),
            current: None,
            scratch: Vec::new(),
        }
    }

    fn finish_current(&mut self) {
        if let Some(polyline) = self.current.take() {
            self.polylines.push(polyline);
        }
    }

    pub fn push_segment(&mut self, segment: &Segment) {
        match *segment {
            Segment::MoveTo(p) => {
                self.finish_current();
                self.current = Some(vec![self.transform.apply(p)]);
            }
            Segment::ClosePath(start) => {
                let start = self.transform.apply(start);
                if let Some(polyline) = self.current.as_mut() {
                    if polyline.last() != Some(&start) {
                        polyline.push(start);
                    }
                }
            }
            _ => {
                self.scratch.clear();
                self.flattener.flatten(segment, &mut self.scratch);
                let transform = self.transform;
                // interpreter guarantees a moveto first, so this only
                // creates a polyline when driven directly with segments
                let current = self.current.get_or_insert_with(Vec::new);
                current.extend(self.scratch.iter().map(|&p| transform.apply(p)));
            }
        }
    }

    pub fn finish(mut self) -> Vec<Polyline> {
        self.finish_current();
        self.polylines
    }
}

/// Convert the path data of a single element to polylines.
///
/// Any malformed path data fails the whole element; no partial output is
/// returned.
pub fn path_to_polylines(
    data: &str,
    transform: &AffineTransform,
    flattener: &Flattener,
) -> Result<Vec<Polyline>> {
    let mut pen = PenState::new();
    let mut builder = PolylineBuilder::new(transform, flattener);
    for cmd in PathParser::new(data) {
        let cmd = cmd?;
        let segment = pen.resolve(&cmd);
        log::trace!("{cmd:?} -> {segment:?}");
        // each operand is finite, but relative offsets can still overflow
        if !segment.end().is_finite() {
            return Err(Error::Path(format!("coordinate overflow in {cmd:?}")));
        }
        builder.push_segment(&segment);
    }
    Ok(builder.finish())
}
