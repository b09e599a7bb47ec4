mod affine;
mod point;

pub use affine::AffineTransform;
pub use point::{Point, Polyline};
