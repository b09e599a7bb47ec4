mod arc;
mod command;
mod flatten;
mod parser;
mod polyline;
mod syntax;

pub use command::{PathCommand, PenState, Segment};
pub use flatten::Flattener;
pub use parser::{parse_path_data, PathParser};
pub use polyline::{path_to_polylines, PolylineBuilder};
pub use syntax::{PathSyntax, SvgPathSyntax, Token};
