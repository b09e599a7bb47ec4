use std::str::FromStr;

use itertools::Itertools;

use crate::errors::{Error, Result};
use crate::geometry::AffineTransform;
use crate::path::{PathSyntax, SvgPathSyntax};

#[derive(Clone, Debug, PartialEq)]
enum TransformType {
    Translate(f64, f64),
    Scale(f64, f64),
    Rotate(f64, f64, f64),
    SkewX(f64),
    SkewY(f64),
    Matrix(f64, f64, f64, f64, f64, f64),
}

/// Argument lists share the number grammar of path data, so `10-5` is
/// two arguments.
fn parse_args(value: &str) -> Result<Vec<f64>> {
    let mut ps = SvgPathSyntax::new(value);
    let mut args = Vec::new();
    ps.skip_whitespace();
    while !ps.at_end() {
        let arg = ps.read_number().map_err(|e| match e {
            Error::Path(msg) => Error::Transform(format!("invalid argument in '{value}': {msg}")),
            e => e,
        })?;
        args.push(arg);
    }
    Ok(args)
}

fn arg_count_error(name: &str, count: usize) -> Error {
    Error::Transform(format!(
        "invalid number of arguments for {name}: {count}"
    ))
}

impl FromStr for TransformType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, '(');
        let name = parts
            .next()
            .ok_or_else(|| Error::Transform("no transform name".to_owned()))?
            .trim();
        let args = parts
            .next()
            .ok_or_else(|| Error::Transform(format!("no arguments for '{name}'")))?
            .strip_suffix(')')
            .ok_or_else(|| Error::Transform("no closing bracket".to_owned()))
            .and_then(parse_args)?;
        // See https://www.w3.org/TR/SVG11/coords.html#TransformAttribute
        Ok(match name.to_lowercase().as_str() {
            "translate" => {
                // "translate(<tx> [<ty>]), which specifies a translation by tx and ty. If <ty> is not provided, it is assumed to be zero."
                match args[..] {
                    [tx] => TransformType::Translate(tx, 0.),
                    [tx, ty] => TransformType::Translate(tx, ty),
                    _ => return Err(arg_count_error(name, args.len())),
                }
            }
            "scale" => {
                // "scale(<sx> [<sy>]), which specifies a scale operation by sx and sy. If <sy> is not provided, it is assumed to be equal to <sx>."
                match args[..] {
                    [s] => TransformType::Scale(s, s),
                    [sx, sy] => TransformType::Scale(sx, sy),
                    _ => return Err(arg_count_error(name, args.len())),
                }
            }
            "rotate" => {
                // "rotate(<rotate-angle> [<cx> <cy>]), which specifies a rotation by <rotate-angle> degrees about a given point."
                match args[..] {
                    [angle] => TransformType::Rotate(angle, 0., 0.),
                    [angle, cx, cy] => TransformType::Rotate(angle, cx, cy),
                    _ => return Err(arg_count_error(name, args.len())),
                }
            }
            "skewx" => match args[..] {
                [angle] => TransformType::SkewX(angle),
                _ => return Err(arg_count_error(name, args.len())),
            },
            "skewy" => match args[..] {
                [angle] => TransformType::SkewY(angle),
                _ => return Err(arg_count_error(name, args.len())),
            },
            "matrix" => {
                // "matrix(<a> <b> <c> <d> <e> <f>), which specifies a transformation in the form of a transformation matrix of six values."
                match args[..] {
                    [a, b, c, d, e, f] => TransformType::Matrix(a, b, c, d, e, f),
                    _ => return Err(arg_count_error(name, args.len())),
                }
            }
            _ => Err(Error::Transform(format!(
                "unknown transform type: '{name}'"
            )))?,
        })
    }
}

impl TransformType {
    fn to_affine(&self) -> AffineTransform {
        match *self {
            TransformType::Translate(tx, ty) => AffineTransform::translate(tx, ty),
            TransformType::Scale(sx, sy) => AffineTransform::scale(sx, sy),
            TransformType::Rotate(angle, cx, cy) => {
                if cx == 0. && cy == 0. {
                    AffineTransform::rotate(angle)
                } else {
                    AffineTransform::rotate_around(angle, cx, cy)
                }
            }
            TransformType::SkewX(angle) => AffineTransform::skew_x(angle),
            TransformType::SkewY(angle) => AffineTransform::skew_y(angle),
            TransformType::Matrix(a, b, c, d, e, f) => AffineTransform::new(a, b, c, d, e, f),
        }
    }
}

/// A parsed SVG `transform` attribute: a list of transform functions
/// applied in the order written.
#[derive(Debug, Default, PartialEq)]
pub struct TransformAttr {
    transforms: Vec<TransformType>,
}

impl FromStr for TransformAttr {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        if !value.is_empty() && !value.ends_with(')') {
            return Err(Error::Transform(format!(
                "trailing content in transform: '{value}'"
            )));
        }
        let parts = value.split_inclusive(')').map(|v| v.trim());
        Ok(Self {
            transforms: parts
                .filter(|v| !v.is_empty())
                .map(|v| v.trim_start_matches([',', ' ', '\t', '\n', '\r']))
                .map(|v| v.parse())
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl std::fmt::Display for TransformType {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            TransformType::Translate(tx, ty) => write!(w, "translate({tx}, {ty})"),
            TransformType::Scale(sx, sy) => write!(w, "scale({sx}, {sy})"),
            TransformType::Rotate(angle, cx, cy) => write!(w, "rotate({angle}, {cx}, {cy})"),
            TransformType::SkewX(angle) => write!(w, "skewX({angle})"),
            TransformType::SkewY(angle) => write!(w, "skewY({angle})"),
            TransformType::Matrix(a, b, c, d, e, f) => {
                write!(w, "matrix({a}, {b}, {c}, {d}, {e}, {f})")
            }
        }
    }
}

impl std::fmt::Display for TransformAttr {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(w, "{}", self.transforms.iter().join(" "))
    }
}

impl TransformAttr {
    /// Collapse the transform list into a single matrix, composing
    /// left-to-right in the order written.
    pub fn to_affine(&self) -> AffineTransform {
        self.transforms
            .iter()
            .fold(AffineTransform::identity(), |acc, t| acc.then(&t.to_affine()))
    }
}
