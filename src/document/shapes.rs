use itertools::Itertools;

use super::xml::RawElement;
use crate::errors::{Error, Result};

/// Parse a shape geometry attribute: a number with an optional `px` suffix.
fn parse_length(el: &RawElement, key: &str) -> Result<Option<f64>> {
    el.get_attr(key)
        .map(|value| {
            let value = value.trim();
            let num = value.strip_suffix("px").unwrap_or(value).trim_end();
            num.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    Error::Document(format!("invalid {key} '{value}' on <{}>", el.name()))
                })
        })
        .transpose()
}

fn length_or_zero(el: &RawElement, key: &str) -> Result<f64> {
    Ok(parse_length(el, key)?.unwrap_or(0.))
}

fn required_length(el: &RawElement, key: &str) -> Result<f64> {
    parse_length(el, key)?
        .ok_or_else(|| Error::Document(format!("missing {key} on <{}>", el.name())))
}

/// Fail the shape if derived coordinates have overflowed.
fn check_extent(el: &RawElement, extents: &[f64]) -> Result<()> {
    if extents.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::Document(format!(
            "<{}> geometry is out of range",
            el.name()
        )))
    }
}

/// Path data for a full ellipse as two half-arcs.
fn ellipse_data(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
    format!(
        "M {} {cy} A {rx} {ry} 0 0 1 {} {cy} A {rx} {ry} 0 0 1 {} {cy} Z",
        cx + rx,
        cx - rx,
        cx + rx
    )
}

fn rect_data(el: &RawElement) -> Result<Option<String>> {
    let x = length_or_zero(el, "x")?;
    let y = length_or_zero(el, "y")?;
    let w = required_length(el, "width")?;
    let h = required_length(el, "height")?;
    if w <= 0. || h <= 0. {
        return Ok(None);
    }
    // "If a properly specified value is provided for rx but not for ry,
    // then the user agent processes the rect element with the effective
    // value for ry as equal to rx" (and vice versa)
    let (rx, ry) = match (parse_length(el, "rx")?, parse_length(el, "ry")?) {
        (Some(rx), Some(ry)) => (rx, ry),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (None, None) => (0., 0.),
    };
    check_extent(el, &[x + w, y + h])?;
    let rx = rx.clamp(0., w / 2.);
    let ry = ry.clamp(0., h / 2.);
    if rx == 0. || ry == 0. {
        return Ok(Some(format!(
            "M {x} {y} H {} V {} H {x} Z",
            x + w,
            y + h
        )));
    }
    Ok(Some(format!(
        "M {} {y} H {} A {rx} {ry} 0 0 1 {} {} V {} A {rx} {ry} 0 0 1 {} {} H {} A {rx} {ry} 0 0 1 {x} {} V {} A {rx} {ry} 0 0 1 {} {y} Z",
        x + rx,
        x + w - rx,
        x + w,
        y + ry,
        y + h - ry,
        x + w - rx,
        y + h,
        x + rx,
        y + h - ry,
        y + ry,
        x + rx,
    )))
}

fn points_data(el: &RawElement, close: bool) -> Result<Option<String>> {
    let Some(points) = el.get_attr("points") else {
        return Ok(None);
    };
    let values = points
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|v| !v.is_empty())
        .map(|v| {
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| Error::Document(format!("invalid point value '{v}'")))
        })
        .collect::<Result<Vec<_>>>()?;
    // "If an odd number of coordinates is provided, then the element is in
    // error"; render up to the last complete pair
    let mut pairs = values.into_iter().tuples::<(f64, f64)>();
    let Some((x0, y0)) = pairs.next() else {
        return Ok(None);
    };
    let mut data = format!("M {x0} {y0}");
    for (x, y) in pairs {
        data.push_str(&format!(" L {x} {y}"));
    }
    if close {
        data.push_str(" Z");
    }
    Ok(Some(data))
}

/// Equivalent path data for an SVG basic shape.
///
/// Returns `Ok(None)` for elements which are not shapes or which render
/// nothing (e.g. zero size), and an error when geometry can't be parsed.
pub fn shape_to_path_data(el: &RawElement) -> Result<Option<String>> {
    match el.name() {
        "line" => {
            let x1 = length_or_zero(el, "x1")?;
            let y1 = length_or_zero(el, "y1")?;
            let x2 = length_or_zero(el, "x2")?;
            let y2 = length_or_zero(el, "y2")?;
            Ok(Some(format!("M {x1} {y1} L {x2} {y2}")))
        }
        "polyline" => points_data(el, false),
        "polygon" => points_data(el, true),
        "rect" => rect_data(el),
        "circle" => {
            let cx = length_or_zero(el, "cx")?;
            let cy = length_or_zero(el, "cy")?;
            let r = required_length(el, "r")?;
            check_extent(el, &[cx + r, cx - r, cy + r, cy - r])?;
            Ok((r > 0.).then(|| ellipse_data(cx, cy, r, r)))
        }
        "ellipse" => {
            let cx = length_or_zero(el, "cx")?;
            let cy = length_or_zero(el, "cy")?;
            let rx = required_length(el, "rx")?;
            let ry = required_length(el, "ry")?;
            check_extent(el, &[cx + rx, cx - rx, cy + ry, cy - ry])?;
            Ok((rx > 0. && ry > 0.).then(|| ellipse_data(cx, cy, rx, ry)))
        }
        _ => Ok(None),
    }
}
