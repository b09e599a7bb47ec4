mod shapes;
mod xml;

use crate::errors::Result;
use crate::geometry::AffineTransform;
use crate::transform_attr::TransformAttr;

pub use shapes::shape_to_path_data;
pub use xml::{read_elements, ElementEvent, RawElement};

/// Containers whose content is never rendered directly.
const NON_RENDERED: &[&str] = &["defs", "clipPath", "mask", "marker", "pattern", "symbol"];

/// A path-bearing element with its accumulated transform.
#[derive(Clone, Debug, PartialEq)]
pub struct PathElement {
    pub id: Option<String>,
    /// Path data; basic shapes are already converted to equivalent path data
    pub data: String,
    /// Composition of all ancestor transforms and the element's own
    pub transform: AffineTransform,
}

/// Options controlling which elements are collected.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraversalOptions {
    pub strict_transforms: bool,
    pub paths_only: bool,
}

#[derive(Clone, Copy, Debug)]
struct Scope {
    transform: AffineTransform,
    hidden: bool,
}

impl Default for Scope {
    fn default() -> Self {
        Self {
            transform: AffineTransform::identity(),
            hidden: false,
        }
    }
}

fn element_transform(el: &RawElement, strict: bool) -> Result<AffineTransform> {
    let Some(value) = el.get_attr("transform") else {
        return Ok(AffineTransform::identity());
    };
    match value.parse::<TransformAttr>() {
        Ok(attr) => Ok(attr.to_affine()),
        Err(e) if strict => Err(e),
        Err(e) => {
            log::warn!("ignoring transform on <{}>: {e}", el.name());
            Ok(AffineTransform::identity())
        }
    }
}

/// Path data for an element, if it has any geometry to contribute.
fn element_path_data(el: &RawElement, options: &TraversalOptions) -> Option<String> {
    if el.name() == "path" {
        return el.get_attr("d").map(str::to_owned);
    }
    if options.paths_only {
        return None;
    }
    match shape_to_path_data(el) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("skipping <{}>: {e}", el.name());
            None
        }
    }
}

/// Collect every rendered path-bearing element of `input` in document order.
pub fn collect_path_elements(input: &str, options: &TraversalOptions) -> Result<Vec<PathElement>> {
    let events = read_elements(input)?;

    let mut elements = Vec::new();
    let mut stack = vec![Scope::default()];

    for event in &events {
        let (el, is_start) = match event {
            ElementEvent::Start(el) => (el, true),
            ElementEvent::Empty(el) => (el, false),
            ElementEvent::End(_) => {
                stack.pop();
                continue;
            }
        };
        let parent = stack.last().copied().unwrap_or_default();
        let hidden = parent.hidden || NON_RENDERED.contains(&el.name());
        let transform = if hidden {
            parent.transform
        } else {
            parent
                .transform
                .then(&element_transform(el, options.strict_transforms)?)
        };
        if is_start {
            stack.push(Scope { transform, hidden });
        }
        if hidden {
            continue;
        }
        if let Some(data) = element_path_data(el, options) {
            log::trace!("<{}> data '{data}'", el.name());
            elements.push(PathElement {
                id: el.get_attr("id").map(str::to_owned),
                data,
                transform,
            });
        }
    }
    log::debug!("found {} path elements", elements.len());
    Ok(elements)
}
