//! ## svg2polylines - flatten SVG paths into polylines
//!
//! Converts the path data (and basic shapes) of an SVG document into lists of
//! straight-line polylines, for use by plotters, CNC / laser tooling, or any
//! other consumer which can't draw curves.
//!
//! Curves are approximated by straight segments, with the maximum deviation
//! from the true curve bounded by a configurable tolerance. Transforms on
//! elements and their ancestors are applied, so all output coordinates are in
//! the document's root coordinate space.
//!
//! ## Library use
//!
//! A `ConvertConfig` should be created as appropriate to configure the
//! conversion, and the appropriate `convert_*` function called with it.
//!
//! A C ABI is provided in the `ffi` module for use from other languages.
//!
//! ## Example
//!
//! ```
//! let cfg = svg2polylines::ConvertConfig::default();
//!
//! let input = r#"<svg><path d="M 0,0 L 10,0 10,10 Z"/></svg>"#;
//! let polylines = svg2polylines::convert_str(input, &cfg).unwrap();
//!
//! assert_eq!(polylines.len(), 1);
//! assert_eq!(polylines[0].len(), 4);
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "json")]
use serde_derive::Serialize;

#[cfg(feature = "cli")]
pub mod cli;
mod document;
pub mod errors;
pub mod ffi;
pub mod geometry;
pub mod path;
mod transform_attr;

use document::{collect_path_elements, TraversalOptions};
pub use errors::{Error, ErrorCode, Result};
pub use geometry::{AffineTransform, Point, Polyline};
use path::{path_to_polylines, Flattener};
pub use transform_attr::TransformAttr;

// Allow users of this as a library to easily retrieve the version being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings for a single conversion.
///
/// Alternate front-ends may use this directly rather than `cli::Config`,
/// which wraps this struct when run as a command-line program.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Maximum distance between a curve and its approximation (user units)
    pub tolerance: f64,
    /// Maximum recursion depth when subdividing Bézier curves
    pub max_depth: u32,
    /// Treat malformed `transform` attributes as errors rather than ignoring them
    pub strict_transforms: bool,
    /// Only convert `<path>` elements, ignoring basic shapes
    pub paths_only: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.1,
            max_depth: 16,
            strict_transforms: false,
            paths_only: false,
        }
    }
}

impl ConvertConfig {
    pub const MAX_DEPTH_LIMIT: u32 = 32;

    /// Check settings are usable, returning `Error::Config` if not.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0. {
            return Err(Error::Config(format!(
                "tolerance must be a positive number, not {}",
                self.tolerance
            )));
        }
        if !(1..=Self::MAX_DEPTH_LIMIT).contains(&self.max_depth) {
            return Err(Error::Config(format!(
                "max depth must be between 1 and {}, not {}",
                Self::MAX_DEPTH_LIMIT,
                self.max_depth
            )));
        }
        Ok(())
    }

    fn flattener(&self) -> Flattener {
        Flattener::new(self.tolerance, self.max_depth)
    }

    fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            strict_transforms: self.strict_transforms,
            paths_only: self.paths_only,
        }
    }
}

/// A polyline labelled with the `id` of the element it came from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct LabelledPolyline {
    pub id: Option<String>,
    pub points: Polyline,
}

/// Convert `input` to polylines, keeping the `id` of each source element.
///
/// Output is in document order, and within each element in sub-path order.
pub fn convert_str_with_ids(input: &str, config: &ConvertConfig) -> Result<Vec<LabelledPolyline>> {
    config.validate()?;
    let flattener = config.flattener();
    let elements = collect_path_elements(input, &config.traversal_options())?;

    let mut output = Vec::new();
    for el in elements {
        let polylines = path_to_polylines(&el.data, &el.transform, &flattener).map_err(|e| {
            match (e, &el.id) {
                (Error::Path(reason), Some(id)) => Error::Path(format!("{reason} (in '{id}')")),
                (e, _) => e,
            }
        })?;
        output.extend(polylines.into_iter().map(|points| LabelledPolyline {
            id: el.id.clone(),
            points,
        }));
    }
    log::debug!("converted to {} polylines", output.len());
    Ok(output)
}

/// Convert the SVG document `input` to polylines.
pub fn convert_str(input: &str, config: &ConvertConfig) -> Result<Vec<Polyline>> {
    Ok(convert_str_with_ids(input, config)?
        .into_iter()
        .map(|lp| lp.points)
        .collect())
}

/// Convert `input` using default `ConvertConfig` settings.
pub fn convert_str_default(input: &str) -> Result<Vec<Polyline>> {
    convert_str(input, &ConvertConfig::default())
}

/// Convert a raw byte buffer, which must be UTF-8 encoded.
pub fn convert_bytes(input: &[u8], config: &ConvertConfig) -> Result<Vec<Polyline>> {
    let input = std::str::from_utf8(input)?;
    convert_str(input, config)
}

/// Convert `input`, returning polylines as a JSON array of arrays of `[x, y]` pairs.
#[cfg(feature = "json")]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn convert_json(input: String, tolerance: f64) -> core::result::Result<String, String> {
    let cfg = ConvertConfig {
        tolerance,
        ..Default::default()
    };
    let polylines = convert_str(&input, &cfg).map_err(|e| e.to_string())?;
    serde_json::to_string(&polylines).map_err(|e| e.to_string())
}
