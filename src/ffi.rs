//! C ABI for converting SVG documents to polylines.
//!
//! ```c
//! typedef struct { double x; double y; } Point;
//! typedef struct { Point *ptr; size_t len; } Polyline;
//!
//! uint8_t svg_str_to_polylines(const char *svg, Polyline **polylines, size_t *polylines_len);
//! uint8_t svg_str_to_polylines_with_config(const char *svg, double tolerance, uint32_t max_depth,
//!                                          bool strict_transforms,
//!                                          Polyline **polylines, size_t *polylines_len);
//! void free_polylines(Polyline *polylines, size_t polylines_len);
//! ```
//!
//! Return values are the codes of [`ErrorCode`]. On success the caller owns
//! the returned array and must release it with `free_polylines`, exactly once.
//! Empty results and all failures set `(NULL, 0)`.

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::errors::{Error, ErrorCode, Result};
use crate::geometry::{Point, Polyline};
use crate::{convert_bytes, ConvertConfig};

/// A polyline as seen from C: a pointer to `len` contiguous points.
#[derive(Debug)]
#[repr(C)]
pub struct FfiPolyline {
    pub ptr: *mut Point,
    pub len: usize,
}

/// Owned conversion output on the Rust side of the boundary.
#[derive(Debug, Default, PartialEq)]
pub struct PolylineSet(Vec<Polyline>);

impl From<Vec<Polyline>> for PolylineSet {
    fn from(polylines: Vec<Polyline>) -> Self {
        Self(polylines)
    }
}

impl PolylineSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hand ownership to the caller as a raw array.
    ///
    /// Empty sets are returned as `(NULL, 0)`.
    fn into_raw(self) -> (*mut FfiPolyline, usize) {
        if self.0.is_empty() {
            return (ptr::null_mut(), 0);
        }
        let raw: Box<[FfiPolyline]> = self
            .0
            .into_iter()
            .map(|polyline| {
                // boxed slices have capacity == len, so the allocation
                // can be rebuilt from (ptr, len) alone
                let points = polyline.into_boxed_slice();
                let len = points.len();
                FfiPolyline {
                    ptr: Box::into_raw(points).cast::<Point>(),
                    len,
                }
            })
            .collect();
        let len = raw.len();
        (Box::into_raw(raw).cast::<FfiPolyline>(), len)
    }

    /// Take back ownership of an array produced by [`PolylineSet::into_raw`].
    ///
    /// # Safety
    ///
    /// `(polylines, len)` must have come from `into_raw` and not been
    /// reclaimed already.
    unsafe fn from_raw(polylines: *mut FfiPolyline, len: usize) -> Self {
        if polylines.is_null() {
            return Self::default();
        }
        let raw = Box::from_raw(ptr::slice_from_raw_parts_mut(polylines, len));
        Self(
            raw.iter()
                .map(|p| {
                    if p.ptr.is_null() {
                        Vec::new()
                    } else {
                        Box::from_raw(ptr::slice_from_raw_parts_mut(p.ptr, p.len)).into_vec()
                    }
                })
                .collect(),
        )
    }
}

fn convert_c_str(svg: *const c_char, config: &ConvertConfig) -> Result<PolylineSet> {
    if svg.is_null() {
        return Err(Error::InvalidArgument("svg is null".to_string()));
    }
    // SAFETY: caller guarantees a NUL-terminated string
    let bytes = unsafe { CStr::from_ptr(svg) }.to_bytes();
    Ok(convert_bytes(bytes, config)?.into())
}

/// Convert and write results to the out-parameters, returning the status code.
///
/// # Safety
///
/// Out-parameters must be valid for writes if non-null.
unsafe fn convert_into(
    svg: *const c_char,
    config: &ConvertConfig,
    out_polylines: *mut *mut FfiPolyline,
    out_len: *mut usize,
) -> u8 {
    if out_polylines.is_null() || out_len.is_null() {
        return ErrorCode::InvalidArgument.into();
    }
    *out_polylines = ptr::null_mut();
    *out_len = 0;

    match convert_c_str(svg, config) {
        Ok(set) => {
            log::debug!("returning {} polylines", set.len());
            let (polylines, len) = set.into_raw();
            *out_polylines = polylines;
            *out_len = len;
            ErrorCode::Success.into()
        }
        Err(e) => {
            log::debug!("conversion failed: {e}");
            e.code().into()
        }
    }
}

/// Convert an SVG document with default settings.
///
/// # Safety
///
/// `svg` must be null or a NUL-terminated string; `polylines` and
/// `polylines_len` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn svg_str_to_polylines(
    svg: *const c_char,
    polylines: *mut *mut FfiPolyline,
    polylines_len: *mut usize,
) -> u8 {
    convert_into(svg, &ConvertConfig::default(), polylines, polylines_len)
}

/// Convert an SVG document with explicit flattening settings.
///
/// # Safety
///
/// As for [`svg_str_to_polylines`].
#[no_mangle]
pub unsafe extern "C" fn svg_str_to_polylines_with_config(
    svg: *const c_char,
    tolerance: f64,
    max_depth: u32,
    strict_transforms: bool,
    polylines: *mut *mut FfiPolyline,
    polylines_len: *mut usize,
) -> u8 {
    let config = ConvertConfig {
        tolerance,
        max_depth,
        strict_transforms,
        ..Default::default()
    };
    convert_into(svg, &config, polylines, polylines_len)
}

/// Release polylines returned by one of the conversion functions.
///
/// A null `polylines` is ignored.
///
/// # Safety
///
/// Must be called at most once per successful conversion, with exactly the
/// pointer and length it returned.
#[no_mangle]
pub unsafe extern "C" fn free_polylines(polylines: *mut FfiPolyline, polylines_len: usize) {
    drop(PolylineSet::from_raw(polylines, polylines_len));
}
