use std::ffi::CString;
use std::ptr;

use super::utils::p;
use svg2polylines::ffi::{
    free_polylines, svg_str_to_polylines, svg_str_to_polylines_with_config, FfiPolyline,
};
use svg2polylines::Point;

/// Call the C entry point, copying the result into owned vectors and
/// releasing the returned memory.
fn convert(svg: &str) -> (u8, Option<Vec<Vec<Point>>>) {
    let svg = CString::new(svg).unwrap();
    let mut polylines: *mut FfiPolyline = ptr::null_mut();
    let mut len = 0usize;
    let code = unsafe { svg_str_to_polylines(svg.as_ptr(), &mut polylines, &mut len) };
    if polylines.is_null() {
        assert_eq!(len, 0);
        return (code, None);
    }
    let copied = unsafe {
        std::slice::from_raw_parts(polylines, len)
            .iter()
            .map(|pl| std::slice::from_raw_parts(pl.ptr, pl.len).to_vec())
            .collect()
    };
    unsafe { free_polylines(polylines, len) };
    (code, Some(copied))
}

#[test]
fn test_ffi_square() {
    let (code, result) = convert(r#"<svg><path d="M 0,0 L 10,0 10,10 Z"/></svg>"#);
    assert_eq!(code, 0);
    assert_eq!(
        result,
        Some(vec![vec![p(0., 0.), p(10., 0.), p(10., 10.), p(0., 0.)]])
    );
}

#[test]
fn test_ffi_many() {
    let body: String = (0..50)
        .map(|i| format!(r#"<path d="M {i} 0 C {i} 10 {i} 10 {} 0"/>"#, i + 1))
        .collect();
    let (code, result) = convert(&format!("<svg>{body}</svg>"));
    assert_eq!(code, 0);
    let result = result.unwrap();
    assert_eq!(result.len(), 50);
    assert!(result.iter().all(|pl| pl.len() > 2));
}

#[test]
fn test_ffi_empty() {
    assert_eq!(convert("<svg/>"), (0, None));
}

#[test]
fn test_ffi_error_codes() {
    assert_eq!(convert(r#"<svg><path d="L 1,1"/></svg>"#), (3, None));
    assert_eq!(convert(r#"<svg><path d="M 1,1"></svg>"#), (2, None));

    // non-UTF8 input
    let bad = CString::new(b"<svg>\xff</svg>".to_vec()).unwrap();
    let mut polylines: *mut FfiPolyline = ptr::null_mut();
    let mut len = 0usize;
    let code = unsafe { svg_str_to_polylines(bad.as_ptr(), &mut polylines, &mut len) };
    assert_eq!(code, 1);
    assert!(polylines.is_null());
    assert_eq!(len, 0);
}

#[test]
fn test_ffi_with_config() {
    let svg = CString::new(r#"<svg><path d="M0,0 C0,10 10,10 10,0"/></svg>"#).unwrap();
    let mut counts = Vec::new();
    for tolerance in [1., 0.01] {
        let mut polylines: *mut FfiPolyline = ptr::null_mut();
        let mut len = 0usize;
        let code = unsafe {
            svg_str_to_polylines_with_config(
                svg.as_ptr(),
                tolerance,
                16,
                false,
                &mut polylines,
                &mut len,
            )
        };
        assert_eq!(code, 0);
        assert_eq!(len, 1);
        counts.push(unsafe { (*polylines).len });
        unsafe { free_polylines(polylines, len) };
    }
    assert!(counts[1] > counts[0]);

    // out of range depth
    let mut polylines: *mut FfiPolyline = ptr::null_mut();
    let mut len = 0usize;
    let code = unsafe {
        svg_str_to_polylines_with_config(svg.as_ptr(), 0.1, 0, false, &mut polylines, &mut len)
    };
    assert_eq!(code, 5);
    assert!(polylines.is_null());
}

#[test]
fn test_ffi_free_null() {
    unsafe { free_polylines(ptr::null_mut(), 0) };
}
