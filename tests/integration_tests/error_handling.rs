use assertables::assert_contains;

use super::utils::svg;
use svg2polylines::{convert_bytes, convert_str, convert_str_default, ConvertConfig, ErrorCode};

#[test]
fn test_error_bad_tag() {
    let input = r##"<svg>
    <path d="M 0 0">
    </svg>"##;

    let err = convert_str_default(input).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Document);
}

#[test]
fn test_error_bad_element() {
    let input = r##"<svg>
    <path
    </svg>"##;

    assert_eq!(
        convert_str_default(input).unwrap_err().code(),
        ErrorCode::Document
    );
}

#[test]
fn test_error_unclosed() {
    assert_eq!(
        convert_str_default("<svg><g>").unwrap_err().code(),
        ErrorCode::Document
    );
    assert_eq!(
        convert_str_default("").unwrap_err().code(),
        ErrorCode::Document
    );
}

#[test]
fn test_error_document_before_path() {
    // structure problems are reported even after bad path data
    let input = r#"<svg><path d="L 1 1"/><g></svg>"#;
    assert_eq!(
        convert_str_default(input).unwrap_err().code(),
        ErrorCode::Document
    );
}

#[test]
fn test_error_bad_path() {
    for data in ["L 1,1", "M 0 0 L 1", "M 0 0 Q 1 1", "M 0 0 L 1 1 Z 2 2", "M 0 0 # 1"] {
        let err = convert_str_default(&svg(&format!(r#"<path d="{data}"/>"#))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Path, "'{data}'");
    }
}

#[test]
fn test_error_non_finite_path() {
    // out-of-range numbers and overflowing relative offsets
    for data in [
        "M 0 0 C 0 1e400 10 10 10 0",
        "M 0 0 L -1e309 1",
        "M 1e308 0 l 1e308 0",
    ] {
        let err = convert_str_default(&svg(&format!(r#"<path d="{data}"/>"#))).unwrap_err();
        assert_eq!(err.code(), ErrorCode::Path, "'{data}'");
    }
}

#[test]
fn test_error_bad_path_fails_all() {
    // one bad element fails the whole conversion
    let input = svg(r#"<path d="M 0 0 L 1 1"/><path d="M 0 0 X"/>"#);
    let err = convert_str_default(&input).unwrap_err();
    assert_contains!(err.to_string(), "unexpected character 'X'");
}

#[test]
fn test_error_encoding() {
    let cfg = ConvertConfig::default();
    let err = convert_bytes(b"<svg><path d=\"M 0 0\xc3\x28\"/></svg>", &cfg).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Encoding);
    assert_eq!(u8::from(err.code()), 1);
}

#[test]
fn test_error_config() {
    let cfg = ConvertConfig {
        tolerance: -0.5,
        ..Default::default()
    };
    let err = convert_str(&svg(""), &cfg).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}

#[test]
fn test_depth_limit_is_not_error() {
    let cfg = ConvertConfig {
        tolerance: 1e-12,
        max_depth: 3,
        ..Default::default()
    };
    let input = svg(r#"<path d="M 0 0 C 0 1000 1000 1000 1000 0"/>"#);
    let polylines = convert_str(&input, &cfg).unwrap();
    // 2^3 pieces plus the start point
    assert_eq!(polylines[0].len(), 9);
}
