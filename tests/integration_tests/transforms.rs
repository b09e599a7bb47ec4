use assertables::assert_contains;

use super::utils::{approx_eq, p, svg};
use svg2polylines::{convert_str, convert_str_default, ConvertConfig, ErrorCode};

#[test]
fn test_translate_scale() {
    let input = svg(r#"<path transform="translate(10,0) scale(2)" d="M 1 1 L 2 2"/>"#);
    assert_eq!(
        convert_str_default(&input).unwrap(),
        vec![vec![p(12., 2.), p(14., 4.)]]
    );
}

#[test]
fn test_ancestor_composition() {
    let input = svg(
        r#"<g transform="translate(100, 0)">
             <g transform="rotate(90)">
               <path d="M 10 0 L 20 0"/>
             </g>
           </g>"#,
    );
    let polylines = convert_str_default(&input).unwrap();
    assert!(approx_eq(polylines[0][0], p(100., 10.)));
    assert!(approx_eq(polylines[0][1], p(100., 20.)));
}

#[test]
fn test_sibling_isolation() {
    let input = svg(
        r#"<g transform="translate(5 5)"><path d="M 0 0"/></g>
           <path d="M 0 0"/>
           <path transform="scale(3)" d="M 1 1"/>
           <path d="M 1 1"/>"#,
    );
    assert_eq!(
        convert_str_default(&input).unwrap(),
        vec![
            vec![p(5., 5.)],
            vec![p(0., 0.)],
            vec![p(3., 3.)],
            vec![p(1., 1.)]
        ]
    );
}

#[test]
fn test_matrix_and_skew() {
    let input = svg(
        r#"<path transform="matrix(1 0 0 -1 0 100)" d="M 10 10"/>
           <path transform="skewX(45)" d="M 0 10"/>"#,
    );
    let polylines = convert_str_default(&input).unwrap();
    assert_eq!(polylines[0], vec![p(10., 90.)]);
    assert!(approx_eq(polylines[1][0], p(10., 10.)));
}

#[test]
fn test_scaled_curve_tolerance() {
    // flattening happens in local space, but error is bounded in output space
    let small = svg(r#"<path transform="scale(100)" d="M 0 0 A 1 1 0 0 1 2 0"/>"#);
    let large = svg(r#"<path d="M 0 0 A 100 100 0 0 1 200 0"/>"#);
    let small = convert_str_default(&small).unwrap();
    let large = convert_str_default(&large).unwrap();
    assert_eq!(small[0].len(), large[0].len());
    for pt in &small[0] {
        assert!((pt.distance(p(100., 0.)) - 100.).abs() < 1e-6);
    }
}

#[test]
fn test_malformed_transform_lenient() {
    let input = svg(
        r#"<g transform="translate(1, 1"><path transform="scale(2)" d="M 1 1"/></g>
           <path transform="rotate(oops)" d="M 3 3"/>"#,
    );
    assert_eq!(
        convert_str_default(&input).unwrap(),
        vec![vec![p(2., 2.)], vec![p(3., 3.)]]
    );
}

#[test]
fn test_malformed_transform_strict() {
    let cfg = ConvertConfig {
        strict_transforms: true,
        ..Default::default()
    };
    let input = svg(r#"<path transform="rotate(oops)" d="M 3 3"/>"#);
    let err = convert_str(&input, &cfg).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Transform);
    assert_contains!(err.to_string(), "oops");
}
