use assertables::assert_gt;

use super::utils::{p, svg};
use svg2polylines::{convert_str, convert_str_default, ConvertConfig};

#[test]
fn test_rect_and_polygon() {
    let input = svg(
        r#"<rect x="1" y="1" width="2px" height="3"/>
           <polygon points="0,0 4,0 4,4"/>
           <polyline points="0 0, 1 1, 2 0"/>
           <line x1="0" y1="0" x2="5" y2="5"/>"#,
    );
    assert_eq!(
        convert_str_default(&input).unwrap(),
        vec![
            vec![p(1., 1.), p(3., 1.), p(3., 4.), p(1., 4.), p(1., 1.)],
            vec![p(0., 0.), p(4., 0.), p(4., 4.), p(0., 0.)],
            vec![p(0., 0.), p(1., 1.), p(2., 0.)],
            vec![p(0., 0.), p(5., 5.)],
        ]
    );
}

#[test]
fn test_circle() {
    let polylines = convert_str_default(&svg(r#"<circle cx="50" cy="50" r="20"/>"#)).unwrap();
    assert_eq!(polylines.len(), 1);
    let circle = &polylines[0];
    assert_gt!(circle.len(), 8);
    assert_eq!(circle[0], circle[circle.len() - 1]);
    for pt in circle {
        assert!((pt.distance(p(50., 50.)) - 20.).abs() < 1e-9);
    }
}

#[test]
fn test_rounded_rect() {
    let polylines = convert_str_default(&svg(r#"<rect width="20" height="10" rx="2"/>"#)).unwrap();
    let rect = &polylines[0];
    assert_eq!(rect[0], p(2., 0.));
    assert_eq!(rect[rect.len() - 1], p(2., 0.));
    // corners are cut
    assert!(!rect.contains(&p(0., 0.)));
    assert!(rect.contains(&p(18., 0.)));
}

#[test]
fn test_invisible_and_invalid_shapes() {
    let input = svg(
        r#"<rect width="0" height="10"/>
           <circle r="-1"/>
           <ellipse rx="5"/>
           <rect width="50%" height="10"/>
           <path d="M 0 0 L 1 1"/>"#,
    );
    // only the path remains; bad shapes are skipped rather than failing
    assert_eq!(
        convert_str_default(&input).unwrap(),
        vec![vec![p(0., 0.), p(1., 1.)]]
    );
}

#[test]
fn test_non_finite_shapes_skipped() {
    let input = svg(
        r#"<polygon points="0,0 NaN,5 1,1"/>
           <polygon points="0,0 1e400,5 1,1"/>
           <polyline points="0,0 inf,5"/>
           <rect x="1e308" width="1e308" height="1"/>
           <circle cx="1e308" r="1e308"/>
           <path d="M 0 0 L 1 1"/>"#,
    );
    assert_eq!(
        convert_str_default(&input).unwrap(),
        vec![vec![p(0., 0.), p(1., 1.)]]
    );
}

#[test]
fn test_non_finite_path_is_fatal() {
    // unlike shapes, bad path data fails the conversion
    let input = svg(r#"<rect width="1" height="1"/><path d="M 0 0 C 0 1e400 10 10 10 0"/>"#);
    assert!(convert_str_default(&input).is_err());
}

#[test]
fn test_paths_only() {
    let cfg = ConvertConfig {
        paths_only: true,
        ..Default::default()
    };
    let input = svg(r#"<rect width="1" height="1"/><path d="M 0 0 L 1 1"/>"#);
    assert_eq!(convert_str(&input, &cfg).unwrap().len(), 1);
}

#[test]
fn test_defs_not_rendered() {
    let input = svg(
        r#"<defs><rect id="tpl" width="1" height="1"/></defs>
           <marker><path d="M 0 0 L 1 1"/></marker>
           <mask><circle r="5"/></mask>
           <pattern><line x2="1"/></pattern>"#,
    );
    assert!(convert_str_default(&input).unwrap().is_empty());
}
