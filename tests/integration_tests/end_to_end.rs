use super::utils::{convert_path, p, svg};
use svg2polylines::{convert_str, convert_str_default, convert_str_with_ids, ConvertConfig};

#[test]
fn test_closed_triangle() {
    assert_eq!(
        convert_path("M 0,0 L 10,0 10,10 Z", 0.1),
        vec![vec![p(0., 0.), p(10., 0.), p(10., 10.), p(0., 0.)]]
    );
}

#[test]
fn test_lines_exact() {
    // line-only paths reproduce their anchors exactly
    assert_eq!(
        convert_path("M 1.5 2.25 h 3 v -1 l -2 -2 H 0 V 10", 0.1),
        vec![vec![
            p(1.5, 2.25),
            p(4.5, 2.25),
            p(4.5, 1.25),
            p(2.5, -0.75),
            p(0., -0.75),
            p(0., 10.)
        ]]
    );
}

#[test]
fn test_compact_syntax() {
    assert_eq!(
        convert_path("M10-5L.5.5-1e1,2e-1z", 0.1),
        vec![vec![p(10., -5.), p(0.5, 0.5), p(-10., 0.2), p(10., -5.)]]
    );
}

#[test]
fn test_multiple_elements_in_order() {
    let input = svg(
        r#"<path d="M 0 0 L 1 0"/>
           <g><path d="M 5 5 L 6 5 M 7 7 L 8 8"/></g>
           <path d="M 9 9 L 10 10"/>"#,
    );
    let polylines = convert_str_default(&input).unwrap();
    let starts: Vec<_> = polylines.iter().map(|pl| pl[0]).collect();
    assert_eq!(starts, vec![p(0., 0.), p(5., 5.), p(7., 7.), p(9., 9.)]);
}

#[test]
fn test_no_paths() {
    assert!(convert_str_default(&svg("")).unwrap().is_empty());
    assert!(convert_str_default(&svg(r#"<g><text>hi</text></g>"#))
        .unwrap()
        .is_empty());
    // empty and whitespace-only path data produce nothing
    assert!(convert_str_default(&svg(r#"<path d=""/><path d="  "/><path/>"#))
        .unwrap()
        .is_empty());
}

#[test]
fn test_every_polyline_nonempty() {
    let polylines = convert_path("M 1 1 M 2 2 L 3 3 Z M 4 4 z m 1 1", 0.1);
    assert_eq!(polylines.len(), 4);
    assert!(polylines.iter().all(|pl| !pl.is_empty()));
    // lone movetos give single-point polylines
    assert_eq!(polylines[0], vec![p(1., 1.)]);
    assert_eq!(polylines[2], vec![p(4., 4.)]);
    assert_eq!(polylines[3], vec![p(5., 5.)]);
}

#[test]
fn test_ids() {
    let input = svg(r#"<path id="first" d="M 0 0 L 1 1"/><rect id="box" width="1" height="1"/>"#);
    let labelled = convert_str_with_ids(&input, &ConvertConfig::default()).unwrap();
    assert_eq!(labelled.len(), 2);
    assert_eq!(labelled[0].id.as_deref(), Some("first"));
    assert_eq!(labelled[1].id.as_deref(), Some("box"));
    assert_eq!(
        labelled[1].points,
        vec![p(0., 0.), p(1., 0.), p(1., 1.), p(0., 1.), p(0., 0.)]
    );
}

#[test]
fn test_entities_in_attributes() {
    let input = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE svg>
<svg xmlns="http://www.w3.org/2000/svg">
  <!-- a comment -->
  <path d="M&#32;0 0 L 3 4"/>
</svg>"#;
    assert_eq!(
        convert_str(input, &ConvertConfig::default()).unwrap(),
        vec![vec![p(0., 0.), p(3., 4.)]]
    );
}
