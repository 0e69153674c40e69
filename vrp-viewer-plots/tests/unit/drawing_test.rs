use super::*;
use crate::helpers::create_test_dataset;
use crate::{Projection, RenderOptions, render_scene};

fn render_test_svg() -> String {
    let dataset = create_test_dataset();
    let selection = dataset.select(1).expect("cannot select");
    let primitives = render_scene(&dataset, &Projection::default(), Some(&selection), &RenderOptions::default());

    render_svg_string(&primitives, 800, 600).expect("cannot render svg")
}

#[test]
fn can_render_scene_as_svg() {
    let svg = render_test_svg();

    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<circle").count(), 3 + 1);
}

#[test]
fn can_use_node_and_link_colors() {
    let svg = render_test_svg().to_lowercase();

    assert!(svg.contains("#28a745"));
    assert!(svg.contains("#ffc107"));
    assert!(svg.contains("#007bff"));
    assert!(svg.contains("#ff0000"));
}

#[test]
fn can_render_empty_scene() {
    let svg = render_svg_string(&[], 100, 50).expect("cannot render svg");

    assert!(svg.contains("<svg"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn can_write_svg_file() {
    let dir = tempfile::tempdir().expect("cannot create temp dir");
    let path = dir.path().join("scene.svg");

    write_svg(&path, &[], 100, 50).expect("cannot write svg");

    assert!(std::fs::read_to_string(path).expect("cannot read svg").contains("<svg"));
}
