use super::*;
use kurbo::{PathEl, Shape};

#[test]
fn polygon_path_is_closed_with_one_segment_per_point() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
    ];
    let path = closed_polygon_path(&pts);
    let els = path.elements();
    assert_eq!(els.len(), 4);
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els[3], PathEl::ClosePath));
    assert!(closed_polygon_path(&pts[..1]).elements().is_empty());
}

#[test]
fn rounded_rect_bounds_match_rect() {
    let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
    let path = rounded_rect_path(rect, 12.0, 8.0);
    let bbox = path.bounding_box();
    assert!((bbox.x0 - rect.x0).abs() < 1e-6);
    assert!((bbox.y0 - rect.y0).abs() < 1e-6);
    assert!((bbox.x1 - rect.x1).abs() < 1e-6);
    assert!((bbox.y1 - rect.y1).abs() < 1e-6);
    assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
}

#[test]
fn oversized_radii_are_clamped_to_half_extent() {
    let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
    let clamped = rounded_rect_path(rect, 100.0, 100.0);
    let exact = rounded_rect_path(rect, 20.0, 10.0);
    assert_eq!(clamped, exact);
}

#[test]
fn zero_radius_falls_back_to_plain_rect() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(rounded_rect_path(rect, 0.0, 3.0), rect.to_path(PATH_TOLERANCE));
}

#[test]
fn circle_path_bounds_match_radius() {
    let bbox = circle_path(Point::new(5.0, 5.0), 3.0).bounding_box();
    assert!((bbox.width() - 6.0).abs() < 1e-6);
    assert!((bbox.height() - 6.0).abs() < 1e-6);
}
