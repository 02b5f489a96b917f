//! Outline paths for the shapes a [`RenderSink`](crate::RenderSink) is asked to draw.

use kurbo::{Arc, Shape as _};

use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Flattening tolerance for curved outlines, in pixels.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Closed polyline through `points`; empty for fewer than two points.
pub fn closed_polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 2 {
        return path;
    }
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path.close_path();
    path
}

/// Circle outline.
pub fn circle_path(center: Point, radius: f64) -> BezPath {
    kurbo::Circle::new(center, radius.max(0.0)).to_path(PATH_TOLERANCE)
}

/// Rounded rectangle with elliptical corners.
///
/// Radii are clamped to half the rectangle's width and height.
pub fn rounded_rect_path(rect: Rect, radius_x: f64, radius_y: f64) -> BezPath {
    let rect = rect.abs();
    let rx = radius_x.clamp(0.0, rect.width() / 2.0);
    let ry = radius_y.clamp(0.0, rect.height() / 2.0);
    if rx <= 0.0 || ry <= 0.0 {
        return rect.to_path(PATH_TOLERANCE);
    }

    let radii = Vec2::new(rx, ry);
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    let corner = |center: Point, start_angle: f64| Arc {
        center,
        radii,
        start_angle,
        sweep_angle: std::f64::consts::FRAC_PI_2,
        x_rotation: 0.0,
    };

    let mut path = BezPath::new();
    path.move_to((x0 + rx, y0));
    path.line_to((x1 - rx, y0));
    path.extend(
        corner(Point::new(x1 - rx, y0 + ry), -std::f64::consts::FRAC_PI_2)
            .append_iter(PATH_TOLERANCE),
    );
    path.line_to((x1, y1 - ry));
    path.extend(corner(Point::new(x1 - rx, y1 - ry), 0.0).append_iter(PATH_TOLERANCE));
    path.line_to((x0 + rx, y1));
    path.extend(
        corner(Point::new(x0 + rx, y1 - ry), std::f64::consts::FRAC_PI_2)
            .append_iter(PATH_TOLERANCE),
    );
    path.line_to((x0, y0 + ry));
    path.extend(
        corner(Point::new(x0 + rx, y0 + ry), std::f64::consts::PI).append_iter(PATH_TOLERANCE),
    );
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
