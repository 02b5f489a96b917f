use std::f64::consts::PI;

use super::*;

fn square() -> SurfaceSize {
    SurfaceSize::new(400.0, 400.0).unwrap()
}

#[test]
fn rect_is_centered_and_scaled() {
    let g = RoundedRectGeometry::for_surface(square(), 0.75);
    assert_eq!(g.rect, Rect::new(50.0, 50.0, 350.0, 350.0));
    assert_eq!(g.max_corner_radius, 150.0);
    assert_eq!(g.min_corner_radius, 75.0);
}

#[test]
fn non_square_surface_scales_each_axis() {
    let g = RoundedRectGeometry::for_surface(SurfaceSize::new(400.0, 200.0).unwrap(), 0.5);
    assert_eq!(g.rect, Rect::new(100.0, 50.0, 300.0, 150.0));
    assert_eq!(g.max_corner_radius, 100.0);
}

#[test]
fn growing_radius_hits_both_endpoints() {
    let g = RoundedRectGeometry::for_surface(square(), 0.75);
    assert!((g.growing_radius(0.0) - g.max_corner_radius).abs() < 1e-9);
    assert!((g.growing_radius(PI) - g.min_corner_radius).abs() < 1e-9);
}

#[test]
fn growing_radius_is_monotonically_decreasing() {
    let g = RoundedRectGeometry::for_surface(square(), 0.75);
    let mut prev = f64::INFINITY;
    for i in 0..=100 {
        let r = g.growing_radius(PI * f64::from(i) / 100.0);
        assert!(r <= prev);
        prev = r;
    }
}

#[test]
fn shrinking_radius_mirrors_growth() {
    let g = RoundedRectGeometry::for_surface(square(), 0.75);
    assert!((g.shrinking_radius(0.0) - g.min_corner_radius).abs() < 1e-9);
    assert!((g.shrinking_radius(PI) - g.max_corner_radius).abs() < 1e-9);
}

#[test]
fn disc_uses_longer_side() {
    let d = CentralDisc::for_surface(SurfaceSize::new(300.0, 500.0).unwrap(), 0.75);
    assert_eq!(d.center, Point::new(150.0, 250.0));
    assert!((d.radius - 187.5).abs() < 1e-12);
}

#[test]
fn outline_paint_has_solid_glow_of_stroke_width() {
    let p = outline_paint(Rgba8::WHITE, 30.0);
    assert_eq!(p.width, 30.0);
    assert_eq!(
        p.glow,
        Some(Glow {
            radius: 30.0,
            style: GlowStyle::Solid
        })
    );
}
