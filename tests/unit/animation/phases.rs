use std::f64::consts::PI;

use super::*;
use crate::animation::curve::CURVE_STEPS;
use crate::animation::field::{FieldParams, build_ring_field};
use crate::animation::geometry::outline_paint;
use crate::foundation::core::{Affine, Rect, Rgba8, SurfaceSize, Vec2};
use crate::foundation::error::RingfieldError;
use crate::foundation::rng::RingRng;
use crate::render::sink::{DrawCommand, RecordingSink, StrokePaint};

fn setup() -> (Vec<RingDescriptor>, CentralDisc, RoundedRectGeometry) {
    let size = SurfaceSize::new(200.0, 200.0).unwrap();
    let params = FieldParams {
        ring_count: 4,
        content_scale: 0.75,
        base_stroke_width: 30.0,
        ring_color: Rgba8::WHITE,
    };
    let rings = build_ring_field(size, &params, &mut RingRng::seeded(12));
    (
        rings,
        CentralDisc::for_surface(size, 0.75),
        RoundedRectGeometry::for_surface(size, 0.75),
    )
}

#[test]
fn ring_field_draws_rings_then_disc() {
    let (mut rings, disc, _) = setup();
    let before: Vec<f64> = rings.iter().map(|r| r.rotation_angle).collect();
    let outline = outline_paint(Rgba8::WHITE, 30.0);
    let mut sink = RecordingSink::new();
    let mut scratch = Vec::new();

    render_ring_field(&mut sink, &mut rings, 0.5, &disc, &outline, &mut scratch).unwrap();

    let cmds = sink.commands();
    assert_eq!(cmds.len(), 5);
    for (i, cmd) in cmds[..4].iter().enumerate() {
        let DrawCommand::Polygon {
            points, transform, ..
        } = cmd
        else {
            panic!("expected polygon at {i}");
        };
        assert_eq!(points.len(), CURVE_STEPS);
        let expected =
            Affine::translate(rings[i].center.to_vec2()) * Affine::rotate(before[i]);
        let (a, b) = (transform.as_coeffs(), expected.as_coeffs());
        for k in 0..6 {
            assert!((a[k] - b[k]).abs() < 1e-9);
        }
    }
    assert!(matches!(cmds[4], DrawCommand::Circle { transform, .. } if transform == Affine::IDENTITY));
    assert_eq!(sink.save_depth(), 0);

    for (ring, angle) in rings.iter().zip(before) {
        assert!((ring.rotation_angle - (angle + ring.rotation_speed)).abs() < 1e-12);
    }
}

#[test]
fn corner_radius_per_phase() {
    let (_, _, g) = setup();
    assert_eq!(corner_radius(&g, Phase::RingField, 1.0), None);
    assert_eq!(
        corner_radius(&g, Phase::GrowRoundedRect, 0.0),
        Some(g.max_corner_radius)
    );
    assert_eq!(
        corner_radius(&g, Phase::LogoHold, 2.0),
        Some(g.min_corner_radius)
    );
    let r = corner_radius(&g, Phase::ShrinkRoundedRect, PI).unwrap();
    assert!((r - g.max_corner_radius).abs() < 1e-9);
}

#[test]
fn rounded_rect_uses_uniform_radius() {
    let (_, _, g) = setup();
    let mut sink = RecordingSink::new();
    render_rounded_rect(&mut sink, &g, 12.0, &outline_paint(Rgba8::WHITE, 30.0)).unwrap();
    let DrawCommand::RoundedRect {
        rect,
        radius_x,
        radius_y,
        ..
    } = &sink.commands()[0]
    else {
        panic!("expected rounded rect");
    };
    assert_eq!(*rect, g.rect);
    assert_eq!((*radius_x, *radius_y), (12.0, 12.0));
}

/// Records transforms but rejects every polygon.
#[derive(Default)]
struct PolygonRejectingSink {
    inner: RecordingSink,
}

impl RenderSink for PolygonRejectingSink {
    fn save(&mut self) {
        self.inner.save();
    }

    fn restore(&mut self) -> RingfieldResult<()> {
        self.inner.restore()
    }

    fn translate(&mut self, offset: Vec2) {
        self.inner.translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.inner.rotate(radians);
    }

    fn draw_closed_polygon(&mut self, _: &[Point], _: &StrokePaint) -> RingfieldResult<()> {
        Err(RingfieldError::render("polygon rejected"))
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius_x: f64,
        radius_y: f64,
        paint: &StrokePaint,
    ) -> RingfieldResult<()> {
        self.inner.draw_rounded_rect(rect, radius_x, radius_y, paint)
    }

    fn draw_circle(&mut self, center: Point, radius: f64, paint: &StrokePaint) -> RingfieldResult<()> {
        self.inner.draw_circle(center, radius, paint)
    }
}

#[test]
fn failed_ring_draw_still_restores_the_frame() {
    let (mut rings, disc, _) = setup();
    let outline = outline_paint(Rgba8::WHITE, 30.0);
    let mut sink = PolygonRejectingSink::default();

    let err = render_ring_field(&mut sink, &mut rings, 0.5, &disc, &outline, &mut Vec::new())
        .unwrap_err();

    assert!(matches!(err, RingfieldError::Render(_)));
    assert_eq!(sink.inner.save_depth(), 0);
    assert!(sink.inner.commands().is_empty());
}
