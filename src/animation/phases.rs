//! Per-phase frame renderers.

use crate::animation::curve::trace_ring;
use crate::animation::geometry::{CentralDisc, RoundedRectGeometry};
use crate::animation::ring::RingDescriptor;
use crate::animation::state::Phase;
use crate::foundation::core::Point;
use crate::foundation::error::RingfieldResult;
use crate::render::sink::{RenderSink, StrokePaint};

/// Draw every ring at `time`, then the disc on top.
///
/// Each ring is drawn in its own saved frame (translate to center, rotate) and has its
/// rotation advanced as a side effect.
pub fn render_ring_field(
    sink: &mut dyn RenderSink,
    rings: &mut [RingDescriptor],
    time: f64,
    disc: &CentralDisc,
    outline: &StrokePaint,
    scratch: &mut Vec<Point>,
) -> RingfieldResult<()> {
    for ring in rings.iter_mut() {
        let angle = trace_ring(ring, time, scratch);
        sink.save();
        sink.translate(ring.center.to_vec2());
        sink.rotate(angle);
        let drawn = sink.draw_closed_polygon(scratch, &ring.stroke);
        sink.restore()?;
        drawn?;
    }
    sink.draw_circle(disc.center, disc.radius, outline)
}

/// Corner radius of the rounded rect for a non-ring phase; `None` in [`Phase::RingField`].
pub fn corner_radius(geometry: &RoundedRectGeometry, phase: Phase, phase_time: f64) -> Option<f64> {
    match phase {
        Phase::RingField => None,
        Phase::GrowRoundedRect => Some(geometry.growing_radius(phase_time)),
        Phase::LogoHold => Some(geometry.min_corner_radius),
        Phase::ShrinkRoundedRect => Some(geometry.shrinking_radius(phase_time)),
    }
}

/// Stroke the rounded rectangle with a uniform corner radius.
pub fn render_rounded_rect(
    sink: &mut dyn RenderSink,
    geometry: &RoundedRectGeometry,
    radius: f64,
    outline: &StrokePaint,
) -> RingfieldResult<()> {
    sink.draw_rounded_rect(geometry.rect, radius, radius, outline)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phases.rs"]
mod tests;
