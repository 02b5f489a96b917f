//! Ring field generation.

use std::f64::consts::PI;

use crate::animation::ring::{RingDescriptor, ShapeVariant};
use crate::foundation::core::{Rgba8, SurfaceSize};
use crate::foundation::rng::RingRng;
use crate::render::sink::{Glow, GlowStyle, StrokePaint};

/// Initial rotation stagger between consecutive rings, in radians (4 degrees).
pub const RING_STAGGER: f64 = 4.0 * PI / 180.0;

/// Upper bound of the per-frame rotation speed, in radians (2 degrees).
pub const MAX_ROTATION_SPEED: f64 = PI / 90.0;

/// Inputs to [`build_ring_field`] that do not depend on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldParams {
    /// Number of rings to build.
    pub ring_count: usize,
    /// Fraction of the half-width used as ring radius.
    pub content_scale: f64,
    /// Stroke width of the central disc; ring strokes are a quarter of it.
    pub base_stroke_width: f64,
    /// Color every ring's intensity is applied to.
    pub ring_color: Rgba8,
}

/// Build a fresh ring field for `size`.
///
/// All rings share the surface center and the same nominal radius. Per ring, the RNG is
/// drawn for shape, color intensity, amplitude and rotation speed, in that order. The initial
/// rotation is a fixed stagger of [`RING_STAGGER`] per ring index.
#[tracing::instrument(level = "debug", skip(params, rng), fields(ring_count = params.ring_count))]
pub fn build_ring_field(
    size: SurfaceSize,
    params: &FieldParams,
    rng: &mut RingRng,
) -> Vec<RingDescriptor> {
    let center = size.center();
    let base_radius = size.width / 2.0 * params.content_scale;
    let stroke_width = params.base_stroke_width / 4.0;

    (0..params.ring_count)
        .map(|i| {
            let shape = if rng.uniform_float(0.0, 1.0) > 0.5 {
                ShapeVariant::A
            } else {
                ShapeVariant::B
            };
            let intensity = rng.uniform_float(0.6, 1.0);
            let amplitude = base_radius * rng.uniform_float(0.05, 0.2);
            let rotation_speed = rng.uniform_float(0.0, MAX_ROTATION_SPEED);

            RingDescriptor {
                center,
                base_radius,
                amplitude,
                shape,
                rotation_angle: i as f64 * RING_STAGGER,
                rotation_speed,
                stroke: StrokePaint {
                    color: params.ring_color.scaled_opaque(intensity),
                    width: stroke_width,
                    glow: Some(Glow {
                        radius: stroke_width,
                        style: GlowStyle::Normal,
                    }),
                },
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/field.rs"]
mod tests;
