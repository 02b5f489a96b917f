//! Parametric ring outlines.
//!
//! A ring is a circle of radius `r` whose radius is modulated by a harmonic of the polar angle:
//!
//! ```text
//! a   = amplitude * sin(time)
//! A:  x = (r + a*cos(nθ)) * cos θ,   y = (r + a*cos(nθ)) * sin θ
//! B:  x = (r + a*sin(nθ)) * cos θ,   y = (r + a*cos(nθ)) * sin θ
//! ```
//!
//! Points are produced in the ring's local frame (origin at the ring center, unrotated).

use std::f64::consts::TAU;

use crate::animation::ring::{RingDescriptor, ShapeVariant};
use crate::foundation::core::Point;

/// Vertices per ring outline.
pub const CURVE_STEPS: usize = 64;

/// Harmonic order of the radial modulation; sets the lobe count.
pub const HARMONIC_ORDER: f64 = 3.0;

/// Outline point at polar angle `theta` for an already time-scaled amplitude.
pub fn curve_point(shape: ShapeVariant, base_radius: f64, current_a: f64, theta: f64) -> Point {
    let harmonic = theta * HARMONIC_ORDER;
    let ry = base_radius + current_a * harmonic.cos();
    let rx = match shape {
        ShapeVariant::A => ry,
        ShapeVariant::B => base_radius + current_a * harmonic.sin(),
    };
    Point::new(rx * theta.cos(), ry * theta.sin())
}

/// Evaluate the outline of `ring` at `time` into `out`, replacing its contents.
///
/// `out` keeps its allocation across calls.
pub fn evaluate_curve_into(ring: &RingDescriptor, time: f64, out: &mut Vec<Point>) {
    out.clear();
    out.reserve(CURVE_STEPS);
    let current_a = ring.amplitude * time.sin();
    let delta = TAU / CURVE_STEPS as f64;
    out.extend((0..CURVE_STEPS).map(|i| {
        curve_point(ring.shape, ring.base_radius, current_a, delta * i as f64)
    }));
}

/// Allocating form of [`evaluate_curve_into`].
pub fn evaluate_curve(ring: &RingDescriptor, time: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(CURVE_STEPS);
    evaluate_curve_into(ring, time, &mut out);
    out
}

/// Evaluate the outline and step the ring's rotation.
///
/// Returns the rotation angle the outline must be drawn at this frame; on return the ring
/// already holds the angle for the next frame.
pub fn trace_ring(ring: &mut RingDescriptor, time: f64, out: &mut Vec<Point>) -> f64 {
    let angle = ring.rotation_angle;
    ring.advance_rotation();
    evaluate_curve_into(ring, time, out);
    angle
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
