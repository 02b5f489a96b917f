use crate::foundation::core::Point;
use crate::render::sink::StrokePaint;

/// Which trigonometric combination shapes a ring's outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ShapeVariant {
    /// Radial modulation by `cos(nθ)` on both axes.
    A,
    /// Radial modulation by `sin(nθ)` on x and `cos(nθ)` on y.
    B,
}

impl ShapeVariant {
    /// Stable numeric index (`0` for A, `1` for B).
    pub fn index(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// One animated ring.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RingDescriptor {
    /// Ring center in surface coordinates.
    pub center: Point,
    /// Nominal radius; always positive.
    pub base_radius: f64,
    /// Modulation amplitude, `0 <= amplitude < base_radius`.
    pub amplitude: f64,
    /// Outline variant.
    pub shape: ShapeVariant,
    /// Accumulated rotation in radians.
    pub rotation_angle: f64,
    /// Rotation added per ring-field frame, in radians.
    pub rotation_speed: f64,
    /// Stroke styling.
    pub stroke: StrokePaint,
}

impl RingDescriptor {
    /// Advance the rotation by one frame.
    pub fn advance_rotation(&mut self) {
        self.rotation_angle += self.rotation_speed;
    }
}
