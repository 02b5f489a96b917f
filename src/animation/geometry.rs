use crate::foundation::core::{Point, Rect, Rgba8, SurfaceSize};
use crate::render::sink::{Glow, GlowStyle, StrokePaint};

/// Outline paint shared by the central disc and the rounded rectangle.
pub fn outline_paint(color: Rgba8, base_stroke_width: f64) -> StrokePaint {
    StrokePaint {
        color,
        width: base_stroke_width,
        glow: Some(Glow {
            radius: base_stroke_width,
            style: GlowStyle::Solid,
        }),
    }
}

/// Rounded rectangle the disc morphs into.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RoundedRectGeometry {
    /// Centered rectangle, `content_scale` of the surface on each axis.
    pub rect: Rect,
    /// Corner radius at the "logo" pose (a quarter of the rect width).
    pub min_corner_radius: f64,
    /// Corner radius at the disc-like pose (half the rect width).
    pub max_corner_radius: f64,
}

impl RoundedRectGeometry {
    /// Derive the geometry for a surface.
    pub fn for_surface(size: SurfaceSize, content_scale: f64) -> Self {
        let w = size.width * content_scale;
        let h = size.height * content_scale;
        let rect = Rect::from_center_size(size.center(), (w, h));
        Self {
            rect,
            min_corner_radius: w / 4.0,
            max_corner_radius: w / 2.0,
        }
    }

    /// Corner radius while growing from disc to rect; falls from max to min over `[0, π]`.
    pub fn growing_radius(&self, phase_time: f64) -> f64 {
        self.span() * (phase_time / 2.0).cos() + self.min_corner_radius
    }

    /// Corner radius while shrinking back; rises from min to max over `[0, π]`.
    pub fn shrinking_radius(&self, phase_time: f64) -> f64 {
        self.span() * (phase_time / 2.0).sin() + self.min_corner_radius
    }

    fn span(&self) -> f64 {
        self.max_corner_radius - self.min_corner_radius
    }
}

/// Static disc drawn on top of the ring field.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CentralDisc {
    /// Disc center.
    pub center: Point,
    /// Disc radius.
    pub radius: f64,
}

impl CentralDisc {
    /// Derive the disc for a surface; its diameter is `content_scale` of the longer side.
    pub fn for_surface(size: SurfaceSize, content_scale: f64) -> Self {
        Self {
            center: size.center(),
            radius: size.max_side() * content_scale / 2.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/geometry.rs"]
mod tests;
