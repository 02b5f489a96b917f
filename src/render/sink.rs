use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{RingfieldError, RingfieldResult};

/// How a glow is spread around a stroked outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowStyle {
    /// Blur inside and outside the outline; no sharp core remains.
    Normal,
    /// Sharp outline with the blur spread outside it.
    Solid,
}

/// Soft blur attached to a stroke.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Glow {
    /// Blur radius in pixels.
    pub radius: f64,
    /// Spread style.
    pub style: GlowStyle,
}

/// Stroke styling handed to a [`RenderSink`] with every draw call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokePaint {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
    /// Optional glow.
    pub glow: Option<Glow>,
}

/// Drawing capability the engine renders into.
///
/// Transform calls follow canvas semantics: `translate` and `rotate` post-multiply the current
/// transform, and `save`/`restore` bracket a local drawing frame so transforms do not leak
/// between draws.
pub trait RenderSink {
    /// Push the current transform.
    fn save(&mut self);
    /// Pop the transform pushed by the matching [`RenderSink::save`].
    fn restore(&mut self) -> RingfieldResult<()>;
    /// Translate the local frame.
    fn translate(&mut self, offset: Vec2);
    /// Rotate the local frame by `radians`.
    fn rotate(&mut self, radians: f64);

    /// Stroke a closed polygon; the last point connects back to the first.
    fn draw_closed_polygon(&mut self, points: &[Point], paint: &StrokePaint)
    -> RingfieldResult<()>;
    /// Stroke a rounded rectangle with elliptical corner radii.
    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius_x: f64,
        radius_y: f64,
        paint: &StrokePaint,
    ) -> RingfieldResult<()>;
    /// Stroke a circle.
    fn draw_circle(&mut self, center: Point, radius: f64, paint: &StrokePaint)
    -> RingfieldResult<()>;
}

/// Current transform plus the save stack, shared by the sink implementations.
#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    /// Transform in effect for the next draw.
    pub fn current(&self) -> Affine {
        self.current
    }

    /// Number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Push the current transform.
    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pop the last saved transform.
    pub fn restore(&mut self) -> RingfieldResult<()> {
        self.current = self
            .saved
            .pop()
            .ok_or_else(|| RingfieldError::render("restore without matching save"))?;
        Ok(())
    }

    /// Post-multiply a translation.
    pub fn translate(&mut self, offset: Vec2) {
        self.current *= Affine::translate(offset);
    }

    /// Post-multiply a rotation.
    pub fn rotate(&mut self, radians: f64) {
        self.current *= Affine::rotate(radians);
    }

    /// Drop every saved transform and return to identity.
    pub fn reset(&mut self) {
        self.current = Affine::IDENTITY;
        self.saved.clear();
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Closed polygon in local coordinates.
    Polygon {
        /// Local-frame vertices.
        points: Vec<Point>,
        /// Transform in effect when drawn.
        transform: Affine,
        /// Stroke styling.
        paint: StrokePaint,
    },
    /// Rounded rectangle.
    RoundedRect {
        /// Outline rectangle.
        rect: Rect,
        /// Horizontal corner radius.
        radius_x: f64,
        /// Vertical corner radius.
        radius_y: f64,
        /// Transform in effect when drawn.
        transform: Affine,
        /// Stroke styling.
        paint: StrokePaint,
    },
    /// Circle.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Transform in effect when drawn.
        transform: Affine,
        /// Stroke styling.
        paint: StrokePaint,
    },
}

/// In-memory sink for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingSink {
    transforms: TransformStack,
    commands: Vec<DrawCommand>,
}

impl RecordingSink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the sink empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.transforms.depth()
    }

    /// Forget recorded commands and transforms.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transforms.reset();
    }
}

impl RenderSink for RecordingSink {
    fn save(&mut self) {
        self.transforms.save();
    }

    fn restore(&mut self) -> RingfieldResult<()> {
        self.transforms.restore()
    }

    fn translate(&mut self, offset: Vec2) {
        self.transforms.translate(offset);
    }

    fn rotate(&mut self, radians: f64) {
        self.transforms.rotate(radians);
    }

    fn draw_closed_polygon(
        &mut self,
        points: &[Point],
        paint: &StrokePaint,
    ) -> RingfieldResult<()> {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            transform: self.transforms.current(),
            paint: *paint,
        });
        Ok(())
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius_x: f64,
        radius_y: f64,
        paint: &StrokePaint,
    ) -> RingfieldResult<()> {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius_x,
            radius_y,
            transform: self.transforms.current(),
            paint: *paint,
        });
        Ok(())
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        paint: &StrokePaint,
    ) -> RingfieldResult<()> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            transform: self.transforms.current(),
            paint: *paint,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
