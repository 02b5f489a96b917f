use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8, Vec2};
use crate::foundation::error::{RingfieldError, RingfieldResult};
use crate::foundation::math::premul_rgba8;
use crate::render::blur::{blur_rgba8_premul, glow_sigma, kernel_radius};
use crate::render::composite::over_in_place;
use crate::render::shapes::{circle_path, closed_polygon_path, rounded_rect_path};
use crate::render::sink::{Glow, GlowStyle, RenderSink, StrokePaint, TransformStack};

/// A rendered frame in RGBA8.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixel bytes, 4 per pixel.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied.
    pub premultiplied: bool,
}

/// Options for [`CpuSink`].
#[derive(Clone, Debug)]
pub struct CpuSinkOpts {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Color each frame is cleared to; transparent when `None`.
    pub background: Option<Rgba8>,
}

/// Raster sink backed by `vello_cpu`.
///
/// Draws that share a glow are collected into one batch. Flushing a batch rasterizes its glow
/// strokes into a layer, blurs it, composites it, and then composites the sharp strokes on
/// top. A batch flushes when the next draw uses a different glow and at [`CpuSink::finish`].
pub struct CpuSink {
    width: u16,
    height: u16,
    clear_premul: [u8; 4],
    frame: Vec<u8>,
    transforms: TransformStack,
    batch: Option<Batch>,
}

struct StrokeJob {
    path: vello_cpu::kurbo::BezPath,
    transform: vello_cpu::kurbo::Affine,
    color: Rgba8,
    width: f64,
}

struct Batch {
    glow: Option<Glow>,
    blurred: Vec<StrokeJob>,
    sharp: Vec<StrokeJob>,
}

impl CpuSink {
    /// Create a sink for the given output size.
    pub fn new(opts: CpuSinkOpts) -> RingfieldResult<Self> {
        let (width, height) = surface_dims(opts.width, opts.height)?;
        let clear_premul = opts
            .background
            .map(|c| premul_rgba8(c.to_array()))
            .unwrap_or([0, 0, 0, 0]);
        let mut sink = Self {
            width,
            height,
            clear_premul,
            frame: Vec::new(),
            transforms: TransformStack::default(),
            batch: None,
        };
        sink.begin_frame();
        Ok(sink)
    }

    /// Output width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Output height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Change the output size; the next frame starts cleared.
    pub fn resize(&mut self, width: u32, height: u32) -> RingfieldResult<()> {
        let (w, h) = surface_dims(width, height)?;
        self.width = w;
        self.height = h;
        self.begin_frame();
        Ok(())
    }

    /// Clear the frame to the background color and reset transforms.
    pub fn begin_frame(&mut self) {
        let len = usize::from(self.width) * usize::from(self.height) * 4;
        self.frame.clear();
        self.frame.reserve(len);
        for _ in 0..len / 4 {
            self.frame.extend_from_slice(&self.clear_premul);
        }
        self.transforms.reset();
        self.batch = None;
    }

    /// Flush pending draws and return the composited frame.
    pub fn finish(&mut self) -> RingfieldResult<FrameRGBA> {
        self.flush()?;
        if self.transforms.depth() != 0 {
            tracing::warn!(
                depth = self.transforms.depth(),
                "frame finished with unbalanced save"
            );
        }
        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.frame.clone(),
            premultiplied: true,
        })
    }

    fn push_stroke(&mut self, path: &BezPath, paint: &StrokePaint) -> RingfieldResult<()> {
        if paint.width <= 0.0 || paint.color.a == 0 || path.elements().is_empty() {
            return Ok(());
        }
        let glow = paint.glow.filter(|g| g.radius > 0.0);
        if self.batch.as_ref().is_some_and(|b| b.glow != glow) {
            self.flush()?;
        }
        let batch = self.batch.get_or_insert_with(|| Batch {
            glow,
            blurred: Vec::new(),
            sharp: Vec::new(),
        });

        let job = || StrokeJob {
            path: bezpath_to_cpu(path),
            transform: affine_to_cpu(self.transforms.current()),
            color: paint.color,
            width: paint.width,
        };
        match glow.map(|g| g.style) {
            None => batch.sharp.push(job()),
            Some(GlowStyle::Normal) => batch.blurred.push(job()),
            Some(GlowStyle::Solid) => {
                batch.blurred.push(job());
                batch.sharp.push(job());
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> RingfieldResult<()> {
        let Some(batch) = self.batch.take() else {
            return Ok(());
        };

        if let Some(glow) = batch.glow
            && !batch.blurred.is_empty()
        {
            let layer = self.rasterize(&batch.blurred);
            let sigma = glow_sigma(glow.radius);
            let blurred = blur_rgba8_premul(
                &layer,
                u32::from(self.width),
                u32::from(self.height),
                kernel_radius(sigma)?,
                sigma,
            )?;
            over_in_place(&mut self.frame, &blurred, 1.0)?;
        }

        if !batch.sharp.is_empty() {
            let layer = self.rasterize(&batch.sharp);
            over_in_place(&mut self.frame, &layer, 1.0)?;
        }
        Ok(())
    }

    fn rasterize(&self, jobs: &[StrokeJob]) -> Vec<u8> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        for job in jobs {
            ctx.set_transform(job.transform);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                job.color.r,
                job.color.g,
                job.color.b,
                job.color.a,
            ));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(job.width));
            ctx.stroke_path(&job.path);
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

impl RenderSink for CpuSink {
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
        self.push_stroke(&closed_polygon_path(points), paint)
    }

    fn draw_rounded_rect(
        &mut self,
        rect: Rect,
        radius_x: f64,
        radius_y: f64,
        paint: &StrokePaint,
    ) -> RingfieldResult<()> {
        self.push_stroke(&rounded_rect_path(rect, radius_x, radius_y), paint)
    }

    fn draw_circle(
        &mut self,
        center: Point,
        radius: f64,
        paint: &StrokePaint,
    ) -> RingfieldResult<()> {
        self.push_stroke(&circle_path(center, radius), paint)
    }
}

fn surface_dims(width: u32, height: u32) -> RingfieldResult<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(RingfieldError::validation(
            "cpu sink width/height must be non-zero",
        ));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| RingfieldError::validation("cpu sink width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| RingfieldError::validation("cpu sink height exceeds u16"))?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
