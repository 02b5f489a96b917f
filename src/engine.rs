//! The ring-field engine: owns the rings, geometry and animation state and renders one frame
//! per host callback.

use crate::animation::field::build_ring_field;
use crate::animation::geometry::{CentralDisc, RoundedRectGeometry, outline_paint};
use crate::animation::phases::{corner_radius, render_ring_field, render_rounded_rect};
use crate::animation::ring::RingDescriptor;
use crate::animation::state::{AnimationState, Phase, Transition};
use crate::config::EngineConfig;
use crate::foundation::core::{FrameIndex, Point, SurfaceSize};
use crate::foundation::error::{RingfieldError, RingfieldResult};
use crate::foundation::rng::RingRng;
use crate::render::sink::{RenderSink, StrokePaint};

/// Result of [`RingEngine::on_resize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The size was accepted and the field rebuilt.
    Regenerated,
    /// The size was unusable; prior geometry is kept.
    Ignored,
}

/// What one [`RingEngine::on_frame`] call did.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Zero-based index of the rendered frame.
    pub frame: FrameIndex,
    /// Phase whose renderer ran.
    pub phase: Phase,
    /// Phase change triggered at the end of the frame, if any.
    pub transition: Option<Transition>,
    /// State after the transition check.
    pub state: AnimationState,
}

/// Surface-derived geometry, rebuilt wholesale on resize.
#[derive(Clone, Debug)]
struct Layout {
    surface: SurfaceSize,
    rings: Vec<RingDescriptor>,
    rect: RoundedRectGeometry,
    disc: CentralDisc,
}

/// Frame-driven ring-field animation.
///
/// The host calls [`on_resize`](Self::on_resize) whenever the drawing surface changes and
/// [`on_frame`](Self::on_frame) once per frame with a sink to draw into.
#[derive(Debug)]
pub struct RingEngine {
    config: EngineConfig,
    rng: RingRng,
    outline: StrokePaint,
    state: AnimationState,
    layout: Option<Layout>,
    frame: u64,
    scratch: Vec<Point>,
}

impl RingEngine {
    /// Build an engine; the RNG is seeded from `config.seed` or from the OS.
    pub fn new(config: EngineConfig) -> RingfieldResult<Self> {
        let rng = match config.seed {
            Some(seed) => RingRng::seeded(seed),
            None => RingRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Build an engine around a caller-supplied RNG; `config.seed` is ignored.
    pub fn with_rng(config: EngineConfig, rng: RingRng) -> RingfieldResult<Self> {
        config.validate()?;
        let outline = outline_paint(config.ring_color, config.base_stroke_width);
        Ok(Self {
            config,
            rng,
            outline,
            state: AnimationState::new(),
            layout: None,
            frame: 0,
            scratch: Vec::new(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current animation state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Last accepted surface size.
    pub fn surface(&self) -> Option<SurfaceSize> {
        self.layout.as_ref().map(|l| l.surface)
    }

    /// Current ring descriptors; empty before the first accepted resize.
    pub fn rings(&self) -> &[RingDescriptor] {
        self.layout.as_ref().map_or(&[], |l| &l.rings)
    }

    /// Rounded-rect geometry for the current surface.
    pub fn rounded_rect(&self) -> Option<&RoundedRectGeometry> {
        self.layout.as_ref().map(|l| &l.rect)
    }

    /// Central disc for the current surface.
    pub fn disc(&self) -> Option<&CentralDisc> {
        self.layout.as_ref().map(|l| &l.disc)
    }

    /// Paint shared by the disc and the rounded rect.
    pub fn outline(&self) -> &StrokePaint {
        &self.outline
    }

    /// Frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frame
    }

    /// React to a surface size change.
    ///
    /// Every accepted size rebuilds the ring field and geometry and restarts the current
    /// phase's clock. Non-finite or non-positive sizes are ignored.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn on_resize(&mut self, width: f64, height: f64) -> ResizeOutcome {
        let surface = match SurfaceSize::new(width, height) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring resize");
                return ResizeOutcome::Ignored;
            }
        };

        let scale = self.config.content_scale;
        let rings = build_ring_field(surface, &self.config.field_params(), &mut self.rng);
        self.layout = Some(Layout {
            surface,
            rings,
            rect: RoundedRectGeometry::for_surface(surface, scale),
            disc: CentralDisc::for_surface(surface, scale),
        });
        self.state.reset_phase_time();
        ResizeOutcome::Regenerated
    }

    /// Advance the clock, draw the active phase into `sink`, then evaluate transitions.
    pub fn on_frame(&mut self, sink: &mut dyn RenderSink) -> RingfieldResult<FrameReport> {
        let layout = self.layout.as_mut().ok_or_else(|| {
            RingfieldError::validation("on_frame called before a surface size was set")
        })?;

        self.state.tick(self.config.update_speed);
        let phase = self.state.phase();
        let time = self.state.phase_time();

        match corner_radius(&layout.rect, phase, time) {
            None => render_ring_field(
                sink,
                &mut layout.rings,
                time,
                &layout.disc,
                &self.outline,
                &mut self.scratch,
            )?,
            Some(radius) => render_rounded_rect(sink, &layout.rect, radius, &self.outline)?,
        }

        let transition = self.state.evaluate_transition();
        if let Some(t) = transition {
            tracing::debug!(from = ?t.from, to = ?t.to, frame = self.frame, "phase transition");
        }

        let report = FrameReport {
            frame: FrameIndex(self.frame),
            phase,
            transition,
            state: self.state,
        };
        self.frame += 1;
        Ok(report)
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
