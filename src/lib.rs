//! Ringfield is a frame-driven animation engine that draws a field of oscillating rings.
//!
//! Each ring is a closed parametric curve whose radius is modulated by a third-order harmonic.
//! The rings slowly rotate around a central disc; after one full oscillation period the disc
//! morphs into a rounded rectangle, holds, and morphs back before the ring field returns.
//!
//! # Frame overview
//!
//! 1. **Resize**: `RingEngine::on_resize(w, h)` rebuilds the ring field and geometry
//! 2. **Advance**: each `RingEngine::on_frame(sink)` adds the update speed to the phase clock
//! 3. **Draw**: the active phase issues calls on a [`RenderSink`]
//! 4. **Transition**: the phase table is evaluated and a [`FrameReport`] is returned
//!
//! Sinks shipped with the crate:
//!
//! - [`RecordingSink`] records [`DrawCommand`]s for tests and JSON dumps.
//! - [`CpuSink`] rasterizes with `vello_cpu`, including blurred glow, into a [`FrameRGBA`].
//!
//! Scheduling belongs to the host: see [`FrameDriver`], [`FrameLoop`] and [`SharedEngine`].
//! Frames can be streamed to the system `ffmpeg` binary with [`FfmpegEncoder`].
//!
//! # Determinism
//!
//! All randomness flows through an explicitly owned [`RingRng`]. A fixed seed reproduces the
//! same ring field and therefore the same frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod driver;
mod encode;
mod engine;
mod foundation;
mod render;

pub use animation::curve::{
    CURVE_STEPS, HARMONIC_ORDER, curve_point, evaluate_curve, evaluate_curve_into, trace_ring,
};
pub use animation::field::{FieldParams, MAX_ROTATION_SPEED, RING_STAGGER, build_ring_field};
pub use animation::geometry::{CentralDisc, RoundedRectGeometry, outline_paint};
pub use animation::phases::{corner_radius, render_ring_field, render_rounded_rect};
pub use animation::ring::{RingDescriptor, ShapeVariant};
pub use animation::state::{AnimationState, Phase, Transition};
pub use config::{EngineConfig, MAX_BASE_STROKE_WIDTH, MAX_RING_COUNT};
pub use driver::{
    CountingScheduler, FrameDriver, FrameLoop, LoopControl, RedrawScheduler, SharedEngine,
};
pub use encode::ffmpeg::{EncodeConfig, FfmpegEncoder, ensure_parent_dir, is_ffmpeg_on_path};
pub use engine::{FrameReport, ResizeOutcome, RingEngine};
pub use foundation::core::{
    Affine, BezPath, Fps, FrameIndex, Point, Rect, Rgba8, SurfaceSize, Vec2,
};
pub use foundation::error::{RingfieldError, RingfieldResult};
pub use foundation::rng::RingRng;
pub use render::cpu::{CpuSink, CpuSinkOpts, FrameRGBA};
pub use render::shapes::{PATH_TOLERANCE, circle_path, closed_polygon_path, rounded_rect_path};
pub use render::sink::{
    DrawCommand, Glow, GlowStyle, RecordingSink, RenderSink, StrokePaint, TransformStack,
};
