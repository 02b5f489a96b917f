//! Engine configuration.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::animation::field::FieldParams;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{RingfieldError, RingfieldResult};

/// Largest accepted `ring_count`.
pub const MAX_RING_COUNT: usize = 4096;

/// Largest accepted `base_stroke_width`, in pixels.
pub const MAX_BASE_STROKE_WIDTH: f64 = 1024.0;

/// Tunables for [`RingEngine`](crate::RingEngine).
///
/// Every field has a default, so a JSON config only needs the keys it changes:
///
/// ```json
/// { "ring_count": 32, "update_speed": 0.025, "seed": 7 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Rings in the field.
    pub ring_count: usize,
    /// Phase time added per frame.
    pub update_speed: f64,
    /// Fraction of the surface covered by the rings, disc and rounded rect.
    pub content_scale: f64,
    /// Stroke width of the disc and rounded rect; ring strokes use a quarter of it.
    pub base_stroke_width: f64,
    /// Base color for rings, disc and rounded rect.
    pub ring_color: Rgba8,
    /// Fixed RNG seed; drawn from the OS when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ring_count: 16,
            update_speed: 0.04,
            content_scale: 0.75,
            base_stroke_width: 30.0,
            ring_color: Rgba8::WHITE,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Check value ranges.
    pub fn validate(&self) -> RingfieldResult<()> {
        if self.ring_count == 0 || self.ring_count > MAX_RING_COUNT {
            return Err(RingfieldError::validation(format!(
                "ring_count must be in 1..={MAX_RING_COUNT}"
            )));
        }
        if !self.update_speed.is_finite() || self.update_speed <= 0.0 {
            return Err(RingfieldError::validation(
                "update_speed must be finite and > 0",
            ));
        }
        if !(self.content_scale > 0.0 && self.content_scale <= 1.0) {
            return Err(RingfieldError::validation(
                "content_scale must be in (0, 1]",
            ));
        }
        if !(self.base_stroke_width > 0.0 && self.base_stroke_width <= MAX_BASE_STROKE_WIDTH) {
            return Err(RingfieldError::validation(format!(
                "base_stroke_width must be in (0, {MAX_BASE_STROKE_WIDTH}]"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> RingfieldResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| RingfieldError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> RingfieldResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| RingfieldError::serde(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub(crate) fn field_params(&self) -> FieldParams {
        FieldParams {
            ring_count: self.ring_count,
            content_scale: self.content_scale,
            base_stroke_width: self.base_stroke_width,
            ring_color: self.ring_color,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
