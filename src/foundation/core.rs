use crate::foundation::error::{RingfieldError, RingfieldResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Absolute 0-based frame index, counted from the first rendered frame.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> RingfieldResult<Self> {
        if den == 0 {
            return Err(RingfieldError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RingfieldError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }
}

/// Drawable surface size in pixels, as reported by the host on layout/resize.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SurfaceSize {
    /// Create a validated size; both sides must be finite and strictly positive.
    pub fn new(width: f64, height: f64) -> RingfieldResult<Self> {
        if !(width.is_finite() && height.is_finite()) {
            return Err(RingfieldError::validation("surface size must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(RingfieldError::validation(format!(
                "surface size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Center of the surface.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// The larger of the two sides.
    pub fn max_side(self) -> f64 {
        self.width.max(self.height)
    }
}

/// Straight-alpha RGBA8 color.
///
/// Serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Build a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale the color channels by `intensity` (clamped to `[0, 1]`); alpha becomes opaque.
    pub fn scaled_opaque(self, intensity: f64) -> Self {
        let k = intensity.clamp(0.0, 1.0);
        let scale = |c: u8| -> u8 { (f64::from(c) * k).round().clamp(0.0, 255.0) as u8 };
        Self::opaque(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> RingfieldResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || RingfieldError::validation(format!("invalid hex color '{s}'"));
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let nib = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| bad())
                };
                Ok(Self::opaque(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Ok(Self::opaque(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => Err(bad()),
        }
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = RingfieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
