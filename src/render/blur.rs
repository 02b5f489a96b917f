use crate::foundation::error::{RingfieldError, RingfieldResult};

/// Gaussian sigma for a glow of the given radius.
///
/// Follows the common canvas convention of treating a blur radius as `radius / sqrt(3) + 0.5`.
pub fn glow_sigma(radius: f64) -> f32 {
    (radius.max(0.0) * 0.57735 + 0.5) as f32
}

/// Largest kernel half-width [`kernel_radius`] accepts.
pub const MAX_KERNEL_RADIUS: u32 = 4096;

/// Kernel half-width covering three standard deviations of `sigma`.
///
/// Non-positive or NaN sigmas give `0`; a half-width above [`MAX_KERNEL_RADIUS`] is an error.
pub fn kernel_radius(sigma: f32) -> RingfieldResult<u32> {
    if sigma.is_nan() || sigma <= 0.0 {
        return Ok(0);
    }
    let r = (f64::from(sigma) * 3.0).ceil();
    if r > f64::from(MAX_KERNEL_RADIUS) {
        return Err(RingfieldError::render(format!(
            "blur kernel radius {r} exceeds {MAX_KERNEL_RADIUS}"
        )));
    }
    Ok(r as u32)
}

/// Separable Gaussian blur over a premultiplied RGBA8 buffer (edge pixels clamp).
///
/// Glow layers are mostly empty, so only rows within `radius` of a non-transparent row are
/// convolved; every other output row stays transparent.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> RingfieldResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| RingfieldError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(RingfieldError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    let Some(rows) = RowSpan::occupied(src, width as usize) else {
        return Ok(out);
    };

    horizontal_pass(src, &mut tmp, width as usize, rows, &kernel);
    let grown = rows.grow(radius as usize, height as usize);
    vertical_pass(&tmp, &mut out, width as usize, height as usize, grown, &kernel);
    Ok(out)
}

/// Inclusive range of rows that contain at least one non-transparent pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RowSpan {
    first: usize,
    last: usize,
}

impl RowSpan {
    fn occupied(buf: &[u8], width: usize) -> Option<Self> {
        let stride = width * 4;
        if stride == 0 {
            return None;
        }
        let is_occupied = |row: &[u8]| row.chunks_exact(4).any(|px| px[3] != 0);
        let first = buf.chunks_exact(stride).position(is_occupied)?;
        let last = buf.chunks_exact(stride).rposition(is_occupied)?;
        Some(Self { first, last })
    }

    fn grow(self, by: usize, height: usize) -> Self {
        Self {
            first: self.first.saturating_sub(by),
            last: (self.last + by).min(height.saturating_sub(1)),
        }
    }
}

fn gaussian_kernel_q16(radius: u32, sigma: f32) -> RingfieldResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RingfieldError::validation("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let sigma = f64::from(sigma);
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = f64::from(i);
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(RingfieldError::render("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|&wf| (((wf / sum) * 65536.0).round() as i64).clamp(0, 65536) as u32)
        .collect();

    // Push the rounding residue into the center tap so the kernel sums to exactly 1.0 (Q16).
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    }

    Ok(weights)
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: usize, rows: RowSpan, k: &[u32]) {
    let radius = k.len() / 2;
    let stride = width * 4;
    for y in rows.first..=rows.last {
        let row = &src[y * stride..(y + 1) * stride];
        let out = &mut dst[y * stride..(y + 1) * stride];
        for x in 0..width {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki).saturating_sub(radius).min(width - 1);
                let px = &row[sx * 4..sx * 4 + 4];
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(px[c]);
                }
            }
            for c in 0..4 {
                out[x * 4 + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    rows: RowSpan,
    k: &[u32],
) {
    let radius = k.len() / 2;
    let stride = width * 4;
    for y in rows.first..=rows.last {
        for x in 0..width {
            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki).saturating_sub(radius).min(height - 1);
                let idx = sy * stride + x * 4;
                for c in 0..4 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = y * stride + x * 4;
            for c in 0..4 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    (v.min(255)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
