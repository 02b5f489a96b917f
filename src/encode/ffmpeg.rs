//! MP4 output through the system `ffmpeg` binary.

use std::{
    io::Write as _,
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
};

use anyhow::Context as _;

use crate::foundation::core::{Fps, Rgba8};
use crate::foundation::error::{RingfieldError, RingfieldResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::cpu::FrameRGBA;

/// Video encoding parameters.
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Frame width in pixels; must be even.
    pub width: u32,
    /// Frame height in pixels; must be even.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Destination file.
    pub out_path: PathBuf,
    /// Replace an existing file at `out_path`.
    pub overwrite: bool,
}

impl EncodeConfig {
    /// Check dimensions and frame rate.
    pub fn validate(&self) -> RingfieldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RingfieldError::validation(
                "encode width/height must be non-zero",
            ));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            // yuv420p output.
            return Err(RingfieldError::validation(
                "encode width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        Ok(())
    }
}

/// Whether an `ffmpeg` executable answers `-version`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> RingfieldResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Streams raw RGBA frames into an `ffmpeg` child process.
pub struct FfmpegEncoder {
    cfg: EncodeConfig,
    background: [u8; 4],
    child: Child,
    stdin: Option<ChildStdin>,
    scratch: Vec<u8>,
    frames: u64,
}

impl FfmpegEncoder {
    /// Spawn `ffmpeg`; transparent pixels are flattened over `background`.
    pub fn new(cfg: EncodeConfig, background: Rgba8) -> RingfieldResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(RingfieldError::validation(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(RingfieldError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .arg(if cfg.overwrite { "-y" } else { "-n" })
            .args(["-loglevel", "error", "-f", "rawvideo", "-pix_fmt", "rgba"])
            .arg("-s")
            .arg(format!("{}x{}", cfg.width, cfg.height))
            .arg("-r")
            .arg(format!("{}/{}", cfg.fps.num, cfg.fps.den))
            .args([
                "-i",
                "pipe:0",
                "-an",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ])
            .arg(&cfg.out_path);

        tracing::debug!(out = %cfg.out_path.display(), "spawning ffmpeg");
        let mut child = cmd
            .spawn()
            .map_err(|e| RingfieldError::encode(format!("failed to spawn ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| RingfieldError::encode("failed to open ffmpeg stdin"))?;

        Ok(Self {
            scratch: vec![0u8; cfg.width as usize * cfg.height as usize * 4],
            cfg,
            background: background.to_array(),
            child,
            stdin: Some(stdin),
            frames: 0,
        })
    }

    /// Flatten and write one frame.
    pub fn encode_frame(&mut self, frame: &FrameRGBA) -> RingfieldResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(RingfieldError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }

        flatten_to_opaque_rgba8(
            &mut self.scratch,
            &frame.data,
            frame.premultiplied,
            self.background,
        )?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(RingfieldError::encode("ffmpeg encoder is already finalized"));
        };
        stdin
            .write_all(&self.scratch)
            .map_err(|e| RingfieldError::encode(format!("failed to write frame to ffmpeg: {e}")))?;
        self.frames += 1;
        Ok(())
    }

    /// Close the pipe and wait for `ffmpeg` to exit.
    pub fn finish(mut self) -> RingfieldResult<()> {
        drop(self.stdin.take());
        let output = self
            .child
            .wait_with_output()
            .map_err(|e| RingfieldError::encode(format!("failed to wait for ffmpeg: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RingfieldError::encode(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        tracing::debug!(frames = self.frames, "ffmpeg finished");
        Ok(())
    }
}

/// Composite RGBA8 `src` over an opaque `background` into `dst`.
pub(crate) fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    background: [u8; 4],
) -> RingfieldResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RingfieldError::validation(
            "frame data does not match width*height*4",
        ));
    }

    let bg = background.map(u16::from);
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        let inv = 255 - a;
        for c in 0..3 {
            let fg = if src_is_premul {
                u16::from(s[c])
            } else {
                mul_div255_u16(u16::from(s[c]), a)
            };
            d[c] = (fg + mul_div255_u16(bg[c], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
