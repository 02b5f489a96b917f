use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use ringfield::{
    CpuSink, CpuSinkOpts, EncodeConfig, EngineConfig, FfmpegEncoder, Fps, FrameLoop, LoopControl,
    RecordingSink, Rgba8, RingEngine, ensure_parent_dir,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ringfield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render an MP4 video (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Print phase transitions, or the last frame's draw commands as JSON.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Surface width in pixels.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Surface height in pixels.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Engine config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed; overrides the config file.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Background color (`#rrggbb` or `#rrggbbaa`); transparent when omitted.
    #[arg(long, value_parser = parse_color)]
    background: Option<Rgba8>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    /// Number of frames to encode.
    #[arg(long)]
    frames: u64,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Background color the frames are flattened over.
    #[arg(long, value_parser = parse_color, default_value = "#12141c")]
    background: Rgba8,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Number of frames to run.
    #[arg(long)]
    frames: u64,

    /// Dump the last frame's draw commands as JSON instead of transitions.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn parse_color(s: &str) -> Result<Rgba8, String> {
    Rgba8::from_hex(s).map_err(|e| e.to_string())
}

fn read_config(path: Option<&Path>, seed: Option<u64>) -> anyhow::Result<EngineConfig> {
    let mut cfg = match path {
        Some(p) => EngineConfig::from_json_file(p)?,
        None => EngineConfig::default(),
    };
    if seed.is_some() {
        cfg.seed = seed;
    }
    Ok(cfg)
}

fn make_engine(args: &EngineArgs) -> anyhow::Result<RingEngine> {
    let cfg = read_config(args.config.as_deref(), args.seed)?;
    let mut engine = RingEngine::new(cfg)?;
    if engine.on_resize(f64::from(args.width), f64::from(args.height))
        == ringfield::ResizeOutcome::Ignored
    {
        anyhow::bail!("invalid surface size {}x{}", args.width, args.height);
    }
    Ok(engine)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut engine = make_engine(&args.engine)?;

    // Earlier frames only matter for the state they leave behind.
    let mut skip = RecordingSink::new();
    for _ in 0..args.frame {
        engine.on_frame(&mut skip)?;
        skip.clear();
    }

    let mut sink = CpuSink::new(CpuSinkOpts {
        width: args.engine.width,
        height: args.engine.height,
        background: args.background,
    })?;
    sink.begin_frame();
    let report = engine.on_frame(&mut sink)?;
    let frame = sink.finish()?;
    tracing::info!(frame = report.frame.0, phase = ?report.phase, "rendered");

    ensure_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &unpremultiply(frame.data),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut engine = make_engine(&args.engine)?;
    let fps = Fps::new(args.fps, 1)?;

    let mut encoder = FfmpegEncoder::new(
        EncodeConfig {
            width: args.engine.width,
            height: args.engine.height,
            fps,
            out_path: args.out.clone(),
            overwrite: true,
        },
        args.background,
    )?;

    let mut sink = CpuSink::new(CpuSinkOpts {
        width: args.engine.width,
        height: args.engine.height,
        background: None,
    })?;
    sink.begin_frame();
    let rendered = FrameLoop::with_limit(args.frames).run(&mut engine, &mut sink, |sink, _| {
        let frame = sink.finish()?;
        encoder.encode_frame(&frame)?;
        sink.begin_frame();
        Ok(LoopControl::Continue)
    })?;
    encoder.finish()?;

    tracing::info!(frames = rendered, "encoded");
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let mut engine = make_engine(&args.engine)?;
    let mut sink = RecordingSink::new();

    for _ in 0..args.frames {
        sink.clear();
        let report = engine.on_frame(&mut sink)?;
        if !args.json
            && let Some(t) = report.transition
        {
            println!(
                "frame {}: {:?} -> {:?} (cycles: {})",
                report.frame.0,
                t.from,
                t.to,
                report.state.cycle_count()
            );
        }
    }

    if args.json {
        let out = serde_json::to_string_pretty(sink.commands())
            .with_context(|| "serialize draw commands")?;
        println!("{out}");
    }
    Ok(())
}

/// PNG expects straight alpha.
fn unpremultiply(mut data: Vec<u8>) -> Vec<u8> {
    for px in data.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    data
}
