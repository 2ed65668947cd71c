use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use voice_orb::{
    FixedStepClock, FrameClock, FrameIndex, FrameRGBA, FrameSink, Orb, OrbConfig, OrbResult,
    OrbScript, PngSequenceSink, SinkConfig, WallClock,
};

#[derive(Parser, Debug)]
#[command(name = "voice-orb", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a number of ticks and write the last frame as a PNG.
    Frame(FrameArgs),
    /// Write every tick as a numbered PNG.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct OrbArgs {
    /// Orb configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Update script JSON (updates keyed by tick index).
    #[arg(long)]
    script: Option<PathBuf>,

    /// Override the frame edge length in pixels.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    size: Option<u32>,

    /// Shade rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Advance transitions by measured wall-clock time instead of the fixed step.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    orb: OrbArgs,

    /// Number of ticks to run before capturing.
    #[arg(long, default_value_t = 1)]
    ticks: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    orb: OrbArgs,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix for each frame.
    #[arg(long, default_value = "orb")]
    prefix: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_orb(args: &OrbArgs) -> anyhow::Result<(Orb, OrbScript)> {
    let mut config = match &args.config {
        Some(path) => OrbConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => OrbConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if args.parallel {
        config.threading.parallel = true;
    }
    if args.threads.is_some() {
        config.threading.threads = args.threads;
    }

    let script = match &args.script {
        Some(path) => OrbScript::from_path(path)
            .with_context(|| format!("load script '{}'", path.display()))?,
        None => OrbScript::default(),
    };

    let mut orb = Orb::new(config).context("build orb")?;
    orb.start();
    Ok((orb, script))
}

fn make_clock(args: &OrbArgs, step_ms: f64, ticks: u64) -> Box<dyn FrameClock> {
    if args.realtime {
        Box::new(WallClock::new(ticks))
    } else {
        Box::new(FixedStepClock::new(step_ms, ticks))
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut orb, script) = build_orb(&args.orb)?;
    let mut clock = make_clock(&args.orb, orb.config().frame_step_ms, args.ticks.max(1));
    let mut sink = LastFrameSink::default();
    orb.run_script(clock.as_mut(), &mut sink, &script)?;

    let frame = sink
        .frame
        .context("no frame was rendered (orb stopped before the first tick)")?;
    write_frame(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (mut orb, script) = build_orb(&args.orb)?;
    let mut clock = make_clock(&args.orb, orb.config().frame_step_ms, args.frames);
    let mut sink = PngSequenceSink::new(&args.out_dir, args.prefix.as_str());
    let stats = orb
        .run_script(clock.as_mut(), &mut sink, &script)
        .with_context(|| format!("render into '{}'", args.out_dir.display()))?;

    eprintln!("wrote {} frames to {}", stats.frames, args.out_dir.display());
    Ok(())
}

fn write_frame(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    voice_orb::write_png(path, frame).with_context(|| format!("write png '{}'", path.display()))
}

/// Keeps only the most recent frame.
#[derive(Default)]
struct LastFrameSink {
    frame: Option<FrameRGBA>,
}

impl FrameSink for LastFrameSink {
    fn begin(&mut self, _cfg: SinkConfig) -> OrbResult<()> {
        self.frame = None;
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameRGBA) -> OrbResult<()> {
        match &mut self.frame {
            Some(last) => last.clone_from(frame),
            None => self.frame = Some(frame.clone()),
        }
        Ok(())
    }

    fn end(&mut self) -> OrbResult<()> {
        Ok(())
    }
}
