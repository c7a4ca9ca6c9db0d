use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use lyricreel::{
    AudioTrack, LyricLine, LyricVideo, RenderConfig, RenderOpts, Rgb8, SourceWindow, load_lyrics,
    parse_time, slice_window,
};

#[derive(Parser, Debug)]
#[command(name = "lyricreel", version, about = "Word-by-word synchronized lyric videos")]
struct Cli {
    /// Log debug detail (per-frame layout, ffmpeg setup).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an MP4 (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Render the image visible at one moment as a PNG.
    Frame(FrameArgs),
    /// Print the laid-out frame timeline as JSON.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Soundtrack; any format `ffmpeg` can decode.
    #[arg(long)]
    audio: PathBuf,

    /// Lyrics: JSON array of {start, text} or an `.lrc` file.
    #[arg(long)]
    lyrics: PathBuf,

    /// Output MP4 path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    window: WindowArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Rasterize frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Video frames per render chunk.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Args, Debug)]
struct FrameArgs {
    /// Lyrics: JSON array of {start, text} or an `.lrc` file.
    #[arg(long)]
    lyrics: PathBuf,

    #[command(flatten)]
    length: LengthArgs,

    /// Time to render (`m:ss`, `mm:ss.f` or seconds), relative to the window start.
    #[arg(long)]
    at: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    window: WindowArgs,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Lyrics: JSON array of {start, text} or an `.lrc` file.
    #[arg(long)]
    lyrics: PathBuf,

    #[command(flatten)]
    length: LengthArgs,

    /// Write the plan here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    window: WindowArgs,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Where the video length comes from when no MP4 is encoded.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct LengthArgs {
    /// Soundtrack to take the duration from.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Video length in seconds.
    #[arg(long)]
    duration: Option<f64>,
}

#[derive(Args, Debug)]
struct WindowArgs {
    /// Start of the excerpt to render (`m:ss`, `mm:ss.f` or seconds).
    #[arg(long)]
    start: Option<String>,

    /// End of the excerpt to render.
    #[arg(long)]
    end: Option<String>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON render config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Background color, `#RRGGBB`.
    #[arg(long)]
    background_color: Option<Rgb8>,

    /// Text color, `#RRGGBB`.
    #[arg(long)]
    text_color: Option<Rgb8>,

    #[arg(long)]
    max_font_size: Option<u32>,

    #[arg(long)]
    min_font_size: Option<u32>,

    /// Pixelation factor (1 = off).
    #[arg(long)]
    lofi_factor: Option<u32>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    #[arg(long)]
    top_margin_fraction: Option<f64>,

    #[arg(long)]
    usable_height_fraction: Option<f64>,

    #[arg(long)]
    font_family: Option<String>,

    /// TTF/OTF file to render with.
    #[arg(long)]
    font_path: Option<PathBuf>,

    #[arg(long)]
    fps: Option<u32>,
}

impl ConfigArgs {
    fn resolve(&self) -> anyhow::Result<RenderConfig> {
        let mut cfg = match &self.config {
            Some(path) => RenderConfig::from_path(path)?,
            None => RenderConfig::default(),
        };
        if let Some(v) = self.background_color {
            cfg.background_color = v;
        }
        if let Some(v) = self.text_color {
            cfg.text_color = v;
        }
        if let Some(v) = self.max_font_size {
            cfg.max_font_size = v;
        }
        if let Some(v) = self.min_font_size {
            cfg.min_font_size = v;
        }
        if let Some(v) = self.lofi_factor {
            cfg.lofi_factor = v;
        }
        if let Some(v) = self.width {
            cfg.container_size.width = v;
        }
        if let Some(v) = self.height {
            cfg.container_size.height = v;
        }
        if let Some(v) = self.top_margin_fraction {
            cfg.top_margin_fraction = v;
        }
        if let Some(v) = self.usable_height_fraction {
            cfg.usable_height_fraction = v;
        }
        if let Some(v) = &self.font_family {
            cfg.font_family = v.clone();
        }
        if let Some(v) = &self.font_path {
            cfg.font_path = Some(v.clone());
        }
        if let Some(v) = self.fps {
            cfg.fps = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

impl WindowArgs {
    fn resolve(&self) -> anyhow::Result<SourceWindow> {
        let start_sec = self.start.as_deref().map(parse_time).transpose()?;
        let end_sec = self.end.as_deref().map(parse_time).transpose()?;
        if let (Some(s), Some(e)) = (start_sec, end_sec)
            && e <= s
        {
            anyhow::bail!("--end ({e}s) must be after --start ({s}s)");
        }
        Ok(SourceWindow { start_sec, end_sec })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn load_windowed_lyrics(path: &Path, window: SourceWindow) -> anyhow::Result<Vec<LyricLine>> {
    let lines = load_lyrics(path).with_context(|| format!("load lyrics '{}'", path.display()))?;
    if window.start_sec.is_none() && window.end_sec.is_none() {
        return Ok(lines);
    }
    Ok(slice_window(
        &lines,
        window.start_sec.unwrap_or(0.0),
        window.end_sec.unwrap_or(f64::MAX),
    )?)
}

fn duration_of(length: &LengthArgs, window: SourceWindow) -> anyhow::Result<f64> {
    match (&length.audio, length.duration) {
        (Some(path), _) => Ok(AudioTrack::load(path, window)?.duration_secs()),
        (None, Some(d)) => Ok(d),
        (None, None) => anyhow::bail!("either --audio or --duration is required"),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let window = args.window.resolve()?;
    let lines = load_windowed_lyrics(&args.lyrics, window)?;
    let audio = AudioTrack::load(&args.audio, window)
        .with_context(|| format!("load audio '{}'", args.audio.display()))?;

    let video = LyricVideo::build(&lines, audio.duration_secs(), cfg)?;
    let opts = RenderOpts {
        parallel: args.parallel,
        threads: args.threads,
        chunk_size: args.chunk_size,
    };
    let stats = video.render_mp4(&audio, &args.out, &opts)?;

    eprintln!(
        "wrote {} ({} frames, {} rendered)",
        args.out.display(),
        stats.frames_total,
        stats.frames_rendered
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let window = args.window.resolve()?;
    let lines = load_windowed_lyrics(&args.lyrics, window)?;
    let duration = duration_of(&args.length, window)?;
    let at = parse_time(&args.at)?;

    let video = LyricVideo::build(&lines, duration, cfg)?;
    let frame = video.render_still(at)?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let cfg = args.config.resolve()?;
    let window = args.window.resolve()?;
    let lines = load_windowed_lyrics(&args.lyrics, window)?;
    let duration = duration_of(&args.length, window)?;

    let video = LyricVideo::build(&lines, duration, cfg)?;
    let json = serde_json::to_string_pretty(&video.plan()?).context("serialize plan")?;

    match &args.out {
        Some(path) => {
            lyricreel::encode::ffmpeg::ensure_parent_dir(path)?;
            std::fs::write(path, json + "\n")
                .with_context(|| format!("write plan '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("write plan to stdout")?;
        }
    }
    Ok(())
}
