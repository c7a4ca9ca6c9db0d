use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;

use crate::audio::{AudioTrack, write_f32le_file};
use crate::config::RenderConfig;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::lyrics::LyricLine;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::{FrameRenderer, RendererSettings};
use crate::text::typeface::Typeface;
use crate::timeline::{Frame, Timeline};

/// Threading and chunking controls for video rendering.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Rasterize distinct frames of a chunk on a rayon pool.
    pub parallel: bool,
    /// Worker thread count; `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Video frames per scheduling chunk.
    pub chunk_size: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Video frames pushed to the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused from an identical earlier frame.
    pub frames_elided: u64,
}

/// Serializable description of what a render will draw.
#[derive(Debug, Serialize)]
pub struct RenderPlan<'a> {
    /// Face used for measuring and drawing.
    pub font: &'a str,
    /// Output size.
    pub container_size: Canvas,
    /// Output frame rate.
    pub fps: u32,
    /// Video length in seconds.
    pub duration: f64,
    /// Number of video frames.
    pub video_frames: u64,
    /// Lyric frames in order.
    pub frames: &'a [Frame],
}

/// A laid-out lyric video: validated config, resolved typeface and frame timeline.
#[derive(Clone, Debug)]
pub struct LyricVideo {
    config: RenderConfig,
    typeface: Typeface,
    timeline: Timeline,
}

impl LyricVideo {
    /// Validate `config`, resolve its font and lay out every frame of `lines` over `duration`
    /// seconds.
    pub fn build(lines: &[LyricLine], duration: f64, config: RenderConfig) -> ReelResult<Self> {
        config.validate()?;
        let typeface = Typeface::resolve(&config.font_family, config.font_path.as_deref());
        Self::with_typeface(lines, duration, config, typeface)
    }

    /// Like [`LyricVideo::build`] with an already resolved face.
    #[tracing::instrument(skip(lines, config, typeface), fields(font = typeface.name()))]
    pub fn with_typeface(
        lines: &[LyricLine],
        duration: f64,
        config: RenderConfig,
        typeface: Typeface,
    ) -> ReelResult<Self> {
        config.validate()?;
        let constraints = config.layout_constraints()?;
        let mut metrics = typeface.metrics()?;
        let timeline = Timeline::build(lines, duration, &constraints, metrics.as_mut())?;
        Ok(Self {
            config,
            typeface,
            timeline,
        })
    }

    /// Render configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolved face.
    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    /// Frame timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Output frame rate.
    pub fn fps(&self) -> ReelResult<Fps> {
        self.config.fps()
    }

    /// Number of video frames: `ceil(duration * fps)`.
    pub fn video_frame_count(&self) -> ReelResult<u64> {
        Ok(self.fps()?.secs_to_frames_ceil(self.timeline.duration()))
    }

    /// Settings for building renderers of this video.
    pub fn renderer_settings(&self) -> RendererSettings {
        RendererSettings {
            canvas: self.config.container_size,
            background: self.config.background_color,
            text_color: self.config.text_color,
            lofi_factor: self.config.lofi_factor,
            typeface: self.typeface.clone(),
        }
    }

    /// Frame geometry as a serializable plan.
    pub fn plan(&self) -> ReelResult<RenderPlan<'_>> {
        Ok(RenderPlan {
            font: self.typeface.name(),
            container_size: self.config.container_size,
            fps: self.config.fps,
            duration: self.timeline.duration(),
            video_frames: self.video_frame_count()?,
            frames: self.timeline.frames(),
        })
    }

    /// Render the image visible at `t` seconds.
    pub fn render_still(&self, t: f64) -> ReelResult<FrameRGBA> {
        if !t.is_finite() || t < 0.0 {
            return Err(ReelError::validation(format!(
                "still time must be finite and >= 0, got {t}"
            )));
        }
        let mut renderer = FrameRenderer::new(self.renderer_settings())?;
        renderer.render(self.timeline.frame_at(t))
    }

    /// Stream every video frame into `sink`.
    pub fn render_to_sink(
        &self,
        audio: Option<AudioInputConfig>,
        opts: &RenderOpts,
        sink: &mut dyn FrameSink,
    ) -> ReelResult<RenderStats> {
        render_timeline(
            &self.timeline,
            self.fps()?,
            &self.renderer_settings(),
            audio,
            opts,
            sink,
        )
    }

    /// Encode the video with `audio` as its soundtrack to an MP4 at `out_path`.
    #[tracing::instrument(skip_all, fields(out = %out_path.display()))]
    pub fn render_mp4(
        &self,
        audio: &AudioTrack,
        out_path: &Path,
        opts: &RenderOpts,
    ) -> ReelResult<RenderStats> {
        let mut audio_tmp = TempFileGuard(None);
        let path = temp_audio_path();
        write_f32le_file(&audio.pcm().interleaved_f32, &path)?;
        audio_tmp.0 = Some(path.clone());
        let audio_cfg = AudioInputConfig {
            path,
            sample_rate: audio.pcm().sample_rate,
            channels: audio.pcm().channels,
        };

        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(
            out_path,
            self.config.background_color,
        ));
        let stats = self.render_to_sink(Some(audio_cfg), opts, &mut sink)?;
        drop(audio_tmp);
        Ok(stats)
    }
}

/// Lyric frame shown by each video frame of `range`; `None` is the bare background.
pub fn video_frame_slots(timeline: &Timeline, fps: Fps, range: FrameRange) -> Vec<Option<usize>> {
    let mut slots = Vec::with_capacity(range.len_frames() as usize);
    for k in range.start.0..range.end.0 {
        slots.push(timeline.frame_index_at(fps.frame_time_secs(FrameIndex(k))));
    }
    slots
}

/// Render `ceil(duration * fps)` video frames of `timeline` into `sink`, in order.
///
/// Each distinct lyric frame of a chunk is rasterized once and reused for every video frame that
/// shows it; the last frame of a chunk carries over to the next.
#[tracing::instrument(skip_all, fields(frames = timeline.frames().len(), parallel = opts.parallel))]
pub fn render_timeline(
    timeline: &Timeline,
    fps: Fps,
    settings: &RendererSettings,
    audio: Option<AudioInputConfig>,
    opts: &RenderOpts,
    sink: &mut dyn FrameSink,
) -> ReelResult<RenderStats> {
    let total = fps.secs_to_frames_ceil(timeline.duration());
    let range = FrameRange::new(FrameIndex(0), FrameIndex(total))?;
    if range.is_empty() {
        return Err(ReelError::validation("video has no frames"));
    }

    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };
    let mut renderer = FrameRenderer::new(settings.clone())?;

    sink.begin(SinkConfig {
        width: settings.canvas.width,
        height: settings.canvas.height,
        fps,
        frame_count: total,
        audio,
    })?;

    let mut stats = RenderStats::default();
    let mut carry: Option<(Option<usize>, Arc<FrameRGBA>)> = None;

    for chunk in range.chunks(normalized_chunk_size(opts.chunk_size)) {
        let slots = video_frame_slots(timeline, fps, chunk);

        let mut unique = Vec::<Option<usize>>::new();
        for slot in &slots {
            let carried = carry.as_ref().is_some_and(|(s, _)| s == slot);
            if !carried && !unique.contains(slot) {
                unique.push(*slot);
            }
        }

        let rendered: Vec<FrameRGBA> = match pool.as_ref() {
            Some(pool) => pool.install(|| {
                unique
                    .par_iter()
                    .map_init(
                        || FrameRenderer::new(settings.clone()),
                        |worker, slot| -> ReelResult<FrameRGBA> {
                            let worker = worker.as_mut().map_err(|e| {
                                ReelError::evaluation(format!("worker renderer: {e}"))
                            })?;
                            worker.render(slot.map(|i| &timeline.frames()[i]))
                        },
                    )
                    .collect::<ReelResult<Vec<_>>>()
            })?,
            None => unique
                .iter()
                .map(|slot| renderer.render(slot.map(|i| &timeline.frames()[i])))
                .collect::<ReelResult<Vec<_>>>()?,
        };

        let mut cache: Vec<(Option<usize>, Arc<FrameRGBA>)> = unique
            .into_iter()
            .zip(rendered.into_iter().map(Arc::new))
            .collect();
        stats.frames_rendered += cache.len() as u64;
        if let Some(prev) = carry.take() {
            cache.push(prev);
        }

        for (offset, slot) in slots.iter().enumerate() {
            let frame = cache
                .iter()
                .find(|(s, _)| s == slot)
                .map(|(_, f)| f.clone())
                .ok_or_else(|| {
                    ReelError::evaluation("internal error: rendered frame missing for slot")
                })?;
            sink.push_frame(FrameIndex(chunk.start.0 + offset as u64), &frame)?;
            stats.frames_total += 1;
            carry = Some((*slot, frame));
        }
    }

    stats.frames_elided = stats.frames_total.saturating_sub(stats.frames_rendered);
    sink.end()?;

    tracing::info!(
        frames_total = stats.frames_total,
        frames_rendered = stats.frames_rendered,
        frames_elided = stats.frames_elided,
        "render finished"
    );
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation("render 'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

fn temp_audio_path() -> PathBuf {
    std::env::temp_dir().join(format!(
        "lyricreel_audio_{}_{}.f32le",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ))
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
