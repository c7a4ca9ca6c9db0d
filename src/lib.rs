//! lyricreel turns timestamped lyrics and a soundtrack into a word-by-word lyric video.
//!
//! - Load lyric lines ([`load_lyrics`]) and decode the audio ([`AudioTrack`])
//! - Lay out every reveal step into a [`Timeline`] of positioned-word [`Frame`]s
//! - Rasterize with [`FrameRenderer`] and stream the frames into a [`FrameSink`]
//!
//! [`LyricVideo`] bundles the steps: build it once, then render stills, a JSON plan, or an MP4.
#![forbid(unsafe_code)]

mod assets;
mod foundation;

/// Soundtrack decoding.
pub mod audio;
/// Render configuration.
pub mod config;
/// Encoding sinks.
pub mod encode;
/// Word wrapping, font-size search and positioning.
pub mod layout;
/// Lyric sources.
pub mod lyrics;
/// Frame rasterization and the render pipeline.
pub mod render;
pub(crate) mod text;
/// Word timing and frame composition.
pub mod timeline;

pub use crate::assets::color::Rgb8;
pub use crate::assets::media::{AudioPcm, MIX_SAMPLE_RATE, SourceWindow};
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::audio::AudioTrack;
pub use crate::config::RenderConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};
pub use crate::layout::{FrameLayout, LayoutConstraints, LayoutLine, PositionedWord, layout_words};
pub use crate::lyrics::{LyricLine, load_lyrics, parse_lrc, parse_time, slice_window};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{FrameRenderer, RendererSettings};
pub use crate::render::pipeline::{LyricVideo, RenderOpts, RenderPlan, RenderStats};
pub use crate::text::metrics::{BlockMetrics, FontMetrics};
pub use crate::text::typeface::{OutlineFont, Typeface};
pub use crate::timeline::{Frame, Segment, Timeline, WordEvent};
