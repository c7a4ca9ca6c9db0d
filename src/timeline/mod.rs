//! Word timing and frame composition.
//!
//! [`build_segments`] turns lyric lines into per-word reveal events; [`FrameComposer`] turns those
//! into laid-out, time-bounded [`Frame`]s; [`Timeline`] answers which frame is on screen at a
//! given time.

pub(crate) mod compose;
pub(crate) mod words;

use serde::Serialize;

use crate::foundation::error::{ReelError, ReelResult};
use crate::layout::LayoutConstraints;
use crate::lyrics::LyricLine;
use crate::text::metrics::FontMetrics;

pub use compose::{Frame, FrameComposer, MIN_FRAME_DURATION, build_frames};
pub use words::{FALLBACK_LINE_DURATION, Segment, WordEvent, build_segments};

/// All lyric frames of a song over a background spanning `[0, duration)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timeline {
    duration: f64,
    frames: Vec<Frame>,
}

impl Timeline {
    /// Segment `lines` and compose every frame against `duration` seconds of audio.
    #[tracing::instrument(skip(lines, constraints, metrics), fields(lines = lines.len()))]
    pub fn build(
        lines: &[LyricLine],
        duration: f64,
        constraints: &LayoutConstraints,
        metrics: &mut dyn FontMetrics,
    ) -> ReelResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ReelError::validation(format!(
                "audio duration must be finite and > 0, got {duration}"
            )));
        }

        let segments = build_segments(lines, duration);
        let frames = build_frames(&segments, duration, constraints, metrics);
        tracing::info!(
            segments = segments.len(),
            frames = frames.len(),
            duration,
            "built timeline"
        );
        Ok(Self { duration, frames })
    }

    /// Total duration in seconds; equals the audio duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Lyric frames in composition order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Index of the frame on top at `t`. Frames stack in composition order, so the last one
    /// covering `t` wins. `None` means only the background is visible.
    pub fn frame_index_at(&self, t: f64) -> Option<usize> {
        if !(0.0..self.duration).contains(&t) {
            return None;
        }
        self.frames.iter().rposition(|f| f.covers(t))
    }

    /// Frame on top at `t`, if any.
    pub fn frame_at(&self, t: f64) -> Option<&Frame> {
        self.frame_index_at(t).map(|i| &self.frames[i])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/timeline.rs"]
mod tests;
