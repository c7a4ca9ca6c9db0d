use serde::Serialize;

use crate::layout::{LayoutConstraints, PositionedWord, layout_words};
use crate::text::metrics::FontMetrics;
use crate::timeline::words::Segment;

/// Shortest window a frame may have, in seconds.
pub const MIN_FRAME_DURATION: f64 = 0.05;

/// One timed image: the words of a segment revealed so far, laid out from scratch.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// Word positions in reading order.
    pub positioned_words: Vec<PositionedWord>,
    /// Solved font size in pixels.
    pub font_size: u32,
    /// Window start in seconds (inclusive).
    pub start_time: f64,
    /// Window end in seconds (exclusive), always greater than `start_time`.
    pub end_time: f64,
}

impl Frame {
    /// Window length in seconds.
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether `t` falls inside `[start_time, end_time)`.
    pub fn covers(&self, t: f64) -> bool {
        self.start_time <= t && t < self.end_time
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ComposeState {
    /// Between segments; `next` is the segment to enter.
    Idle { next: usize },
    /// Emitting the frame that reveals `word` of `segment`.
    PerSegment { segment: usize, word: usize },
    Done,
}

/// Frame generator over a segment list.
///
/// Walks `Idle -> PerSegment(word) -> Idle -> ... -> Done`, yielding one [`Frame`] per revealed
/// word. Only the current segment's words are visible; every frame is a full relayout.
pub struct FrameComposer<'a> {
    segments: &'a [Segment],
    audio_duration: f64,
    constraints: &'a LayoutConstraints,
    metrics: &'a mut dyn FontMetrics,
    state: ComposeState,
}

impl<'a> FrameComposer<'a> {
    /// Start composing `segments`.
    pub fn new(
        segments: &'a [Segment],
        audio_duration: f64,
        constraints: &'a LayoutConstraints,
        metrics: &'a mut dyn FontMetrics,
    ) -> Self {
        Self {
            segments,
            audio_duration,
            constraints,
            metrics,
            state: ComposeState::Idle { next: 0 },
        }
    }

    fn window_end(&self, segment: usize, word: usize) -> f64 {
        let words = &self.segments[segment].words;
        if let Some(next) = words.get(word + 1) {
            return next.reveal_time;
        }
        self.segments[segment + 1..]
            .iter()
            .find_map(Segment::first_reveal)
            .unwrap_or(self.audio_duration)
    }

    fn compose(&mut self, segment: usize, word: usize) -> Frame {
        let seg = &self.segments[segment];
        let visible: Vec<&str> = seg.words[..=word].iter().map(|w| w.text.as_str()).collect();
        let layout = layout_words(&visible, self.constraints, &mut *self.metrics);

        let start_time = seg.words[word].reveal_time;
        let mut end_time = self.window_end(segment, word);
        if end_time - start_time <= 0.0 {
            end_time = start_time + MIN_FRAME_DURATION;
        }

        tracing::debug!(
            segment,
            word,
            font_size = layout.font_size,
            lines = layout.lines.len(),
            start_time,
            end_time,
            "composed frame"
        );

        Frame {
            positioned_words: layout.words,
            font_size: layout.font_size,
            start_time,
            end_time,
        }
    }
}

impl Iterator for FrameComposer<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            match self.state {
                ComposeState::Idle { next } => {
                    self.state = match self.segments.get(next) {
                        None => ComposeState::Done,
                        Some(seg) if seg.words.is_empty() => ComposeState::Idle { next: next + 1 },
                        Some(_) => ComposeState::PerSegment {
                            segment: next,
                            word: 0,
                        },
                    };
                }
                ComposeState::PerSegment { segment, word } => {
                    let frame = self.compose(segment, word);
                    self.state = if word + 1 < self.segments[segment].words.len() {
                        ComposeState::PerSegment {
                            segment,
                            word: word + 1,
                        }
                    } else {
                        ComposeState::Idle { next: segment + 1 }
                    };
                    return Some(frame);
                }
                ComposeState::Done => return None,
            }
        }
    }
}

/// Build every lyric frame, in order.
pub fn build_frames(
    segments: &[Segment],
    audio_duration: f64,
    constraints: &LayoutConstraints,
    metrics: &mut dyn FontMetrics,
) -> Vec<Frame> {
    FrameComposer::new(segments, audio_duration, constraints, metrics).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compose.rs"]
mod tests;
