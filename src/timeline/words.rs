use serde::Serialize;

use crate::lyrics::LyricLine;

/// Duration given to a line whose computed span is zero or negative.
pub const FALLBACK_LINE_DURATION: f64 = 0.5;

/// One word and the moment it appears.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordEvent {
    /// Word text.
    pub text: String,
    /// Reveal time in seconds.
    pub reveal_time: f64,
}

/// Word events of one non-empty lyric line.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Segment {
    /// Start of the line in seconds.
    pub start: f64,
    /// End of the line's span: the next line's start, or the audio end for the last line.
    pub end: f64,
    /// Words in reading order with non-decreasing reveal times.
    pub words: Vec<WordEvent>,
}

impl Segment {
    /// Reveal time of the first word.
    pub fn first_reveal(&self) -> Option<f64> {
        self.words.first().map(|w| w.reveal_time)
    }
}

/// Expand lyric lines into per-word reveal events.
///
/// Each line's span runs to the next line's start (empty lines included) or to `audio_duration`
/// for the last line, and is split evenly across its words. Lines without words produce no
/// segment.
pub fn build_segments(lines: &[LyricLine], audio_duration: f64) -> Vec<Segment> {
    let mut out = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let words: Vec<&str> = line.text.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let end = lines.get(i + 1).map_or(audio_duration, |next| next.start);
        let mut duration = end - line.start;
        if duration <= 0.0 {
            duration = FALLBACK_LINE_DURATION;
        }

        let time_per_word = duration / words.len() as f64;
        let events = words
            .iter()
            .enumerate()
            .map(|(j, w)| WordEvent {
                text: (*w).to_owned(),
                reveal_time: line.start + j as f64 * time_per_word,
            })
            .collect();

        out.push(Segment {
            start: line.start,
            end: line.start + duration,
            words: events,
        });
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/words.rs"]
mod tests;
