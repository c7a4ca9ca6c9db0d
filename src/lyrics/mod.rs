//! Timestamped lyric input: JSON and LRC sources, validation and time-window slicing.

mod lrc;
mod window;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ReelError, ReelResult};

pub use lrc::parse_lrc;
pub use window::{parse_time, slice_window};

/// One timestamped lyric line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LyricLine {
    /// Start time in seconds.
    pub start: f64,
    /// Line text; may be empty (instrumental breaks).
    #[serde(default)]
    pub text: String,
}

impl LyricLine {
    /// Build a line.
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }
}

/// Parse a JSON array of `{"start": seconds, "text": "..."}` objects.
pub fn lyrics_from_reader<R: std::io::Read>(r: R) -> ReelResult<Vec<LyricLine>> {
    let lines: Vec<LyricLine> = serde_json::from_reader(r)
        .map_err(|e| ReelError::serde(format!("parse lyrics JSON: {e}")))?;
    validate_lines(&lines)?;
    Ok(lines)
}

/// Load lyrics from disk. Files ending in `.lrc` are parsed as LRC, anything else as JSON.
pub fn load_lyrics(path: impl AsRef<Path>) -> ReelResult<Vec<LyricLine>> {
    let path = path.as_ref();
    let is_lrc = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("lrc"));

    if is_lrc {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ReelError::validation(format!("read lyrics file '{}': {e}", path.display()))
        })?;
        let lines = parse_lrc(&text);
        validate_lines(&lines)?;
        return Ok(lines);
    }

    let f = File::open(path).map_err(|e| {
        ReelError::validation(format!("open lyrics file '{}': {e}", path.display()))
    })?;
    lyrics_from_reader(BufReader::new(f))
}

/// Check that starts are finite, non-negative and ascending.
pub fn validate_lines(lines: &[LyricLine]) -> ReelResult<()> {
    let mut prev = 0.0f64;
    for (idx, line) in lines.iter().enumerate() {
        if !line.start.is_finite() || line.start < 0.0 {
            return Err(ReelError::validation(format!(
                "lyric line {idx} has invalid start {}",
                line.start
            )));
        }
        if line.start < prev {
            return Err(ReelError::validation(format!(
                "lyric line {idx} starts at {} before the previous line ({prev})",
                line.start
            )));
        }
        prev = line.start;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/lyrics/source.rs"]
mod tests;
