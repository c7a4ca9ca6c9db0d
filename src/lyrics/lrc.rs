use std::sync::LazyLock;

use regex::Regex;

use super::LyricLine;

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d+):(\d{1,2})(?:[.:](\d{1,3}))?\]").expect("valid LRC timestamp regex")
});

/// Parse LRC text into lyric lines sorted by start time.
///
/// Supports `[mm:ss]`, `[mm:ss.xx]` and `[mm:ss.xxx]` tags, several tags on one line, and ignores
/// metadata tags such as `[ar:Artist]` and untimed lines.
pub fn parse_lrc(text: &str) -> Vec<LyricLine> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let mut rest = raw.trim();
        let mut starts = Vec::new();
        while let Some(caps) = TIMESTAMP_RE.captures(rest) {
            let minutes: f64 = caps[1].parse().unwrap_or(0.0);
            let seconds: f64 = caps[2].parse().unwrap_or(0.0);
            let fraction = caps.get(3).map_or(0.0, |m| {
                let digits = m.as_str();
                let value: f64 = digits.parse().unwrap_or(0.0);
                value / 10f64.powi(digits.len() as i32)
            });
            starts.push(minutes * 60.0 + seconds + fraction);
            rest = &rest[caps[0].len()..];
        }

        let text = rest.trim();
        for start in starts {
            out.push(LyricLine::new(start, text));
        }
    }

    out.sort_by(|a, b| a.start.total_cmp(&b.start));
    out
}
