use crate::foundation::error::{ReelError, ReelResult};

use super::LyricLine;

/// Parse `"m:ss"`, `"mm:ss.f"` or plain seconds into seconds.
pub fn parse_time(s: &str) -> ReelResult<f64> {
    let s = s.trim();
    let bad = || ReelError::validation(format!("invalid time \"{s}\" (expected mm:ss or seconds)"));

    let secs = match s.split_once(':') {
        Some((m, rest)) => {
            if rest.contains(':') {
                return Err(bad());
            }
            let m: f64 = m.trim().parse().map_err(|_| bad())?;
            let sec: f64 = rest.trim().parse().map_err(|_| bad())?;
            m * 60.0 + sec
        }
        None => s.parse::<f64>().map_err(|_| bad())?,
    };

    if !secs.is_finite() || secs < 0.0 {
        return Err(bad());
    }
    Ok(secs)
}

/// Keep lines with `start <= t <= end`, re-based so `start` becomes 0.
///
/// Shifted times are rounded to centiseconds.
pub fn slice_window(lines: &[LyricLine], start: f64, end: f64) -> ReelResult<Vec<LyricLine>> {
    if !(start.is_finite() && end.is_finite()) || end < start {
        return Err(ReelError::validation(format!(
            "invalid lyric window [{start}, {end}]"
        )));
    }

    let sliced: Vec<LyricLine> = lines
        .iter()
        .filter(|l| l.start >= start && l.start <= end)
        .map(|l| LyricLine::new(((l.start - start) * 100.0).round() / 100.0, l.text.clone()))
        .collect();

    if sliced.is_empty() {
        tracing::warn!(start, end, "no lyric lines inside the requested window");
    }
    Ok(sliced)
}
