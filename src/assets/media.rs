use std::path::Path;

use crate::foundation::error::{ReelError, ReelResult};

/// Internal audio sample rate used across decode/encode pipeline.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

#[derive(Clone, Debug)]
/// Decoded interleaved floating-point PCM.
pub struct AudioPcm {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Interleaved `f32` PCM samples.
    pub interleaved_f32: Vec<f32>,
}

impl AudioPcm {
    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> u64 {
        if self.channels == 0 {
            return 0;
        }
        (self.interleaved_f32.len() / usize::from(self.channels)) as u64
    }

    /// Duration in seconds derived from the decoded sample count.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / f64::from(self.sample_rate)
    }
}

/// Optional `[start, end]` source window in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SourceWindow {
    /// Seek offset into the source.
    pub start_sec: Option<f64>,
    /// Absolute stop position in the source.
    pub end_sec: Option<f64>,
}

#[cfg(feature = "media-ffmpeg")]
/// Decode audio from a media source to stereo interleaved `f32` PCM.
pub fn decode_audio_f32_stereo(
    path: &Path,
    sample_rate: u32,
    window: SourceWindow,
) -> ReelResult<AudioPcm> {
    if !path.is_file() {
        return Err(ReelError::validation(format!(
            "audio file '{}' does not exist",
            path.display()
        )));
    }

    let mut cmd = std::process::Command::new("ffmpeg");
    cmd.args(["-v", "error"]);
    if let Some(start) = window.start_sec {
        cmd.args(["-ss", &format!("{start:.6}")]);
    }
    if let Some(end) = window.end_sec {
        cmd.args(["-to", &format!("{end:.6}")]);
    }
    let out = cmd
        .arg("-i")
        .arg(path)
        .args([
            "-vn",
            "-f",
            "f32le",
            "-acodec",
            "pcm_f32le",
            "-ac",
            "2",
            "-ar",
            &sample_rate.to_string(),
            "pipe:1",
        ])
        .output()
        .map_err(|e| {
            ReelError::evaluation(format!("failed to run ffmpeg for audio decode: {e}"))
        })?;

    if !out.status.success() {
        return Err(ReelError::evaluation(format!(
            "ffmpeg audio decode failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    if !out.stdout.len().is_multiple_of(4) {
        return Err(ReelError::evaluation(
            "decoded audio byte length is not aligned to f32 samples",
        ));
    }
    let mut pcm = Vec::<f32>::with_capacity(out.stdout.len() / 4);
    for chunk in out.stdout.chunks_exact(4) {
        pcm.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    Ok(AudioPcm {
        sample_rate,
        channels: 2,
        interleaved_f32: pcm,
    })
}

#[cfg(not(feature = "media-ffmpeg"))]
/// Decode audio from a media source to stereo interleaved `f32` PCM.
///
/// Returns an error when `media-ffmpeg` feature is disabled.
pub fn decode_audio_f32_stereo(
    _path: &Path,
    _sample_rate: u32,
    _window: SourceWindow,
) -> ReelResult<AudioPcm> {
    Err(ReelError::evaluation(
        "audio decoding requires the 'media-ffmpeg' feature",
    ))
}

// Decoding shells out to `ffmpeg`; it is exercised by integration tests that skip themselves when
// the tool is unavailable.
#[cfg(test)]
#[path = "../../tests/unit/assets/media.rs"]
mod tests;
