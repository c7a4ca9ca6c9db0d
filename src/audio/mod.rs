//! Audio track loading and raw PCM export for the encoder.

use std::path::{Path, PathBuf};

use crate::assets::media::{self, AudioPcm, MIX_SAMPLE_RATE, SourceWindow};
use crate::foundation::error::{ReelError, ReelResult};

/// Decoded soundtrack; its duration defines the length of the output video.
#[derive(Clone, Debug)]
pub struct AudioTrack {
    source: PathBuf,
    pcm: AudioPcm,
}

impl AudioTrack {
    /// Decode `path` (optionally restricted to `window`) into stereo PCM.
    #[tracing::instrument(skip(window))]
    pub fn load(path: &Path, window: SourceWindow) -> ReelResult<Self> {
        let pcm = media::decode_audio_f32_stereo(path, MIX_SAMPLE_RATE, window)?;
        Self::from_pcm(path, pcm)
    }

    /// Wrap already-decoded PCM.
    pub fn from_pcm(source: impl Into<PathBuf>, pcm: AudioPcm) -> ReelResult<Self> {
        let source = source.into();
        if pcm.frames() == 0 {
            return Err(ReelError::validation(format!(
                "audio '{}' decoded to zero samples",
                source.display()
            )));
        }
        tracing::debug!(
            source = %source.display(),
            duration_secs = pcm.duration_secs(),
            "audio decoded"
        );
        Ok(Self { source, pcm })
    }

    /// Source path the track was decoded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Total duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.pcm.duration_secs()
    }

    /// Decoded PCM.
    pub fn pcm(&self) -> &AudioPcm {
        &self.pcm
    }
}

/// Write interleaved `f32` PCM samples to a raw little-endian `.f32le` file.
pub(crate) fn write_f32le_file(samples_interleaved: &[f32], out_path: &Path) -> ReelResult<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ReelError::evaluation(format!(
                "failed to create audio output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let mut bytes = Vec::<u8>::with_capacity(samples_interleaved.len() * 4);
    for &sample in samples_interleaved {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(out_path, bytes).map_err(|e| {
        ReelError::evaluation(format!(
            "failed to write audio file '{}': {e}",
            out_path.display()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/track.rs"]
mod tests;
