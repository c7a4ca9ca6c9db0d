//! Encoding sinks.
//!
//! Sinks consume rendered video frames in timeline order.

/// `ffmpeg`-based MP4 sink.
pub mod ffmpeg;
/// Sink trait and the in-memory sink.
pub mod sink;
