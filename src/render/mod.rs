//! Rasterization of lyric frames and the render-to-sink pipeline.

/// Frame buffers.
pub mod backend;
/// CPU frame renderer.
pub mod cpu;
/// Pixelation effect.
pub mod lofi;
/// Timeline-to-sink driver.
pub mod pipeline;
