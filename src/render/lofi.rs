use image::imageops::{self, FilterType};

use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;

/// Pixelate `frame` in place: area-downsample by `factor`, then scale back with nearest-neighbor.
///
/// A factor of 0 or 1 leaves the frame untouched.
pub fn apply_lofi(frame: &mut FrameRGBA, factor: u32) -> ReelResult<()> {
    if factor <= 1 {
        return Ok(());
    }

    let (w, h) = (frame.width, frame.height);
    let small_w = (w / factor).max(1);
    let small_h = (h / factor).max(1);

    let data = std::mem::take(&mut frame.data);
    let img = image::RgbaImage::from_raw(w, h, data)
        .ok_or_else(|| ReelError::validation("frame data does not match width*height*4"))?;
    let small = imageops::resize(&img, small_w, small_h, FilterType::Triangle);
    let big = imageops::resize(&small, w, h, FilterType::Nearest);
    frame.data = big.into_raw();
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/lofi.rs"]
mod tests;
