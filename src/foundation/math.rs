pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

/// Round-trip-safe key for an `f32` font size, usable in hash maps.
pub(crate) fn f32_key(v: f32) -> u32 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
