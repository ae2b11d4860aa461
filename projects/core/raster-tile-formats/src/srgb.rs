//! sRGB transfer functions.
//!
//! Encode is always evaluated analytically. Decode of 8 bit channels goes through a 256 entry
//! table so that loads are exact and cheap; wider channels use the analytic curve.

use crate::format::SRGB8_TO_LINEAR;

/// Encodes a linear value in `[0, 1]` with the sRGB curve.
#[inline]
pub fn linear_to_srgb(value: f32) -> f32 {
    if value <= 0.003_130_8 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes an sRGB encoded value in `[0, 1]` to linear.
#[inline]
pub fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.040_45 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Decodes an 8 bit sRGB channel to linear.
#[inline(always)]
pub fn srgb8_to_linear(value: u8) -> f32 {
    f32::from_bits(SRGB8_TO_LINEAR[value as usize])
}
