#![no_main]

// Every non NaN small float must survive a trip through f32 unchanged.

use libfuzzer_sys::{arbitrary, fuzz_target};
use raster_tile_formats::numeric::small_float::{
    f32_to_float10, f32_to_float11, f32_to_half, float10_to_f32, float11_to_f32, half_to_f32,
};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct SmallFloats {
    pub half: u16,
    pub float11: u16,
    pub float10: u16,
}

fuzz_target!(|input: SmallFloats| {
    let half = half_to_f32(input.half);
    if !half.is_nan() {
        assert_eq!(f32_to_half(half), input.half, "half {:#06x}", input.half);
    }

    let bits = u32::from(input.float11) & 0x7FF;
    let value = float11_to_f32(bits);
    if !value.is_nan() {
        assert_eq!(f32_to_float11(value), bits, "float11 {bits:#05x}");
    }

    let bits = u32::from(input.float10) & 0x3FF;
    let value = float10_to_f32(bits);
    if !value.is_nan() {
        assert_eq!(f32_to_float10(value), bits, "float10 {bits:#05x}");
    }
});
