//! Batched store conversion through the per-pixel codec.

use crate::hot_tile::HotTileLayout;
use crate::store_pixels::z_order;
use multiversion::multiversion;
use raster_tile_formats::pixel::PixelCodec;

/// Converts every lane of a SIMD tile with `codec`, packing the pixels in quad order.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)]
pub(crate) fn convert_generic(
    codec: &PixelCodec,
    layout: &HotTileLayout,
    simd_tile: &[u8],
    out: &mut [u8],
) {
    let pixels = out.chunks_exact_mut(codec.bytes_per_pixel());
    for (&lane, pixel) in z_order(layout.simd_width).iter().zip(pixels) {
        codec.encode(pixel, &layout.read_lane(simd_tile, lane as usize));
    }
}
