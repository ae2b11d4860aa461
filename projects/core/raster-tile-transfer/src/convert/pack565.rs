//! Store conversion to `B5G6R5_UNORM`.

use crate::hot_tile::HotTileLayout;
use crate::store_pixels::z_order;
use multiversion::multiversion;
use raster_tile_formats::numeric::ComponentKind;

const UNORM5: ComponentKind = ComponentKind::Unorm {
    bits: 5,
    srgb: false,
};
const UNORM6: ComponentKind = ComponentKind::Unorm {
    bits: 6,
    srgb: false,
};

/// Packs the lanes of a colour SIMD tile as `b | g << 5 | r << 11`.
#[multiversion(targets(
    // x86-64-v3 without lahfsahf
    "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
    // x86-64-v2 without lahfsahf
    "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
))]
#[inline(never)]
pub(crate) fn pack_565(layout: &HotTileLayout, simd_tile: &[u8], out: &mut [u8]) {
    for (&lane, pixel) in z_order(layout.simd_width).iter().zip(out.chunks_exact_mut(2)) {
        let [r, g, b, _] = layout.read_lane(simd_tile, lane as usize);
        let packed = UNORM5.encode(b) | UNORM6.encode(g) << 5 | UNORM5.encode(r) << 11;
        pixel.copy_from_slice(&(packed as u16).to_le_bytes());
    }
}
