//! Store conversion to `R24_UNORM_X8_TYPELESS` depth.

use crate::hot_tile::HotTileLayout;
use crate::store_pixels::z_order;
use raster_tile_formats::numeric::ComponentKind;

const UNORM24: ComponentKind = ComponentKind::Unorm {
    bits: 24,
    srgb: false,
};

/// Writes the depth lanes of a SIMD tile into the low 24 bits of `out`.
///
/// `out` must already hold the destination pixels; their top byte is kept.
pub(crate) fn merge_r24x8(layout: &HotTileLayout, simd_tile: &[u8], out: &mut [u8]) {
    for (&lane, pixel) in z_order(layout.simd_width).iter().zip(out.chunks_exact_mut(4)) {
        let depth = UNORM24.encode(layout.read_lane(simd_tile, lane as usize)[0]) as u32;
        let existing = u32::from_le_bytes([pixel[0], pixel[1], pixel[2], pixel[3]]);
        let merged = (existing & 0xFF00_0000) | depth;
        pixel.copy_from_slice(&merged.to_le_bytes());
    }
}
