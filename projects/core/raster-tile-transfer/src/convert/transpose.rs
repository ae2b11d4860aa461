//! Store conversion for surfaces in the hot tile's own format.

use crate::hot_tile::HotTileLayout;
use crate::store_pixels::z_order;

/// Interleaves the planes of a SIMD tile into packed pixels, unchanged.
pub(crate) fn transpose(layout: &HotTileLayout, simd_tile: &[u8], out: &mut [u8]) {
    let plane_bytes = layout.plane_bytes();
    let component_bytes = layout.component_bytes;
    let pixels = out.chunks_exact_mut(layout.bytes_per_pixel());
    for (&lane, pixel) in z_order(layout.simd_width).iter().zip(pixels) {
        let lane = lane as usize * component_bytes;
        for (component, dst) in pixel.chunks_exact_mut(component_bytes).enumerate() {
            let at = component * plane_bytes + lane;
            dst.copy_from_slice(&simd_tile[at..at + component_bytes]);
        }
    }
}
