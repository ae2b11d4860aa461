//! Lane at a time flat conversion.

use super::{ChannelOrder, FlatConvertParams};
use crate::hot_tile::HotTileLayout;
use crate::store_pixels::z_order;
use raster_tile_formats::numeric::ComponentKind;

/// Converts a colour SIMD tile to packed 8 bit pixels in quad order.
pub fn flat_convert(
    params: FlatConvertParams,
    layout: &HotTileLayout,
    simd_tile: &[u8],
    out: &mut [u8],
) {
    let color = ComponentKind::Unorm {
        bits: 8,
        srgb: params.srgb,
    };
    let alpha = ComponentKind::Unorm {
        bits: 8,
        srgb: false,
    };

    for (&lane, pixel) in z_order(layout.simd_width).iter().zip(out.chunks_exact_mut(4)) {
        let [r, g, b, a] = layout.read_lane(simd_tile, lane as usize);
        let (r, g, b) = (
            color.encode(r) as u8,
            color.encode(g) as u8,
            color.encode(b) as u8,
        );
        let a = match params.alpha {
            true => alpha.encode(a) as u8,
            false => 0,
        };
        let packed = match params.order {
            ChannelOrder::Bgra => [b, g, r, a],
            ChannelOrder::Rgba => [r, g, b, a],
        };
        pixel.copy_from_slice(&packed);
    }
}
