//! SSE2 flat conversion: four pixels per register, with scalar sRGB encoding.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use super::{ChannelOrder, FlatConvertParams};
use crate::config::SimdWidth;
use crate::hot_tile::HotTileLayout;
use raster_tile_formats::srgb::linear_to_srgb;

/// Converts a colour SIMD tile to packed 8 bit pixels in quad order, 4 lanes at a time.
///
/// # Safety
///
/// - `simd_tile` must hold one colour SIMD tile of `layout`
/// - `out` must hold 4 bytes per lane
#[target_feature(enable = "sse2")]
pub unsafe fn flat_convert(
    params: FlatConvertParams,
    layout: &HotTileLayout,
    simd_tile: &[u8],
    out: &mut [u8],
) {
    debug_assert!(simd_tile.len() >= layout.simd_tile_bytes());
    debug_assert!(out.len() >= layout.simd_width.lanes() * 4);

    let plane_bytes = layout.plane_bytes();
    let src = simd_tile.as_ptr();

    // One register per 4 lanes: row 0 left, (row 0 right,) row 1 left, (row 1 right).
    let mut rows = [_mm_setzero_si128(); 4];
    for (group, row) in rows
        .iter_mut()
        .enumerate()
        .take(layout.simd_width.lanes() / 4)
    {
        let lane_offset = group * 16;
        let r = encode_unorm8(load(src, lane_offset), params.srgb);
        let g = encode_unorm8(load(src, plane_bytes + lane_offset), params.srgb);
        let b = encode_unorm8(load(src, 2 * plane_bytes + lane_offset), params.srgb);
        let a = match params.alpha {
            true => encode_unorm8(load(src, 3 * plane_bytes + lane_offset), false),
            false => _mm_setzero_si128(),
        };

        let (byte0, byte2) = match params.order {
            ChannelOrder::Bgra => (b, r),
            ChannelOrder::Rgba => (r, b),
        };
        *row = _mm_or_si128(
            _mm_or_si128(byte0, _mm_slli_epi32(g, 8)),
            _mm_or_si128(_mm_slli_epi32(byte2, 16), _mm_slli_epi32(a, 24)),
        );
    }

    // Pair up the two rows of every quad.
    let dst = out.as_mut_ptr() as *mut __m128i;
    match layout.simd_width {
        SimdWidth::W16 => {
            _mm_storeu_si128(dst, _mm_unpacklo_epi64(rows[0], rows[2]));
            _mm_storeu_si128(dst.add(1), _mm_unpackhi_epi64(rows[0], rows[2]));
            _mm_storeu_si128(dst.add(2), _mm_unpacklo_epi64(rows[1], rows[3]));
            _mm_storeu_si128(dst.add(3), _mm_unpackhi_epi64(rows[1], rows[3]));
        }
        SimdWidth::W8 => {
            _mm_storeu_si128(dst, _mm_unpacklo_epi64(rows[0], rows[1]));
            _mm_storeu_si128(dst.add(1), _mm_unpackhi_epi64(rows[0], rows[1]));
        }
    }
}

#[target_feature(enable = "sse2")]
#[inline]
unsafe fn load(src: *const u8, offset: usize) -> __m128 {
    _mm_loadu_ps(src.add(offset) as *const f32)
}

/// Clamps to `[0, 1]` (NaN to 0), optionally applies the sRGB curve, scales to 255 and
/// rounds to nearest even.
#[target_feature(enable = "sse2")]
#[inline]
unsafe fn encode_unorm8(value: __m128, srgb: bool) -> __m128i {
    // maxps returns the second operand for NaN.
    let mut value = _mm_min_ps(_mm_max_ps(value, _mm_setzero_ps()), _mm_set1_ps(1.0));
    if srgb {
        let mut lanes = [0f32; 4];
        _mm_storeu_ps(lanes.as_mut_ptr(), value);
        for lane in lanes.iter_mut() {
            *lane = linear_to_srgb(*lane);
        }
        value = _mm_loadu_ps(lanes.as_ptr());
    }
    _mm_cvtps_epi32(_mm_mul_ps(value, _mm_set1_ps(255.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::AttachmentKind;
    use crate::convert::flat_convert::portable;
    use crate::test_prelude::*;

    #[rstest]
    #[case(ChannelOrder::Bgra, false, true)]
    #[case(ChannelOrder::Bgra, true, true)]
    #[case(ChannelOrder::Rgba, false, true)]
    #[case(ChannelOrder::Rgba, true, false)]
    fn sse2_matches_portable(
        #[case] order: ChannelOrder,
        #[case] srgb: bool,
        #[case] alpha: bool,
        #[values(SimdWidth::W8, SimdWidth::W16)] width: SimdWidth,
    ) {
        if !raster_tile_formats::cpu_detect::has_sse2() {
            return;
        }

        let params = FlatConvertParams { order, srgb, alpha };
        let layout = HotTileLayout::new(AttachmentKind::Color, width);
        for seed in 0..256u32 {
            let simd_tile = sample_simd_tile(&layout, seed);
            let mut expected = vec![0u8; width.lanes() * 4];
            let mut actual = vec![0u8; width.lanes() * 4];
            portable::flat_convert(params, &layout, &simd_tile, &mut expected);
            unsafe { flat_convert(params, &layout, &simd_tile, &mut actual) };
            assert_implementation_matches_reference(
                &expected,
                &actual,
                "sse2::flat_convert",
                width.lanes(),
            );
        }
    }
}
