//! Store conversion to 8 bit per channel BGRA/RGBA surfaces using the best known
//! implementation for the current CPU.

pub mod portable;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod sse2;

use crate::hot_tile::HotTileLayout;

/// Byte order of the destination pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    /// Blue, green, red, alpha.
    Bgra,
    /// Red, green, blue, alpha.
    Rgba,
}

/// Shape of a flat conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatConvertParams {
    /// Byte order of the destination pixel.
    pub order: ChannelOrder,
    /// Colour channels are sRGB encoded.
    pub srgb: bool,
    /// The fourth byte holds alpha; when unset it is written as zero.
    pub alpha: bool,
}

/// Converts a colour SIMD tile to packed 8 bit pixels in quad order.
///
/// # Panics
///
/// If `simd_tile` is shorter than one colour SIMD tile, or `out` cannot hold one packed
/// pixel per lane.
#[inline]
pub(crate) fn flat_convert(
    params: FlatConvertParams,
    layout: &HotTileLayout,
    simd_tile: &[u8],
    out: &mut [u8],
) {
    assert!(simd_tile.len() >= layout.simd_tile_bytes());
    assert!(out.len() >= layout.simd_width.lanes() * 4);

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    unsafe {
        flat_convert_x86(params, layout, simd_tile, out);
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
    {
        portable::flat_convert(params, layout, simd_tile, out);
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[inline(always)]
unsafe fn flat_convert_x86(
    params: FlatConvertParams,
    layout: &HotTileLayout,
    simd_tile: &[u8],
    out: &mut [u8],
) {
    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    use raster_tile_formats::cpu_detect::*;

    #[cfg(not(feature = "no-runtime-cpu-detection"))]
    {
        if has_sse2() {
            sse2::flat_convert(params, layout, simd_tile, out);
            return;
        }
    }

    #[cfg(feature = "no-runtime-cpu-detection")]
    {
        if cfg!(target_feature = "sse2") {
            sse2::flat_convert(params, layout, simd_tile, out);
            return;
        }
    }

    portable::flat_convert(params, layout, simd_tile, out);
}
