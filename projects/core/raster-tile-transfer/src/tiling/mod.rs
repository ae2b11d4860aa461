//! Tiled surface layouts.
//!
//! A tiled surface is a row-major grid of fixed size tiles; inside a tile the byte offset is
//! built by depositing the low bits of the x byte position and of the row into the bit
//! positions named by the mode's `x_mask` and `y_mask`:
//!
//! ```text
//! offset = ((row >> H) * (pitch >> W) + (x >> W)) << (W + H)
//!        | pdep(x, x_mask) | pdep(row, y_mask)
//! ```
//!
//! where a tile is `1 << W` bytes wide and `1 << H` rows tall.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod bmi2;
pub mod generic;

use derive_enum_all_values::AllValues;

/// Physical layout of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum TileMode {
    /// Linear, row after row.
    #[default]
    None,
    /// 64 byte x 64 row tiles with interleaved x and y bits. Used for stencil.
    WMajor,
    /// 512 byte x 8 row tiles, row-major inside the tile.
    XMajor,
    /// 128 byte x 32 row tiles, built from 16 byte wide columns.
    YMajor,
    /// One raster tile (8 x 8 pixels) per tile, row-major inside the tile.
    SwrZ,
}

/// Number of [`TileMode`] variants.
pub const NUM_TILE_MODES: usize = TileMode::all_values().len();

/// Geometry of one tiling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingTraits {
    /// log2 of the tile width in bytes.
    pub width_shift: u32,
    /// log2 of the tile height in rows.
    pub height_shift: u32,
    /// Offset bits fed by the x byte position.
    pub x_mask: u32,
    /// Offset bits fed by the row.
    pub y_mask: u32,
}

impl TilingTraits {
    /// Size of one tile in bytes.
    #[inline(always)]
    pub fn tile_bytes(&self) -> usize {
        1 << (self.width_shift + self.height_shift)
    }

    /// Bytes along x that stay adjacent in memory.
    #[inline(always)]
    pub fn contiguous_bytes(&self) -> usize {
        1 << (!self.x_mask).trailing_zeros()
    }
}

impl TileMode {
    /// Position of this mode in the dispatch tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Geometry of this mode for pixels of `bytes_per_pixel` bytes.
    ///
    /// [`None`] for linear surfaces, and for [`TileMode::SwrZ`] when the pixel size is not a
    /// power of two.
    pub fn traits(self, bytes_per_pixel: usize) -> Option<TilingTraits> {
        let traits = match self {
            TileMode::None => return None,
            TileMode::WMajor => TilingTraits {
                width_shift: 6,
                height_shift: 6,
                x_mask: 0xe15,
                y_mask: 0x1ea,
            },
            TileMode::XMajor => TilingTraits {
                width_shift: 9,
                height_shift: 3,
                x_mask: 0x1ff,
                y_mask: 0xe00,
            },
            TileMode::YMajor => TilingTraits {
                width_shift: 7,
                height_shift: 5,
                x_mask: 0xe0f,
                y_mask: 0x1f0,
            },
            TileMode::SwrZ => {
                if !bytes_per_pixel.is_power_of_two() || bytes_per_pixel > 16 {
                    return None;
                }
                let width_shift = 3 + bytes_per_pixel.trailing_zeros();
                TilingTraits {
                    width_shift,
                    height_shift: 3,
                    x_mask: (1 << width_shift) - 1,
                    y_mask: ((1 << 3) - 1) << width_shift,
                }
            }
        };
        Some(traits)
    }

    /// The mode can address pixels of `bytes_per_pixel` bytes.
    #[inline]
    pub fn supports(self, bytes_per_pixel: usize) -> bool {
        self == TileMode::None || self.traits(bytes_per_pixel).is_some()
    }

    /// Bytes along x that stay adjacent in memory; unbounded for linear surfaces.
    pub fn contiguous_bytes(self, bytes_per_pixel: usize) -> usize {
        match self.traits(bytes_per_pixel) {
            Some(traits) => traits.contiguous_bytes(),
            None => usize::MAX,
        }
    }
}

/// Byte offset of `(x_bytes, row)` in a surface tiled with `traits`.
#[inline]
pub fn tiled_offset(traits: &TilingTraits, x_bytes: u64, row: u64, pitch: u32) -> u64 {
    let tile_x = x_bytes >> traits.width_shift;
    let tile_y = row >> traits.height_shift;
    let tiles_per_row = (pitch >> traits.width_shift) as u64;
    let tile_base = (tile_y * tiles_per_row + tile_x) << (traits.width_shift + traits.height_shift);

    let inner = pdep(x_bytes as u32, traits.x_mask) | pdep(row as u32, traits.y_mask);
    tile_base | inner as u64
}

/// Scatters the low bits of `value` into the set bits of `mask`, using BMI2 when available.
#[inline]
pub fn pdep(value: u32, mask: u32) -> u32 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(not(feature = "no-runtime-cpu-detection"))]
        if raster_tile_formats::cpu_detect::has_bmi2() {
            return unsafe { bmi2::pdep(value, mask) };
        }

        #[cfg(feature = "no-runtime-cpu-detection")]
        if cfg!(target_feature = "bmi2") {
            return unsafe { bmi2::pdep(value, mask) };
        }
    }

    generic::pdep(value, mask)
}

/// Gathers the bits of `value` selected by `mask`, using BMI2 when available.
#[inline]
pub fn pext(value: u32, mask: u32) -> u32 {
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    {
        #[cfg(not(feature = "no-runtime-cpu-detection"))]
        if raster_tile_formats::cpu_detect::has_bmi2() {
            return unsafe { bmi2::pext(value, mask) };
        }

        #[cfg(feature = "no-runtime-cpu-detection")]
        if cfg!(target_feature = "bmi2") {
            return unsafe { bmi2::pext(value, mask) };
        }
    }

    generic::pext(value, mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(TileMode::WMajor, 1, 64, 64)]
    #[case(TileMode::XMajor, 4, 512, 8)]
    #[case(TileMode::YMajor, 4, 128, 32)]
    #[case(TileMode::SwrZ, 1, 8, 8)]
    #[case(TileMode::SwrZ, 4, 32, 8)]
    #[case(TileMode::SwrZ, 16, 128, 8)]
    fn masks_fill_exactly_one_tile(
        #[case] mode: TileMode,
        #[case] bpp: usize,
        #[case] width: usize,
        #[case] height: usize,
    ) {
        let traits = mode.traits(bpp).unwrap();
        assert_eq!(1 << traits.width_shift, width);
        assert_eq!(1 << traits.height_shift, height);
        assert_eq!(traits.x_mask & traits.y_mask, 0);
        assert_eq!(
            (traits.x_mask | traits.y_mask) as usize,
            traits.tile_bytes() - 1
        );
        assert_eq!(traits.x_mask.count_ones(), traits.width_shift);
        assert_eq!(traits.y_mask.count_ones(), traits.height_shift);
    }

    #[rstest]
    #[case(TileMode::None, 4, usize::MAX)]
    #[case(TileMode::WMajor, 1, 2)]
    #[case(TileMode::XMajor, 4, 512)]
    #[case(TileMode::YMajor, 4, 16)]
    #[case(TileMode::SwrZ, 4, 32)]
    #[case(TileMode::SwrZ, 16, 128)]
    fn contiguous_runs(#[case] mode: TileMode, #[case] bpp: usize, #[case] expected: usize) {
        assert_eq!(mode.contiguous_bytes(bpp), expected);
    }

    #[rstest]
    #[case(3)]
    #[case(6)]
    #[case(12)]
    #[case(32)]
    fn swrz_needs_power_of_two_pixels(#[case] bpp: usize) {
        assert_eq!(TileMode::SwrZ.traits(bpp), None);
        assert!(!TileMode::SwrZ.supports(bpp));
        assert!(TileMode::XMajor.supports(bpp));
    }

    #[test]
    fn tiled_offsets_are_a_bijection_over_one_tile() {
        for mode in [TileMode::WMajor, TileMode::XMajor, TileMode::YMajor, TileMode::SwrZ] {
            let traits = mode.traits(4).unwrap();
            let width = 1u64 << traits.width_shift;
            let height = 1u64 << traits.height_shift;
            let mut seen = vec![false; traits.tile_bytes()];
            for row in 0..height {
                for x in 0..width {
                    let offset = tiled_offset(&traits, x, row, width as u32) as usize;
                    assert!(!seen[offset], "{mode:?} revisits {offset}");
                    seen[offset] = true;
                }
            }
            assert!(seen.iter().all(|&x| x));
        }
    }

    #[test]
    fn ymajor_walks_16_byte_columns_down_the_tile() {
        let traits = TileMode::YMajor.traits(4).unwrap();
        // Bytes 0..16 of row 0, then row 1 follows directly.
        assert_eq!(tiled_offset(&traits, 15, 0, 512), 15);
        assert_eq!(tiled_offset(&traits, 0, 1, 512), 16);
        // The next column starts after all 32 rows of the first.
        assert_eq!(tiled_offset(&traits, 16, 0, 512), 512);
        // Second tile along x, then second tile row with 4 tiles per row.
        assert_eq!(tiled_offset(&traits, 128, 0, 512), 4096);
        assert_eq!(tiled_offset(&traits, 0, 32, 512), 4 * 4096);
    }

    #[test]
    fn xmajor_rows_are_512_bytes() {
        let traits = TileMode::XMajor.traits(4).unwrap();
        assert_eq!(tiled_offset(&traits, 100, 3, 1024), 3 * 512 + 100);
        assert_eq!(tiled_offset(&traits, 512, 0, 1024), 4096);
        assert_eq!(tiled_offset(&traits, 0, 8, 1024), 2 * 4096);
    }

    #[test]
    fn dispatching_pdep_matches_generic() {
        for mask in [0xe15u32, 0x1ea, !2, !6] {
            for value in 0..512 {
                assert_eq!(pdep(value, mask), generic::pdep(value, mask));
                assert_eq!(pext(value, mask), generic::pext(value, mask));
            }
        }
    }
}
