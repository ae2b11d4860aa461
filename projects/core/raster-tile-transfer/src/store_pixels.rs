//! Scatter of converted SIMD tiles to surface rows.
//!
//! The batched converters emit one SIMD tile at a time as packed pixels in quad ("SWR-Z")
//! order: 2x2 quads left to right, each quad as top left, top right, bottom left, bottom
//! right. A [`StorePixelsPattern`] cuts that block into equally sized chunks and lists, for
//! each destination pointer, where in the SIMD tile it points and which chunks land there
//! back to back.
//!
//! Every destination receives one run of `run_bytes` contiguous bytes, so a pattern can be
//! used on a tiled surface whenever its runs do not cross the mode's contiguous span.

use crate::config::SimdWidth;

/// Lane order of the packed block of a 16 lane SIMD tile.
pub const SIMD16_Z_ORDER: [u8; 16] = [0, 1, 8, 9, 2, 3, 10, 11, 4, 5, 12, 13, 6, 7, 14, 15];
/// Lane order of the packed block of an 8 lane SIMD tile.
pub const SIMD8_Z_ORDER: [u8; 8] = [0, 1, 4, 5, 2, 3, 6, 7];

/// Lane order of the packed block for `simd_width`.
#[inline(always)]
pub fn z_order(simd_width: SimdWidth) -> &'static [u8] {
    match simd_width {
        SimdWidth::W8 => &SIMD8_Z_ORDER,
        SimdWidth::W16 => &SIMD16_Z_ORDER,
    }
}

/// One destination pointer of a [`StorePixelsPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestRun {
    /// Pixel the destination points at, relative to the SIMD tile origin.
    pub origin: (u32, u32),
    /// Source chunks written to the destination, in order.
    pub chunks: &'static [u8],
}

const fn run(x: u32, y: u32, chunks: &'static [u8]) -> DestRun {
    DestRun {
        origin: (x, y),
        chunks,
    }
}

/// Mapping from a packed SIMD tile to its destination runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorePixelsPattern {
    /// Size of a destination pixel in bits.
    pub bits_per_pixel: u32,
    /// Size of one source chunk.
    pub chunk_bytes: usize,
    /// One entry per destination pointer.
    pub dests: &'static [DestRun],
}

impl StorePixelsPattern {
    /// Bytes written to each destination.
    #[inline]
    pub fn run_bytes(&self) -> usize {
        self.dests[0].chunks.len() * self.chunk_bytes
    }

    /// Bytes of the packed source block.
    #[inline]
    pub fn block_bytes(&self) -> usize {
        self.dests.len() * self.run_bytes()
    }

    /// The pattern's runs never straddle a `contiguous_bytes` boundary when they start on a
    /// multiple of their own length. `usize::MAX` stands for a linear surface.
    #[inline]
    pub fn fits_contiguous(&self, contiguous_bytes: usize) -> bool {
        let run = self.run_bytes();
        contiguous_bytes == usize::MAX || (run <= contiguous_bytes && contiguous_bytes % run == 0)
    }
}

// 2 pixel chunks. Rows of 4 pixels: two quads' top (or bottom) halves side by side.
const SIMD16_NARROW: &[DestRun] = &[
    run(0, 0, &[0, 2]),
    run(0, 1, &[1, 3]),
    run(4, 0, &[4, 6]),
    run(4, 1, &[5, 7]),
];

// 2 pixel chunks of 16 bytes; one quad half per destination.
const SIMD16_64: &[DestRun] = &[
    run(0, 0, &[0]),
    run(0, 1, &[1]),
    run(2, 0, &[2]),
    run(2, 1, &[3]),
    run(4, 0, &[4]),
    run(4, 1, &[5]),
    run(6, 0, &[6]),
    run(6, 1, &[7]),
];

// 1 pixel chunks of 16 bytes, column by column.
const SIMD16_128: &[DestRun] = &[
    run(0, 0, &[0]),
    run(0, 1, &[2]),
    run(1, 0, &[1]),
    run(1, 1, &[3]),
    run(2, 0, &[4]),
    run(2, 1, &[6]),
    run(3, 0, &[5]),
    run(3, 1, &[7]),
    run(4, 0, &[8]),
    run(4, 1, &[10]),
    run(5, 0, &[9]),
    run(5, 1, &[11]),
    run(6, 0, &[12]),
    run(6, 1, &[14]),
    run(7, 0, &[13]),
    run(7, 1, &[15]),
];

const SIMD8_NARROW: &[DestRun] = &[run(0, 0, &[0, 2]), run(0, 1, &[1, 3])];

const SIMD8_64: &[DestRun] = &[
    run(0, 0, &[0]),
    run(0, 1, &[1]),
    run(2, 0, &[2]),
    run(2, 1, &[3]),
];

const SIMD8_128: &[DestRun] = &[
    run(0, 0, &[0]),
    run(0, 1, &[2]),
    run(1, 0, &[1]),
    run(1, 1, &[3]),
    run(2, 0, &[4]),
    run(2, 1, &[6]),
    run(3, 0, &[5]),
    run(3, 1, &[7]),
];

const fn pattern(
    bits_per_pixel: u32,
    chunk_pixels: usize,
    dests: &'static [DestRun],
) -> StorePixelsPattern {
    StorePixelsPattern {
        bits_per_pixel,
        chunk_bytes: chunk_pixels * bits_per_pixel as usize / 8,
        dests,
    }
}

/// Patterns for 16 lane SIMD tiles, for 8, 16, 32, 64 and 128 bits per pixel.
pub static SIMD16_PATTERNS: [StorePixelsPattern; 5] = [
    pattern(8, 2, SIMD16_NARROW),
    pattern(16, 2, SIMD16_NARROW),
    pattern(32, 2, SIMD16_NARROW),
    pattern(64, 2, SIMD16_64),
    pattern(128, 1, SIMD16_128),
];

/// Patterns for 8 lane SIMD tiles, for 8, 16, 32, 64 and 128 bits per pixel.
pub static SIMD8_PATTERNS: [StorePixelsPattern; 5] = [
    pattern(8, 2, SIMD8_NARROW),
    pattern(16, 2, SIMD8_NARROW),
    pattern(32, 2, SIMD8_NARROW),
    pattern(64, 2, SIMD8_64),
    pattern(128, 1, SIMD8_128),
];

/// The pattern storing `bytes_per_pixel` byte pixels from `simd_width` SIMD tiles.
pub fn store_pixels_pattern(
    simd_width: SimdWidth,
    bytes_per_pixel: usize,
) -> Option<&'static StorePixelsPattern> {
    let patterns = match simd_width {
        SimdWidth::W8 => &SIMD8_PATTERNS,
        SimdWidth::W16 => &SIMD16_PATTERNS,
    };
    let index = match bytes_per_pixel {
        1 => 0,
        2 => 1,
        4 => 2,
        8 => 3,
        16 => 4,
        _ => return None,
    };
    Some(&patterns[index])
}

/// Copies a packed SIMD tile block to its destinations.
///
/// # Safety
///
/// - `src` must be valid for reads of [`StorePixelsPattern::block_bytes`] bytes
/// - every pointer in `dsts` must be valid for writes of [`StorePixelsPattern::run_bytes`]
///   bytes and must not overlap `src` or another destination
#[inline]
pub unsafe fn store_pixels(pattern: &StorePixelsPattern, src: *const u8, dsts: &[*mut u8]) {
    debug_assert_eq!(dsts.len(), pattern.dests.len());
    let chunk = pattern.chunk_bytes;
    for (dest, &dst) in pattern.dests.iter().zip(dsts) {
        for (x, &index) in dest.chunks.iter().enumerate() {
            core::ptr::copy_nonoverlapping(
                src.add(index as usize * chunk),
                dst.add(x * chunk),
                chunk,
            );
        }
    }
}

/// Gathers destinations back into a packed SIMD tile block. The inverse of [`store_pixels`].
///
/// # Safety
///
/// - every pointer in `srcs` must be valid for reads of [`StorePixelsPattern::run_bytes`]
///   bytes
/// - `dst` must be valid for writes of [`StorePixelsPattern::block_bytes`] bytes and must
///   not overlap any source
#[inline]
pub unsafe fn load_pixels(pattern: &StorePixelsPattern, srcs: &[*const u8], dst: *mut u8) {
    debug_assert_eq!(srcs.len(), pattern.dests.len());
    let chunk = pattern.chunk_bytes;
    for (dest, &src) in pattern.dests.iter().zip(srcs) {
        for (x, &index) in dest.chunks.iter().enumerate() {
            core::ptr::copy_nonoverlapping(
                src.add(x * chunk),
                dst.add(index as usize * chunk),
                chunk,
            );
        }
    }
}
