//! Common test imports and utilities for transfer tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Format crate functionality
pub use raster_tile_formats::allocate::{allocate_align_64, allocate_aligned, PAGE_ALIGNMENT};
pub use raster_tile_formats::format::Format;
pub use raster_tile_formats::pixel::{convert_pixel_from_float, convert_pixel_to_float, PixelCodec};

// Core functionality from this crate
pub use crate::address::SurfaceCoord;
pub use crate::attachment::{Attachment, AttachmentKind, MacroTileCoord};
pub use crate::config::{SimdWidth, TransferConfig, WorkerContext};
pub use crate::error::{AddressError, TableFamily, TileTransferError};
pub use crate::hot_tile::HotTileLayout;
pub use crate::surface::{SurfaceState, SurfaceType};
pub use crate::tables::{init_clear_tables, init_load_tables, init_store_tables};
pub use crate::tiling::TileMode;

// Standard library imports commonly used in tests
pub use safe_allocator_api::RawAlloc;
pub use std::{vec, vec::Vec};

use crate::config::TILE_X_DIM;
use crate::config::TILE_Y_DIM;

/// Asserts that an implementation's output matches the reference, naming the implementation
/// on failure.
pub(crate) fn assert_implementation_matches_reference(
    output_expected: &[u8],
    output_test: &[u8],
    impl_name: &str,
    num_pixels: usize,
) {
    assert_eq!(
        output_expected, output_test,
        "{impl_name} output differs from reference for {num_pixels} pixels"
    );
}

/// Builds a SIMD tile of `layout` whose lanes mix edge cases with pseudo random values.
pub(crate) fn sample_simd_tile(layout: &HotTileLayout, seed: u32) -> Vec<u8> {
    const SPECIALS: [f32; 11] = [
        0.0,
        -0.0,
        1.0,
        -1.0,
        2.0,
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        0.5 / 255.0,
        0.003_130_8,
        0.04045,
    ];

    let mut state = seed.wrapping_mul(0x9E37_79B9).wrapping_add(1);
    let mut next = || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        state
    };

    let mut simd_tile = vec![0u8; layout.simd_tile_bytes()];
    for lane in 0..layout.simd_width.lanes() {
        let mut value = [0.0f32; 4];
        for slot in &mut value {
            let r = next();
            *slot = match (layout.component_bytes, r % 4) {
                (1, _) => f32::from_bits(r >> 24),
                (_, 0) => SPECIALS[(r >> 8) as usize % SPECIALS.len()],
                // Right on a rounding tie of an 8 bit channel.
                (_, 1) => ((r >> 8) % 255) as f32 / 255.0 + 0.5 / 255.0,
                _ => (r >> 8) as f32 / (1u32 << 24) as f32 * 1.2 - 0.1,
            };
        }
        layout.write_lane(&mut simd_tile, lane, &value);
    }
    simd_tile
}

/// Describes `memory` as a linear 2D surface with tightly packed rows.
pub(crate) fn linear_surface(
    memory: &mut RawAlloc,
    format: Format,
    width: u32,
    height: u32,
) -> SurfaceState {
    let pitch = width * format.bytes_per_pixel() as u32;
    // SAFETY: the allocation outlives every test using the descriptor.
    unsafe {
        SurfaceState::from_raw_parts(
            memory.as_mut_ptr(),
            memory.len(),
            SurfaceType::Surface2D,
            format,
            width,
            height,
            pitch,
        )
    }
}

/// Reads pixel `(x, y)` of a macro tile from a hot tile.
pub(crate) fn read_hot_pixel(
    layout: &HotTileLayout,
    hot_tile: &[u8],
    samples: u32,
    sample: u32,
    x: u32,
    y: u32,
) -> [f32; 4] {
    let start = layout.raster_tile_offset(y / TILE_Y_DIM, x / TILE_X_DIM, sample, samples);
    let raster_tile = &hot_tile[start..start + layout.raster_tile_bytes()];
    layout.read_pixel(raster_tile, x % TILE_X_DIM, y % TILE_Y_DIM)
}

/// Builds a hot tile of `samples` samples holding `value(sample, x, y)` at every pixel.
pub(crate) fn filled_hot_tile(
    layout: &HotTileLayout,
    samples: u32,
    value: impl Fn(u32, u32, u32) -> [f32; 4],
) -> Vec<u8> {
    let mut hot_tile = vec![0u8; layout.required_bytes(samples)];
    let raster_tile_bytes = layout.raster_tile_bytes();
    for sample in 0..samples {
        for y in 0..TILE_Y_DIM * 4 {
            for x in 0..TILE_X_DIM * 4 {
                let start =
                    layout.raster_tile_offset(y / TILE_Y_DIM, x / TILE_X_DIM, sample, samples);
                let raster_tile = &mut hot_tile[start..start + raster_tile_bytes];
                let (tx, ty) = (x % TILE_X_DIM, y % TILE_Y_DIM);
                layout.write_pixel(raster_tile, tx, ty, &value(sample, x, y));
            }
        }
    }
    hot_tile
}
