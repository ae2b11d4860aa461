//! Layout of the rasterizer's float working buffer.
//!
//! A hot tile holds one macro tile. Its raster tiles are stored row by row, column by
//! column, and each raster tile position is repeated once per sample:
//!
//! ```text
//! raster_tile(row, col, sample) = ((row * 4 + col) * samples + sample) * raster_tile_bytes
//! ```
//!
//! A raster tile is a row-major grid of SIMD tiles (8x2 pixels for 16 lanes, 4x2 for 8).
//! Each SIMD tile stores every component as its own plane of one value per lane, with the
//! lane of pixel `(x, y)` being `(y % 2) * simd_tile_width + x % simd_tile_width`.

use crate::attachment::AttachmentKind;
use crate::config::{SimdWidth, RASTER_TILES_X, RASTER_TILES_Y, TILE_X_DIM, TILE_Y_DIM};
use crate::error::TileTransferError;
use raster_tile_formats::format::Format;

/// Pixels in one raster tile.
pub const RASTER_TILE_PIXELS: usize = (TILE_X_DIM * TILE_Y_DIM) as usize;
/// Raster tiles in one macro tile, per sample.
pub const RASTER_TILES_PER_MACRO_TILE: usize = (RASTER_TILES_X * RASTER_TILES_Y) as usize;

/// Shape of the hot tile used for one attachment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotTileLayout {
    /// Format of one hot tile pixel.
    pub format: Format,
    /// Planes per SIMD tile.
    pub components: usize,
    /// Bytes per lane of one plane.
    pub component_bytes: usize,
    /// Lane arrangement.
    pub simd_width: SimdWidth,
}

impl HotTileLayout {
    /// Layout of the hot tile for `kind`.
    pub fn new(kind: AttachmentKind, simd_width: SimdWidth) -> Self {
        let (components, component_bytes) = match kind {
            AttachmentKind::Color => (4, 4),
            AttachmentKind::Depth => (1, 4),
            AttachmentKind::Stencil => (1, 1),
        };
        Self {
            format: kind.hot_tile_format(),
            components,
            component_bytes,
            simd_width,
        }
    }

    /// Bytes per hot tile pixel.
    #[inline(always)]
    pub fn bytes_per_pixel(&self) -> usize {
        self.components * self.component_bytes
    }

    /// Bytes of one plane of a SIMD tile.
    #[inline(always)]
    pub fn plane_bytes(&self) -> usize {
        self.simd_width.lanes() * self.component_bytes
    }

    /// Bytes of one SIMD tile.
    #[inline(always)]
    pub fn simd_tile_bytes(&self) -> usize {
        self.plane_bytes() * self.components
    }

    /// Bytes of one raster tile of one sample.
    #[inline(always)]
    pub fn raster_tile_bytes(&self) -> usize {
        RASTER_TILE_PIXELS * self.bytes_per_pixel()
    }

    /// Bytes a hot tile of `samples` samples occupies.
    #[inline]
    pub fn required_bytes(&self, samples: u32) -> usize {
        RASTER_TILES_PER_MACRO_TILE * samples as usize * self.raster_tile_bytes()
    }

    /// Fails unless `actual` bytes hold a hot tile of `samples` samples.
    pub fn check_len(&self, samples: u32, actual: usize) -> Result<(), TileTransferError> {
        let needed = self.required_bytes(samples);
        match actual < needed {
            true => Err(TileTransferError::HotTileTooSmall { needed, actual }),
            false => Ok(()),
        }
    }

    /// Byte offset of raster tile `(row, col)` of `sample` within the hot tile.
    #[inline]
    pub fn raster_tile_offset(&self, row: u32, col: u32, sample: u32, samples: u32) -> usize {
        let index = (row * RASTER_TILES_X + col) * samples + sample;
        index as usize * self.raster_tile_bytes()
    }

    /// SIMD tile holding pixel `(x, y)` of a raster tile, and the pixel's lane in it.
    #[inline(always)]
    pub fn simd_tile_and_lane(&self, x: u32, y: u32) -> (usize, usize) {
        let width = self.simd_width.tile_width();
        let height = self.simd_width.tile_height();
        let tiles_per_row = TILE_X_DIM / width;
        let tile = (y / height) * tiles_per_row + x / width;
        let lane = (y % height) * width + x % width;
        (tile as usize, lane as usize)
    }

    /// Origin, within the raster tile, of SIMD tile `tile`.
    #[inline(always)]
    pub fn simd_tile_origin(&self, tile: usize) -> (u32, u32) {
        let width = self.simd_width.tile_width();
        let tiles_per_row = (TILE_X_DIM / width) as usize;
        (
            (tile % tiles_per_row) as u32 * width,
            (tile / tiles_per_row) as u32 * self.simd_width.tile_height(),
        )
    }

    /// Reads lane `lane` of the SIMD tile `simd_tile`.
    ///
    /// Slots past [`HotTileLayout::components`] read as zero. `R8_UINT` lanes are widened to
    /// the raw `u32` bit pattern of the float slot.
    #[inline]
    pub fn read_lane(&self, simd_tile: &[u8], lane: usize) -> [f32; 4] {
        let mut value = [0.0; 4];
        let plane_bytes = self.plane_bytes();
        for (component, slot) in value.iter_mut().enumerate().take(self.components) {
            let at = component * plane_bytes + lane * self.component_bytes;
            *slot = match self.component_bytes {
                1 => f32::from_bits(simd_tile[at] as u32),
                _ => f32::from_le_bytes([
                    simd_tile[at],
                    simd_tile[at + 1],
                    simd_tile[at + 2],
                    simd_tile[at + 3],
                ]),
            };
        }
        value
    }

    /// Writes lane `lane` of the SIMD tile `simd_tile`.
    ///
    /// `R8_UINT` lanes keep the low byte of the float slot's bit pattern.
    #[inline]
    pub fn write_lane(&self, simd_tile: &mut [u8], lane: usize, value: &[f32; 4]) {
        let plane_bytes = self.plane_bytes();
        for (component, slot) in value.iter().enumerate().take(self.components) {
            let at = component * plane_bytes + lane * self.component_bytes;
            match self.component_bytes {
                1 => simd_tile[at] = slot.to_bits() as u8,
                _ => simd_tile[at..at + 4].copy_from_slice(&slot.to_le_bytes()),
            }
        }
    }

    /// Reads pixel `(x, y)` of a raster tile.
    #[inline]
    pub fn read_pixel(&self, raster_tile: &[u8], x: u32, y: u32) -> [f32; 4] {
        let (tile, lane) = self.simd_tile_and_lane(x, y);
        let start = tile * self.simd_tile_bytes();
        self.read_lane(&raster_tile[start..start + self.simd_tile_bytes()], lane)
    }

    /// Writes pixel `(x, y)` of a raster tile.
    #[inline]
    pub fn write_pixel(&self, raster_tile: &mut [u8], x: u32, y: u32, value: &[f32; 4]) {
        let (tile, lane) = self.simd_tile_and_lane(x, y);
        let start = tile * self.simd_tile_bytes();
        let end = start + self.simd_tile_bytes();
        self.write_lane(&mut raster_tile[start..end], lane, value);
    }
}
