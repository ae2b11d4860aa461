//! Surface to hot tile transfer.

use crate::address::{compute_surface_address, SurfaceCoord};
use crate::attachment::{Attachment, AttachmentKind, MacroTileCoord};
use crate::buckets::{BucketCollector, BucketSpan, LOAD_TILE_BUCKETS};
use crate::config::{WorkerContext, RASTER_TILES_X, RASTER_TILES_Y, TILE_X_DIM, TILE_Y_DIM};
use crate::error::{TableFamily, TileTransferError};
use crate::hot_tile::HotTileLayout;
use crate::surface::SurfaceState;
use crate::tables::{load_tables, LoadTables};
use crate::tiling::TileMode;
use log::error;
use raster_tile_formats::format::Format;
use raster_tile_formats::pixel::PixelCodec;

/// Fills a hot tile from one macro tile of a surface.
pub trait LoadRasterTiles: Send + Sync {
    /// Loads the macro tile at `coord` of `src` into `hot_tile`.
    ///
    /// Pixels outside the current mip level are left untouched in the hot tile.
    fn load(
        &self,
        ctx: &WorkerContext,
        src: &SurfaceState,
        coord: MacroTileCoord,
        hot_tile: &mut [u8],
    ) -> Result<(), TileTransferError>;
}

/// Loads a macro tile of one format and tiling mode, pixel by pixel.
#[derive(Debug, Clone, Copy)]
pub struct MacroTileLoader {
    codec: &'static PixelCodec,
    tile_mode: TileMode,
    kind: AttachmentKind,
}

impl MacroTileLoader {
    /// Creates a loader for `format` surfaces of `tile_mode`, feeding `kind` hot tiles.
    ///
    /// # Errors
    ///
    /// If the format has no per-pixel conversion.
    pub fn new(
        format: Format,
        tile_mode: TileMode,
        kind: AttachmentKind,
    ) -> Result<Self, TileTransferError> {
        Ok(Self {
            codec: PixelCodec::for_format(format)?,
            tile_mode,
            kind,
        })
    }

    /// Format of the surfaces this loader reads.
    pub fn format(&self) -> Format {
        self.codec.format()
    }

    /// Tiling mode of the surfaces this loader reads.
    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }
}

impl LoadRasterTiles for MacroTileLoader {
    fn load(
        &self,
        ctx: &WorkerContext,
        src: &SurfaceState,
        coord: MacroTileCoord,
        hot_tile: &mut [u8],
    ) -> Result<(), TileTransferError> {
        let layout = HotTileLayout::new(self.kind, ctx.config.simd_width);
        let samples = src.num_samples;
        layout.check_len(samples, hot_tile.len())?;

        let bpp = self.codec.bytes_per_pixel();
        let array_index = src.array_index + clamp_render_target(coord.array_index, src);
        let (width, height) = (src.lod_width(), src.lod_height());
        let raster_tile_bytes = layout.raster_tile_bytes();

        for row in 0..RASTER_TILES_Y {
            for col in 0..RASTER_TILES_X {
                let x0 = coord.x + col * TILE_X_DIM;
                let y0 = coord.y + row * TILE_Y_DIM;
                if x0 >= width || y0 >= height {
                    continue;
                }

                for sample in 0..samples {
                    let start = layout.raster_tile_offset(row, col, sample, samples);
                    let raster_tile = &mut hot_tile[start..start + raster_tile_bytes];

                    for y in 0..TILE_Y_DIM.min(height - y0) {
                        for x in 0..TILE_X_DIM.min(width - x0) {
                            let pixel = SurfaceCoord {
                                x: x0 + x,
                                y: y0 + y,
                                z: array_index,
                                array_index,
                                sample,
                                lod: src.lod,
                            };
                            let ptr = compute_surface_address(&pixel, src, bpp)?;
                            // SAFETY: `compute_surface_address` checked the span.
                            let bytes = unsafe { core::slice::from_raw_parts(ptr, bpp) };
                            layout.write_pixel(raster_tile, x, y, &self.codec.decode(bytes));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Render target array index to use for `surface`: out of range indices become 0.
#[inline]
pub(crate) fn clamp_render_target(render_target_array_index: u32, surface: &SurfaceState) -> u32 {
    match render_target_array_index >= surface.depth {
        true => 0,
        false => render_target_array_index,
    }
}

/// Loads the macro tile at `coord` of `src` into `hot_tile`.
///
/// `dst_format` is the hot tile format the caller expects, and must be the format hot
/// tiles of `attachment` use. Null surfaces are skipped.
///
/// # Errors
///
/// - [`TileTransferError::TablesNotInitialized`] before
///   [`init_load_tables`](crate::init_load_tables).
/// - [`TileTransferError::Unsupported`] when the surface's format and tiling mode cannot be
///   loaded for this attachment.
/// - [`TileTransferError::HotTileFormatMismatch`] and [`TileTransferError::HotTileTooSmall`]
///   for a bad hot tile.
/// - [`TileTransferError::Address`] when a pixel lies outside the surface's memory.
pub fn load_tile(
    ctx: &WorkerContext,
    src: &SurfaceState,
    buckets: Option<&dyn BucketCollector>,
    dst_format: Format,
    attachment: Attachment,
    coord: MacroTileCoord,
    hot_tile: &mut [u8],
) -> Result<(), TileTransferError> {
    load_tile_with(load_tables(), ctx, src, buckets, dst_format, attachment, coord, hot_tile)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn load_tile_with(
    tables: Option<&LoadTables>,
    ctx: &WorkerContext,
    src: &SurfaceState,
    buckets: Option<&dyn BucketCollector>,
    dst_format: Format,
    attachment: Attachment,
    coord: MacroTileCoord,
    hot_tile: &mut [u8],
) -> Result<(), TileTransferError> {
    if src.is_null() {
        return Ok(());
    }

    let Some(tables) = tables else {
        error!("load_tile called before init_load_tables");
        return Err(TileTransferError::TablesNotInitialized(TableFamily::Load));
    };
    let kind = attachment.kind();
    let expected = kind.hot_tile_format();
    if dst_format != expected {
        return Err(TileTransferError::HotTileFormatMismatch {
            expected,
            actual: dst_format,
        });
    }

    let format = kind.table_format(src.format);
    let Some(loader) = tables.table(kind).get(format, src.tile_mode) else {
        error!("No {kind:?} load for {format} with tile mode {:?}", src.tile_mode);
        return Err(TileTransferError::Unsupported {
            format,
            tile_mode: src.tile_mode,
            attachment: kind,
        });
    };

    let _span =
        buckets.map(|collector| BucketSpan::start(collector, &LOAD_TILE_BUCKETS, format));
    loader.load(ctx, src, coord, hot_tile)
}
