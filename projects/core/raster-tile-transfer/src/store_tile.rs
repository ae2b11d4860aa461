//! Hot tile to surface transfer, with optional multisample resolve.
//!
//! Each raster tile is stored one of two ways:
//!
//! - Fast: every SIMD tile is converted in one go by a [`StoreConverter`] and the packed
//!   block is scattered to the surface with a [`StorePixelsPattern`].
//! - Generic: pixel by pixel through the destination format's [`PixelCodec`].
//!
//! Both produce identical bytes. The fast path is used only when the raster tile lies fully
//! inside the mip level and the surface layout lets every destination run land in
//! contiguous memory.

use crate::address::{compute_surface_address, compute_surface_offset, SurfaceCoord};
use crate::attachment::{Attachment, AttachmentKind, MacroTileCoord};
use crate::buckets::{BucketCollector, BucketSpan, STORE_TILE_BUCKETS};
use crate::config::{WorkerContext, RASTER_TILES_X, RASTER_TILES_Y, TILE_X_DIM, TILE_Y_DIM};
use crate::convert::StoreConverter;
use crate::error::{AddressError, TableFamily, TileTransferError};
use crate::hot_tile::HotTileLayout;
use crate::load_tile::clamp_render_target;
use crate::store_pixels::{load_pixels, store_pixels, store_pixels_pattern, StorePixelsPattern};
use crate::surface::SurfaceState;
use crate::tables::{store_tables, StoreTables};
use crate::tiling::TileMode;
use likely_stable::unlikely;
use log::{error, trace};
use raster_tile_formats::format::Format;
use raster_tile_formats::pixel::PixelCodec;

/// Most samples a surface can have.
const MAX_SAMPLES: usize = 16;
/// Largest packed SIMD tile: 16 lanes of 16 bytes.
const MAX_BLOCK_BYTES: usize = 256;
/// Most destination runs of one pattern.
const MAX_DESTS: usize = 16;
/// Tiled surfaces must start each slice on a page for the fast path.
const TILED_BASE_ALIGN_MASK: usize = 0xfff;

/// Writes a hot tile back to one macro tile of a surface.
pub trait StoreRasterTiles: Send + Sync {
    /// Stores `hot_tile` to the macro tile at `coord` of `dst`, then resolves it into
    /// `dst.resolve` if present.
    ///
    /// Pixels outside the current mip level are not written.
    fn store(
        &self,
        ctx: &WorkerContext,
        dst: &SurfaceState,
        coord: MacroTileCoord,
        hot_tile: &[u8],
    ) -> Result<(), TileTransferError>;
}

/// Why a store uses the per-pixel path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenericReason {
    /// The format has no batched converter.
    NoConverter,
    /// [`use_generic_store_tile`](crate::TransferConfig::use_generic_store_tile) is set.
    ForcedByConfig,
    /// Samples are interleaved in x/y, so neighbouring lanes are not neighbouring bytes.
    InterleavedSamples,
    /// The tiled slice does not start on a 4 KiB boundary.
    UnalignedTiledSurface,
    /// No pattern exists for the pixel size.
    NoPattern,
    /// A pattern run would cross the tiling mode's contiguous span.
    RunsNotContiguous,
}

/// Stores a macro tile to surfaces of one format and tiling mode.
#[derive(Debug, Clone, Copy)]
pub struct MacroTileStorer {
    codec: &'static PixelCodec,
    tile_mode: TileMode,
    kind: AttachmentKind,
    converter: Option<StoreConverter>,
}

impl MacroTileStorer {
    /// Creates a storer writing `kind` hot tiles to `format` surfaces of `tile_mode`.
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
            converter: StoreConverter::select(kind, format),
        })
    }

    /// Format of the surfaces this storer writes.
    pub fn format(&self) -> Format {
        self.codec.format()
    }

    /// Tiling mode of the surfaces this storer writes.
    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    /// The batched converter, if the format has one.
    pub fn converter(&self) -> Option<StoreConverter> {
        self.converter
    }

    /// Picks the fast path for `sample` of `dst`, or says why it cannot be used.
    pub(crate) fn fast_path(
        &self,
        ctx: &WorkerContext,
        dst: &SurfaceState,
        array_index: u32,
        sample: u32,
    ) -> Result<(StoreConverter, &'static StorePixelsPattern), GenericReason> {
        let converter = self.converter.ok_or(GenericReason::NoConverter)?;
        if ctx.config.use_generic_store_tile {
            return Err(GenericReason::ForcedByConfig);
        }
        if dst.interleaved_samples {
            return Err(GenericReason::InterleavedSamples);
        }

        let bpp = self.codec.bytes_per_pixel();
        if dst.tile_mode != TileMode::None {
            let origin = SurfaceCoord {
                x: 0,
                y: 0,
                z: array_index,
                array_index,
                sample,
                lod: dst.lod,
            };
            match compute_surface_address(&origin, dst, bpp) {
                Ok(ptr) if ptr as usize & TILED_BASE_ALIGN_MASK == 0 => {}
                _ => return Err(GenericReason::UnalignedTiledSurface),
            }
        }

        let pattern =
            store_pixels_pattern(ctx.config.simd_width, bpp).ok_or(GenericReason::NoPattern)?;
        if !pattern.fits_contiguous(dst.tile_mode.contiguous_bytes(bpp)) {
            return Err(GenericReason::RunsNotContiguous);
        }
        Ok((converter, pattern))
    }

    /// Stores the pixels of one raster tile at `(x0, y0)` that lie inside the mip level.
    #[allow(clippy::too_many_arguments)]
    fn store_raster_tile_generic(
        &self,
        layout: &HotTileLayout,
        dst: &SurfaceState,
        raster_tile: &[u8],
        (x0, y0): (u32, u32),
        (x_range, y_range): (core::ops::Range<u32>, core::ops::Range<u32>),
        array_index: u32,
        sample: u32,
    ) -> Result<(), TileTransferError> {
        let bpp = self.codec.bytes_per_pixel();
        let (width, height) = (dst.lod_width(), dst.lod_height());
        for y in y_range {
            if y0 + y >= height {
                break;
            }
            for x in x_range.clone() {
                if x0 + x >= width {
                    break;
                }
                let pixel = SurfaceCoord {
                    x: x0 + x,
                    y: y0 + y,
                    z: array_index,
                    array_index,
                    sample,
                    lod: dst.lod,
                };
                let ptr = compute_surface_address(&pixel, dst, bpp)?;
                // SAFETY: `compute_surface_address` checked the span.
                let bytes = unsafe { core::slice::from_raw_parts_mut(ptr, bpp) };
                self.codec.encode(bytes, &layout.read_pixel(raster_tile, x, y));
            }
        }
        Ok(())
    }

    /// Converts and scatters one SIMD tile. Returns `false`, having written nothing, when a
    /// destination run turns out not to be contiguous.
    #[allow(clippy::too_many_arguments)]
    fn store_simd_tile_fast(
        &self,
        layout: &HotTileLayout,
        dst: &SurfaceState,
        (converter, pattern): (StoreConverter, &'static StorePixelsPattern),
        simd_tile: &[u8],
        (x, y): (u32, u32),
        array_index: u32,
        sample: u32,
    ) -> Result<bool, TileTransferError> {
        let bpp = self.codec.bytes_per_pixel();
        let run = pattern.run_bytes();
        let run_pixels = (run / bpp) as u32;
        debug_assert_eq!(pattern.bits_per_pixel as usize, bpp * 8);
        debug_assert!(pattern.dests.len() <= MAX_DESTS);

        let mut dsts = [core::ptr::null_mut::<u8>(); MAX_DESTS];
        for (dest, slot) in pattern.dests.iter().zip(dsts.iter_mut()) {
            let first = SurfaceCoord {
                x: x + dest.origin.0,
                y: y + dest.origin.1,
                z: array_index,
                array_index,
                sample,
                lod: dst.lod,
            };
            let last = SurfaceCoord {
                x: first.x + run_pixels - 1,
                ..first
            };
            let start = compute_surface_address(&first, dst, run)?;
            let end = compute_surface_address(&last, dst, bpp)?;
            if unlikely((end as usize).wrapping_sub(start as usize) != run - bpp) {
                return Ok(false);
            }
            *slot = start;
        }
        let dsts = &dsts[..pattern.dests.len()];

        let mut block = [0u8; MAX_BLOCK_BYTES];
        let block = &mut block[..pattern.block_bytes()];
        if converter.reads_destination() {
            let mut srcs = [core::ptr::null::<u8>(); MAX_DESTS];
            for (src, &run) in srcs.iter_mut().zip(dsts) {
                *src = run;
            }
            // SAFETY: every source run was bounds checked above; `block` is a local.
            unsafe { load_pixels(pattern, &srcs[..dsts.len()], block.as_mut_ptr()) };
        }
        converter.convert(self.codec, layout, simd_tile, block);
        // SAFETY: every destination run was bounds checked above, runs of one SIMD tile
        // are disjoint, and `block` is a local.
        unsafe { store_pixels(pattern, block.as_ptr(), dsts) };
        Ok(true)
    }

    /// Codec of the resolve surface, once its layout is known to be addressable.
    fn resolve_codec(
        resolve: &SurfaceState,
        array_index: u32,
    ) -> Result<&'static PixelCodec, TileTransferError> {
        let codec = PixelCodec::for_format(resolve.format)?;
        let origin = SurfaceCoord {
            z: array_index,
            array_index,
            lod: resolve.lod,
            ..SurfaceCoord::default()
        };
        compute_surface_offset(&origin, resolve)?;
        Ok(codec)
    }

    /// Averages the samples of every pixel and writes them to `resolve`.
    ///
    /// Pixels outside either surface's current mip level are skipped.
    fn resolve(
        &self,
        layout: &HotTileLayout,
        dst: &SurfaceState,
        (resolve, codec): (&SurfaceState, &PixelCodec),
        coord: MacroTileCoord,
        hot_tile: &[u8],
    ) -> Result<(), TileTransferError> {
        let bpp = codec.bytes_per_pixel();
        let samples = dst.num_samples;
        let one_over_samples = 1.0 / samples as f32;
        let array_index = resolve.array_index + clamp_render_target(coord.array_index, dst);
        let width = dst.lod_width().min(resolve.lod_width());
        let height = dst.lod_height().min(resolve.lod_height());
        let raster_tile_bytes = layout.raster_tile_bytes();

        for row in 0..RASTER_TILES_Y {
            for col in 0..RASTER_TILES_X {
                let x0 = coord.x + col * TILE_X_DIM;
                let y0 = coord.y + row * TILE_Y_DIM;
                for y in 0..TILE_Y_DIM {
                    for x in 0..TILE_X_DIM {
                        if x0 + x >= width || y0 + y >= height {
                            continue;
                        }

                        let mut sum = [0.0f32; 4];
                        for sample in 0..samples {
                            let start = layout.raster_tile_offset(row, col, sample, samples);
                            let raster_tile = &hot_tile[start..start + raster_tile_bytes];
                            let value = layout.read_pixel(raster_tile, x, y);
                            for (acc, v) in sum.iter_mut().zip(value) {
                                *acc += v;
                            }
                        }

                        let pixel = SurfaceCoord {
                            x: x0 + x,
                            y: y0 + y,
                            z: array_index,
                            array_index,
                            sample: 0,
                            lod: resolve.lod,
                        };
                        let ptr = compute_surface_address(&pixel, resolve, bpp)?;
                        // SAFETY: `compute_surface_address` checked the span.
                        let bytes = unsafe { core::slice::from_raw_parts_mut(ptr, bpp) };
                        codec.encode(bytes, &sum.map(|x| x * one_over_samples));
                    }
                }
            }
        }
        Ok(())
    }
}

impl StoreRasterTiles for MacroTileStorer {
    fn store(
        &self,
        ctx: &WorkerContext,
        dst: &SurfaceState,
        coord: MacroTileCoord,
        hot_tile: &[u8],
    ) -> Result<(), TileTransferError> {
        let layout = HotTileLayout::new(self.kind, ctx.config.simd_width);
        let samples = dst.num_samples;
        if !matches!(samples, 1 | 2 | 4 | 8 | 16) {
            return Err(AddressError::UnsupportedSampleCount(samples).into());
        }
        layout.check_len(samples, hot_tile.len())?;

        // Validated before anything is written. Stencil values are not averaged.
        let resolve = match dst.resolve.as_deref() {
            Some(resolve) if self.kind != AttachmentKind::Stencil => {
                let array_index =
                    resolve.array_index + clamp_render_target(coord.array_index, dst);
                Some((resolve, Self::resolve_codec(resolve, array_index)?))
            }
            _ => None,
        };

        let array_index = dst.array_index + clamp_render_target(coord.array_index, dst);
        let mut fast = [None; MAX_SAMPLES];
        for (sample, slot) in fast.iter_mut().enumerate().take(samples as usize) {
            *slot = match self.fast_path(ctx, dst, array_index, sample as u32) {
                Ok(path) => Some(path),
                Err(reason) => {
                    trace!(
                        "Storing {} sample {sample} per pixel: {reason:?}",
                        self.codec.format()
                    );
                    None
                }
            };
        }

        let (width, height) = (dst.lod_width(), dst.lod_height());
        let raster_tile_bytes = layout.raster_tile_bytes();
        let simd_tile_bytes = layout.simd_tile_bytes();
        let (simd_width, simd_height) = (
            layout.simd_width.tile_width(),
            layout.simd_width.tile_height(),
        );

        for row in 0..RASTER_TILES_Y {
            for col in 0..RASTER_TILES_X {
                let x0 = coord.x + col * TILE_X_DIM;
                let y0 = coord.y + row * TILE_Y_DIM;
                if x0 >= width || y0 >= height {
                    continue;
                }
                let inside = x0 + TILE_X_DIM <= width && y0 + TILE_Y_DIM <= height;

                for sample in 0..samples {
                    let start = layout.raster_tile_offset(row, col, sample, samples);
                    let raster_tile = &hot_tile[start..start + raster_tile_bytes];

                    let path = match fast[sample as usize] {
                        Some(path) if inside => path,
                        _ => {
                            self.store_raster_tile_generic(
                                &layout,
                                dst,
                                raster_tile,
                                (x0, y0),
                                (0..TILE_X_DIM, 0..TILE_Y_DIM),
                                array_index,
                                sample,
                            )?;
                            continue;
                        }
                    };

                    let simd_tiles = raster_tile.chunks_exact(simd_tile_bytes);
                    for (tile, simd_tile) in simd_tiles.enumerate() {
                        let (ox, oy) = layout.simd_tile_origin(tile);
                        let stored = self.store_simd_tile_fast(
                            &layout,
                            dst,
                            path,
                            simd_tile,
                            (x0 + ox, y0 + oy),
                            array_index,
                            sample,
                        )?;
                        if !stored {
                            self.store_raster_tile_generic(
                                &layout,
                                dst,
                                raster_tile,
                                (x0, y0),
                                (ox..ox + simd_width, oy..oy + simd_height),
                                array_index,
                                sample,
                            )?;
                        }
                    }
                }
            }
        }

        match resolve {
            Some(resolve) => self.resolve(&layout, dst, resolve, coord, hot_tile),
            None => Ok(()),
        }
    }
}

/// Stores `hot_tile` to the macro tile at `coord` of `dst`.
///
/// `src_format` is the hot tile format the caller holds, and must be the format hot tiles of
/// `attachment` use. When `dst` carries a resolve surface, the averaged samples of colour and
/// depth attachments are written there too. Null surfaces are skipped.
///
/// # Errors
///
/// - [`TileTransferError::TablesNotInitialized`] before
///   [`init_store_tables`](crate::init_store_tables).
/// - [`TileTransferError::Unsupported`] when the surface's format and tiling mode cannot be
///   stored for this attachment.
/// - [`TileTransferError::HotTileFormatMismatch`] and [`TileTransferError::HotTileTooSmall`]
///   for a bad hot tile.
/// - [`TileTransferError::Address`] when a pixel lies outside the surface's memory.
/// - [`TileTransferError::Conversion`] when the resolve surface's format cannot be written.
///
/// A resolve surface that cannot be addressed fails the call before any pixel is written.
pub fn store_tile(
    ctx: &WorkerContext,
    dst: &SurfaceState,
    buckets: Option<&dyn BucketCollector>,
    src_format: Format,
    attachment: Attachment,
    coord: MacroTileCoord,
    hot_tile: &[u8],
) -> Result<(), TileTransferError> {
    store_tile_with(store_tables(), ctx, dst, buckets, src_format, attachment, coord, hot_tile)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn store_tile_with(
    tables: Option<&StoreTables>,
    ctx: &WorkerContext,
    dst: &SurfaceState,
    buckets: Option<&dyn BucketCollector>,
    src_format: Format,
    attachment: Attachment,
    coord: MacroTileCoord,
    hot_tile: &[u8],
) -> Result<(), TileTransferError> {
    if dst.is_null() {
        return Ok(());
    }

    let Some(tables) = tables else {
        error!("store_tile called before init_store_tables");
        return Err(TileTransferError::TablesNotInitialized(TableFamily::Store));
    };
    let kind = attachment.kind();
    let expected = kind.hot_tile_format();
    if src_format != expected {
        return Err(TileTransferError::HotTileFormatMismatch {
            expected,
            actual: src_format,
        });
    }

    let format = kind.table_format(dst.format);
    let Some(storer) = tables.table(kind).get(format, dst.tile_mode) else {
        error!("No {kind:?} store for {format} with tile mode {:?}", dst.tile_mode);
        return Err(TileTransferError::Unsupported {
            format,
            tile_mode: dst.tile_mode,
            attachment: kind,
        });
    };

    let _span =
        buckets.map(|collector| BucketSpan::start(collector, &STORE_TILE_BUCKETS, format));
    storer.store(ctx, dst, coord, hot_tile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    const GENERIC: WorkerContext = WorkerContext {
        worker_id: 0,
        config: TransferConfig {
            use_generic_store_tile: true,
            simd_width: SimdWidth::W16,
        },
    };

    fn gradient(sample: u32, x: u32, y: u32) -> [f32; 4] {
        [
            x as f32 / 31.0,
            y as f32 / 31.0,
            (sample as f32 + 0.5) / 4.0,
            ((x * 7 + y * 3) % 16) as f32 / 15.0,
        ]
    }

    fn try_store(
        ctx: &WorkerContext,
        dst: &SurfaceState,
        attachment: Attachment,
        coord: MacroTileCoord,
        hot_tile: &[u8],
    ) -> Result<(), TileTransferError> {
        store_tile_with(
            Some(init_store_tables()),
            ctx,
            dst,
            None,
            attachment.kind().hot_tile_format(),
            attachment,
            coord,
            hot_tile,
        )
    }

    fn store(
        ctx: &WorkerContext,
        dst: &SurfaceState,
        attachment: Attachment,
        coord: MacroTileCoord,
        hot_tile: &[u8],
    ) {
        try_store(ctx, dst, attachment, coord, hot_tile).unwrap();
    }

    /// Stores the same hot tile through the fast and the per-pixel path and compares bytes.
    fn fast_matches_generic(
        format: Format,
        kind: AttachmentKind,
        tile_mode: TileMode,
        simd_width: SimdWidth,
        samples: u32,
    ) {
        let attachment = match kind {
            AttachmentKind::Color => Attachment::Color0,
            AttachmentKind::Depth => Attachment::Depth,
            AttachmentKind::Stencil => Attachment::Stencil,
        };
        let bpp = format.bytes_per_pixel();
        // Two macro tiles across, so tiled pitches are whole tiles.
        let (width, height) = (64u32, 64u32);
        let pitch = (width as usize * bpp).next_multiple_of(512) as u32;
        let size = pitch as usize * (height as usize * samples as usize).next_multiple_of(64);
        let fast_ctx = WorkerContext::new(
            0,
            TransferConfig {
                use_generic_store_tile: false,
                simd_width,
            },
        );
        let generic_ctx = WorkerContext::new(
            0,
            TransferConfig {
                use_generic_store_tile: true,
                simd_width,
            },
        );

        let layout = HotTileLayout::new(kind, simd_width);
        let hot_tile = filled_hot_tile(&layout, samples, |sample, x, y| match kind {
            AttachmentKind::Stencil => [f32::from_bits((x * 8 + y + sample) & 0xFF), 0.0, 0.0, 0.0],
            _ => gradient(sample, x, y),
        });

        let mut outputs = Vec::new();
        for ctx in [&fast_ctx, &generic_ctx] {
            let mut memory = allocate_aligned(size, PAGE_ALIGNMENT).unwrap();
            // Merging converters must keep these.
            memory.as_mut_slice().fill(0x5A);
            let dst = unsafe {
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
            .with_tile_mode(tile_mode)
            .with_samples(samples, false)
            .with_depth(1, height);

            if ctx.config.use_generic_store_tile {
                assert!(MacroTileStorer::new(format, tile_mode, kind)
                    .unwrap()
                    .fast_path(ctx, &dst, 0, 0)
                    .is_err());
            }
            store(ctx, &dst, attachment, MacroTileCoord::new(32, 0, 0), &hot_tile);
            outputs.push(memory.as_slice().to_vec());
        }

        assert_implementation_matches_reference(
            &outputs[1],
            &outputs[0],
            &format!("fast store of {format} {tile_mode:?} {simd_width:?} x{samples}"),
            (32 * 32 * samples) as usize,
        );
        assert_ne!(outputs[0].iter().filter(|&&x| x != 0x5A).count(), 0);
    }

    #[rstest]
    fn fast_store_matches_per_pixel_store(
        #[values(
            Format::B8G8R8A8_UNORM,
            Format::B8G8R8A8_UNORM_SRGB,
            Format::R8G8B8A8_UNORM,
            Format::R8G8B8A8_UNORM_SRGB,
            Format::B8G8R8X8_UNORM,
            Format::B5G6R5_UNORM,
            Format::R32G32B32A32_FLOAT,
            Format::R16G16B16A16_FLOAT,
            Format::R8_UNORM
        )]
        format: Format,
        #[values(TileMode::None, TileMode::XMajor, TileMode::YMajor, TileMode::SwrZ)]
        tile_mode: TileMode,
        #[values(SimdWidth::W8, SimdWidth::W16)] simd_width: SimdWidth,
    ) {
        fast_matches_generic(format, AttachmentKind::Color, tile_mode, simd_width, 1);
    }

    #[rstest]
    #[case(Format::R32_FLOAT, TileMode::YMajor)]
    #[case(Format::R24_UNORM_X8_TYPELESS, TileMode::None)]
    #[case(Format::R24_UNORM_X8_TYPELESS, TileMode::XMajor)]
    #[case(Format::R16_UNORM, TileMode::SwrZ)]
    #[case(Format::R32_FLOAT_X8X24_TYPELESS, TileMode::None)]
    fn fast_depth_store_matches_per_pixel_store(
        #[case] format: Format,
        #[case] tile_mode: TileMode,
    ) {
        fast_matches_generic(format, AttachmentKind::Depth, tile_mode, SimdWidth::W16, 1);
    }

    #[test]
    fn fast_multisample_store_matches_per_pixel_store() {
        fast_matches_generic(
            Format::B8G8R8A8_UNORM,
            AttachmentKind::Color,
            TileMode::None,
            SimdWidth::W16,
            4,
        );
        fast_matches_generic(
            Format::R8_UINT,
            AttachmentKind::Stencil,
            TileMode::None,
            SimdWidth::W8,
            2,
        );
    }

    #[rstest]
    #[case(Format::R10G10B10A2_UNORM, GenericReason::NoConverter)]
    #[case(Format::R32G32B32_FLOAT, GenericReason::NoConverter)]
    fn formats_without_converters_store_per_pixel(
        #[case] format: Format,
        #[case] reason: GenericReason,
    ) {
        let mut memory = allocate_align_64(64 * 64 * 16).unwrap();
        let dst = linear_surface(&mut memory, format, 64, 64);
        let storer = MacroTileStorer::new(format, TileMode::None, AttachmentKind::Color).unwrap();
        assert_eq!(
            storer.fast_path(&WorkerContext::default(), &dst, 0, 0).map(|_| ()),
            Err(reason)
        );
    }

    #[test_log::test]
    fn fast_path_blockers() {
        let mut memory = allocate_aligned(2 * 4096 * 64, PAGE_ALIGNMENT).unwrap();
        let format = Format::B8G8R8A8_UNORM;
        let storer = MacroTileStorer::new(format, TileMode::YMajor, AttachmentKind::Color).unwrap();
        let ctx = WorkerContext::default();
        let base = linear_surface(&mut memory, format, 128, 128).with_tile_mode(TileMode::YMajor);

        assert!(storer.fast_path(&ctx, &base, 0, 0).is_ok());
        assert_eq!(
            storer.fast_path(&GENERIC, &base, 0, 0).map(|_| ()),
            Err(GenericReason::ForcedByConfig)
        );
        assert_eq!(
            storer
                .fast_path(&ctx, &base.clone().with_samples(4, true), 0, 0)
                .map(|_| ()),
            Err(GenericReason::InterleavedSamples)
        );

        // Slice 1 starts 40 rows down: inside a Y-major tile, not on a page.
        let unaligned = base.clone().with_depth(2, 40);
        assert_eq!(
            storer.fast_path(&ctx, &unaligned, 1, 0).map(|_| ()),
            Err(GenericReason::UnalignedTiledSurface)
        );
        // Linear surfaces never need alignment.
        let linear = unaligned.with_tile_mode(TileMode::None);
        assert!(storer.fast_path(&ctx, &linear, 1, 0).is_ok());
    }

    #[test]
    fn unaligned_tiled_surfaces_still_store_correctly() {
        let format = Format::R8G8B8A8_UNORM;
        let layout = HotTileLayout::new(AttachmentKind::Color, SimdWidth::W16);
        let hot_tile = filled_hot_tile(&layout, 1, |s, x, y| gradient(s, x, y));

        let mut memory = allocate_aligned(8 * 4096 + 64, PAGE_ALIGNMENT).unwrap();
        let mut outputs = Vec::new();
        for ctx in [WorkerContext::default(), GENERIC] {
            memory.as_mut_slice().fill(0);
            // SAFETY: 64 bytes past a page boundary still leaves 8 pages of room.
            let dst = unsafe {
                SurfaceState::from_raw_parts(
                    memory.as_mut_ptr().add(64),
                    8 * 4096,
                    SurfaceType::Surface2D,
                    format,
                    32,
                    32,
                    512,
                )
            }
            .with_tile_mode(TileMode::XMajor);
            store(&ctx, &dst, Attachment::Color0, MacroTileCoord::default(), &hot_tile);
            outputs.push(memory.as_slice().to_vec());
        }
        assert_eq!(outputs[0], outputs[1]);
    }

    #[test]
    fn pixels_outside_the_mip_level_are_not_written() {
        init_store_tables();
        let format = Format::B8G8R8A8_UNORM;
        // 20x12 pixels in a 32x16 allocation; the rest is sentinel.
        let mut memory = allocate_align_64(32 * 16 * 4).unwrap();
        memory.as_mut_slice().fill(0xEE);
        let dst = unsafe {
            SurfaceState::from_raw_parts(
                memory.as_mut_ptr(),
                memory.len(),
                SurfaceType::Surface2D,
                format,
                20,
                12,
                32 * 4,
            )
        };
        let layout = HotTileLayout::new(AttachmentKind::Color, SimdWidth::W16);
        let hot_tile = filled_hot_tile(&layout, 1, |_, _, _| [0.0, 0.0, 0.0, 0.0]);
        let ctx = WorkerContext::default();
        store(&ctx, &dst, Attachment::Color2, MacroTileCoord::default(), &hot_tile);

        let bytes = memory.as_slice();
        for y in 0..16usize {
            for x in 0..32usize {
                let pixel = &bytes[(y * 32 + x) * 4..][..4];
                let inside = x < 20 && y < 12;
                assert_eq!(pixel, if inside { [0; 4] } else { [0xEE; 4] }, "({x}, {y})");
            }
        }
    }

    /// A 4 sample hot tile whose samples average to `[0.375, 0.625, 0.25, 1.0]`.
    fn multisample_hot_tile() -> Vec<u8> {
        let layout = HotTileLayout::new(AttachmentKind::Color, SimdWidth::W16);
        filled_hot_tile(&layout, 4, |sample, _, _| {
            let v = sample as f32 * 0.25;
            [v, 1.0 - v, 0.25, 1.0]
        })
    }

    #[rstest]
    #[case(Format::R8G8B8A8_UNORM)]
    #[case(Format::B8G8R8A8_UNORM)]
    #[case(Format::R16G16B16A16_FLOAT)]
    fn resolve_averages_samples_into_its_own_format(#[case] resolve_format: Format) {
        let samples = 4;
        let format = Format::R32G32B32A32_FLOAT;
        let bpp = resolve_format.bytes_per_pixel();
        let mut msaa_memory = allocate_align_64(32 * 32 * 16 * samples as usize).unwrap();
        let mut resolve_memory = allocate_align_64(32 * 32 * bpp).unwrap();
        let resolve = linear_surface(&mut resolve_memory, resolve_format, 32, 32);
        let dst = linear_surface(&mut msaa_memory, format, 32, 32)
            .with_samples(samples, false)
            .with_resolve(resolve);

        let ctx = WorkerContext::default();
        let hot_tile = multisample_hot_tile();
        store(&ctx, &dst, Attachment::Color0, MacroTileCoord::default(), &hot_tile);

        let mut expected = vec![0u8; bpp];
        let average = [0.375, 0.625, 0.25, 1.0];
        convert_pixel_from_float(resolve_format, &mut expected, &average).unwrap();
        for pixel in resolve_memory.as_slice().chunks_exact(bpp) {
            assert_eq!(pixel, expected);
        }
        // Sample 3 of pixel (0, 0) sits in slice 3 of the multisampled surface.
        let offset = 3 * 32 * 32 * 16;
        assert_eq!(&msaa_memory.as_slice()[offset..offset + 4], &0.75f32.to_le_bytes());
    }

    #[test]
    fn resolve_is_clipped_to_its_mip_level() {
        let format = Format::B8G8R8A8_UNORM;
        let mut msaa_memory = allocate_align_64(32 * 32 * 16 * 4).unwrap();
        // Level 1 of a 32x32 surface is 16x16, packed below level 0.
        let mut resolve_memory = allocate_align_64(32 * 4 * 48).unwrap();
        resolve_memory.as_mut_slice().fill(0xEE);
        let resolve = linear_surface(&mut resolve_memory, format, 32, 32).with_view(1, 0);
        let dst = linear_surface(&mut msaa_memory, Format::R32G32B32A32_FLOAT, 32, 32)
            .with_samples(4, false)
            .with_resolve(resolve);

        let ctx = WorkerContext::default();
        let hot_tile = multisample_hot_tile();
        store(&ctx, &dst, Attachment::Color0, MacroTileCoord::default(), &hot_tile);

        let mut expected = [0u8; 4];
        convert_pixel_from_float(format, &mut expected, &[0.375, 0.625, 0.25, 1.0]).unwrap();
        let bytes = resolve_memory.as_slice();
        for y in 0..48usize {
            for x in 0..32usize {
                let pixel = &bytes[(y * 32 + x) * 4..][..4];
                let inside = y >= 32 && x < 16;
                assert_eq!(pixel, if inside { expected } else { [0xEE; 4] }, "({x}, {y})");
            }
        }
    }

    #[rstest]
    #[case(
        Format::R32G32B32_FLOAT,
        TileMode::SwrZ,
        false,
        AddressError::UnsupportedTileMode { tile_mode: TileMode::SwrZ, bytes_per_pixel: 12 }
    )]
    #[case(
        Format::R8G8B8A8_UNORM,
        TileMode::None,
        true,
        AddressError::InterleavedLinearSurface
    )]
    fn unaddressable_resolve_surfaces_fail_before_writing(
        #[case] resolve_format: Format,
        #[case] tile_mode: TileMode,
        #[case] interleaved: bool,
        #[case] error: AddressError,
    ) {
        let mut msaa_memory = allocate_align_64(32 * 32 * 16 * 4).unwrap();
        let mut resolve_memory = allocate_aligned(32 * 32 * 16, PAGE_ALIGNMENT).unwrap();
        let resolve = linear_surface(&mut resolve_memory, resolve_format, 32, 32)
            .with_tile_mode(tile_mode)
            .with_samples(4, interleaved);
        let dst = linear_surface(&mut msaa_memory, Format::R32G32B32A32_FLOAT, 32, 32)
            .with_samples(4, false)
            .with_resolve(resolve);

        let ctx = WorkerContext::default();
        let hot_tile = multisample_hot_tile();
        assert_eq!(
            try_store(&ctx, &dst, Attachment::Color0, MacroTileCoord::default(), &hot_tile),
            Err(TileTransferError::Address(error))
        );
        assert!(msaa_memory.as_slice().iter().all(|&x| x == 0));
        assert!(resolve_memory.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn stencil_is_not_resolved() {
        let mut memory = allocate_align_64(32 * 32 * 2).unwrap();
        let mut resolve_memory = allocate_align_64(32 * 32).unwrap();
        let resolve = linear_surface(&mut resolve_memory, Format::R8_UINT, 32, 32);
        let dst = linear_surface(&mut memory, Format::R8_UINT, 32, 32)
            .with_samples(2, false)
            .with_resolve(resolve);

        let layout = HotTileLayout::new(AttachmentKind::Stencil, SimdWidth::W16);
        let hot_tile = filled_hot_tile(&layout, 2, |_, _, _| [f32::from_bits(7), 0.0, 0.0, 0.0]);
        let ctx = WorkerContext::default();
        store(&ctx, &dst, Attachment::Stencil, MacroTileCoord::default(), &hot_tile);

        assert!(memory.as_slice().iter().all(|&x| x == 7));
        assert!(resolve_memory.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn store_then_load_round_trips() {
        init_load_tables();
        let format = Format::R16G16B16A16_FLOAT;
        let mut memory = allocate_aligned(16 * 4096, PAGE_ALIGNMENT).unwrap();
        let dst = linear_surface(&mut memory, format, 64, 64).with_tile_mode(TileMode::YMajor);

        let layout = HotTileLayout::new(AttachmentKind::Color, SimdWidth::W16);
        // Halves hold multiples of 1/64 exactly.
        let hot_tile = filled_hot_tile(&layout, 1, |_, x, y| {
            [x as f32 / 64.0, y as f32 / 64.0, -1.0, 2.0]
        });
        let coord = MacroTileCoord::new(32, 32, 0);
        store(&WorkerContext::default(), &dst, Attachment::Color0, coord, &hot_tile);

        let mut loaded = vec![0u8; hot_tile.len()];
        crate::load_tile::load_tile(
            &WorkerContext::default(),
            &dst,
            None,
            Format::R32G32B32A32_FLOAT,
            Attachment::Color0,
            coord,
            &mut loaded,
        )
        .unwrap();
        assert_eq!(loaded, hot_tile);
    }

    #[test_log::test]
    fn bad_requests_are_rejected() {
        let tables = init_store_tables();
        let ctx = WorkerContext::default();
        let mut memory = allocate_align_64(64 * 64 * 4).unwrap();
        let dst = linear_surface(&mut memory, Format::B8G8R8A8_UNORM, 64, 64);
        let short = vec![0u8; 10];
        let store_with = |tables: Option<&StoreTables>, dst: &SurfaceState, src_format: Format| {
            let coord = MacroTileCoord::default();
            store_tile_with(tables, &ctx, dst, None, src_format, Attachment::Color0, coord, &short)
        };
        let hot_format = Format::R32G32B32A32_FLOAT;

        assert_eq!(
            store_with(Some(tables), &dst, hot_format),
            Err(TileTransferError::HotTileTooSmall {
                needed: 16 * 64 * 16,
                actual: 10
            })
        );
        assert_eq!(
            store_with(None, &dst, hot_format),
            Err(TileTransferError::TablesNotInitialized(TableFamily::Store))
        );
        assert_eq!(
            store_with(Some(tables), &dst, Format::R8_UINT),
            Err(TileTransferError::HotTileFormatMismatch {
                expected: hot_format,
                actual: Format::R8_UINT
            })
        );
        let bc1 = SurfaceState {
            format: Format::BC1_UNORM,
            ..dst.clone()
        };
        assert!(matches!(
            store_with(Some(tables), &bc1, hot_format),
            Err(TileTransferError::Unsupported { .. })
        ));
        assert_eq!(store_with(Some(tables), &SurfaceState::null(), hot_format), Ok(()));
    }
}
