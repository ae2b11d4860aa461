//! Constant colour fill of a macro tile.
//!
//! The colour is converted to the surface format once. The first row of every raster tile
//! is then written pixel by pixel, and the remaining rows are copied from it in runs as
//! long as the tiling mode keeps bytes adjacent.

use crate::address::{compute_surface_address, compute_surface_location, SurfaceCoord};
use crate::attachment::{Attachment, MacroTileCoord};
use crate::config::{WorkerContext, MACRO_TILE_X_DIM, MACRO_TILE_Y_DIM, TILE_X_DIM, TILE_Y_DIM};
use crate::error::{AddressError, TableFamily, TileTransferError};
use crate::load_tile::clamp_render_target;
use crate::surface::SurfaceState;
use crate::tables::{clear_tables, ClearTables};
use crate::tiling::TileMode;
use log::{error, warn};
use raster_tile_formats::format::Format;
use raster_tile_formats::pixel::{PixelCodec, MAX_BYTES_PER_PIXEL};

/// Fills one macro tile of a surface with a constant colour.
pub trait ClearRasterTiles: Send + Sync {
    /// Writes `color` to every pixel and sample of the macro tile at `coord` of `dst` that
    /// lies inside the current mip level.
    fn clear(
        &self,
        ctx: &WorkerContext,
        dst: &SurfaceState,
        coord: MacroTileCoord,
        color: &[f32; 4],
    ) -> Result<(), TileTransferError>;
}

/// Clears macro tiles of one format and tiling mode.
#[derive(Debug, Clone, Copy)]
pub struct MacroTileClearer {
    codec: &'static PixelCodec,
    tile_mode: TileMode,
}

impl MacroTileClearer {
    /// Creates a clearer for `format` surfaces of `tile_mode`.
    ///
    /// # Errors
    ///
    /// If the format has no per-pixel conversion.
    pub fn new(format: Format, tile_mode: TileMode) -> Result<Self, TileTransferError> {
        Ok(Self {
            codec: PixelCodec::for_format(format)?,
            tile_mode,
        })
    }

    /// Format of the surfaces this clearer writes.
    pub fn format(&self) -> Format {
        self.codec.format()
    }

    /// Tiling mode of the surfaces this clearer writes.
    pub fn tile_mode(&self) -> TileMode {
        self.tile_mode
    }

    /// Pixels from `coord` on, up to `remaining`, that stay adjacent in memory.
    fn run_length(
        &self,
        dst: &SurfaceState,
        coord: &SurfaceCoord,
        remaining: u32,
    ) -> Result<u32, AddressError> {
        if dst.interleaved_samples {
            return Ok(1);
        }

        let bpp = self.codec.bytes_per_pixel();
        let contiguous = dst.tile_mode.contiguous_bytes(bpp);
        if contiguous == usize::MAX {
            return Ok(remaining);
        }

        let location = compute_surface_location(coord, dst)?;
        let left = contiguous - (location.x_bytes % contiguous as u64) as usize;
        Ok(((left / bpp) as u32).clamp(1, remaining))
    }
}

impl ClearRasterTiles for MacroTileClearer {
    fn clear(
        &self,
        _ctx: &WorkerContext,
        dst: &SurfaceState,
        coord: MacroTileCoord,
        color: &[f32; 4],
    ) -> Result<(), TileTransferError> {
        let bpp = self.codec.bytes_per_pixel();
        let mut value = [0u8; MAX_BYTES_PER_PIXEL];
        self.codec.encode(&mut value, color);
        let value = &value[..bpp];

        let array_index = dst.array_index + clamp_render_target(coord.array_index, dst);
        let (width, height) = (dst.lod_width(), dst.lod_height());
        let at = |x, y, sample| SurfaceCoord {
            x,
            y,
            z: array_index,
            array_index,
            sample,
            lod: dst.lod,
        };

        for sample in 0..dst.num_samples {
            for y0 in (coord.y..coord.y + MACRO_TILE_Y_DIM).step_by(TILE_Y_DIM as usize) {
                for x0 in (coord.x..coord.x + MACRO_TILE_X_DIM).step_by(TILE_X_DIM as usize) {
                    if x0 >= width || y0 >= height {
                        continue;
                    }
                    let tile_width = TILE_X_DIM.min(width - x0);
                    let tile_height = TILE_Y_DIM.min(height - y0);

                    for x in x0..x0 + tile_width {
                        let ptr = compute_surface_address(&at(x, y0, sample), dst, bpp)?;
                        // SAFETY: `compute_surface_address` checked the span.
                        unsafe { core::ptr::copy_nonoverlapping(value.as_ptr(), ptr, bpp) };
                    }

                    for y in y0 + 1..y0 + tile_height {
                        let mut x = x0;
                        while x < x0 + tile_width {
                            let target = at(x, y, sample);
                            let run = self.run_length(dst, &target, x0 + tile_width - x)?;
                            let len = run as usize * bpp;
                            let src = compute_surface_address(&at(x, y0, sample), dst, len)?;
                            let dst_ptr = compute_surface_address(&target, dst, len)?;
                            // SAFETY: both spans were checked and lie on different rows.
                            unsafe { core::ptr::copy_nonoverlapping(src, dst_ptr, len) };
                            x += run;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Fills the macro tile at `coord` of `dst` with `color`.
///
/// `color` is RGBA for colour attachments and `[depth, _, _, _]` for depth. Integer formats
/// take the bit pattern of each float slot, so a stencil value `s` is passed as
/// `f32::from_bits(s)`.
///
/// A surface whose format and tiling mode have no clear entry is logged and left untouched.
/// Null surfaces are skipped.
///
/// # Errors
///
/// - [`TileTransferError::TablesNotInitialized`] before
///   [`init_clear_tables`](crate::init_clear_tables).
/// - [`TileTransferError::Address`] when a pixel lies outside the surface's memory.
pub fn clear_tile(
    ctx: &WorkerContext,
    dst: &SurfaceState,
    attachment: Attachment,
    coord: MacroTileCoord,
    color: &[f32; 4],
) -> Result<(), TileTransferError> {
    clear_tile_with(clear_tables(), ctx, dst, attachment, coord, color)
}

pub(crate) fn clear_tile_with(
    tables: Option<&ClearTables>,
    ctx: &WorkerContext,
    dst: &SurfaceState,
    attachment: Attachment,
    coord: MacroTileCoord,
    color: &[f32; 4],
) -> Result<(), TileTransferError> {
    if dst.is_null() {
        return Ok(());
    }

    let Some(tables) = tables else {
        error!("clear_tile called before init_clear_tables");
        return Err(TileTransferError::TablesNotInitialized(TableFamily::Clear));
    };
    let kind = attachment.kind();
    let format = kind.table_format(dst.format);
    match tables.table(kind).get(format, dst.tile_mode) {
        Some(clearer) => clearer.clear(ctx, dst, coord, color),
        None => {
            warn!(
                "No clear for {attachment:?} {format} with tile mode {:?}; skipping",
                dst.tile_mode
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use raster_tile_formats::error::ConversionError;

    fn clear(
        dst: &SurfaceState,
        attachment: Attachment,
        coord: MacroTileCoord,
        color: &[f32; 4],
    ) {
        clear_tile_with(
            Some(init_clear_tables()),
            &WorkerContext::default(),
            dst,
            attachment,
            coord,
            color,
        )
        .unwrap();
    }

    #[test]
    fn clears_rgba8_to_red() {
        let mut memory = allocate_align_64(64 * 64 * 4).unwrap();
        let dst = linear_surface(&mut memory, Format::R8G8B8A8_UNORM, 64, 64);
        clear(&dst, Attachment::Color0, MacroTileCoord::new(32, 0, 0), &[1.0, 0.0, 0.0, 1.0]);

        let bytes = memory.as_slice();
        for y in 0..64usize {
            for x in 0..64usize {
                let pixel = &bytes[(y * 64 + x) * 4..][..4];
                let inside = x >= 32 && y < 32;
                let expected = if inside { [0xFF, 0, 0, 0xFF] } else { [0; 4] };
                assert_eq!(pixel, expected, "({x}, {y})");
            }
        }
    }

    /// Clearing must write exactly what storing a hot tile of the same colour writes.
    #[rstest]
    #[case(Format::B8G8R8A8_UNORM_SRGB, TileMode::YMajor)]
    #[case(Format::R16G16B16A16_FLOAT, TileMode::XMajor)]
    #[case(Format::B5G6R5_UNORM, TileMode::SwrZ)]
    #[case(Format::R32G32B32_FLOAT, TileMode::XMajor)]
    #[case(Format::R10G10B10A2_UNORM, TileMode::None)]
    fn clear_matches_store(#[case] format: Format, #[case] tile_mode: TileMode) {
        init_store_tables();
        let color = [0.25, 0.5, 0.75, 1.0];
        let layout = HotTileLayout::new(AttachmentKind::Color, SimdWidth::W16);
        let hot_tile = filled_hot_tile(&layout, 1, |_, _, _| color);

        let pitch = (40 * format.bytes_per_pixel()).next_multiple_of(512) as u32;
        let mut outputs = Vec::new();
        for store in [false, true] {
            let mut memory = allocate_aligned(pitch as usize * 64, PAGE_ALIGNMENT).unwrap();
            let dst = unsafe {
                SurfaceState::from_raw_parts(
                    memory.as_mut_ptr(),
                    memory.len(),
                    SurfaceType::Surface2D,
                    format,
                    40,
                    40,
                    pitch,
                )
            }
            .with_tile_mode(tile_mode);

            for coord in [MacroTileCoord::new(0, 0, 0), MacroTileCoord::new(32, 32, 0)] {
                match store {
                    true => crate::store_tile::store_tile(
                        &WorkerContext::default(),
                        &dst,
                        None,
                        Format::R32G32B32A32_FLOAT,
                        Attachment::Color0,
                        coord,
                        &hot_tile,
                    )
                    .unwrap(),
                    false => clear(&dst, Attachment::Color0, coord, &color),
                }
            }
            outputs.push(memory.as_slice().to_vec());
        }
        assert_implementation_matches_reference(&outputs[1], &outputs[0], "clear", 40 * 40);
    }

    #[test]
    fn clears_every_sample() {
        let mut memory = allocate_align_64(32 * 32 * 4 * 4).unwrap();
        let dst = linear_surface(&mut memory, Format::R32_FLOAT, 32, 32).with_samples(4, false);
        clear(&dst, Attachment::Depth, MacroTileCoord::default(), &[0.5, 0.0, 0.0, 0.0]);
        assert!(memory
            .as_slice()
            .chunks_exact(4)
            .all(|x| x == 0.5f32.to_le_bytes()));
    }

    #[test]
    fn clears_interleaved_stencil() {
        let mut memory = allocate_aligned(64 * 64 * 4, PAGE_ALIGNMENT).unwrap();
        let dst = unsafe {
            SurfaceState::from_raw_parts(
                memory.as_mut_ptr(),
                memory.len(),
                SurfaceType::Surface2D,
                Format::R8_UINT,
                32,
                32,
                128,
            )
        }
        .with_tile_mode(TileMode::WMajor)
        .with_samples(4, true);
        let stencil = [f32::from_bits(0x42), 0.0, 0.0, 0.0];
        clear(&dst, Attachment::Stencil, MacroTileCoord::default(), &stencil);

        // 4 interleaved samples double both dimensions.
        let written = memory.as_slice().iter().filter(|&&x| x == 0x42).count();
        assert_eq!(written, 32 * 32 * 4);
        assert_eq!(memory.as_slice().iter().filter(|&&x| x != 0).count(), written);
    }

    #[test_log::test]
    fn missing_entries_are_skipped() {
        let mut memory = allocate_align_64(4096).unwrap();
        let dst = linear_surface(&mut memory, Format::BC1_UNORM, 32, 32);
        clear(&dst, Attachment::Color0, MacroTileCoord::default(), &[1.0; 4]);
        assert!(memory.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn clearers_are_built_from_format_and_tile_mode() {
        let clearer = MacroTileClearer::new(Format::R32_FLOAT, TileMode::YMajor).unwrap();
        assert_eq!(clearer.format(), Format::R32_FLOAT);
        assert_eq!(clearer.tile_mode(), TileMode::YMajor);

        let untransferable = ConversionError::Untransferable(Format::BC1_UNORM);
        assert_eq!(
            MacroTileClearer::new(Format::BC1_UNORM, TileMode::None).unwrap_err(),
            TileTransferError::Conversion(untransferable)
        );
    }

    #[test_log::test]
    fn uninitialized_tables_are_an_error() {
        let mut memory = allocate_align_64(4096).unwrap();
        let dst = linear_surface(&mut memory, Format::R8_UNORM, 32, 32);
        let ctx = WorkerContext::default();
        let clear_without_tables = |dst: &SurfaceState| {
            let coord = MacroTileCoord::default();
            clear_tile_with(None, &ctx, dst, Attachment::Color0, coord, &[0.0; 4])
        };
        assert_eq!(
            clear_without_tables(&dst),
            Err(TileTransferError::TablesNotInitialized(TableFamily::Clear))
        );
        assert_eq!(clear_without_tables(&SurfaceState::null()), Ok(()));
    }
}
