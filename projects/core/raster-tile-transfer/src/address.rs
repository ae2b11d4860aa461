//! Surface coordinate to byte address translation.
//!
//! Address computation happens in two steps. The coordinate is first reduced to an x
//! position in bytes and a row index, folding in the mip chain layout, array slices, depth
//! slices and samples. The pair is then swizzled by the surface's [`TileMode`].
//!
//! Mip levels of 1D surfaces are packed one after another along x. Mip levels of 2D, 3D and
//! cube surfaces use the standard packing: level 1 sits below level 0, level 2 sits to the
//! right of level 1, and every further level sits below the previous one.

use crate::error::AddressError;
use crate::surface::{SurfaceState, SurfaceType};
use crate::tiling::{pdep, tiled_offset, TileMode};

/// Mip levels tracked by [`LodOffsets`].
pub const MAX_LODS: usize = 15;

/// Precomputed x/y origin of every mip level of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LodOffsets {
    /// X origin of each level, in pixels.
    pub x: [u32; MAX_LODS],
    /// Y origin of each level, in rows.
    pub y: [u32; MAX_LODS],
}

/// A pixel in a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceCoord {
    /// Column within the mip level.
    pub x: u32,
    /// Row within the mip level.
    pub y: u32,
    /// Depth slice, 3D surfaces only.
    pub z: u32,
    /// Array slice (or cube face).
    pub array_index: u32,
    /// Sample index.
    pub sample: u32,
    /// Mip level.
    pub lod: u32,
}

impl SurfaceCoord {
    /// Pixel `(x, y)` of slice 0, sample 0, mip level 0.
    pub fn new(x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

/// A coordinate reduced to an untiled byte column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SurfaceLocation {
    pub x_bytes: u64,
    pub row: u64,
}

#[inline(always)]
fn align_up(value: u32, align: u32) -> u32 {
    match align {
        0 | 1 => value,
        _ => value.div_ceil(align) * align,
    }
}

/// Rounds `texels` up to `align` in units of `block` texel blocks, returning texels.
#[inline]
fn align_texels(texels: u32, align: u32, block: u32) -> u32 {
    if block <= 1 {
        return align_up(texels, align);
    }
    let blocks = texels.div_ceil(block);
    align_up(blocks, (align / block).max(1)) * block
}

/// X origin of mip level `lod` of a 1D surface.
pub fn compute_lod_offset_1d(surface: &SurfaceState, lod: u32) -> u32 {
    let block = surface.format.info().block_width;
    let mut offset = 0;
    let mut mip_width = surface.width;
    for _ in 1..=lod {
        offset += align_texels(mip_width, surface.h_align, block);
        mip_width = (mip_width >> 1).max(1);
    }
    offset
}

/// X origin of mip level `lod` of a 2D, 3D or cube surface.
pub fn compute_lod_offset_x(surface: &SurfaceState, lod: u32) -> u32 {
    if lod < 2 {
        return 0;
    }
    let block = surface.format.info().block_width;
    align_texels((surface.width >> 1).max(1), surface.h_align, block)
}

/// Y origin of mip level `lod` of a 2D, 3D or cube surface.
pub fn compute_lod_offset_y(surface: &SurfaceState, lod: u32) -> u32 {
    let block = surface.format.info().block_height;
    let mut offset = 0;
    let mut mip_height = surface.height;
    for level in 1..=lod {
        // Level 2 sits beside level 1, so it adds no height.
        if level != 2 {
            offset += align_texels(mip_height, surface.v_align, block);
        }
        mip_height = (mip_height >> 1).max(1);
    }
    offset
}

/// Origins of every mip level of `surface`.
pub fn compute_lod_offsets(surface: &SurfaceState) -> LodOffsets {
    let mut offsets = LodOffsets::default();
    for lod in 0..MAX_LODS as u32 {
        let (x, y) = match surface.surface_type {
            SurfaceType::Surface1D => (compute_lod_offset_1d(surface, lod), 0),
            SurfaceType::Surface2D | SurfaceType::Surface3D | SurfaceType::Cube => (
                compute_lod_offset_x(surface, lod),
                compute_lod_offset_y(surface, lod),
            ),
            _ => (0, 0),
        };
        offsets.x[lod as usize] = x;
        offsets.y[lod as usize] = y;
    }
    offsets
}

#[inline]
fn lod_origin(surface: &SurfaceState, lod: u32) -> (u32, u32) {
    if let Some(cached) = surface.lod_offsets.as_ref() {
        if let (Some(&x), Some(&y)) = (cached.x.get(lod as usize), cached.y.get(lod as usize)) {
            return (x, y);
        }
    }

    match surface.surface_type {
        SurfaceType::Surface1D => (compute_lod_offset_1d(surface, lod), 0),
        _ => (
            compute_lod_offset_x(surface, lod),
            compute_lod_offset_y(surface, lod),
        ),
    }
}

/// Folds the sample index into the coordinate.
///
/// Interleaved surfaces spread the sample bits into the low x/y bits; other surfaces store
/// each sample as its own array slice. Only tiled surfaces may interleave samples.
#[inline]
fn apply_samples(
    surface: &SurfaceState,
    mut x: u32,
    mut y: u32,
    mut array_index: u32,
    sample: u32,
) -> Result<(u32, u32, u32), AddressError> {
    let samples = surface.num_samples;
    if !matches!(samples, 1 | 2 | 4 | 8 | 16) {
        return Err(AddressError::UnsupportedSampleCount(samples));
    }
    if samples == 1 {
        return Ok((x, y, array_index));
    }

    if surface.interleaved_samples {
        if surface.tile_mode == TileMode::None {
            return Err(AddressError::InterleavedLinearSurface);
        }
        let s0 = sample & 1;
        let s1 = (sample >> 1) & 1;
        let s2 = (sample >> 2) & 1;
        let s3 = (sample >> 3) & 1;
        match samples {
            2 => {
                x = pdep(x, !0x2) | (s0 << 1);
            }
            4 => {
                x = pdep(x, !0x2) | (s0 << 1);
                y = pdep(y, !0x2) | (s1 << 1);
            }
            8 => {
                x = pdep(x, !0x6) | (s0 << 1) | (s2 << 2);
                y = pdep(y, !0x2) | (s1 << 1);
            }
            _ => {
                x = pdep(x, !0x6) | (s0 << 1) | (s2 << 2);
                y = pdep(y, !0x6) | (s1 << 1) | (s3 << 2);
            }
        }
    } else {
        array_index = (array_index << samples.trailing_zeros()) + sample;
    }

    Ok((x, y, array_index))
}

/// Reduces `coord` to an untiled byte column and row of `surface`.
pub(crate) fn compute_surface_location(
    coord: &SurfaceCoord,
    surface: &SurfaceState,
) -> Result<SurfaceLocation, AddressError> {
    let info = surface.format.info();
    let bpp = info.bytes_per_pixel as u64;
    let qpitch = surface.qpitch as u64;

    let location = match surface.surface_type {
        SurfaceType::Null => {
            return Err(AddressError::UnsupportedSurfaceType(surface.surface_type))
        }
        SurfaceType::Buffer | SurfaceType::StructuredBuffer => SurfaceLocation {
            x_bytes: coord.x as u64 * surface.pitch as u64,
            row: 0,
        },
        SurfaceType::Surface1D => {
            let (lod_x, _) = lod_origin(surface, coord.lod);
            let (x, _, array_index) =
                apply_samples(surface, coord.x, 0, coord.array_index, coord.sample)?;
            let texel = array_index as u64 * qpitch + lod_x as u64 + x as u64;
            SurfaceLocation {
                x_bytes: texel / info.block_width as u64 * bpp,
                row: 0,
            }
        }
        SurfaceType::Surface2D | SurfaceType::Cube | SurfaceType::Surface3D => {
            let (lod_x, lod_y) = lod_origin(surface, coord.lod);
            let (x, y, array_index) =
                apply_samples(surface, coord.x, coord.y, coord.array_index, coord.sample)?;

            let texel_x = x as u64 + lod_x as u64 + surface.x_offset as u64;
            let texel_y = lod_y as u64 + y as u64 + surface.y_offset as u64;
            let slice = match surface.surface_type {
                SurfaceType::Surface3D => coord.z as u64,
                _ => array_index as u64,
            };
            SurfaceLocation {
                x_bytes: texel_x / info.block_width as u64 * bpp,
                row: slice * qpitch / info.block_height as u64 + texel_y / info.block_height as u64,
            }
        }
    };
    Ok(location)
}

/// Byte offset of an untiled location within `surface`.
#[inline]
pub(crate) fn location_offset(
    location: SurfaceLocation,
    surface: &SurfaceState,
) -> Result<u64, AddressError> {
    let bpp = surface.format.bytes_per_pixel();
    match surface.tile_mode {
        TileMode::None => Ok(location.row * surface.pitch as u64 + location.x_bytes),
        mode => match mode.traits(bpp) {
            Some(traits) => Ok(tiled_offset(
                &traits,
                location.x_bytes,
                location.row,
                surface.pitch,
            )),
            None => Err(AddressError::UnsupportedTileMode {
                tile_mode: mode,
                bytes_per_pixel: bpp,
            }),
        },
    }
}

/// Byte offset of `coord` from the start of `surface`.
///
/// # Errors
///
/// - [`AddressError::UnsupportedSurfaceType`] for null surfaces.
/// - [`AddressError::UnsupportedSampleCount`] when the surface's sample count is invalid.
/// - [`AddressError::InterleavedLinearSurface`] when a linear surface claims interleaved
///   samples.
/// - [`AddressError::UnsupportedTileMode`] when the tiling mode has no layout for the
///   format's pixel size.
pub fn compute_surface_offset(
    coord: &SurfaceCoord,
    surface: &SurfaceState,
) -> Result<usize, AddressError> {
    let location = compute_surface_location(coord, surface)?;
    let offset = location_offset(location, surface)?;
    usize::try_from(offset).map_err(|_| AddressError::OutOfBounds {
        offset: usize::MAX,
        len: 0,
        size: surface.size_in_bytes(),
    })
}

/// Pointer to the `len` bytes at `coord`.
///
/// This is the only way the engines obtain pointers into a surface; the returned range is
/// always within the surface.
///
/// # Errors
///
/// As [`compute_surface_offset`], plus [`AddressError::OutOfBounds`] when the range does not
/// fit in the surface.
#[inline]
pub fn compute_surface_address(
    coord: &SurfaceCoord,
    surface: &SurfaceState,
    len: usize,
) -> Result<*mut u8, AddressError> {
    let offset = compute_surface_offset(coord, surface)?;
    surface.span(offset, len)
}
