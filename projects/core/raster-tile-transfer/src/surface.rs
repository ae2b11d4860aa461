//! The surface descriptor.
//!
//! A [`SurfaceState`] describes memory owned by someone else: the rasterizer's resource
//! manager allocates it, picks its layout and keeps it alive. The engines only read the
//! descriptor and write within `[base, base + size_in_bytes)`.

use crate::address::{compute_lod_offsets, LodOffsets};
use crate::error::AddressError;
use crate::tiling::TileMode;
use raster_tile_formats::format::Format;

/// Dimensionality of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceType {
    /// No backing memory. Loads and stores are no-ops.
    #[default]
    Null,
    /// Untyped buffer, addressed by element.
    Buffer,
    /// Buffer of fixed size records, addressed by element.
    StructuredBuffer,
    /// One dimensional texture (array).
    Surface1D,
    /// Two dimensional texture (array).
    Surface2D,
    /// Volume texture.
    Surface3D,
    /// Cube map (array); faces are array slices.
    Cube,
}

/// Describes one render target or texture in memory.
///
/// Build with [`SurfaceState::from_raw_parts`] and the `with_*` methods.
#[derive(Debug, Clone)]
pub struct SurfaceState {
    pub(crate) base_address: *mut u8,
    pub(crate) size_in_bytes: usize,
    /// Dimensionality.
    pub surface_type: SurfaceType,
    /// Pixel format.
    pub format: Format,
    /// Width of mip level 0 in pixels.
    pub width: u32,
    /// Height of mip level 0 in pixels.
    pub height: u32,
    /// Depth (3D) or array size.
    pub depth: u32,
    /// Samples per pixel: 1, 2, 4, 8 or 16.
    pub num_samples: u32,
    /// Samples are stored next to each other in x/y rather than as separate array slices.
    pub interleaved_samples: bool,
    /// Bytes per row.
    pub pitch: u32,
    /// Rows between array slices (elements, for 1D surfaces).
    pub qpitch: u32,
    /// Mip level accessed by the engines.
    pub lod: u32,
    /// First array slice accessed by the engines.
    pub array_index: u32,
    /// Physical layout.
    pub tile_mode: TileMode,
    /// Horizontal mip alignment in pixels.
    pub h_align: u32,
    /// Vertical mip alignment in rows.
    pub v_align: u32,
    /// Pixels added to every x coordinate.
    pub x_offset: u32,
    /// Rows added to every y coordinate.
    pub y_offset: u32,
    /// Precomputed mip level origins; see [`SurfaceState::cache_lod_offsets`].
    pub lod_offsets: Option<LodOffsets>,
    /// Surface receiving the averaged samples after every store.
    pub resolve: Option<Box<SurfaceState>>,
}

// The descriptor only carries the pointer; the engines never touch the same bytes from two
// threads because callers hand disjoint macro tiles to different workers.
unsafe impl Send for SurfaceState {}
unsafe impl Sync for SurfaceState {}

impl SurfaceState {
    /// Describes `size_in_bytes` bytes at `base_address` as a single sampled, linear surface
    /// with one slice, mip level 0 and 4x4 mip alignment.
    ///
    /// # Safety
    ///
    /// - `base_address` must be valid for reads and writes of `size_in_bytes` bytes for as long
    ///   as the descriptor (or any clone of it) is used.
    /// - No other code may access the bytes a transfer touches while it runs.
    pub unsafe fn from_raw_parts(
        base_address: *mut u8,
        size_in_bytes: usize,
        surface_type: SurfaceType,
        format: Format,
        width: u32,
        height: u32,
        pitch: u32,
    ) -> Self {
        Self {
            base_address,
            size_in_bytes,
            surface_type,
            format,
            width,
            height,
            depth: 1,
            num_samples: 1,
            interleaved_samples: false,
            pitch,
            qpitch: height,
            lod: 0,
            array_index: 0,
            tile_mode: TileMode::None,
            h_align: 4,
            v_align: 4,
            x_offset: 0,
            y_offset: 0,
            lod_offsets: None,
            resolve: None,
        }
    }

    /// A surface with no memory behind it.
    pub fn null() -> Self {
        // SAFETY: a null surface is never addressed.
        unsafe {
            Self::from_raw_parts(
                core::ptr::null_mut(),
                0,
                SurfaceType::Null,
                Format::R32G32B32A32_FLOAT,
                0,
                0,
                0,
            )
        }
    }

    /// Sets the physical layout.
    pub fn with_tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    /// Sets the sample count and whether samples are interleaved in x/y.
    pub fn with_samples(mut self, num_samples: u32, interleaved: bool) -> Self {
        self.num_samples = num_samples;
        self.interleaved_samples = interleaved;
        self
    }

    /// Sets the depth (3D) or array size, and the rows between slices.
    pub fn with_depth(mut self, depth: u32, qpitch: u32) -> Self {
        self.depth = depth;
        self.qpitch = qpitch;
        self
    }

    /// Sets the mip level and first array slice accessed.
    pub fn with_view(mut self, lod: u32, array_index: u32) -> Self {
        self.lod = lod;
        self.array_index = array_index;
        self
    }

    /// Sets the mip alignment.
    pub fn with_alignment(mut self, h_align: u32, v_align: u32) -> Self {
        self.h_align = h_align;
        self.v_align = v_align;
        self
    }

    /// Sets the offset added to every coordinate.
    pub fn with_offset(mut self, x_offset: u32, y_offset: u32) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    /// Attaches a surface receiving the averaged samples after every store.
    pub fn with_resolve(mut self, resolve: SurfaceState) -> Self {
        self.resolve = Some(Box::new(resolve));
        self
    }

    /// Precomputes the mip level origins so address computation skips the mip chain walk.
    pub fn cache_lod_offsets(&mut self) {
        self.lod_offsets = Some(compute_lod_offsets(self));
    }

    /// First byte of the surface.
    #[inline]
    pub fn base_address(&self) -> *mut u8 {
        self.base_address
    }

    /// Size of the surface in bytes.
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.size_in_bytes
    }

    /// The surface has no backing memory.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.surface_type == SurfaceType::Null
    }

    /// Width of the current mip level, at least 1.
    #[inline]
    pub fn lod_width(&self) -> u32 {
        (self.width >> self.lod.min(31)).max(1)
    }

    /// Height of the current mip level, at least 1.
    #[inline]
    pub fn lod_height(&self) -> u32 {
        (self.height >> self.lod.min(31)).max(1)
    }

    /// Pointer to `len` bytes at `offset`, provided they lie inside the surface.
    #[inline]
    pub(crate) fn span(&self, offset: usize, len: usize) -> Result<*mut u8, AddressError> {
        match offset.checked_add(len) {
            Some(end) if end <= self.size_in_bytes => {
                // SAFETY: in bounds of the allocation promised by `from_raw_parts`.
                Ok(unsafe { self.base_address.add(offset) })
            }
            _ => Err(AddressError::OutOfBounds {
                offset,
                len,
                size: self.size_in_bytes,
            }),
        }
    }
}
