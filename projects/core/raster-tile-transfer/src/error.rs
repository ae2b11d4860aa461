//! Error types for address computation and tile transfers.

use crate::attachment::AttachmentKind;
use crate::surface::SurfaceType;
use crate::tiling::TileMode;
use raster_tile_formats::error::ConversionError;
use raster_tile_formats::format::Format;
use thiserror::Error;

/// An error raised while turning a surface coordinate into an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The surface type has no addressable memory (e.g. a null surface).
    #[error("Surface type {0:?} cannot be addressed.")]
    UnsupportedSurfaceType(SurfaceType),

    /// The sample count is not 1, 2, 4, 8 or 16.
    #[error("Unsupported sample count: {0}")]
    UnsupportedSampleCount(u32),

    /// The tiling mode has no layout for pixels of this size.
    #[error("Tile mode {tile_mode:?} cannot address {bytes_per_pixel} byte pixels.")]
    UnsupportedTileMode {
        /// Tiling mode of the surface.
        tile_mode: TileMode,
        /// Bytes per pixel of the surface's format.
        bytes_per_pixel: usize,
    },

    /// A linear surface claims its samples are interleaved in x/y.
    #[error("Interleaved samples require a tiled surface.")]
    InterleavedLinearSurface,

    /// The addressed bytes lie outside the surface.
    #[error("Address range [{offset}, {offset} + {len}) lies outside the {size} byte surface.")]
    OutOfBounds {
        /// Byte offset of the first addressed byte.
        offset: usize,
        /// Number of bytes addressed.
        len: usize,
        /// Size of the surface in bytes.
        size: usize,
    },
}

/// A family of dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFamily {
    /// Tables used by [`load_tile`](crate::load_tile).
    Load,
    /// Tables used by [`store_tile`](crate::store_tile).
    Store,
    /// Tables used by [`clear_tile`](crate::clear_tile).
    Clear,
}

/// An error raised by the load, store and clear engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileTransferError {
    /// The engine was called before its dispatch tables were built.
    #[error("{0:?} tables were used before initialization.")]
    TablesNotInitialized(TableFamily),

    /// No dispatch entry exists for this format and tiling mode.
    #[error("{attachment:?} {format} with tile mode {tile_mode:?} is not supported.")]
    Unsupported {
        /// Format of the surface.
        format: Format,
        /// Tiling mode of the surface.
        tile_mode: TileMode,
        /// Kind of attachment being transferred.
        attachment: AttachmentKind,
    },

    /// The hot tile format passed by the caller does not match the attachment.
    #[error("Hot tile format mismatch: expected {expected}, got {actual}.")]
    HotTileFormatMismatch {
        /// The format hot tiles of this attachment use.
        expected: Format,
        /// The format passed by the caller.
        actual: Format,
    },

    /// The hot tile buffer is shorter than one macro tile of all samples.
    #[error("Hot tile too small: need {needed} bytes, but only {actual} bytes available.")]
    HotTileTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// Address computation failed.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Pixel conversion failed.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
