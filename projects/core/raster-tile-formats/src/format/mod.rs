//! Per-format metadata.
//!
//! Every conversion in the workspace is driven by a [`FormatInfo`] row from a single static
//! table rather than by code specialised per format. See [`Format::info`].

mod table;

use crate::error::FormatError;
use derive_enum_all_values::AllValues;
pub use table::{Format, NUM_FORMAT_IDS};
use table::{FORMAT_ROW, FORMAT_TABLE};

pub(crate) use table::SRGB8_TO_LINEAR;

/// The numeric encoding of a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum ComponentType {
    /// Unsigned normalized integer, `[0, 1]`.
    Unorm,
    /// Signed normalized integer, `[-1, 1]`.
    Snorm,
    /// Unsigned integer carried through the float slot as a raw bit pattern.
    Uint,
    /// Signed integer carried through the float slot as a raw bit pattern.
    Sint,
    /// IEEE float (16/11/10/32/64 bit).
    Float,
    /// Unsigned integer converted numerically to and from float.
    Uscaled,
    /// Signed integer converted numerically to and from float.
    Sscaled,
    /// Signed 16.16 fixed point.
    Sfixed,
    /// Padding bits that carry no value.
    Unused,
    /// No component in this position.
    Unknown,
}

/// Layout description of one pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// The format this row describes.
    pub format: Format,
    /// Canonical upper case name, e.g. `"B8G8R8A8_UNORM"`.
    pub name: &'static str,
    /// Type of each component, in memory order.
    pub component_types: [ComponentType; 4],
    /// Default value of each canonical RGBA slot, as raw `f32`/`u32` bits.
    pub defaults: [u32; 4],
    /// Canonical RGBA slot each memory-order component maps to.
    pub swizzle: [u8; 4],
    /// Width in bits of each component, in memory order.
    pub bits_per_component: [u8; 4],
    /// Size of one pixel (or block, for block compressed formats) in bits.
    pub bits_per_pixel: u32,
    /// Size of one pixel (or block) in bytes.
    pub bytes_per_pixel: u32,
    /// Number of declared components.
    pub num_components: u32,
    /// Colour components are sRGB encoded.
    pub is_srgb: bool,
    /// Pixels are stored as compressed blocks.
    pub is_block_compressed: bool,
    /// Chroma is shared between neighbouring pixels.
    pub is_subsampled: bool,
    /// The first component is replicated into green and blue on decode.
    pub is_luminance: bool,
    /// Width of one block in pixels (1 for uncompressed formats).
    pub block_width: u32,
    /// Height of one block in pixels (1 for uncompressed formats).
    pub block_height: u32,
}

impl FormatInfo {
    /// Declared components as `(type, bits, swizzle slot)`, in memory order.
    pub fn components(&self) -> impl Iterator<Item = (ComponentType, u32, usize)> + '_ {
        (0..self.num_components as usize).map(move |x| {
            (
                self.component_types[x],
                self.bits_per_component[x] as u32,
                self.swizzle[x] as usize,
            )
        })
    }

    /// Sum of the declared component widths.
    pub fn declared_bits(&self) -> u32 {
        self.components().map(|(_, bits, _)| bits).sum()
    }

    /// Declared components account for every bit of the pixel.
    pub fn covers_whole_pixel(&self) -> bool {
        self.declared_bits() == self.bits_per_pixel
    }
}

impl Format {
    /// Every known format, in ascending ID order.
    pub const ALL: &'static [Format] = Format::all_values();

    /// Resolves a raw hardware format ID.
    pub fn from_raw(id: u16) -> Result<Format, FormatError> {
        match FORMAT_ROW.get(id as usize) {
            Some(&row) if row != u8::MAX => Ok(FORMAT_TABLE[row as usize].format),
            _ => Err(FormatError::UnknownFormat(id)),
        }
    }

    /// The raw hardware format ID.
    #[inline(always)]
    pub fn id(self) -> u16 {
        self as u16
    }

    /// The trait table row for this format.
    #[inline]
    pub fn info(self) -> &'static FormatInfo {
        &FORMAT_TABLE[self.row()]
    }

    /// Position of this format's row in the trait table, and in [`Format::ALL`].
    #[inline]
    pub fn row(self) -> usize {
        // Every discriminant has a row; the table is built from the enum.
        FORMAT_ROW[self as usize] as usize
    }

    /// Canonical name of the format.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Pixel size in bytes.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.info().bytes_per_pixel as usize
    }

    /// Sum of the declared component widths.
    pub fn declared_bits(self) -> u32 {
        self.info().declared_bits()
    }

    /// Declared components account for every bit of the pixel.
    pub fn covers_whole_pixel(self) -> bool {
        self.info().covers_whole_pixel()
    }

    /// The format can be converted one pixel at a time to and from float.
    ///
    /// This is the case when it is neither block compressed nor subsampled, and every
    /// declared component has a conversion rule.
    pub fn is_transferable(self) -> bool {
        crate::pixel::PixelCodec::for_format(self).is_ok()
    }
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
