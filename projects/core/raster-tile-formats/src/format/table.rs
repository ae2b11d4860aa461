//! The per-format trait table.
//!
//! One row per [`Format`], keyed by the format's hardware ID. Rows describe the packed
//! layout only; the conversion rules live in [`crate::numeric`] and [`crate::pixel`].

use super::{ComponentType, ComponentType::*, FormatInfo};
use derive_enum_all_values::AllValues;

const ONE: u32 = 0x3f80_0000; // 1.0f32

const SRGB: u8 = 1 << 0;
const BC: u8 = 1 << 1;
const SUB: u8 = 1 << 2;
const LUM: u8 = 1 << 3;

#[allow(clippy::too_many_arguments)]
const fn row(
    format: Format,
    name: &'static str,
    types: [ComponentType; 4],
    defaults: [u32; 4],
    swizzle: [u8; 4],
    bits: [u8; 4],
    bits_per_pixel: u32,
    num_components: u32,
    flags: u8,
    block: (u32, u32),
) -> FormatInfo {
    FormatInfo {
        format,
        name,
        component_types: types,
        defaults,
        swizzle,
        bits_per_component: bits,
        bits_per_pixel,
        bytes_per_pixel: bits_per_pixel / 8,
        num_components,
        is_srgb: flags & SRGB != 0,
        is_block_compressed: flags & BC != 0,
        is_subsampled: flags & SUB != 0,
        is_luminance: flags & LUM != 0,
        block_width: block.0,
        block_height: block.1,
    }
}

/// Every pixel format known to the transfer layer.
///
/// Discriminants are the hardware format IDs; they are sparse and always below [`NUM_FORMAT_IDS`].
#[allow(non_camel_case_types)]
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AllValues)]
pub enum Format {
    R32G32B32A32_FLOAT = 0x0,
    R32G32B32A32_SINT = 0x1,
    R32G32B32A32_UINT = 0x2,
    R64G64_FLOAT = 0x5,
    R32G32B32X32_FLOAT = 0x6,
    R32G32B32A32_SSCALED = 0x7,
    R32G32B32A32_USCALED = 0x8,
    R32G32B32A32_SFIXED = 0x20,
    R32G32B32_FLOAT = 0x40,
    R32G32B32_SINT = 0x41,
    R32G32B32_UINT = 0x42,
    R32G32B32_SSCALED = 0x45,
    R32G32B32_USCALED = 0x46,
    R32G32B32_SFIXED = 0x50,
    R16G16B16A16_UNORM = 0x80,
    R16G16B16A16_SNORM = 0x81,
    R16G16B16A16_SINT = 0x82,
    R16G16B16A16_UINT = 0x83,
    R16G16B16A16_FLOAT = 0x84,
    R32G32_FLOAT = 0x85,
    R32G32_SINT = 0x86,
    R32G32_UINT = 0x87,
    R32_FLOAT_X8X24_TYPELESS = 0x88,
    X32_TYPELESS_G8X24_UINT = 0x89,
    L32A32_FLOAT = 0x8a,
    R64_FLOAT = 0x8d,
    R16G16B16X16_UNORM = 0x8e,
    R16G16B16X16_FLOAT = 0x8f,
    L32X32_FLOAT = 0x91,
    I32X32_FLOAT = 0x92,
    R16G16B16A16_SSCALED = 0x93,
    R16G16B16A16_USCALED = 0x94,
    R32G32_SSCALED = 0x95,
    R32G32_USCALED = 0x96,
    R32G32_SFIXED = 0xa0,
    B8G8R8A8_UNORM = 0xc0,
    B8G8R8A8_UNORM_SRGB = 0xc1,
    R10G10B10A2_UNORM = 0xc2,
    R10G10B10A2_UNORM_SRGB = 0xc3,
    R10G10B10A2_UINT = 0xc4,
    R8G8B8A8_UNORM = 0xc7,
    R8G8B8A8_UNORM_SRGB = 0xc8,
    R8G8B8A8_SNORM = 0xc9,
    R8G8B8A8_SINT = 0xca,
    R8G8B8A8_UINT = 0xcb,
    R16G16_UNORM = 0xcc,
    R16G16_SNORM = 0xcd,
    R16G16_SINT = 0xce,
    R16G16_UINT = 0xcf,
    R16G16_FLOAT = 0xd0,
    B10G10R10A2_UNORM = 0xd1,
    B10G10R10A2_UNORM_SRGB = 0xd2,
    R11G11B10_FLOAT = 0xd3,
    R10G10B10_FLOAT_A2_UNORM = 0xd5,
    R32_SINT = 0xd6,
    R32_UINT = 0xd7,
    R32_FLOAT = 0xd8,
    R24_UNORM_X8_TYPELESS = 0xd9,
    X24_TYPELESS_G8_UINT = 0xda,
    L32_UNORM = 0xdd,
    L16A16_UNORM = 0xdf,
    I24X8_UNORM = 0xe0,
    L24X8_UNORM = 0xe1,
    I32_FLOAT = 0xe3,
    L32_FLOAT = 0xe4,
    A32_FLOAT = 0xe5,
    B8G8R8X8_UNORM = 0xe9,
    B8G8R8X8_UNORM_SRGB = 0xea,
    R8G8B8X8_UNORM = 0xeb,
    R8G8B8X8_UNORM_SRGB = 0xec,
    R9G9B9E5_SHAREDEXP = 0xed,
    B10G10R10X2_UNORM = 0xee,
    L16A16_FLOAT = 0xf0,
    R10G10B10X2_USCALED = 0xf3,
    R8G8B8A8_SSCALED = 0xf4,
    R8G8B8A8_USCALED = 0xf5,
    R16G16_SSCALED = 0xf6,
    R16G16_USCALED = 0xf7,
    R32_SSCALED = 0xf8,
    R32_USCALED = 0xf9,
    B5G6R5_UNORM = 0x100,
    B5G6R5_UNORM_SRGB = 0x101,
    B5G5R5A1_UNORM = 0x102,
    B5G5R5A1_UNORM_SRGB = 0x103,
    B4G4R4A4_UNORM = 0x104,
    B4G4R4A4_UNORM_SRGB = 0x105,
    R8G8_UNORM = 0x106,
    R8G8_SNORM = 0x107,
    R8G8_SINT = 0x108,
    R8G8_UINT = 0x109,
    R16_UNORM = 0x10a,
    R16_SNORM = 0x10b,
    R16_SINT = 0x10c,
    R16_UINT = 0x10d,
    R16_FLOAT = 0x10e,
    I16_UNORM = 0x111,
    L16_UNORM = 0x112,
    A16_UNORM = 0x113,
    L8A8_UNORM = 0x114,
    I16_FLOAT = 0x115,
    L16_FLOAT = 0x116,
    A16_FLOAT = 0x117,
    L8A8_UNORM_SRGB = 0x118,
    B5G5R5X1_UNORM = 0x11a,
    B5G5R5X1_UNORM_SRGB = 0x11b,
    R8G8_SSCALED = 0x11c,
    R8G8_USCALED = 0x11d,
    R16_SSCALED = 0x11e,
    R16_USCALED = 0x11f,
    A1B5G5R5_UNORM = 0x124,
    A4B4G4R4_UNORM = 0x125,
    L8A8_UINT = 0x126,
    L8A8_SINT = 0x127,
    R8_UNORM = 0x140,
    R8_SNORM = 0x141,
    R8_SINT = 0x142,
    R8_UINT = 0x143,
    A8_UNORM = 0x144,
    I8_UNORM = 0x145,
    L8_UNORM = 0x146,
    R8_SSCALED = 0x149,
    R8_USCALED = 0x14a,
    L8_UNORM_SRGB = 0x14c,
    L8_UINT = 0x152,
    L8_SINT = 0x153,
    I8_UINT = 0x154,
    I8_SINT = 0x155,
    DXT1_RGB_SRGB = 0x180,
    YCRCB_SWAPUVY = 0x183,
    BC1_UNORM = 0x186,
    BC2_UNORM = 0x187,
    BC3_UNORM = 0x188,
    BC4_UNORM = 0x189,
    BC5_UNORM = 0x18a,
    BC1_UNORM_SRGB = 0x18b,
    BC2_UNORM_SRGB = 0x18c,
    BC3_UNORM_SRGB = 0x18d,
    YCRCB_SWAPUV = 0x18f,
    DXT1_RGB = 0x191,
    R8G8B8_UNORM = 0x193,
    R8G8B8_SNORM = 0x194,
    R8G8B8_SSCALED = 0x195,
    R8G8B8_USCALED = 0x196,
    R64G64B64A64_FLOAT = 0x197,
    R64G64B64_FLOAT = 0x198,
    BC4_SNORM = 0x199,
    BC5_SNORM = 0x19a,
    R16G16B16_FLOAT = 0x19b,
    R16G16B16_UNORM = 0x19c,
    R16G16B16_SNORM = 0x19d,
    R16G16B16_SSCALED = 0x19e,
    R16G16B16_USCALED = 0x19f,
    BC6H_SF16 = 0x1a1,
    BC7_UNORM = 0x1a2,
    BC7_UNORM_SRGB = 0x1a3,
    BC6H_UF16 = 0x1a4,
    R8G8B8_UNORM_SRGB = 0x1a8,
    R16G16B16_UINT = 0x1b0,
    R16G16B16_SINT = 0x1b1,
    R32_SFIXED = 0x1b2,
    R10G10B10A2_SNORM = 0x1b3,
    R10G10B10A2_USCALED = 0x1b4,
    R10G10B10A2_SSCALED = 0x1b5,
    R10G10B10A2_SINT = 0x1b6,
    B10G10R10A2_SNORM = 0x1b7,
    B10G10R10A2_USCALED = 0x1b8,
    B10G10R10A2_SSCALED = 0x1b9,
    B10G10R10A2_UINT = 0x1ba,
    B10G10R10A2_SINT = 0x1bb,
    R8G8B8_UINT = 0x1c8,
    R8G8B8_SINT = 0x1c9,
    RAW = 0x1ff,
}

/// Upper bound (exclusive) on the raw format IDs; dispatch tables are sized by it.
pub const NUM_FORMAT_IDS: usize = 512;

#[rustfmt::skip]
const ROWS: [FormatInfo; 172] = [
    row(Format::R32G32B32A32_FLOAT, "R32G32B32A32_FLOAT", [Float; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R32G32B32A32_SINT, "R32G32B32A32_SINT", [Sint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R32G32B32A32_UINT, "R32G32B32A32_UINT", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R64G64_FLOAT, "R64G64_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [64, 64, 0, 0], 128, 2, 0, (1, 1)),
    row(Format::R32G32B32X32_FLOAT, "R32G32B32X32_FLOAT", [Float, Float, Float, Unused], [0, 0, 0, ONE], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R32G32B32A32_SSCALED, "R32G32B32A32_SSCALED", [Sscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R32G32B32A32_USCALED, "R32G32B32A32_USCALED", [Uscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R32G32B32A32_SFIXED, "R32G32B32A32_SFIXED", [Sfixed; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [32, 32, 32, 32], 128, 4, 0, (1, 1)),
    row(Format::R32G32B32_FLOAT, "R32G32B32_FLOAT", [Float, Float, Float, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [32, 32, 32, 0], 96, 3, 0, (1, 1)),
    row(Format::R32G32B32_SINT, "R32G32B32_SINT", [Sint, Sint, Sint, Unknown], [0, 0, 0, 1], [0, 1, 2, 0], [32, 32, 32, 0], 96, 3, 0, (1, 1)),
    row(Format::R32G32B32_UINT, "R32G32B32_UINT", [Uint, Uint, Uint, Unknown], [0, 0, 0, 1], [0, 1, 2, 0], [32, 32, 32, 0], 96, 3, 0, (1, 1)),
    row(Format::R32G32B32_SSCALED, "R32G32B32_SSCALED", [Sscaled, Sscaled, Sscaled, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [32, 32, 32, 0], 96, 3, 0, (1, 1)),
    row(Format::R32G32B32_USCALED, "R32G32B32_USCALED", [Uscaled, Uscaled, Uscaled, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [32, 32, 32, 0], 96, 3, 0, (1, 1)),
    row(Format::R32G32B32_SFIXED, "R32G32B32_SFIXED", [Sfixed, Sfixed, Sfixed, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [32, 32, 32, 0], 96, 3, 0, (1, 1)),
    row(Format::R16G16B16A16_UNORM, "R16G16B16A16_UNORM", [Unorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R16G16B16A16_SNORM, "R16G16B16A16_SNORM", [Snorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R16G16B16A16_SINT, "R16G16B16A16_SINT", [Sint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R16G16B16A16_UINT, "R16G16B16A16_UINT", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R16G16B16A16_FLOAT, "R16G16B16A16_FLOAT", [Float; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R32G32_FLOAT, "R32G32_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::R32G32_SINT, "R32G32_SINT", [Sint, Sint, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 0, 0], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::R32G32_UINT, "R32G32_UINT", [Uint, Uint, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 0, 0], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::R32_FLOAT_X8X24_TYPELESS, "R32_FLOAT_X8X24_TYPELESS", [Float, Unused, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::X32_TYPELESS_G8X24_UINT, "X32_TYPELESS_G8X24_UINT", [Uint, Unused, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 2, 3], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::L32A32_FLOAT, "L32A32_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [32, 32, 0, 0], 64, 2, LUM, (1, 1)),
    row(Format::R64_FLOAT, "R64_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [64, 0, 0, 0], 64, 1, 0, (1, 1)),
    row(Format::R16G16B16X16_UNORM, "R16G16B16X16_UNORM", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R16G16B16X16_FLOAT, "R16G16B16X16_FLOAT", [Float, Float, Float, Unused], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::L32X32_FLOAT, "L32X32_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [32, 32, 0, 0], 64, 2, LUM, (1, 1)),
    row(Format::I32X32_FLOAT, "I32X32_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [32, 32, 0, 0], 64, 2, LUM, (1, 1)),
    row(Format::R16G16B16A16_SSCALED, "R16G16B16A16_SSCALED", [Sscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R16G16B16A16_USCALED, "R16G16B16A16_USCALED", [Uscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [16, 16, 16, 16], 64, 4, 0, (1, 1)),
    row(Format::R32G32_SSCALED, "R32G32_SSCALED", [Sscaled, Sscaled, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::R32G32_USCALED, "R32G32_USCALED", [Uscaled, Uscaled, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::R32G32_SFIXED, "R32G32_SFIXED", [Sfixed, Sfixed, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [32, 32, 0, 0], 64, 2, 0, (1, 1)),
    row(Format::B8G8R8A8_UNORM, "B8G8R8A8_UNORM", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::B8G8R8A8_UNORM_SRGB, "B8G8R8A8_UNORM_SRGB", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [8, 8, 8, 8], 32, 4, SRGB, (1, 1)),
    row(Format::R10G10B10A2_UNORM, "R10G10B10A2_UNORM", [Unorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R10G10B10A2_UNORM_SRGB, "R10G10B10A2_UNORM_SRGB", [Unorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, SRGB, (1, 1)),
    row(Format::R10G10B10A2_UINT, "R10G10B10A2_UINT", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8A8_UNORM, "R8G8B8A8_UNORM", [Unorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8A8_UNORM_SRGB, "R8G8B8A8_UNORM_SRGB", [Unorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, SRGB, (1, 1)),
    row(Format::R8G8B8A8_SNORM, "R8G8B8A8_SNORM", [Snorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8A8_SINT, "R8G8B8A8_SINT", [Sint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8A8_UINT, "R8G8B8A8_UINT", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R16G16_UNORM, "R16G16_UNORM", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::R16G16_SNORM, "R16G16_SNORM", [Snorm, Snorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::R16G16_SINT, "R16G16_SINT", [Sint, Sint, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::R16G16_UINT, "R16G16_UINT", [Uint, Uint, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::R16G16_FLOAT, "R16G16_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::B10G10R10A2_UNORM, "B10G10R10A2_UNORM", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10A2_UNORM_SRGB, "B10G10R10A2_UNORM_SRGB", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, SRGB, (1, 1)),
    row(Format::R11G11B10_FLOAT, "R11G11B10_FLOAT", [Float, Float, Float, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [11, 11, 10, 0], 32, 3, 0, (1, 1)),
    row(Format::R10G10B10_FLOAT_A2_UNORM, "R10G10B10_FLOAT_A2_UNORM", [Float, Float, Float, Unorm], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R32_SINT, "R32_SINT", [Sint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::R32_UINT, "R32_UINT", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::R32_FLOAT, "R32_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::R24_UNORM_X8_TYPELESS, "R24_UNORM_X8_TYPELESS", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [24, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::X24_TYPELESS_G8_UINT, "X24_TYPELESS_G8_UINT", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [1, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::L32_UNORM, "L32_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, LUM, (1, 1)),
    row(Format::L16A16_UNORM, "L16A16_UNORM", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [16, 16, 0, 0], 32, 2, LUM, (1, 1)),
    row(Format::I24X8_UNORM, "I24X8_UNORM", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [24, 8, 0, 0], 32, 2, LUM, (1, 1)),
    row(Format::L24X8_UNORM, "L24X8_UNORM", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [24, 8, 0, 0], 32, 2, LUM, (1, 1)),
    row(Format::I32_FLOAT, "I32_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, LUM, (1, 1)),
    row(Format::L32_FLOAT, "L32_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, LUM, (1, 1)),
    row(Format::A32_FLOAT, "A32_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [3, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::B8G8R8X8_UNORM, "B8G8R8X8_UNORM", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [2, 1, 0, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::B8G8R8X8_UNORM_SRGB, "B8G8R8X8_UNORM_SRGB", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [2, 1, 0, 3], [8, 8, 8, 8], 32, 4, SRGB, (1, 1)),
    row(Format::R8G8B8X8_UNORM, "R8G8B8X8_UNORM", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8X8_UNORM_SRGB, "R8G8B8X8_UNORM_SRGB", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, SRGB, (1, 1)),
    row(Format::R9G9B9E5_SHAREDEXP, "R9G9B9E5_SHAREDEXP", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [9, 9, 9, 5], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10X2_UNORM, "B10G10R10X2_UNORM", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::L16A16_FLOAT, "L16A16_FLOAT", [Float, Float, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [16, 16, 0, 0], 32, 2, LUM, (1, 1)),
    row(Format::R10G10B10X2_USCALED, "R10G10B10X2_USCALED", [Uscaled, Uscaled, Uscaled, Unused], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8A8_SSCALED, "R8G8B8A8_SSCALED", [Sscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8A8_USCALED, "R8G8B8A8_USCALED", [Uscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, 0, (1, 1)),
    row(Format::R16G16_SSCALED, "R16G16_SSCALED", [Sscaled, Sscaled, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::R16G16_USCALED, "R16G16_USCALED", [Uscaled, Uscaled, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [16, 16, 0, 0], 32, 2, 0, (1, 1)),
    row(Format::R32_SSCALED, "R32_SSCALED", [Sscaled, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::R32_USCALED, "R32_USCALED", [Uscaled, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::B5G6R5_UNORM, "B5G6R5_UNORM", [Unorm, Unorm, Unorm, Unknown], [0, 0, 0, ONE], [2, 1, 0, 0], [5, 6, 5, 0], 16, 3, 0, (1, 1)),
    row(Format::B5G6R5_UNORM_SRGB, "B5G6R5_UNORM_SRGB", [Unorm, Unorm, Unorm, Unknown], [0, 0, 0, ONE], [2, 1, 0, 0], [5, 6, 5, 0], 16, 3, SRGB, (1, 1)),
    row(Format::B5G5R5A1_UNORM, "B5G5R5A1_UNORM", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [5, 5, 5, 1], 16, 4, 0, (1, 1)),
    row(Format::B5G5R5A1_UNORM_SRGB, "B5G5R5A1_UNORM_SRGB", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [5, 5, 5, 1], 16, 4, SRGB, (1, 1)),
    row(Format::B4G4R4A4_UNORM, "B4G4R4A4_UNORM", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [4, 4, 4, 4], 16, 4, 0, (1, 1)),
    row(Format::B4G4R4A4_UNORM_SRGB, "B4G4R4A4_UNORM_SRGB", [Unorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [4, 4, 4, 4], 16, 4, SRGB, (1, 1)),
    row(Format::R8G8_UNORM, "R8G8_UNORM", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [8, 8, 0, 0], 16, 2, 0, (1, 1)),
    row(Format::R8G8_SNORM, "R8G8_SNORM", [Snorm, Snorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [8, 8, 0, 0], 16, 2, 0, (1, 1)),
    row(Format::R8G8_SINT, "R8G8_SINT", [Sint, Sint, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 0, 0], [8, 8, 0, 0], 16, 2, 0, (1, 1)),
    row(Format::R8G8_UINT, "R8G8_UINT", [Uint, Uint, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 0, 0], [8, 8, 0, 0], 16, 2, 0, (1, 1)),
    row(Format::R16_UNORM, "R16_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::R16_SNORM, "R16_SNORM", [Snorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::R16_SINT, "R16_SINT", [Sint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::R16_UINT, "R16_UINT", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::R16_FLOAT, "R16_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::I16_UNORM, "I16_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, LUM, (1, 1)),
    row(Format::L16_UNORM, "L16_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, LUM, (1, 1)),
    row(Format::A16_UNORM, "A16_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [3, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::L8A8_UNORM, "L8A8_UNORM", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [8, 8, 0, 0], 16, 2, LUM, (1, 1)),
    row(Format::I16_FLOAT, "I16_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, LUM, (1, 1)),
    row(Format::L16_FLOAT, "L16_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, LUM, (1, 1)),
    row(Format::A16_FLOAT, "A16_FLOAT", [Float, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [3, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::L8A8_UNORM_SRGB, "L8A8_UNORM_SRGB", [Unorm, Unorm, Unknown, Unknown], [0, 0, 0, ONE], [0, 3, 0, 0], [8, 8, 0, 0], 16, 2, SRGB | LUM, (1, 1)),
    row(Format::B5G5R5X1_UNORM, "B5G5R5X1_UNORM", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [2, 1, 0, 3], [5, 5, 5, 1], 16, 4, 0, (1, 1)),
    row(Format::B5G5R5X1_UNORM_SRGB, "B5G5R5X1_UNORM_SRGB", [Unorm, Unorm, Unorm, Unused], [0, 0, 0, ONE], [2, 1, 0, 3], [5, 5, 5, 1], 16, 4, SRGB, (1, 1)),
    row(Format::R8G8_SSCALED, "R8G8_SSCALED", [Sscaled, Sscaled, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [8, 8, 0, 0], 16, 2, 0, (1, 1)),
    row(Format::R8G8_USCALED, "R8G8_USCALED", [Uscaled, Uscaled, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 0, 0], [8, 8, 0, 0], 16, 2, 0, (1, 1)),
    row(Format::R16_SSCALED, "R16_SSCALED", [Sscaled, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::R16_USCALED, "R16_USCALED", [Uscaled, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [16, 0, 0, 0], 16, 1, 0, (1, 1)),
    row(Format::A1B5G5R5_UNORM, "A1B5G5R5_UNORM", [Unorm; 4], [0, 0, 0, ONE], [3, 2, 1, 0], [1, 5, 5, 5], 16, 4, 0, (1, 1)),
    row(Format::A4B4G4R4_UNORM, "A4B4G4R4_UNORM", [Unorm; 4], [0, 0, 0, ONE], [3, 2, 1, 0], [4, 4, 4, 4], 16, 4, 0, (1, 1)),
    row(Format::L8A8_UINT, "L8A8_UINT", [Uint, Uint, Unknown, Unknown], [0, 0, 0, 1], [0, 3, 0, 0], [8, 8, 0, 0], 16, 2, LUM, (1, 1)),
    row(Format::L8A8_SINT, "L8A8_SINT", [Sint, Sint, Unknown, Unknown], [0, 0, 0, 1], [0, 3, 0, 0], [8, 8, 0, 0], 16, 2, LUM, (1, 1)),
    row(Format::R8_UNORM, "R8_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::R8_SNORM, "R8_SNORM", [Snorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::R8_SINT, "R8_SINT", [Sint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::R8_UINT, "R8_UINT", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::A8_UNORM, "A8_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [3, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::I8_UNORM, "I8_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, LUM, (1, 1)),
    row(Format::L8_UNORM, "L8_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, LUM, (1, 1)),
    row(Format::R8_SSCALED, "R8_SSCALED", [Sscaled, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::R8_USCALED, "R8_USCALED", [Uscaled, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
    row(Format::L8_UNORM_SRGB, "L8_UNORM_SRGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, SRGB | LUM, (1, 1)),
    row(Format::L8_UINT, "L8_UINT", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, LUM, (1, 1)),
    row(Format::L8_SINT, "L8_SINT", [Sint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, LUM, (1, 1)),
    row(Format::I8_UINT, "I8_UINT", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, LUM, (1, 1)),
    row(Format::I8_SINT, "I8_SINT", [Sint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 0, 0, 0], [8, 0, 0, 0], 8, 1, LUM, (1, 1)),
    row(Format::DXT1_RGB_SRGB, "DXT1_RGB_SRGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 64, 1, BC, (4, 4)),
    row(Format::YCRCB_SWAPUVY, "YCRCB_SWAPUVY", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, SUB, (2, 1)),
    row(Format::BC1_UNORM, "BC1_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 64, 1, BC, (4, 4)),
    row(Format::BC2_UNORM, "BC2_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::BC3_UNORM, "BC3_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::BC4_UNORM, "BC4_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 64, 1, BC, (4, 4)),
    row(Format::BC5_UNORM, "BC5_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::BC1_UNORM_SRGB, "BC1_UNORM_SRGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 64, 1, SRGB | BC, (4, 4)),
    row(Format::BC2_UNORM_SRGB, "BC2_UNORM_SRGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, SRGB | BC, (4, 4)),
    row(Format::BC3_UNORM_SRGB, "BC3_UNORM_SRGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, SRGB | BC, (4, 4)),
    row(Format::YCRCB_SWAPUV, "YCRCB_SWAPUV", [Uint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [8, 8, 8, 8], 32, 4, SUB, (2, 1)),
    row(Format::DXT1_RGB, "DXT1_RGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 64, 1, BC, (4, 4)),
    row(Format::R8G8B8_UNORM, "R8G8B8_UNORM", [Unorm, Unorm, Unorm, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, 0, (1, 1)),
    row(Format::R8G8B8_SNORM, "R8G8B8_SNORM", [Snorm, Snorm, Snorm, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, 0, (1, 1)),
    row(Format::R8G8B8_SSCALED, "R8G8B8_SSCALED", [Sscaled, Sscaled, Sscaled, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, 0, (1, 1)),
    row(Format::R8G8B8_USCALED, "R8G8B8_USCALED", [Uscaled, Uscaled, Uscaled, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, 0, (1, 1)),
    row(Format::R64G64B64A64_FLOAT, "R64G64B64A64_FLOAT", [Float; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [64, 64, 64, 64], 256, 4, 0, (1, 1)),
    row(Format::R64G64B64_FLOAT, "R64G64B64_FLOAT", [Float, Float, Float, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [64, 64, 64, 0], 192, 3, 0, (1, 1)),
    row(Format::BC4_SNORM, "BC4_SNORM", [Snorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 64, 1, BC, (4, 4)),
    row(Format::BC5_SNORM, "BC5_SNORM", [Snorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::R16G16B16_FLOAT, "R16G16B16_FLOAT", [Float, Float, Float, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::R16G16B16_UNORM, "R16G16B16_UNORM", [Unorm, Unorm, Unorm, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::R16G16B16_SNORM, "R16G16B16_SNORM", [Snorm, Snorm, Snorm, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::R16G16B16_SSCALED, "R16G16B16_SSCALED", [Sscaled, Sscaled, Sscaled, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::R16G16B16_USCALED, "R16G16B16_USCALED", [Uscaled, Uscaled, Uscaled, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::BC6H_SF16, "BC6H_SF16", [Snorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::BC7_UNORM, "BC7_UNORM", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::BC7_UNORM_SRGB, "BC7_UNORM_SRGB", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, SRGB | BC, (4, 4)),
    row(Format::BC6H_UF16, "BC6H_UF16", [Unorm, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 1, 2, 3], [8, 8, 8, 8], 128, 1, BC, (4, 4)),
    row(Format::R8G8B8_UNORM_SRGB, "R8G8B8_UNORM_SRGB", [Unorm, Unorm, Unorm, Unknown], [0, 0, 0, ONE], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, SRGB, (1, 1)),
    row(Format::R16G16B16_UINT, "R16G16B16_UINT", [Uint, Uint, Uint, Unknown], [0, 0, 0, 1], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::R16G16B16_SINT, "R16G16B16_SINT", [Sint, Sint, Sint, Unknown], [0, 0, 0, 1], [0, 1, 2, 0], [16, 16, 16, 0], 48, 3, 0, (1, 1)),
    row(Format::R32_SFIXED, "R32_SFIXED", [Sfixed, Unknown, Unknown, Unknown], [0, 0, 0, ONE], [0, 0, 0, 0], [32, 0, 0, 0], 32, 1, 0, (1, 1)),
    row(Format::R10G10B10A2_SNORM, "R10G10B10A2_SNORM", [Snorm; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R10G10B10A2_USCALED, "R10G10B10A2_USCALED", [Uscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R10G10B10A2_SSCALED, "R10G10B10A2_SSCALED", [Sscaled; 4], [0, 0, 0, ONE], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R10G10B10A2_SINT, "R10G10B10A2_SINT", [Sint; 4], [0, 0, 0, 1], [0, 1, 2, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10A2_SNORM, "B10G10R10A2_SNORM", [Snorm; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10A2_USCALED, "B10G10R10A2_USCALED", [Uscaled; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10A2_SSCALED, "B10G10R10A2_SSCALED", [Sscaled; 4], [0, 0, 0, ONE], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10A2_UINT, "B10G10R10A2_UINT", [Uint; 4], [0, 0, 0, 1], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::B10G10R10A2_SINT, "B10G10R10A2_SINT", [Sint; 4], [0, 0, 0, 1], [2, 1, 0, 3], [10, 10, 10, 2], 32, 4, 0, (1, 1)),
    row(Format::R8G8B8_UINT, "R8G8B8_UINT", [Uint, Uint, Uint, Unknown], [0, 0, 0, 1], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, 0, (1, 1)),
    row(Format::R8G8B8_SINT, "R8G8B8_SINT", [Sint, Sint, Sint, Unknown], [0, 0, 0, 1], [0, 1, 2, 0], [8, 8, 8, 0], 24, 3, 0, (1, 1)),
    row(Format::RAW, "RAW", [Uint, Unknown, Unknown, Unknown], [0, 0, 0, 1], [0, 1, 2, 3], [8, 0, 0, 0], 8, 1, 0, (1, 1)),
];

pub(crate) static FORMAT_TABLE: [FormatInfo; ROWS.len()] = ROWS;

/// Maps a raw format ID to its row in [`FORMAT_TABLE`]; `u8::MAX` marks an unassigned ID.
pub(crate) static FORMAT_ROW: [u8; NUM_FORMAT_IDS] = {
    let mut rows = [u8::MAX; NUM_FORMAT_IDS];
    let mut i = 0;
    while i < ROWS.len() {
        rows[ROWS[i].format as usize] = i as u8;
        i += 1;
    }
    rows
};

/// Lookup table for 8-bit sRGB to linear float decode, as raw `f32` bits.
pub(crate) static SRGB8_TO_LINEAR: [u32; 256] = [
    0x00000000, 0x399f22b4, 0x3a1f22b4, 0x3a6eb40f, 0x3a9f22b4, 0x3ac6eb61, 0x3aeeb40f, 0x3b0b3e5e,
    0x3b1f22b4, 0x3b33070b, 0x3b46eb61, 0x3b5b518d, 0x3b70f18d, 0x3b83e1c6, 0x3b8fe616, 0x3b9c87fd,
    0x3ba9c9b5, 0x3bb7ad6f, 0x3bc63549, 0x3bd5635f, 0x3be539c1, 0x3bf5ba70, 0x3c0373b5, 0x3c0c6152,
    0x3c15a703, 0x3c1f45be, 0x3c293e6b, 0x3c3391f7, 0x3c3e4149, 0x3c494d43, 0x3c54b6c7, 0x3c607eb1,
    0x3c6ca5dc, 0x3c792d22, 0x3c830aa8, 0x3c89af9f, 0x3c9085db, 0x3c978dc5, 0x3c9ec7c0, 0x3ca63431,
    0x3cadd37d, 0x3cb5a601, 0x3cbdac20, 0x3cc5e639, 0x3cce54ab, 0x3cd6f7d3, 0x3cdfd00e, 0x3ce8ddb9,
    0x3cf22131, 0x3cfb9ac6, 0x3d02a56c, 0x3d0798df, 0x3d0ca7e7, 0x3d11d2b0, 0x3d171965, 0x3d1c7c31,
    0x3d21fb3c, 0x3d2796b2, 0x3d2d4ebe, 0x3d332384, 0x3d39152e, 0x3d3f23e6, 0x3d454fd4, 0x3d4b991f,
    0x3d51ffef, 0x3d58846a, 0x3d5f26b7, 0x3d65e6fe, 0x3d6cc564, 0x3d73c20f, 0x3d7add25, 0x3d810b66,
    0x3d84b795, 0x3d887330, 0x3d8c3e4a, 0x3d9018f6, 0x3d940345, 0x3d97fd4a, 0x3d9c0716, 0x3da020bb,
    0x3da44a4b, 0x3da883d7, 0x3daccd70, 0x3db12728, 0x3db59110, 0x3dba0b38, 0x3dbe95b5, 0x3dc33092,
    0x3dc7dbe2, 0x3dcc97b6, 0x3dd1641f, 0x3dd6412c, 0x3ddb2eef, 0x3de02d77, 0x3de53cd5, 0x3dea5d19,
    0x3def8e55, 0x3df4d093, 0x3dfa23e8, 0x3dff8861, 0x3e027f07, 0x3e054282, 0x3e080ea5, 0x3e0ae379,
    0x3e0dc107, 0x3e10a755, 0x3e13966c, 0x3e168e53, 0x3e198f11, 0x3e1c98ae, 0x3e1fab32, 0x3e22c6a3,
    0x3e25eb09, 0x3e29186c, 0x3e2c4ed2, 0x3e2f8e45, 0x3e32d6c8, 0x3e362865, 0x3e398322, 0x3e3ce706,
    0x3e405419, 0x3e43ca62, 0x3e4749e8, 0x3e4ad2b1, 0x3e4e64c6, 0x3e52002b, 0x3e55a4e9, 0x3e595307,
    0x3e5d0a8b, 0x3e60cb7c, 0x3e6495e0, 0x3e6869bf, 0x3e6c4720, 0x3e702e08, 0x3e741e7f, 0x3e78188c,
    0x3e7c1c38, 0x3e8014c2, 0x3e82203c, 0x3e84308d, 0x3e8645ba, 0x3e885fc5, 0x3e8a7eb2, 0x3e8ca283,
    0x3e8ecb3d, 0x3e90f8e1, 0x3e932b74, 0x3e9562f8, 0x3e979f71, 0x3e99e0e2, 0x3e9c274e, 0x3e9e72b7,
    0x3ea0c322, 0x3ea31892, 0x3ea57308, 0x3ea7d289, 0x3eaa3718, 0x3eaca0b7, 0x3eaf0f69, 0x3eb18333,
    0x3eb3fc16, 0x3eb67a15, 0x3eb8fd34, 0x3ebb8576, 0x3ebe12e1, 0x3ec0a571, 0x3ec33d2d, 0x3ec5da17,
    0x3ec87c33, 0x3ecb2383, 0x3ecdd00b, 0x3ed081cd, 0x3ed338cc, 0x3ed5f50b, 0x3ed8b68d, 0x3edb7d54,
    0x3ede4965, 0x3ee11ac1, 0x3ee3f16b, 0x3ee6cd67, 0x3ee9aeb6, 0x3eec955d, 0x3eef815d, 0x3ef272ba,
    0x3ef56976, 0x3ef86594, 0x3efb6717, 0x3efe6e02, 0x3f00bd2b, 0x3f02460c, 0x3f03d1a5, 0x3f055ff8,
    0x3f06f106, 0x3f0884cf, 0x3f0a1b57, 0x3f0bb49d, 0x3f0d50a2, 0x3f0eef69, 0x3f1090f2, 0x3f123540,
    0x3f13dc53, 0x3f15862d, 0x3f1732cf, 0x3f18e23b, 0x3f1a9471, 0x3f1c4973, 0x3f1e0143, 0x3f1fbbe1,
    0x3f217950, 0x3f23398f, 0x3f24fca2, 0x3f26c288, 0x3f288b43, 0x3f2a56d5, 0x3f2c253f, 0x3f2df681,
    0x3f2fca9e, 0x3f31a197, 0x3f337b6c, 0x3f355820, 0x3f3737b3, 0x3f391a26, 0x3f3aff7e, 0x3f3ce7b7,
    0x3f3ed2d4, 0x3f40c0d6, 0x3f42b1c0, 0x3f44a592, 0x3f469c4d, 0x3f4895f3, 0x3f4a9284, 0x3f4c9203,
    0x3f4e9470, 0x3f5099cd, 0x3f52a21a, 0x3f54ad59, 0x3f56bb8c, 0x3f58ccb3, 0x3f5ae0cf, 0x3f5cf7e2,
    0x3f5f11ee, 0x3f612ef2, 0x3f634eef, 0x3f6571ec, 0x3f6797e1, 0x3f69c0d8, 0x3f6beccb, 0x3f6e1bc2,
    0x3f704db6, 0x3f7282b1, 0x3f74baae, 0x3f76f5b3, 0x3f7933b9, 0x3f7b74cb, 0x3f7db8e0, 0x3f800000,
];
