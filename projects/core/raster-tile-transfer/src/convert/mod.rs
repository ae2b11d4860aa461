//! Batched conversion of one SIMD tile to packed destination pixels.
//!
//! Every converter writes the pixels of one SIMD tile in quad order, ready for
//! [`store_pixels`](crate::store_pixels::store_pixels), and must produce exactly the bytes
//! the per-pixel codec would.

pub mod flat_convert;
mod generic;
mod pack565;
mod r24x8;
mod transpose;

use crate::attachment::AttachmentKind;
use crate::hot_tile::HotTileLayout;
use flat_convert::{ChannelOrder, FlatConvertParams};
use raster_tile_formats::format::Format;
use raster_tile_formats::pixel::PixelCodec;

/// The batched conversion used for one destination format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreConverter {
    /// The destination uses the hot tile's own format.
    Transpose,
    /// 8 bit BGRA/RGBA with alpha.
    FlatConvert(FlatConvertParams),
    /// 8 bit BGRX/RGBX; the fourth byte is written as zero.
    FlatConvertNoAlpha(FlatConvertParams),
    /// `B5G6R5_UNORM`.
    Pack565,
    /// `R24_UNORM_X8_TYPELESS` depth, keeping the destination's top byte.
    MergeR24X8,
    /// Any other format, one lane at a time through the per-pixel codec.
    Generic,
}

impl StoreConverter {
    /// Chooses the converter for storing `kind` hot tiles to `dst` surfaces.
    ///
    /// [`None`] when the format is only ever stored pixel by pixel.
    pub fn select(kind: AttachmentKind, dst: Format) -> Option<Self> {
        if dst == kind.hot_tile_format() {
            return Some(Self::Transpose);
        }

        let flat = |order, srgb, alpha| FlatConvertParams { order, srgb, alpha };
        let converter = match (kind, dst) {
            (AttachmentKind::Stencil, _) => return None,
            (AttachmentKind::Depth, Format::R24_UNORM_X8_TYPELESS) => Self::MergeR24X8,
            (AttachmentKind::Color, Format::B8G8R8A8_UNORM) => {
                Self::FlatConvert(flat(ChannelOrder::Bgra, false, true))
            }
            (AttachmentKind::Color, Format::B8G8R8A8_UNORM_SRGB) => {
                Self::FlatConvert(flat(ChannelOrder::Bgra, true, true))
            }
            (AttachmentKind::Color, Format::R8G8B8A8_UNORM) => {
                Self::FlatConvert(flat(ChannelOrder::Rgba, false, true))
            }
            (AttachmentKind::Color, Format::R8G8B8A8_UNORM_SRGB) => {
                Self::FlatConvert(flat(ChannelOrder::Rgba, true, true))
            }
            (AttachmentKind::Color, Format::B8G8R8X8_UNORM) => {
                Self::FlatConvertNoAlpha(flat(ChannelOrder::Bgra, false, false))
            }
            (AttachmentKind::Color, Format::B8G8R8X8_UNORM_SRGB) => {
                Self::FlatConvertNoAlpha(flat(ChannelOrder::Bgra, true, false))
            }
            (AttachmentKind::Color, Format::R8G8B8X8_UNORM) => {
                Self::FlatConvertNoAlpha(flat(ChannelOrder::Rgba, false, false))
            }
            (AttachmentKind::Color, Format::R8G8B8X8_UNORM_SRGB) => {
                Self::FlatConvertNoAlpha(flat(ChannelOrder::Rgba, true, false))
            }
            (AttachmentKind::Color, Format::B5G6R5_UNORM) => Self::Pack565,
            _ if batchable(dst) => Self::Generic,
            _ => return None,
        };
        Some(converter)
    }

    /// The converter merges into existing destination bytes, which must be gathered into
    /// `out` before [`StoreConverter::convert`].
    #[inline]
    pub fn reads_destination(self) -> bool {
        matches!(self, Self::MergeR24X8)
    }

    /// Converts one SIMD tile into `out`, in quad order.
    ///
    /// # Panics
    ///
    /// If `simd_tile` is shorter than one SIMD tile of `layout`, or `out` cannot hold one
    /// `codec` pixel per lane.
    #[inline]
    pub fn convert(
        self,
        codec: &PixelCodec,
        layout: &HotTileLayout,
        simd_tile: &[u8],
        out: &mut [u8],
    ) {
        let needed = layout.simd_width.lanes() * codec.bytes_per_pixel();
        let out = &mut out[..needed];
        let simd_tile = &simd_tile[..layout.simd_tile_bytes()];
        match self {
            Self::Transpose => transpose::transpose(layout, simd_tile, out),
            Self::FlatConvert(params) | Self::FlatConvertNoAlpha(params) => {
                flat_convert::flat_convert(params, layout, simd_tile, out)
            }
            Self::Pack565 => pack565::pack_565(layout, simd_tile, out),
            Self::MergeR24X8 => r24x8::merge_r24x8(layout, simd_tile, out),
            Self::Generic => generic::convert_generic(codec, layout, simd_tile, out),
        }
    }
}

/// Formats the generic converter handles: whole pixel coverage, power of two sizes up to
/// 16 bytes, byte sized components.
fn batchable(format: Format) -> bool {
    let info = format.info();
    let bpp = info.bytes_per_pixel as usize;
    format != Format::X24_TYPELESS_G8_UINT
        && format.is_transferable()
        && info.covers_whole_pixel()
        && bpp.is_power_of_two()
        && bpp <= 16
        && info.components().all(|(_, bits, _)| bits % 8 == 0)
}
