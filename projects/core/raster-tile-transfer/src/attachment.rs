//! Render target attachments and macro tile coordinates.

use derive_enum_all_values::AllValues;
use raster_tile_formats::format::Format;

/// A render target slot of the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum Attachment {
    /// Colour target 0.
    Color0,
    /// Colour target 1.
    Color1,
    /// Colour target 2.
    Color2,
    /// Colour target 3.
    Color3,
    /// Colour target 4.
    Color4,
    /// Colour target 5.
    Color5,
    /// Colour target 6.
    Color6,
    /// Colour target 7.
    Color7,
    /// The depth buffer.
    Depth,
    /// The stencil buffer.
    Stencil,
}

/// Which set of dispatch tables an [`Attachment`] is served by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum AttachmentKind {
    /// Any colour target.
    Color,
    /// The depth buffer.
    Depth,
    /// The stencil buffer.
    Stencil,
}

impl Attachment {
    /// The dispatch table family serving this attachment.
    #[inline]
    pub fn kind(self) -> AttachmentKind {
        match self {
            Attachment::Depth => AttachmentKind::Depth,
            Attachment::Stencil => AttachmentKind::Stencil,
            _ => AttachmentKind::Color,
        }
    }
}

impl AttachmentKind {
    /// Format of the hot tile holding this kind of attachment.
    #[inline]
    pub fn hot_tile_format(self) -> Format {
        match self {
            AttachmentKind::Color => Format::R32G32B32A32_FLOAT,
            AttachmentKind::Depth => Format::R32_FLOAT,
            AttachmentKind::Stencil => Format::R8_UINT,
        }
    }

    /// Format used to key the dispatch tables for a surface of `surface_format`.
    ///
    /// Stencil surfaces are always addressed as `R8_UINT`.
    #[inline]
    pub fn table_format(self, surface_format: Format) -> Format {
        match self {
            AttachmentKind::Stencil => Format::R8_UINT,
            _ => surface_format,
        }
    }
}

/// Origin of a macro tile and the render target array slice it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacroTileCoord {
    /// X of the top left pixel.
    pub x: u32,
    /// Y of the top left pixel.
    pub y: u32,
    /// Render target array index. Clamped to 0 when outside the surface's depth.
    pub array_index: u32,
}

impl MacroTileCoord {
    /// Creates a macro tile coordinate.
    pub fn new(x: u32, y: u32, array_index: u32) -> Self {
        Self { x, y, array_index }
    }
}
