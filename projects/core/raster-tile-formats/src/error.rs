//! Error types for format lookup and pixel conversion.

use crate::format::{ComponentType, Format};
use thiserror::Error;

/// An error raised while resolving a raw format ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The raw ID does not name any known format.
    #[error("Unknown format ID: {0:#x}")]
    UnknownFormat(u16),
}

/// An error raised while converting a pixel between float and a surface format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The format has no per-pixel representation (block compressed or subsampled).
    #[error("Format {0:?} has no per-pixel representation.")]
    Untransferable(Format),

    /// A declared component has a type/width pair with no conversion rule.
    #[error("Component {component} of {format:?} has unsupported type {ty:?} with {bits} bits.")]
    UnsupportedComponent {
        /// The format owning the component.
        format: Format,
        /// Index of the component within the format.
        component: usize,
        /// The declared component type.
        ty: ComponentType,
        /// The declared component width.
        bits: u32,
    },

    /// The pixel buffer is too small to hold one pixel of the format.
    #[error("Pixel buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    BufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },
}
