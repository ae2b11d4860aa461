#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod allocate;
pub mod cpu_detect;
pub mod error;
pub mod format;
pub mod numeric;
pub mod pixel;
pub mod srgb;

pub use error::{ConversionError, FormatError};
pub use format::{ComponentType, Format, FormatInfo};

#[cfg(test)]
pub(crate) mod test_prelude;
