#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod address;
pub mod attachment;
pub mod buckets;
pub mod clear_tile;
pub mod config;
pub mod convert;
pub mod error;
pub mod hot_tile;
pub mod load_tile;
pub mod store_pixels;
pub mod store_tile;
pub mod surface;
pub mod tables;
pub mod tiling;

pub use address::{compute_surface_address, compute_surface_offset, SurfaceCoord};
pub use attachment::{Attachment, AttachmentKind, MacroTileCoord};
pub use buckets::{BucketCollector, NullBucketCollector};
pub use clear_tile::clear_tile;
pub use config::{SimdWidth, TransferConfig, WorkerContext};
pub use error::{AddressError, TableFamily, TileTransferError};
pub use load_tile::load_tile;
pub use store_tile::store_tile;
pub use surface::{SurfaceState, SurfaceType};
pub use tables::{init_clear_tables, init_load_tables, init_store_tables};
pub use tiling::TileMode;

#[cfg(test)]
pub(crate) mod test_prelude;
