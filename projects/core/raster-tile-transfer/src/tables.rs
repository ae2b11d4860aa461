//! Per format, per tiling mode dispatch tables.
//!
//! Every engine looks its worker up in a table indexed by surface format and [`TileMode`].
//! Tables are built once per process by the `init_*` functions and never change afterwards,
//! so workers read them without synchronisation.

use crate::attachment::AttachmentKind;
use crate::clear_tile::{ClearRasterTiles, MacroTileClearer};
use crate::error::TileTransferError;
use crate::load_tile::{LoadRasterTiles, MacroTileLoader};
use crate::store_tile::{MacroTileStorer, StoreRasterTiles};
use crate::tiling::{TileMode, NUM_TILE_MODES};
use log::debug;
use once_cell::sync::OnceCell;
use raster_tile_formats::format::Format;

/// Depth formats with dispatch entries.
pub const DEPTH_FORMATS: [Format; 4] = [
    Format::R32_FLOAT,
    Format::R32_FLOAT_X8X24_TYPELESS,
    Format::R24_UNORM_X8_TYPELESS,
    Format::R16_UNORM,
];

/// Tiling modes of colour and depth surfaces.
pub const COLOR_TILE_MODES: [TileMode; 4] = [
    TileMode::None,
    TileMode::XMajor,
    TileMode::YMajor,
    TileMode::SwrZ,
];

/// One worker slot per `(format, tile mode)`.
pub struct DispatchTable<T: ?Sized> {
    slots: Vec<Option<Box<T>>>,
}

impl<T: ?Sized> DispatchTable<T> {
    fn empty() -> Self {
        Self {
            slots: (0..Format::ALL.len() * NUM_TILE_MODES).map(|_| None).collect(),
        }
    }

    #[inline(always)]
    fn slot(format: Format, tile_mode: TileMode) -> usize {
        format.row() * NUM_TILE_MODES + tile_mode.index()
    }

    fn insert(&mut self, format: Format, tile_mode: TileMode, worker: Box<T>) {
        self.slots[Self::slot(format, tile_mode)] = Some(worker);
    }

    /// The worker for `format` surfaces of `tile_mode`, if any.
    #[inline]
    pub fn get(&self, format: Format, tile_mode: TileMode) -> Option<&T> {
        self.slots[Self::slot(format, tile_mode)].as_deref()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|x| x.is_some()).count()
    }

    /// No slot is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Calls `insert` for every `(format, tile mode)` with an entry for `kind`.
fn populate(
    kind: AttachmentKind,
    mut insert: impl FnMut(Format, TileMode) -> Result<(), TileTransferError>,
) -> Result<(), TileTransferError> {
    match kind {
        AttachmentKind::Color => {
            for &format in Format::ALL.iter().filter(|x| x.is_transferable()) {
                let bpp = format.bytes_per_pixel();
                for mode in COLOR_TILE_MODES.into_iter().filter(|x| x.supports(bpp)) {
                    insert(format, mode)?;
                }
            }
        }
        AttachmentKind::Depth => {
            for format in DEPTH_FORMATS {
                for mode in COLOR_TILE_MODES {
                    insert(format, mode)?;
                }
            }
        }
        AttachmentKind::Stencil => {
            for &mode in TileMode::all_values() {
                insert(Format::R8_UINT, mode)?;
            }
        }
    }
    Ok(())
}

macro_rules! tables {
    ($(#[$meta:meta])* $name:ident, $trait:ident, $new:expr, $family:literal) => {
        $(#[$meta])*
        pub struct $name {
            /// Colour attachments.
            pub color: DispatchTable<dyn $trait>,
            /// Depth attachments.
            pub depth: DispatchTable<dyn $trait>,
            /// Stencil attachments.
            pub stencil: DispatchTable<dyn $trait>,
        }

        impl $name {
            /// Builds every entry.
            ///
            /// # Errors
            ///
            /// If a listed format has no per-pixel conversion.
            pub fn build() -> Result<Self, TileTransferError> {
                let mut tables = Self {
                    color: DispatchTable::empty(),
                    depth: DispatchTable::empty(),
                    stencil: DispatchTable::empty(),
                };
                for &kind in AttachmentKind::all_values() {
                    let table = match kind {
                        AttachmentKind::Color => &mut tables.color,
                        AttachmentKind::Depth => &mut tables.depth,
                        AttachmentKind::Stencil => &mut tables.stencil,
                    };
                    populate(kind, |format, mode| {
                        let worker: Box<dyn $trait> = Box::new($new(format, mode, kind)?);
                        table.insert(format, mode, worker);
                        Ok(())
                    })?;
                }

                debug!(
                    concat!("Built ", $family, " tables: {} color, {} depth, {} stencil entries"),
                    tables.color.len(),
                    tables.depth.len(),
                    tables.stencil.len()
                );
                Ok(tables)
            }

            /// The table for `kind` attachments.
            #[inline]
            pub fn table(&self, kind: AttachmentKind) -> &DispatchTable<dyn $trait> {
                match kind {
                    AttachmentKind::Color => &self.color,
                    AttachmentKind::Depth => &self.depth,
                    AttachmentKind::Stencil => &self.stencil,
                }
            }
        }
    };
}

tables!(
    /// Dispatch tables of [`load_tile`](crate::load_tile).
    LoadTables,
    LoadRasterTiles,
    MacroTileLoader::new,
    "load"
);
tables!(
    /// Dispatch tables of [`store_tile`](crate::store_tile).
    StoreTables,
    StoreRasterTiles,
    MacroTileStorer::new,
    "store"
);
tables!(
    /// Dispatch tables of [`clear_tile`](crate::clear_tile).
    ClearTables,
    ClearRasterTiles,
    |format: Format, mode: TileMode, _: AttachmentKind| MacroTileClearer::new(format, mode),
    "clear"
);

static LOAD_TABLES: OnceCell<LoadTables> = OnceCell::new();
static STORE_TABLES: OnceCell<StoreTables> = OnceCell::new();
static CLEAR_TABLES: OnceCell<ClearTables> = OnceCell::new();

/// Builds the load tables. Later calls return the existing tables.
///
/// # Errors
///
/// If a listed format has no per-pixel conversion.
pub fn try_init_load_tables() -> Result<&'static LoadTables, TileTransferError> {
    LOAD_TABLES.get_or_try_init(LoadTables::build)
}

/// Builds the store tables. Later calls return the existing tables.
///
/// # Errors
///
/// If a listed format has no per-pixel conversion.
pub fn try_init_store_tables() -> Result<&'static StoreTables, TileTransferError> {
    STORE_TABLES.get_or_try_init(StoreTables::build)
}

/// Builds the clear tables. Later calls return the existing tables.
///
/// # Errors
///
/// If a listed format has no per-pixel conversion.
pub fn try_init_clear_tables() -> Result<&'static ClearTables, TileTransferError> {
    CLEAR_TABLES.get_or_try_init(ClearTables::build)
}

/// Builds the load tables, once per process.
///
/// Must complete before any [`load_tile`](crate::load_tile) call. Later calls are no-ops.
///
/// # Panics
///
/// If the format table lists a dispatch format without a per-pixel conversion.
pub fn init_load_tables() -> &'static LoadTables {
    match try_init_load_tables() {
        Ok(tables) => tables,
        Err(e) => panic!("Failed to build load tables: {e}"),
    }
}

/// Builds the store tables, once per process.
///
/// Must complete before any [`store_tile`](crate::store_tile) call. Later calls are no-ops.
///
/// # Panics
///
/// If the format table lists a dispatch format without a per-pixel conversion.
pub fn init_store_tables() -> &'static StoreTables {
    match try_init_store_tables() {
        Ok(tables) => tables,
        Err(e) => panic!("Failed to build store tables: {e}"),
    }
}

/// Builds the clear tables, once per process.
///
/// Must complete before any [`clear_tile`](crate::clear_tile) call. Later calls are no-ops.
///
/// # Panics
///
/// If the format table lists a dispatch format without a per-pixel conversion.
pub fn init_clear_tables() -> &'static ClearTables {
    match try_init_clear_tables() {
        Ok(tables) => tables,
        Err(e) => panic!("Failed to build clear tables: {e}"),
    }
}

#[inline]
pub(crate) fn load_tables() -> Option<&'static LoadTables> {
    LOAD_TABLES.get()
}

#[inline]
pub(crate) fn store_tables() -> Option<&'static StoreTables> {
    STORE_TABLES.get()
}

#[inline]
pub(crate) fn clear_tables() -> Option<&'static ClearTables> {
    CLEAR_TABLES.get()
}
