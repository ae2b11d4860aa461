//! Process level knobs and fixed tile geometry.

use derive_enum_all_values::AllValues;
use log::warn;

/// Width of a raster tile in pixels.
pub const TILE_X_DIM: u32 = 8;
/// Height of a raster tile in pixels.
pub const TILE_Y_DIM: u32 = 8;
/// Width of a macro tile in pixels.
pub const MACRO_TILE_X_DIM: u32 = 32;
/// Height of a macro tile in pixels.
pub const MACRO_TILE_Y_DIM: u32 = 32;

/// Raster tiles along each axis of a macro tile.
pub(crate) const RASTER_TILES_X: u32 = MACRO_TILE_X_DIM / TILE_X_DIM;
pub(crate) const RASTER_TILES_Y: u32 = MACRO_TILE_Y_DIM / TILE_Y_DIM;

/// Environment variable which forces every store down the per-pixel path.
pub const ENV_USE_GENERIC_STORE: &str = "RASTER_TILE_USE_GENERIC_STORE";
/// Environment variable selecting the SIMD width (`8` or `16`).
pub const ENV_SIMD_WIDTH: &str = "RASTER_TILE_SIMD_WIDTH";

/// Number of lanes the rasterizer shades at once.
///
/// Determines the shape of a SIMD tile inside the hot tile, and with it the lane interleave
/// and the store pixels pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum SimdWidth {
    /// 8 lanes, 4x2 pixel SIMD tiles.
    W8,
    /// 16 lanes, 8x2 pixel SIMD tiles.
    #[default]
    W16,
}

impl SimdWidth {
    /// Lanes per SIMD tile.
    #[inline(always)]
    pub const fn lanes(self) -> usize {
        match self {
            SimdWidth::W8 => 8,
            SimdWidth::W16 => 16,
        }
    }

    /// Width of a SIMD tile in pixels.
    #[inline(always)]
    pub const fn tile_width(self) -> u32 {
        match self {
            SimdWidth::W8 => 4,
            SimdWidth::W16 => 8,
        }
    }

    /// Height of a SIMD tile in pixels. Always 2.
    #[inline(always)]
    pub const fn tile_height(self) -> u32 {
        2
    }

    /// SIMD tiles per raster tile.
    #[inline(always)]
    pub const fn tiles_per_raster_tile(self) -> usize {
        ((TILE_X_DIM / self.tile_width()) * (TILE_Y_DIM / self.tile_height())) as usize
    }
}

/// Settings shared by every transfer in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferConfig {
    /// Store every pixel through the per-pixel path, never the batched converters.
    pub use_generic_store_tile: bool,
    /// Lane layout of the hot tiles handed to the engines.
    pub simd_width: SimdWidth,
}

impl TransferConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Unset variables keep their defaults. Values that cannot be parsed are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_USE_GENERIC_STORE) {
            match parse_flag(&value) {
                Some(flag) => config.use_generic_store_tile = flag,
                None => warn!(
                    "Ignoring {ENV_USE_GENERIC_STORE}={value:?}, expected 0/1/true/false"
                ),
            }
        }

        if let Some(value) = lookup(ENV_SIMD_WIDTH) {
            match value.trim() {
                "8" => config.simd_width = SimdWidth::W8,
                "16" => config.simd_width = SimdWidth::W16,
                _ => warn!("Ignoring {ENV_SIMD_WIDTH}={value:?}, expected 8 or 16"),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value == "1" || value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Per call context handed to every engine entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerContext {
    /// Index of the calling worker thread.
    pub worker_id: u32,
    /// Process level settings.
    pub config: TransferConfig,
}

impl WorkerContext {
    /// Creates a context for worker `worker_id`.
    pub fn new(worker_id: u32, config: TransferConfig) -> Self {
        Self { worker_id, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = TransferConfig::from_lookup(|_| None);
        assert_eq!(config, TransferConfig::default());
        assert_eq!(config.simd_width, SimdWidth::W16);
        assert!(!config.use_generic_store_tile);
    }

    #[rstest]
    #[case("1", true)]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("0", false)]
    #[case(" false ", false)]
    fn generic_store_flag_is_parsed(#[case] value: &str, #[case] expected: bool) {
        let vars = [(ENV_USE_GENERIC_STORE, value)];
        assert_eq!(
            TransferConfig::from_lookup(lookup(&vars)).use_generic_store_tile,
            expected
        );
    }

    #[rstest]
    #[case("8", SimdWidth::W8)]
    #[case("16", SimdWidth::W16)]
    fn simd_width_is_parsed(#[case] value: &str, #[case] expected: SimdWidth) {
        let vars = [(ENV_SIMD_WIDTH, value)];
        assert_eq!(TransferConfig::from_lookup(lookup(&vars)).simd_width, expected);
    }

    #[test_log::test]
    fn bad_values_are_ignored() {
        let vars = [(ENV_USE_GENERIC_STORE, "maybe"), (ENV_SIMD_WIDTH, "32")];
        assert_eq!(
            TransferConfig::from_lookup(lookup(&vars)),
            TransferConfig::default()
        );
    }

    #[test]
    fn simd_tiles_cover_a_raster_tile() {
        for &width in SimdWidth::all_values() {
            let pixels = width.tile_width() * width.tile_height();
            assert_eq!(pixels as usize, width.lanes());
            assert_eq!(
                width.tiles_per_raster_tile() * width.lanes(),
                (TILE_X_DIM * TILE_Y_DIM) as usize
            );
        }
    }
}
