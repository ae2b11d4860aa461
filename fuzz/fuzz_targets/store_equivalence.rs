#![no_main]

// The batched store path must write exactly the bytes of the per-pixel path.

use libfuzzer_sys::{arbitrary, fuzz_target};
use raster_tile_formats::allocate::{allocate_aligned, PAGE_ALIGNMENT};
use raster_tile_formats::format::Format;
use raster_tile_transfer::hot_tile::HotTileLayout;
use raster_tile_transfer::{
    init_store_tables, store_tile, Attachment, AttachmentKind, MacroTileCoord, SimdWidth,
    SurfaceState, SurfaceType, TileMode, TransferConfig, WorkerContext,
};

const FORMATS: [Format; 8] = [
    Format::B8G8R8A8_UNORM,
    Format::B8G8R8A8_UNORM_SRGB,
    Format::R8G8B8A8_UNORM,
    Format::R8G8B8A8_UNORM_SRGB,
    Format::B8G8R8X8_UNORM,
    Format::B5G6R5_UNORM,
    Format::R16G16B16A16_FLOAT,
    Format::R32G32B32A32_FLOAT,
];

const TILE_MODES: [TileMode; 4] = [
    TileMode::None,
    TileMode::XMajor,
    TileMode::YMajor,
    TileMode::SwrZ,
];

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct StoreInput {
    pub format: u8,
    pub tile_mode: u8,
    pub wide: bool,
    pub macro_x: bool,
    pub macro_y: bool,
    pub values: Vec<u16>,
}

fuzz_target!(|input: StoreInput| {
    init_store_tables();

    let format = FORMATS[input.format as usize % FORMATS.len()];
    let tile_mode = TILE_MODES[input.tile_mode as usize % TILE_MODES.len()];
    let simd_width = match input.wide {
        true => SimdWidth::W16,
        false => SimdWidth::W8,
    };
    if input.values.is_empty() {
        return;
    }

    // Values span slightly past [0, 1] so saturation is covered.
    let layout = HotTileLayout::new(AttachmentKind::Color, simd_width);
    let mut hot_tile = vec![0u8; layout.required_bytes(1)];
    for (chunk, value) in hot_tile
        .chunks_exact_mut(4)
        .zip(input.values.iter().cycle())
    {
        let value = f32::from(*value) / 52428.0 - 0.125;
        chunk.copy_from_slice(&value.to_le_bytes());
    }

    let (width, height) = (64u32, 64u32);
    let pitch = (width as usize * format.bytes_per_pixel()).next_multiple_of(512) as u32;
    let size = pitch as usize * height as usize;
    let coord = MacroTileCoord::new(32 * input.macro_x as u32, 32 * input.macro_y as u32, 0);

    let mut stored = Vec::new();
    for use_generic_store_tile in [false, true] {
        let Ok(mut memory) = allocate_aligned(size, PAGE_ALIGNMENT) else {
            return;
        };
        memory.as_mut_slice().fill(0);
        let surface = unsafe {
            SurfaceState::from_raw_parts(
                memory.as_mut_ptr(),
                memory.len(),
                SurfaceType::Surface2D,
                format,
                width,
                height,
                pitch,
            )
        }
        .with_tile_mode(tile_mode);
        let ctx = WorkerContext::new(
            0,
            TransferConfig {
                use_generic_store_tile,
                simd_width,
            },
        );

        store_tile(
            &ctx,
            &surface,
            None,
            Format::R32G32B32A32_FLOAT,
            Attachment::Color0,
            coord,
            &hot_tile,
        )
        .unwrap();
        stored.push(memory.as_slice().to_vec());
    }

    assert_eq!(stored[0], stored[1], "{format} on {tile_mode:?}");
});
