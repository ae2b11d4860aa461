use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_tile_formats::allocate::{allocate_aligned, PAGE_ALIGNMENT};
use raster_tile_formats::format::Format;
use raster_tile_transfer::hot_tile::HotTileLayout;
use raster_tile_transfer::{
    clear_tile, init_clear_tables, init_load_tables, init_store_tables, load_tile, store_tile,
    Attachment, AttachmentKind, MacroTileCoord, SimdWidth, SurfaceState, SurfaceType, TileMode,
    TransferConfig, WorkerContext,
};
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const SIZE: u32 = 256;

const CASES: &[(Format, TileMode)] = &[
    (Format::B8G8R8A8_UNORM, TileMode::None),
    (Format::B8G8R8A8_UNORM, TileMode::YMajor),
    (Format::R8G8B8A8_UNORM_SRGB, TileMode::XMajor),
    (Format::B5G6R5_UNORM, TileMode::SwrZ),
    (Format::R16G16B16A16_FLOAT, TileMode::YMajor),
    (Format::R10G10B10A2_UNORM, TileMode::None),
];

fn contexts() -> [(&'static str, WorkerContext); 2] {
    let config = TransferConfig::default();
    [
        ("fast", WorkerContext::new(0, config)),
        (
            "generic",
            WorkerContext::new(
                0,
                TransferConfig {
                    use_generic_store_tile: true,
                    ..config
                },
            ),
        ),
    ]
}

fn macro_tiles() -> impl Iterator<Item = MacroTileCoord> {
    (0..SIZE)
        .step_by(32)
        .flat_map(|y| (0..SIZE).step_by(32).map(move |x| MacroTileCoord::new(x, y, 0)))
}

fn criterion_benchmark(c: &mut Criterion) {
    init_load_tables();
    init_store_tables();
    init_clear_tables();

    let layout = HotTileLayout::new(AttachmentKind::Color, SimdWidth::W16);
    let mut hot_tile = vec![0u8; layout.required_bytes(1)];
    for (x, chunk) in hot_tile.chunks_exact_mut(4).enumerate() {
        let v = (x % 97) as f32 / 96.0;
        chunk.copy_from_slice(&v.to_le_bytes());
    }

    let mut group = c.benchmark_group("Store Tile");
    group.throughput(criterion::Throughput::Elements((SIZE * SIZE) as u64));

    for &(format, tile_mode) in CASES {
        let pitch = SIZE * format.bytes_per_pixel() as u32;
        let mut memory = allocate_aligned((pitch * SIZE) as usize, PAGE_ALIGNMENT).unwrap();
        let surface = unsafe {
            SurfaceState::from_raw_parts(
                memory.as_mut_ptr(),
                memory.len(),
                SurfaceType::Surface2D,
                format,
                SIZE,
                SIZE,
                pitch,
            )
        }
        .with_tile_mode(tile_mode);
        let name = format!("{format}_{tile_mode:?}");

        for (path, ctx) in contexts() {
            group.bench_with_input(BenchmarkId::new(path, &name), &ctx, |b, ctx| {
                b.iter(|| {
                    for coord in macro_tiles() {
                        store_tile(
                            ctx,
                            &surface,
                            None,
                            Format::R32G32B32A32_FLOAT,
                            Attachment::Color0,
                            coord,
                            black_box(&hot_tile),
                        )
                        .unwrap();
                    }
                })
            });
        }

        let ctx = WorkerContext::default();
        let mut loaded = vec![0u8; hot_tile.len()];
        group.bench_with_input(BenchmarkId::new("load", &name), &ctx, |b, ctx| {
            b.iter(|| {
                for coord in macro_tiles() {
                    load_tile(
                        ctx,
                        &surface,
                        None,
                        Format::R32G32B32A32_FLOAT,
                        Attachment::Color0,
                        coord,
                        &mut loaded,
                    )
                    .unwrap();
                }
                black_box(&loaded);
            })
        });

        group.bench_with_input(BenchmarkId::new("clear", &name), &ctx, |b, ctx| {
            b.iter(|| {
                for coord in macro_tiles() {
                    let color = black_box(&[0.25, 0.5, 0.75, 1.0]);
                    clear_tile(ctx, &surface, Attachment::Color0, coord, color).unwrap();
                }
            })
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
