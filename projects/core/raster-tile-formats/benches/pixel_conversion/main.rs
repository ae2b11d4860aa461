use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use raster_tile_formats::allocate::allocate_align_64;
use raster_tile_formats::format::Format;
use raster_tile_formats::pixel::PixelCodec;
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const FORMATS: &[Format] = &[
    Format::B8G8R8A8_UNORM,
    Format::B8G8R8A8_UNORM_SRGB,
    Format::R10G10B10A2_UNORM,
    Format::R11G11B10_FLOAT,
    Format::R16G16B16A16_FLOAT,
    Format::B5G6R5_UNORM,
];

fn criterion_benchmark(c: &mut Criterion) {
    // One 32x32 macro tile worth of pixels.
    let num_pixels = 32 * 32;
    let pixels: Vec<[f32; 4]> = (0..num_pixels)
        .map(|x| {
            let v = x as f32 / num_pixels as f32;
            [v, 1.0 - v, v * 0.5, 1.0]
        })
        .collect();

    let mut group = c.benchmark_group("Pixel Conversion");
    group.throughput(criterion::Throughput::Elements(num_pixels as u64));

    for &format in FORMATS {
        let codec = PixelCodec::for_format(format).unwrap();
        let bpp = codec.bytes_per_pixel();
        let mut output = allocate_align_64(num_pixels * bpp).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", format), &format, |b, _| {
            b.iter(|| {
                for (pixel, dst) in pixels.iter().zip(output.as_mut_slice().chunks_exact_mut(bpp)) {
                    codec.encode(dst, black_box(pixel));
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("decode", format), &format, |b, _| {
            b.iter(|| {
                for src in output.as_slice().chunks_exact(bpp) {
                    black_box(codec.decode(src));
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
