use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxt_compress::block_4x4::Block4x4;
use dxt_compress::color_8888::Color8888;
use dxt_compress::{
    compress_into, compressed_size, encode_alpha_block, encode_color_block, optimize_blocks,
    CompressSettings, DxtFormat,
};
use std::hint::black_box;

// Helper to generate an RGBA image with smooth gradients and some solid regions,
// roughly resembling real texture content.
fn generate_test_image(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            if (x / 16 + y / 16) % 4 == 0 {
                pixels.extend_from_slice(&[40, 90, 200, 255]);
            } else {
                pixels.extend_from_slice(&[
                    (x * 255 / width) as u8,
                    (y * 255 / height) as u8,
                    ((x + y) % 256) as u8,
                    ((x * y) % 256) as u8,
                ]);
            }
        }
    }
    pixels
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compress Image");

    // 512x512 RGBA
    let (width, height) = (512, 512);
    let pixels = generate_test_image(width, height);
    group.throughput(Throughput::Bytes(pixels.len() as u64));

    for &format in DxtFormat::all_values() {
        for optimize_blocks in [false, true] {
            let settings = CompressSettings {
                format,
                optimize_blocks,
            };
            let mut output = vec![0u8; compressed_size(width, height, format)];
            let name = if optimize_blocks {
                format!("{format:?} optimized")
            } else {
                format!("{format:?}")
            };

            group.bench_with_input(BenchmarkId::new(name, width), &settings, |b, &settings| {
                b.iter(|| {
                    compress_into(
                        black_box(&pixels),
                        width,
                        height,
                        4,
                        settings,
                        black_box(&mut output),
                    )
                })
            });
        }
    }

    group.finish();

    let mut group = c.benchmark_group("Block Encoders");
    let block = Block4x4::from_fn(|x, y| {
        Color8888::new((x * 60) as u8, (y * 60) as u8, ((x + y) * 30) as u8, (x * y * 17) as u8)
    });

    group.bench_function("encode_color_block", |b| {
        b.iter(|| encode_color_block(black_box(&block)))
    });
    group.bench_function("encode_alpha_block", |b| {
        b.iter(|| encode_alpha_block(black_box(&block)))
    });
    group.finish();

    // Benchmark the optimizer alone on an already encoded stream.
    // Each iteration runs on a fresh copy so that it has blocks to rewrite.
    let mut group = c.benchmark_group("Optimize Blocks");
    for &format in DxtFormat::all_values() {
        let settings = CompressSettings {
            format,
            optimize_blocks: false,
        };
        let mut encoded = vec![0u8; compressed_size(width, height, format)];
        let _ = compress_into(&pixels, width, height, 4, settings, &mut encoded);

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_function(format!("{format:?}"), |b| {
            b.iter_batched_ref(
                || encoded.clone(),
                |data| optimize_blocks(black_box(data), format),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
