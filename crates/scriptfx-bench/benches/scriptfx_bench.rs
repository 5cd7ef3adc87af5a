//! Benchmarks for the scriptfx adapter and registry.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use scriptfx_core::{from_script, to_script, FrameView, FrameViewMut, ScriptImage};
use scriptfx_filters::{script_library, FilterKind, FilterParams};

/// Benchmark the host-to-engine buffer conversion.
fn bench_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapter");

    for &(w, h) in [(640u32, 480u32), (1920, 1080)].iter() {
        let channels = 4u32;
        let data: Vec<f32> = (0..(w * h * channels) as usize)
            .map(|i| (i % 255) as f32 / 255.0)
            .collect();
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));

        group.bench_with_input(
            BenchmarkId::new("to_script", format!("{w}x{h}")),
            &data,
            |b, data| {
                let view = FrameView::new(data, w, h, channels).expect("valid layout");
                b.iter(|| to_script(black_box(&view)))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("from_script", format!("{w}x{h}")),
            &data,
            |b, data| {
                let view = FrameView::new(data, w, h, channels).expect("valid layout");
                let img = to_script(&view);
                let mut out = vec![0.0_f32; data.len()];
                b.iter(|| {
                    let mut dst = FrameViewMut::new(&mut out, w, h, channels).expect("valid layout");
                    from_script(black_box(&img), &mut dst)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("from_script_shrunk", format!("{w}x{h}")),
            &data,
            |b, data| {
                let img = ScriptImage::new(w / 2, h / 2, 3);
                let mut out = vec![0.0_f32; data.len()];
                b.iter(|| {
                    let mut dst = FrameViewMut::new(&mut out, w, h, channels).expect("valid layout");
                    from_script(black_box(&img), &mut dst)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark encode/decode of stored presets.
fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let stored: Vec<_> = FilterKind::CATALOG
        .iter()
        .map(|&k| FilterParams::default_for(k).encode())
        .collect();

    group.bench_function("encode_catalog", |b| {
        b.iter(|| {
            for kind in FilterKind::CATALOG {
                black_box(FilterParams::default_for(kind).encode());
            }
        })
    });

    group.bench_function("decode_catalog", |b| {
        b.iter(|| {
            for s in &stored {
                black_box(FilterParams::decode(black_box(s)));
            }
        })
    });

    group.bench_function("script_library", |b| b.iter(|| black_box(script_library())));

    group.finish();
}

criterion_group!(benches, bench_adapter, bench_registry);
criterion_main!(benches);
