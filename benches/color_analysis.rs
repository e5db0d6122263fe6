use criterion::{black_box, criterion_group, criterion_main, Criterion};
use undertone_scan::{
    is_skin_tone, Pixel, PixelBuffer, ScanConfig, UndertoneClassifier,
};

/// Synthetic 1920x1080 frame mixing skin and background pixels
fn synthetic_frame() -> PixelBuffer {
    let pixels = (0..1920u32 * 1080)
        .map(|i| {
            let r = 100 + (i % 150) as u8;
            let g = 60 + (i % 131) as u8;
            let b = 40 + (i % 113) as u8;
            Pixel::new(r, g, b)
        })
        .collect();
    PixelBuffer::from_pixels(pixels).expect("frame is non-empty")
}

fn benchmark_skin_filter(c: &mut Criterion) {
    c.bench_function("is_skin_tone", |b| {
        b.iter(|| is_skin_tone(black_box(200), black_box(120), black_box(90)))
    });
}

fn benchmark_classification(c: &mut Criterion) {
    let frame = synthetic_frame();

    let sequential = UndertoneClassifier::new().with_scan(ScanConfig {
        parallel: false,
        ..ScanConfig::default()
    });
    c.bench_function("classify_1080p_sequential", |b| {
        b.iter(|| sequential.classify(black_box(&frame)))
    });

    let parallel = UndertoneClassifier::new();
    c.bench_function("classify_1080p_parallel", |b| {
        b.iter(|| parallel.classify(black_box(&frame)))
    });
}

criterion_group!(benches, benchmark_skin_filter, benchmark_classification);
criterion_main!(benches);
