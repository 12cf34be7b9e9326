//! Criterion benchmarks for clipscope-analysis
//!
//! Run with: cargo bench -p clipscope-analysis

use clipscope_analysis::{HarmonicAnalyzer, analyze_shapers, residual, rms};
use clipscope_core::{ShaperKind, SignalConfig, generate, reference};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn bench_spectrum(c: &mut Criterion) {
    let mut group = c.benchmark_group("Harmonic_Spectrum");

    for &size in &[256usize, 1024, 4096] {
        let config = SignalConfig::default().with_sample_count(size).with_drive(3.0);
        let wave = generate(ShaperKind::Hard, &config).unwrap();
        let analyzer = HarmonicAnalyzer::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &wave, |b, wave| {
            b.iter(|| analyzer.analyze(black_box(wave)));
        });
    }

    group.finish();
}

fn bench_residual(c: &mut Criterion) {
    let config = SignalConfig::default().with_drive(3.0);
    let dry = reference(&config).unwrap();
    let wet = generate(ShaperKind::SoftTanh, &config).unwrap();

    c.bench_function("Residual_RMS_1024", |b| {
        b.iter(|| rms(&residual(black_box(&wet), black_box(&dry)).unwrap()));
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let config = SignalConfig::default().with_drive(3.0).with_knee(0.3);
    let analyzer = HarmonicAnalyzer::default();

    c.bench_function("Pipeline_All_Shapers", |b| {
        b.iter(|| analyze_shapers(ShaperKind::ALL, black_box(&config), &analyzer).unwrap());
    });
}

criterion_group!(benches, bench_spectrum, bench_residual, bench_full_pipeline);
criterion_main!(benches);
