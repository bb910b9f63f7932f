//! Criterion benchmarks for the full processor
//!
//! Run with: cargo bench -p ringcrush-engine
#![allow(missing_docs)]

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ringcrush_engine::{ParamKind, ParamValues, Processor, SharedParams, StreamSetup};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 220.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_chain(c: &mut Criterion, name: &str, values: ParamValues, channels: usize) {
    let mut group = c.benchmark_group(name);

    for &block_size in BLOCK_SIZES {
        let mut processor = Processor::new(Arc::new(SharedParams::from_values(&values)));
        processor
            .configure(StreamSetup::new(SAMPLE_RATE, block_size, channels))
            .unwrap();
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut buffers: Vec<Vec<f32>> = vec![input.clone(); channels];
                b.iter(|| {
                    for buf in &mut buffers {
                        buf.copy_from_slice(&input);
                    }
                    let mut slices: Vec<&mut [f32]> =
                        buffers.iter_mut().map(Vec::as_mut_slice).collect();
                    processor.process_block(black_box(&mut slices)).unwrap();
                    black_box(buffers[0][0])
                })
            },
        );
    }

    group.finish();
}

fn bench_defaults(c: &mut Criterion) {
    bench_chain(c, "Processor/defaults_stereo", ParamValues::default(), 2);
}

fn bench_full_chain(c: &mut Criterion) {
    let values = ParamValues::default()
        .with(ParamKind::Overdrive, 6.0)
        .with(ParamKind::TargetSampleRate, 0.2)
        .with(ParamKind::RingModAmount, 1.0)
        .with(ParamKind::ReverbWet, 0.5);
    bench_chain(c, "Processor/full_mono", values, 1);
    bench_chain(c, "Processor/full_stereo", values, 2);
}

criterion_group!(benches, bench_defaults, bench_full_chain);
criterion_main!(benches);
