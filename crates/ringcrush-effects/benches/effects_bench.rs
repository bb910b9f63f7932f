//! Criterion benchmarks for the ringcrush stages
//!
//! Run with: cargo bench -p ringcrush-effects
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ringcrush_core::Effect;
use ringcrush_effects::{RateReducer, Reverb, ReverbParams, RingMod, Saturator};

const SAMPLE_RATE: f32 = 44100.0;
const BLOCK_SIZES: &[usize] = &[64, 256, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_effect<E: Effect>(c: &mut Criterion, name: &str, mut effect: E) {
    let mut group = c.benchmark_group(name);

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                let mut output = vec![0.0; block_size];
                b.iter(|| {
                    effect.process_block(black_box(&input), &mut output);
                    black_box(output[0])
                })
            },
        );
    }

    group.finish();
}

fn bench_saturator(c: &mut Criterion) {
    let mut effect = Saturator::new();
    effect.set_drive(4.0);
    bench_effect(c, "Saturator", effect);
}

fn bench_rate_reducer(c: &mut Criterion) {
    let mut effect = RateReducer::new(SAMPLE_RATE);
    effect.set_ratio(0.2);
    bench_effect(c, "RateReducer", effect);
}

fn bench_ring_mod(c: &mut Criterion) {
    let mut effect = RingMod::new(SAMPLE_RATE);
    effect.set_frequency(440.0);
    effect.set_amount(0.8);
    bench_effect(c, "RingMod", effect);
}

fn bench_reverb(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reverb");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);

        group.bench_with_input(
            BenchmarkId::new("stereo", block_size),
            &block_size,
            |b, _| {
                let mut reverb = Reverb::new(SAMPLE_RATE);
                reverb.set_params(ReverbParams::chain_room(0.4));
                let mut left = input.clone();
                let mut right = input.clone();
                b.iter(|| {
                    left.copy_from_slice(&input);
                    right.copy_from_slice(&input);
                    reverb.process_stereo(black_box(&mut left), black_box(&mut right));
                    black_box(left[0])
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_saturator,
    bench_rate_reducer,
    bench_ring_mod,
    bench_reverb,
);

criterion_main!(benches);
