// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for the fast-math approximations against their
//! libm counterparts.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use octaver_dsp_lib::fastmath::{fast_cos, fast_inv_sqrt, fast_sin, fast_sqrt};

const BUF_SIZE: usize = 1024;

/// Generate a deterministic buffer of positive magnitudes using a simple LCG.
fn magnitudes(len: usize) -> Vec<f32> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let r = ((state >> 33) as i32) as f32 / (i32::MAX as f32);
            r * r + 1e-6
        })
        .collect()
}

/// Generate a deterministic buffer of phase values in a few-revolution range.
fn phases(len: usize) -> Vec<f32> {
    let mut state: u64 = 0x0123_4567_89AB_CDEF;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32) * 20.0
        })
        .collect()
}

fn bench_inv_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv_sqrt");
    let input = magnitudes(BUF_SIZE);

    group.bench_function("fast", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &input {
                acc += fast_inv_sqrt(black_box(x));
            }
            black_box(acc)
        });
    });

    group.bench_function("libm", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &input {
                acc += black_box(x).sqrt().recip();
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");
    let input = magnitudes(BUF_SIZE);

    group.bench_function("fast", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &input {
                acc += fast_sqrt(black_box(x));
            }
            black_box(acc)
        });
    });

    group.bench_function("libm", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &x in &input {
                acc += black_box(x).sqrt();
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_sin_cos(c: &mut Criterion) {
    let mut group = c.benchmark_group("sin_cos");
    let input = phases(BUF_SIZE);

    group.bench_function("fast", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &theta in &input {
                acc += fast_sin(black_box(theta)) + fast_cos(black_box(theta));
            }
            black_box(acc)
        });
    });

    group.bench_function("libm", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for &theta in &input {
                let (s, c) = black_box(theta).sin_cos();
                acc += s + c;
            }
            black_box(acc)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_inv_sqrt, bench_sqrt, bench_sin_cos);
criterion_main!(benches);
