//! Benchmarks for the noise function grid and the sequential generator.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use squirrel_noise::*;

const ITERATIONS: u64 = 10_000;

/// Sum ITERATIONS calls of a 32-bit noise function over a sliding input.
macro_rules! bench_noise32 {
  ($group:expr, $name:ident, $f:expr) => {
    $group.bench_function(stringify!($name), |b| {
      let f = $f;
      b.iter(|| {
        let mut sum = 0u32;
        for i in 0..ITERATIONS as i32 {
          sum = sum.wrapping_add(f(black_box(i)));
        }
        sum
      })
    });
  };
}

/// Sum ITERATIONS calls of a 64-bit noise function over a sliding input.
macro_rules! bench_noise64 {
  ($group:expr, $name:ident, $f:expr) => {
    $group.bench_function(stringify!($name), |b| {
      let f = $f;
      b.iter(|| {
        let mut sum = 0u64;
        for i in 0..ITERATIONS as i64 {
          sum = sum.wrapping_add(f(black_box(i)));
        }
        sum
      })
    });
  };
}

fn noise_benchmarks(c: &mut Criterion) {
  let mut group = c.benchmark_group("noise32");
  group.throughput(Throughput::Elements(ITERATIONS));
  bench_noise32!(group, noise_1d_u32, |i: i32| noise_1d_u32(i, 42));
  bench_noise32!(group, noise_2d_u32, |i: i32| noise_2d_u32(i, i ^ 0x5555, 42));
  bench_noise32!(group, noise_3d_u32, |i: i32| noise_3d_u32(
    i,
    i ^ 0x5555,
    i.wrapping_mul(3),
    42
  ));
  bench_noise32!(group, noise_4d_u32, |i: i32| noise_4d_u32(
    i,
    i ^ 0x5555,
    i.wrapping_mul(3),
    i.rotate_left(7),
    42
  ));
  bench_noise32!(group, noise_1d_f32, |i: i32| noise_1d_f32(i, 42).to_bits());
  group.finish();

  let mut group = c.benchmark_group("noise64");
  group.throughput(Throughput::Elements(ITERATIONS));
  bench_noise64!(group, noise_1d_u64, |i: i64| noise_1d_u64(i, 42));
  bench_noise64!(group, noise_2d_u64, |i: i64| noise_2d_u64(i, i ^ 0x5555, 42));
  bench_noise64!(group, noise_3d_u64, |i: i64| noise_3d_u64(
    i,
    i ^ 0x5555,
    i.wrapping_mul(3),
    42
  ));
  bench_noise64!(group, noise_4d_u64, |i: i64| noise_4d_u64(
    i,
    i ^ 0x5555,
    i.wrapping_mul(3),
    i.rotate_left(7),
    42
  ));
  group.finish();

  let mut group = c.benchmark_group("rng");
  group.throughput(Throughput::Elements(ITERATIONS));
  group.bench_function("noise_rng_next_u32", |b| {
    b.iter(|| {
      let mut rng = NoiseRng::new(black_box(42));
      let mut sum = 0u32;
      for _ in 0..ITERATIONS {
        sum = sum.wrapping_add(rng.next_u32());
      }
      sum
    })
  });
  group.finish();
}

criterion_group!(benches, noise_benchmarks);
criterion_main!(benches);
