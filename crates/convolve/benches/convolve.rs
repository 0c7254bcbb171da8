//! Criterion benchmarks for the LIC kernel.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lic_convolve::{advect, convolve_partitioned, random_scalar_field, Direction};
use lic_core::{Boundary, VectorField, Velocity, Xorshift64};

/// Solid-body rotation about the grid centre.
fn vortex(size: usize) -> VectorField {
    let half = size as f64 / 2.0;
    VectorField::from_fn(size, size, |r, c| Velocity {
        col: -(r as f64 + 0.5 - half),
        row: c as f64 + 0.5 - half,
    })
    .unwrap()
}

fn bench_advect(c: &mut Criterion) {
    let vfield = vortex(128);
    let sfield = random_scalar_field(128, 128, &mut Xorshift64::new(42)).unwrap();
    c.bench_function("advect_single_streamline_64", |b| {
        b.iter(|| {
            advect(
                black_box(&vfield),
                black_box(&sfield),
                32,
                64,
                Direction::Forward,
                64,
                Boundary::Periodic,
            )
        })
    });
}

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolve_vortex");
    group.sample_size(10);
    for size in [64_usize, 128, 256] {
        let vfield = vortex(size);
        let sfield = random_scalar_field(size, size, &mut Xorshift64::new(42)).unwrap();
        for rows_per_task in [1_usize, 16] {
            group.bench_with_input(
                BenchmarkId::new(format!("{size}x{size}"), rows_per_task),
                &rows_per_task,
                |b, &rows_per_task| {
                    b.iter(|| {
                        convolve_partitioned(
                            black_box(&vfield),
                            black_box(&sfield),
                            size / 4,
                            Boundary::Periodic,
                            rows_per_task,
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_advect, bench_convolve);
criterion_main!(benches);
