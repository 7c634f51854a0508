//! Performance measurement for the incremental edge-matched fill

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pairleroy::algorithm::AutoFill;
use pairleroy::io::configuration::GameConfig;
use pairleroy::math::Xorshift32;
use pairleroy::spatial::Board;
use std::hint::black_box;

/// Measures fill cost as the board radius grows
fn bench_fill_by_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("autofill_run");
    let config = GameConfig::default();

    for radius in &[1_i32, 2, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(radius), radius, |b, &radius| {
            b.iter(|| {
                let mut board = Board::new(radius, 40.0);
                let mut fill = AutoFill::new();
                let mut rng = Xorshift32::new(12345);
                let (placed, _) = fill.run(&mut board, &config, &mut rng);
                black_box(placed);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill_by_radius);
criterion_main!(benches);
