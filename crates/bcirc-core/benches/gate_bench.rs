//! Benchmarks for gate evaluation.
//!
//! Target: tens of nanoseconds per gate, dominated by `tanh`.

use bcirc_core::{and_gate, not_gate, or_gate, prevail_gate, xor_gate, GateOp, Smoothness};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Evenly spaced input pairs covering [-1, 1]².
fn input_grid(steps: i32) -> Vec<(f64, f64)> {
    let axis: Vec<f64> = (-steps..=steps)
        .map(|i| f64::from(i) / f64::from(steps))
        .collect();
    axis.iter()
        .flat_map(|&a| axis.iter().map(move |&b| (a, b)))
        .collect()
}

fn bench_binary_gates(c: &mut Criterion) {
    for op in GateOp::ALL {
        c.bench_function(op.name(), |b| {
            b.iter(|| op.eval(black_box(0.3), black_box(-0.7)))
        });
    }
}

fn bench_grid_sweep(c: &mut Criterion) {
    let grid = input_grid(20);

    c.bench_function("xor_gate_grid_41x41", |b| {
        b.iter(|| {
            for &(x, y) in black_box(&grid) {
                let _ = black_box(xor_gate(x, y));
            }
        })
    });
}

fn bench_not_gate(c: &mut Criterion) {
    let smooth = Smoothness::new(4.0).unwrap();

    c.bench_function("not_gate_sharp", |b| {
        b.iter(|| not_gate(black_box(0.4), Smoothness::SHARP))
    });

    c.bench_function("not_gate_smooth", |b| {
        b.iter(|| not_gate(black_box(0.4), smooth))
    });
}

/// A small controller: `prevail(avoid, and(goal, not(obstacle)))`.
fn bench_chained_circuit(c: &mut Criterion) {
    let smooth = Smoothness::new(3.0).unwrap();

    c.bench_function("chained_controller", |b| {
        b.iter(|| -> bcirc_core::Result<f64> {
            let obstacle = black_box(0.6);
            let goal = black_box(0.9);
            let clear = not_gate(obstacle, smooth)?;
            let seek = and_gate(goal, clear)?;
            let avoid = or_gate(obstacle, -0.2)?;
            prevail_gate(avoid, seek)
        })
    });
}

criterion_group!(
    benches,
    bench_binary_gates,
    bench_grid_sweep,
    bench_not_gate,
    bench_chained_circuit,
);

criterion_main!(benches);
