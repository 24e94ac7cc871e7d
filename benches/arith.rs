use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use longint::BigInt;

/// A `len` digit operand with every digit set, the worst case for carries and quotient digits.
fn operand(len: usize) -> BigInt {
    "9".repeat(len).parse().unwrap()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("BigInt add");
    for len in [16, 128, 1024] {
        let (a, b) = (operand(len), operand(len / 2));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
    }
    group.finish();
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("BigInt mul");
    for len in [16, 64, 256] {
        let (a, b) = (operand(len), operand(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }
    group.finish();
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("BigInt div");
    for len in [16, 64, 256] {
        let a = operand(2 * len);
        let b: BigInt = format!("1{}", "0".repeat(len - 1)).parse().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| black_box(&a) / black_box(&b))
        });
    }
    group.finish();
}

criterion_group!(arith_bench, bench_add, bench_mul, bench_div);
criterion_main!(arith_bench);
