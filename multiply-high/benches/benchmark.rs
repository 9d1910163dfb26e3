use criterion::{black_box, criterion_group, criterion_main, Criterion};
use multiply_high::strategies::{Portable, Wide};
use multiply_high::{HighMultiplyStrategy, ACTIVE_STRATEGY};
use rand::random;

// The number of products computed during one benchmark iteration.
const N_MUL: usize = 1_000;

fn operands<T>(mut gen: impl FnMut() -> T) -> Vec<(T, T)> {
    (0..N_MUL).map(|_| (gen(), gen())).collect()
}

fn bench_strategy<S: HighMultiplyStrategy>(c: &mut Criterion) {
    let signed = operands(random::<i64>);
    let unsigned = operands(random::<u64>);

    c.bench_function(&format!("{}_signed_high", S::KIND), |b| {
        b.iter(|| {
            signed.iter().for_each(|&(x, y)| {
                black_box(S::signed_high(black_box(x), black_box(y)));
            })
        })
    });
    c.bench_function(&format!("{}_unsigned_high", S::KIND), |b| {
        b.iter(|| {
            unsigned.iter().for_each(|&(x, y)| {
                black_box(S::unsigned_high(black_box(x), black_box(y)));
            })
        })
    });
}

fn portable(c: &mut Criterion) {
    bench_strategy::<Portable>(c);
}

fn wide(c: &mut Criterion) {
    bench_strategy::<Wide>(c);
}

#[cfg(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri)))]
fn intrinsic(c: &mut Criterion) {
    bench_strategy::<multiply_high::strategies::Intrinsic>(c);
}

#[cfg(not(all(any(target_arch = "x86_64", target_arch = "aarch64"), not(miri))))]
fn intrinsic(_: &mut Criterion) {}

fn active(c: &mut Criterion) {
    let unsigned = operands(random::<u64>);
    c.bench_function(&format!("active_{ACTIVE_STRATEGY}_unsigned_high"), |b| {
        b.iter(|| {
            unsigned.iter().for_each(|&(x, y)| {
                black_box(multiply_high::unsigned_high_multiply(
                    black_box(x),
                    black_box(y),
                ));
            })
        })
    });
}

criterion_group!(benches, portable, wide, intrinsic, active);
criterion_main!(benches);
