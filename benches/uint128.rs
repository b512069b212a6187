use uint128::primitives::{Uint128, add128, bits};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SAMPLE: Uint128 = Uint128::new(0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210);

pub fn bench_add128(c: &mut Criterion) {
    c.bench_function("add128 with carry", |b| {
        b.iter(|| add128(black_box(SAMPLE), black_box(Uint128::MAX), black_box(Uint128::ONE)))
    });
}

pub fn bench_bits(c: &mut Criterion) {
    c.bench_function("reverse", |b| b.iter(|| bits::reverse(black_box(SAMPLE))));
    c.bench_function("reverse_bytes", |b| {
        b.iter(|| bits::reverse_bytes(black_box(SAMPLE)))
    });
    c.bench_function("leading_zeros", |b| {
        b.iter(|| bits::leading_zeros(black_box(Uint128::new(0, 0x456))))
    });
}

pub fn bench_format(c: &mut Criterion) {
    c.bench_function("format decimal max", |b| {
        b.iter(|| format!("{}", black_box(Uint128::MAX)))
    });
    c.bench_function("format hex max", |b| {
        b.iter(|| format!("{:x}", black_box(Uint128::MAX)))
    });
}

criterion_group!(benches, bench_add128, bench_bits, bench_format);
criterion_main!(benches);
