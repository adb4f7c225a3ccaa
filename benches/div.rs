use decnum::{Cancel, Number};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn n(s: &str, cancel: &Cancel) -> Number {
    Number::parse(s, 10, cancel).unwrap()
}

pub fn bench_div_small(c: &mut Criterion) {
    let cancel = Cancel::new();
    let a = n("1", &cancel);
    let b = n("3", &cancel);
    c.bench_function("div 1/3 scale 50", |bch| {
        bch.iter(|| black_box(&a).div(black_box(&b), 50, &cancel).unwrap())
    });
}

pub fn bench_div_large(c: &mut Criterion) {
    let cancel = Cancel::new();
    let a = n(&"9".repeat(128), &cancel);
    let b = n(&"7".repeat(64), &cancel);
    c.bench_function("div 128 digits by 64 digits", |bch| {
        bch.iter(|| black_box(&a).div(black_box(&b), 20, &cancel).unwrap())
    });
}

criterion_group!(benches, bench_div_small, bench_div_large);
criterion_main!(benches);
