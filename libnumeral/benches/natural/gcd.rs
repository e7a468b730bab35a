#[macro_use]
extern crate criterion;
extern crate libnumeral;

use criterion::{black_box, Criterion};
use libnumeral::{Natural, _euclidean_gcd};

const INPUT: [(u64, u64); 4] = [
    (288_481, 22_783),
    (939_841_321, 28_847_717),
    (48_812, 284_829),
    (12_200_160_415_121_876_738, 7_540_113_804_746_346_429),
];

fn bench_euclidean_gcd(c: &mut Criterion) {
    let input: Vec<(Natural, Natural)> = INPUT
        .iter()
        .map(|&(u, v)| (Natural::from(u), Natural::from(v)))
        .collect();
    c.bench_function("euclidean_gcd", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                _euclidean_gcd(black_box(u.clone()), black_box(v.clone()));
            }
        })
    });
}

criterion_group!(gcd_benches, bench_euclidean_gcd);
criterion_main!(gcd_benches);
