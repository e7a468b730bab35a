#[macro_use]
extern crate criterion;
extern crate lazy_static;
extern crate libnumeral;

use criterion::{black_box, Criterion};
use lazy_static::lazy_static;
use libnumeral::{Natural, _add};

lazy_static! {
    static ref INPUT: Vec<(Natural, Natural)> = [
        ("99999999999999999999999999999999", "999999999999999999999"),
        ("555555555555555555555555555", "555555555555555555"),
        ("123", "877"),
        ("1", "99999999999999999999999999999999999999999999999999"),
    ]
    .iter()
    .map(|(u, v)| (u.parse().unwrap(), v.parse().unwrap()))
    .collect();
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter(|| {
            for (u, v) in INPUT.iter() {
                _add(black_box(u), black_box(v));
            }
        })
    });
}

criterion_group!(add_benches, bench_add);
criterion_main!(add_benches);
