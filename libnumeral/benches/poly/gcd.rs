#[macro_use]
extern crate criterion;
extern crate libnumeral;

use criterion::{black_box, Criterion};
use libnumeral::{Poly, _gcd_poly};

const INPUT: [(&str, &str); 3] = [
    ("x^2-1", "x^2-3x+2"),
    ("x^5+5x^4-5x^3-45x^2+108", "5x^4+20x^3-15x^2-90x"),
    ("1/2x^4-1/3x^2+1/7", "x^3-x"),
];

fn bench_poly_gcd(c: &mut Criterion) {
    let input: Vec<(Poly, Poly)> = INPUT
        .iter()
        .map(|(u, v)| (u.parse().unwrap(), v.parse().unwrap()))
        .collect();
    c.bench_function("polynomial_gcd", |b| {
        b.iter(|| {
            for (u, v) in input.iter() {
                _gcd_poly(black_box(u.clone()), black_box(v.clone()));
            }
        })
    });
}

criterion_group!(gcd_poly_bench, bench_poly_gcd);
criterion_main!(gcd_poly_bench);
