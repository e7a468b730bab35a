#[macro_use]
extern crate criterion;
extern crate libnumeral;

use criterion::Criterion;
use libnumeral::{Natural, _compare};

const CASES: [&str; 5] = ["eq", "lte", "lt", "gte", "gt"];

macro_rules! bench_natural_cmp {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u: Natural = String::from_utf8(vec![b'9'; $size]).unwrap().parse().unwrap();
            let v: Natural = String::from_utf8(vec![b'5'; $size]).unwrap().parse().unwrap();
            for item in CASES.iter() {
                c.bench_function(&(concat!("Natural_", $size, "_cmp_").to_string() + (*item)), |b| {
                    b.iter(|| _compare(&u, &v, item))
                });
            }
        }
    )*
    }
}

bench_natural_cmp! {
    size_1024: 1024
    size_2048: 2048
    size_4096: 4096
}

criterion_group!(natural_cmp_benches, size_1024, size_2048, size_4096);
criterion_main!(natural_cmp_benches);
