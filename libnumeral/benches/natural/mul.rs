#[macro_use]
extern crate criterion;
extern crate libnumeral;

use criterion::Criterion;
use libnumeral::{Natural, _mul};

macro_rules! bench_mul {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u: Natural = String::from_utf8(vec![b'9'; $size]).unwrap().parse().unwrap();
            let v: Natural = String::from_utf8(vec![b'5'; $size]).unwrap().parse().unwrap();
            let mut group = c.benchmark_group("mul");
            group.sample_size(10);
            group.bench_function(concat!("Natural_", $size, "_mul"), |b| {
                b.iter(|| _mul(&u, &v))
            });
            group.finish();
        }
    )*
    }
}

bench_mul! {
    size_64: 64
    size_256: 256
    size_1024: 1024
}

criterion_group!(bench_mul, size_64, size_256, size_1024);
criterion_main!(bench_mul);
