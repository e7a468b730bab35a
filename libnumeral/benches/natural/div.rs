#[macro_use]
extern crate criterion;
extern crate libnumeral;

use criterion::Criterion;
use libnumeral::{Natural, _long_division};

macro_rules! bench_long_division {
    ($($name: ident: $size: expr)*)=> {
        $(
        fn $name(c: &mut Criterion) -> () {
            let u: Natural = String::from_utf8(vec![b'9'; 2 * $size]).unwrap().parse().unwrap();
            let v: Natural = String::from_utf8(vec![b'7'; $size]).unwrap().parse().unwrap();
            let mut group = c.benchmark_group("long_division");
            group.sample_size(10);
            group.bench_function(concat!("Natural_", $size, "_div"), |b| {
                b.iter(|| _long_division(&u, &v))
            });
            group.finish();
        }
    )*
    }
}

bench_long_division! {
    size_16: 16
    size_64: 64
    size_256: 256
}

criterion_group!(div_benches, size_16, size_64, size_256);
criterion_main!(div_benches);
