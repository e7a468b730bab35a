#![no_main]
use libfuzzer_sys::fuzz_target;

use libnumeral::Poly;

/// Whether `input` names a power with more than four digits, which would allocate a huge
/// coefficient vector.
fn has_huge_power(input: &str) -> bool {
    input.split('^').skip(1).any(|rest| {
        rest.chars()
            .filter(|c| !c.is_whitespace())
            .take_while(|c| c.is_ascii_digit())
            .count()
            > 4
    })
}

fuzz_target!(|input: String| {
    if has_huge_power(&input) {
        return;
    }
    if let Ok(poly) = input.parse::<Poly>() {
        let emitted = poly.to_string();
        let reparsed: Poly = emitted
            .parse()
            .unwrap_or_else(|err| panic!("{:?} emitted as {:?}, which fails: {}", input, emitted, err));
        assert_eq!(poly, reparsed, "{:?} emitted as {:?}", input, emitted);
    }
});
