use crate::natural::div::long_division;
use crate::natural::Natural;

impl Natural {
    /// Greatest common divisor. `gcd(0, 0)` is 0.
    pub fn gcd(&self, other: &Natural) -> Natural {
        euclidean_gcd(self.clone(), other.clone())
    }

    /// Least common multiple; zero if either operand is zero.
    pub fn lcm(&self, other: &Natural) -> Natural {
        if self.is_zero() || other.is_zero() {
            return Natural::zero();
        }
        let (lcm, _) = long_division(&self.mul(other), &self.gcd(other));
        lcm
    }
}

/// The [Euclidean GCD] algorithm.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Euclidean_algorithm
fn euclidean_gcd(mut u: Natural, mut v: Natural) -> Natural {
    while !v.is_zero() {
        let (_, r) = long_division(&u, &v);
        u = std::mem::replace(&mut v, r);
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _euclidean_gcd(u: Natural, v: Natural) -> Natural {
    euclidean_gcd(u, v)
}

#[cfg(test)]
mod tests {
    use crate::natural::Natural;

    const CASES: [(&str, &str, &str, &str); 9] = [
        ("13", "13", "13", "13"),
        ("37", "600", "1", "22200"),
        ("20", "100", "20", "100"),
        ("624129", "2061517", "18913", "68030061"),
        ("600", "37", "1", "22200"),
        ("100", "20", "20", "100"),
        ("0", "25", "25", "0"),
        ("25", "0", "25", "0"),
        ("0", "0", "0", "0"),
    ];

    #[test]
    fn test_gcd() {
        for (u, v, gcd, _) in CASES.iter() {
            let u: Natural = u.parse().unwrap();
            let v: Natural = v.parse().unwrap();
            assert_eq!(u.gcd(&v).to_string(), *gcd, "gcd({}, {})", u, v);
        }
    }

    #[test]
    fn test_lcm() {
        for (u, v, _, lcm) in CASES.iter() {
            let u: Natural = u.parse().unwrap();
            let v: Natural = v.parse().unwrap();
            assert_eq!(u.lcm(&v).to_string(), *lcm, "lcm({}, {})", u, v);
        }
    }

    #[test]
    fn gcd_of_large_numbers() {
        let u: Natural = "121932631137021795226185032733622923332237463801111263526900"
            .parse()
            .unwrap();
        let v: Natural = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(u.gcd(&v), v);
    }
}
