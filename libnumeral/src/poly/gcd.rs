use crate::errors::Result;
use crate::poly::div::long_division;
use crate::poly::Poly;

use log::trace;

impl Poly {
    /// Greatest common divisor by the Euclidean algorithm, normalized to a non-negative leading
    /// coefficient. `gcd(0, 0)` is 0.
    ///
    /// The result is not made monic: `gcd(x^2-1, x^2-2x+1)` is `2x-2`.
    pub fn gcd(&self, other: &Poly) -> Poly {
        let gcd = euclidean_gcd(self.clone(), other.clone());
        if gcd.leading_coefficient().is_negative() {
            gcd.negate()
        } else {
            gcd
        }
    }

    /// Collapses repeated roots to simple ones by dividing out `gcd(self, self')`.
    ///
    /// The gcd is made monic before dividing, so the result keeps the leading coefficient of
    /// `self`. Fails with [DivisionByZero](crate::errors::ArithmeticError::DivisionByZero) for the
    /// zero polynomial.
    pub fn square_free(&self) -> Result<Poly> {
        let gcd = self.gcd(&self.derivative());
        self.div(&gcd.monic())
    }
}

/// The [Euclidean GCD] algorithm over polynomials.
///
/// [Euclidean GCD]: https://en.wikipedia.org/wiki/Polynomial_greatest_common_divisor#Euclidean_algorithm
fn euclidean_gcd(mut u: Poly, mut v: Poly) -> Poly {
    // only the zero polynomial has no reciprocal leading coefficient
    while let Ok(inverse) = v.leading_coefficient().recip() {
        trace!("poly gcd: {} mod {}", u, v);
        let (_, r) = long_division(&u, &v, &inverse);
        u = std::mem::replace(&mut v, r);
    }
    u
}

#[cfg(feature = "benchmark-internals")]
pub fn _gcd_poly(u: Poly, v: Poly) -> Poly {
    euclidean_gcd(u, v)
}
