use crate::errors::Result;
use crate::poly::Poly;
use crate::rational::Rational;

use log::trace;

impl Poly {
    /// The quotient of polynomial long division.
    pub fn div(&self, divisor: &Poly) -> Result<Poly> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// The remainder of polynomial long division; its degree is below that of `divisor` unless it
    /// is zero.
    pub fn rem(&self, divisor: &Poly) -> Result<Poly> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Divides `self` by `divisor`, returning `(quotient, remainder)`.
    ///
    /// Fails with [DivisionByZero](crate::errors::ArithmeticError::DivisionByZero) if `divisor`
    /// is the zero polynomial.
    ///
    /// # Examples:
    ///
    /// ```ignore
    /// // (x^2 - 1) / (x - 1) -> ((x + 1), 0)
    /// assert_eq!(poly![1, 0, -1].div_rem(&poly![1, -1]), Ok((poly![1, 1], poly![])));
    /// ```
    pub fn div_rem(&self, divisor: &Poly) -> Result<(Poly, Poly)> {
        let inverse = divisor.leading_coefficient().recip()?;
        Ok(long_division(self, divisor, &inverse))
    }
}

/// Polynomial long division by a nonzero `divisor` whose leading coefficient has reciprocal
/// `inverse`.
pub(crate) fn long_division(dividend: &Poly, divisor: &Poly, inverse: &Rational) -> (Poly, Poly) {
    debug_assert!(!divisor.is_zero());
    if dividend.degree() < divisor.degree() {
        return (Poly::zero(), dividend.clone());
    }

    let mut quotient = vec![Rational::zero(); dividend.degree() - divisor.degree() + 1];
    let mut remainder = dividend.clone();
    // the zero remainder has degree 0 and must end the loop on its own
    while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
        let shift = remainder.degree() - divisor.degree();
        let term = remainder.leading_coefficient().mul(inverse);
        trace!("poly division: {} x^{} into {}", term, shift, remainder);
        remainder = remainder.sub(&divisor.scale(&term).shift(shift));
        quotient[shift] = term;
    }
    (Poly::new(quotient), remainder)
}

#[cfg(test)]
mod tests {
    macro_rules! poly_test_div {
        ($($name: ident: $lhs:expr, $rhs:expr, $quotient:expr, $remainder:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::poly::Poly;
                let lhs: Poly = $lhs.parse().unwrap();
                let rhs: Poly = $rhs.parse().unwrap();
                let (quotient, remainder) = lhs.div_rem(&rhs).unwrap();
                assert_eq!(quotient.to_string(), $quotient);
                assert_eq!(remainder.to_string(), $remainder);
                assert_eq!(quotient.mul(&rhs).add(&remainder), lhs);
            }
        )*
        }
    }

    mod div {
        poly_test_div! {
            difference_of_squares: "x^2-1", "x-1", "x+1", "0"
            with_remainder: "x^2-2x", "x+1", "x-3", "3"
            lower_degree: "x^2-1", "2x^3-4", "0", "x^2-1"
            constant_divisor: "4x^2+2", "2", "2x^2+1", "0"
            fractional_quotient: "x^2+1", "2x", "1/2x", "1"
            sparse: "x^4-1", "x^2+1", "x^2-1", "0"
            zero_dividend: "0", "x+1", "0", "0"
            self_div: "3x^3-x", "3x^3-x", "1", "0"
        }
    }

    use crate::errors::ArithmeticError;
    use crate::poly::Poly;

    #[test]
    fn division_by_zero_polynomial() {
        let p = poly![1, 0, -1];
        assert_eq!(p.div(&Poly::zero()), Err(ArithmeticError::DivisionByZero));
        assert_eq!(p.rem(&poly![]), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn quotient_and_remainder_agree_with_div_rem() {
        let lhs = poly![1, 0, 0, -2];
        let rhs = poly![1, 1];
        assert_eq!(lhs.div(&rhs).unwrap(), poly![1, -1, 1]);
        assert_eq!(lhs.rem(&rhs).unwrap(), poly![-3]);
    }
}
