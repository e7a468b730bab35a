use crate::errors::{ArithmeticError, Result};
use crate::integer::Integer;

impl Integer {
    /// Quotient of `self / divisor`, paired with [remainder](Integer::remainder) so that
    /// `self = quotient * divisor + remainder`.
    pub fn quotient(&self, divisor: &Integer) -> Result<Integer> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of `self / divisor`, always in `0..|divisor|`.
    pub fn remainder(&self, divisor: &Integer) -> Result<Integer> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Euclidean division.
    ///
    /// The magnitudes are divided first, giving a quotient truncated toward zero. A negative
    /// remainder is then lifted by `|divisor|` and the quotient moved one step against the sign of
    /// the divisor, which keeps `self = quotient * divisor + remainder`.
    pub fn div_rem(&self, divisor: &Integer) -> Result<(Integer, Integer)> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let magnitude = self.magnitude.quotient(&divisor.magnitude)?;
        let mut quotient = Integer::new(self.sign.product(divisor.sign), magnitude);
        let mut remainder = self.sub(&quotient.mul(divisor));
        if remainder.is_negative() {
            remainder = remainder.add(&Integer::from_natural(divisor.abs()));
            quotient = quotient.sub(&Integer::one().with_sign(divisor.sign));
        }
        Ok((quotient, remainder))
    }
}
