use crate::errors::{ArithmeticError, Result};
use crate::natural::Natural;

impl Natural {
    /// Digit-wise subtraction with borrow.
    ///
    /// The result is a natural number only when `self >= other`; otherwise
    /// [NegativeValue](ArithmeticError::NegativeValue) is returned.
    pub fn checked_sub(&self, other: &Natural) -> Result<Natural> {
        if *self < *other {
            return Err(ArithmeticError::NegativeValue);
        }
        Ok(self.sub_unchecked(other))
    }

    /// Returns `self - other * digit`, the inner step of long division.
    ///
    /// Fails if `digit` is not a decimal digit or if the result would be negative.
    pub fn sub_scaled(&self, other: &Natural, digit: u8) -> Result<Natural> {
        let scaled = other.mul_digit(digit)?;
        self.checked_sub(&scaled)
    }

    /// Subtraction for callers that already established `self >= other`.
    pub(crate) fn sub_unchecked(&self, other: &Natural) -> Natural {
        debug_assert!(*self >= *other);
        let mut result = Vec::with_capacity(self.digits.len());
        let mut borrow = 0;
        for (i, &digit) in self.digits.iter().enumerate() {
            let subtrahend = other.digits.get(i).copied().unwrap_or(0) + borrow;
            if digit < subtrahend {
                result.push(digit + 10 - subtrahend);
                borrow = 1;
            } else {
                result.push(digit - subtrahend);
                borrow = 0;
            }
        }
        // from_trusted_digits removes the zeros left behind by the borrows
        Natural::from_trusted_digits(result)
    }
}
