use crate::errors::{ArithmeticError, Result};
use crate::natural::Natural;

use log::trace;

/// The leading digit of a quotient together with its decimal position.
///
/// `digit * 10^position` is the largest single-digit multiple of a power of ten for which
/// `divisor * digit * 10^position` does not exceed the dividend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadingDigit {
    pub digit: u8,
    pub position: usize,
}

impl LeadingDigit {
    /// The estimate as a natural number, `digit * 10^position`.
    pub fn value(&self) -> Natural {
        Natural::from_trusted_digits(vec![self.digit]).mul_pow10(self.position)
    }
}

impl Natural {
    /// Estimates the leading digit of `self / divisor`.
    ///
    /// The position starts at `k = len(self) - len(divisor)`, dropping to `k - 1` when
    /// `divisor * 10^k` already exceeds `self`. The digit is found by probing `d + 1` upward while
    /// `divisor * 10^k * (d + 1) <= self`. If `self < divisor`, the estimate is zero.
    pub fn estimate_digit(&self, divisor: &Natural) -> Result<LeadingDigit> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(leading_digit(self, divisor))
    }

    /// The integer quotient of `self / divisor`.
    pub fn quotient(&self, divisor: &Natural) -> Result<Natural> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// The remainder of `self / divisor`, always less than `divisor`.
    pub fn remainder(&self, divisor: &Natural) -> Result<Natural> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Quotient and remainder of `self / divisor` by long division.
    pub fn div_rem(&self, divisor: &Natural) -> Result<(Natural, Natural)> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(long_division(self, divisor))
    }

    /// Quotient for callers that already established a nonzero divisor.
    pub(crate) fn quotient_unchecked(&self, divisor: &Natural) -> Natural {
        long_division(self, divisor).0
    }
}

fn leading_digit(dividend: &Natural, divisor: &Natural) -> LeadingDigit {
    if dividend < divisor {
        return LeadingDigit {
            digit: 0,
            position: 0,
        };
    }

    let mut position = dividend.digit_count() - divisor.digit_count();
    let mut shifted = divisor.mul_pow10(position);
    if *dividend < shifted {
        // dividend >= divisor, so position is at least 1 here
        position -= 1;
        shifted = divisor.mul_pow10(position);
    }

    let mut digit = 0;
    while digit < 9 && shifted.scale(digit + 1) <= *dividend {
        digit += 1;
    }
    LeadingDigit { digit, position }
}

/// Classic long division, producing one quotient digit per iteration.
///
/// The divisor must be nonzero.
pub(crate) fn long_division(dividend: &Natural, divisor: &Natural) -> (Natural, Natural) {
    debug_assert!(!divisor.is_zero());
    if dividend < divisor {
        return (Natural::zero(), dividend.clone());
    }

    let mut quotient = vec![0; dividend.digit_count() - divisor.digit_count() + 1];
    let mut remainder = dividend.clone();
    while remainder >= *divisor {
        let LeadingDigit { digit, position } = leading_digit(&remainder, divisor);
        trace!(
            "long division: digit {} at position {} of {} / {}",
            digit,
            position,
            remainder,
            divisor
        );
        remainder = remainder.sub_unchecked(&divisor.mul_pow10(position).scale(digit));
        // every position is visited at most once, so this never exceeds 9
        quotient[position] += digit;
    }
    (Natural::from_trusted_digits(quotient), remainder)
}

#[cfg(feature = "benchmark-internals")]
pub fn _long_division(u: &Natural, v: &Natural) -> (Natural, Natural) {
    long_division(u, v)
}
