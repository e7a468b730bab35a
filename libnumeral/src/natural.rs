//! Arbitrary-precision natural numbers built directly on decimal digits.
//!
//! A [Natural] is a non-empty sequence of decimal digits stored least-significant first, so the
//! digits of `123` are `[3, 2, 1]`. Every producer trims most-significant zero digits; the only
//! sequence allowed to end in `0` is `[0]` itself, which is zero.
//!
//! All arithmetic is performed digit by digit; machine integers only ever hold a single digit or a
//! carry.

mod add;
mod compare;
mod div;
mod gcd;
mod mul;
mod sub;

pub use div::LeadingDigit;

#[cfg(feature = "benchmark-internals")]
pub use {add::_add, compare::_compare, div::_long_division, gcd::_euclidean_gcd, mul::_mul};

use crate::errors::{ArithmeticError, Result, ValueKind};

use core::convert::TryFrom;
use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Natural {
    // least significant digit first, e.g. digits of 1024 are [4, 2, 0, 1].
    digits: Vec<u8>,
}

/// Drops most-significant zero digits. An empty or all-zero sequence becomes `[0]`.
fn trim(mut digits: Vec<u8>) -> Vec<u8> {
    while digits.len() > 1 && digits[digits.len() - 1] == 0 {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

impl Natural {
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Creates a natural number from digits given least-significant first.
    ///
    /// Fails if the sequence is empty or holds a value that is not a decimal digit. Leading zero
    /// digits are permitted and trimmed.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self> {
        if digits.is_empty() {
            return Err(ArithmeticError::malformed(ValueKind::Natural, ""));
        }
        if let Some(bad) = digits.iter().find(|&&d| d > 9) {
            return Err(ArithmeticError::malformed(ValueKind::Digit, bad.to_string()));
        }
        Ok(Self::from_trusted_digits(digits))
    }

    /// Builds a natural number from digits already known to be in `0..=9`.
    pub(crate) fn from_trusted_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9));
        Self {
            digits: trim(digits),
        }
    }

    /// The digits of the number, least-significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of decimal digits. Zero has one digit.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits == [1]
    }
}

impl From<u64> for Natural {
    fn from(mut value: u64) -> Self {
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        Self::from_trusted_digits(digits)
    }
}

impl TryFrom<i64> for Natural {
    type Error = ArithmeticError;

    fn try_from(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(ArithmeticError::NegativeValue);
        }
        Ok(Natural::from(value as u64))
    }
}

impl FromStr for Natural {
    type Err = ArithmeticError;

    /// Reads an unsigned decimal digit string. Negative input is reported as
    /// [NegativeValue](ArithmeticError::NegativeValue), anything else that is not all digits as
    /// [MalformedValue](ArithmeticError::MalformedValue).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('-') && s.len() > 1 && s[1..].bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::NegativeValue);
        }
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::malformed(ValueKind::Natural, s));
        }
        Ok(Self::from_trusted_digits(
            s.bytes().rev().map(|b| b - b'0').collect(),
        ))
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let result: String = self.digits.iter().rev().map(|&d| (b'0' + d) as char).collect();
        f.write_str(&result)
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Natural::zero()
    }

    fn is_zero(&self) -> bool {
        Natural::is_zero(self)
    }
}

impl One for Natural {
    fn one() -> Self {
        Natural::one()
    }
}

#[cfg(test)]
mod tests {
    macro_rules! natural_test_roundtrip {
        ($($name:ident: $input:expr, $canonical:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::natural::Natural;
                let n: Natural = $input.parse().unwrap();
                assert_eq!(n.to_string(), $canonical);
            }
        )*
        }
    }

    macro_rules! natural_test_malformed {
        ($($name:ident: $input:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::errors::ArithmeticError;
                use crate::natural::Natural;
                assert!(matches!(
                    $input.parse::<Natural>(),
                    Err(ArithmeticError::MalformedValue { .. })
                ));
            }
        )*
        }
    }

    mod parse {
        natural_test_roundtrip! {
            zero: "0", "0"
            single: "7", "7"
            multi: "1002039444884993020", "1002039444884993020"
            leading_zeros: "000120", "120"
            all_zeros: "0000", "0"
            padded: " 42 ", "42"
        }

        natural_test_malformed! {
            empty: ""
            sign_only: "-"
            letters: "12a3"
            decimal: "1.5"
            plus: "+5"
        }
    }

    use super::*;

    #[test]
    fn negative_text_is_negative_value() {
        assert_eq!("-12".parse::<Natural>(), Err(ArithmeticError::NegativeValue));
    }

    #[test]
    fn from_digits_validates() {
        assert_eq!(
            Natural::from_digits(vec![3, 2, 1, 0, 0]).unwrap().to_string(),
            "123"
        );
        assert!(Natural::from_digits(vec![]).is_err());
        assert!(Natural::from_digits(vec![1, 10]).is_err());
    }

    #[test]
    fn from_machine_values() {
        assert_eq!(Natural::from(0u64), Natural::zero());
        assert_eq!(Natural::from(9_876_543_210u64).to_string(), "9876543210");
        assert_eq!(Natural::try_from(-1i64), Err(ArithmeticError::NegativeValue));
        assert_eq!(Natural::try_from(15i64).unwrap().digits(), &[5, 1]);
    }

    #[test]
    fn zero_is_single_digit() {
        assert_eq!(Natural::zero().digit_count(), 1);
        assert!(Natural::zero().is_zero());
        assert!(!Natural::one().is_zero());
    }
}
