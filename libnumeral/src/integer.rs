//! Signed integers: a sign tag over a [Natural] magnitude.
//!
//! Zero is always positive; every constructor normalizes a zero magnitude to [Sign::Positive], so
//! there is no signed zero.

mod add;
mod div;
mod mul;

use crate::errors::{ArithmeticError, Result, ValueKind};
use crate::natural::Natural;

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// The sign of a product of two values with signs `self` and `other`.
    fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    fn flip(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Three-way classification of an integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Signum {
    Negative,
    Zero,
    Positive,
}

impl fmt::Display for Signum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Signum::Negative => "negative",
            Signum::Zero => "zero",
            Signum::Positive => "positive",
        })
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Integer {
    sign: Sign,
    magnitude: Natural,
}

impl Integer {
    /// Creates an integer from a sign and a magnitude. A zero magnitude is always positive.
    pub fn new(sign: Sign, magnitude: Natural) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    pub fn zero() -> Self {
        Self::from_natural(Natural::zero())
    }

    pub fn one() -> Self {
        Self::from_natural(Natural::one())
    }

    /// Promotes a natural number; the result is never negative.
    pub fn from_natural(n: Natural) -> Self {
        Self::new(Sign::Positive, n)
    }

    /// Converts a non-negative integer back to a natural number.
    pub fn to_natural(&self) -> Result<Natural> {
        match self.sign {
            Sign::Positive => Ok(self.magnitude.clone()),
            Sign::Negative => Err(ArithmeticError::NegativeConversion(self.to_string())),
        }
    }

    #[inline]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// The absolute value, as a natural number.
    pub fn abs(&self) -> Natural {
        self.magnitude.clone()
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Classifies the integer, checking for zero before consulting the sign.
    pub fn signum(&self) -> Signum {
        if self.magnitude.is_zero() {
            return Signum::Zero;
        }
        match self.sign {
            Sign::Positive => Signum::Positive,
            Sign::Negative => Signum::Negative,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Multiplies by -1. Zero stays positive.
    pub fn negate(&self) -> Integer {
        Integer::new(self.sign.flip(), self.magnitude.clone())
    }
}

forward_neg!(Integer);

impl From<Natural> for Integer {
    fn from(n: Natural) -> Self {
        Integer::from_natural(n)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Integer::new(sign, Natural::from(value.unsigned_abs()))
    }
}

impl FromStr for Integer {
    type Err = ArithmeticError;

    /// Reads an optional `-` followed by an unsigned decimal digit string.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ArithmeticError::malformed(ValueKind::Integer, s));
        }
        Ok(Integer::new(sign, digits.parse()?))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Integer) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.compare(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.compare(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Integer) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Integer::zero()
    }

    fn is_zero(&self) -> bool {
        Integer::is_zero(self)
    }
}

impl One for Integer {
    fn one() -> Self {
        Integer::one()
    }
}
