//! Fractions of an [Integer] numerator over a nonzero [Natural] denominator.
//!
//! A [Rational] need not be stored in lowest terms, but every arithmetic operation here returns a
//! reduced result, and equality compares values rather than representations.

use crate::errors::{ArithmeticError, Result, ValueKind};
use crate::integer::Integer;
use crate::natural::Natural;

use num_traits::{One, Zero};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Rational {
    numerator: Integer,
    denominator: Natural,
}

impl Rational {
    /// Creates `numerator / denominator`. A zero denominator is a division by zero.
    pub fn new(numerator: Integer, denominator: Natural) -> Result<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    /// `z / 1`.
    pub fn from_integer(z: Integer) -> Self {
        Self {
            numerator: z,
            denominator: Natural::one(),
        }
    }

    /// Converts to an integer if the reduced denominator is 1.
    pub fn to_integer(&self) -> Result<Integer> {
        let reduced = self.reduce();
        if reduced.denominator.is_one() {
            Ok(reduced.numerator)
        } else {
            Err(ArithmeticError::NonIntegralResult(self.to_string()))
        }
    }

    #[inline]
    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// Divides numerator and denominator by their greatest common divisor.
    ///
    /// Zero reduces to `0/1`.
    pub fn reduce(&self) -> Rational {
        let gcd = self.numerator.magnitude().gcd(&self.denominator);
        if gcd.is_one() {
            return self.clone();
        }
        Rational {
            numerator: Integer::new(
                self.numerator.sign(),
                self.numerator.magnitude().quotient_unchecked(&gcd),
            ),
            denominator: self.denominator.quotient_unchecked(&gcd),
        }
    }

    pub fn is_integral(&self) -> bool {
        self.reduce().denominator.is_one()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn negate(&self) -> Rational {
        Rational {
            numerator: self.numerator.negate(),
            denominator: self.denominator.clone(),
        }
    }

    pub fn add(&self, other: &Rational) -> Rational {
        let (lhs, rhs) = self.cross_numerators(other);
        Rational {
            numerator: lhs.add(&rhs),
            denominator: self.denominator.mul(&other.denominator),
        }
        .reduce()
    }

    pub fn sub(&self, other: &Rational) -> Rational {
        let (lhs, rhs) = self.cross_numerators(other);
        Rational {
            numerator: lhs.sub(&rhs),
            denominator: self.denominator.mul(&other.denominator),
        }
        .reduce()
    }

    pub fn mul(&self, other: &Rational) -> Rational {
        Rational {
            numerator: self.numerator.mul(&other.numerator),
            denominator: self.denominator.mul(&other.denominator),
        }
        .reduce()
    }

    /// Multiplies by the reciprocal of `other`. The sign of `other` moves into the numerator.
    pub fn div(&self, other: &Rational) -> Result<Rational> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let numerator = self
            .numerator
            .mul(&Integer::from_natural(other.denominator.clone()));
        let numerator = if other.is_negative() {
            numerator.negate()
        } else {
            numerator
        };
        Ok(Rational {
            numerator,
            denominator: self.denominator.mul(other.numerator.magnitude()),
        }
        .reduce())
    }

    /// `1 / self`.
    pub fn recip(&self) -> Result<Rational> {
        Rational::one().div(self)
    }

    /// Numerators of `self` and `other` brought over the common denominator `d1 * d2`.
    fn cross_numerators(&self, other: &Rational) -> (Integer, Integer) {
        (
            self.numerator
                .mul(&Integer::from_natural(other.denominator.clone())),
            other
                .numerator
                .mul(&Integer::from_natural(self.denominator.clone())),
        )
    }

    /// Reads a polynomial coefficient: either the `a/b` form or a bare integer.
    pub(crate) fn parse_coefficient(s: &str) -> Result<Rational> {
        if s.contains('/') {
            return s.parse();
        }
        s.parse::<Integer>()
            .map(Rational::from_integer)
            .map_err(|_| ArithmeticError::malformed(ValueKind::Rational, s.trim()))
    }
}

forward_binop!(impl Add, add for Rational => add);
forward_binop!(impl Sub, sub for Rational => sub);
forward_binop!(impl Mul, mul for Rational => mul);
forward_neg!(Rational);

impl From<Integer> for Rational {
    fn from(z: Integer) -> Self {
        Rational::from_integer(z)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(Integer::from(value))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        let (lhs, rhs) = self.cross_numerators(other);
        lhs == rhs
    }
}

impl Eq for Rational {}

impl FromStr for Rational {
    type Err = ArithmeticError;

    /// Reads `<Integer>/<Natural>`. The slash is required.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let malformed = || ArithmeticError::malformed(ValueKind::Rational, s);
        let mut parts = s.split('/');
        let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
            (Some(numerator), Some(denominator), None) => (numerator, denominator),
            _ => return Err(malformed()),
        };
        let numerator: Integer = numerator.parse().map_err(|_| malformed())?;
        let denominator: Natural = denominator.parse().map_err(|_| malformed())?;
        Rational::new(numerator, denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denominator.is_one() || self.numerator.is_zero() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        Rational::is_zero(self)
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}
