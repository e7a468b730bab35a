//! Single-variable polynomials over [Rational] coefficients.
//!
//! Coefficients are stored by ascending power, so index 0 holds the constant term. Every producer
//! trims zero coefficients from the high end; the zero polynomial is the single coefficient `0` and
//! has degree 0.

#![allow(clippy::should_implement_trait)]

/// Creates a polynomial from integer coefficients, highest power first.
///
/// # Examples:
///
/// ```ignore
/// poly![1, 2, -4]; // x^2+2x-4
/// poly![]; // zero polynomial
/// ```
#[macro_export]
macro_rules! poly {
    ($($x:expr),+ $(,)?) => (
        $crate::poly::Poly::from_descending(
            vec![$($crate::rational::Rational::from($x as i64)),+]
        )
    );

    () => {
        $crate::poly::Poly::zero()
    };
}

mod div;
mod gcd;
mod parse;

#[cfg(feature = "benchmark-internals")]
pub use gcd::_gcd_poly;

use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;

use num_traits::Zero;
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Poly {
    coeffs: Vec<Rational>,
}

impl Poly {
    /// Creates a polynomial from coefficients given lowest power first. An empty vector is the
    /// zero polynomial.
    pub fn new(mut coeffs: Vec<Rational>) -> Self {
        while coeffs.len() > 1 && coeffs[coeffs.len() - 1].is_zero() {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(Rational::zero());
        }
        Self { coeffs }
    }

    /// Creates a polynomial from coefficients given highest power first.
    pub fn from_descending(mut coeffs: Vec<Rational>) -> Self {
        coeffs.reverse();
        Self::new(coeffs)
    }

    pub fn zero() -> Self {
        Self::new(vec![])
    }

    pub fn constant(q: Rational) -> Self {
        Self::new(vec![q])
    }

    /// The coefficients, lowest power first.
    #[inline]
    pub fn coefficients(&self) -> &[Rational] {
        &self.coeffs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Gets the degree of the polynomial. The zero polynomial has degree 0.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficient of the highest-degree term; zero for the zero polynomial.
    #[inline]
    pub fn leading_coefficient(&self) -> &Rational {
        &self.coeffs[self.coeffs.len() - 1]
    }

    fn coefficient(&self, power: usize) -> Rational {
        self.coeffs
            .get(power)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    pub fn add(&self, other: &Poly) -> Poly {
        self.zip_with(other, Rational::add)
    }

    pub fn sub(&self, other: &Poly) -> Poly {
        self.zip_with(other, Rational::sub)
    }

    /// Combines coefficients power by power, padding the shorter operand with zeros.
    fn zip_with<F>(&self, other: &Poly, f: F) -> Poly
    where
        F: Fn(&Rational, &Rational) -> Rational,
    {
        let len = self.coeffs.len().max(other.coeffs.len());
        Poly::new(
            (0..len)
                .map(|power| f(&self.coefficient(power), &other.coefficient(power)))
                .collect(),
        )
    }

    /// Multiplies every coefficient by `q`.
    pub fn scale(&self, q: &Rational) -> Poly {
        Poly::new(self.coeffs.iter().map(|c| c.mul(q)).collect())
    }

    /// Multiplies by `x^k`.
    pub fn shift(&self, k: usize) -> Poly {
        if k == 0 || self.is_zero() {
            return self.clone();
        }
        let mut coeffs = vec![Rational::zero(); k];
        coeffs.extend_from_slice(&self.coeffs);
        Poly::new(coeffs)
    }

    /// The rational factor `gcd(numerators) / lcm(denominators)` over the nonzero coefficients.
    ///
    /// Returns 1 for the zero polynomial.
    pub fn content(&self) -> Rational {
        let nonzero: Vec<&Rational> = self.coeffs.iter().filter(|c| !c.is_zero()).collect();
        if nonzero.is_empty() {
            return Rational::one();
        }
        let gcd = nonzero.iter().fold(Natural::zero(), |gcd, c| {
            gcd.gcd(c.numerator().magnitude())
        });
        let lcm = nonzero
            .iter()
            .fold(Natural::one(), |lcm, c| lcm.lcm(c.denominator()));
        Rational::new(Integer::from_natural(gcd), lcm)
            .map(|q| q.reduce())
            .unwrap_or_else(|_| Rational::one())
    }

    /// Full convolution of the coefficient vectors.
    pub fn mul(&self, other: &Poly) -> Poly {
        if self.is_zero() || other.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![Rational::zero(); self.degree() + other.degree() + 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].add(&a.mul(b));
            }
        }
        Poly::new(coeffs)
    }

    pub fn negate(&self) -> Poly {
        Poly::new(self.coeffs.iter().map(Rational::negate).collect())
    }

    /// Formal derivative. Constants, the zero polynomial included, differentiate to zero.
    pub fn derivative(&self) -> Poly {
        if self.degree() == 0 {
            return Poly::zero();
        }
        Poly::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, c)| {
                    let power = Integer::from_natural(Natural::from(power as u64));
                    c.mul(&Rational::from_integer(power))
                })
                .collect(),
        )
    }

    /// Scales the polynomial so that its leading coefficient is 1. Zero stays zero.
    pub fn monic(&self) -> Poly {
        match self.leading_coefficient().recip() {
            Ok(inverse) => self.scale(&inverse),
            Err(_) => self.clone(),
        }
    }
}

forward_binop!(impl Add, add for Poly => add);
forward_binop!(impl Sub, sub for Poly => sub);
forward_binop!(impl Mul, mul for Poly => mul);
forward_neg!(Poly);

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl From<Rational> for Poly {
    fn from(q: Rational) -> Self {
        Poly::constant(q)
    }
}

impl fmt::Display for Poly {
    /// Writes the polynomial highest power first, e.g. `x^2-2x+1` or `1/2x^3-x`. Unit
    /// coefficients of non-constant terms are left implicit.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut first = true;
        for (power, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let text = c.to_string();
            let (negative, magnitude) = match text.strip_prefix('-') {
                Some(magnitude) => (true, magnitude),
                None => (false, text.as_str()),
            };
            if negative {
                f.write_str("-")?;
            } else if !first {
                f.write_str("+")?;
            }
            first = false;

            if power == 0 {
                f.write_str(magnitude)?;
                continue;
            }
            if magnitude != "1" {
                f.write_str(magnitude)?;
            }
            f.write_str("x")?;
            if power > 1 {
                write!(f, "^{}", power)?;
            }
        }
        Ok(())
    }
}
