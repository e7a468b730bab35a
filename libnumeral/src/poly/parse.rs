use crate::errors::{ArithmeticError, Result, ValueKind};
use crate::poly::Poly;
use crate::rational::Rational;
use crate::utils::PeekIter;

use std::str::FromStr;

/// One `<coef>x^<power>` term as written, before the coefficient is read as a rational.
struct Term {
    coefficient: String,
    power: usize,
}

/// Reads a single unsigned term: `<coef>`, `<coef>x`, `<coef>x^<k>`, `x` or `x^<k>`.
fn read_term(input: &mut PeekIter<char>) -> Option<Term> {
    let coefficient: String = input.collect_while(|&c| c.is_ascii_digit() || c == '/');
    if input.peek() != Some(&'x') {
        if coefficient.is_empty() {
            return None;
        }
        return Some(Term {
            coefficient,
            power: 0,
        });
    }
    input.next();

    let power = if input.peek() == Some(&'^') {
        input.next();
        let digits: String = input.collect_while(|c| c.is_ascii_digit());
        digits.parse().ok()?
    } else {
        1
    };
    Some(Term { coefficient, power })
}

impl FromStr for Poly {
    type Err = ArithmeticError;

    /// Reads a sum of terms such as `x^2-2x+1` or `-1/2x^3+x`. Whitespace is ignored, terms may
    /// come in any order, and repeated powers are summed.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ArithmeticError::malformed(ValueKind::Polynomial, s.trim());
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut input = PeekIter::new(chars.into_iter());

        let mut coeffs: Vec<Rational> = Vec::new();
        let mut negative = input.peek() == Some(&'-');
        if negative {
            input.next();
        }
        loop {
            let term = read_term(&mut input).ok_or_else(malformed)?;
            let coefficient = if term.coefficient.is_empty() {
                Rational::one()
            } else {
                Rational::parse_coefficient(&term.coefficient).map_err(|e| match e {
                    ArithmeticError::MalformedValue { .. } => malformed(),
                    e => e,
                })?
            };
            let coefficient = if negative {
                coefficient.negate()
            } else {
                coefficient
            };
            if coeffs.len() <= term.power {
                coeffs.resize(term.power + 1, Rational::zero());
            }
            coeffs[term.power] = coeffs[term.power].add(&coefficient);

            negative = match input.next() {
                None => break,
                Some('+') => false,
                Some('-') => true,
                Some(_) => return Err(malformed()),
            };
        }
        Ok(Poly::new(coeffs))
    }
}
