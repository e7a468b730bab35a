use crate::errors::{ArithmeticError, Result, ValueKind};
use crate::natural::Natural;

impl Natural {
    /// Multiplies by a single decimal digit in one carrying pass.
    ///
    /// Fails if `digit` is greater than 9.
    pub fn mul_digit(&self, digit: u8) -> Result<Natural> {
        if digit > 9 {
            return Err(ArithmeticError::malformed(
                ValueKind::Digit,
                digit.to_string(),
            ));
        }
        Ok(self.scale(digit))
    }

    /// Multiplies by `10^k` by prepending `k` zero digits. Zero stays zero.
    pub fn mul_pow10(&self, k: usize) -> Natural {
        if self.is_zero() || k == 0 {
            return self.clone();
        }
        let mut digits = vec![0; k];
        digits.extend_from_slice(&self.digits);
        Natural::from_trusted_digits(digits)
    }

    /// Schoolbook multiplication: the sum of `self * other[i]` shifted by `i`, for every digit
    /// `other[i]` of `other`.
    pub fn mul(&self, other: &Natural) -> Natural {
        if self.is_zero() || other.is_zero() {
            return Natural::zero();
        }
        other
            .digits
            .iter()
            .enumerate()
            .filter(|&(_, &digit)| digit != 0)
            .fold(Natural::zero(), |product, (i, &digit)| {
                product.add(&self.scale(digit).mul_pow10(i))
            })
    }

    /// Single-digit multiply for digits already known to be in `0..=9`.
    pub(crate) fn scale(&self, digit: u8) -> Natural {
        debug_assert!(digit <= 9);
        if digit == 0 {
            return Natural::zero();
        }
        let mut result = Vec::with_capacity(self.digits.len() + 1);
        let mut carry = 0;
        for &d in self.digits.iter() {
            let product = d * digit + carry;
            result.push(product % 10);
            carry = product / 10;
        }
        if carry > 0 {
            result.push(carry);
        }
        Natural::from_trusted_digits(result)
    }
}

forward_binop!(impl Mul, mul for Natural => mul);

#[cfg(feature = "benchmark-internals")]
pub fn _mul(u: &Natural, v: &Natural) -> Natural {
    u.mul(v)
}
