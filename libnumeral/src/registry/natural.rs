use crate::errors::DispatchError;
use crate::natural::Natural;
use crate::registry::{parse_digit, parse_power, validate, Module, OperationId, Value};

use std::collections::BTreeSet;

/// Operations on natural numbers, `N-1` through `N-14`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalModule;

impl Module for NaturalModule {
    fn supported_operations(&self) -> BTreeSet<OperationId> {
        use OperationId::*;
        [
            CompareNatural,
            IsZeroNatural,
            IncrementNatural,
            AddNatural,
            SubNatural,
            MulByDigit,
            MulByPow10,
            MulNatural,
            SubScaled,
            EstimateDigit,
            QuotientNatural,
            RemainderNatural,
            GcdNatural,
            LcmNatural,
        ]
        .iter()
        .copied()
        .collect()
    }

    fn invoke(&self, id: OperationId, args: &[&str]) -> Result<Value, DispatchError> {
        validate(self, id, args)?;
        let n = |i: usize| args[i].parse::<Natural>();

        use OperationId::*;
        let value = match id {
            CompareNatural => Value::Ordering(n(0)?.compare(&n(1)?)),
            IsZeroNatural => Value::Bool(n(0)?.is_zero()),
            IncrementNatural => Value::Natural(n(0)?.increment()),
            AddNatural => Value::Natural(n(0)?.add(&n(1)?)),
            SubNatural => Value::Natural(n(0)?.checked_sub(&n(1)?)?),
            MulByDigit => Value::Natural(n(0)?.mul_digit(parse_digit(args[1])?)?),
            MulByPow10 => Value::Natural(n(0)?.mul_pow10(parse_power(args[1])?)),
            MulNatural => Value::Natural(n(0)?.mul(&n(1)?)),
            SubScaled => Value::Natural(n(0)?.sub_scaled(&n(1)?, parse_digit(args[2])?)?),
            EstimateDigit => {
                let estimate = n(0)?.estimate_digit(&n(1)?)?;
                Value::Natural(Natural::from(u64::from(estimate.digit)))
            }
            QuotientNatural => Value::Natural(n(0)?.quotient(&n(1)?)?),
            RemainderNatural => Value::Natural(n(0)?.remainder(&n(1)?)?),
            GcdNatural => Value::Natural(n(0)?.gcd(&n(1)?)),
            LcmNatural => Value::Natural(n(0)?.lcm(&n(1)?)),
            _ => return Err(DispatchError::UnknownOperation(id)),
        };
        Ok(value)
    }
}
