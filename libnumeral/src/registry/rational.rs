use crate::errors::DispatchError;
use crate::integer::Integer;
use crate::rational::Rational;
use crate::registry::{validate, Module, OperationId, Value};

use std::collections::BTreeSet;

/// Operations on rational numbers, `Q-1` through `Q-8`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RationalModule;

impl Module for RationalModule {
    fn supported_operations(&self) -> BTreeSet<OperationId> {
        use OperationId::*;
        [
            ReduceRational,
            IsIntegral,
            IntegerToRational,
            RationalToInteger,
            AddRational,
            SubRational,
            MulRational,
            DivRational,
        ]
        .iter()
        .copied()
        .collect()
    }

    fn invoke(&self, id: OperationId, args: &[&str]) -> Result<Value, DispatchError> {
        validate(self, id, args)?;
        let q = |i: usize| args[i].parse::<Rational>();

        use OperationId::*;
        let value = match id {
            ReduceRational => Value::Rational(q(0)?.reduce()),
            IsIntegral => Value::Bool(q(0)?.is_integral()),
            IntegerToRational => {
                Value::Rational(Rational::from_integer(args[0].parse::<Integer>()?))
            }
            RationalToInteger => Value::Integer(q(0)?.to_integer()?),
            AddRational => Value::Rational(q(0)?.add(&q(1)?)),
            SubRational => Value::Rational(q(0)?.sub(&q(1)?)),
            MulRational => Value::Rational(q(0)?.mul(&q(1)?)),
            DivRational => Value::Rational(q(0)?.div(&q(1)?)?),
            _ => return Err(DispatchError::UnknownOperation(id)),
        };
        Ok(value)
    }
}
