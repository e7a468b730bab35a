use crate::errors::DispatchError;
use crate::integer::Integer;
use crate::natural::Natural;
use crate::registry::{validate, Module, OperationId, Value};

use std::collections::BTreeSet;

/// Operations on integers, `Z-1` through `Z-10`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntegerModule;

impl Module for IntegerModule {
    fn supported_operations(&self) -> BTreeSet<OperationId> {
        use OperationId::*;
        [
            AbsInteger,
            SignInteger,
            NegateInteger,
            NaturalToInteger,
            IntegerToNatural,
            AddInteger,
            SubInteger,
            MulInteger,
            QuotientInteger,
            RemainderInteger,
        ]
        .iter()
        .copied()
        .collect()
    }

    fn invoke(&self, id: OperationId, args: &[&str]) -> Result<Value, DispatchError> {
        validate(self, id, args)?;
        let z = |i: usize| args[i].parse::<Integer>();

        use OperationId::*;
        let value = match id {
            AbsInteger => Value::Natural(z(0)?.abs()),
            SignInteger => Value::Signum(z(0)?.signum()),
            NegateInteger => Value::Integer(z(0)?.negate()),
            NaturalToInteger => Value::Integer(Integer::from_natural(args[0].parse::<Natural>()?)),
            IntegerToNatural => Value::Natural(z(0)?.to_natural()?),
            AddInteger => Value::Integer(z(0)?.add(&z(1)?)),
            SubInteger => Value::Integer(z(0)?.sub(&z(1)?)),
            MulInteger => Value::Integer(z(0)?.mul(&z(1)?)),
            QuotientInteger => Value::Integer(z(0)?.quotient(&z(1)?)?),
            RemainderInteger => Value::Integer(z(0)?.remainder(&z(1)?)?),
            _ => return Err(DispatchError::UnknownOperation(id)),
        };
        Ok(value)
    }
}
