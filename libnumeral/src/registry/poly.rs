use crate::errors::DispatchError;
use crate::natural::Natural;
use crate::poly::Poly;
use crate::rational::Rational;
use crate::registry::{parse_power, validate, Module, OperationId, Value};

use std::collections::BTreeSet;

/// Operations on polynomials, `P-1` through `P-13`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PolynomialModule;

impl Module for PolynomialModule {
    fn supported_operations(&self) -> BTreeSet<OperationId> {
        use OperationId::*;
        [
            AddPoly,
            SubPoly,
            ScalePoly,
            ShiftPoly,
            LeadingCoefficient,
            Degree,
            Content,
            MulPoly,
            DivPoly,
            RemPoly,
            GcdPoly,
            Derivative,
            SquareFree,
        ]
        .iter()
        .copied()
        .collect()
    }

    fn invoke(&self, id: OperationId, args: &[&str]) -> Result<Value, DispatchError> {
        validate(self, id, args)?;
        let p = |i: usize| args[i].parse::<Poly>();

        use OperationId::*;
        let value = match id {
            AddPoly => Value::Poly(p(0)?.add(&p(1)?)),
            SubPoly => Value::Poly(p(0)?.sub(&p(1)?)),
            ScalePoly => Value::Poly(p(0)?.scale(&Rational::parse_coefficient(args[1])?)),
            ShiftPoly => Value::Poly(p(0)?.shift(parse_power(args[1])?)),
            LeadingCoefficient => Value::Rational(p(0)?.leading_coefficient().clone()),
            Degree => Value::Natural(Natural::from(p(0)?.degree() as u64)),
            Content => Value::Rational(p(0)?.content()),
            MulPoly => Value::Poly(p(0)?.mul(&p(1)?)),
            DivPoly => Value::Poly(p(0)?.div(&p(1)?)?),
            RemPoly => Value::Poly(p(0)?.rem(&p(1)?)?),
            GcdPoly => Value::Poly(p(0)?.gcd(&p(1)?)),
            Derivative => Value::Poly(p(0)?.derivative()),
            SquareFree => Value::Poly(p(0)?.square_free()?),
            _ => return Err(DispatchError::UnknownOperation(id)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    macro_rules! poly_module_test {
        ($($name: ident: $op:ident, [$($arg:expr),*], $program:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::registry::{Module, OperationId, PolynomialModule};
                let result = PolynomialModule.invoke(OperationId::$op, &[$($arg),*]).unwrap();
                assert_eq!(result.to_string(), $program);
            }
        )*
        }
    }

    mod invoke {
        poly_module_test! {
            add: AddPoly, ["x^2+1", "x-1"], "x^2+x"
            sub: SubPoly, ["x^2+1", "x^2-1"], "2"
            scale_fraction: ScalePoly, ["2x^2+4", "1/2"], "x^2+2"
            scale_integer: ScalePoly, ["x-1", "-3"], "-3x+3"
            shift: ShiftPoly, ["x+1", "2"], "x^3+x^2"
            leading_coefficient: LeadingCoefficient, ["-1/2x^3+x"], "-1/2"
            degree: Degree, ["x^7-1"], "7"
            degree_of_zero: Degree, ["0"], "0"
            content: Content, ["2/3x^2+4/5"], "2/15"
            mul: MulPoly, ["x+1", "x-1"], "x^2-1"
            div: DivPoly, ["x^2-1", "x-1"], "x+1"
            rem: RemPoly, ["x^2-1", "x-1"], "0"
            gcd: GcdPoly, ["x^2-1", "x^2-2x+1"], "2x-2"
            derivative: Derivative, ["x^3-2x"], "3x^2-2"
            square_free: SquareFree, ["x^2-2x+1"], "x-1"
        }
    }

    use crate::errors::{ArithmeticError, DispatchError};
    use crate::registry::{Module, OperationId, PolynomialModule};

    #[test]
    fn arithmetic_failures() {
        assert_eq!(
            PolynomialModule.invoke(OperationId::DivPoly, &["x", "0"]),
            Err(DispatchError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(
            PolynomialModule.invoke(OperationId::ShiftPoly, &["x", "-1"]),
            Err(DispatchError::Arithmetic(ArithmeticError::NegativeValue))
        );
        assert!(matches!(
            PolynomialModule.invoke(OperationId::AddPoly, &["x^", "1"]),
            Err(DispatchError::Arithmetic(ArithmeticError::MalformedValue { .. }))
        ));
    }
}
