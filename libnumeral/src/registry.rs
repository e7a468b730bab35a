//! The operation catalog and the modules that run operations on textual arguments.
//!
//! Each arithmetic layer has a [Module] that reports the operations it supports and invokes them on
//! positional string arguments, parsing each argument into the value type the operation expects.
//! A [ModuleGroup] routes an operation to the first of its modules that supports it.

mod integer;
mod natural;
mod poly;
mod rational;

pub use integer::IntegerModule;
pub use natural::NaturalModule;
pub use poly::PolynomialModule;
pub use rational::RationalModule;

use crate::errors::{ArithmeticError, DispatchError, ValueKind};
use crate::integer::{Integer, Signum};
use crate::natural::Natural;
use crate::poly::Poly;
use crate::rational::Rational;

use log::debug;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

macro_rules! define_operations {
    ($($kind:ident: $code:literal $mnemonic:literal $(| $alias:literal)* => $arity:literal)*) => {
        /// An operation in the catalog, identified by a numeric code such as `N-1` or by a
        /// mnemonic such as `COM_NN_D`.
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub enum OperationId {
            $($kind,)*
        }

        impl OperationId {
            /// Every operation, in catalog order.
            pub const ALL: &'static [OperationId] = &[$(OperationId::$kind,)*];

            pub fn code(self) -> &'static str {
                match self {
                    $(OperationId::$kind => $code,)*
                }
            }

            pub fn mnemonic(self) -> &'static str {
                match self {
                    $(OperationId::$kind => $mnemonic,)*
                }
            }

            /// The number of positional arguments the operation takes.
            pub fn arity(self) -> usize {
                match self {
                    $(OperationId::$kind => $arity,)*
                }
            }

            fn lookup(name: &str) -> Option<OperationId> {
                match name {
                    $($code | $mnemonic $(| $alias)* => Some(OperationId::$kind),)*
                    _ => None,
                }
            }
        }
    };
}

define_operations! {
       CompareNatural: "N-1"  "COM_NN_D"  => 2
        IsZeroNatural: "N-2"  "NZER_N_B"  => 1
     IncrementNatural: "N-3"  "ADD_1N_N"  => 1
           AddNatural: "N-4"  "ADD_NN_N"  => 2
           SubNatural: "N-5"  "SUB_NN_N"  => 2
           MulByDigit: "N-6"  "MUL_ND_N"  => 2
           MulByPow10: "N-7"  "MUL_Nk_N"  => 2
           MulNatural: "N-8"  "MUL_NN_N"  => 2
            SubScaled: "N-9"  "SUB_NDN_N" => 3
        EstimateDigit: "N-10" "DIV_NN_Dk" => 2
      QuotientNatural: "N-11" "DIV_NN_N"  => 2
     RemainderNatural: "N-12" "MOD_NN_N"  => 2
           GcdNatural: "N-13" "GCF_NN_N"  => 2
           LcmNatural: "N-14" "LCM_NN_N"  => 2

          AbsInteger: "Z-1"  "ABS_Z_N"              => 1
         SignInteger: "Z-2"  "POZ_Z_D" | "SGN_Z_D"  => 1
       NegateInteger: "Z-3"  "MUL_ZM_Z"             => 1
    NaturalToInteger: "Z-4"  "TRANS_N_Z"            => 1
    IntegerToNatural: "Z-5"  "TRANS_Z_N"            => 1
          AddInteger: "Z-6"  "ADD_ZZ_Z"             => 2
          SubInteger: "Z-7"  "SUB_ZZ_Z"             => 2
          MulInteger: "Z-8"  "MUL_ZZ_Z"             => 2
     QuotientInteger: "Z-9"  "DIV_ZZ_Z"             => 2
    RemainderInteger: "Z-10" "MOD_ZZ_Z"             => 2

      ReduceRational: "Q-1" "RED_Q_Q"   => 1
          IsIntegral: "Q-2" "INT_Q_B"   => 1
   IntegerToRational: "Q-3" "TRANS_Z_Q" => 1
   RationalToInteger: "Q-4" "TRANS_Q_Z" => 1
         AddRational: "Q-5" "ADD_QQ_Q"  => 2
         SubRational: "Q-6" "SUB_QQ_Q"  => 2
         MulRational: "Q-7" "MUL_QQ_Q"  => 2
         DivRational: "Q-8" "DIV_QQ_Q"  => 2

             AddPoly: "P-1"  "ADD_PP_P"  => 2
             SubPoly: "P-2"  "SUB_PP_P"  => 2
           ScalePoly: "P-3"  "MUL_PQ_P"  => 2
           ShiftPoly: "P-4"  "MUL_Pxk_P" => 2
  LeadingCoefficient: "P-5"  "LED_P_Q"   => 1
              Degree: "P-6"  "DEG_P_N"   => 1
             Content: "P-7"  "FAC_P_Q"   => 1
             MulPoly: "P-8"  "MUL_PP_P"  => 2
             DivPoly: "P-9"  "DIV_PP_P"  => 2
             RemPoly: "P-10" "MOD_PP_P"  => 2
             GcdPoly: "P-11" "GCF_PP_P"  => 2
          Derivative: "P-12" "DER_P_P"   => 1
          SquareFree: "P-13" "NMR_P_P"   => 1
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.mnemonic(), self.code())
    }
}

impl FromStr for OperationId {
    type Err = ArithmeticError;

    /// Accepts either the numeric code or the mnemonic.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationId::lookup(s.trim())
            .ok_or_else(|| ArithmeticError::malformed(ValueKind::Operation, s.trim()))
    }
}

/// The result of an invoked operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Natural(Natural),
    Integer(Integer),
    Rational(Rational),
    Poly(Poly),
    Bool(bool),
    Ordering(Ordering),
    Signum(Signum),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Natural(n) => write!(f, "{}", n),
            Value::Integer(z) => write!(f, "{}", z),
            Value::Rational(q) => write!(f, "{}", q),
            Value::Poly(p) => write!(f, "{}", p),
            Value::Bool(true) => f.write_str("yes"),
            Value::Bool(false) => f.write_str("no"),
            Value::Ordering(Ordering::Greater) => f.write_str("greater"),
            Value::Ordering(Ordering::Equal) => f.write_str("equal"),
            Value::Ordering(Ordering::Less) => f.write_str("less"),
            Value::Signum(s) => write!(f, "{}", s),
        }
    }
}

/// A set of operations that can be invoked by identifier.
pub trait Module {
    /// The operations this module implements.
    fn supported_operations(&self) -> BTreeSet<OperationId>;

    /// Runs `id` on positional textual arguments.
    ///
    /// Fails with [UnknownOperation](DispatchError::UnknownOperation) if this module does not
    /// support `id`, with [InvalidArgumentCount](DispatchError::InvalidArgumentCount) if `args`
    /// does not match the operation's arity, and otherwise with whatever the parsing of the
    /// arguments or the operation itself raises.
    fn invoke(&self, id: OperationId, args: &[&str]) -> Result<Value, DispatchError>;
}

/// Rejects operations `module` does not support and argument lists of the wrong length.
fn validate<M: Module + ?Sized>(
    module: &M,
    id: OperationId,
    args: &[&str],
) -> Result<(), DispatchError> {
    if !module.supported_operations().contains(&id) {
        return Err(DispatchError::UnknownOperation(id));
    }
    if args.len() != id.arity() {
        return Err(DispatchError::InvalidArgumentCount {
            operation: id,
            expected: id.arity(),
            actual: args.len(),
        });
    }
    debug!("invoking {} with {} argument(s)", id, args.len());
    Ok(())
}

/// Reads a single decimal digit. A negative value is [NegativeValue]; anything above 9 is
/// malformed.
///
/// [NegativeValue]: ArithmeticError::NegativeValue
fn parse_digit(arg: &str) -> Result<u8, ArithmeticError> {
    let n: Natural = arg.parse()?;
    match n.digits() {
        [digit] => Ok(*digit),
        _ => Err(ArithmeticError::malformed(ValueKind::Digit, arg.trim())),
    }
}

/// Reads a non-negative exponent or shift that fits a `usize`.
fn parse_power(arg: &str) -> Result<usize, ArithmeticError> {
    let n: Natural = arg.parse()?;
    n.to_string()
        .parse()
        .map_err(|_| ArithmeticError::malformed(ValueKind::Natural, arg.trim()))
}

/// Dispatches to the first module that supports an operation.
pub struct ModuleGroup {
    modules: Vec<Box<dyn Module>>,
}

impl ModuleGroup {
    pub fn new(modules: Vec<Box<dyn Module>>) -> Self {
        Self { modules }
    }
}

impl Default for ModuleGroup {
    /// A group of all four arithmetic layers.
    fn default() -> Self {
        Self::new(vec![
            Box::new(NaturalModule),
            Box::new(IntegerModule),
            Box::new(RationalModule),
            Box::new(PolynomialModule),
        ])
    }
}

impl Module for ModuleGroup {
    fn supported_operations(&self) -> BTreeSet<OperationId> {
        self.modules
            .iter()
            .flat_map(|module| module.supported_operations())
            .collect()
    }

    fn invoke(&self, id: OperationId, args: &[&str]) -> Result<Value, DispatchError> {
        let module = self
            .modules
            .iter()
            .find(|module| module.supported_operations().contains(&id));
        let result = match module {
            Some(module) => module.invoke(id, args),
            None => Err(DispatchError::UnknownOperation(id)),
        };
        if let Err(err) = &result {
            debug!("{} failed: {}", id, err);
        }
        result
    }
}
