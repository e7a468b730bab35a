mod iter;
pub use iter::PeekIter;

/// Implements a `std::ops` binary operator for every combination of owned and borrowed operands
/// by delegating to an inherent method taking `(&self, &Self)`.
///
/// ```ignore
/// forward_binop!(impl Add, add for Natural => add);
/// ```
macro_rules! forward_binop {
    (impl $imp:ident, $method:ident for $t:ty => $inherent:ident) => {
        impl<'a, 'b> ::std::ops::$imp<&'b $t> for &'a $t {
            type Output = $t;

            fn $method(self, rhs: &'b $t) -> $t {
                <$t>::$inherent(self, rhs)
            }
        }

        impl<'b> ::std::ops::$imp<&'b $t> for $t {
            type Output = $t;

            fn $method(self, rhs: &'b $t) -> $t {
                <$t>::$inherent(&self, rhs)
            }
        }

        impl<'a> ::std::ops::$imp<$t> for &'a $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                <$t>::$inherent(self, &rhs)
            }
        }

        impl ::std::ops::$imp<$t> for $t {
            type Output = $t;

            fn $method(self, rhs: $t) -> $t {
                <$t>::$inherent(&self, &rhs)
            }
        }
    };
}

/// Implements `std::ops::Neg` for owned and borrowed values through an inherent `negate`.
macro_rules! forward_neg {
    ($t:ty) => {
        impl<'a> ::std::ops::Neg for &'a $t {
            type Output = $t;

            fn neg(self) -> $t {
                <$t>::negate(self)
            }
        }

        impl ::std::ops::Neg for $t {
            type Output = $t;

            fn neg(self) -> $t {
                <$t>::negate(&self)
            }
        }
    };
}
