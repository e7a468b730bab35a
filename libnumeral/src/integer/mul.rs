use crate::integer::Integer;

impl Integer {
    /// Product of magnitudes, negative exactly when the signs differ.
    pub fn mul(&self, other: &Integer) -> Integer {
        Integer::new(
            self.sign.product(other.sign),
            self.magnitude.mul(&other.magnitude),
        )
    }
}

forward_binop!(impl Mul, mul for Integer => mul);

#[cfg(test)]
mod tests {
    macro_rules! integer_test_mul {
        ($($name: ident: $lhs:expr, $rhs:expr, $program:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::integer::Integer;
                let lhs: Integer = $lhs.parse().unwrap();
                let rhs: Integer = $rhs.parse().unwrap();
                assert_eq!(lhs.mul(&rhs).to_string(), $program);
                assert_eq!((lhs * rhs).to_string(), $program);
            }
        )*
        }
    }

    mod mul {
        integer_test_mul! {
            positives: "6", "7", "42"
            negatives: "-6", "-7", "42"
            mixed: "-6", "7", "-42"
            mixed_rev: "6", "-7", "-42"
            zero_is_positive: "-6", "0", "0"
            big: "-123456789123456789", "987654321", "-121932631234567900112635269"
        }
    }
}
