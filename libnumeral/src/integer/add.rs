use crate::integer::{Integer, Sign};

use std::cmp::Ordering;

impl Integer {
    /// Signed sum. Operands with opposite signs subtract the smaller magnitude from the larger and
    /// keep the sign of the larger.
    pub fn add(&self, other: &Integer) -> Integer {
        if self.sign == other.sign {
            return Integer::new(self.sign, self.magnitude.add(&other.magnitude));
        }
        match self.magnitude.compare(&other.magnitude) {
            Ordering::Equal => Integer::zero(),
            Ordering::Greater => Integer::new(
                self.sign,
                self.magnitude.sub_unchecked(&other.magnitude),
            ),
            Ordering::Less => Integer::new(
                other.sign,
                other.magnitude.sub_unchecked(&self.magnitude),
            ),
        }
    }

    pub fn sub(&self, other: &Integer) -> Integer {
        self.add(&other.negate())
    }

    /// `|self|` with the sign of `sign`, used when only the direction of a value matters.
    pub(crate) fn with_sign(&self, sign: Sign) -> Integer {
        Integer::new(sign, self.magnitude.clone())
    }
}

forward_binop!(impl Add, add for Integer => add);
forward_binop!(impl Sub, sub for Integer => sub);
