use crate::natural::Natural;

impl Natural {
    /// Returns `self + 1`, carrying through trailing nines.
    pub fn increment(&self) -> Natural {
        let mut digits = self.digits.clone();
        let mut carry = 1;
        for digit in digits.iter_mut() {
            let sum = *digit + carry;
            *digit = sum % 10;
            carry = sum / 10;
            if carry == 0 {
                break;
            }
        }
        if carry > 0 {
            digits.push(carry);
        }
        Natural::from_trusted_digits(digits)
    }

    /// Digit-wise sum with carry.
    pub fn add(&self, other: &Natural) -> Natural {
        // make lhs the longer vector
        let (longer, shorter) = if self.digits.len() >= other.digits.len() {
            (&self.digits, &other.digits)
        } else {
            (&other.digits, &self.digits)
        };

        let mut result = Vec::with_capacity(longer.len() + 1);
        let mut carry = 0;
        for (i, &digit) in longer.iter().enumerate() {
            let sum = digit + shorter.get(i).copied().unwrap_or(0) + carry;
            result.push(sum % 10);
            carry = sum / 10;
        }

        // add 1 if a carry is leftover
        if carry > 0 {
            result.push(carry);
        }
        Natural::from_trusted_digits(result)
    }
}

forward_binop!(impl Add, add for Natural => add);

#[cfg(feature = "benchmark-internals")]
pub fn _add(u: &Natural, v: &Natural) -> Natural {
    u.add(v)
}
