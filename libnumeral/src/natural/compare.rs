use crate::natural::Natural;
use std::cmp::Ordering;

impl Natural {
    /// Compares two natural numbers by digit count first, then digit by digit starting from the
    /// most significant position.
    pub fn compare(&self, other: &Natural) -> Ordering {
        match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => (),
            unequal => return unequal,
        }

        for i in (0..self.digits.len()).rev() {
            match self.digits[i].cmp(&other.digits[i]) {
                Ordering::Equal => (),
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Natural) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Natural) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

#[cfg(feature = "benchmark-internals")]
pub fn _compare(u: &Natural, v: &Natural, s: &str) -> bool {
    match s {
        "eq" => u == v,
        "lte" => u <= v,
        "lt" => u < v,
        "gte" => u >= v,
        "gt" => u > v,
        _ => unreachable!(),
    }
}
