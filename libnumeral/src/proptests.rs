//! Property-based tests for the arithmetic layers.

use proptest::prelude::*;

use crate::{Integer, Natural, Poly, Rational};

// Strategy for generating naturals of up to 30 digits, leading zeros included
fn natural() -> impl Strategy<Value = Natural> {
    "[0-9]{1,30}".prop_map(|s| s.parse().unwrap())
}

fn nonzero_natural() -> impl Strategy<Value = Natural> {
    natural().prop_filter("divisor must be non-zero", |n| !n.is_zero())
}

fn integer() -> impl Strategy<Value = Integer> {
    "-?[0-9]{1,20}".prop_map(|s| s.parse().unwrap())
}

fn nonzero_integer() -> impl Strategy<Value = Integer> {
    integer().prop_filter("divisor must be non-zero", |z| !z.is_zero())
}

fn rational() -> impl Strategy<Value = Rational> {
    (integer(), "[1-9][0-9]{0,10}")
        .prop_map(|(n, d)| Rational::new(n, d.parse().unwrap()).unwrap())
}

// Strategy for generating small rational coefficients
fn small_coeff() -> impl Strategy<Value = Rational> {
    (-20i64..20i64, 1u64..6u64).prop_map(|(n, d)| {
        Rational::new(Integer::from(n), Natural::from(d)).unwrap()
    })
}

// Strategy for generating polynomials of degree 0-4
fn small_poly() -> impl Strategy<Value = Poly> {
    proptest::collection::vec(small_coeff(), 1..=5).prop_map(Poly::new)
}

fn nonzero_poly() -> impl Strategy<Value = Poly> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

proptest! {
    #[test]
    fn natural_add_agrees_with_machine_integers(a in any::<u64>(), b in any::<u64>()) {
        let sum = Natural::from(a).add(&Natural::from(b));
        prop_assert_eq!(sum.to_string(), (u128::from(a) + u128::from(b)).to_string());
    }

    #[test]
    fn natural_mul_agrees_with_machine_integers(a in any::<u64>(), b in any::<u64>()) {
        let product = Natural::from(a).mul(&Natural::from(b));
        prop_assert_eq!(product.to_string(), (u128::from(a) * u128::from(b)).to_string());
    }

    #[test]
    fn natural_sub_undoes_add(a in natural(), b in natural()) {
        prop_assert_eq!(a.add(&b).checked_sub(&b).unwrap(), a);
    }

    #[test]
    fn natural_division_identity(a in natural(), b in nonzero_natural()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn natural_gcd_times_lcm(a in natural(), b in natural()) {
        prop_assume!(!(a.is_zero() && b.is_zero()));
        prop_assert_eq!(a.gcd(&b).mul(&a.lcm(&b)), a.mul(&b));
    }

    #[test]
    fn natural_display_is_canonical(a in natural()) {
        let text = a.to_string();
        prop_assert!(text == "0" || !text.starts_with('0'));
        prop_assert_eq!(text.parse::<Natural>().unwrap(), a);
    }

    #[test]
    fn integer_add_commutative(a in integer(), b in integer()) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn integer_sub_undoes_add(a in integer(), b in integer()) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn integer_division_identity(a in integer(), b in nonzero_integer()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(!r.is_negative());
        prop_assert!(r.magnitude() < b.magnitude());
        prop_assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn rational_reduce_is_idempotent(q in rational()) {
        let reduced = q.reduce();
        prop_assert_eq!(reduced.reduce().to_string(), reduced.to_string());
        prop_assert!(reduced.numerator().magnitude().gcd(reduced.denominator()).is_one());
        prop_assert_eq!(reduced, q);
    }

    #[test]
    fn rational_sub_undoes_add(a in rational(), b in rational()) {
        prop_assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn rational_div_undoes_mul(a in rational(), b in rational()) {
        prop_assume!(!b.is_zero());
        prop_assert_eq!(a.mul(&b).div(&b).unwrap(), a);
    }

    #[test]
    fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
        prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    }

    #[test]
    fn poly_division_identity(a in small_poly(), b in nonzero_poly()) {
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(r.is_zero() || r.degree() < b.degree());
        prop_assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn poly_gcd_divides_both(a in small_poly(), b in nonzero_poly()) {
        let gcd = a.gcd(&b);
        prop_assert!(!gcd.leading_coefficient().is_negative());
        prop_assert!(a.rem(&gcd).unwrap().is_zero());
        prop_assert!(b.rem(&gcd).unwrap().is_zero());
    }

    #[test]
    fn poly_derivative_of_constant_is_zero(c in small_coeff()) {
        prop_assert!(Poly::constant(c).derivative().is_zero());
    }

    #[test]
    fn poly_square_free_divides(p in nonzero_poly()) {
        let reduced = p.square_free().unwrap();
        prop_assert!(p.rem(&reduced).unwrap().is_zero());
    }

    #[test]
    fn poly_display_parses_back(p in small_poly()) {
        prop_assert_eq!(p.to_string().parse::<Poly>().unwrap(), p);
    }
}
