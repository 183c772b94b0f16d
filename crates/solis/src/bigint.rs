//! Arbitrary-precision signed integer literals (the `123n` suffix form).
//!
//! Thin wrapper around `num-bigint` so the rest of the crate depends on a
//! narrow API instead of reaching for `num_bigint::BigInt` directly.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_bigint::BigInt as Inner;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(Inner);

impl BigInt {
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        s.parse::<Inner>().ok().map(Self)
    }

    pub fn from_i64(n: i64) -> Self {
        Self(Inner::from(n))
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(f64::NAN)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() { None } else { Some(Self(&self.0 / &rhs.0)) }
    }

    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() { None } else { Some(Self(&self.0 % &rhs.0)) }
    }

    /// Floor division: rounds toward negative infinity, matching the
    /// language's `/` and `%` for integers rather than Rust's
    /// truncate-toward-zero built-ins.
    pub fn div_floor(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() { None } else { Some(Self(self.0.div_floor(&rhs.0))) }
    }

    pub fn mod_floor(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() { None } else { Some(Self(self.0.mod_floor(&rhs.0))) }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt((&self.0).$method(&rhs.0))
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt(-&self.0)
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays_round_trip() {
        let n = BigInt::from_decimal_str("123456789012345678901234567890").unwrap();
        assert_eq!(n.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn rejects_non_decimal_text() {
        assert!(BigInt::from_decimal_str("12.5").is_none());
        assert!(BigInt::from_decimal_str("12n").is_none());
    }

    #[test]
    fn arithmetic_matches_expectation() {
        let a = BigInt::from_i64(10);
        let b = BigInt::from_i64(3);
        assert_eq!((&a + &b).to_string(), "13");
        assert_eq!((&a - &b).to_string(), "7");
        assert_eq!((&a * &b).to_string(), "30");
        assert_eq!(a.checked_div(&b).unwrap().to_string(), "3");
        assert_eq!(a.checked_rem(&b).unwrap().to_string(), "1");
        assert!(a.checked_div(&BigInt::from_i64(0)).is_none());
    }
}
