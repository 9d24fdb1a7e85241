use crate::modules::error::PolynomialError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * scalar.rs implements the exact number type polynomials are defined over.
 * A Scalar is either an arbitrary-precision integer or an arbitrary-precision
 * rational; every operation is exact, nothing is ever rounded.
 */

/// An exact number: an arbitrary-precision integer or rational. Construct
/// through the `From` impls or `ratio`, which demote integral rationals to
/// `Int`; a `Ratio` variant built directly can hold an integral value and
/// break the canonical form that derived equality relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Scalar {
    Int(BigInt),
    Ratio(BigRational),
}

impl Scalar {
    // canonical-kind constructor: a rational with denominator 1 is demoted
    // to Int, so derived equality coincides with numeric equality
    fn from_ratio(ratio: BigRational) -> Scalar {
        if ratio.is_integer() {
            Scalar::Int(ratio.to_integer())
        } else {
            Scalar::Ratio(ratio)
        }
    }

    // promote either kind to a rational for mixed-kind arithmetic
    fn into_ratio(self) -> BigRational {
        match self {
            Scalar::Int(i) => BigRational::from_integer(i),
            Scalar::Ratio(r) => r,
        }
    }

    /// Exact rational from machine-integer parts. Panics if `denom` is zero.
    pub fn ratio(numer: i64, denom: i64) -> Scalar {
        Scalar::from_ratio(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Scalar::Int(i) => i.is_negative(),
            Scalar::Ratio(r) => r.is_negative(),
        }
    }

    // exponentiation by repeated squaring
    pub fn pow(&self, exp: usize) -> Scalar {
        let mut base = self.clone();
        let mut exp = exp;
        let mut result = Scalar::one();

        while exp > 0 {
            if exp % 2 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp /= 2;
        }

        result
    }
}

// addition
impl Add for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a + b),
            (a, b) => Scalar::from_ratio(a.into_ratio() + b.into_ratio()),
        }
    }
}

// subtraction
impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        self + (-other)
    }
}

// multiplication
impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        match (self, other) {
            (Scalar::Int(a), Scalar::Int(b)) => Scalar::Int(a * b),
            (a, b) => Scalar::from_ratio(a.into_ratio() * b.into_ratio()),
        }
    }
}

// exact division, integer results stay integers
impl Div for Scalar {
    type Output = Scalar;

    fn div(self, other: Scalar) -> Scalar {
        if other.is_zero() {
            panic!("Attempted to divide scalar by zero.");
        }
        Scalar::from_ratio(self.into_ratio() / other.into_ratio())
    }
}

// negation
impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        match self {
            Scalar::Int(i) => Scalar::Int(-i),
            Scalar::Ratio(r) => Scalar::Ratio(-r),
        }
    }
}

// additive identity
impl Zero for Scalar {
    fn zero() -> Scalar {
        Scalar::Int(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        match self {
            Scalar::Int(i) => i.is_zero(),
            Scalar::Ratio(r) => r.is_zero(),
        }
    }
}

// multiplicative identity
impl One for Scalar {
    fn one() -> Scalar {
        Scalar::Int(BigInt::one())
    }
}

// the closed set of coercible scalar kinds
impl From<i32> for Scalar {
    fn from(value: i32) -> Scalar {
        Scalar::Int(BigInt::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Scalar {
        Scalar::Int(BigInt::from(value))
    }
}

impl From<i128> for Scalar {
    fn from(value: i128) -> Scalar {
        Scalar::Int(BigInt::from(value))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Scalar {
        Scalar::Int(BigInt::from(value))
    }
}

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Scalar {
        Scalar::Int(value)
    }
}

impl From<BigRational> for Scalar {
    fn from(value: BigRational) -> Scalar {
        Scalar::from_ratio(value)
    }
}

// floats convert to their exact binary rational; NaN and infinities are the
// one scalar kind that cannot be represented exactly
impl TryFrom<f64> for Scalar {
    type Error = PolynomialError;

    fn try_from(value: f64) -> Result<Scalar, PolynomialError> {
        match BigRational::from_float(value) {
            Some(ratio) => Ok(Scalar::from_ratio(ratio)),
            None => Err(PolynomialError::UnsupportedOperand(format!(
                "non-finite float {}",
                value
            ))),
        }
    }
}

// deserialization re-establishes canonical kind: a stored rational holding
// an integral value demotes to Int, like every other construction path
impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Scalar, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // wire-shape twin of Scalar, accepted verbatim then canonicalized
        #[derive(Deserialize)]
        enum Repr {
            Int(BigInt),
            Ratio(BigRational),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(i) => Ok(Scalar::Int(i)),
            Repr::Ratio(r) => Ok(Scalar::from_ratio(r)),
        }
    }
}

// prints integers as-is and rationals as numer/denom
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Ratio(r) => write!(f, "{}", r),
        }
    }
}
