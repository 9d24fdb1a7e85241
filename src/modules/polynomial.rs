use crate::modules::error::PolynomialError;
use crate::modules::scalar::Scalar;
use num_traits::{One, Zero};
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * polynomial.rs implements single-variable polynomials over the exact
 * scalars in scalar.rs: construction and normalization, the ring operations,
 * evaluation, exact long division, and canonical unicode rendering.
 */

// digit-to-superscript lookup used when rendering exponents
const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

// maps a power to its superscript digits, one glyph per decimal digit
fn superscript(power: usize) -> String {
    power
        .to_string()
        .bytes()
        .map(|digit| SUPERSCRIPTS[(digit - b'0') as usize])
        .collect()
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Polynomial {
    // coefficients stored highest to lowest degree, never with leading
    // zeros except for the zero polynomial, which is exactly [0]
    coeffs: Vec<Scalar>,
}

impl Polynomial {
    // the single point where canonical form is established: every operation
    // routes its result back through here
    pub fn new<T: Into<Scalar>>(coeffs: Vec<T>) -> Self {
        let mut coeffs: Vec<Scalar> = coeffs
            .into_iter()
            .map(Into::into)
            .skip_while(Scalar::is_zero)
            .collect();

        // edge case: all-zero (or empty) input is the zero polynomial
        if coeffs.is_empty() {
            coeffs.push(Scalar::zero());
        }

        Polynomial { coeffs }
    }

    // zero polynomial constructor
    pub fn zero() -> Self {
        Polynomial::new(Vec::<Scalar>::new())
    }

    // degree-0 polynomial wrapping a bare number
    pub fn constant<T: Into<Scalar>>(value: T) -> Self {
        Polynomial::new(vec![value.into()])
    }

    // constructs the monomial coeff * x^power
    pub fn monomial<T: Into<Scalar>>(power: usize, coeff: T) -> Self {
        let mut coeffs = vec![Scalar::zero(); power + 1];
        coeffs[0] = coeff.into();
        Polynomial::new(coeffs)
    }

    // degree of the stored representation; the zero polynomial reports 0
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    // coefficients, highest degree first
    pub fn coeffs(&self) -> &[Scalar] {
        &self.coeffs
    }

    pub fn leading_coeff(&self) -> &Scalar {
        &self.coeffs[0]
    }

    /// Pairs every coefficient with its power, in strictly decreasing,
    /// contiguous power order from `degree` down to 0. Restartable.
    pub fn coeff_and_power(&self) -> impl Iterator<Item = (&Scalar, usize)> + '_ {
        let degree = self.degree();
        self.coeffs
            .iter()
            .enumerate()
            .map(move |(idx, coeff)| (coeff, degree - idx))
    }

    // unary plus: returns the polynomial unchanged
    pub fn identity(&self) -> Polynomial {
        self.clone()
    }

    // term-product: multiplies the whole polynomial by the single monomial
    // coeff * x^power
    fn term_mul(&self, coeff: &Scalar, power: usize) -> Polynomial {
        let claimed_degree = self.degree() + power;
        let mut coeffs: Vec<Scalar> = self
            .coeffs
            .iter()
            .map(|c| coeff.clone() * c.clone())
            .collect();

        // shift every power up by `power`; padding out to the claimed degree
        // also covers the degenerate case of a sequence that came out shorter
        // than degree + 1
        coeffs.resize(claimed_degree + 1, Scalar::zero());
        Polynomial::new(coeffs)
    }

    /// Evaluates the polynomial at x, term for term over the same
    /// (coefficient, power) enumeration the representation defines.
    pub fn evaluate<T: Into<Scalar>>(&self, x: T) -> Scalar {
        let x = x.into();
        let mut total = Scalar::zero();
        for (coeff, power) in self.coeff_and_power() {
            total = total + coeff.clone() * x.pow(power);
        }
        total
    }

    // evaluate over a domain of points
    pub fn evaluate_domain(&self, domain: &[Scalar]) -> Vec<Scalar> {
        domain.iter().map(|x| self.evaluate(x.clone())).collect()
    }

    /// Exact polynomial long division, returning (quotient, remainder) with
    /// `dividend == quotient * divisor + remainder` and the remainder either
    /// zero or of degree strictly below the divisor's.
    pub fn divide(
        &self,
        divisor: &Polynomial,
    ) -> Result<(Polynomial, Polynomial), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }
        if self.degree() < divisor.degree() {
            return Err(PolynomialError::InvalidDivision {
                dividend_degree: self.degree(),
                divisor_degree: divisor.degree(),
            });
        }

        let mut quotient = Polynomial::zero();
        let mut remainder = self.clone();

        // classical long division: cancel the remainder's leading term with
        // an exact rational multiple of the divisor until the remainder
        // collapses to zero or drops below the divisor's degree
        while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
            let lead = remainder.leading_coeff().clone();
            let multiple = lead / divisor.leading_coeff().clone();
            let shift = remainder.degree() - divisor.degree();

            quotient = quotient + Polynomial::monomial(shift, multiple.clone());
            remainder = remainder - divisor.term_mul(&multiple, shift);
        }

        Ok((quotient, remainder))
    }

    // exponentiation by repeated squaring
    pub fn pow(&self, exponent: u32) -> Polynomial {
        let mut result = Polynomial::constant(1);
        let mut base = self.clone();
        let mut exp = exponent;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }

    // Save the coefficient sequence to a JSON file
    pub fn save(&self, filename: &str) -> io::Result<()> {
        let json = serde_json::to_string(&self.coeffs)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    // Load a polynomial from a JSON file; re-normalizes through the
    // constructor so canonical form survives the round trip
    pub fn load(filename: &str) -> io::Result<Polynomial> {
        let mut file = File::open(filename)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        let coeffs: Vec<Scalar> = serde_json::from_str(&json)?;
        Ok(Polynomial::new(coeffs))
    }
}

// a bare scalar is the degree-0 polynomial wrapping it
impl From<Scalar> for Polynomial {
    fn from(value: Scalar) -> Polynomial {
        Polynomial::constant(value)
    }
}

// polynomial addition
impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, other: Polynomial) -> Polynomial {
        // left-pad both operands with zeros so positions line up by power
        let common_degree = self.degree().max(other.degree());
        let mut lhs = vec![Scalar::zero(); common_degree - self.degree()];
        lhs.extend(self.coeffs);
        let mut rhs = vec![Scalar::zero(); common_degree - other.degree()];
        rhs.extend(other.coeffs);

        // elementwise sum; the constructor collapses any leading cancellation
        let coeffs: Vec<Scalar> = lhs.into_iter().zip(rhs).map(|(c1, c2)| c1 + c2).collect();
        Polynomial::new(coeffs)
    }
}

// polynomial subtraction
impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, other: Polynomial) -> Polynomial {
        self + (-other) // add negated rhs
    }
}

// polynomial multiplication
impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, other: Polynomial) -> Polynomial {
        // repeated scaled-and-shifted addition: fold the term-products of
        // every rhs term onto the zero polynomial
        let mut sum = Polynomial::zero();
        for (coeff, power) in other.coeff_and_power() {
            sum = sum + self.term_mul(coeff, power);
        }
        sum
    }
}

// negation
impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::new(self.coeffs.into_iter().map(Scalar::neg).collect::<Vec<_>>())
    }
}

// bare numbers as right operands coerce to degree-0 polynomials
impl Add<Scalar> for Polynomial {
    type Output = Polynomial;

    fn add(self, scalar: Scalar) -> Polynomial {
        self + Polynomial::constant(scalar)
    }
}

impl Sub<Scalar> for Polynomial {
    type Output = Polynomial;

    fn sub(self, scalar: Scalar) -> Polynomial {
        self - Polynomial::constant(scalar)
    }
}

impl Mul<Scalar> for Polynomial {
    type Output = Polynomial;

    fn mul(self, scalar: Scalar) -> Polynomial {
        self * Polynomial::constant(scalar)
    }
}

impl Add<i64> for Polynomial {
    type Output = Polynomial;

    fn add(self, scalar: i64) -> Polynomial {
        self + Scalar::from(scalar)
    }
}

impl Sub<i64> for Polynomial {
    type Output = Polynomial;

    fn sub(self, scalar: i64) -> Polynomial {
        self - Scalar::from(scalar)
    }
}

impl Mul<i64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, scalar: i64) -> Polynomial {
        self * Scalar::from(scalar)
    }
}

// operator form of long division; returns the quotient and panics where
// divide() would fail
impl Div for Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: Polynomial) -> Polynomial {
        match self.divide(&rhs) {
            Ok((quotient, _)) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

// fold with the zero polynomial as seed
impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Polynomial>>(iter: I) -> Polynomial {
        polynomial_sum(iter)
    }
}

/// Sums a sequence of polynomials; the empty sequence yields zero.
pub fn polynomial_sum<I: IntoIterator<Item = Polynomial>>(polynomials: I) -> Polynomial {
    polynomials
        .into_iter()
        .fold(Polynomial::zero(), |acc, p| acc + p)
}

// prints the canonical rendering, e.g. Polynomial(4x³-7x²+x-5)
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "Polynomial(0)");
        }

        let mut terms = String::new();
        for (coeff, power) in self.coeff_and_power() {
            if coeff.is_zero() {
                continue;
            }
            // negative coefficients carry their own sign
            if !coeff.is_negative() {
                terms.push('+');
            }
            // a bare coefficient of 1 on a nonzero power is elided
            if !coeff.is_one() || power == 0 {
                terms.push_str(&coeff.to_string());
            }
            if power == 1 {
                terms.push('x');
            } else if power > 1 {
                terms.push('x');
                terms.push_str(&superscript(power));
            }
        }

        // the first term never shows a redundant leading plus
        let terms = terms.strip_prefix('+').unwrap_or(&terms);
        write!(f, "Polynomial({})", terms)
    }
}
