use thiserror::Error;

/// Errors produced by polynomial operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolynomialError {
    #[error("invalid division: dividend degree {dividend_degree} is below divisor degree {divisor_degree}")]
    InvalidDivision {
        dividend_degree: usize,
        divisor_degree: usize,
    },

    #[error("cannot divide by the zero polynomial")]
    DivisionByZero,

    #[error("unsupported operand: {0}")]
    UnsupportedOperand(String),
}
