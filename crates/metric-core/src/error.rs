//! Error type for the checked distance operations.
//!
//! Operators never fail beyond the native behavior of the representation
//! type; these errors only come back from `try_cast` and the `checked_*`
//! methods.

use std::error::Error;
use std::fmt;

/// Errors from checked conversion and checked division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistanceError {
    /// The divisor of a `checked_div`, `checked_rem` or `checked_ratio`
    /// was zero.
    DivisionByZero,
    /// A checked conversion overflowed the wide intermediate or produced
    /// a value the target representation cannot hold.
    Overflow {
        /// Numerator of the conversion factor being applied.
        num: u128,
        /// Denominator of the conversion factor being applied.
        den: u128,
    },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division of a distance by zero"),
            Self::Overflow { num, den } => {
                write!(f, "distance conversion by {num}/{den} overflowed")
            }
        }
    }
}

impl Error for DistanceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DistanceError::DivisionByZero.to_string(),
            "division of a distance by zero"
        );
        assert_eq!(
            DistanceError::Overflow { num: 1_000, den: 1 }.to_string(),
            "distance conversion by 1000/1 overflowed"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn Error> = Box::new(DistanceError::DivisionByZero);
        assert!(err.source().is_none());
    }
}
