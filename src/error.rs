//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Coarse classification of a [`StatsError`].
///
/// Every failure is either a division that would be by zero (empty input,
/// too few points, zero spread, zero uncertainty) or an input that is
/// malformed regardless of size (length mismatch, NaN, bad parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DivideByZero,
    InvalidInput,
}

/// Errors that can occur during statistical computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("empty input: {field} cannot be empty")]
    EmptyInput { field: &'static str },

    #[error("insufficient data: {field} has {got} values, need at least {needed}")]
    InsufficientData {
        field: &'static str,
        got: usize,
        needed: usize,
    },

    #[error("length mismatch: {left} has {left_len} values, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("zero variance: every value of {field} is identical")]
    ZeroVariance { field: &'static str },

    #[error("zero divisor: {field}[{index}] is zero")]
    ZeroDivisor { field: &'static str, index: usize },

    #[error("parameter {name} is zero")]
    ZeroParameter { name: &'static str },

    #[error("degenerate regression: all x values are identical (delta = 0)")]
    DegenerateRegression,

    #[error("numeric overflow: {field} is too large in magnitude to compute")]
    NumericOverflow { field: &'static str },

    #[error("non-finite value in {field} at index {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl StatsError {
    /// Returns the class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::EmptyInput { .. }
            | StatsError::InsufficientData { .. }
            | StatsError::ZeroVariance { .. }
            | StatsError::ZeroDivisor { .. }
            | StatsError::ZeroParameter { .. }
            | StatsError::DegenerateRegression => ErrorKind::DivideByZero,
            StatsError::LengthMismatch { .. }
            | StatsError::NonFinite { .. }
            | StatsError::NumericOverflow { .. }
            | StatsError::InvalidParameter { .. } => ErrorKind::InvalidInput,
        }
    }

    /// True for errors in the [`ErrorKind::DivideByZero`] class.
    pub fn is_divide_by_zero(&self) -> bool {
        self.kind() == ErrorKind::DivideByZero
    }
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

// ---------------------------------------------------------------------------
// Input validation shared by the statistic modules
// ---------------------------------------------------------------------------

/// Rejects samples shorter than `needed` or containing NaN/Inf.
pub(crate) fn check_sample(
    op: &'static str,
    field: &'static str,
    data: &[f64],
    needed: usize,
) -> StatsResult<()> {
    let err = if data.is_empty() {
        Some(StatsError::EmptyInput { field })
    } else if data.len() < needed {
        Some(StatsError::InsufficientData {
            field,
            got: data.len(),
            needed,
        })
    } else {
        data.iter()
            .position(|v| !v.is_finite())
            .map(|index| StatsError::NonFinite { field, index })
    };
    match err {
        Some(e) => Err(reject(op, e)),
        None => Ok(()),
    }
}

/// Rejects paired samples whose lengths differ.
pub(crate) fn check_paired(
    op: &'static str,
    left: (&'static str, &[f64]),
    right: (&'static str, &[f64]),
) -> StatsResult<()> {
    if left.1.len() != right.1.len() {
        return Err(reject(
            op,
            StatsError::LengthMismatch {
                left: left.0,
                left_len: left.1.len(),
                right: right.0,
                right_len: right.1.len(),
            },
        ));
    }
    Ok(())
}

/// Logs a rejected input and hands the error back for returning.
pub(crate) fn reject(op: &'static str, err: StatsError) -> StatsError {
    log::debug!("{op}: rejected input ({err})");
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            StatsError::EmptyInput { field: "x" }.kind(),
            ErrorKind::DivideByZero
        );
        assert_eq!(
            StatsError::DegenerateRegression.kind(),
            ErrorKind::DivideByZero
        );
        assert_eq!(
            StatsError::NonFinite { field: "x", index: 0 }.kind(),
            ErrorKind::InvalidInput
        );
        let mismatch = StatsError::LengthMismatch {
            left: "x",
            left_len: 3,
            right: "y",
            right_len: 2,
        };
        assert_eq!(mismatch.kind(), ErrorKind::InvalidInput);
        assert!(!mismatch.is_divide_by_zero());
        assert_eq!(
            StatsError::NumericOverflow { field: "x" }.kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_display_messages() {
        let e = StatsError::InsufficientData {
            field: "x",
            got: 1,
            needed: 2,
        };
        assert_eq!(
            e.to_string(),
            "insufficient data: x has 1 values, need at least 2"
        );
        let e = StatsError::ZeroDivisor {
            field: "s",
            index: 4,
        };
        assert_eq!(e.to_string(), "zero divisor: s[4] is zero");
    }

    #[test]
    fn test_check_sample() {
        assert!(check_sample("t", "x", &[1.0, 2.0], 2).is_ok());
        assert_eq!(
            check_sample("t", "x", &[], 1),
            Err(StatsError::EmptyInput { field: "x" })
        );
        assert_eq!(
            check_sample("t", "x", &[1.0], 2),
            Err(StatsError::InsufficientData {
                field: "x",
                got: 1,
                needed: 2
            })
        );
        assert_eq!(
            check_sample("t", "x", &[1.0, f64::NAN], 1),
            Err(StatsError::NonFinite {
                field: "x",
                index: 1
            })
        );
    }

    #[test]
    fn test_check_paired() {
        assert!(check_paired("t", ("x", &[1.0]), ("y", &[2.0])).is_ok());
        assert!(check_paired("t", ("x", &[1.0]), ("y", &[])).is_err());
    }
}
