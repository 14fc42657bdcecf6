//! Linear association between paired samples.

use crate::error::{check_paired, check_sample, reject, StatsError, StatsResult};
use crate::stats::{compensated_sum, mean};

/// Computes the sample covariance `Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)`.
///
/// # Errors
/// `LengthMismatch` for unequal lengths, a divide-by-zero class error when
/// `n < 2`, `NonFinite` on NaN/Inf.
///
/// # Examples
/// ```
/// use u_fitstat::correlation::covariance;
/// let cov = covariance(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap();
/// assert!((cov - 5.0).abs() < 1e-14);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> StatsResult<f64> {
    const OP: &str = "covariance";
    check_paired(OP, ("x", x), ("y", y))?;
    check_sample(OP, "x", x, 2)?;
    check_sample(OP, "y", y, 2)?;
    let (mean_x, mean_y) = (mean(x)?, mean(y)?);
    let sum = compensated_sum(x.iter().zip(y).map(|(&a, &b)| (a - mean_x) * (b - mean_y)));
    Ok(sum / (x.len() - 1) as f64)
}

/// Pearson product-moment correlation coefficient.
///
/// ```text
/// r = Σ(xᵢ − x̄)(yᵢ − ȳ) / sqrt(Σ(xᵢ − x̄)² · Σ(yᵢ − ȳ)²)
/// ```
///
/// The result is clamped to `[-1, 1]` so rounding never pushes a perfect
/// correlation past the bounds.
///
/// # Errors
/// - `LengthMismatch` if `x` and `y` differ in length.
/// - `EmptyInput` for empty samples.
/// - `ZeroVariance` if either sample is constant (the denominator is zero).
/// - `NonFinite` on NaN/Inf.
/// - `NumericOverflow` if the squared deviations exceed `f64::MAX`.
///
/// # Examples
/// ```
/// use u_fitstat::correlation::pearson;
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap(), 1.0);
/// assert_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap(), -1.0);
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> StatsResult<f64> {
    const OP: &str = "pearson";
    check_paired(OP, ("x", x), ("y", y))?;
    check_sample(OP, "x", x, 1)?;
    check_sample(OP, "y", y, 1)?;
    // A rounded mean can sit a hair off a repeated value, so constant
    // samples are caught before the sums rather than by `sxx == 0`.
    if x.iter().all(|&v| v == x[0]) {
        return Err(reject(OP, StatsError::ZeroVariance { field: "x" }));
    }
    if y.iter().all(|&v| v == y[0]) {
        return Err(reject(OP, StatsError::ZeroVariance { field: "y" }));
    }

    let (mean_x, mean_y) = (mean(x)?, mean(y)?);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if !(sxx.is_finite() && syy.is_finite() && sxy.is_finite()) {
        return Err(reject(OP, StatsError::NumericOverflow { field: "x, y" }));
    }
    if sxx == 0.0 {
        return Err(reject(OP, StatsError::ZeroVariance { field: "x" }));
    }
    if syy == 0.0 {
        return Err(reject(OP, StatsError::ZeroVariance { field: "y" }));
    }

    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    log::trace!("pearson: n={}, r={r}", x.len());
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pearson_perfect_positive() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), Ok(1.0));
    }

    #[test]
    fn test_pearson_perfect_negative() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), Ok(-1.0));
    }

    #[test]
    fn test_pearson_known_value() {
        // Anscombe's quartet, set I: r ≈ 0.81642
        let x = [10.0, 8.0, 13.0, 9.0, 11.0, 14.0, 6.0, 4.0, 12.0, 7.0, 5.0];
        let y = [8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68];
        assert_abs_diff_eq!(pearson(&x, &y).unwrap(), 0.81642051634484, epsilon = 1e-10);
    }

    #[test]
    fn test_pearson_uncorrelated() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.0, -1.0, -1.0, 1.0];
        assert_abs_diff_eq!(pearson(&x, &y).unwrap(), 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pearson_zero_variance() {
        let err = pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, StatsError::ZeroVariance { field: "x" });
        assert_eq!(err.kind(), ErrorKind::DivideByZero);
        assert_eq!(
            pearson(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]),
            Err(StatsError::ZeroVariance { field: "y" })
        );
    }

    #[test]
    fn test_pearson_non_integer_constant() {
        assert_eq!(
            pearson(&[0.1; 3], &[0.0, 1.0, 2.0]),
            Err(StatsError::ZeroVariance { field: "x" })
        );
        for &c in &[0.1, 0.2, 0.3, 0.7, 1.1, 1e-3, 123.456, 2.675] {
            for n in 3..12 {
                let constant = vec![c; n];
                let ramp: Vec<f64> = (0..n).map(|i| i as f64).collect();
                let err = pearson(&constant, &ramp).unwrap_err();
                assert!(err.is_divide_by_zero(), "c={c} n={n}");
                assert_eq!(
                    pearson(&ramp, &constant),
                    Err(StatsError::ZeroVariance { field: "y" })
                );
            }
        }
    }

    #[test]
    fn test_pearson_overflow() {
        let err = pearson(&[1e300, -1e300, 5e299], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, StatsError::NumericOverflow { field: "x, y" });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_pearson_invalid_input() {
        assert!(pearson(&[], &[]).unwrap_err().is_divide_by_zero());
        assert_eq!(
            pearson(&[1.0, 2.0], &[1.0]).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            pearson(&[1.0, f64::INFINITY], &[1.0, 2.0]).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_covariance() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert_abs_diff_eq!(covariance(&x, &y).unwrap(), -5.0, epsilon = 1e-14);
        // cov(x, x) is the sample variance
        assert_abs_diff_eq!(
            covariance(&x, &x).unwrap(),
            crate::stats::variance(&x).unwrap(),
            epsilon = 1e-14
        );
        assert!(covariance(&[1.0], &[1.0]).unwrap_err().is_divide_by_zero());
    }
}
