//! Reduced chi-squared goodness-of-fit.
//!
//! Compares observed values `o` against model expectations `e`, weighting
//! each residual by the measurement uncertainty `s`:
//!
//! ```text
//! χ²   = Σ ((oᵢ − eᵢ) / sᵢ)²
//! χ²_ν = χ² / ν,   ν = n − fitted_params
//! ```
//!
//! A reduced value near 1 means the residuals are consistent with the
//! stated uncertainties; well above 1 points at a poor model or
//! underestimated errors.

use crate::error::{check_paired, check_sample, reject, StatsError, StatsResult};
use crate::special;
use crate::stats::compensated_sum;

/// Options for [`chi_squared_with`] and [`chi_squared_test`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChiSquaredOptions {
    /// Number of model parameters estimated from the same data that
    /// produced `e` (2 for a fitted straight line). Subtracted from `n` to
    /// get the degrees of freedom. Default: 0.
    pub fitted_params: usize,
}

impl ChiSquaredOptions {
    pub fn with_fitted_params(fitted_params: usize) -> Self {
        Self { fitted_params }
    }
}

/// Outcome of a chi-squared goodness-of-fit test.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquaredResult {
    /// Raw χ² sum.
    pub statistic: f64,
    /// χ² divided by the degrees of freedom.
    pub reduced: f64,
    /// Degrees of freedom ν.
    pub dof: usize,
    /// Probability of a χ² at least this large if the model is correct.
    pub p_value: f64,
}

/// Reduced chi-squared `(1/n)·Σ((oᵢ − eᵢ)² / sᵢ²)`.
///
/// # Errors
/// - `EmptyInput` when the sequences are empty (divide-by-zero class).
/// - `ZeroDivisor` when some `sᵢ` is zero (divide-by-zero class).
/// - `LengthMismatch` when `o`, `e` and `s` differ in length.
/// - `NonFinite` on NaN/Inf.
///
/// # Examples
/// ```
/// use u_fitstat::goodness::chi_squared;
/// assert_eq!(chi_squared(&[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]).unwrap(), 0.0);
/// ```
pub fn chi_squared(o: &[f64], e: &[f64], s: &[f64]) -> StatsResult<f64> {
    chi_squared_with(o, e, s, &ChiSquaredOptions::default())
}

/// Reduced chi-squared with `ν = n − options.fitted_params` degrees of
/// freedom.
///
/// # Errors
/// As [`chi_squared`], plus `InsufficientData` when `fitted_params ≥ n`.
pub fn chi_squared_with(
    o: &[f64],
    e: &[f64],
    s: &[f64],
    options: &ChiSquaredOptions,
) -> StatsResult<f64> {
    let (statistic, dof) = chi_squared_sum("chi_squared", o, e, s, options)?;
    Ok(statistic / dof as f64)
}

/// Full chi-squared test: raw statistic, reduced value, degrees of freedom
/// and upper-tail p-value.
///
/// # Examples
/// ```
/// use u_fitstat::goodness::{chi_squared_test, ChiSquaredOptions};
/// let o = [10.0, 12.0, 9.0];
/// let e = [11.0, 11.0, 11.0];
/// let s = [1.0, 1.0, 2.0];
/// let r = chi_squared_test(&o, &e, &s, &ChiSquaredOptions::default()).unwrap();
/// assert_eq!(r.statistic, 3.0);
/// assert_eq!(r.dof, 3);
/// assert!((r.p_value - 0.391625).abs() < 1e-6);
/// ```
pub fn chi_squared_test(
    o: &[f64],
    e: &[f64],
    s: &[f64],
    options: &ChiSquaredOptions,
) -> StatsResult<ChiSquaredResult> {
    let (statistic, dof) = chi_squared_sum("chi_squared_test", o, e, s, options)?;
    let p_value = special::chi_squared_sf(statistic, dof as f64);
    log::trace!("chi_squared_test: chi2={statistic}, dof={dof}, p={p_value}");
    Ok(ChiSquaredResult {
        statistic,
        reduced: statistic / dof as f64,
        dof,
        p_value,
    })
}

/// Validates the inputs and returns `(χ², ν)` with `ν ≥ 1`.
fn chi_squared_sum(
    op: &'static str,
    o: &[f64],
    e: &[f64],
    s: &[f64],
    options: &ChiSquaredOptions,
) -> StatsResult<(f64, usize)> {
    check_paired(op, ("o", o), ("e", e))?;
    check_paired(op, ("o", o), ("s", s))?;
    check_sample(op, "o", o, 1)?;
    check_sample(op, "e", e, 1)?;
    check_sample(op, "s", s, 1)?;
    if let Some(index) = s.iter().position(|&v| v == 0.0) {
        return Err(reject(op, StatsError::ZeroDivisor { field: "s", index }));
    }

    let n = o.len();
    if options.fitted_params >= n {
        return Err(reject(
            op,
            StatsError::InsufficientData {
                field: "o",
                got: n,
                needed: options.fitted_params + 1,
            },
        ));
    }

    let statistic = compensated_sum(o.iter().zip(e).zip(s).map(|((&oi, &ei), &si)| {
        // Dividing before squaring keeps tiny `s` from underflowing to 0.
        let z = (oi - ei) / si;
        z * z
    }));
    Ok((statistic, n - options.fitted_params))
}
