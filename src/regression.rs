//! Simple linear regression `y = A + B·x` by ordinary least squares.
//!
//! Coefficients come from the closed-form normal equations:
//!
//! ```text
//! Δ = n·Σx² − (Σx)²
//! B = (n·Σxy − Σx·Σy) / Δ
//! A = (Σx²·Σy − Σx·Σxy) / Δ
//! ```
//!
//! Reference: Taylor (1997), *An Introduction to Error Analysis* (2nd ed.),
//! §8.2–8.4.

use crate::error::{check_paired, check_sample, reject, StatsError, StatsResult};
use crate::stats::compensated_sum;

/// Fitted line `y = intercept + slope·x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit {
    /// A, the value of the line at x = 0.
    pub intercept: f64,
    /// B, the change in y per unit x.
    pub slope: f64,
    /// Number of points the line was fitted to.
    pub n: usize,
    sum_x2: f64,
    delta: f64,
}

/// One-sigma uncertainties of a [`LinearFit`].
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFitUncertainty {
    /// Scatter of the points about the line, `sqrt(Σ(y − A − Bx)² / (n − 2))`.
    pub sigma_y: f64,
    /// Uncertainty of the intercept, `σy·sqrt(Σx² / Δ)`.
    pub sigma_intercept: f64,
    /// Uncertainty of the slope, `σy·sqrt(n / Δ)`.
    pub sigma_slope: f64,
}

/// Fits `y = A + B·x` by least squares.
///
/// # Errors
/// - `LengthMismatch` if `x` and `y` differ in length.
/// - Divide-by-zero class if fewer than two points are given or every
///   `x` is identical (`Δ = 0`).
/// - `NonFinite` on NaN/Inf.
/// - `NumericOverflow` if the sums of squares or the coefficients leave
///   the `f64` range.
///
/// # Examples
/// ```
/// use u_fitstat::regression::linregress;
/// let fit = linregress(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(fit.as_tuple(), (0.0, 2.0));
/// ```
pub fn linregress(x: &[f64], y: &[f64]) -> StatsResult<LinearFit> {
    const OP: &str = "linregress";
    check_paired(OP, ("x", x), ("y", y))?;
    check_sample(OP, "x", x, 2)?;
    check_sample(OP, "y", y, 2)?;
    if x.iter().all(|&v| v == x[0]) {
        return Err(reject(OP, StatsError::DegenerateRegression));
    }

    let n = x.len() as f64;
    let sum_x = compensated_sum(x.iter().copied());
    let sum_y = compensated_sum(y.iter().copied());
    let sum_x2 = compensated_sum(x.iter().map(|&v| v * v));
    let sum_xy = compensated_sum(x.iter().zip(y).map(|(&a, &b)| a * b));

    let delta = n * sum_x2 - sum_x * sum_x;
    if !sum_x2.is_finite() || !delta.is_finite() {
        return Err(reject(OP, StatsError::NumericOverflow { field: "x" }));
    }
    if delta <= 0.0 {
        // Distinct x values so close together that Δ cancels to nothing.
        return Err(reject(OP, StatsError::DegenerateRegression));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / delta;
    let intercept = (sum_x2 * sum_y - sum_x * sum_xy) / delta;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(reject(OP, StatsError::NumericOverflow { field: "y" }));
    }
    log::trace!("linregress: n={}, intercept={intercept}, slope={slope}", x.len());

    Ok(LinearFit {
        intercept,
        slope,
        n: x.len(),
        sum_x2,
        delta,
    })
}

impl LinearFit {
    /// Returns `(intercept, slope)`.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.intercept, self.slope)
    }

    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Residuals `yᵢ − (A + B·xᵢ)`.
    ///
    /// # Errors
    /// `LengthMismatch` if `x` and `y` differ in length.
    pub fn residuals(&self, x: &[f64], y: &[f64]) -> StatsResult<Vec<f64>> {
        check_paired("LinearFit::residuals", ("x", x), ("y", y))?;
        Ok(x.iter()
            .zip(y)
            .map(|(&xi, &yi)| yi - self.predict(xi))
            .collect())
    }

    /// Uncertainties of the fitted coefficients, for the data the line was
    /// fitted to.
    ///
    /// # Errors
    /// - `LengthMismatch` if the data length differs from the fit's `n`.
    /// - `InsufficientData` if `n < 3` (two points leave no degrees of
    ///   freedom for the scatter).
    ///
    /// # Examples
    /// ```
    /// use u_fitstat::regression::linregress;
    /// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let y = [2.2, 4.1, 6.3, 7.9, 10.1];
    /// let fit = linregress(&x, &y).unwrap();
    /// let u = fit.uncertainties(&x, &y).unwrap();
    /// assert!((u.sigma_slope - 0.0489898).abs() < 1e-6);
    /// ```
    pub fn uncertainties(&self, x: &[f64], y: &[f64]) -> StatsResult<LinearFitUncertainty> {
        const OP: &str = "LinearFit::uncertainties";
        check_paired(OP, ("x", x), ("y", y))?;
        if x.len() != self.n {
            return Err(reject(
                OP,
                StatsError::LengthMismatch {
                    left: "x",
                    left_len: x.len(),
                    right: "fit",
                    right_len: self.n,
                },
            ));
        }
        check_sample(OP, "x", x, 3)?;

        let residuals = self.residuals(x, y)?;
        let ss = compensated_sum(residuals.iter().map(|r| r * r));
        let sigma_y = (ss / (self.n - 2) as f64).sqrt();
        Ok(LinearFitUncertainty {
            sigma_y,
            sigma_intercept: sigma_y * (self.sum_x2 / self.delta).sqrt(),
            sigma_slope: sigma_y * (self.n as f64 / self.delta).sqrt(),
        })
    }
}

impl From<LinearFit> for (f64, f64) {
    fn from(fit: LinearFit) -> Self {
        fit.as_tuple()
    }
}
