//! Gaussian (normal) probability density.
//!
//! The density can be evaluated at a single point or element-wise over a
//! series. Callers that do not know statically which shape they hold use
//! the tagged [`GaussianInput`] with [`gaussian`].
//!
//! # Mathematical Definition
//! ```text
//! f(x; m, sd) = 1 / (sd·√(2π)) · exp(−(x − m)² / (2·sd²))
//! ```

use crate::error::{check_sample, reject, StatsError, StatsResult};
use crate::special;
use crate::stats;

/// Point or series argument for [`gaussian`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaussianInput<'a> {
    Scalar(f64),
    Series(&'a [f64]),
}

impl From<f64> for GaussianInput<'_> {
    fn from(x: f64) -> Self {
        GaussianInput::Scalar(x)
    }
}

impl<'a> From<&'a [f64]> for GaussianInput<'a> {
    fn from(xs: &'a [f64]) -> Self {
        GaussianInput::Series(xs)
    }
}

impl<'a> From<&'a Vec<f64>> for GaussianInput<'a> {
    fn from(xs: &'a Vec<f64>) -> Self {
        GaussianInput::Series(xs.as_slice())
    }
}

/// Result of [`gaussian`], shaped like its input.
#[derive(Debug, Clone, PartialEq)]
pub enum GaussianOutput {
    Scalar(f64),
    Series(Vec<f64>),
}

impl GaussianOutput {
    /// Returns the value if this is a scalar result.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            GaussianOutput::Scalar(v) => Some(*v),
            GaussianOutput::Series(_) => None,
        }
    }

    /// Returns the densities as a vector; a scalar becomes a one-element vector.
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            GaussianOutput::Scalar(v) => vec![v],
            GaussianOutput::Series(vs) => vs,
        }
    }
}

/// Evaluates the Gaussian density for a scalar or a series.
///
/// # Examples
/// ```
/// use u_fitstat::gaussian::{gaussian, GaussianInput, GaussianOutput};
/// let peak = gaussian(0.0, 1.0, GaussianInput::Scalar(0.0)).unwrap();
/// assert!((peak.as_scalar().unwrap() - 0.3989422804).abs() < 1e-10);
///
/// let xs = [-1.0, 0.0, 1.0];
/// let out = gaussian(0.0, 1.0, GaussianInput::from(&xs[..])).unwrap();
/// assert!(matches!(out, GaussianOutput::Series(ref v) if v.len() == 3));
/// ```
pub fn gaussian(m: f64, sd: f64, x: GaussianInput<'_>) -> StatsResult<GaussianOutput> {
    match x {
        GaussianInput::Scalar(x) => gaussian_scalar(m, sd, x).map(GaussianOutput::Scalar),
        GaussianInput::Series(xs) => gaussian_series(m, sd, xs).map(GaussianOutput::Series),
    }
}

/// Gaussian density at a single point.
///
/// # Errors
/// - `ZeroParameter` if `sd == 0` (divide-by-zero class).
/// - `InvalidParameter` if `sd < 0` or `m`/`sd` are not finite.
/// - `NonFinite` if `x` is NaN or infinite.
pub fn gaussian_scalar(m: f64, sd: f64, x: f64) -> StatsResult<f64> {
    check_params("gaussian_scalar", m, sd)?;
    if !x.is_finite() {
        return Err(reject(
            "gaussian_scalar",
            StatsError::NonFinite { field: "x", index: 0 },
        ));
    }
    Ok(density(m, sd, x))
}

/// Gaussian density evaluated element-wise over `xs`.
///
/// The output has the same length as `xs` and each element equals the
/// corresponding [`gaussian_scalar`] call. An empty series yields an
/// empty vector.
pub fn gaussian_series(m: f64, sd: f64, xs: &[f64]) -> StatsResult<Vec<f64>> {
    check_params("gaussian_series", m, sd)?;
    if let Some(index) = xs.iter().position(|v| !v.is_finite()) {
        return Err(reject(
            "gaussian_series",
            StatsError::NonFinite { field: "x", index },
        ));
    }
    Ok(xs.iter().map(|&x| density(m, sd, x)).collect())
}

fn check_params(op: &'static str, m: f64, sd: f64) -> StatsResult<()> {
    if !m.is_finite() {
        return Err(reject(
            op,
            StatsError::InvalidParameter {
                name: "m",
                value: m,
                reason: "mean must be finite",
            },
        ));
    }
    if sd == 0.0 {
        return Err(reject(op, StatsError::ZeroParameter { name: "sd" }));
    }
    if !sd.is_finite() || sd < 0.0 {
        return Err(reject(
            op,
            StatsError::InvalidParameter {
                name: "sd",
                value: sd,
                reason: "standard deviation must be finite and positive",
            },
        ));
    }
    Ok(())
}

#[inline]
fn density(m: f64, sd: f64, x: f64) -> f64 {
    // Standardise first: `sd * sd` underflows to 0 for sd below ~1e-154.
    special::standard_normal_pdf((x - m) / sd) / sd
}

// ============================================================================
// Gaussian distribution
// ============================================================================

/// Normal distribution N(m, sd²) with validated parameters.
///
/// Holding the parameters in a type saves re-validating them when the
/// same curve is evaluated many times, e.g. overlaying a fitted density on
/// a histogram of elevations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    mean: f64,
    sd: f64,
}

impl Gaussian {
    /// Creates N(mean, sd²).
    ///
    /// # Errors
    /// Same parameter rules as [`gaussian_scalar`].
    pub fn new(mean: f64, sd: f64) -> StatsResult<Self> {
        check_params("Gaussian::new", mean, sd)?;
        Ok(Self { mean, sd })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self { mean: 0.0, sd: 1.0 }
    }

    /// Fits a Gaussian to `data` using its mean and sample standard
    /// deviation.
    ///
    /// # Errors
    /// Fails when `data` has fewer than two values, contains NaN/Inf, or
    /// has zero spread.
    ///
    /// # Examples
    /// ```
    /// use u_fitstat::gaussian::Gaussian;
    /// let g = Gaussian::from_sample(&[2.0, 4.0, 6.0]).unwrap();
    /// assert_eq!(g.mean(), 4.0);
    /// assert!((g.std_dev() - 2.0).abs() < 1e-15);
    /// ```
    pub fn from_sample(data: &[f64]) -> StatsResult<Self> {
        check_sample("Gaussian::from_sample", "x", data, 2)?;
        let mean = stats::mean(data)?;
        let sd = stats::std_dev(data)?;
        if sd == 0.0 {
            return Err(reject(
                "Gaussian::from_sample",
                StatsError::ZeroVariance { field: "x" },
            ));
        }
        log::trace!("Gaussian::from_sample: n={}, mean={mean}, sd={sd}", data.len());
        Ok(Self { mean, sd })
    }

    /// Location parameter.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Scale parameter, always positive and finite.
    pub fn std_dev(&self) -> f64 {
        self.sd
    }

    /// `sd²`.
    pub fn variance(&self) -> f64 {
        self.sd * self.sd
    }

    /// Density at `x`. Infinite `x` gives 0, NaN gives NaN.
    pub fn pdf(&self, x: f64) -> f64 {
        density(self.mean, self.sd, x)
    }

    /// Densities at every point of `xs`.
    pub fn pdf_series(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    /// CDF: Φ((x − mean) / sd).
    pub fn cdf(&self, x: f64) -> f64 {
        special::standard_normal_cdf((x - self.mean) / self.sd)
    }
}

impl Default for Gaussian {
    fn default() -> Self {
        Self::standard()
    }
}
