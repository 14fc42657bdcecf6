//! Descriptive statistics: mean, sample standard deviation, standard error.
//!
//! All functions validate their input and report degenerate samples as
//! [`StatsError`](crate::StatsError)s instead of producing NaN.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm with Bessel's
//!   correction (denominator `n − 1`).
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

use crate::error::{check_sample, StatsResult};

/// Computes the arithmetic mean `Σx / n`.
///
/// # Errors
/// - [`StatsError::EmptyInput`](crate::StatsError::EmptyInput) if `data` is
///   empty (a divide-by-zero class error).
/// - [`StatsError::NonFinite`](crate::StatsError::NonFinite) if any value is
///   NaN or infinite.
///
/// # Examples
/// ```
/// use u_fitstat::stats::mean;
/// assert_eq!(mean(&[2.0, 4.0, 6.0]).unwrap(), 4.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    check_sample("mean", "x", data, 1)?;
    Ok(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance `Σ(xᵢ − x̄)² / (n − 1)`.
///
/// # Errors
/// Fails with a divide-by-zero class error when `data.len() < 2`, and with
/// `NonFinite` on NaN/Inf.
pub fn variance(data: &[f64]) -> StatsResult<f64> {
    check_sample("variance", "x", data, 2)?;
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    // count >= 2 was checked above, so the accumulator always has a value.
    Ok(acc.sample_variance().unwrap_or(0.0))
}

/// Computes the sample standard deviation `sqrt(Σ(xᵢ − x̄)² / (n − 1))`.
///
/// The result is never negative.
///
/// # Errors
/// Same as [`variance`]: `n < 2` is rejected.
///
/// # Examples
/// ```
/// use u_fitstat::stats::std_dev;
/// assert!((std_dev(&[2.0, 4.0, 6.0]).unwrap() - 2.0).abs() < 1e-15);
/// assert!(std_dev(&[1.0]).unwrap_err().is_divide_by_zero());
/// ```
pub fn std_dev(data: &[f64]) -> StatsResult<f64> {
    variance(data).map(f64::sqrt)
}

/// Computes the standard error of the mean, `std_dev(x) / sqrt(n)`.
///
/// # Examples
/// ```
/// use u_fitstat::stats::std_err;
/// let se = std_err(&[2.0, 4.0, 6.0]).unwrap();
/// assert!((se - 2.0 / 3.0_f64.sqrt()).abs() < 1e-15);
/// ```
pub fn std_err(data: &[f64]) -> StatsResult<f64> {
    let sd = std_dev(data)?;
    let se = sd / (data.len() as f64).sqrt();
    log::trace!("std_err: n={}, sd={sd}, se={se}", data.len());
    Ok(se)
}

// ---------------------------------------------------------------------------
// Compensated summation
// ---------------------------------------------------------------------------

/// Neumaier compensated summation.
///
/// Improved Kahan variant that also captures the low-order bits when the
/// addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
///
/// # Examples
/// ```
/// use u_fitstat::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1.0, 1e100, 1.0, -1e100]), 2.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    compensated_sum(data.iter().copied())
}

/// Neumaier summation over an iterator of terms.
pub(crate) fn compensated_sum<I>(terms: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, c) = terms.into_iter().fold((0.0_f64, 0.0_f64), |(sum, c), x| {
        let t = sum + x;
        let c = if sum.abs() >= x.abs() {
            c + ((sum - t) + x)
        } else {
            c + ((x - t) + sum)
        };
        (t, c)
    });
    // Once the sum overflows the compensation is inf − inf.
    if sum.is_finite() {
        sum + c
    } else {
        sum
    }
}

// ---------------------------------------------------------------------------
// Streaming accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for the mean, sample standard deviation and
/// standard error.
///
/// Useful when a dataset arrives in chunks, or when partial results from
/// several threads need to be combined with [`merge`](Self::merge).
///
/// # Examples
/// ```
/// use u_fitstat::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 6.0] {
///     acc.update(x);
/// }
/// assert_eq!(acc.mean(), Some(4.0));
/// assert_eq!(acc.sample_std_dev(), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WelfordAccumulator {
    count: u64,
    mean: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one observation into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            // First observation sets the mean exactly.
            self.mean = value;
            return;
        }
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of observations seen.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, `None` before the first observation.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample variance (n − 1), `None` with fewer than two observations.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Square root of [`sample_variance`](Self::sample_variance).
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }

    /// Standard error of the mean, `None` with fewer than two observations.
    pub fn std_err(&self) -> Option<f64> {
        self.sample_std_dev()
            .map(|sd| sd / (self.count as f64).sqrt())
    }

    /// Merges another accumulator into this one.
    ///
    /// Reference: Chan, Golub & LeVeque (1979), "Updating Formulae and a
    /// Pairwise Algorithm for Computing Sample Variances".
    pub fn merge(&mut self, other: &WelfordAccumulator) {
        if other.count == 0 {
            return;
        }
        if self.count == 0 {
            *self = other.clone();
            return;
        }
        let na = self.count as f64;
        let nb = other.count as f64;
        let n = na + nb;
        let delta = other.mean - self.mean;
        self.mean += delta * (nb / n);
        self.m2 += other.m2 + delta * delta * na * nb / n;
        self.count += other.count;
    }
}

impl Extend<f64> for WelfordAccumulator {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for x in iter {
            self.update(x);
        }
    }
}

impl FromIterator<f64> for WelfordAccumulator {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = Self::new();
        acc.extend(iter);
        acc
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
