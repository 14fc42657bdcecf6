//! # u-fitstat
//!
//! Descriptive statistics and fit-quality measures over plain `f64` samples.
//!
//! The crate knows nothing about where the numbers came from (elevations,
//! timings, measurements); every function takes slices and returns values
//! or a [`StatsError`].
//!
//! ## Modules
//!
//! - [`stats`] — Mean, sample standard deviation, standard error, streaming accumulator
//! - [`gaussian`] — Gaussian density for scalars and series, [`Gaussian`] distribution
//! - [`regression`] — Simple linear least-squares fit with coefficient uncertainties
//! - [`correlation`] — Pearson correlation and covariance
//! - [`goodness`] — Reduced chi-squared and its p-value
//! - [`special`] — Normal CDF, error function, incomplete gamma
//! - [`random`] — Seeded Gaussian sampling for synthetic data
//!
//! ## Design Philosophy
//!
//! - **Explicit failure**: empty, degenerate or mismatched input is an
//!   error, never a silent NaN
//! - **Numerical stability**: compensated summation, Welford variance
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Example
//! ```
//! use u_fitstat::{linregress, mean, pearson, std_dev};
//!
//! let x = [1.0, 2.0, 3.0];
//! let y = [2.0, 4.0, 6.0];
//! assert_eq!(mean(&x).unwrap(), 2.0);
//! assert_eq!(std_dev(&y).unwrap(), 2.0);
//! assert_eq!(linregress(&x, &y).unwrap().as_tuple(), (0.0, 2.0));
//! assert_eq!(pearson(&x, &y).unwrap(), 1.0);
//! ```

pub mod correlation;
pub mod error;
pub mod gaussian;
pub mod goodness;
pub mod random;
pub mod regression;
pub mod special;
pub mod stats;

pub use correlation::{covariance, pearson};
pub use error::{ErrorKind, StatsError, StatsResult};
pub use gaussian::{
    gaussian, gaussian_scalar, gaussian_series, Gaussian, GaussianInput, GaussianOutput,
};
pub use goodness::{
    chi_squared, chi_squared_test, chi_squared_with, ChiSquaredOptions, ChiSquaredResult,
};
pub use regression::{linregress, LinearFit, LinearFitUncertainty};
pub use stats::{mean, std_dev, std_err, variance, WelfordAccumulator};
