//! End-to-end use of the public API on a small elevation dataset.

use approx::assert_abs_diff_eq;
use u_fitstat::random::{create_rng, sample_gaussian};
use u_fitstat::{
    chi_squared, chi_squared_test, gaussian, gaussian_scalar, gaussian_series, linregress, mean,
    pearson, std_dev, std_err, ChiSquaredOptions, ErrorKind, Gaussian, GaussianInput,
    GaussianOutput, WelfordAccumulator,
};

/// Summit elevations in metres for one region.
const ELEVATIONS: [f64; 10] = [
    1612.0, 2329.0, 880.0, 1135.0, 3776.0, 1300.0, 2158.0, 1492.0, 2568.0, 1839.0,
];

#[test]
fn descriptive_statistics() {
    assert_abs_diff_eq!(mean(&ELEVATIONS).unwrap(), 1908.9, epsilon = 1e-9);
    assert_abs_diff_eq!(std_dev(&ELEVATIONS).unwrap(), 846.8350816750304, epsilon = 1e-9);
    assert_abs_diff_eq!(std_err(&ELEVATIONS).unwrap(), 267.79276606278137, epsilon = 1e-9);

    let acc: WelfordAccumulator = ELEVATIONS.iter().copied().collect();
    assert_abs_diff_eq!(acc.std_err().unwrap(), 267.79276606278137, epsilon = 1e-9);
}

#[test]
fn gaussian_overlay_matches_fitted_parameters() {
    let m = mean(&ELEVATIONS).unwrap();
    let sd = std_dev(&ELEVATIONS).unwrap();
    let fitted = Gaussian::from_sample(&ELEVATIONS).unwrap();

    let grid: Vec<f64> = (0..=40).map(|i| i as f64 * 100.0).collect();
    let curve = gaussian_series(m, sd, &grid).unwrap();
    assert_eq!(curve.len(), grid.len());
    assert_eq!(curve, fitted.pdf_series(&grid));

    // Peak of the curve sits at the grid point closest to the mean.
    let (peak_idx, _) = curve
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
    assert_eq!(grid[peak_idx], 1900.0);

    match gaussian(m, sd, GaussianInput::Series(&grid)).unwrap() {
        GaussianOutput::Series(v) => assert_eq!(v, curve),
        GaussianOutput::Scalar(_) => panic!("series input must give series output"),
    }
    assert_eq!(
        gaussian(m, sd, GaussianInput::Scalar(m)).unwrap().as_scalar(),
        Some(gaussian_scalar(m, sd, m).unwrap())
    );
}

#[test]
fn regression_and_goodness_of_fit() {
    // Elevation against distance from a rift axis (km), with scatter.
    let distance = [5.0, 12.0, 20.0, 31.0, 44.0, 52.0, 63.0, 75.0];
    let elevation = [3120.0, 2890.0, 2710.0, 2380.0, 2090.0, 1840.0, 1620.0, 1260.0];
    let uncertainty = [60.0; 8];

    let fit = linregress(&distance, &elevation).unwrap();
    assert!(fit.slope < 0.0);
    let r = pearson(&distance, &elevation).unwrap();
    assert!(r < -0.99, "r = {r}");

    let predicted: Vec<f64> = distance.iter().map(|&d| fit.predict(d)).collect();
    let reduced = chi_squared(&elevation, &predicted, &uncertainty).unwrap();
    assert!(reduced >= 0.0);

    let test = chi_squared_test(
        &elevation,
        &predicted,
        &uncertainty,
        &ChiSquaredOptions::with_fitted_params(2),
    )
    .unwrap();
    assert_eq!(test.dof, 6);
    assert!((0.0..=1.0).contains(&test.p_value));
    assert!(test.reduced > reduced);

    let u = fit.uncertainties(&distance, &elevation).unwrap();
    assert!(u.sigma_slope > 0.0 && u.sigma_intercept > 0.0);
}

#[test]
fn synthetic_sample_recovers_parameters() {
    let truth = Gaussian::new(1800.0, 500.0).unwrap();
    let xs = sample_gaussian(&truth, 5_000, &mut create_rng(11));
    let fitted = Gaussian::from_sample(&xs).unwrap();
    assert!((fitted.mean() - 1800.0).abs() < 30.0);
    assert!((fitted.std_dev() - 500.0).abs() < 25.0);
}

#[test]
fn degenerate_inputs_are_divide_by_zero() {
    assert_eq!(mean(&[]).unwrap_err().kind(), ErrorKind::DivideByZero);
    assert_eq!(std_dev(&[1.0]).unwrap_err().kind(), ErrorKind::DivideByZero);
    assert_eq!(std_err(&[1.0]).unwrap_err().kind(), ErrorKind::DivideByZero);
    assert_eq!(gaussian_scalar(0.0, 0.0, 0.0).unwrap_err().kind(), ErrorKind::DivideByZero);
    assert_eq!(
        linregress(&[4.0, 4.0], &[1.0, 2.0]).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        pearson(&[1.0, 2.0], &[5.0, 5.0]).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        chi_squared(&[1.0], &[1.0], &[0.0]).unwrap_err().kind(),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        pearson(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
}
