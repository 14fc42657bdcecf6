//! Seeded random sampling from a [`Gaussian`].
//!
//! Intended for reproducible synthetic datasets, e.g. checking that a
//! fitted mean and standard deviation recover known parameters.
//!
//! # Reproducibility
//!
//! Use [`create_rng`] with a fixed seed. `SmallRng` is deterministic for a
//! given seed on the same platform.

use rand::Rng;

use crate::gaussian::Gaussian;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use u_fitstat::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!((0.0..1.0).contains(&x));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws `n` independent values from `dist`.
///
/// # Algorithm
/// Box–Muller transform: two uniforms `u₁ ∈ (0, 1]`, `u₂ ∈ [0, 1)` give two
/// independent standard normals
/// `√(−2 ln u₁)·cos(2πu₂)` and `√(−2 ln u₁)·sin(2πu₂)`.
///
/// Reference: Box & Muller (1958), *Ann. Math. Statist.* 29(2).
///
/// # Examples
/// ```
/// use u_fitstat::gaussian::Gaussian;
/// use u_fitstat::random::{create_rng, sample_gaussian};
/// let g = Gaussian::new(1500.0, 300.0).unwrap();
/// let xs = sample_gaussian(&g, 5, &mut create_rng(7));
/// assert_eq!(xs.len(), 5);
/// ```
pub fn sample_gaussian<R: Rng>(dist: &Gaussian, n: usize, rng: &mut R) -> Vec<f64> {
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let (z0, z1) = standard_normal_pair(rng);
        out.push(dist.mean() + dist.std_dev() * z0);
        if out.len() < n {
            out.push(dist.mean() + dist.std_dev() * z1);
        }
    }
    out
}

fn standard_normal_pair<R: Rng>(rng: &mut R) -> (f64, f64) {
    // 1 − [0, 1) keeps ln away from zero.
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = rng.random::<f64>();
    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;
    (radius * theta.cos(), radius * theta.sin())
}
