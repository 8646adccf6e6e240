//! Full-path GBM sampling.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::sampling::gbm::GbmStep;
use crate::types::{GbmParams, PathSample, PricingError};

/// Simulate `n_sim` GBM paths over `n_steps` equal intervals of T.
///
/// Column 0 of every row is exactly S0. Each later point applies the exact
/// one-step transition with dt = T / n_steps to the previous point.
///
/// Normals are consumed row by row, which matches drawing the full
/// n_sim x n_steps matrix in row-major order before stepping. With
/// `n_steps == 1` the last column equals [`terminal_sample`] for the same
/// generator state.
///
/// [`terminal_sample`]: crate::sampling::terminal_sample
pub fn path_sample<R: Rng + ?Sized>(
    params: &GbmParams,
    n_steps: usize,
    n_sim: usize,
    rng: &mut R,
) -> Result<PathSample, PricingError> {
    if n_steps == 0 {
        return Err(PricingError::ZeroSteps);
    }

    let dt = params.maturity / n_steps as f64;
    let step = GbmStep::new(params, dt);

    let mut paths = PathSample::with_initial(params.spot, n_steps, n_sim);
    for row in paths.rows_mut() {
        for t in 1..=n_steps {
            let z: f64 = StandardNormal.sample(rng);
            row[t] = step.apply(row[t - 1], z);
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::terminal_sample;
    use crate::types::Seed;

    fn params() -> GbmParams {
        GbmParams::new(100.0, 0.05, 0.2, 1.0)
    }

    #[test]
    fn test_path_shape_and_initial_column() {
        let paths = path_sample(&params(), 12, 50, &mut Seed::Seeded(42).rng()).unwrap();
        assert_eq!(paths.n_sim(), 50);
        assert_eq!(paths.n_steps(), 12);
        for row in paths.rows() {
            assert_eq!(row.len(), 13);
            assert_eq!(row[0], 100.0);
            assert!(row[1..].iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn test_path_sample_deterministic() {
        let a = path_sample(&params(), 20, 100, &mut Seed::Seeded(7).rng()).unwrap();
        let b = path_sample(&params(), 20, 100, &mut Seed::Seeded(7).rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_steps_fails() {
        let result = path_sample(&params(), 0, 10, &mut Seed::Seeded(1).rng());
        assert_eq!(result, Err(PricingError::ZeroSteps));
    }

    #[test]
    fn test_single_step_matches_terminal_sample() {
        let paths = path_sample(&params(), 1, 500, &mut Seed::Seeded(42).rng()).unwrap();
        let terminal = terminal_sample(&params(), 500, &mut Seed::Seeded(42).rng());
        assert_eq!(paths.terminal_prices(), terminal);
    }

    #[test]
    fn test_zero_paths() {
        let paths = path_sample(&params(), 5, 0, &mut Seed::Seeded(1).rng()).unwrap();
        assert_eq!(paths.n_sim(), 0);
        assert_eq!(paths.n_steps(), 5);
    }
}
