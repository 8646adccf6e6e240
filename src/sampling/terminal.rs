//! One-shot terminal price sampling.

use rand::Rng;

use crate::sampling::gbm::GbmStep;
use crate::types::GbmParams;

/// Draw `n_sim` independent GBM prices at maturity.
///
/// Each draw is S0 * exp((r - 0.5 * sigma^2) * T + sigma * sqrt(T) * Z),
/// the exact solution over the whole horizon. One normal variate is drawn
/// per sample, in order.
pub fn terminal_sample<R: Rng + ?Sized>(params: &GbmParams, n_sim: usize, rng: &mut R) -> Vec<f64> {
    let step = GbmStep::new(params, params.maturity);
    (0..n_sim).map(|_| step.sample(params.spot, rng)).collect()
}
