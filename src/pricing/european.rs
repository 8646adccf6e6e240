//! European options priced from terminal samples.

use rand::Rng;

use crate::pricing::payoff::{discounted_mean, OptionType};
use crate::sampling::terminal_sample;
use crate::types::GbmParams;

/// Monte Carlo price of a European option.
///
/// Draws `n_sim` terminal prices, maps them through the payoff and returns
/// exp(-r * T) times the sample mean. The standard error shrinks as
/// 1 / sqrt(n_sim).
pub fn price_european<R: Rng + ?Sized>(
    option_type: OptionType,
    params: &GbmParams,
    strike: f64,
    n_sim: usize,
    rng: &mut R,
) -> f64 {
    let terminal = terminal_sample(params, n_sim, rng);
    let payoffs = terminal.iter().map(|&st| option_type.payoff(st, strike));
    discounted_mean(payoffs, params.rate, params.maturity)
}

pub fn price_european_call<R: Rng + ?Sized>(
    params: &GbmParams,
    strike: f64,
    n_sim: usize,
    rng: &mut R,
) -> f64 {
    price_european(OptionType::Call, params, strike, n_sim, rng)
}

pub fn price_european_put<R: Rng + ?Sized>(
    params: &GbmParams,
    strike: f64,
    n_sim: usize,
    rng: &mut R,
) -> f64 {
    price_european(OptionType::Put, params, strike, n_sim, rng)
}
