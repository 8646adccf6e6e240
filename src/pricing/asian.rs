//! Arithmetic-average Asian options priced from simulated paths.
//!
//! These pricers never sample. Call and put can share one [`PathSample`].

use crate::pricing::payoff::{discounted_mean, OptionType};
use crate::types::PathSample;

/// Which points of a path enter the arithmetic average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Averaging {
    /// Columns 1..=n_steps; the known initial price is left out.
    #[default]
    ExcludeInitial,
    /// All n_steps + 1 columns.
    IncludeInitial,
}

impl Averaging {
    #[inline]
    fn average(self, path: &[f64]) -> f64 {
        let observed = match self {
            Averaging::ExcludeInitial => &path[1..],
            Averaging::IncludeInitial => path,
        };
        observed.iter().sum::<f64>() / observed.len() as f64
    }
}

/// Monte Carlo price of a fixed-strike arithmetic Asian option.
pub fn price_asian(
    paths: &PathSample,
    option_type: OptionType,
    strike: f64,
    rate: f64,
    maturity: f64,
    averaging: Averaging,
) -> f64 {
    let payoffs = paths
        .rows()
        .map(|path| option_type.payoff(averaging.average(path), strike));
    discounted_mean(payoffs, rate, maturity)
}

/// Asian call averaging over the simulated points only.
pub fn price_asian_call(paths: &PathSample, strike: f64, rate: f64, maturity: f64) -> f64 {
    price_asian(paths, OptionType::Call, strike, rate, maturity, Averaging::ExcludeInitial)
}

/// Asian put averaging over the simulated points only.
pub fn price_asian_put(paths: &PathSample, strike: f64, rate: f64, maturity: f64) -> f64 {
    price_asian(paths, OptionType::Put, strike, rate, maturity, Averaging::ExcludeInitial)
}
