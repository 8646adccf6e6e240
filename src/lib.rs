//! Monte Carlo option pricing under geometric Brownian motion.
//!
//! Two samplers draw from the exact GBM transition law:
//! [`terminal_sample`] gives prices at maturity in one shot and
//! [`path_sample`] gives full discretized paths. European pricers average
//! discounted payoffs over terminal samples; Asian pricers average
//! discounted payoffs of the arithmetic path mean.
//!
//! Randomness is passed explicitly. Build one generator per run with
//! [`Seed::rng`] and hand it to the sampler or pricer:
//!
//! ```
//! use gbm_mc_rs::{price_european_call, GbmParams, Seed};
//!
//! let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
//! let mut rng = Seed::Seeded(42).rng();
//! let price = price_european_call(&params, 100.0, 10_000, &mut rng);
//! assert!(price > 0.0);
//! ```

pub mod pricing;
pub mod sampling;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use pricing::{
    price_asian, price_asian_call, price_asian_put, price_european, price_european_call,
    price_european_put, Averaging, OptionType,
};
pub use sampling::{path_sample, terminal_sample, GbmStep};
pub use types::{GbmParams, PathSample, PricingError, Seed};
