//! Monte Carlo pricers for European and Asian options.

pub mod asian;
pub mod european;
pub mod payoff;

pub use asian::{price_asian, price_asian_call, price_asian_put, Averaging};
pub use european::{price_european, price_european_call, price_european_put};
pub use payoff::{discounted_mean, OptionType};
