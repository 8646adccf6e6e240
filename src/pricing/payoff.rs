//! Vanilla payoffs.

use derive_more::Display;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum OptionType {
    #[display("call")]
    Call,
    #[display("put")]
    Put,
}

impl OptionType {
    /// Intrinsic value against `strike`: max(S - K, 0) or max(K - S, 0).
    #[inline]
    pub fn payoff(self, underlying: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (underlying - strike).max(0.0),
            OptionType::Put => (strike - underlying).max(0.0),
        }
    }
}

/// Mean of `payoffs` discounted by exp(-r * T).
///
/// An empty slice gives NaN.
pub fn discounted_mean(payoffs: impl ExactSizeIterator<Item = f64>, rate: f64, maturity: f64) -> f64 {
    let n = payoffs.len();
    let sum: f64 = payoffs.sum();
    (-rate * maturity).exp() * (sum / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payoffs() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(OptionType::Call.to_string(), "call");
        assert_eq!(OptionType::Put.to_string(), "put");
    }

    #[test]
    fn test_discounted_mean() {
        let value = discounted_mean([1.0, 2.0, 3.0].into_iter(), 0.0, 1.0);
        assert_eq!(value, 2.0);
        assert!(discounted_mean(std::iter::empty::<f64>(), 0.05, 1.0).is_nan());
    }
}
