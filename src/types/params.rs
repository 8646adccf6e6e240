//! Market parameters for the GBM model.

/// Parameters of a geometric Brownian motion under the risk-neutral measure.
///
/// No validation is done here. Degenerate values (non-positive spot or
/// maturity) flow through the samplers and produce NaN or degenerate
/// prices rather than an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmParams {
    /// Initial price S0
    pub spot: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Volatility sigma
    pub volatility: f64,
    /// Time horizon T in years
    pub maturity: f64,
}

impl GbmParams {
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Log-drift over an interval: (r - 0.5 * sigma^2) * dt
    #[inline]
    pub fn drift_exponent(&self, dt: f64) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * dt
    }

    /// Deterministic forward price S0 * exp(r * T).
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * (self.rate * self.maturity).exp()
    }

    /// exp(-r * T)
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vol_drift_is_rate() {
        let params = GbmParams::new(100.0, 0.05, 0.0, 2.0);
        assert_eq!(params.drift_exponent(2.0), 0.05 * 2.0);
    }

    #[test]
    fn test_discounted_forward_is_spot() {
        let params = GbmParams::new(100.0, 0.03, 0.2, 1.5);
        let pv = params.forward() * params.discount_factor();
        assert!((pv - 100.0).abs() < 1e-12);
    }
}
