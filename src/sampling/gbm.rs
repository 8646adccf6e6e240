//! Exact one-step GBM transition.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::types::GbmParams;

/// Exact transition of a geometric Brownian motion over a fixed interval.
///
/// The GBM model: dS = r * S * dt + sigma * S * dW, solved in closed form:
/// S(t + dt) = S(t) * exp((r - 0.5 * sigma^2) * dt + sigma * sqrt(dt) * Z)
/// with Z standard normal. No discretization error for any dt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmStep {
    /// Pre-computed drift term: (r - 0.5 * sigma^2) * dt
    drift_term: f64,
    /// Pre-computed volatility term: sigma * sqrt(dt)
    vol_term: f64,
}

impl GbmStep {
    pub fn new(params: &GbmParams, dt: f64) -> Self {
        Self {
            drift_term: params.drift_exponent(dt),
            vol_term: params.volatility * dt.sqrt(),
        }
    }

    /// Apply the transition to `price` with a given normal draw.
    #[inline]
    pub fn apply(&self, price: f64, z: f64) -> f64 {
        let exponent = self.drift_term + self.vol_term * z;
        price * exponent.exp()
    }

    /// Draw one standard normal and apply the transition.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, price: f64, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        self.apply(price, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seed;

    #[test]
    fn test_zero_draw_is_drift_only() {
        let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
        let step = GbmStep::new(&params, 0.5);
        let expected = 100.0 * ((0.05 - 0.5 * 0.2 * 0.2) * 0.5_f64).exp();
        assert_eq!(step.apply(100.0, 0.0), expected);
    }

    #[test]
    fn test_positive_prices() {
        let params = GbmParams::new(100.0, -0.5, 0.3, 1.0);
        let step = GbmStep::new(&params, 1.0);
        let mut rng = Seed::Seeded(42).rng();

        // GBM should always produce positive prices
        let mut price = 100.0;
        for _ in 0..1000 {
            price = step.sample(price, &mut rng);
            assert!(price > 0.0);
        }
    }
}
