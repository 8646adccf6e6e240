//! CLI configuration loading
//!
//! Optional TOML file supplying defaults for the pricing flags. Flags given
//! on the command line always win.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// CLI configuration
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Pricing defaults
    #[serde(default)]
    pub defaults: PricingDefaults,
}

/// Defaults for the pricing flags, keyed by flag name.
#[derive(Debug, Deserialize)]
pub struct PricingDefaults {
    #[serde(rename = "S0", default = "default_spot")]
    pub spot: f64,

    #[serde(rename = "K", default = "default_strike")]
    pub strike: f64,

    #[serde(rename = "r", default = "default_rate")]
    pub rate: f64,

    #[serde(default = "default_sigma")]
    pub sigma: f64,

    #[serde(rename = "T", default = "default_maturity")]
    pub maturity: f64,

    #[serde(default = "default_n_sim")]
    pub n_sim: usize,

    #[serde(default = "default_n_steps")]
    pub n_steps: usize,

    /// Seed for reproducible runs (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for PricingDefaults {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            rate: default_rate(),
            sigma: default_sigma(),
            maturity: default_maturity(),
            n_sim: default_n_sim(),
            n_steps: default_n_steps(),
            seed: None,
        }
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_strike() -> f64 {
    105.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_sigma() -> f64 {
    0.2
}

fn default_maturity() -> f64 {
    1.0
}

fn default_n_sim() -> usize {
    10_000
}

fn default_n_steps() -> usize {
    50
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
