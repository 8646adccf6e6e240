//! Pricing engine errors.

use thiserror::Error;

/// Errors raised by the sampling engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// dt = T / n_steps is undefined.
    #[error("Division by zero: n_steps must be at least 1")]
    ZeroSteps,

    #[error("Ragged paths: row {row} has {found} points, expected {expected}")]
    RaggedPaths {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("No paths given; the sample shape cannot be inferred")]
    EmptyPaths,

    #[error("Path too short: {len} points, need the initial price and at least one step")]
    ShortPath { len: usize },
}
