//! Core types for the pricing engine.

pub mod error;
pub mod params;
pub mod sample;
pub mod seed;

pub use error::PricingError;
pub use params::GbmParams;
pub use sample::PathSample;
pub use seed::Seed;
