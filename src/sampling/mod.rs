//! GBM samplers.

pub mod gbm;
pub mod path;
pub mod terminal;

pub use gbm::GbmStep;
pub use path::path_sample;
pub use terminal::terminal_sample;
