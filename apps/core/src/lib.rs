//! Featurescope core: groups free-text feature requests by category,
//! priority and complexity.

pub mod categorizer;
pub mod config;
pub mod error;
pub mod text_extract;

pub use categorizer::{categorize, FeatureCategorizer, FeatureReport};
pub use error::{AppError, AppResult};

#[cfg(test)]
mod tests;
