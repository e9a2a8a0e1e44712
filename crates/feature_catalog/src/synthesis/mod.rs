//! Synthetic feature generation.
//!
//! This module defines the [`FeatureSynthesis`] trait and the text record type produced by
//! synthesizers. Concrete generators live in submodules.
pub mod grid;
pub mod point;

pub use grid::{generate_grid, GridSynthesis};
pub use point::PointFeature;

/// A serialized feature, GeoJSON-like text. Consumers re-emit records verbatim.
pub type FeatureRecord = String;

/// Trait for deterministic feature generators.
pub trait FeatureSynthesis: Send + Sync {
    fn synthesize(&self) -> Vec<FeatureRecord>;
}
