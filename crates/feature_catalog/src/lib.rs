#![forbid(unsafe_code)]
//! feature_catalog: In-memory geospatial feature catalog with deterministic point synthesis.
//!
//! Modules:
//! - synthesis: point feature records and parametric grid generation
//! - catalog: the catalog contract, layer descriptors, feature indices, in-memory store
//! - dataset: declarative dataset tables (reference dataset, JSON fixtures)
//!
//! For examples, see the `feature_catalog_examples` crate.
pub mod catalog;
pub mod dataset;
pub mod error;
pub mod synthesis;

/// Convenient re-exports for common types. Import with `use feature_catalog::prelude::*;`.
pub mod prelude {
    pub use crate::catalog::index::FeatureIndex;
    pub use crate::catalog::layer::{Extent, Layer};
    pub use crate::catalog::memory::MemoryCatalog;
    pub use crate::catalog::{Catalog, FeatureRecord};
    pub use crate::dataset::{Dataset, FeatureSource, LayerSource};
    pub use crate::error::{Error, Result};
    pub use crate::synthesis::grid::{generate_grid, GridSynthesis};
    pub use crate::synthesis::point::PointFeature;
    pub use crate::synthesis::FeatureSynthesis;
}
