//! Read-only catalog of layers and their feature records.
//!
//! [`Catalog`] is the contract consumed by service layers: list layers, resolve a layer by id,
//! and fetch all or one of its features. [`memory::MemoryCatalog`] is the in-memory store that
//! backs the contract with a fully materialized [`crate::dataset::Dataset`].
pub mod index;
pub mod layer;
pub mod memory;

pub use index::FeatureIndex;
pub use layer::{Extent, Layer};
pub use memory::MemoryCatalog;

use crate::error::Result;
pub use crate::synthesis::FeatureRecord;

/// Read-only access to layers and their features.
pub trait Catalog: Send + Sync {
    /// All layers in construction order.
    fn layers(&self) -> &[Layer];

    /// Resolves a layer by exact, case-sensitive id.
    fn layer_by_id(&self, id: &str) -> Result<&Layer>;

    /// All feature records of a layer, in construction order.
    fn layer_features(&self, id: &str) -> Result<&[FeatureRecord]>;

    /// A single feature record addressed by an already parsed index.
    fn layer_feature_at(&self, id: &str, index: FeatureIndex) -> Result<&FeatureRecord>;

    /// A single feature record addressed by its textual index.
    ///
    /// The layer is resolved first, so an unknown layer wins over a malformed index.
    fn layer_feature(&self, id: &str, feature_index: &str) -> Result<&FeatureRecord> {
        self.layer_features(id)?;
        let index = feature_index.parse::<FeatureIndex>()?;
        self.layer_feature_at(id, index)
    }
}
