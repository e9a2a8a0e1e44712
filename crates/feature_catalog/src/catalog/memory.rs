//! In-memory catalog store.
//!
//! [`MemoryCatalog`] materializes every feature of a [`Dataset`] at construction and serves all
//! lookups from that snapshot. Nothing is mutated afterwards, so a store can be shared freely
//! across threads.
use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::catalog::{Catalog, FeatureIndex, FeatureRecord, Layer};
use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Catalog backed by fully materialized, immutable data.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    layers: Vec<Layer>,
    features: HashMap<String, Vec<FeatureRecord>>,
}

impl MemoryCatalog {
    /// Materializes all layer sources of `dataset`.
    ///
    /// Fails with [`Error::DuplicateLayer`] if two sources share a layer id, or with
    /// [`Error::InvalidConfig`] if a grid source is misconfigured.
    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let mut layers = Vec::with_capacity(dataset.sources.len());
        let mut features = HashMap::with_capacity(dataset.sources.len());

        for source in dataset.sources {
            if features.contains_key(&source.layer.id) {
                return Err(Error::DuplicateLayer {
                    id: source.layer.id,
                });
            }

            let records = source.features.materialize()?;
            debug!(
                "Materialized layer '{}' with {} features.",
                source.layer.id,
                records.len()
            );
            features.insert(source.layer.id.clone(), records);
            layers.push(source.layer);
        }

        let catalog = Self { layers, features };
        info!(
            "Catalog ready: {} layers, {} features.",
            catalog.layers.len(),
            catalog.feature_count()
        );
        Ok(catalog)
    }

    /// Builds a fresh catalog over the reference dataset.
    ///
    /// Every call yields an independent, equivalent instance. Use [`MemoryCatalog::shared`] for a
    /// process-wide one.
    pub fn reference() -> Result<Self> {
        Self::from_dataset(Dataset::reference())
    }

    /// Process-wide reference catalog, built on first use.
    pub fn shared() -> Result<&'static MemoryCatalog> {
        static SHARED: OnceLock<MemoryCatalog> = OnceLock::new();

        if let Some(catalog) = SHARED.get() {
            return Ok(catalog);
        }
        let catalog = Self::reference()?;
        Ok(SHARED.get_or_init(|| catalog))
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns `true` if a layer with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.features.contains_key(id)
    }

    /// Total number of feature records across all layers.
    pub fn feature_count(&self) -> usize {
        self.features.values().map(Vec::len).sum()
    }
}

impl Catalog for MemoryCatalog {
    fn layers(&self) -> &[Layer] {
        &self.layers
    }

    fn layer_by_id(&self, id: &str) -> Result<&Layer> {
        self.layers.iter().find(|l| l.id == id).ok_or_else(|| {
            debug!("Unknown layer id '{}'.", id);
            Error::LayerNotFound { id: id.to_owned() }
        })
    }

    fn layer_features(&self, id: &str) -> Result<&[FeatureRecord]> {
        match self.features.get(id) {
            Some(records) => Ok(records.as_slice()),
            None => {
                debug!("Unknown layer id '{}'.", id);
                Err(Error::LayerNotFound { id: id.to_owned() })
            }
        }
    }

    fn layer_feature_at(&self, id: &str, index: FeatureIndex) -> Result<&FeatureRecord> {
        let records = self.layer_features(id)?;
        match index.resolve(records.len()) {
            Some(i) => Ok(&records[i]),
            None => {
                debug!(
                    "Feature {} out of range for layer '{}' ({} features).",
                    index,
                    id,
                    records.len()
                );
                Err(Error::FeatureNotFound {
                    layer: id.to_owned(),
                    index: index.get(),
                    len: records.len(),
                })
            }
        }
    }
}
