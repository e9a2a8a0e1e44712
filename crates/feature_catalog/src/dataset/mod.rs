//! Declarative dataset tables.
//!
//! A [`Dataset`] pairs every [`Layer`] with the source of its features, so a catalog built from
//! it can never hold a layer without features. Datasets are plain data: the hard-coded
//! [`Dataset::reference`] table and, with the `serde` feature, JSON fixtures.
#[cfg(feature = "serde")]
use std::fs::File;
#[cfg(feature = "serde")]
use std::io::{BufReader, Read};
#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::Layer;
use crate::error::Result;
use crate::synthesis::{FeatureRecord, FeatureSynthesis, GridSynthesis};

pub mod reference;

/// Where a layer's features come from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "params", rename_all = "snake_case"))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum FeatureSource {
    /// Literal, pre-serialized records.
    Records(Vec<FeatureRecord>),
    /// Records synthesized from a point grid.
    Grid(GridSynthesis),
}

impl FeatureSource {
    /// Produces the records of this source.
    pub fn materialize(&self) -> Result<Vec<FeatureRecord>> {
        match self {
            FeatureSource::Records(records) => Ok(records.clone()),
            FeatureSource::Grid(grid) => {
                grid.validate()?;
                Ok(grid.synthesize())
            }
        }
    }
}

/// A layer together with the source of its features.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct LayerSource {
    pub layer: Layer,
    pub features: FeatureSource,
}

impl LayerSource {
    pub fn new(layer: Layer, features: FeatureSource) -> Self {
        Self { layer, features }
    }
}

/// An ordered table of layer sources.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Dataset {
    pub sources: Vec<LayerSource>,
}

impl Dataset {
    /// Create a new empty dataset.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Add a single layer source.
    pub fn with_source(mut self, source: LayerSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Add multiple layer sources.
    pub fn with_sources(mut self, sources: Vec<LayerSource>) -> Self {
        self.sources.extend(sources);
        self
    }

    /// Parses a dataset fixture from JSON text.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a dataset fixture from a JSON reader.
    #[cfg(feature = "serde")]
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a dataset fixture from a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }
}
