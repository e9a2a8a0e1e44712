//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! catalog lookup misses, malformed feature identifiers, dataset construction problems,
//! and fixture loading.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("layer not found: '{id}'")]
    LayerNotFound { id: String },

    #[error("invalid feature identifier: '{value}'")]
    InvalidFeatureId { value: String },

    #[error("feature {index} not found in layer '{layer}' ({len} features)")]
    FeatureNotFound {
        layer: String,
        index: i64,
        len: usize,
    },

    #[error("duplicate layer id '{id}'")]
    DuplicateLayer { id: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[cfg(feature = "serde")]
    #[error("fixture error: {0}")]
    Fixture(#[from] serde_json::Error),

    #[cfg(feature = "serde")]
    #[error("cannot read fixture: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the error reports a missing layer or feature.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::LayerNotFound { .. } | Error::FeatureNotFound { .. }
        )
    }
}
