//! Feature index parsed from request text.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Position of a feature within its layer.
///
/// Parsed from text once at the boundary. Negative values parse successfully and are reported
/// as missing features when resolved, like any other out-of-range position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureIndex(pub i64);

impl FeatureIndex {
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the position as a slice index if it lies within `0..len`.
    pub fn resolve(self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|&i| i < len)
    }
}

impl From<usize> for FeatureIndex {
    fn from(value: usize) -> Self {
        FeatureIndex(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl FromStr for FeatureIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(FeatureIndex)
            .map_err(|_| Error::InvalidFeatureId {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for FeatureIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
