//! Layer descriptors and spatial extents.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle of a layer.
///
/// `min <= max` is expected on both axes but not enforced.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn min(&self) -> DVec2 {
        DVec2::new(self.min_x, self.min_y)
    }

    pub fn max(&self) -> DVec2 {
        DVec2::new(self.max_x, self.max_y)
    }

    pub fn center(&self) -> DVec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Returns `true` if the point lies inside or on the boundary.
    pub fn contains(&self, p: impl Into<DVec2>) -> bool {
        let p = p.into();
        p.cmpge(self.min()).all() && p.cmple(self.max()).all()
    }

    /// Returns `true` if all bounds are finite and ordered.
    pub fn is_valid(&self) -> bool {
        self.min().is_finite()
            && self.max().is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

/// Descriptor of one dataset in a catalog.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Layer {
    /// Unique identifier, the lookup key into the catalog.
    pub id: String,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Free text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Spatial coverage.
    pub extent: Extent,
    /// Spatial reference identifier.
    pub srid: i32,
}

impl Layer {
    /// Create a new layer with required fields and empty title and description.
    pub fn new(id: impl Into<String>, extent: Extent, srid: i32) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            extent,
            srid,
        }
    }

    /// Set the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
