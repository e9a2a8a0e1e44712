//! Rectangular point-grid synthesis.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::synthesis::{FeatureRecord, FeatureSynthesis, PointFeature};

/// Grid origin of the reference dataset.
pub const REFERENCE_ORIGIN: DVec2 = DVec2::new(-75.0, 45.0);
/// Grid spacing of the reference dataset, on both axes.
pub const REFERENCE_STEP: DVec2 = DVec2::splat(0.01);

/// Generates a `count_x` by `count_y` grid of point records with the reference origin and step.
pub fn generate_grid(count_x: usize, count_y: usize) -> Vec<FeatureRecord> {
    GridSynthesis::new(count_x, count_y).synthesize()
}

/// Parametric grid of point features.
///
/// Points are emitted column by column: the outer loop walks X, the inner loop walks Y, and a
/// running counter starting at zero becomes both the feature id and its position in the output.
/// Lookups by id and by position therefore coincide.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GridSynthesis {
    /// Number of columns.
    pub count_x: usize,
    /// Number of rows.
    pub count_y: usize,
    /// Coordinates of the first point.
    #[cfg_attr(feature = "serde", serde(default = "reference_origin"))]
    pub origin: DVec2,
    /// Spacing between neighbouring points.
    #[cfg_attr(feature = "serde", serde(default = "reference_step"))]
    pub step: DVec2,
}

#[cfg(feature = "serde")]
fn reference_origin() -> DVec2 {
    REFERENCE_ORIGIN
}

#[cfg(feature = "serde")]
fn reference_step() -> DVec2 {
    REFERENCE_STEP
}

impl GridSynthesis {
    /// Creates a grid with the reference origin and step.
    pub fn new(count_x: usize, count_y: usize) -> Self {
        Self {
            count_x,
            count_y,
            origin: REFERENCE_ORIGIN,
            step: REFERENCE_STEP,
        }
    }

    /// Sets the coordinates of the first point.
    pub fn with_origin(mut self, origin: impl Into<DVec2>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Sets the spacing between points.
    pub fn with_step(mut self, step: impl Into<DVec2>) -> Self {
        self.step = step.into();
        self
    }

    /// Number of features the grid produces, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        self.count_x.saturating_mul(self.count_y)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.origin.is_finite() {
            return Err(Error::InvalidConfig("grid origin must be finite".into()));
        }
        if !self.step.is_finite() {
            return Err(Error::InvalidConfig("grid step must be finite".into()));
        }
        if self.count_x.checked_mul(self.count_y).is_none() {
            return Err(Error::InvalidConfig(format!(
                "grid of {}x{} points overflows",
                self.count_x, self.count_y
            )));
        }

        Ok(())
    }

    /// Builds the point features in emission order.
    pub fn points(&self) -> Vec<PointFeature> {
        if self.is_empty() {
            return Vec::new();
        }

        // Reservation is best effort.
        let mut points: Vec<PointFeature> = Vec::new();
        let _ = points.try_reserve_exact(self.len());
        let mut index: i64 = 0;

        for ix in 0..self.count_x {
            for iy in 0..self.count_y {
                let position = DVec2::new(
                    self.origin.x + self.step.x * ix as f64,
                    self.origin.y + self.step.y * iy as f64,
                );
                points.push(PointFeature::new(
                    index,
                    position,
                    format!("data value {index}"),
                ));
                index += 1;
            }
        }

        points
    }
}

impl FeatureSynthesis for GridSynthesis {
    fn synthesize(&self) -> Vec<FeatureRecord> {
        self.points().iter().map(PointFeature::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    use mint::Vector2;

    use super::*;

    fn coordinates(record: &str) -> (f64, f64) {
        let value: serde_json::Value = serde_json::from_str(record).expect("record parses");
        let coords = &value["geometry"]["coordinates"];
        (
            coords[0].as_f64().expect("x is a number"),
            coords[1].as_f64().expect("y is a number"),
        )
    }

    #[test]
    fn produces_count_x_times_count_y_records() {
        assert_eq!(generate_grid(3, 4).len(), 12);
        assert_eq!(generate_grid(1, 1).len(), 1);
    }

    #[test]
    fn zero_counts_produce_nothing() {
        assert!(generate_grid(0, 5).is_empty());
        assert!(generate_grid(5, 0).is_empty());
        assert!(GridSynthesis::new(0, 5).is_empty());
    }

    #[test]
    fn iterates_x_outer_and_y_inner() {
        let points = GridSynthesis::new(2, 3)
            .with_origin(DVec2::ZERO)
            .with_step(DVec2::ONE)
            .points();

        let positions: Vec<_> = points.iter().map(|p| (p.position.x, p.position.y)).collect();
        assert_eq!(
            positions,
            vec![
                (0.0, 0.0),
                (0.0, 1.0),
                (0.0, 2.0),
                (1.0, 0.0),
                (1.0, 1.0),
                (1.0, 2.0),
            ]
        );
        let ids: Vec<_> = points.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn values_are_derived_from_the_running_index() {
        let points = GridSynthesis::new(2, 2).points();
        let values: Vec<_> = points.iter().map(|p| p.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["data value 0", "data value 1", "data value 2", "data value 3"]
        );
    }

    #[test]
    fn uses_reference_origin_and_step() {
        let records = generate_grid(10, 10);
        assert_eq!(coordinates(&records[0]), (-75.0, 45.0));

        let (x, y) = coordinates(&records[99]);
        assert!((x - (-75.0 + 0.01 * 9.0)).abs() < 1e-9);
        assert!((y - (45.0 + 0.01 * 9.0)).abs() < 1e-9);

        let (x, y) = coordinates(&records[1]);
        assert_eq!(x, -75.0);
        assert!((y - 45.01).abs() < 1e-9);
    }

    #[test]
    fn is_idempotent() {
        assert_eq!(generate_grid(3, 2), generate_grid(3, 2));
    }

    #[test]
    fn accepts_mint_vectors() {
        let grid = GridSynthesis::new(1, 1)
            .with_origin(Vector2 { x: 1.0, y: 2.0 })
            .with_step(Vector2 { x: 0.5, y: 0.5 });
        assert_eq!(grid.origin, DVec2::new(1.0, 2.0));
        assert_eq!(grid.step, DVec2::splat(0.5));
    }

    #[test]
    fn validate_rejects_non_finite_parameters() {
        assert!(GridSynthesis::new(2, 2).validate().is_ok());

        let err = GridSynthesis::new(2, 2)
            .with_step(DVec2::new(f64::NAN, 0.1))
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = GridSynthesis::new(2, 2)
            .with_origin(DVec2::new(0.0, f64::INFINITY))
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn len_saturates_instead_of_overflowing() {
        let grid = GridSynthesis::new(usize::MAX, 2);
        assert_eq!(grid.len(), usize::MAX);
        assert!(!grid.is_empty());
    }

    #[test]
    fn degenerate_huge_grids_are_empty() {
        assert!(generate_grid(usize::MAX, 0).is_empty());
        assert!(generate_grid(0, usize::MAX).is_empty());
    }

    #[test]
    fn validate_rejects_overflowing_counts() {
        let err = GridSynthesis::new(usize::MAX, 2).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
