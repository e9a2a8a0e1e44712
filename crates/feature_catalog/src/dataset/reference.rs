//! The reference mock dataset: two layers, `mock_a` with literal records and `mock_b` with a
//! synthesized grid.
use crate::catalog::{Extent, Layer};
use crate::dataset::{Dataset, FeatureSource, LayerSource};
use crate::synthesis::GridSynthesis;

/// Spatial reference id used by the reference layers.
pub const REFERENCE_SRID: i32 = 999;

/// Grid dimensions of `mock_b`.
pub const REFERENCE_GRID: (usize, usize) = (10, 10);

const MOCK_A_RECORDS: [&str; 3] = [
    "{ \"type\": \"Feature\", \"id\": 1,\n\"geometry\": {\"type\": \"Point\",\"coordinates\": [  -75, 45 ]  },\n\"properties\": { \"value\": \"89.9\"  } }",
    "{ \"type\": \"Feature\", \"id\": 2,\n\"geometry\": {\"type\": \"Point\",\"coordinates\": [  -75, 40 ]  },\n\"properties\": { \"value\": \"89.9\"  } }",
    "{ \"type\": \"Feature\", \"id\": 3,\n\"geometry\": {\"type\": \"Point\",\"coordinates\": [  -75, 35 ]  },\n\"properties\": { \"value\": \"89.9\"  } }",
];

impl Dataset {
    /// The reference dataset with a 10x10 grid for `mock_b`.
    pub fn reference() -> Self {
        let (count_x, count_y) = REFERENCE_GRID;
        Self::reference_with_grid(count_x, count_y)
    }

    /// The reference dataset with custom grid dimensions for `mock_b`.
    pub fn reference_with_grid(count_x: usize, count_y: usize) -> Self {
        let mock_a = Layer::new("mock_a", Extent::new(0.0, 0.0, 80.0, 90.0), REFERENCE_SRID)
            .with_title("Mock A")
            .with_description("This dataset contains mock data about A");
        let mock_b = Layer::new(
            "mock_b",
            Extent::new(-130.0, 40.0, -120.0, 60.0),
            REFERENCE_SRID,
        )
        .with_title("Mock B")
        .with_description(format!(
            "This dataset contains mock data about B ({} points)",
            count_x * count_y
        ));

        Dataset::new()
            .with_source(LayerSource::new(
                mock_a,
                FeatureSource::Records(MOCK_A_RECORDS.iter().map(|r| r.to_string()).collect()),
            ))
            .with_source(LayerSource::new(
                mock_b,
                FeatureSource::Grid(GridSynthesis::new(count_x, count_y)),
            ))
    }
}
