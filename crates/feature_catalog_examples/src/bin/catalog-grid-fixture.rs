//! Loads a dataset fixture from JSON and serves it through the catalog contract.
use feature_catalog::prelude::*;
use feature_catalog_examples::{describe_layer, init_tracing};
use glam::DVec2;

const FIXTURE: &str = r#"{
    "sources": [
        {
            "layer": {
                "id": "stations",
                "title": "Stations",
                "description": "Three handwritten stations",
                "extent": { "min_x": -80.0, "min_y": 30.0, "max_x": -70.0, "max_y": 50.0 },
                "srid": 4326
            },
            "features": {
                "kind": "records",
                "params": [
                    "{ \"type\": \"Feature\", \"id\": 0,\n\"geometry\": {\"type\": \"Point\",\"coordinates\": [  -75, 45 ]  },\n\"properties\": { \"value\": \"north\"  } }",
                    "{ \"type\": \"Feature\", \"id\": 1,\n\"geometry\": {\"type\": \"Point\",\"coordinates\": [  -75, 40 ]  },\n\"properties\": { \"value\": \"central\"  } }"
                ]
            }
        },
        {
            "layer": {
                "id": "samples",
                "title": "Samples",
                "extent": { "min_x": -75.0, "min_y": 45.0, "max_x": -74.95, "max_y": 45.05 },
                "srid": 4326
            },
            "features": { "kind": "grid", "params": { "count_x": 6, "count_y": 6 } }
        }
    ]
}"#;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let dataset = Dataset::from_json_str(FIXTURE)?.with_source(LayerSource::new(
        Layer::new("coarse", Extent::new(0.0, 0.0, 10.0, 10.0), 4326).with_title("Coarse"),
        FeatureSource::Grid(
            GridSynthesis::new(3, 3)
                .with_origin(DVec2::ZERO)
                .with_step(DVec2::splat(5.0)),
        ),
    ));

    let catalog = MemoryCatalog::from_dataset(dataset)?;
    for layer in catalog.layers() {
        let records = catalog.layer_features(&layer.id)?;
        println!("{}", describe_layer(layer, records.len()));
        if let Some(first) = records.first() {
            println!("  first: {}", first.replace('\n', " "));
        }
    }

    Ok(())
}
