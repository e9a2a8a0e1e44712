//! Usage: catalog-feature-lookup [LAYER] [INDEX]
//!
//! Prints one feature record, or every record of the layer when INDEX is omitted.
use feature_catalog::prelude::*;
use feature_catalog_examples::init_tracing;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let layer = args.next().unwrap_or_else(|| "mock_b".to_string());
    let index = args.next();

    let catalog = MemoryCatalog::reference()?;
    let result = match index.as_deref() {
        Some(index) => catalog
            .layer_feature(&layer, index)
            .map(|record| println!("{record}")),
        None => catalog.layer_features(&layer).map(|records| {
            for record in records {
                println!("{record}");
            }
        }),
    };

    if let Err(err) = &result {
        if err.is_not_found() {
            warn!("{err}");
        }
    }
    Ok(result?)
}
