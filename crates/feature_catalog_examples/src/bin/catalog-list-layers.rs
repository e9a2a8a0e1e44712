use feature_catalog::prelude::*;
use feature_catalog_examples::{describe_layer, init_tracing};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let catalog = MemoryCatalog::shared()?;
    for layer in catalog.layers() {
        let count = catalog.layer_features(&layer.id)?.len();
        println!("{}", describe_layer(layer, count));
    }

    Ok(())
}
