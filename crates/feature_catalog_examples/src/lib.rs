#![forbid(unsafe_code)]

use feature_catalog::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// One-line summary of a layer for console output.
pub fn describe_layer(layer: &Layer, feature_count: usize) -> String {
    let e = &layer.extent;
    format!(
        "{:<10} {:<8} srid={:<5} extent=({}, {})-({}, {}) features={}  {}",
        layer.id,
        layer.title,
        layer.srid,
        e.min_x,
        e.min_y,
        e.max_x,
        e.max_y,
        feature_count,
        layer.description
    )
}
