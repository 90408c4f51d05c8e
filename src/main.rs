use crate::app_config::AppConfig;
use crate::geocode_studios::build_feature_collection;
use crate::output::write_feature_collection;
use std::path::Path;
use tracing::{info, warn};

mod app_config;
mod catalog;
mod domain;
mod geocode_studios;
mod geocoder;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.log().level()).init();

    info!("🏺 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let studios = catalog::studios();
    info!("Processing {} studios...", studios.len());

    let client = geocoder::new_client(&config)?;
    let report = build_feature_collection(&client, &config, studios).await;

    let output_path = Path::new(config.output().path());
    write_feature_collection(output_path, &report.collection).await?;

    info!("✅  Done. {} studios written to {}", report.succeeded(), output_path.display());
    if report.failed() > 0 {
        warn!("  {} studios failed geocoding — check addresses above", report.failed());
    }

    Ok(())
}
