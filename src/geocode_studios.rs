use crate::app_config::AppConfig;
use crate::domain::{Feature, FeatureCollection, Studio};
use crate::geocoder::geocode;
use reqwest::Client;
use tokio::time::sleep;
use tracing::{info, instrument, warn};

#[derive(Debug, Default)]
pub struct GeocodeReport {
    pub collection: FeatureCollection,
    /// Names of the studios that were skipped, in catalog order.
    pub skipped: Vec<String>,
}

impl GeocodeReport {
    pub fn succeeded(&self) -> usize {
        self.collection.len()
    }

    pub fn failed(&self) -> usize {
        self.skipped.len()
    }
}

/// Geocodes the studios one by one and collects a feature for every studio that resolved. Studios that fail are
/// logged and skipped.
#[instrument(skip_all, fields(studios = studios.len()))]
pub async fn build_feature_collection(client: &Client, config: &AppConfig, studios: &[Studio]) -> GeocodeReport {
    let total = studios.len();
    let mut report = GeocodeReport::default();

    for (index, studio) in studios.iter().enumerate() {
        if index > 0 {
            sleep(config.geocoder().request_delay()).await;
        }

        info!("[{}/{}] Geocoding: {} — {}", index + 1, total, studio.name, studio.address);
        match geocode(client, config, studio.address).await {
            Ok(location) => {
                info!("  ✓ {:.5}, {:.5}", location.latitude, location.longitude);
                report.collection.features.push(Feature::new(studio, location));
            }
            Err(err) => {
                warn!("  ⚠️ Error geocoding '{}': {}", studio.address, err);
                warn!("  ✗ Skipping {}", studio.name);
                report.skipped.push(studio.name.to_string());
            }
        }
    }

    report
}
