use crate::app_config::AppConfig;
use crate::domain::{GeoLocation, GeoLocationError};
use crate::geocoder::search_result::SearchResult;
use reqwest::Client;
use std::num::ParseFloatError;
use thiserror::Error;
use tracing::{debug, instrument};

/// Resolves `address` to the coordinates of the best matching Nominatim result.
#[instrument(skip(client, config))]
pub async fn geocode(client: &Client, config: &AppConfig, address: &str) -> Result<GeoLocation, GeocodeError> {
    let geocoder = config.geocoder();
    let response = client
        .get(format!("{}/search", geocoder.url()))
        .query(&[("q", address), ("format", "json"), ("countrycodes", geocoder.country_codes())])
        .query(&[("limit", geocoder.limit())])
        .send()
        .await?
        .error_for_status()?;

    let results = response.json::<Vec<SearchResult>>().await?;
    debug!("Received {} result(s) for '{}'", results.len(), address);

    let best = results.into_iter().next().ok_or_else(|| GeocodeError::NoResult {
        address: address.to_string(),
    })?;
    debug!("Best match: {}", best.display_name.as_deref().unwrap_or("<unnamed>"));

    let latitude = parse_coordinate(&best.lat)?;
    let longitude = parse_coordinate(&best.lon)?;
    Ok(GeoLocation::new(latitude, longitude)?)
}

fn parse_coordinate(value: &str) -> Result<f64, GeocodeError> {
    value.trim().parse::<f64>().map_err(|source| GeocodeError::InvalidCoordinate {
        value: value.to_string(),
        source,
    })
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("no result for '{address}'")]
    NoResult { address: String },
    #[error("invalid coordinate '{value}': {source}")]
    InvalidCoordinate { value: String, source: ParseFloatError },
    #[error(transparent)]
    OutOfRange(#[from] GeoLocationError),
}
