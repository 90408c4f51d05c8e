use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

/// Creates the client used for all geocoding requests. Nominatim's usage policy requires every request to identify
/// the application through its `User-Agent`.
pub fn new_client(config: &AppConfig) -> Result<Client, GeocoderClientError> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_str(config.geocoder().user_agent())?);

    let client = Client::builder()
        .default_headers(headers)
        .timeout(config.geocoder().timeout())
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum GeocoderClientError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("geocoder client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
}
