use config::{Config, ConfigError, Environment};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

const ENV_PREFIX: &str = "POTTERY_MAP";

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    geocoder: Geocoder,
    output: Output,
    log: Log,
}

impl AppConfig {
    /// Loads the configuration from the built-in defaults, the optional `config` and `config_local` files and
    /// `POTTERY_MAP_`-prefixed environment variables, in that order.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Self::environment())
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__")
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("geocoder.url", "https://nominatim.openstreetmap.org")?
            .set_default("geocoder.user_agent", "ma-pottery-map/1.0 contact@example.com")?
            .set_default("geocoder.country_codes", "us")?
            .set_default("geocoder.limit", 1_i64)?
            .set_default("geocoder.timeout", "10s")?
            .set_default("geocoder.request_delay", "1s")?
            .set_default("output.path", "studios.json")?
            .set_default("log.level", "info")
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn log(&self) -> &Log {
        &self.log
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoder {
    url: String,
    user_agent: String,
    country_codes: String,
    limit: u32,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    #[serde(with = "humantime_serde")]
    request_delay: Duration,
}

impl Geocoder {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn country_codes(&self) -> &str {
        &self.country_codes
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Pause between two consecutive requests, Nominatim allows at most one request per second.
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }
}

#[derive(Debug, Deserialize)]
pub struct Output {
    path: String,
}

impl Output {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
pub struct Log {
    #[serde(deserialize_with = "deserialize_level")]
    level: tracing::Level,
}

impl Log {
    pub fn level(&self) -> tracing::Level {
        self.level
    }
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<tracing::Level, D::Error>
where
    D: Deserializer<'de>,
{
    let level = String::deserialize(deserializer)?;
    level.parse().map_err(|_| {
        Error::custom(format!(
            "invalid log level: {}, must be one of trace, debug, info, warn or error",
            level
        ))
    })
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                geocoder: Geocoder {
                    url: "https://geocoder.url".to_string(),
                    user_agent: "pottery-map-test/1.0".to_string(),
                    country_codes: "us".to_string(),
                    limit: 1,
                    timeout: Duration::from_secs(5),
                    request_delay: Duration::ZERO,
                },
                output: Output {
                    path: "studios.json".to_string(),
                },
                log: Log {
                    level: tracing::Level::INFO,
                },
            },
        }
    }

    pub fn geocoder_url(mut self, url: String) -> Self {
        self.config.geocoder.url = url;
        self
    }

    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.config.geocoder.request_delay = delay;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.geocoder.timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
