use config::{Config, ConfigError};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::models::GeoFilter;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub geocoding: GeocodingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    pub endpoint: String,
    pub username: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub probe_page_size: u32,
    pub radius_meters: u32,
    pub default_address: String,
    pub default_latitude: f64,
    pub default_longitude: f64,
    pub fail_fast: bool,
}

impl SearchConfig {
    /// The configured fallback location, used whenever geocoding cannot
    /// resolve the requested address.
    pub fn default_geo(&self) -> GeoFilter {
        GeoFilter {
            latitude: self.default_latitude,
            longitude: self.default_longitude,
            radius: self.radius_meters,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.api.base_url,
            header_count = settings.api.headers.len(),
            "Loaded settings"
        );

        Ok(settings)
    }
}
