use async_trait::async_trait;
use http::StatusCode;
use rquest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::error::{Error, Result};
use crate::models::GeoFilter;

/// Address-to-coordinates collaborator. The engine never surfaces a
/// geocoding failure; `resolve_location` recovers it into the default city.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn locate(&self, address: &str) -> Result<GeoFilter>;
}

/// A location after geocoding. `fallback` is true when the address could
/// not be resolved and the default city was substituted, so callers never
/// mistake the fallback for the requested place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation {
    pub geo: GeoFilter,
    pub fallback: bool,
}

pub async fn resolve_location(
    geocoder: &dyn Geocoder,
    address: &str,
    default: GeoFilter,
) -> ResolvedLocation {
    match geocoder.locate(address).await {
        Ok(geo) => {
            debug!(address, latitude = geo.latitude, longitude = geo.longitude, "Address resolved");
            ResolvedLocation {
                geo,
                fallback: false,
            }
        }
        Err(e) => {
            warn!(
                address,
                error = %e,
                "Geocoding failed, falling back to default location"
            );
            ResolvedLocation {
                geo: default,
                fallback: true,
            }
        }
    }
}

/// GeoNames `searchJSON` lookup. Carries its own plain client: the Resy
/// auth headers must never be sent to the geocoding service.
pub struct GeoNamesGeocoder {
    client: Client,
    endpoint: String,
    username: String,
    radius: u32,
}

#[derive(Debug, Deserialize)]
struct GeoNamesResponse {
    #[serde(default)]
    geonames: Vec<GeoNamesHit>,
}

// GeoNames returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct GeoNamesHit {
    lat: String,
    lng: String,
}

impl GeoNamesGeocoder {
    pub fn new(config: &GeocodingConfig, radius: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            username: config.username.clone(),
            radius,
        })
    }
}

#[async_trait]
impl Geocoder for GeoNamesGeocoder {
    async fn locate(&self, address: &str) -> Result<GeoFilter> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", address),
                ("maxRows", "1"),
                ("username", self.username.as_str()),
            ])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Error::Geocoding(format!(
                "geonames returned status {}",
                response.status().as_u16()
            )));
        }

        let parsed: GeoNamesResponse = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(e.to_string()))?;

        let hit = parsed
            .geonames
            .first()
            .ok_or_else(|| Error::Geocoding(format!("no match for address '{}'", address)))?;

        let latitude: f64 = hit
            .lat
            .parse()
            .map_err(|_| Error::Geocoding(format!("unparsable latitude '{}'", hit.lat)))?;
        let longitude: f64 = hit
            .lng
            .parse()
            .map_err(|_| Error::Geocoding(format!("unparsable longitude '{}'", hit.lng)))?;

        Ok(GeoFilter {
            latitude,
            longitude,
            radius: self.radius,
        })
    }
}
