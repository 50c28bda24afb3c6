use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::json;
use std::io::Read;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use resy_roulette::clients::ClientPool;
use resy_roulette::services::geocode::resolve_location;
use resy_roulette::{
    Error, FailurePolicy, GeoNamesGeocoder, ResySearchApi, Roulette, RouletteConfig,
    SearchCriteria, Settings,
};

/// One spin request, as posted by the web form or passed on the command
/// line. Everything is optional; defaults mirror the form's.
#[derive(Debug, Deserialize)]
struct SpinRequest {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    time: Option<String>,
    #[serde(default = "default_party_size")]
    party_size: u32,
    #[serde(default)]
    location: Option<String>,
    /// Comma-separated free text, e.g. "Japanese, Korean, American".
    #[serde(default)]
    cuisines: Option<String>,
}

fn default_party_size() -> u32 {
    2
}

fn read_request() -> Result<SpinRequest> {
    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("parsing spin request JSON")
}

fn split_cuisines(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .unwrap_or_default()
        .split(',')
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::new()?;
    let request = read_request()?;

    let client_pool = Arc::new(ClientPool::new(&settings.api)?);

    let address = request
        .location
        .clone()
        .unwrap_or_else(|| settings.search.default_address.clone());
    let geocoder = GeoNamesGeocoder::new(&settings.geocoding, settings.search.radius_meters)?;
    let location = resolve_location(&geocoder, &address, settings.search.default_geo()).await;

    let criteria = SearchCriteria {
        date: request
            .date
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
        time: request.time.filter(|t| !t.is_empty()),
        party_size: request.party_size,
        geo: location.geo,
        cuisines: split_cuisines(&request.cuisines),
    };

    info!(?criteria, fallback_location = location.fallback, "Spinning");

    let api = ResySearchApi::new(client_pool, settings.api.base_url.clone());
    let config = RouletteConfig {
        failure_policy: if settings.search.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        },
        probe_page_size: settings.search.probe_page_size,
        ..Default::default()
    };
    let roulette = Roulette::new(api, config);

    let envelope = match roulette.spin(&criteria).await {
        Ok(spin) => json!({
            "success": true,
            "restaurant": spin.restaurant,
            "total_restaurants_found": spin.total_found,
            "used_fallback_location": location.fallback,
        }),
        Err(Error::NoRestaurants) => json!({
            "success": false,
            "message": "No restaurants found for the given criteria",
            "total_restaurants_found": 0,
            "used_fallback_location": location.fallback,
        }),
        Err(e) => return Err(e.into()),
    };

    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
