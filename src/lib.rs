pub mod clients;
pub mod config;
pub mod cuisines;
pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use models::{GeoFilter, RestaurantRecord, SearchCriteria};
pub use query::VenueSearchQuery;
pub use services::geocode::{resolve_location, GeoNamesGeocoder, Geocoder, ResolvedLocation};
pub use services::roulette::{
    CuisineFailure, Discovery, FailurePolicy, Roulette, RouletteConfig, Spin,
};
pub use services::search::{ResultFetcher, ResySearchApi, VenueSearchApi};
