use rand::seq::IndexedRandom;
use tracing::{error, info};

use crate::cuisines;
use crate::error::{Error, Result};
use crate::models::{RestaurantRecord, SearchCriteria};
use crate::services::search::{ResultFetcher, VenueSearchApi};

/// What to do when one cuisine's fetch fails: give up immediately, or keep
/// going and report the failure alongside the partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    FailFast,
    Continue,
}

/// Resolved engine configuration. Master cuisine list and probe page size
/// are injected here once at construction, never read from globals.
#[derive(Debug, Clone)]
pub struct RouletteConfig {
    pub master_cuisines: Vec<String>,
    pub probe_page_size: u32,
    pub failure_policy: FailurePolicy,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            master_cuisines: cuisines::master_list(),
            probe_page_size: 20,
            failure_policy: FailurePolicy::Continue,
        }
    }
}

/// One cuisine's fetch failure, kept alongside whatever did succeed.
#[derive(Debug)]
pub struct CuisineFailure {
    pub cuisine: String,
    pub error: Error,
}

/// Everything one discovery pass produced: records in cuisine iteration
/// order (then upstream hit order), plus any per-cuisine failures.
#[derive(Debug, Default)]
pub struct Discovery {
    pub restaurants: Vec<RestaurantRecord>,
    pub failures: Vec<CuisineFailure>,
}

/// The caller-facing outcome: one randomly chosen restaurant and how many
/// candidates it was drawn from.
#[derive(Debug, Clone)]
pub struct Spin {
    pub restaurant: RestaurantRecord,
    pub total_found: usize,
}

/// Discovery and selection engine. Stateless across requests; each call
/// stands alone.
pub struct Roulette<A: VenueSearchApi> {
    fetcher: ResultFetcher<A>,
    config: RouletteConfig,
}

impl<A: VenueSearchApi> Roulette<A> {
    pub fn new(api: A, config: RouletteConfig) -> Self {
        let fetcher = ResultFetcher::new(api, config.probe_page_size);
        Self { fetcher, config }
    }

    /// Fetches and aggregates all matching restaurants for the criteria.
    /// Records are appended per cuisine in resolved-list order; no
    /// deduplication across cuisines.
    pub async fn discover(&self, criteria: &SearchCriteria) -> Result<Discovery> {
        criteria.validate()?;

        let resolved = cuisines::resolve(&criteria.cuisines, &self.config.master_cuisines);
        info!(cuisines = ?resolved, "Resolved cuisine set");

        let mut discovery = Discovery::default();

        for cuisine in &resolved {
            match self.fetcher.fetch_cuisine(criteria, cuisine).await {
                Ok(mut records) => discovery.restaurants.append(&mut records),
                Err(e) => match self.config.failure_policy {
                    FailurePolicy::FailFast => return Err(e),
                    FailurePolicy::Continue => {
                        error!(cuisine = %cuisine, error = %e, "Cuisine fetch failed, continuing");
                        discovery.failures.push(CuisineFailure {
                            cuisine: cuisine.clone(),
                            error: e,
                        });
                    }
                },
            }
        }

        info!(
            total = discovery.restaurants.len(),
            failed_cuisines = discovery.failures.len(),
            "Discovery complete"
        );

        Ok(discovery)
    }

    /// Discovers, then picks one restaurant uniformly at random over all
    /// aggregated records. Zero matches is `Error::NoRestaurants`.
    pub async fn spin(&self, criteria: &SearchCriteria) -> Result<Spin> {
        let discovery = self.discover(criteria).await?;
        let total_found = discovery.restaurants.len();
        let restaurant = select_random(&discovery.restaurants)?.clone();

        Ok(Spin {
            restaurant,
            total_found,
        })
    }
}

/// Uniform choice over records, not over cuisines: a cuisine contributing
/// more matches is proportionally more likely to win. Empty input is a
/// defined error, never a panic or an implicit re-fetch.
pub fn select_random(records: &[RestaurantRecord]) -> Result<&RestaurantRecord> {
    records.choose(&mut rand::rng()).ok_or(Error::NoRestaurants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Geoloc;
    use std::collections::HashMap;

    fn record(name: &str) -> RestaurantRecord {
        RestaurantRecord {
            name: name.to_string(),
            cuisine: "japanese".to_string(),
            location: Geoloc {
                latitude: 40.72,
                longitude: -73.99,
            },
        }
    }

    #[test]
    fn select_on_empty_set_is_a_defined_error() {
        assert!(matches!(select_random(&[]), Err(Error::NoRestaurants)));
    }

    #[test]
    fn select_on_singleton_returns_it() {
        let records = vec![record("Nakazawa")];
        assert_eq!(select_random(&records).unwrap().name, "Nakazawa");
    }

    #[test]
    fn selection_is_roughly_uniform() {
        let records: Vec<RestaurantRecord> =
            (0..5).map(|i| record(&format!("Venue {}", i))).collect();

        let draws = 5000;
        let mut counts: HashMap<String, u32> = HashMap::new();
        for _ in 0..draws {
            let picked = select_random(&records).unwrap();
            *counts.entry(picked.name.clone()).or_default() += 1;
        }

        // Expected 1000 per venue; +/-250 is far outside binomial noise.
        assert_eq!(counts.len(), records.len());
        for (name, count) in counts {
            assert!(
                (750..=1250).contains(&count),
                "venue {} drawn {} times out of {}",
                name,
                count,
                draws
            );
        }
    }
}
