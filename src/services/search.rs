use async_trait::async_trait;
use http::StatusCode;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::clients::ClientPool;
use crate::error::{Error, Result};
use crate::models::{RestaurantRecord, SearchCriteria, VenueSearchResponse};
use crate::query::VenueSearchQuery;

/// Seam over the venue search endpoint. The production impl talks to the
/// reservation service; tests substitute an in-memory mock.
#[async_trait]
pub trait VenueSearchApi: Send + Sync {
    async fn search(&self, query: &VenueSearchQuery) -> Result<VenueSearchResponse>;
}

#[async_trait]
impl<T: VenueSearchApi + ?Sized> VenueSearchApi for Arc<T> {
    async fn search(&self, query: &VenueSearchQuery) -> Result<VenueSearchResponse> {
        (**self).search(query).await
    }
}

/// Resy-backed search endpoint.
pub struct ResySearchApi {
    client_pool: Arc<ClientPool>,
    base_url: String,
}

impl ResySearchApi {
    pub fn new(client_pool: Arc<ClientPool>, base_url: impl Into<String>) -> Self {
        Self {
            client_pool,
            base_url: base_url.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/3/venuesearch/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl VenueSearchApi for ResySearchApi {
    async fn search(&self, query: &VenueSearchQuery) -> Result<VenueSearchResponse> {
        let url = self.search_url();
        let client = self.client_pool.next_client();

        let request = client.post_json(&url, query);
        let response = client.send(request).await?;

        debug!(
            status = response.status().as_u16(),
            cuisine = %query.venue_filter.cuisine,
            per_page = query.per_page,
            "Venue search response received"
        );

        if response.status() != StatusCode::OK {
            return Err(Error::UpstreamStatus(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                body = %body_str,
                "Failed to parse venue search response"
            );
            Error::UpstreamSchema(e.to_string())
        })
    }
}

/// Runs the two-phase fetch for one cuisine at a time and normalizes the
/// hits. Every failure it returns is tagged with the cuisine it belongs to.
pub struct ResultFetcher<A: VenueSearchApi> {
    api: A,
    probe_page_size: u32,
}

impl<A: VenueSearchApi> ResultFetcher<A> {
    pub fn new(api: A, probe_page_size: u32) -> Self {
        Self {
            api,
            probe_page_size,
        }
    }

    pub async fn fetch_cuisine(
        &self,
        criteria: &SearchCriteria,
        cuisine: &str,
    ) -> Result<Vec<RestaurantRecord>> {
        self.fetch_cuisine_inner(criteria, cuisine)
            .await
            .map_err(|e| Error::for_cuisine(cuisine, e))
    }

    async fn fetch_cuisine_inner(
        &self,
        criteria: &SearchCriteria,
        cuisine: &str,
    ) -> Result<Vec<RestaurantRecord>> {
        let probe = VenueSearchQuery::probe(criteria, cuisine, self.probe_page_size);
        let probed = self.api.search(&probe).await?;
        let total = probed.meta.total;

        if total == 0 {
            debug!(cuisine, "No matches, skipping full fetch");
            return Ok(Vec::new());
        }

        let full = VenueSearchQuery::full(criteria, cuisine, total);
        let response = self.api.search(&full).await?;

        // The service may reshuffle between the two requests. Process
        // whatever the full page returned.
        if response.meta.total != total {
            warn!(
                cuisine,
                probe_total = total,
                full_total = response.meta.total,
                "Total changed between probe and full fetch"
            );
        }

        let records = response
            .search
            .hits
            .iter()
            .map(RestaurantRecord::try_from_hit)
            .collect::<Result<Vec<_>>>()?;

        debug!(cuisine, count = records.len(), "Cuisine fetch complete");

        Ok(records)
    }
}
