use serde::Serialize;

use crate::models::{GeoFilter, SearchCriteria};

/// Request payload for the venue search endpoint. The service learns total
/// match counts only from a first "probe" page, so every search is a pair:
/// probe with a small page, then a full page sized to the learned total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSearchQuery {
    pub availability: bool,
    pub page: u32,
    pub per_page: u32,
    pub slot_filter: SlotFilter,
    pub types: Vec<String>,
    pub order_by: String,
    pub geo: GeoFilter,
    pub query: String,
    pub venue_filter: VenueFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotFilter {
    pub day: String,
    pub party_size: u32,
    // Must be absent, not empty, when no time was given: the upstream
    // matches "no time filter" and "empty time filter" differently.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueFilter {
    pub cuisine: String,
}

impl VenueSearchQuery {
    /// First-phase query: page 1 with a small fixed page size, issued only
    /// to learn the total match count for this cuisine.
    pub fn probe(criteria: &SearchCriteria, cuisine: &str, probe_page_size: u32) -> Self {
        Self::sized(criteria, cuisine, probe_page_size)
    }

    /// Second-phase query: same filter, page size set to the learned total
    /// so the complete result set arrives in one page.
    pub fn full(criteria: &SearchCriteria, cuisine: &str, total: u32) -> Self {
        Self::sized(criteria, cuisine, total)
    }

    fn sized(criteria: &SearchCriteria, cuisine: &str, per_page: u32) -> Self {
        Self {
            availability: true,
            page: 1,
            per_page,
            slot_filter: SlotFilter {
                day: criteria.date.clone(),
                party_size: criteria.party_size,
                time_filter: criteria.time.clone(),
            },
            types: vec!["venue".to_string()],
            order_by: "availability".to_string(),
            geo: criteria.geo,
            query: String::new(),
            venue_filter: VenueFilter {
                cuisine: cuisine.to_string(),
            },
        }
    }
}
