use serde::{Deserialize, Serialize};

/// Wire types for the venue search endpoint. The engine depends on this
/// exact shape; schema drift upstream is an integration failure, not
/// something to self-heal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSearchResponse {
    pub meta: SearchMeta,
    pub search: SearchHits,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMeta {
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHits {
    pub hits: Vec<VenueHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueHit {
    #[serde(rename = "_highlightResult")]
    pub highlight: HighlightResult,
    #[serde(rename = "_geoloc")]
    pub geoloc: Option<Geoloc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightResult {
    pub name: HighlightValue,
    #[serde(default)]
    pub cuisine: Vec<HighlightValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightValue {
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geoloc {
    pub latitude: f64,
    pub longitude: f64,
}
