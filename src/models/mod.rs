mod criteria;
mod response;
mod restaurant;

pub use criteria::{GeoFilter, SearchCriteria};
pub use response::{
    Geoloc, HighlightResult, HighlightValue, SearchHits, SearchMeta, VenueHit, VenueSearchResponse,
};
pub use restaurant::RestaurantRecord;
