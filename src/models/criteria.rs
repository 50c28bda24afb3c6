use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Geographic search area passed through verbatim to the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
}

/// One search request's worth of user preferences. Consumed once; the
/// cuisine list is resolved against the master enumeration by the engine,
/// not here.
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Reservation date, `YYYY-MM-DD`.
    pub date: String,
    /// Reservation time, `HH:MM`. `None` means no time filter at all,
    /// which the upstream treats differently from an empty filter.
    pub time: Option<String>,
    pub party_size: u32,
    pub geo: GeoFilter,
    /// Requested cuisines, possibly free text. Empty means "everything".
    pub cuisines: Vec<String>,
}

impl SearchCriteria {
    /// Caller-side validation. The engine assumes criteria have passed this
    /// before any query is built.
    pub fn validate(&self) -> Result<()> {
        if self.party_size == 0 {
            return Err(Error::InvalidCriteria(
                "party size must be at least 1".to_string(),
            ));
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err(Error::InvalidCriteria(format!(
                "unparsable date '{}', expected YYYY-MM-DD",
                self.date
            )));
        }
        if let Some(time) = &self.time {
            if NaiveTime::parse_from_str(time, "%H:%M").is_err() {
                return Err(Error::InvalidCriteria(format!(
                    "unparsable time '{}', expected HH:MM",
                    time
                )));
            }
        }
        Ok(())
    }
}
