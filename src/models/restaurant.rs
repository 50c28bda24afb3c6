use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::response::{Geoloc, VenueHit};
use crate::utils::text::strip_markup;

/// Normalized output unit built from one upstream hit. Duplicates are kept
/// on purpose: a venue matching under two cuisine tags appears twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    pub cuisine: String,
    pub location: Geoloc,
}

impl RestaurantRecord {
    /// Normalizes one hit: name stripped of highlight markup, primary
    /// cuisine tag lower-cased and trimmed, coordinates passed through.
    /// Missing fields make the hit unusable.
    pub fn try_from_hit(hit: &VenueHit) -> Result<Self> {
        let cuisine = hit
            .highlight
            .cuisine
            .first()
            .ok_or_else(|| Error::UpstreamSchema("hit has no cuisine tag".to_string()))?;
        let location = hit
            .geoloc
            .ok_or_else(|| Error::UpstreamSchema("hit has no geolocation".to_string()))?;

        Ok(Self {
            name: strip_markup(&hit.highlight.name.value),
            cuisine: cuisine.value.to_lowercase().trim().to_string(),
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::{HighlightResult, HighlightValue};

    fn hit(name: &str, cuisine: &str) -> VenueHit {
        VenueHit {
            highlight: HighlightResult {
                name: HighlightValue {
                    value: name.to_string(),
                },
                cuisine: vec![HighlightValue {
                    value: cuisine.to_string(),
                }],
            },
            geoloc: Some(Geoloc {
                latitude: 40.72,
                longitude: -73.99,
            }),
        }
    }

    #[test]
    fn normalizes_name_and_cuisine() {
        let record = RestaurantRecord::try_from_hit(&hit("<em>Sushi</em> Nakazawa", " Japanese "))
            .unwrap();
        assert_eq!(record.name, "Sushi Nakazawa");
        assert_eq!(record.cuisine, "japanese");
    }

    #[test]
    fn cuisine_is_lowercased_regardless_of_upstream_casing() {
        let record = RestaurantRecord::try_from_hit(&hit("Via Carota", "ITALIAN")).unwrap();
        assert_eq!(record.cuisine, "italian");
    }

    #[test]
    fn missing_cuisine_tag_is_a_schema_failure() {
        let mut h = hit("Lilia", "Italian");
        h.highlight.cuisine.clear();
        assert!(matches!(
            RestaurantRecord::try_from_hit(&h),
            Err(Error::UpstreamSchema(_))
        ));
    }

    #[test]
    fn missing_geolocation_is_a_schema_failure() {
        let mut h = hit("Lilia", "Italian");
        h.geoloc = None;
        assert!(matches!(
            RestaurantRecord::try_from_hit(&h),
            Err(Error::UpstreamSchema(_))
        ));
    }
}
