use serde::{Deserialize, Serialize};

use crate::filters::PriceTier;
use crate::geo::Coordinate;

/// A restaurant surfaced by nearby search, before enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifier assigned by the places directory.
    pub external_id: String,
    pub name: String,
    /// Short street address as the directory renders it.
    pub vicinity: String,
    pub location: Coordinate,
}

/// A candidate that survived enrichment and the rating cutoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRestaurant {
    pub external_id: String,
    pub name: String,
    pub vicinity: String,
    pub location: Coordinate,
    /// Rating on the enrichment directory's 1.0 to 5.0 scale.
    pub rating: f64,
    pub price_tier: Option<PriceTier>,
    /// Display-formatted phone number, empty when the directory has none.
    pub phone: String,
    pub categories: Vec<String>,
    pub image_url: Option<String>,
}

impl EnrichedRestaurant {
    /// Link that opens the restaurant's location in a maps search.
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.location.latitude, self.location.longitude
        )
    }
}

/// Payload of a search that produced at least one pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Geocoded anchor the radius was centered on.
    pub anchor: Coordinate,
    pub picks: Vec<EnrichedRestaurant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_url_targets_the_maps_search_endpoint() {
        let restaurant = EnrichedRestaurant {
            external_id: "abc123".to_string(),
            name: "Trattoria Uno".to_string(),
            vicinity: "100 Castro St".to_string(),
            location: Coordinate::new(37.422, -122.084),
            rating: 4.5,
            price_tier: Some(PriceTier::Moderate),
            phone: "(650) 555-0100".to_string(),
            categories: vec!["Italian".to_string()],
            image_url: None,
        };
        assert_eq!(
            restaurant.directions_url(),
            "https://www.google.com/maps/search/?api=1&query=37.422,-122.084"
        );
    }
}
