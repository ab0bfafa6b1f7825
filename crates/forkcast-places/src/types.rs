//! Places directory response types.
//!
//! All types model the JSON structures returned by the geocoding and nearby
//! search endpoints. Both wrap their payload in an envelope whose `status`
//! field is `"OK"` on success, `"ZERO_RESULTS"` when nothing matched, and an
//! error code otherwise.

use serde::Deserialize;

/// Envelope for the `geocode/json` endpoint.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One geocoding match. The first entry is the directory's best match.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Envelope for the `place/nearbysearch/json` endpoint.
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One place returned by nearby search.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    /// Short street address, absent for some listings.
    #[serde(default)]
    pub vicinity: Option<String>,
    pub geometry: Geometry,
}

/// Wrapper around a place's point location.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// A latitude/longitude pair as the wire format spells it.
#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
