//! HTTP client for the places directory REST API.
//!
//! Wraps `reqwest` with directory-specific error handling, API key management,
//! and typed response deserialization. Both endpoints check the `"status"`
//! field in the JSON envelope and surface API-level errors as
//! [`PlacesError::ApiError`].

use std::time::Duration;

use reqwest::{Client, Url};

use forkcast_core::{Candidate, Coordinate};

use crate::error::PlacesError;
use crate::types::{GeocodeResponse, NearbySearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

const GEOCODE_PATH: &str = "geocode/json";
const NEARBY_SEARCH_PATH: &str = "place/nearbysearch/json";

/// Every nearby search is scoped to this place category.
const PLACE_CATEGORY: &str = "restaurant";

/// Client for the places directory REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    geocode_url: Url,
    nearby_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production places directory.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining endpoint paths appends to it rather than replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;
        let geocode_url = base
            .join(GEOCODE_PATH)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;
        let nearby_url = base
            .join(NEARBY_SEARCH_PATH)
            .map_err(|e| PlacesError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            geocode_url,
            nearby_url,
        })
    }

    /// Resolves a free-form address to a coordinate.
    ///
    /// Calls the `geocode/json` endpoint and returns the first match, or
    /// `None` when the directory recognizes nothing at that address.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<Option<Coordinate>, PlacesError> {
        let url = self.build_url(&self.geocode_url, &[("address", address)]);
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let envelope: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("geocode(address={address})"),
                source: e,
            })?;

        Ok(envelope.results.into_iter().next().map(|result| {
            Coordinate::new(result.geometry.location.lat, result.geometry.location.lng)
        }))
    }

    /// Searches for restaurants around an anchor point.
    ///
    /// Calls the `place/nearbysearch/json` endpoint scoped to the restaurant
    /// category, with `keyword` narrowing results to one cuisine. An empty
    /// vector means the directory found nothing inside the radius.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::ApiError`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn search_nearby(
        &self,
        anchor: Coordinate,
        radius_meters: f64,
        keyword: &str,
    ) -> Result<Vec<Candidate>, PlacesError> {
        let location = anchor.as_query_value();
        let radius = radius_meters.to_string();
        let url = self.build_url(
            &self.nearby_url,
            &[
                ("location", &location),
                ("radius", &radius),
                ("type", PLACE_CATEGORY),
                ("keyword", keyword),
            ],
        );
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let envelope: NearbySearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("search_nearby(keyword={keyword})"),
                source: e,
            })?;

        Ok(envelope
            .results
            .into_iter()
            .map(|place| {
                let location =
                    Coordinate::new(place.geometry.location.lat, place.geometry.location.lng);
                Candidate {
                    external_id: place.place_id,
                    name: place.name,
                    vicinity: place.vicinity.unwrap_or_default(),
                    location,
                }
            })
            .collect())
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    ///
    /// Clones the endpoint URL and appends `key` and any additional parameters
    /// via [`Url::query_pairs_mut`], ensuring all values are safely encoded.
    fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the envelope `"status"` field and returns an error unless it is
    /// `"OK"` or `"ZERO_RESULTS"`.
    fn check_api_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("MISSING_STATUS");
        if status == "OK" || status == "ZERO_RESULTS" {
            return Ok(());
        }
        let msg = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| status.to_string(), |m| format!("{status}: {m}"));
        Err(PlacesError::ApiError(msg))
    }
}
