//! HTTP client for the enrichment directory REST API.
//!
//! Wraps `reqwest` with bearer-token auth and typed response
//! deserialization. The directory reports failures as non-2xx responses
//! carrying an error body; those surface as [`EnrichError::ApiError`].

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::{Client, Url};

use forkcast_core::{Candidate, EnrichedRestaurant, PriceTier};

use crate::error::EnrichError;
use crate::types::{Business, BusinessSearchResponse};

const DEFAULT_BASE_URL: &str = "https://api.yelp.com/v3/";

const BUSINESS_SEARCH_PATH: &str = "businesses/search";

/// Client for the enrichment directory REST API.
///
/// Manages the HTTP client, API key, and base URL. Use [`EnrichClient::new`]
/// for production or [`EnrichClient::with_base_url`] to point at a mock
/// server in tests.
pub struct EnrichClient {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl EnrichClient {
    /// Creates a new client pointed at the production enrichment directory.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, EnrichError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EnrichError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, EnrichError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joining the endpoint path appends to it rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalised)
            .map_err(|e| EnrichError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;
        let search_url = base
            .join(BUSINESS_SEARCH_PATH)
            .map_err(|e| EnrichError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }

    /// Looks up the directory's best match for a named restaurant near a point.
    ///
    /// Searches with `limit=1`, optionally constrained to a price level and a
    /// set of dietary attributes. Returns `None` when the directory has no
    /// matching listing.
    ///
    /// # Errors
    ///
    /// - [`EnrichError::ApiError`] if the directory rejects the request.
    /// - [`EnrichError::Http`] on network failure.
    /// - [`EnrichError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn best_match(
        &self,
        term: &str,
        location: forkcast_core::Coordinate,
        price: Option<PriceTier>,
        attributes: &BTreeSet<String>,
    ) -> Result<Option<Business>, EnrichError> {
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("term", term),
            ("latitude", &latitude),
            ("longitude", &longitude),
            ("limit", "1"),
        ];
        // Bind the owned strings outside the if blocks so the borrows live
        // long enough.
        let price_level;
        if let Some(tier) = price {
            price_level = tier.level().to_string();
            params.push(("price", &price_level));
        }
        let attribute_list;
        if !attributes.is_empty() {
            attribute_list = attributes.iter().cloned().collect::<Vec<_>>().join(",");
            params.push(("attributes", &attribute_list));
        }

        let url = self.build_url(&params);
        let body = self.request_json(&url).await?;

        let envelope: BusinessSearchResponse =
            serde_json::from_value(body).map_err(|e| EnrichError::Deserialize {
                context: format!("business_search(term={term})"),
                source: e,
            })?;

        Ok(envelope.businesses.into_iter().next())
    }

    /// Enriches candidates in order, dropping the ones that cannot qualify.
    ///
    /// For each candidate this looks up the best directory match at the
    /// candidate's own location. Candidates are dropped when the lookup
    /// fails, when no listing matches, or when the listing's rating falls
    /// below `min_rating`. Failures are logged and never abort the batch,
    /// so one flaky lookup cannot sink the others. Output order follows
    /// input order.
    pub async fn enrich(
        &self,
        candidates: &[Candidate],
        dietary: &BTreeSet<String>,
        price: Option<PriceTier>,
        min_rating: f64,
    ) -> Vec<EnrichedRestaurant> {
        let mut enriched = Vec::new();
        for candidate in candidates {
            let matched = match self
                .best_match(&candidate.name, candidate.location, price, dietary)
                .await
            {
                Ok(matched) => matched,
                Err(e) => {
                    tracing::warn!(
                        restaurant = %candidate.name,
                        error = %e,
                        "enrichment lookup failed; dropping candidate"
                    );
                    continue;
                }
            };

            let Some(business) = matched else {
                tracing::debug!(restaurant = %candidate.name, "no enrichment match");
                continue;
            };
            let Some(rating) = business.rating else {
                tracing::debug!(restaurant = %candidate.name, "listing has no rating");
                continue;
            };
            if rating < min_rating {
                continue;
            }

            enriched.push(EnrichedRestaurant {
                external_id: candidate.external_id.clone(),
                name: candidate.name.clone(),
                vicinity: candidate.vicinity.clone(),
                location: candidate.location,
                rating,
                price_tier: business.price.as_deref().and_then(PriceTier::from_symbol),
                phone: business.display_phone.unwrap_or_default(),
                categories: business.categories.into_iter().map(|c| c.title).collect(),
                image_url: business.image_url,
            });
        }
        enriched
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters via [`Url::query_pairs_mut`]. Auth travels in a header,
    /// not the query string.
    fn build_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.search_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends an authenticated GET request and parses the response body as
    /// JSON, extracting the directory's error description on non-2xx.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, EnrichError> {
        let response = self
            .client
            .get(url.clone())
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let description = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    v.get("error")
                        .and_then(|e| e.get("description"))
                        .and_then(serde_json::Value::as_str)
                        .map(ToString::to_string)
                });
            return Err(EnrichError::ApiError(match description {
                Some(desc) => format!("{status}: {desc}"),
                None => format!("request failed with status {status}"),
            }));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| EnrichError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
