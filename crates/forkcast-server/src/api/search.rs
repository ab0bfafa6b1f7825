use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use forkcast_core::{
    BudgetPreference, Coordinate, CuisineSelection, EnrichedRestaurant, PriceTier, Radius,
    SearchFilters,
};
use forkcast_search::{FailureReason, SearchOutcome};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

const DEFAULT_MIN_RATING: f64 = 1.0;

#[derive(Debug, Deserialize)]
pub(super) struct SearchRequest {
    pub address: String,
    pub radius: f64,
    #[serde(default)]
    pub radius_unit: RadiusUnit,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    pub budget_tier: Option<u8>,
    pub min_rating: Option<f64>,
}

/// Unit of the `radius` field. The pipeline itself works in meters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum RadiusUnit {
    #[default]
    Feet,
    Miles,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Coordinate>,
    pub picks: Vec<PickItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct PickItem {
    pub external_id: String,
    pub name: String,
    pub rating: f64,
    pub price: Option<&'static str>,
    pub phone: String,
    pub categories: Vec<String>,
    pub address: String,
    pub image_url: Option<String>,
    pub directions_url: String,
}

impl From<EnrichedRestaurant> for PickItem {
    fn from(pick: EnrichedRestaurant) -> Self {
        let directions_url = pick.directions_url();
        Self {
            external_id: pick.external_id,
            name: pick.name,
            rating: pick.rating,
            price: pick.price_tier.map(PriceTier::symbol),
            phone: pick.phone,
            categories: pick.categories,
            address: pick.vicinity,
            image_url: pick.image_url,
            directions_url,
        }
    }
}

pub(super) async fn run_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let filters = build_filters(&req_id.0, request)?;

    let outcome = state.pipeline.run(&filters).await;
    let message = outcome.user_message();
    match outcome {
        SearchOutcome::Ready(result) => Ok(Json(ApiResponse {
            data: SearchResponse {
                status: "ready",
                message,
                anchor: Some(result.anchor),
                picks: result.picks.into_iter().map(PickItem::from).collect(),
            },
            meta: ResponseMeta::new(req_id.0),
        })),
        SearchOutcome::Empty(_) => Ok(Json(ApiResponse {
            data: SearchResponse {
                status: "empty",
                message,
                anchor: None,
                picks: Vec::new(),
            },
            meta: ResponseMeta::new(req_id.0),
        })),
        SearchOutcome::Failed(FailureReason::InvalidInput(_)) => {
            Err(ApiError::new(req_id.0, "validation_error", message))
        }
        SearchOutcome::Failed(FailureReason::AddressNotFound) => {
            Err(ApiError::new(req_id.0, "address_not_found", message))
        }
    }
}

/// Maps the request DTO onto pipeline filters. Only the budget tier needs
/// checking here; everything else is validated by the pipeline itself.
fn build_filters(request_id: &str, request: SearchRequest) -> Result<SearchFilters, ApiError> {
    let radius = match request.radius_unit {
        RadiusUnit::Feet => Radius::Feet(request.radius),
        RadiusUnit::Miles => Radius::Miles(request.radius),
    };

    let budget = match request.budget_tier {
        None => BudgetPreference::Any,
        Some(level) => PriceTier::from_level(level)
            .map(BudgetPreference::Tier)
            .ok_or_else(|| {
                ApiError::new(
                    request_id,
                    "validation_error",
                    format!("budget_tier must be between 1 and 4, got {level}"),
                )
            })?,
    };

    Ok(SearchFilters {
        address: request.address,
        radius,
        cuisines: CuisineSelection::from_terms(request.cuisines),
        dietary: request.dietary.into_iter().collect(),
        budget,
        min_rating: request.min_rating.unwrap_or(DEFAULT_MIN_RATING),
    })
}
