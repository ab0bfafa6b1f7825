use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod filters;
pub mod geo;
pub mod restaurant;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use filters::{BudgetPreference, CuisineSelection, FilterError, PriceTier, SearchFilters};
pub use geo::{Coordinate, Radius, METERS_PER_FOOT, METERS_PER_MILE};
pub use restaurant::{Candidate, EnrichedRestaurant, SearchResult};

/// Errors raised while assembling configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
