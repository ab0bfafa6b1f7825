use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::Radius;

/// Price tiers as the enrichment directory models them, cheapest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Cheap,
    Moderate,
    Expensive,
    Luxury,
}

impl PriceTier {
    pub const ALL: [PriceTier; 4] = [
        PriceTier::Cheap,
        PriceTier::Moderate,
        PriceTier::Expensive,
        PriceTier::Luxury,
    ];

    /// Maps the directory's numeric price level (1 through 4) to a tier.
    #[must_use]
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(PriceTier::Cheap),
            2 => Some(PriceTier::Moderate),
            3 => Some(PriceTier::Expensive),
            4 => Some(PriceTier::Luxury),
            _ => None,
        }
    }

    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            PriceTier::Cheap => 1,
            PriceTier::Moderate => 2,
            PriceTier::Expensive => 3,
            PriceTier::Luxury => 4,
        }
    }

    /// Maps the directory's dollar-sign string (`$` through `$$$$`) to a tier.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "$" => Some(PriceTier::Cheap),
            "$$" => Some(PriceTier::Moderate),
            "$$$" => Some(PriceTier::Expensive),
            "$$$$" => Some(PriceTier::Luxury),
            _ => None,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            PriceTier::Cheap => "$",
            PriceTier::Moderate => "$$",
            PriceTier::Expensive => "$$$",
            PriceTier::Luxury => "$$$$",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which cuisine terms a search fans out over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuisineSelection {
    /// No preference. The search draws terms from the standing cuisine list.
    Any,
    /// One search pass per listed term.
    Chosen(Vec<String>),
}

impl CuisineSelection {
    /// Builds a selection from raw user input, trimming whitespace and
    /// dropping blank entries. No usable terms means no preference.
    #[must_use]
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let cleaned: Vec<String> = terms
            .into_iter()
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty())
            .collect();
        if cleaned.is_empty() {
            CuisineSelection::Any
        } else {
            CuisineSelection::Chosen(cleaned)
        }
    }
}

/// Price ceiling the caller asked for, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetPreference {
    /// No preference. The search settles on one tier at random per run.
    Any,
    Tier(PriceTier),
}

/// Everything the caller controls about a search.
#[derive(Debug, Clone)]
pub struct SearchFilters {
    /// Free-form street address to anchor the search on.
    pub address: String,
    pub radius: Radius,
    pub cuisines: CuisineSelection,
    /// Dietary restrictions forwarded to the enrichment directory verbatim,
    /// e.g. `gluten_free` or `vegetarian`. Ordered so request URLs are stable.
    pub dietary: BTreeSet<String>,
    pub budget: BudgetPreference,
    /// Lowest acceptable rating on the directory's 1.0 to 5.0 scale.
    pub min_rating: f64,
}

impl SearchFilters {
    /// Rejects requests that can be refused before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns `FilterError` when the address is blank, the radius is not a
    /// positive distance, or the minimum rating falls outside 1.0 to 5.0.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.address.trim().is_empty() {
            return Err(FilterError::BlankAddress);
        }
        let meters = self.radius.to_meters();
        if !meters.is_finite() || meters <= 0.0 {
            return Err(FilterError::InvalidRadius(meters));
        }
        if !self.min_rating.is_finite() || !(1.0..=5.0).contains(&self.min_rating) {
            return Err(FilterError::InvalidMinRating(self.min_rating));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("address must not be blank")]
    BlankAddress,
    #[error("radius must be a positive distance, got {0} meters")]
    InvalidRadius(f64),
    #[error("minimum rating must be between 1.0 and 5.0, got {0}")]
    InvalidMinRating(f64),
}
