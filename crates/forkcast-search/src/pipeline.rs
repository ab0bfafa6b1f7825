//! Search pipeline orchestration.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use forkcast_core::{
    BudgetPreference, Candidate, CuisineSelection, FilterError, PriceTier, SearchFilters,
    SearchResult,
};
use forkcast_enrich::EnrichClient;
use forkcast_places::PlacesClient;

use crate::cuisines::draw_any_cuisine_terms;
use crate::select::sample;

/// How many cuisine terms an "any cuisine" search fans out over.
const ANY_CUISINE_TERM_COUNT: usize = 3;

/// How many candidates each cuisine term contributes by default.
const DEFAULT_PICKS_PER_TERM: usize = 1;

/// Terminal outcome of one search run.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    /// At least one enriched pick survived the filters.
    Ready(SearchResult),
    /// The run completed but produced nothing to show.
    Empty(EmptyReason),
    /// The run could not get past its inputs.
    Failed(FailureReason),
}

#[derive(Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// Every cuisine query came back without candidates.
    NoCandidates,
    /// Candidates existed but enrichment dropped them all.
    NoQualifyingResults,
}

#[derive(Debug, PartialEq)]
pub enum FailureReason {
    /// The filters were rejected before any network call.
    InvalidInput(FilterError),
    /// The geocoder had no coordinate for the address.
    AddressNotFound,
}

impl SearchOutcome {
    /// The message shown to the user for this outcome.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SearchOutcome::Ready(result) => {
                format!("{} top picks ready", result.picks.len())
            }
            SearchOutcome::Empty(EmptyReason::NoCandidates) => "no restaurants found".to_string(),
            SearchOutcome::Empty(EmptyReason::NoQualifyingResults) => {
                "no restaurants matched your filters".to_string()
            }
            SearchOutcome::Failed(FailureReason::InvalidInput(e)) => e.to_string(),
            SearchOutcome::Failed(FailureReason::AddressNotFound) => "address not found".to_string(),
        }
    }
}

/// Orchestrates one search: geocode, per-cuisine nearby search, random
/// candidate selection, enrichment, rating cutoff.
///
/// Holds only immutable state (the two directory clients and a pick count),
/// so concurrent searches can share one pipeline behind an `Arc`.
pub struct SearchPipeline {
    places: PlacesClient,
    enrich: EnrichClient,
    picks_per_term: usize,
}

impl SearchPipeline {
    #[must_use]
    pub fn new(places: PlacesClient, enrich: EnrichClient) -> Self {
        Self {
            places,
            enrich,
            picks_per_term: DEFAULT_PICKS_PER_TERM,
        }
    }

    /// Overrides how many candidates each cuisine term contributes to the
    /// pool. The default of 1 mirrors the one-representative-per-cuisine
    /// presentation; a top-N variant raises it.
    #[must_use]
    pub fn with_picks_per_term(mut self, picks_per_term: usize) -> Self {
        self.picks_per_term = picks_per_term;
        self
    }

    /// Run one search with OS-entropy randomness.
    pub async fn run(&self, filters: &SearchFilters) -> SearchOutcome {
        let mut rng = StdRng::from_os_rng();
        self.run_with_rng(filters, &mut rng).await
    }

    /// Run one search with caller-supplied randomness.
    ///
    /// Every random step of the run (term draws for "any cuisine", the
    /// budget-tier draw for "any budget", candidate selection) pulls from
    /// `rng`, so a seeded generator makes the whole run reproducible.
    ///
    /// 1. Validate filters; reject without touching the network.
    /// 2. Geocode the address into the anchor coordinate.
    /// 3. One nearby search per cuisine term, selecting candidates from
    ///    each non-empty result into a de-duplicated pool.
    /// 4. Enrich the pool once and apply the rating cutoff.
    ///
    /// Directory failures never abort the run: a failed geocode reads as
    /// address-not-found and a failed search or enrichment lookup reads as
    /// that step contributing nothing, each logged as a warning.
    pub async fn run_with_rng<R>(&self, filters: &SearchFilters, rng: &mut R) -> SearchOutcome
    where
        R: Rng + ?Sized,
    {
        if let Err(e) = filters.validate() {
            tracing::info!(error = %e, "rejecting search before it starts");
            return SearchOutcome::Failed(FailureReason::InvalidInput(e));
        }

        // Geocoding.
        let anchor = match self.places.geocode(&filters.address).await {
            Ok(Some(anchor)) => anchor,
            Ok(None) => {
                tracing::info!(address = %filters.address, "geocoder found no match");
                return SearchOutcome::Failed(FailureReason::AddressNotFound);
            }
            Err(e) => {
                tracing::warn!(
                    address = %filters.address,
                    error = %e,
                    "geocoding failed; treating as address not found"
                );
                return SearchOutcome::Failed(FailureReason::AddressNotFound);
            }
        };

        // Searching: one nearby query per cuisine term.
        let radius_meters = filters.radius.to_meters();
        let terms = match &filters.cuisines {
            CuisineSelection::Any => draw_any_cuisine_terms(rng, ANY_CUISINE_TERM_COUNT),
            CuisineSelection::Chosen(terms) => terms.clone(),
        };
        tracing::debug!(
            anchor = %anchor.as_query_value(),
            radius_meters,
            terms = ?terms,
            "searching for candidates"
        );

        let mut pool: Vec<Candidate> = Vec::new();
        for term in &terms {
            let candidates = match self.places.search_nearby(anchor, radius_meters, term).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::warn!(
                        term = %term,
                        error = %e,
                        "nearby search failed; term contributes no candidates"
                    );
                    continue;
                }
            };
            if candidates.is_empty() {
                tracing::debug!(term = %term, "no candidates for term");
                continue;
            }
            pool.extend(sample(rng, &candidates, self.picks_per_term));
        }

        // Repeated terms must not surface the same restaurant twice.
        let mut seen: HashSet<String> = HashSet::new();
        pool.retain(|candidate| seen.insert(candidate.external_id.clone()));

        if pool.is_empty() {
            tracing::info!("no candidates across all cuisine terms");
            return SearchOutcome::Empty(EmptyReason::NoCandidates);
        }

        // Enriching: one pass over the whole pool.
        let budget = match filters.budget {
            BudgetPreference::Tier(tier) => Some(tier),
            BudgetPreference::Any => PriceTier::ALL.choose(rng).copied(),
        };
        let picks = self
            .enrich
            .enrich(&pool, &filters.dietary, budget, filters.min_rating)
            .await;

        if picks.is_empty() {
            tracing::info!(pool = pool.len(), "enrichment dropped every candidate");
            return SearchOutcome::Empty(EmptyReason::NoQualifyingResults);
        }

        tracing::debug!(picks = picks.len(), "search ready");
        SearchOutcome::Ready(SearchResult { anchor, picks })
    }
}
