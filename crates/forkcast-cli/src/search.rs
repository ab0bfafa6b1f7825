//! The `search` command: one full discovery run printed to stdout.

use std::process::ExitCode;

use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use forkcast_core::{
    AppConfig, BudgetPreference, CuisineSelection, PriceTier, Radius, SearchFilters,
};
use forkcast_enrich::EnrichClient;
use forkcast_places::PlacesClient;
use forkcast_search::{SearchOutcome, SearchPipeline};

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Street address or ZIP code to search around.
    #[arg(long)]
    pub address: String,

    /// Search radius, in the unit given by --unit.
    #[arg(long, default_value_t = 1000.0)]
    pub radius: f64,

    /// Unit of --radius.
    #[arg(long, value_enum, default_value_t = RadiusUnit::Feet)]
    pub unit: RadiusUnit,

    /// Cuisine to search for. Repeatable; none means the picks surprise you.
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,

    /// Dietary restriction to filter on, e.g. vegan. Repeatable.
    #[arg(long = "dietary")]
    pub dietary: Vec<String>,

    /// Budget tier from 1 ($) to 4 ($$$$); omit for any.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub budget: Option<u8>,

    /// Lowest acceptable rating, 1.0 to 5.0.
    #[arg(long, default_value_t = 1.0)]
    pub min_rating: f64,

    /// Seed for the random draws; omit for OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the outcome as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RadiusUnit {
    Feet,
    Miles,
}

/// Runs one search and prints the outcome.
///
/// Exit code 0 covers every completed run, including one that found
/// nothing; 1 means the run never got past its inputs (bad filters or an
/// address the geocoder does not know).
///
/// # Errors
///
/// Returns an error if configuration is missing or either directory client
/// cannot be constructed. Directory failures during the run itself are
/// folded into the outcome instead.
pub(crate) async fn run_search(args: SearchArgs) -> anyhow::Result<ExitCode> {
    let config = forkcast_core::load_app_config()?;
    let pipeline = build_pipeline(&config)?;

    let filters = SearchFilters {
        address: args.address,
        radius: match args.unit {
            RadiusUnit::Feet => Radius::Feet(args.radius),
            RadiusUnit::Miles => Radius::Miles(args.radius),
        },
        cuisines: CuisineSelection::from_terms(args.cuisines),
        dietary: args.dietary.into_iter().collect(),
        budget: args
            .budget
            .and_then(PriceTier::from_level)
            .map_or(BudgetPreference::Any, BudgetPreference::Tier),
        min_rating: args.min_rating,
    };

    let outcome = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            pipeline.run_with_rng(&filters, &mut rng).await
        }
        None => pipeline.run(&filters).await,
    };

    if args.json {
        print_json(&outcome)?;
    } else {
        print_text(&outcome);
    }

    Ok(match outcome {
        SearchOutcome::Ready(_) | SearchOutcome::Empty(_) => ExitCode::SUCCESS,
        SearchOutcome::Failed(_) => ExitCode::FAILURE,
    })
}

fn build_pipeline(config: &AppConfig) -> anyhow::Result<SearchPipeline> {
    let places = match config.places_base_url.as_deref() {
        Some(base) => PlacesClient::with_base_url(
            &config.places_api_key,
            config.http_timeout_secs,
            &config.user_agent,
            base,
        ),
        None => PlacesClient::new(
            &config.places_api_key,
            config.http_timeout_secs,
            &config.user_agent,
        ),
    }
    .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;

    let enrich = match config.enrich_base_url.as_deref() {
        Some(base) => EnrichClient::with_base_url(
            &config.enrich_api_key,
            config.http_timeout_secs,
            &config.user_agent,
            base,
        ),
        None => EnrichClient::new(
            &config.enrich_api_key,
            config.http_timeout_secs,
            &config.user_agent,
        ),
    }
    .map_err(|e| anyhow::anyhow!("failed to build enrichment client: {e}"))?;

    Ok(SearchPipeline::new(places, enrich))
}

fn print_text(outcome: &SearchOutcome) {
    println!("{}", outcome.user_message());

    let SearchOutcome::Ready(result) = outcome else {
        return;
    };
    for pick in &result.picks {
        println!();
        println!("{}", pick.name);
        println!("  rating:     {:.1}", pick.rating);
        if let Some(tier) = pick.price_tier {
            println!("  price:      {}", tier.symbol());
        }
        if !pick.categories.is_empty() {
            println!("  categories: {}", pick.categories.join(", "));
        }
        if !pick.vicinity.is_empty() {
            println!("  address:    {}", pick.vicinity);
        }
        if !pick.phone.is_empty() {
            println!("  phone:      {}", pick.phone);
        }
        println!("  directions: {}", pick.directions_url());
    }
}

fn print_json(outcome: &SearchOutcome) -> anyhow::Result<()> {
    let body = match outcome {
        SearchOutcome::Ready(result) => {
            let picks: Vec<serde_json::Value> = result
                .picks
                .iter()
                .map(|pick| {
                    serde_json::json!({
                        "external_id": pick.external_id,
                        "name": pick.name,
                        "rating": pick.rating,
                        "price": pick.price_tier.map(PriceTier::symbol),
                        "phone": pick.phone,
                        "categories": pick.categories,
                        "address": pick.vicinity,
                        "image_url": pick.image_url,
                        "directions_url": pick.directions_url(),
                    })
                })
                .collect();
            serde_json::json!({
                "status": "ready",
                "message": outcome.user_message(),
                "anchor": result.anchor,
                "picks": picks,
            })
        }
        SearchOutcome::Empty(_) => serde_json::json!({
            "status": "empty",
            "message": outcome.user_message(),
            "picks": [],
        }),
        SearchOutcome::Failed(_) => serde_json::json!({
            "status": "failed",
            "message": outcome.user_message(),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
