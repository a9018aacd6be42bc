use chrono::Local;
use rumbo_app::{AppContext, Config, Route};
use rumbo_search::{SearchParams, SearchState};
use rumbo_session::MemoryCredentialStore;
use rumbo_shared::DisplayFlight;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Developer console for the client core: restores a session, pulls the
/// featured flights and runs one search, printing what a results page
/// would render.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rumbo_app=debug,rumbo_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(base_url = %config.api.base_url, "Starting rumbo console");

    let context = AppContext::init(config, Arc::new(MemoryCredentialStore::new()))?;

    match context.api.featured_flights().await {
        Ok(featured) => {
            tracing::info!(count = featured.len(), "Featured flights loaded");
            for flight in &featured {
                let display = DisplayFlight::present(flight, 1);
                tracing::info!(
                    airline = %flight.airline,
                    route = %format!("{} -> {}", flight.origin, flight.destination),
                    duration = %display.duration,
                    price = display.total_price,
                );
            }
        }
        Err(e) => tracing::warn!("Could not load featured flights: {}", e),
    }

    let today = Local::now().date_naive();
    let mut search = SearchState::with_params(SearchParams::defaults(today));
    let submit = search.apply_search(SearchParams::defaults(today));
    tracing::info!(route = Route::Flights.path(), query = %submit.query, "Running default search");

    match context.api.list_flights().await {
        Ok(flights) => {
            search.accept_results(submit.generation, flights);
            let visible = search.visible_flights();
            tracing::info!(count = visible.len(), "Flights matching today's search");
        }
        Err(e) => tracing::warn!("Search fetch failed: {}", e),
    }

    context.teardown();
    Ok(())
}
