use route_server::settings::Settings;
use route_server::store::DepartureStore;
use route_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env()?;

    // Load seed departures, if any
    let store = match &settings.seed_file {
        Some(path) => {
            let store = DepartureStore::load_json(path).await?;
            info!(path = %path.display(), departures = store.len().await, "loaded seed departures");
            store
        }
        None => DepartureStore::new(),
    };

    let state = AppState::new(store, &settings.cache, settings.search.clone());
    let app = create_router(state);

    info!(addr = %settings.addr, "route planner listening");
    info!("  GET    /health             - Health check");
    info!("  POST   /departures         - Create a departure");
    info!("  GET    /departures/:id     - Fetch a departure");
    info!("  DELETE /departures/:id     - Delete a departure");
    info!("  POST   /departures/search  - Find the earliest-arriving route");

    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
