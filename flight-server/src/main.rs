use std::net::SocketAddr;

use flight_server::data::{DataLoader, FileDataLoader};
use flight_server::graph::SearchConfig;
use flight_server::planner::Planner;
use flight_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Dataset locations and the optional client api key come from the
    // environment
    let airports_path = std::env::var("PLANNER_AIRPORTS_FILE")
        .unwrap_or_else(|_| "data/airports.json".to_string());
    let schedule_path = std::env::var("PLANNER_SCHEDULE_FILE")
        .unwrap_or_else(|_| "data/schedule.json".to_string());
    let api_key = std::env::var("PLANNER_CLIENT_API_KEY").ok();
    if api_key.is_none() {
        info!("PLANNER_CLIENT_API_KEY not set; api-key filter disabled");
    }

    // Load the dataset and build the graph before accepting any traffic
    let loader = FileDataLoader::new(&airports_path, &schedule_path);
    let data = loader.load().expect("failed to load planner dataset");

    let planner = Planner::new(data, SearchConfig::default());
    let state = AppState::new(planner, api_key);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("flight route planner listening on http://{addr}");
    info!("  GET /health                  - health check");
    info!("  GET /api/v1/routes/plan      - plan a route (start, destination, k)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
