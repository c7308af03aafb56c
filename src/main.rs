use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use lineupboard_api::api::handlers::{health_check, lineups, teams};
use lineupboard_api::infrastructure::keyvalue::FileKeyValueStore;
use lineupboard_api::storage::StorageService;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    // Get data directory
    let data_dir = std::env::var("LINEUPBOARD_DATA_DIR").unwrap_or_else(|_| {
        tracing::warn!("LINEUPBOARD_DATA_DIR not set, using default");
        "./data".to_string()
    });

    // Open the store
    tracing::info!(data_dir, "Opening key-value store...");
    let store = FileKeyValueStore::new(&data_dir).expect("Failed to open key-value store");
    let service = Arc::new(StorageService::new(Arc::new(store)));

    tracing::info!("Store opened successfully");

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team))
        .route("/api/teams", get(teams::get_teams))
        .route("/api/teams/current", get(teams::get_current_team))
        .route("/api/teams/current", put(teams::set_current_team))
        .route("/api/teams/:id", get(teams::get_team))
        .route("/api/teams/:id", put(teams::update_team))
        .route("/api/teams/:id", delete(teams::delete_team))
        // Lineup routes
        .route("/api/teams/:team_id/lineups", get(lineups::get_lineups))
        .route("/api/teams/:team_id/lineups", post(lineups::create_lineup))
        .route(
            "/api/teams/:team_id/lineups/:lineup_id/default",
            put(lineups::set_default_lineup),
        )
        .route("/api/lineups/:id", put(lineups::update_lineup))
        .route("/api/lineups/:id", delete(lineups::delete_lineup))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(service);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
