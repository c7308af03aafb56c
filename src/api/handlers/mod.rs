// HTTP handlers over the StorageService façade

pub mod lineups;
pub mod teams;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
