use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::lineup::{Lineup, PositionAssignment};
use crate::storage::StorageService;

/// Request body for creating or updating a lineup
#[derive(Debug, Deserialize)]
pub struct LineupRequest {
    pub name: String,
    #[serde(default)]
    pub positions: Vec<PositionAssignment>,
}

/// Response shape for a lineup
#[derive(Debug, Serialize)]
pub struct LineupResponse {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub positions: Vec<PositionAssignment>,
    pub is_default: bool,
}

impl From<&Lineup> for LineupResponse {
    fn from(lineup: &Lineup) -> Self {
        Self {
            id: lineup.id(),
            team_id: lineup.team_id(),
            name: lineup.name().to_string(),
            positions: lineup.positions().to_vec(),
            is_default: lineup.is_default(),
        }
    }
}

/// Get all lineups for a team in insertion order
///
/// GET /api/teams/:team_id/lineups
pub async fn get_lineups(
    State(service): State<Arc<StorageService>>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<LineupResponse>>, ApiError> {
    let lineups = service.lineups().load_for_team(team_id)?;
    Ok(Json(lineups.iter().map(LineupResponse::from).collect()))
}

/// Create a new lineup under a team
///
/// POST /api/teams/:team_id/lineups
pub async fn create_lineup(
    State(service): State<Arc<StorageService>>,
    Path(team_id): Path<Uuid>,
    Json(req): Json<LineupRequest>,
) -> Result<(StatusCode, Json<LineupResponse>), ApiError> {
    let lineup = Lineup::new(team_id, req.name, req.positions)?;
    service.lineups().save(&lineup)?;

    Ok((StatusCode::CREATED, Json(LineupResponse::from(&lineup))))
}

/// Update a lineup (full-record save; the default flag is untouched)
///
/// PUT /api/lineups/:id
pub async fn update_lineup(
    State(service): State<Arc<StorageService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<LineupRequest>,
) -> Result<Json<LineupResponse>, ApiError> {
    let mut lineup = service
        .lineups()
        .find_by_id(id)?
        .ok_or_else(|| ApiError::not_found(format!("Lineup not found: {}", id)))?;

    lineup.rename(req.name)?;
    lineup.set_positions(req.positions)?;
    service.lineups().save(&lineup)?;

    Ok(Json(LineupResponse::from(&lineup)))
}

/// Make a lineup its team's single default
///
/// PUT /api/teams/:team_id/lineups/:lineup_id/default
pub async fn set_default_lineup(
    State(service): State<Arc<StorageService>>,
    Path((team_id, lineup_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    service.lineups().set_default(team_id, lineup_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a lineup
///
/// DELETE /api/lineups/:id
pub async fn delete_lineup(
    State(service): State<Arc<StorageService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service.lineups().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
