use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::team::Team;
use crate::storage::StorageService;

/// Request body for creating or updating a team
#[derive(Debug, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    pub age_group: String,
    pub season: String,
}

/// Response shape for a team
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub age_group: String,
    pub season: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            age_group: team.age_group().to_string(),
            season: team.season().to_string(),
        }
    }
}

/// Response shape for the current-team pointer
#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentTeamResponse {
    pub team_id: Option<Uuid>,
}

/// Request body for setting the current team
#[derive(Debug, Deserialize)]
pub struct SetCurrentTeamRequest {
    pub team_id: Uuid,
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(service): State<Arc<StorageService>>,
    Json(req): Json<TeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = Team::new(req.name, req.age_group, req.season)?;
    service.teams().save(&team)?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// Get all teams in insertion order
///
/// GET /api/teams
pub async fn get_teams(
    State(service): State<Arc<StorageService>>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = service.teams().find_all()?;
    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(service): State<Arc<StorageService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = service
        .teams()
        .find_by_id(id)?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Update a team (full-record save)
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(service): State<Arc<StorageService>>,
    Path(id): Path<Uuid>,
    Json(req): Json<TeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut team = service
        .teams()
        .find_by_id(id)?
        .ok_or_else(|| ApiError::not_found(format!("Team not found: {}", id)))?;

    team.rename(req.name)?;
    team.set_age_group(req.age_group);
    team.set_season(req.season);
    service.teams().save(&team)?;

    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team, cascading to its lineups
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(service): State<Arc<StorageService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    service.teams().delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently selected team, if any
///
/// GET /api/teams/current
pub async fn get_current_team(
    State(service): State<Arc<StorageService>>,
) -> Result<Json<CurrentTeamResponse>, ApiError> {
    let team_id = service.teams().current_id()?;
    Ok(Json(CurrentTeamResponse { team_id }))
}

/// Point the current-team selection at an existing team
///
/// PUT /api/teams/current
pub async fn set_current_team(
    State(service): State<Arc<StorageService>>,
    Json(req): Json<SetCurrentTeamRequest>,
) -> Result<StatusCode, ApiError> {
    service.teams().set_current(req.team_id)?;
    Ok(StatusCode::NO_CONTENT)
}
