//! JSON codec between domain aggregates and stored string values
//!
//! Keeps the stored document shape (camelCase JSON) out of the repository
//! logic. Decode failures are tagged `StorageError::Decode`; enumeration
//! callers degrade them to "absent" and report them via tracing.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::lineup::{Lineup, PositionAssignment};
use crate::domain::team::Team;

/// Encodes a record for storage under `key`
pub fn encode<T: Serialize>(key: &str, record: &T) -> StorageResult<String> {
    serde_json::to_string(record).map_err(|source| StorageError::Decode {
        key: key.to_string(),
        source,
    })
}

/// Decodes the raw value stored under `key`
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> StorageResult<T> {
    serde_json::from_str(raw).map_err(|source| StorageError::Decode {
        key: key.to_string(),
        source,
    })
}

/// Stored shape of a Team record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: Uuid,
    pub name: String,
    pub age_group: String,
    pub season: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Team> for TeamRecord {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            age_group: team.age_group().to_string(),
            season: team.season().to_string(),
            created_at: team.created_at(),
            updated_at: team.updated_at(),
        }
    }
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team::from_persistence(
            record.id,
            record.name,
            record.age_group,
            record.season,
            record.created_at,
            record.updated_at,
        )
    }
}

/// Stored shape of a Lineup record
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineupRecord {
    pub id: Uuid,
    pub team_id: Uuid,
    pub name: String,
    pub positions: Vec<PositionAssignment>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Lineup> for LineupRecord {
    fn from(lineup: &Lineup) -> Self {
        Self {
            id: lineup.id(),
            team_id: lineup.team_id(),
            name: lineup.name().to_string(),
            positions: lineup.positions().to_vec(),
            is_default: lineup.is_default(),
            created_at: lineup.created_at(),
            updated_at: lineup.updated_at(),
        }
    }
}

impl From<LineupRecord> for Lineup {
    fn from(record: LineupRecord) -> Self {
        Lineup::from_persistence(
            record.id,
            record.team_id,
            record.name,
            record.positions,
            record.is_default,
            record.created_at,
            record.updated_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_record_round_trips_through_json() {
        let team = Team::new(
            "Codec Team".to_string(),
            "U12".to_string(),
            "2026 Spring".to_string(),
        )
        .unwrap();

        let raw = encode("team:x", &TeamRecord::from(&team)).unwrap();
        let decoded: Team = decode::<TeamRecord>("team:x", &raw).unwrap().into();

        assert_eq!(decoded, team);
    }

    #[test]
    fn lineup_record_round_trips_through_json() {
        let lineup = Lineup::new(
            Uuid::new_v4(),
            "Codec Lineup".to_string(),
            vec![PositionAssignment::new("GK", "player-1")],
        )
        .unwrap();

        let raw = encode("lineup:x", &LineupRecord::from(&lineup)).unwrap();
        let decoded: Lineup = decode::<LineupRecord>("lineup:x", &raw).unwrap().into();

        assert_eq!(decoded, lineup);
    }

    #[test]
    fn stored_shape_uses_camel_case_fields() {
        let team = Team::new(
            "Shape".to_string(),
            "U8".to_string(),
            "2026".to_string(),
        )
        .unwrap();

        let raw = encode("team:x", &TeamRecord::from(&team)).unwrap();

        assert!(raw.contains("\"ageGroup\""));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"updatedAt\""));
    }

    #[test]
    fn corrupted_value_is_a_decode_error() {
        let err = decode::<TeamRecord>("team:x", "{not json").unwrap_err();

        assert!(err.is_decode());
        // Wording is direction-neutral; the variant also tags encode failures
        assert!(err.to_string().contains("codec error at key 'team:x'"));
    }

    #[test]
    fn schema_mismatch_is_a_decode_error() {
        let result = decode::<TeamRecord>("team:x", "{\"id\": 42}");

        assert!(matches!(result, Err(e) if e.is_decode()));
    }
}
