use std::sync::Arc;
use uuid::Uuid;

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::repositories::{LineupRepository, TeamRepository};
use crate::domain::team::Team;
use crate::infrastructure::codec::{self, TeamRecord};
use crate::infrastructure::keyvalue::KeyValueStore;
use crate::infrastructure::repositories::{index, keys};

/// Key-value implementation of TeamRepository
///
/// Stores each team under `team:<id>`, an insertion-ordered index under
/// `team:index`, and the current-team pointer under `team:current`. Deletes
/// cascade through the lineup repository and clear the pointer before the
/// record goes, so an interrupted delete never leaves the pointer dangling.
pub struct KvTeamRepository {
    store: Arc<dyn KeyValueStore>,
    lineups: Arc<dyn LineupRepository>,
}

impl KvTeamRepository {
    /// Creates a new KvTeamRepository
    ///
    /// # Arguments
    /// * `store` - Shared key-value substrate
    /// * `lineups` - Lineup repository over the same store, for the delete cascade
    pub fn new(store: Arc<dyn KeyValueStore>, lineups: Arc<dyn LineupRepository>) -> Self {
        Self { store, lineups }
    }

    /// Reads one team record, degrading a corrupted value to absent
    fn read_team(&self, id: Uuid) -> StorageResult<Option<Team>> {
        let key = keys::team(id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };
        match codec::decode::<TeamRecord>(&key, &raw) {
            Ok(record) => Ok(Some(record.into())),
            Err(e) => {
                tracing::warn!(key, error = %e, "skipping corrupted team record");
                Ok(None)
            }
        }
    }
}

impl TeamRepository for KvTeamRepository {
    fn save(&self, team: &Team) -> StorageResult<()> {
        if team.name().trim().is_empty() {
            return Err(StorageError::validation("Team name cannot be empty"));
        }

        let key = keys::team(team.id());
        let raw = codec::encode(&key, &TeamRecord::from(team))?;
        self.store.set(&key, &raw)?;
        index::append(self.store.as_ref(), keys::TEAM_INDEX, team.id())
    }

    fn find_by_id(&self, id: Uuid) -> StorageResult<Option<Team>> {
        self.read_team(id)
    }

    fn find_all(&self) -> StorageResult<Vec<Team>> {
        let ids = index::read(self.store.as_ref(), keys::TEAM_INDEX)?;
        let mut teams = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(team) = self.read_team(id)? {
                teams.push(team);
            }
        }
        Ok(teams)
    }

    fn delete(&self, id: Uuid) -> StorageResult<()> {
        self.lineups.delete_all_for_team(id)?;

        // Pointer goes before the record: an interrupted delete may strand a
        // team record (a re-delete converges) but never a dangling pointer.
        if self.current_id()? == Some(id) {
            self.store.remove(keys::CURRENT_TEAM)?;
        }

        index::remove(self.store.as_ref(), keys::TEAM_INDEX, id)?;
        self.store.remove(&keys::team(id))
    }

    fn set_current(&self, id: Uuid) -> StorageResult<()> {
        if self.store.get(&keys::team(id))?.is_none() {
            return Err(StorageError::NotFound {
                entity: "team",
                id,
            });
        }
        self.store.set(keys::CURRENT_TEAM, &id.to_string())
    }

    fn current_id(&self) -> StorageResult<Option<Uuid>> {
        let Some(raw) = self.store.get(keys::CURRENT_TEAM)? else {
            return Ok(None);
        };
        match Uuid::parse_str(raw.trim()) {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                tracing::warn!(key = keys::CURRENT_TEAM, error = %e, "unparseable current-team pointer");
                Ok(None)
            }
        }
    }
}
