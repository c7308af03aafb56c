use std::sync::Arc;
use uuid::Uuid;

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::lineup::Lineup;
use crate::domain::repositories::LineupRepository;
use crate::infrastructure::codec::{self, LineupRecord, TeamRecord};
use crate::infrastructure::keyvalue::KeyValueStore;
use crate::infrastructure::repositories::{index, keys};

/// Key-value implementation of LineupRepository
///
/// Stores each lineup under `lineup:<id>` plus an insertion-ordered per-team
/// index. The substrate offers no cross-key atomicity, so `set_default` is a
/// sweep that clears every stale default flag before setting the new one: an
/// interrupted run leaves at most a missing default, and a retry converges.
pub struct KvLineupRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvLineupRepository {
    /// Creates a new KvLineupRepository over a shared store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn team_exists(&self, team_id: Uuid) -> StorageResult<bool> {
        let key = keys::team(team_id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(false);
        };
        // A corrupted team record reads as absent everywhere, including as
        // the referent of a lineup
        Ok(codec::decode::<TeamRecord>(&key, &raw).is_ok())
    }

    /// Reads one lineup record, degrading a corrupted value to absent
    fn read_lineup(&self, id: Uuid) -> StorageResult<Option<Lineup>> {
        let key = keys::lineup(id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };
        match codec::decode::<LineupRecord>(&key, &raw) {
            Ok(record) => Ok(Some(record.into())),
            Err(e) => {
                tracing::warn!(key, error = %e, "skipping corrupted lineup record");
                Ok(None)
            }
        }
    }

    /// Writes the record only; index and referential checks already done
    fn write_lineup(&self, lineup: &Lineup) -> StorageResult<()> {
        let key = keys::lineup(lineup.id());
        let raw = codec::encode(&key, &LineupRecord::from(lineup))?;
        self.store.set(&key, &raw)
    }
}

impl LineupRepository for KvLineupRepository {
    fn save(&self, lineup: &Lineup) -> StorageResult<()> {
        if lineup.name().trim().is_empty() {
            return Err(StorageError::validation("Lineup name cannot be empty"));
        }
        if !self.team_exists(lineup.team_id())? {
            return Err(StorageError::InvalidReference {
                team_id: lineup.team_id(),
            });
        }

        self.write_lineup(lineup)?;
        index::append(
            self.store.as_ref(),
            &keys::lineup_index(lineup.team_id()),
            lineup.id(),
        )
    }

    fn find_by_id(&self, id: Uuid) -> StorageResult<Option<Lineup>> {
        self.read_lineup(id)
    }

    fn load_for_team(&self, team_id: Uuid) -> StorageResult<Vec<Lineup>> {
        // A missing team means every indexed lineup is orphaned; orphans are
        // excluded from reads but only a deliberate cascade removes them.
        if !self.team_exists(team_id)? {
            return Ok(Vec::new());
        }

        let ids = index::read(self.store.as_ref(), &keys::lineup_index(team_id))?;
        let mut lineups = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(lineup) = self.read_lineup(id)? {
                // A re-homed lineup may linger in the old team's index
                if lineup.team_id() == team_id {
                    lineups.push(lineup);
                }
            }
        }
        Ok(lineups)
    }

    fn set_default(&self, team_id: Uuid, lineup_id: Uuid) -> StorageResult<()> {
        let lineups = self.load_for_team(team_id)?;

        let mut target = lineups
            .iter()
            .find(|l| l.id() == lineup_id)
            .cloned()
            .ok_or(StorageError::NotFound {
                entity: "lineup",
                id: lineup_id,
            })?;

        // Clear every other default first. A prior partial failure can leave
        // several; sweeping all of them makes a retry converge to exactly one.
        for lineup in lineups {
            if lineup.id() != lineup_id && lineup.is_default() {
                let mut demoted = lineup;
                demoted.clear_default();
                self.write_lineup(&demoted)?;
            }
        }

        target.mark_default();
        self.write_lineup(&target)
    }

    fn delete(&self, id: Uuid) -> StorageResult<()> {
        let key = keys::lineup(id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(());
        };

        // Decode before removal to learn which team's index to update; a
        // corrupted record still gets its key removed.
        let team_id = codec::decode::<LineupRecord>(&key, &raw)
            .map(|record| record.team_id)
            .ok();

        self.store.remove(&key)?;
        if let Some(team_id) = team_id {
            index::remove(self.store.as_ref(), &keys::lineup_index(team_id), id)?;
        }
        Ok(())
    }

    fn delete_all_for_team(&self, team_id: Uuid) -> StorageResult<()> {
        let index_key = keys::lineup_index(team_id);
        for id in index::read(self.store.as_ref(), &index_key)? {
            self.store.remove(&keys::lineup(id))?;
        }
        self.store.remove(&index_key)?;

        // Sweep for stray records referencing the team but missing from the
        // index (e.g. an interrupted save from another process).
        for key in self.store.list_keys(keys::LINEUP_PREFIX)? {
            let Some(raw) = self.store.get(&key)? else {
                continue;
            };
            if let Ok(record) = codec::decode::<LineupRecord>(&key, &raw) {
                if record.team_id == team_id {
                    self.store.remove(&key)?;
                }
            }
        }
        Ok(())
    }
}
