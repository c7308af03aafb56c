//! StorageService façade
//!
//! Single entry point the upper layers use; callers never address the
//! repositories or the codec directly.

use std::sync::Arc;

use crate::domain::repositories::{LineupRepository, TeamRepository};
use crate::infrastructure::keyvalue::{KeyValueStore, MemoryKeyValueStore};
use crate::infrastructure::repositories::{KvLineupRepository, KvTeamRepository};

/// Composes the team and lineup repositories over one shared store
///
/// Adds no state or invariants of its own. The team repository is handed the
/// lineup repository so deleting a team cascades to its lineups.
pub struct StorageService {
    teams: Arc<KvTeamRepository>,
    lineups: Arc<KvLineupRepository>,
}

impl StorageService {
    /// Wires both repositories over `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let lineups = Arc::new(KvLineupRepository::new(store.clone()));
        let teams = Arc::new(KvTeamRepository::new(store, lineups.clone()));
        Self { teams, lineups }
    }

    /// An ephemeral service over an in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()))
    }

    /// Team operations
    pub fn teams(&self) -> &dyn TeamRepository {
        self.teams.as_ref()
    }

    /// Lineup operations
    pub fn lineups(&self) -> &dyn LineupRepository {
        self.lineups.as_ref()
    }
}
