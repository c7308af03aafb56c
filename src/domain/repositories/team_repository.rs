use uuid::Uuid;

use crate::domain::errors::StorageResult;
use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams and for the
/// store-wide "currently selected team" pointer. All operations are
/// synchronous: the backing medium is local, and every call either completes
/// or fails without blocking.
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update by id)
    fn save(&self, team: &Team) -> StorageResult<()>;

    /// Find a team by its ID; a corrupted stored record reads as absent
    fn find_by_id(&self, id: Uuid) -> StorageResult<Option<Team>>;

    /// All stored teams in insertion order, skipping corrupted records
    fn find_all(&self) -> StorageResult<Vec<Team>>;

    /// Delete a team by ID, cascading to its lineups and clearing the
    /// current-team pointer if it referenced the team. Idempotent.
    fn delete(&self, id: Uuid) -> StorageResult<()>;

    /// Point the current-team pointer at an existing team
    ///
    /// Fails with `NotFound` (leaving the previous pointer untouched) when
    /// the id does not resolve to a stored team.
    fn set_current(&self, id: Uuid) -> StorageResult<()>;

    /// The current-team pointer, if set
    fn current_id(&self) -> StorageResult<Option<Uuid>>;
}
