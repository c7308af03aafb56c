use uuid::Uuid;

use crate::domain::errors::StorageResult;
use crate::domain::lineup::Lineup;

/// Repository trait for the Lineup aggregate
///
/// Owns the at-most-one-default-per-team invariant. The invariant is enforced
/// at the `set_default` boundary: saving a non-default lineup is always legal,
/// promotion to default is the guarded transition.
pub trait LineupRepository: Send + Sync {
    /// Save a lineup (insert or update by id)
    ///
    /// Fails with `InvalidReference` when the lineup's team does not exist.
    fn save(&self, lineup: &Lineup) -> StorageResult<()>;

    /// Find a lineup by its ID; a corrupted stored record reads as absent
    fn find_by_id(&self, id: Uuid) -> StorageResult<Option<Lineup>>;

    /// All lineups for a team in insertion order
    ///
    /// Returns empty when the team does not exist: lineups orphaned by a
    /// missing team are excluded, never removed here.
    fn load_for_team(&self, team_id: Uuid) -> StorageResult<Vec<Lineup>>;

    /// Make `lineup_id` the team's single default lineup
    ///
    /// Clears the flag on every other lineup currently marked default before
    /// setting the target, so a retry after a partial prior failure converges
    /// to exactly one default. Fails with `NotFound` when the lineup is not
    /// among the team's lineups.
    fn set_default(&self, team_id: Uuid, lineup_id: Uuid) -> StorageResult<()>;

    /// Delete a lineup by ID. Idempotent; deleting the default leaves the
    /// team with no default.
    fn delete(&self, id: Uuid) -> StorageResult<()>;

    /// Delete every lineup belonging to a team
    ///
    /// Cascade entry point used by team deletion.
    fn delete_all_for_team(&self, team_id: Uuid) -> StorageResult<()>;
}
