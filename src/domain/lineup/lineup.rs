use chrono::{DateTime, Utc};
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::lineup::value_objects::PositionAssignment;

/// Lineup aggregate root
///
/// An ordered set of position assignments belonging to one team. New lineups
/// are never default; promotion to default is a guarded transition owned by
/// the lineup repository, which keeps at most one default per team.
///
/// # Invariants
/// - Name cannot be empty (after trimming)
/// - Position slots are unique within one lineup
/// - `updated_at` never decreases
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    id: Uuid,
    team_id: Uuid,
    name: String,
    positions: Vec<PositionAssignment>,
    is_default: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Lineup {
    /// Creates a new Lineup aggregate
    ///
    /// # Arguments
    /// * `team_id` - The owning team; existence is checked at save time
    /// * `name` - Display name (cannot be empty)
    /// * `positions` - Ordered slot assignments (slots must be unique)
    ///
    /// # Returns
    /// * `Ok(Lineup)` - New non-default lineup with a freshly generated id
    /// * `Err(StorageError::Validation)` - If the name is empty or a slot repeats
    pub fn new(
        team_id: Uuid,
        name: String,
        positions: Vec<PositionAssignment>,
    ) -> StorageResult<Self> {
        if name.trim().is_empty() {
            return Err(StorageError::validation("Lineup name cannot be empty"));
        }
        Self::validate_slots(&positions)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            team_id,
            name,
            positions,
            is_default: false,
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_slots(positions: &[PositionAssignment]) -> StorageResult<()> {
        let mut seen = HashSet::new();
        for assignment in positions {
            if !seen.insert(assignment.slot.as_str()) {
                return Err(StorageError::validation(format!(
                    "Duplicate position slot: {}",
                    assignment.slot
                )));
            }
        }
        Ok(())
    }

    /// Renames the lineup
    ///
    /// # Returns
    /// * `Err(StorageError::Validation)` - If the new name is empty
    pub fn rename(&mut self, name: String) -> StorageResult<()> {
        if name.trim().is_empty() {
            return Err(StorageError::validation("Lineup name cannot be empty"));
        }
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replaces the position assignments
    ///
    /// # Returns
    /// * `Err(StorageError::Validation)` - If a slot repeats
    pub fn set_positions(&mut self, positions: Vec<PositionAssignment>) -> StorageResult<()> {
        Self::validate_slots(&positions)?;
        self.positions = positions;
        self.touch();
        Ok(())
    }

    /// Marks this lineup as its team's default
    ///
    /// # Note
    /// Only to be used by repository implementations; the single-default
    /// invariant is enforced there, not here.
    pub fn mark_default(&mut self) {
        self.is_default = true;
        self.touch();
    }

    /// Clears the default flag
    ///
    /// # Note
    /// Only to be used by repository implementations.
    pub fn clear_default(&mut self) {
        self.is_default = false;
        self.touch();
    }

    /// Bumps `updated_at`. The logical clock never runs backwards even if the
    /// wall clock does.
    fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    // ===== Getters =====

    /// Returns the lineup's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the owning team's ID
    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    /// Returns the lineup's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ordered position assignments
    pub fn positions(&self) -> &[PositionAssignment] {
        &self.positions
    }

    /// Returns whether this lineup is its team's default
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-mutation timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Lineup from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        team_id: Uuid,
        name: String,
        positions: Vec<PositionAssignment>,
        is_default: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            team_id,
            name,
            positions,
            is_default,
            created_at,
            updated_at,
        }
    }
}
