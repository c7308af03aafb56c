use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::{StorageError, StorageResult};

/// Team aggregate root
///
/// Represents a roster team for one season and age group.
/// Enforces all business rules related to team records.
///
/// # Invariants
/// - Name cannot be empty (after trimming)
/// - `updated_at` never decreases; it is bumped on every mutation
///
/// # Example
/// ```
/// use lineupboard_api::domain::team::Team;
///
/// let team = Team::new(
///     "Thunderbolts".to_string(),
///     "U12".to_string(),
///     "2026 Spring".to_string(),
/// ).expect("valid team");
///
/// assert_eq!(team.name(), "Thunderbolts");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    id: Uuid,
    name: String,
    age_group: String,
    season: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - Display name (cannot be empty)
    /// * `age_group` - Free-form classification, e.g. "U12"
    /// * `season` - Free-form classification, e.g. "2026 Spring"
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a freshly generated id
    /// * `Err(StorageError::Validation)` - If the name is empty
    pub fn new(name: String, age_group: String, season: String) -> StorageResult<Self> {
        if name.trim().is_empty() {
            return Err(StorageError::validation("Team name cannot be empty"));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            age_group,
            season,
            created_at: now,
            updated_at: now,
        })
    }

    /// Renames the team
    ///
    /// # Returns
    /// * `Err(StorageError::Validation)` - If the new name is empty
    pub fn rename(&mut self, name: String) -> StorageResult<()> {
        if name.trim().is_empty() {
            return Err(StorageError::validation("Team name cannot be empty"));
        }
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Updates the age group classification
    pub fn set_age_group(&mut self, age_group: String) {
        self.age_group = age_group;
        self.touch();
    }

    /// Updates the season classification
    pub fn set_season(&mut self, season: String) {
        self.season = season;
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

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age group classification
    pub fn age_group(&self) -> &str {
        &self.age_group
    }

    /// Returns the season classification
    pub fn season(&self) -> &str {
        &self.season
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-mutation timestamp
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored. Also the path by which a caller
    /// supplies an explicit id instead of generating one.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        age_group: String,
        season: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            age_group,
            season,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_team_with_valid_name() {
        let result = Team::new(
            "Test Team".to_string(),
            "U10".to_string(),
            "2026 Fall".to_string(),
        );

        assert!(result.is_ok());
        let team = result.unwrap();

        assert_eq!(team.name(), "Test Team");
        assert_eq!(team.age_group(), "U10");
        assert_eq!(team.season(), "2026 Fall");
        assert_eq!(team.created_at(), team.updated_at());
    }

    #[test]
    fn create_team_with_empty_name_fails() {
        let result = Team::new("".to_string(), "U10".to_string(), "2026".to_string());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn create_team_with_whitespace_name_fails() {
        let result = Team::new("   ".to_string(), "U10".to_string(), "2026".to_string());

        assert!(result.is_err());
    }

    #[test]
    fn rename_bumps_updated_at() {
        let mut team = Team::new(
            "Before".to_string(),
            "U10".to_string(),
            "2026".to_string(),
        )
        .unwrap();
        let created = team.created_at();

        team.rename("After".to_string()).unwrap();

        assert_eq!(team.name(), "After");
        assert!(team.updated_at() >= created);
        assert_eq!(team.created_at(), created);
    }

    #[test]
    fn rename_to_empty_fails_and_keeps_name() {
        let mut team = Team::new(
            "Keeper".to_string(),
            "U10".to_string(),
            "2026".to_string(),
        )
        .unwrap();

        assert!(team.rename("".to_string()).is_err());
        assert_eq!(team.name(), "Keeper");
    }

    #[test]
    fn from_persistence_keeps_explicit_id() {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let team = Team::from_persistence(
            id,
            "Restored".to_string(),
            "U14".to_string(),
            "2025 Fall".to_string(),
            now,
            now,
        );

        assert_eq!(team.id(), id);
        assert_eq!(team.name(), "Restored");
    }
}
