use serde::{Deserialize, Serialize};

/// One field-position slot filled by one player
///
/// Slots are unique within a lineup; the surrounding `Vec` order is display
/// order and carries no further meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionAssignment {
    /// Field-position slot, e.g. "GK", "LB", "ST"
    pub slot: String,
    /// Opaque reference to the assigned player
    pub player_id: String,
}

impl PositionAssignment {
    /// Creates a new position assignment
    pub fn new(slot: impl Into<String>, player_id: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            player_id: player_id.into(),
        }
    }
}

impl std::fmt::Display for PositionAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.slot, self.player_id)
    }
}
