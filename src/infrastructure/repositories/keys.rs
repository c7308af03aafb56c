//! Key layout shared by the repository adapters
//!
//! ```text
//! team:<uuid>          Team record
//! team:index           insertion-ordered list of team ids
//! team:current         current-team pointer (bare uuid)
//! lineup:<uuid>        Lineup record
//! lineup-index:<uuid>  insertion-ordered list of lineup ids, per team
//! ```

use uuid::Uuid;

pub const TEAM_INDEX: &str = "team:index";
pub const CURRENT_TEAM: &str = "team:current";
pub const TEAM_PREFIX: &str = "team:";
pub const LINEUP_PREFIX: &str = "lineup:";

pub fn team(id: Uuid) -> String {
    format!("{TEAM_PREFIX}{id}")
}

pub fn lineup(id: Uuid) -> String {
    format!("{LINEUP_PREFIX}{id}")
}

pub fn lineup_index(team_id: Uuid) -> String {
    format!("lineup-index:{team_id}")
}
