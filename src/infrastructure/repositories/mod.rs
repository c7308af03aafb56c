// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces on the key-value store

pub mod keys;
pub mod kv_lineup_repository;
pub mod kv_team_repository;

mod index;

pub use kv_lineup_repository::KvLineupRepository;
pub use kv_team_repository::KvTeamRepository;
