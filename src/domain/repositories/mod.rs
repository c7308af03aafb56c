// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod lineup_repository;
pub mod team_repository;

pub use lineup_repository::LineupRepository;
pub use team_repository::TeamRepository;
