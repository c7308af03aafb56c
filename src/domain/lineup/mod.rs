// Lineup domain module
// Contains the lineup aggregate root and its value objects

#![allow(clippy::module_inception)]

pub mod lineup;
pub mod value_objects;

// Re-export main types for convenience
pub use lineup::Lineup;
pub use value_objects::PositionAssignment;
