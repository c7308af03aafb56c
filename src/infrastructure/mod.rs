// Infrastructure layer module
// Contains storage adapters and serialization
// Follows Hexagonal Architecture

pub mod codec;
pub mod keyvalue;
pub mod repositories;
