//! Lineupboard API Library
//!
//! This library provides the core functionality for the Lineupboard API,
//! including domain logic, repositories, and infrastructure components.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod storage;
