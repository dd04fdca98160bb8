//! Shared types and models for the Farm Advisory Platform
//!
//! This crate contains the domain models, the static crop catalog, and the
//! weather-driven crop suitability scoring engine shared between the backend
//! and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
