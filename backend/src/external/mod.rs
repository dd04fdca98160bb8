//! External service integrations

pub mod weather;
