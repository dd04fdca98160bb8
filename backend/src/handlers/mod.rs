//! HTTP handlers for the Farm Advisory Platform

pub mod advisory;
pub mod health;
pub mod weather;

pub use advisory::*;
pub use health::*;
pub use weather::*;
