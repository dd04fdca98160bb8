//! Domain models for the Farm Advisory Platform

mod advisory;
mod crop;
mod weather;

pub use advisory::*;
pub use crop::*;
pub use weather::*;
