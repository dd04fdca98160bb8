//! Business logic services for the Farm Advisory Platform

pub mod advisory;
pub mod weather;

pub use advisory::AdvisoryService;
pub use weather::WeatherService;
