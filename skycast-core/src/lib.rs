//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration handling (required environment inputs, optional settings file)
//! - The daylight-duration calculator
//! - Shared domain models (requests, reports)
//! - Abstraction over the weather provider and the weatherapi.com client
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod daylight;
pub mod model;
pub mod provider;

pub use config::{Config, Settings};
pub use daylight::{ClockTime, DaylightDuration, DaylightError, daylight_duration};
pub use model::{ForecastRequest, WeatherReport};
pub use provider::{FetchError, ForecastProvider};
