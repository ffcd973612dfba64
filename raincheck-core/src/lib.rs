//! Core library for the `raincheck` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The forecast provider abstraction and its MetaWeather implementation
//! - Forecast selection and rain classification
//! - The city-to-verdict flow tying them together
//!
//! It is used by `raincheck-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod forecast;
pub mod model;
pub mod outlook;
pub mod provider;

pub use config::Config;
pub use error::TransportError;
pub use forecast::SelectionStrategy;
pub use model::{ForecastRecord, Location, Woeid};
pub use outlook::{Lookup, Outlook, forecast_for_tomorrow, lookup_forecast, tomorrow};
pub use provider::{ForecastProvider, metaweather::MetaWeatherProvider, provider_from_config};
