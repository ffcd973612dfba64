use crate::{
    Config, TransportError,
    model::{ForecastRecord, Location, Woeid},
    provider::metaweather::MetaWeatherProvider,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::{fmt::Debug, time::Duration};

pub mod metaweather;

/// The three lookups the rain check needs from a forecast service.
#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Locations matching `query`, in the service's relevance order.
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, TransportError>;

    /// Consolidated multi-day forecast. Empty when the location has no data.
    async fn consolidated_forecast(&self, woeid: Woeid) -> Result<Vec<ForecastRecord>, TransportError>;

    /// Every forecast the service holds for `day`.
    async fn forecast_for_date(
        &self,
        woeid: Woeid,
        day: NaiveDate,
    ) -> Result<Vec<ForecastRecord>, TransportError>;

    /// Identifier of the best match for `city`, if any. Only the first hit is
    /// considered, even when it carries no identifier.
    async fn resolve_city(&self, city: &str) -> Result<Option<Woeid>, TransportError> {
        let locations = self.search_locations(city).await?;
        Ok(locations.first().and_then(|l| l.woeid))
    }
}

/// Construct the provider described by `config`.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn ForecastProvider>, TransportError> {
    let timeout = config.timeout_secs.map(Duration::from_secs);
    let provider = MetaWeatherProvider::new(&config.base_url, timeout)?;
    Ok(Box::new(provider))
}
