//! City name in, rain verdict out.

use chrono::{Duration, Local, NaiveDate};
use std::fmt;
use tracing::{debug, info};

use crate::{
    TransportError,
    forecast::{SelectionStrategy, is_rain, select_by_date, select_most_predictable},
    model::{ForecastRecord, Woeid},
    provider::ForecastProvider,
};

pub const INVALID_CITY_MSG: &str = "Invalid city name";
pub const NO_CITY_FORECAST_MSG: &str = "No forecast for the given city";
pub const GONNA_RAIN_MSG: &str = "It's going to rain tomorrow";
pub const NOT_GONNA_RAIN_MSG: &str = "There will be no rain tomorrow";

/// Result of looking up the forecast for one city and day.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(ForecastRecord),
    NoForecast,
    InvalidCity,
}

impl Lookup {
    pub fn outlook(&self) -> Outlook {
        match self {
            Lookup::Found(record) if is_rain(record) => Outlook::Rain,
            Lookup::Found(_) => Outlook::NoRain,
            Lookup::NoForecast => Outlook::NoForecast,
            Lookup::InvalidCity => Outlook::InvalidCity,
        }
    }
}

/// What gets told to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    InvalidCity,
    NoForecast,
    Rain,
    NoRain,
}

impl Outlook {
    pub fn message(&self) -> &'static str {
        match self {
            Outlook::InvalidCity => INVALID_CITY_MSG,
            Outlook::NoForecast => NO_CITY_FORECAST_MSG,
            Outlook::Rain => GONNA_RAIN_MSG,
            Outlook::NoRain => NOT_GONNA_RAIN_MSG,
        }
    }
}

impl fmt::Display for Outlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn tomorrow() -> NaiveDate {
    Local::now().date_naive() + Duration::days(1)
}

/// Fetch the list `strategy` reads and pick the record for `day` out of it.
pub async fn select_forecast(
    provider: &dyn ForecastProvider,
    woeid: Woeid,
    strategy: SelectionStrategy,
    day: NaiveDate,
) -> Result<Option<ForecastRecord>, TransportError> {
    let selected = match strategy {
        SelectionStrategy::ExactDate => {
            let records = provider.consolidated_forecast(woeid).await?;
            select_by_date(records, day)
        }
        SelectionStrategy::Predictability => {
            let records = provider.forecast_for_date(woeid, day).await?;
            select_most_predictable(records)
        }
    };

    Ok(selected)
}

/// Resolve `city`, then select its forecast for `day`.
pub async fn lookup_forecast(
    provider: &dyn ForecastProvider,
    city: &str,
    strategy: SelectionStrategy,
    day: NaiveDate,
) -> Result<Lookup, TransportError> {
    let Some(woeid) = provider.resolve_city(city).await? else {
        info!(city, "no location matches city");
        return Ok(Lookup::InvalidCity);
    };
    debug!(city, %woeid, %strategy, %day, "city resolved");

    match select_forecast(provider, woeid, strategy, day).await? {
        Some(record) => Ok(Lookup::Found(record)),
        None => {
            info!(city, %woeid, %day, "no forecast available");
            Ok(Lookup::NoForecast)
        }
    }
}

/// [`lookup_forecast`] for tomorrow by the local clock.
pub async fn forecast_for_tomorrow(
    provider: &dyn ForecastProvider,
    city: &str,
    strategy: SelectionStrategy,
) -> Result<Lookup, TransportError> {
    lookup_forecast(provider, city, strategy, tomorrow()).await
}
