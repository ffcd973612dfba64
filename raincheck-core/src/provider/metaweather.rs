use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    TransportError,
    model::{ForecastRecord, Location, LocationForecast, Woeid},
};

use super::ForecastProvider;

pub const METAWEATHER_URL: &str = "https://www.metaweather.com/";

#[derive(Debug, Clone)]
pub struct MetaWeatherProvider {
    base_url: Url,
    http: Client,
}

impl MetaWeatherProvider {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(TransportError::Client)?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    async fn send_request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, TransportError> {
        let url = self.base_url.join(path).map_err(|e| TransportError::InvalidUrl {
            url: path.to_string(),
            reason: e.to_string(),
        })?;

        debug!(%url, ?query, "sending MetaWeather request");

        let res = self
            .http
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|source| TransportError::Connection { url: url.to_string(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| TransportError::Connection { url: url.to_string(), source })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| TransportError::Decode { url: url.to_string(), source })
    }
}

#[async_trait]
impl ForecastProvider for MetaWeatherProvider {
    async fn search_locations(&self, query: &str) -> Result<Vec<Location>, TransportError> {
        let locations: Vec<Location> =
            self.send_request("/api/location/search/", &[("query", query)]).await?;
        debug!(query, matches = locations.len(), "location search finished");
        Ok(locations)
    }

    async fn consolidated_forecast(&self, woeid: Woeid) -> Result<Vec<ForecastRecord>, TransportError> {
        let path = format!("/api/location/{woeid}/");
        let forecast: LocationForecast = self.send_request(&path, &[]).await?;
        let records = forecast.consolidated_weather.unwrap_or_default();
        debug!(%woeid, records = records.len(), "consolidated forecast fetched");
        Ok(records)
    }

    async fn forecast_for_date(
        &self,
        woeid: Woeid,
        day: NaiveDate,
    ) -> Result<Vec<ForecastRecord>, TransportError> {
        let path = format!("/api/location/{woeid}/{}/", day.format("%Y/%m/%d"));
        let records: Vec<ForecastRecord> = self.send_request(&path, &[]).await?;
        debug!(%woeid, %day, records = records.len(), "date-scoped forecast fetched");
        Ok(records)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
