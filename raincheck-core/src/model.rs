use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where-on-earth identifier the forecast service uses to address a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Woeid(pub u64);

impl fmt::Display for Woeid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the location search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub title: String,
    pub location_type: Option<String>,
    /// A hit without an identifier cannot be looked up further.
    pub woeid: Option<Woeid>,
    pub latt_long: Option<String>,
}

/// A single day's forecast as published by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub id: Option<u64>,
    pub weather_state_name: Option<String>,
    pub weather_state_abbr: String,
    pub applicable_date: NaiveDate,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub the_temp: Option<f64>,
    /// Confidence score in percent.
    #[serde(default)]
    pub predictability: f64,
}

/// Body of the per-location endpoint. Only the consolidated list is read.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LocationForecast {
    /// Absent or `null` when the location has no data.
    pub consolidated_weather: Option<Vec<ForecastRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_needs_only_woeid() {
        let locations: Vec<Location> = serde_json::from_str(r#"[{"woeid": 44418}]"#).unwrap();
        assert_eq!(locations[0].woeid, Some(Woeid(44418)));
        assert!(locations[0].title.is_empty());
    }

    #[test]
    fn location_without_woeid_still_decodes() {
        let locations: Vec<Location> =
            serde_json::from_str(r#"[{"title": "London", "location_type": "City"}]"#).unwrap();
        assert_eq!(locations[0].title, "London");
        assert_eq!(locations[0].woeid, None);
    }

    #[test]
    fn forecast_record_ignores_unknown_fields() {
        let record: ForecastRecord = serde_json::from_str(
            r#"{
                "id": 1,
                "weather_state_name": "Light Rain",
                "weather_state_abbr": "lr",
                "wind_direction_compass": "SW",
                "applicable_date": "2021-12-20",
                "predictability": 75
            }"#,
        )
        .unwrap();

        assert_eq!(record.weather_state_abbr, "lr");
        assert_eq!(record.applicable_date, NaiveDate::from_ymd_opt(2021, 12, 20).unwrap());
        assert_eq!(record.predictability, 75.0);
        assert_eq!(record.the_temp, None);
    }

    #[test]
    fn fractional_predictability_decodes() {
        let record: ForecastRecord = serde_json::from_str(
            r#"{"weather_state_abbr": "lr", "applicable_date": "2021-12-20", "predictability": 71.5}"#,
        )
        .unwrap();
        assert_eq!(record.predictability, 71.5);
    }

    #[test]
    fn missing_consolidated_weather_is_none() {
        let body: LocationForecast = serde_json::from_str(r#"{"title": "Nowhere"}"#).unwrap();
        assert!(body.consolidated_weather.is_none());
    }

    #[test]
    fn null_consolidated_weather_is_none() {
        let body: LocationForecast =
            serde_json::from_str(r#"{"title": "Nowhere", "consolidated_weather": null}"#).unwrap();
        assert!(body.consolidated_weather.is_none());
    }
}
