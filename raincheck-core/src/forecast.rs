//! Picking tomorrow's record out of a forecast list and deciding whether it means rain.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::model::ForecastRecord;

/// Weather state abbreviations that count as rain: hail, thunderstorm,
/// heavy rain, light rain and showers.
pub const RAIN_ABBREVIATIONS: &[&str] = &["h", "t", "hr", "lr", "s"];

/// How tomorrow's record is chosen. Each strategy reads a different endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionStrategy {
    /// Consolidated forecast, first record whose date is tomorrow.
    ExactDate,
    /// Date-scoped forecast, record with the highest predictability.
    #[default]
    Predictability,
}

impl SelectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionStrategy::ExactDate => "exact-date",
            SelectionStrategy::Predictability => "predictability",
        }
    }

    pub const fn all() -> &'static [SelectionStrategy] {
        &[SelectionStrategy::ExactDate, SelectionStrategy::Predictability]
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SelectionStrategy {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "exact-date" => Ok(SelectionStrategy::ExactDate),
            "predictability" => Ok(SelectionStrategy::Predictability),
            _ => Err(anyhow::anyhow!(
                "Unknown selection strategy '{value}'. Supported strategies: exact-date, predictability."
            )),
        }
    }
}

/// First record of the consolidated list that applies to `day`.
pub fn select_by_date(records: Vec<ForecastRecord>, day: NaiveDate) -> Option<ForecastRecord> {
    records.into_iter().find(|r| r.applicable_date == day)
}

/// Record with the highest predictability. Ties go to the earliest record.
pub fn select_most_predictable(records: Vec<ForecastRecord>) -> Option<ForecastRecord> {
    records
        .into_iter()
        .reduce(|best, r| if r.predictability > best.predictability { r } else { best })
}

pub fn is_rain(record: &ForecastRecord) -> bool {
    RAIN_ABBREVIATIONS.contains(&record.weather_state_abbr.as_str())
}
