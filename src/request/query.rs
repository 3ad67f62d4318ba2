//! Builds the query string of a single Open-Meteo request.

use crate::types::granularity::Granularity;
use crate::types::settings::RequestSettings;
use crate::LatLon;
use chrono::NaiveDate;

/// The parameters of one request, before they are rendered into query pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    pub location: LatLon,
    pub granularity: Granularity,
    pub variables: Vec<String>,
    pub forecast_days: Option<u32>,
    pub past_hours: Option<u32>,
    pub forecast_hours: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl ForecastQuery {
    pub fn new(location: LatLon, granularity: Granularity, variables: Vec<String>) -> Self {
        Self {
            location,
            granularity,
            variables,
            forecast_days: None,
            past_hours: None,
            forecast_hours: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Renders the query into ordered key/value pairs.
    ///
    /// Timestamps are always requested as unix seconds so the response can be
    /// decoded without knowing the requested time zone.
    pub fn to_pairs(&self, settings: &RequestSettings) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("latitude", self.location.0.to_string()),
            ("longitude", self.location.1.to_string()),
            (self.granularity.query_key(), self.variables.join(",")),
        ];
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        pairs.push(("temperature_unit", settings.temperature_unit.to_string()));
        pairs.push(("wind_speed_unit", settings.wind_speed_unit.to_string()));
        pairs.push(("precipitation_unit", settings.precipitation_unit.to_string()));
        pairs.push(("timezone", settings.timezone.clone()));
        if let Some(days) = self.forecast_days {
            pairs.push(("forecast_days", days.to_string()));
        }
        if let Some(hours) = self.past_hours {
            pairs.push(("past_hours", hours.to_string()));
        }
        if let Some(hours) = self.forecast_hours {
            pairs.push(("forecast_hours", hours.to_string()));
        }
        pairs.push(("models", settings.model.clone()));
        pairs.push(("timeformat", "unixtime".to_string()));
        pairs
    }
}
