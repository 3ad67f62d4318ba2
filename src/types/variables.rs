//! The variables requested from each endpoint.
//!
//! Open-Meteo returns the variables of a block in the order they were requested,
//! so each list doubles as the column order of the resulting frame.

/// Variables requested for the hourly forecast.
pub const HOURLY_FORECAST_VARIABLES: &[&str] = &[
    "temperature_2m",
    "precipitation_probability",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "snow_depth",
    "weather_code",
    "visibility",
    "wind_speed_10m",
    "wind_direction_10m",
];

/// Variables requested from the historical archive at hourly resolution.
pub const HOURLY_HISTORICAL_VARIABLES: &[&str] = &[
    "temperature_2m",
    "precipitation",
    "rain",
    "snowfall",
    "snow_depth",
    "visibility",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
];

/// Default variables for the 15-minute forecast.
pub const MINUTELY_15_VARIABLES: &[&str] = &[
    "temperature_2m",
    "precipitation",
    "rain",
    "snowfall",
    "snowfall_height",
    "freezing_level_height",
    "weather_code",
    "wind_speed_10m",
    "wind_direction_10m",
    "wind_gusts_10m",
    "visibility",
    "lightning_potential",
    "is_day",
];

/// Variables requested for the daily forecast.
pub const DAILY_FORECAST_VARIABLES: &[&str] = &[
    "weather_code",
    "daylight_duration",
    "precipitation_sum",
    "rain_sum",
    "showers_sum",
    "snowfall_sum",
    "precipitation_hours",
    "precipitation_probability_max",
    "wind_speed_10m_max",
    "wind_gusts_10m_max",
    "wind_direction_10m_dominant",
];

/// Returns the first variable name that occurs more than once, if any.
pub(crate) fn first_duplicate<S: AsRef<str>>(variables: &[S]) -> Option<&str> {
    variables.iter().enumerate().find_map(|(i, v)| {
        variables[..i]
            .iter()
            .any(|earlier| earlier.as_ref() == v.as_ref())
            .then(|| v.as_ref())
    })
}
