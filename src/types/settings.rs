//! Unit and location settings shared by every request.

use std::fmt;

/// Unit for temperature variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

/// Unit for wind speed variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindSpeedUnit {
    KilometersPerHour,
    MetersPerSecond,
    #[default]
    MilesPerHour,
    Knots,
}

/// Unit for precipitation variables. Snowfall follows along (cm or inch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecipitationUnit {
    Millimeter,
    #[default]
    Inch,
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        })
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindSpeedUnit::KilometersPerHour => "kmh",
            WindSpeedUnit::MetersPerSecond => "ms",
            WindSpeedUnit::MilesPerHour => "mph",
            WindSpeedUnit::Knots => "kn",
        })
    }
}

impl fmt::Display for PrecipitationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PrecipitationUnit::Millimeter => "mm",
            PrecipitationUnit::Inch => "inch",
        })
    }
}

/// Settings sent along with every request.
///
/// The defaults request imperial units, the `America/Chicago` time zone and the
/// `best_match` model.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::{RequestSettings, TemperatureUnit};
///
/// let settings = RequestSettings {
///     temperature_unit: TemperatureUnit::Celsius,
///     timezone: "Europe/Amsterdam".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(settings.model, "best_match");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSettings {
    pub temperature_unit: TemperatureUnit,
    pub wind_speed_unit: WindSpeedUnit,
    pub precipitation_unit: PrecipitationUnit,
    /// IANA time zone name, or `auto`. Only affects how days are aligned;
    /// timestamps in the resulting frames are always UTC.
    pub timezone: String,
    pub model: String,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            wind_speed_unit: WindSpeedUnit::default(),
            precipitation_unit: PrecipitationUnit::default(),
            timezone: "America/Chicago".to_string(),
            model: "best_match".to_string(),
        }
    }
}
