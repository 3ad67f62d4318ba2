//! Defines the sampling granularity of an Open-Meteo time series block.

use std::fmt;

/// The time granularity of a block of variables returned by Open-Meteo.
///
/// Each granularity has its own query key (the request asks for e.g.
/// `hourly=temperature_2m,rain`) and a nominal sampling interval, which is used
/// to rebuild the timestamp axis of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    /// One value per hour.
    Hourly,
    /// One value per 15 minutes.
    Minutely15,
    /// One value per (local) day.
    Daily,
}

impl Granularity {
    /// The query parameter and response block key for this granularity.
    pub fn query_key(&self) -> &'static str {
        match self {
            Granularity::Hourly => "hourly",
            Granularity::Minutely15 => "minutely_15",
            Granularity::Daily => "daily",
        }
    }

    /// Nominal spacing between two samples, in seconds.
    pub fn interval_seconds(&self) -> i64 {
        match self {
            Granularity::Hourly => 3_600,
            Granularity::Minutely15 => 900,
            Granularity::Daily => 86_400,
        }
    }
}

/// Formats a `Granularity` using its query key.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::Granularity;
///
/// assert_eq!(Granularity::Minutely15.to_string(), "minutely_15");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_key())
    }
}
