//! The Open-Meteo endpoints this crate talks to.

use std::fmt;
use std::time::Duration;

pub(crate) const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub(crate) const ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// How long a cached response for an endpoint stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheExpiry {
    /// Entries older than the given age are refetched.
    After(Duration),
    /// Entries never go stale. Used for historical data, which does not change.
    Never,
    /// The cache is neither read nor written.
    Disabled,
}

/// An Open-Meteo API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/v1/forecast`: forecasts plus a few days of recent past.
    Forecast,
    /// `/v1/archive`: reanalysis data for arbitrary past date ranges.
    Archive,
}

impl Endpoint {
    pub(crate) fn default_url(&self) -> &'static str {
        match self {
            Endpoint::Forecast => FORECAST_URL,
            Endpoint::Archive => ARCHIVE_URL,
        }
    }

    /// Cache lifetime for responses of this endpoint: one hour for forecasts,
    /// forever for the archive.
    pub fn default_expiry(&self) -> CacheExpiry {
        match self {
            Endpoint::Forecast => CacheExpiry::After(Duration::from_secs(3_600)),
            Endpoint::Archive => CacheExpiry::Never,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Forecast => write!(f, "forecast"),
            Endpoint::Archive => write!(f, "archive"),
        }
    }
}
