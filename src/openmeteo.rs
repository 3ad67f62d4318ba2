//! This module provides the main entry point for fetching Open-Meteo data.
//! It owns the HTTP client, the response cache and the request settings shared
//! by the hourly, historical, 15-minute and daily clients.

use crate::clients::daily_client::DailyClient;
use crate::clients::historical_client::HistoricalClient;
use crate::clients::hourly_client::HourlyClient;
use crate::clients::minutely_client::Minutely15Client;
use crate::decode::response::ApiResponse;
use crate::decode::variables_block::VariablesBlock;
use crate::error::OpenMeteoError;
use crate::frames::weather_frame::WeatherFrame;
use crate::request::fetcher::HttpFetcher;
use crate::request::query::ForecastQuery;
use crate::request::retry::RetryPolicy;
use crate::types::endpoint::{CacheExpiry, Endpoint};
use crate::types::settings::RequestSettings;
use crate::types::variables::first_duplicate;
use crate::utils::{ensure_cache_dir_exists, get_cache_dir};
use bon::bon;
use log::info;
use reqwest::Client;
use std::path::PathBuf;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use openmeteo_frames::LatLon;
///
/// let st_louis = LatLon(38.748, -90.439);
/// assert_eq!(st_louis.0, 38.748); // Latitude
/// assert_eq!(st_louis.1, -90.439); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The main client struct for accessing Open-Meteo data.
///
/// Every request goes through a response cache (forecasts stay valid for an
/// hour, archive responses forever) and is retried with exponential backoff on
/// transient failures.
///
/// Create an instance using [`OpenMeteo::new()`] for default behavior (using a
/// standard cache directory), [`OpenMeteo::with_cache_folder()`] for a custom
/// cache location, or [`OpenMeteo::custom()`] to adjust everything else.
///
/// # Examples
///
/// ```no_run
/// # use openmeteo_frames::{OpenMeteo, OpenMeteoError, LatLon};
/// # #[tokio::main]
/// # async fn main() -> Result<(), OpenMeteoError> {
/// let client = OpenMeteo::new().await?;
/// let hourly = client.hourly().location(LatLon(38.748, -90.439)).call().await?;
/// println!("{}", hourly.frame());
/// # Ok(())
/// # }
/// ```
pub struct OpenMeteo {
    fetcher: HttpFetcher,
    settings: RequestSettings,
    forecast_url: String,
    archive_url: String,
    cache_enabled: bool,
}

#[bon]
impl OpenMeteo {
    /// Creates a client with full control over its configuration.
    ///
    /// # Arguments
    ///
    /// * `.cache_folder(PathBuf)`: Optional. Cache location, created if missing. Defaults to the
    ///   system cache directory.
    /// * `.retry_policy(RetryPolicy)`: Optional. Defaults to 5 retries with a 0.2 s backoff factor.
    /// * `.settings(RequestSettings)`: Optional. Units, time zone and model.
    /// * `.http_client(reqwest::Client)`: Optional. A preconfigured HTTP client.
    /// * `.forecast_url(String)` / `.archive_url(String)`: Optional. Endpoint overrides.
    /// * `.cache_enabled(bool)`: Optional. Defaults to `true`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use openmeteo_frames::{OpenMeteo, OpenMeteoError, RequestSettings, RetryPolicy};
    /// # async fn run() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::custom()
    ///     .retry_policy(RetryPolicy { retries: 2, ..Default::default() })
    ///     .settings(RequestSettings { timezone: "UTC".to_string(), ..Default::default() })
    ///     .call()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn custom(
        cache_folder: Option<PathBuf>,
        retry_policy: Option<RetryPolicy>,
        settings: Option<RequestSettings>,
        http_client: Option<Client>,
        forecast_url: Option<String>,
        archive_url: Option<String>,
        #[builder(default = true)] cache_enabled: bool,
    ) -> Result<Self, OpenMeteoError> {
        // Without caching the folder is never read or written, so it is not resolved.
        let cache_folder = match (cache_enabled, cache_folder) {
            (false, folder) => folder.unwrap_or_default(),
            (true, Some(folder)) => folder,
            (true, None) => get_cache_dir().map_err(OpenMeteoError::CacheDirResolution)?,
        };
        if cache_enabled {
            ensure_cache_dir_exists(&cache_folder)
                .await
                .map_err(|e| OpenMeteoError::CacheDirCreation(cache_folder.clone(), e))?;
        }

        Ok(Self {
            fetcher: HttpFetcher::new(
                &cache_folder,
                http_client.unwrap_or_default(),
                retry_policy.unwrap_or_default(),
            ),
            settings: settings.unwrap_or_default(),
            forecast_url: forecast_url
                .unwrap_or_else(|| Endpoint::Forecast.default_url().to_string()),
            archive_url: archive_url.unwrap_or_else(|| Endpoint::Archive.default_url().to_string()),
            cache_enabled,
        })
    }

    /// Creates a client that caches responses in `cache_folder`.
    pub async fn with_cache_folder(cache_folder: PathBuf) -> Result<Self, OpenMeteoError> {
        Self::custom().cache_folder(cache_folder).call().await
    }

    /// Creates a client using the default cache directory
    /// (e.g. `~/.cache/openmeteo_frames_cache` on Linux).
    pub async fn new() -> Result<Self, OpenMeteoError> {
        Self::custom().call().await
    }

    pub fn settings(&self) -> &RequestSettings {
        &self.settings
    }

    /// Hourly forecast around the current time.
    pub fn hourly(&self) -> HourlyClient<'_> {
        HourlyClient::new(self)
    }

    /// Hourly reanalysis data for a past date range.
    pub fn historical(&self) -> HistoricalClient<'_> {
        HistoricalClient::new(self)
    }

    /// Forecast at 15-minute resolution.
    pub fn minutely_15(&self) -> Minutely15Client<'_> {
        Minutely15Client::new(self)
    }

    /// Daily forecast.
    pub fn daily(&self) -> DailyClient<'_> {
        DailyClient::new(self)
    }

    /// Issues one request and turns the requested block into a [`WeatherFrame`].
    pub(crate) async fn fetch_frame(
        &self,
        endpoint: Endpoint,
        query: ForecastQuery,
        constants: &[(&str, f64)],
    ) -> Result<WeatherFrame, OpenMeteoError> {
        if query.variables.is_empty() {
            return Err(OpenMeteoError::NoVariables);
        }
        if let Some(duplicate) = first_duplicate(&query.variables) {
            return Err(OpenMeteoError::DuplicateVariable(duplicate.to_string()));
        }

        let base_url = match endpoint {
            Endpoint::Forecast => &self.forecast_url,
            Endpoint::Archive => &self.archive_url,
        };
        let expiry = if self.cache_enabled {
            endpoint.default_expiry()
        } else {
            CacheExpiry::Disabled
        };

        let pairs = query.to_pairs(&self.settings);
        let body = self.fetcher.fetch(base_url, &pairs, expiry).await?;

        let mut response = ApiResponse::parse_first(&body)?;
        let meta = response.meta();
        info!(
            "Coordinates {}°N {}°E, elevation {:?} m asl, timezone {} {} (UTC offset {} s)",
            meta.latitude,
            meta.longitude,
            meta.elevation,
            meta.timezone,
            meta.timezone_abbreviation,
            meta.utc_offset_seconds
        );

        let raw = response.take_block(query.granularity)?;
        let block = VariablesBlock::from_raw(raw, &query.variables, query.granularity)?;
        let frame =
            WeatherFrame::from_block(&block, &query.variables, constants, meta, query.granularity)?;
        info!(
            "Decoded {} rows of {} {} data",
            frame.height(),
            endpoint,
            query.granularity
        );
        Ok(frame)
    }
}
