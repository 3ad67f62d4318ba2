//! Provides the `HistoricalClient` for hourly data from the Open-Meteo archive.

use crate::request::query::ForecastQuery;
use crate::types::endpoint::Endpoint;
use crate::types::granularity::Granularity;
use crate::types::variables::HOURLY_HISTORICAL_VARIABLES;
use crate::{LatLon, OpenMeteo, OpenMeteoError, WeatherFrame};
use bon::bon;
use chrono::NaiveDate;

/// A client builder for hourly historical (reanalysis) data.
///
/// Archive responses never expire from the cache, so repeating a request for
/// the same location and dates does not hit the network again.
pub struct HistoricalClient<'a> {
    client: &'a OpenMeteo,
}

#[bon]
impl<'a> HistoricalClient<'a> {
    pub(crate) fn new(client: &'a OpenMeteo) -> Self {
        Self { client }
    }

    /// Fetches hourly archive data for a location between two dates (both inclusive).
    ///
    /// The frame holds `date`, then constant `latitude` and `longitude` columns with
    /// the requested coordinates, then [`HOURLY_HISTORICAL_VARIABLES`] in order.
    ///
    /// # Errors
    ///
    /// Returns [`OpenMeteoError::InvalidDateRange`] if `end_date` is before `start_date`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openmeteo_frames::{OpenMeteo, OpenMeteoError, LatLon};
    /// use chrono::NaiveDate;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new().await?;
    /// let history = client
    ///     .historical()
    ///     .location(LatLon(38.748, -90.439))
    ///     .start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    ///     .end_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
    ///     .call()
    ///     .await?;
    /// println!("{} hours of history", history.height());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<WeatherFrame, OpenMeteoError> {
        if end_date < start_date {
            return Err(OpenMeteoError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        let mut query = ForecastQuery::new(
            coordinate,
            Granularity::Hourly,
            HOURLY_HISTORICAL_VARIABLES
                .iter()
                .map(|v| v.to_string())
                .collect(),
        );
        query.start_date = Some(start_date);
        query.end_date = Some(end_date);

        self.client
            .fetch_frame(
                Endpoint::Archive,
                query,
                &[("latitude", coordinate.0), ("longitude", coordinate.1)],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response_body, serve, test_client};

    const JAN_1_2024: i64 = 1_704_088_800; // 2024-01-01T00:00:00-06:00

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_historical_frame() -> Result<(), OpenMeteoError> {
        let body = response_body("hourly", JAN_1_2024, 3600, 48, HOURLY_HISTORICAL_VARIABLES);
        let server = serve(vec![(200, body)]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server, dir.path()).await;

        let history = client
            .historical()
            .location(LatLon(38.748, -90.439))
            .start_date(date(2024, 1, 1))
            .end_date(date(2024, 1, 2))
            .call()
            .await?;

        assert_eq!(history.height(), 48);
        let names = history.column_names();
        assert_eq!(&names[..4], ["date", "latitude", "longitude", "temperature_2m"]);
        assert_eq!(names.len(), 3 + HOURLY_HISTORICAL_VARIABLES.len());

        // Requested coordinates, not the grid cell's.
        let longitude = history.frame().column("longitude")?.f64()?;
        assert_eq!(longitude.get(47), Some(-90.439));

        let request = &server.requests()[0];
        assert!(request.starts_with("/v1/archive?"));
        assert!(request.contains("start_date=2024-01-01"));
        assert!(request.contains("end_date=2024-01-02"));
        assert!(!request.contains("forecast_days"));
        Ok(())
    }

    #[tokio::test]
    async fn test_repeated_request_uses_cache() -> Result<(), OpenMeteoError> {
        let body = response_body("hourly", JAN_1_2024, 3600, 24, HOURLY_HISTORICAL_VARIABLES);
        let server = serve(vec![(200, body), (500, String::new())]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server, dir.path()).await;

        for _ in 0..2 {
            let history = client
                .historical()
                .location(LatLon(38.748, -90.439))
                .start_date(date(2024, 1, 1))
                .end_date(date(2024, 1, 1))
                .call()
                .await?;
            assert_eq!(history.height(), 24);
        }
        assert_eq!(server.requests().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_rejects_inverted_dates() {
        let server = serve(vec![(200, String::new())]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server, dir.path()).await;

        let err = client
            .historical()
            .location(LatLon(38.748, -90.439))
            .start_date(date(2024, 12, 31))
            .end_date(date(1974, 1, 1))
            .call()
            .await
            .unwrap_err();
        assert!(matches!(err, OpenMeteoError::InvalidDateRange { .. }));
        assert!(server.requests().is_empty());
    }
}
