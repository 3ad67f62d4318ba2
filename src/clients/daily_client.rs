//! Provides the `DailyClient` for the daily forecast.

use crate::request::query::ForecastQuery;
use crate::types::endpoint::Endpoint;
use crate::types::granularity::Granularity;
use crate::types::variables::DAILY_FORECAST_VARIABLES;
use crate::{LatLon, OpenMeteo, OpenMeteoError, WeatherFrame};
use bon::bon;

/// A client builder for the daily forecast.
///
/// Days are aligned to the time zone in the client's [`crate::RequestSettings`];
/// the `date` column holds the UTC instant at which each local day starts.
pub struct DailyClient<'a> {
    client: &'a OpenMeteo,
}

#[bon]
impl<'a> DailyClient<'a> {
    pub(crate) fn new(client: &'a OpenMeteo) -> Self {
        Self { client }
    }

    /// Fetches the daily forecast ([`DAILY_FORECAST_VARIABLES`]) for a location.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.forecast_days(u32)`: Number of days. Uses the API default (7) when unset.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openmeteo_frames::{OpenMeteo, OpenMeteoError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new().await?;
    /// let week = client.daily().location(LatLon(38.748, -90.439)).call().await?;
    /// for code in week.weather_codes()?.into_iter().flatten() {
    ///     println!("{}", code.description());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        forecast_days: Option<u32>,
    ) -> Result<WeatherFrame, OpenMeteoError> {
        let mut query = ForecastQuery::new(
            coordinate,
            Granularity::Daily,
            DAILY_FORECAST_VARIABLES
                .iter()
                .map(|v| v.to_string())
                .collect(),
        );
        query.forecast_days = forecast_days;

        self.client
            .fetch_frame(Endpoint::Forecast, query, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{response_body, serve, test_client};
    use crate::WeatherCode;

    const MIDNIGHT_CDT: i64 = 1_760_072_400; // 2025-10-10T00:00:00-05:00

    #[tokio::test]
    async fn test_daily_frame() -> Result<(), OpenMeteoError> {
        let body = response_body("daily", MIDNIGHT_CDT, 86_400, 7, DAILY_FORECAST_VARIABLES);
        let server = serve(vec![(200, body)]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server, dir.path()).await;

        let week = client.daily().location(LatLon(38.748, -90.439)).call().await?;

        assert_eq!(week.height(), 7);
        assert_eq!(week.column_names()[1], "weather_code");
        assert_eq!(
            week.column_names().last().map(String::as_str),
            Some("wind_direction_10m_dominant")
        );
        // weather_code is variable 0, so its values are the row numbers 0..7.
        assert_eq!(week.weather_codes()?[0], Some(WeatherCode::ClearSky));
        assert_eq!(week.weather_codes()?[3], Some(WeatherCode::Overcast));
        assert_eq!(week.weather_codes()?[4], None);
        assert_eq!(week.meta().timezone, "America/Chicago");

        let request = &server.requests()[0];
        assert!(request.contains("daily=weather_code%2Cdaylight_duration"));
        assert!(request.contains("timezone=America%2FChicago"));
        assert!(request.contains("precipitation_unit=inch"));
        Ok(())
    }

    #[tokio::test]
    async fn test_short_series_is_rejected() {
        let mut body: serde_json::Value = serde_json::from_str(&response_body(
            "daily",
            MIDNIGHT_CDT,
            86_400,
            3,
            DAILY_FORECAST_VARIABLES,
        ))
        .unwrap();
        body["daily"]["rain_sum"] = serde_json::json!([0.1, 0.2]);
        let server = serve(vec![(200, body.to_string())]).await;
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(&server, dir.path()).await;

        let err = client
            .daily()
            .location(LatLon(38.748, -90.439))
            .call()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OpenMeteoError::Decode(crate::DecodeError::LengthMismatch { expected: 3, found: 2, .. })
        ));
    }
}
