//! Provides the `HourlyClient` for requesting the hourly forecast.
//!
//! This client acts as an intermediate builder, obtained via [`OpenMeteo::hourly()`],
//! covering a window of past and upcoming hours around the current time.

use crate::request::query::ForecastQuery;
use crate::types::endpoint::Endpoint;
use crate::types::granularity::Granularity;
use crate::types::variables::HOURLY_FORECAST_VARIABLES;
use crate::{LatLon, OpenMeteo, OpenMeteoError, WeatherFrame};
use bon::bon;

/// A client builder for the hourly forecast.
///
/// The request asks for [`HOURLY_FORECAST_VARIABLES`]; the resulting frame has a
/// `date` column followed by those variables in that order.
pub struct HourlyClient<'a> {
    client: &'a OpenMeteo,
}

#[bon]
impl<'a> HourlyClient<'a> {
    pub(crate) fn new(client: &'a OpenMeteo) -> Self {
        Self { client }
    }

    /// Fetches the hourly forecast for a location.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.forecast_days(u32)`: Days of forecast to consider. Defaults to `1`.
    /// * `.past_hours(u32)`: Hours before the current hour to include. Defaults to `6`.
    /// * `.forecast_hours(u32)`: Hours from the current hour onwards. Defaults to `24`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openmeteo_frames::{OpenMeteo, OpenMeteoError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new().await?;
    /// let hourly = client
    ///     .hourly()
    ///     .location(LatLon(38.748, -90.439))
    ///     .past_hours(12)
    ///     .call()
    ///     .await?;
    /// assert_eq!(hourly.height(), 36);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        forecast_days: Option<u32>,
        past_hours: Option<u32>,
        forecast_hours: Option<u32>,
    ) -> Result<WeatherFrame, OpenMeteoError> {
        let mut query = ForecastQuery::new(
            coordinate,
            Granularity::Hourly,
            HOURLY_FORECAST_VARIABLES
                .iter()
                .map(|v| v.to_string())
                .collect(),
        );
        query.forecast_days = Some(forecast_days.unwrap_or(1));
        query.past_hours = Some(past_hours.unwrap_or(6));
        query.forecast_hours = Some(forecast_hours.unwrap_or(24));

        self.client
            .fetch_frame(Endpoint::Forecast, query, &[])
            .await
    }
}
