//! Provides the `Minutely15Client` for the 15-minute forecast.

use crate::request::query::ForecastQuery;
use crate::types::endpoint::Endpoint;
use crate::types::granularity::Granularity;
use crate::types::variables::MINUTELY_15_VARIABLES;
use crate::{LatLon, OpenMeteo, OpenMeteoError, WeatherFrame};
use bon::bon;

/// A client builder for forecasts at 15-minute resolution.
///
/// Unlike the other clients, the variable list can be chosen by the caller.
pub struct Minutely15Client<'a> {
    client: &'a OpenMeteo,
}

#[bon]
impl<'a> Minutely15Client<'a> {
    pub(crate) fn new(client: &'a OpenMeteo) -> Self {
        Self { client }
    }

    /// Fetches the 15-minute forecast for a location.
    ///
    /// # Optional Builder Methods
    ///
    /// * `.forecast_days(u32)`: Number of forecast days. Uses the API default when unset.
    /// * `.variables(Vec<String>)`: Variables to request, in column order. Defaults to
    ///   [`MINUTELY_15_VARIABLES`].
    ///
    /// # Errors
    ///
    /// Returns [`OpenMeteoError::NoVariables`] for an empty list and
    /// [`OpenMeteoError::DuplicateVariable`] if a variable is listed twice.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openmeteo_frames::{OpenMeteo, OpenMeteoError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new().await?;
    /// let nowcast = client
    ///     .minutely_15()
    ///     .location(LatLon(38.748, -90.439))
    ///     .forecast_days(1)
    ///     .variables(vec!["temperature_2m".to_string(), "lightning_potential".to_string()])
    ///     .call()
    ///     .await?;
    /// assert_eq!(nowcast.height(), 96);
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        forecast_days: Option<u32>,
        variables: Option<Vec<String>>,
    ) -> Result<WeatherFrame, OpenMeteoError> {
        let variables = variables.unwrap_or_else(|| {
            MINUTELY_15_VARIABLES
                .iter()
                .map(|v| v.to_string())
                .collect()
        });
        let mut query = ForecastQuery::new(coordinate, Granularity::Minutely15, variables);
        query.forecast_days = forecast_days;

        self.client
            .fetch_frame(Endpoint::Forecast, query, &[])
            .await
    }
}
