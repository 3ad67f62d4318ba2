mod clients;
mod decode;
mod error;
mod frames;
mod openmeteo;
mod request;
mod types;
mod utils;

#[cfg(test)]
mod test_support;

pub use error::OpenMeteoError;
pub use openmeteo::*;

pub use clients::daily_client::*;
pub use clients::historical_client::*;
pub use clients::hourly_client::*;
pub use clients::minutely_client::*;

pub use types::endpoint::{CacheExpiry, Endpoint};
pub use types::granularity::Granularity;
pub use types::settings::*;
pub use types::variables::*;
pub use types::weather_code::WeatherCode;

pub use decode::error::DecodeError;
pub use decode::response::{ApiResponse, RawBlock, ResponseMeta};
pub use decode::time_axis::{axis_len, time_axis};
pub use decode::variables_block::VariablesBlock;

pub use frames::weather_frame::{WeatherFrame, DATE_COLUMN};

pub use request::cache::{CachedResponse, ResponseCache};
pub use request::error::RequestError;
pub use request::query::ForecastQuery;
pub use request::retry::RetryPolicy;
