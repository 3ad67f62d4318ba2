//! Serde model of the Open-Meteo JSON response.

use crate::decode::error::DecodeError;
use crate::types::granularity::Granularity;
use serde::Deserialize;
use std::collections::HashMap;

/// A block of time series for one granularity, as sent by the API.
///
/// With `timeformat=unixtime`, `time` holds unix seconds and every other key
/// holds one series, with `null` for missing values.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    pub time: Vec<i64>,
    #[serde(flatten)]
    pub series: HashMap<String, Vec<Option<f64>>>,
}

/// The response for a single location.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub generationtime_ms: Option<f64>,
    #[serde(default)]
    pub utc_offset_seconds: i64,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub timezone_abbreviation: String,
    #[serde(default)]
    pub hourly: Option<RawBlock>,
    #[serde(default)]
    pub minutely_15: Option<RawBlock>,
    #[serde(default)]
    pub daily: Option<RawBlock>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseBody {
    Many(Vec<ApiResponse>),
    One(Box<ApiResponse>),
}

impl ApiResponse {
    /// Parses a response body and returns the first location.
    ///
    /// Requests for several coordinates come back as a JSON array; only the
    /// first entry is used.
    pub fn parse_first(body: &str) -> Result<ApiResponse, DecodeError> {
        match serde_json::from_str::<ResponseBody>(body) {
            Ok(ResponseBody::One(response)) => Ok(*response),
            Ok(ResponseBody::Many(responses)) => {
                responses.into_iter().next().ok_or(DecodeError::NoLocations)
            }
            // Re-parse as a single object to get a precise serde error.
            Err(_) => Ok(serde_json::from_str::<ApiResponse>(body)?),
        }
    }

    /// Removes and returns the block for `granularity`.
    pub fn take_block(&mut self, granularity: Granularity) -> Result<RawBlock, DecodeError> {
        let block = match granularity {
            Granularity::Hourly => self.hourly.take(),
            Granularity::Minutely15 => self.minutely_15.take(),
            Granularity::Daily => self.daily.take(),
        };
        block.ok_or(DecodeError::MissingBlock(granularity))
    }

    pub fn meta(&self) -> ResponseMeta {
        ResponseMeta {
            latitude: self.latitude,
            longitude: self.longitude,
            elevation: self.elevation,
            timezone: self.timezone.clone(),
            timezone_abbreviation: self.timezone_abbreviation.clone(),
            utc_offset_seconds: self.utc_offset_seconds,
        }
    }
}

/// Location and time zone information of a response.
///
/// The coordinates are those of the model grid cell, which can differ slightly
/// from the requested ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMeta {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above sea level.
    pub elevation: Option<f64>,
    pub timezone: String,
    pub timezone_abbreviation: String,
    pub utc_offset_seconds: i64,
}
