//! Contains `WeatherFrame`, the time-indexed table produced by every request.

use crate::decode::error::DecodeError;
use crate::decode::response::ResponseMeta;
use crate::decode::time_axis::time_axis;
use crate::decode::variables_block::VariablesBlock;
use crate::error::OpenMeteoError;
use crate::types::granularity::Granularity;
use crate::types::weather_code::WeatherCode;
use chrono::{DateTime, Utc};
use log::debug;
use polars::prelude::*;
use std::path::Path;

/// Name of the timestamp column.
pub const DATE_COLUMN: &str = "date";

/// A Polars `DataFrame` of Open-Meteo time series, one row per sample.
///
/// The first column is [`DATE_COLUMN`], a timezone-naive datetime holding UTC
/// at millisecond precision. Any constant columns follow, then one `f64`
/// column per requested variable in request order. Missing values are nulls.
#[derive(Debug, Clone)]
pub struct WeatherFrame {
    frame: DataFrame,
    meta: ResponseMeta,
    granularity: Granularity,
}

impl WeatherFrame {
    /// Zips the block's variables with their names and the reconstructed time axis.
    ///
    /// `names[i]` becomes the name of variable `i`. `constants` are added as
    /// columns right after the date, repeating the value on every row.
    pub fn from_block<S: AsRef<str>>(
        block: &VariablesBlock,
        names: &[S],
        constants: &[(&str, f64)],
        meta: ResponseMeta,
        granularity: Granularity,
    ) -> Result<Self, DecodeError> {
        if names.len() != block.len() {
            return Err(DecodeError::VariableCountMismatch {
                expected: names.len(),
                found: block.len(),
            });
        }

        let axis = time_axis(block.time, block.time_end, block.interval)?;
        let rows = axis.len();
        if axis != block.reported_time {
            debug!(
                "Rebuilt '{}' axis differs from the reported local timestamps ({} rows)",
                granularity, rows
            );
        }

        let millis = axis
            .iter()
            .map(|&t| t.checked_mul(1_000).ok_or(DecodeError::TimestampOutOfRange(t)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut columns = Vec::with_capacity(1 + constants.len() + names.len());
        columns.push(
            Int64Chunked::from_vec(DATE_COLUMN.into(), millis)
                .into_datetime(TimeUnit::Milliseconds, None)
                .into_series()
                .into_column(),
        );
        for (name, value) in constants {
            columns.push(Series::new((*name).into(), vec![*value; rows]).into_column());
        }
        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let values = block
                .variable(index)
                .ok_or(DecodeError::VariableCountMismatch {
                    expected: names.len(),
                    found: index,
                })?;
            if values.len() != rows {
                return Err(DecodeError::LengthMismatch {
                    variable: name.to_string(),
                    expected: rows,
                    found: values.len(),
                });
            }
            columns.push(Series::new(name.into(), values).into_column());
        }

        Ok(Self {
            frame: DataFrame::new(columns)?,
            meta,
            granularity,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }

    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Rows with `start <= date <= end`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use openmeteo_frames::{LatLon, OpenMeteo, OpenMeteoError};
    /// use chrono::{Duration, Utc};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), OpenMeteoError> {
    /// let client = OpenMeteo::new().await?;
    /// let hourly = client.hourly().location(LatLon(38.748, -90.439)).call().await?;
    ///
    /// let now = Utc::now();
    /// let next_six_hours = hourly.get_range(now, now + Duration::hours(6)).collect()?;
    /// println!("{}", next_six_hours);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> LazyFrame {
        self.lazy().filter(
            col(DATE_COLUMN)
                .gt_eq(lit(start.naive_utc()))
                .and(col(DATE_COLUMN).lt_eq(lit(end.naive_utc()))),
        )
    }

    /// Decodes the `weather_code` column. Nulls and unknown codes become `None`.
    pub fn weather_codes(&self) -> Result<Vec<Option<WeatherCode>>, OpenMeteoError> {
        let codes = self
            .frame
            .column("weather_code")
            .map_err(|e| OpenMeteoError::ColumnNotFound("weather_code".to_string(), e))?
            .f64()
            .map_err(DecodeError::from)?
            .into_iter()
            .map(|value| value.and_then(WeatherCode::from_value))
            .collect();
        Ok(codes)
    }

    /// Writes the frame to a Snappy-compressed parquet file.
    pub fn write_parquet(&self, path: &Path) -> Result<(), OpenMeteoError> {
        let mut df = self.frame.clone();
        let file = std::fs::File::create(path)
            .map_err(|e| OpenMeteoError::ParquetWriteIo(path.to_path_buf(), e))?;
        ParquetWriter::new(file)
            .with_compression(ParquetCompression::Snappy)
            .finish(&mut df)
            .map_err(|e| OpenMeteoError::ParquetWritePolars(path.to_path_buf(), e))?;
        Ok(())
    }
}
