//! Positional view of one response block.

use crate::decode::error::DecodeError;
use crate::decode::response::RawBlock;
use crate::types::granularity::Granularity;
use log::debug;

/// The variables of one block in request order, with the bounds of their time axis.
///
/// `time` is the first sample, `time_end` is `time` plus one interval per
/// sample, and `interval` is the nominal spacing of the block's granularity, all in unix
/// seconds. Variable `i` is the series of the `i`-th requested variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariablesBlock {
    pub time: i64,
    pub time_end: i64,
    pub interval: i64,
    /// Timestamps as sent by the API, kept for diagnostics.
    pub reported_time: Vec<i64>,
    variables: Vec<Vec<Option<f64>>>,
}

impl VariablesBlock {
    /// Builds the block from a raw API block by taking `requested` in order.
    pub fn from_raw<S: AsRef<str>>(
        mut raw: RawBlock,
        requested: &[S],
        granularity: Granularity,
    ) -> Result<Self, DecodeError> {
        let interval = granularity.interval_seconds();
        // The end is derived from the sample count so that the axis has exactly
        // one point per sample, even when local days are 23 or 25 hours long.
        let (time, time_end) = match raw.time.first() {
            Some(&first) => {
                let end = i64::try_from(raw.time.len())
                    .ok()
                    .and_then(|n| n.checked_mul(interval))
                    .and_then(|span| first.checked_add(span))
                    .ok_or(DecodeError::TimestampOutOfRange(first))?;
                (first, end)
            }
            None => (0, 0),
        };

        let variables = requested
            .iter()
            .map(|name| {
                raw.series
                    .remove(name.as_ref())
                    .ok_or_else(|| DecodeError::MissingVariable {
                        granularity,
                        variable: name.as_ref().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !raw.series.is_empty() {
            debug!(
                "Ignoring {} unrequested series in '{}' block",
                raw.series.len(),
                granularity
            );
        }

        Ok(Self {
            time,
            time_end,
            interval,
            reported_time: raw.time,
            variables,
        })
    }

    /// The series of the `index`-th requested variable.
    pub fn variable(&self, index: usize) -> Option<&[Option<f64>]> {
        self.variables.get(index).map(Vec::as_slice)
    }

    /// Number of variables in the block.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
