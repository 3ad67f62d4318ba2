//! Reconstruction of the timestamp index of a response block.

use crate::decode::error::DecodeError;

/// Number of samples in the half-open range `[start, end)` stepping by `interval`.
///
/// Spans that are not a multiple of `interval` round up, so the last sample is
/// the last one strictly before `end`.
pub fn axis_len(start: i64, end: i64, interval: i64) -> Result<usize, DecodeError> {
    if interval <= 0 {
        return Err(DecodeError::InvalidInterval(interval));
    }
    if end <= start {
        return Ok(0);
    }
    let span = end as i128 - start as i128;
    let steps = (span + interval as i128 - 1) / interval as i128;
    usize::try_from(steps).map_err(|_| DecodeError::TimestampOutOfRange(end))
}

/// Unix timestamps (seconds) of every sample in `[start, end)`.
///
/// This is the same set of points as the closed range `start ..= end - interval`
/// whenever the span is a whole number of intervals.
///
/// # Examples
///
/// ```
/// use openmeteo_frames::time_axis;
///
/// let axis = time_axis(0, 3 * 3600, 3600).unwrap();
/// assert_eq!(axis, vec![0, 3600, 7200]);
/// ```
pub fn time_axis(start: i64, end: i64, interval: i64) -> Result<Vec<i64>, DecodeError> {
    let len = axis_len(start, end, interval)?;
    (0..len as i64)
        .map(|i| {
            i.checked_mul(interval)
                .and_then(|offset| start.checked_add(offset))
                .ok_or(DecodeError::TimestampOutOfRange(start))
        })
        .collect()
}
