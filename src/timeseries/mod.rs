//! A set of tools to select time windows from simulation time series.

use std::result::Result;
use crate::error::TimeSeriesError;


/// A contiguous window of simulation time in seconds, `start < stop`
#[derive(Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub stop: f64,
}

impl TimeWindow {
    /// Creates a time window, fails if `start` is negative or
    /// if `start` is not strictly before `stop`
    pub fn new(start: f64, stop: f64) -> Result<TimeWindow, TimeSeriesError> {
        if start < 0. || start >= stop {
            return Err(TimeSeriesError::InvalidRange);
        }

        Ok(TimeWindow { start, stop })
    }

    /// Length of the window in seconds
    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }

    /// Maps the window bounds onto sample indices of a series with `samples`
    /// points spanning `total_duration` seconds, fails if the window extends
    /// past the series duration
    pub fn sample_range(
        &self,
        samples: usize,
        total_duration: f64
    ) -> Result<(usize, usize), TimeSeriesError> {
        if self.stop > total_duration {
            return Err(TimeSeriesError::InvalidRange);
        }

        let start_index = (self.start / total_duration * samples as f64).round() as usize;
        let stop_index = (self.stop / total_duration * samples as f64).round() as usize;

        Ok((start_index, stop_index))
    }
}

/// Returns the samples of `x` that fall inside the given time window,
/// `total_duration` is the time in seconds spanned by the whole series
/// and determines the mapping from timestamps to sample indices
pub fn selected_window(
    x: &Vec<f64>,
    window: &TimeWindow,
    total_duration: f64
) -> Result<Vec<f64>, TimeSeriesError> {
    let (start_index, stop_index) = window.sample_range(x.len(), total_duration)?;

    Ok(x[start_index..stop_index].to_vec())
}

/// Index of the first sample to keep once the startup transient of the
/// simulation is discarded, clamped to the series length
pub fn transient(x: &Vec<f64>, cutoff: usize) -> usize {
    cutoff.min(x.len())
}
