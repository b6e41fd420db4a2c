//! A set of tools to estimate means and errors of correlated samples.

use std::result::Result;
use ndarray::{Array1, Array2, Axis};
use crate::error::TimeSeriesError;


/// Arithmetic mean of the given samples
pub fn mean(x: &Vec<f64>) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

/// Standard deviation of the given samples with `ddof` delta degrees of
/// freedom (`0` for the population deviation, `1` for the Bessel corrected
/// sample deviation), `f64::NAN` is returned once `ddof` reaches the
/// number of samples
pub fn standard_deviation(x: &Vec<f64>, ddof: usize) -> f64 {
    let x_mean = mean(x);

    let squared_deviations: f64 = x.iter()
        .map(|i| (i - x_mean).powf(2.))
        .sum();

    (squared_deviations / (x.len() as f64 - ddof as f64)).sqrt()
}

/// Variance of the mean of a finite sample, corrected by the factor
/// `1 / (N * (N - 1))`, this is the squared standard error of the mean
/// rather than the plain sample variance
pub fn variance(x: &Vec<f64>) -> Result<f64, TimeSeriesError> {
    let n = x.len();
    if n < 2 {
        return Err(TimeSeriesError::InsufficientSamples);
    }

    let x_mean = mean(x);

    let squared_deviations: f64 = x.iter()
        .map(|i| (i - x_mean).powf(2.))
        .sum();

    Ok(squared_deviations / (n * (n - 1)) as f64)
}

/// Data blocking technique to estimate the variance of the mean of a
/// correlated series, each of the `k` iterations truncates the series to an
/// even length, averages adjacent pairs of samples into a blocked series
/// of half the length, and records [`variance`] of the blocked series,
/// for correlated data the estimates grow toward a plateau as blocking
/// removes short range autocorrelation, `k` must stay below the base 2
/// logarithm of the series length or the iteration runs out of samples
/// and fails with an `InsufficientSamples` error
pub fn blocking(x: &Vec<f64>, k: usize) -> Result<Vec<f64>, TimeSeriesError> {
    let mut current = x.clone();
    let mut variances = Vec::with_capacity(k);

    for _ in 0..k {
        let n = current.len() - current.len() % 2;

        let blocked: Vec<f64> = (0..n / 2)
            .map(|i| (current[2 * i] + current[2 * i + 1]) / 2.)
            .collect();

        variances.push(variance(&blocked)?);
        current = blocked;
    }

    Ok(variances)
}

/// Splits the series into `n_windows` equal windows and estimates the mean
/// and its error from the window means, returns the mean of the window means
/// paired with the error, the error is half the spread between the extreme
/// window means when fewer than 30 windows are used and the quadrature sum
/// of the window deviations otherwise
pub fn windowed_standard_error(
    x: &Vec<f64>,
    n_windows: usize
) -> Result<(f64, f64), TimeSeriesError> {
    if n_windows == 0 || x.len() / n_windows < 2 {
        return Err(TimeSeriesError::InsufficientSamples);
    }

    let window_size = x.len() / n_windows;

    let mut window_means = Vec::with_capacity(n_windows);
    let mut window_stds = Vec::with_capacity(n_windows);
    for i in 0..n_windows {
        let window = x[i * window_size..(i + 1) * window_size].to_vec();

        window_means.push(mean(&window));
        window_stds.push(standard_deviation(&window, 0));
    }

    let error = if n_windows < 30 {
        let max = window_means.iter().cloned().fold(f64::MIN, f64::max);
        let min = window_means.iter().cloned().fold(f64::MAX, f64::min);

        (max - min) / 2.
    } else {
        window_stds.iter()
            .map(|std| std * std)
            .sum::<f64>()
            .sqrt() / n_windows as f64
    };

    Ok((mean(&window_means), error))
}

/// Combines the standard deviations of repeated trials in quadrature,
/// rows index the trials and columns the independent measures, returns
/// one combined error per measure
pub fn quadrature_error(stds: &Array2<f64>) -> Array1<f64> {
    let n_trials = stds.shape()[0] as f64;

    stds.mapv(|std| std * std)
        .sum_axis(Axis(0))
        .mapv(f64::sqrt) / n_trials
}
