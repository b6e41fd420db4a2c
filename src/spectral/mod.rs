//! A set of tools to analyze power spectral density of population signals.

use ndarray::Array1;
use num_complex::Complex;
use rustfft::{FftPlanner, FftDirection};


// periodic Hann window as used for spectral analysis rather than the
// symmetric variant used for filter design
fn hann_window(length: usize) -> Vec<f64> {
    if length <= 1 {
        return vec![1.; length];
    }

    (0..length)
        .map(|n| 0.5 * (1. - (2. * std::f64::consts::PI * n as f64 / length as f64).cos()))
        .collect()
}

/// Estimates the one-sided power spectral density of a real signal with
/// Welch's method given the sampling frequency `fs` (Hz) and the number of
/// samples per segment, segments overlap by half their length, each segment
/// has its mean removed and is shaped by a periodic Hann window before its
/// periodogram is taken, the periodograms are averaged and scaled so the
/// spectrum integrates to the signal variance, returns the frequency axis
/// (Hz) paired with the power values, a degenerate segmentation (`nperseg`
/// of 0 or longer than the signal) yields empty spectra rather than an error
pub fn welch(x: &Vec<f64>, fs: f64, nperseg: usize) -> (Array1<f64>, Array1<f64>) {
    if nperseg == 0 || nperseg > x.len() {
        return (Array1::zeros(0), Array1::zeros(0));
    }

    let step = nperseg - nperseg / 2;
    let window = hann_window(nperseg);
    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let scale = 1. / (fs * window_power);
    let n_freqs = nperseg / 2 + 1;

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft(nperseg, FftDirection::Forward);

    let mut spectrum = vec![0.; n_freqs];
    let mut n_segments = 0;
    let mut start = 0;
    while start + nperseg <= x.len() {
        let segment = &x[start..start + nperseg];
        let segment_mean = segment.iter().sum::<f64>() / nperseg as f64;

        let mut buffer: Vec<Complex<f64>> = segment.iter()
            .zip(window.iter())
            .map(|(&x_i, &w)| Complex::new((x_i - segment_mean) * w, 0.))
            .collect();

        fft.process(&mut buffer);

        for (k, power) in spectrum.iter_mut().enumerate() {
            *power += (buffer[k] * buffer[k].conj()).re * scale;
        }

        n_segments += 1;
        start += step;
    }

    for power in spectrum.iter_mut() {
        *power /= n_segments as f64;
    }

    // fold the negative frequencies onto the positive axis, the zero
    // frequency bin and the Nyquist bin of an even segment have no mirror
    for k in 1..n_freqs {
        if nperseg % 2 != 0 || k != n_freqs - 1 {
            spectrum[k] *= 2.;
        }
    }

    let frequencies = Array1::from_iter(
        (0..n_freqs).map(|k| k as f64 * fs / nperseg as f64)
    );

    (frequencies, Array1::from(spectrum))
}

/// Welch power spectral density of a windowed population signal with the
/// segmentation policy used throughout the analysis, a third of the signal
/// per segment, returns the frequency axis (Hz) paired with the power values
pub fn welch_power_density(x: &Vec<f64>, fs: f64) -> (Array1<f64>, Array1<f64>) {
    welch(x, fs, x.len() / 3)
}

/// Frequency resolution in Hz of [`welch_power_density`] for a signal of
/// `samples` points with sampling separation `ddt` in seconds
pub fn frequency_resolution(samples: usize, ddt: f64) -> f64 {
    1. / ((samples / 3 + 1) as f64 * ddt)
}
