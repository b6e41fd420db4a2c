//! A set of tools to generate synthetic signals for validating the
//! analysis routines.

use rand::Rng;
use rand_distr::{Normal, Distribution};


/// Generates a sine wave of the given frequency (Hz) and amplitude sampled
/// every `ddt` seconds with normally distributed noise added to each sample,
/// if `noise_std` is `0.` the clean wave is returned
pub fn noisy_sine(frequency: f64, amplitude: f64, noise_std: f64, ddt: f64, n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let normal = Normal::new(0., noise_std).unwrap();

    (0..n)
        .map(|i| {
            let value = amplitude * (2. * std::f64::consts::PI * frequency * i as f64 * ddt).sin();

            if noise_std == 0. {
                value
            } else {
                value + normal.sample(&mut rng)
            }
        })
        .collect()
}

/// Generates autocorrelated noise with a first order autoregressive process,
/// `phi` is the correlation between consecutive samples and must be inside
/// `(-1, 1)`, `std` is the standard deviation of the innovations
pub fn correlated_noise(phi: f64, std: f64, n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let normal = Normal::new(0., std).unwrap();

    let mut samples = Vec::with_capacity(n);
    let mut previous = 0.;
    for _ in 0..n {
        let current = phi * previous + normal.sample(&mut rng);
        samples.push(current);
        previous = current;
    }

    samples
}

/// Generates the spike times in seconds of a Poisson process with the given
/// rate (Hz) over `duration` seconds
pub fn poisson_spike_train(rate: f64, duration: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();

    let mut spikes = Vec::new();
    let mut time = 0.;
    loop {
        time += -rng.gen::<f64>().ln() / rate;
        if time >= duration {
            break;
        }

        spikes.push(time);
    }

    spikes
}
