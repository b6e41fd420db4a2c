//! A set of tools to smooth rate and field signals with convolution kernels.

use std::result::Result;
use std::sync::Once;
use tracing::info;
use crate::error::SmoothingError;


static WIDTH_ADJUSTED: Once = Once::new();

/// Predefined smoothing window shapes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KernelShape {
    /// Gaussian window, `width` is the standard deviation of the Gaussian
    /// and the actual window spans `4 * width` (rounded to the sampling step)
    Gaussian,
    /// Rectangular window, `width` is rounded to the nearest odd multiple
    /// of the sampling step to avoid shifting the signal in time
    Flat,
}

impl KernelShape {
    /// Parses a predefined window name (`"gaussian"` or `"flat"`)
    pub fn from_name(name: &str) -> Result<KernelShape, SmoothingError> {
        match name {
            "gaussian" => Ok(KernelShape::Gaussian),
            "flat" => Ok(KernelShape::Flat),
            _ => Err(SmoothingError::UnsupportedKernel(String::from(name))),
        }
    }
}

/// Generates the normalized weights of a smoothing window given its shape,
/// its width in seconds, and the sampling separation `ddt` in seconds,
/// weights always sum to 1
pub fn kernel_weights(shape: KernelShape, width: f64, ddt: f64) -> Vec<f64> {
    let window: Vec<f64> = match shape {
        KernelShape::Gaussian => {
            let width_dt = (2. * width / ddt).round() as i64;
            if width_dt == 0 {
                return vec![1.];
            }

            // rounding only applies to the size of the window, not to the
            // standard deviation of the Gaussian
            (-width_dt..=width_dt)
                .map(|k| (-(k as f64).powf(2.) / (2. * (width / ddt).powf(2.))).exp())
                .collect()
        },
        KernelShape::Flat => {
            let width_dt = (width / 2. / ddt) as usize * 2 + 1;
            let used_width = width_dt as f64 * ddt;
            if (used_width - width).abs() > 1e-6 * ddt {
                WIDTH_ADJUSTED.call_once(|| {
                    info!("window width adjusted from {} to {}", width, used_width)
                });
            }

            vec![1.; width_dt]
        },
    };

    let total: f64 = window.iter().sum();

    window.iter()
        .map(|w| w / total)
        .collect()
}

fn convolve_same(x: &Vec<f64>, kernel: &Vec<f64>) -> Vec<f64> {
    let offset = (kernel.len() - 1) / 2;

    (0..x.len())
        .map(|i| {
            kernel.iter()
                .enumerate()
                .filter(|(k, _)| i + offset >= *k && i + offset - k < x.len())
                .map(|(k, w)| w * x[i + offset - k])
                .sum()
        })
        .collect()
}

/// Returns a smoothed version of the signal `x` by convolving it with the
/// given predefined window, `width` is the window width in seconds and `ddt`
/// the sampling separation in seconds, the values are smoothed and not
/// re-binned so the returned signal has the same length as the input and can
/// be plotted against the same time axis, samples near the boundaries are
/// computed as if the signal were zero padded
pub fn smoothing(x: &Vec<f64>, shape: KernelShape, width: f64, ddt: f64) -> Vec<f64> {
    let kernel = kernel_weights(shape, width, ddt);

    convolve_same(x, &kernel)
}
