//! # Neuron Astrocyte Analysis
//!
//! `neuron_astrocyte_analysis` is a package for statistical and spectral
//! analysis of neuron-astrocyte network simulation outputs. It loads the
//! arrays written by spike, rate, and field monitors, selects time windows
//! of interest, smooths rate signals with predefined convolution kernels,
//! estimates errors of correlated samples with data blocking, and computes
//! power spectral densities with Welch's method. All routines are pure
//! transformations over immutable input arrays with the sampling separation
//! passed explicitly.
//!
//! ## Example Code
//!
//! ### Windowing, smoothing, and spectral analysis of a rate signal
//!
//! ```rust
//! use neuron_astrocyte_analysis::{
//!     error::NetworkAnalysisError,
//!     timeseries::{TimeWindow, selected_window},
//!     smoothing::{KernelShape, smoothing},
//!     statistics::blocking,
//!     spectral::welch_power_density,
//! };
//!
//! fn main() -> Result<(), NetworkAnalysisError> {
//!     let ddt = 0.001;
//!     let total_duration = 3.;
//!     let signal: Vec<f64> = (0..3000)
//!         .map(|i| (2. * std::f64::consts::PI * 40. * i as f64 * ddt).sin())
//!         .collect();
//!
//!     // statistics are taken over a window of interest rather than
//!     // the whole recording
//!     let window = TimeWindow::new(0.5, 2.5)?;
//!     let windowed = selected_window(&signal, &window, total_duration)?;
//!
//!     let smoothed = smoothing(&windowed, KernelShape::Gaussian, 0.005, ddt);
//!
//!     let (frequencies, spectrum) = welch_power_density(&smoothed, 1. / ddt);
//!     assert_eq!(frequencies.len(), spectrum.len());
//!
//!     // error of the mean accounting for autocorrelation
//!     let variances = blocking(&windowed, 8)?;
//!     assert_eq!(variances.len(), 8);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod timeseries;
pub mod smoothing;
pub mod statistics;
pub mod spectral;
pub mod firing;
pub mod npy;
pub mod synthetic;
pub mod reporting;
