//! A set of tools to render analysis results as text summaries.

use crate::timeseries::TimeWindow;


/// Summarizes the population signals inside one analysis zone
pub struct ZoneSummary {
    /// Scenario label of the zone (for instance baseline or gliomodulation)
    pub label: String,
    /// Time window the statistics were taken over
    pub window: TimeWindow,
    /// Mean excitatory population firing rate (Hz)
    pub firing_rate_exc_mean: f64,
    /// Deviation of the excitatory population firing rate (Hz)
    pub firing_rate_exc_std: f64,
    /// Mean inhibitory population firing rate (Hz)
    pub firing_rate_inh_mean: f64,
    /// Deviation of the inhibitory population firing rate (Hz)
    pub firing_rate_inh_std: f64,
    /// Mean local field potential (V)
    pub lfp_mean: f64,
    /// Deviation of the local field potential (V)
    pub lfp_std: f64,
    /// Frequency resolution of the Welch spectra taken over the zone (Hz)
    pub frequency_resolution: f64,
}

/// Prints the per zone population statistics
pub fn print_zone_summaries(summaries: &Vec<ZoneSummary>) {
    for summary in summaries.iter() {
        println!(
            "{} - time window: {:.2} - {:.2} s",
            summary.label, summary.window.start, summary.window.stop
        );
        println!(
            "exc: mean={:.4} std={:.4} Hz",
            summary.firing_rate_exc_mean, summary.firing_rate_exc_std
        );
        println!(
            "inh: mean={:.4} std={:.4} Hz",
            summary.firing_rate_inh_mean, summary.firing_rate_inh_std
        );
        println!("LFP: mean={:.4} std={:.4} volt", summary.lfp_mean, summary.lfp_std);
        println!("frequency resolution Welch: {:.4} Hz", summary.frequency_resolution);
        println!();
    }
}

/// Summarizes a synaptic current trace and its error estimates
pub struct CurrentSummary {
    /// Which population the current acts on
    pub label: String,
    /// Mean current (pA)
    pub mean: f64,
    /// Error of the mean from the data blocking plateau (pA)
    pub blocking_error: f64,
    /// Error of the mean from windowed averaging (pA)
    pub windowed_error: f64,
}

/// Prints the current statistics with both error estimates
pub fn print_current_summaries(summaries: &Vec<CurrentSummary>) {
    for summary in summaries.iter() {
        println!(
            "{}: {:.4} +- {:.4} pA (blocking) +- {:.4} pA (windowed)",
            summary.label, summary.mean, summary.blocking_error, summary.windowed_error
        );
    }
}

/// Summarizes the distribution of single neuron firing rates inside a zone
pub struct FiringDistributionSummary {
    /// Scenario label of the zone
    pub label: String,
    /// Number of neurons that spiked anywhere in the recording
    pub active_neurons: usize,
    /// Mean single neuron rate (Hz)
    pub mean_rate: f64,
    /// Largest single neuron rate (Hz)
    pub max_rate: f64,
}

/// Prints the single neuron firing rate distributions
pub fn print_firing_distributions(summaries: &Vec<FiringDistributionSummary>) {
    for summary in summaries.iter() {
        println!(
            "{}: {} active neurons, mean rate {:.4} Hz, max rate {:.4} Hz",
            summary.label, summary.active_neurons, summary.mean_rate, summary.max_rate
        );
    }
}
