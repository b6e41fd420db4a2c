//! A set of tools to analyze spike trains recorded from neuron populations.

use std::result::Result;
use std::collections::BTreeSet;
use crate::error::TimeSeriesError;
use crate::timeseries::TimeWindow;


/// Firing rate of single neurons inside a time window given the spike times
/// in seconds and the index of the neuron each spike originated from, as
/// recorded by a spike monitor, returns one rate in Hz per distinct neuron
/// index in ascending index order, spikes are counted over `[start, stop)`,
/// note that neurons that never spike anywhere in the recording do not
/// appear in the index array and are therefore absent from the output
pub fn neurons_firing(
    t_spikes: &Vec<f64>,
    neuron_indices: &Vec<usize>,
    window: &TimeWindow
) -> Result<Vec<f64>, TimeSeriesError> {
    if t_spikes.len() != neuron_indices.len() {
        return Err(TimeSeriesError::SeriesAreNotSameLength);
    }

    let indices: BTreeSet<usize> = neuron_indices.iter().cloned().collect();

    let firing_rates = indices.iter()
        .map(|index| {
            let spikes = t_spikes.iter()
                .zip(neuron_indices.iter())
                .filter(|(spike, i)| {
                    *i == index && **spike >= window.start && **spike < window.stop
                })
                .count();

            spikes as f64 / window.duration()
        })
        .collect();

    Ok(firing_rates)
}
