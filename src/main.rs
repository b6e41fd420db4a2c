use std::env;
use std::ops::Range;
use ndarray::{s, Array2, Axis};
use tracing::info;
use neuron_astrocyte_analysis::error::NetworkAnalysisError;
use neuron_astrocyte_analysis::timeseries::{TimeWindow, selected_window, transient};
use neuron_astrocyte_analysis::smoothing::{KernelShape, smoothing};
use neuron_astrocyte_analysis::statistics::{
    mean, standard_deviation, blocking, windowed_standard_error,
};
use neuron_astrocyte_analysis::spectral::{welch_power_density, frequency_resolution};
use neuron_astrocyte_analysis::firing::neurons_firing;
use neuron_astrocyte_analysis::npy::{read_npy, write_npy};
use neuron_astrocyte_analysis::reporting::{
    ZoneSummary, CurrentSummary, FiringDistributionSummary,
    print_zone_summaries, print_current_summaries, print_firing_distributions,
};


/// Sampling separation of the monitors (s), a 0.1 ms simulation clock
const DDT: f64 = 1e-4;
/// Rows of the current monitors belonging to the excitatory population
const RECORDED_EXC: usize = 200;
/// Rows of the current monitors recorded in total
const RECORDED_TOTAL: usize = 400;
/// Samples discarded as startup transient
const TRANSIENT_SAMPLES: usize = 50_000;
/// Blocking depth for the external current error estimates
const BLOCKING_DEPTH: usize = 12;
/// Blocking depth for the per zone recurrent current error estimates
const ZONE_BLOCKING_DEPTH: usize = 10;
/// Windows used by the windowed standard error of the external currents
const ERROR_WINDOWS: usize = 35;
/// Width of the Gaussian used to smooth the population rate (s)
const SMOOTHING_WIDTH: f64 = 5e-3;

fn population_mean(monitor: &Array2<f64>, rows: Range<usize>) -> Vec<f64> {
    monitor.slice(s![rows, ..])
        .mean_axis(Axis(0))
        .expect("Monitor has no recorded rows")
        .to_vec()
}

fn blocking_plateau(x: &Vec<f64>, k: usize) -> Result<f64, NetworkAnalysisError> {
    let variances = blocking(x, k)?;

    Ok(variances.last().copied().unwrap_or(f64::NAN).sqrt())
}

fn main() -> Result<(), NetworkAnalysisError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: neuron_astrocyte_analysis <simulation output directory>");
        std::process::exit(1);
    }

    let name = &args[1];

    let duration = read_npy(format!("{}/duration.npy", name))?.scalar()?;

    let t_exc = read_npy(format!("{}/spikes_exc_mon.t.npy", name))?.into_vec();
    let exc_neurons_i = read_npy(format!("{}/spikes_exc_mon.i.npy", name))?.to_indices();
    let t_astro = read_npy(format!("{}/astro_mon.t.npy", name))?.into_vec();
    let mon_lfp = read_npy(format!("{}/mon_LFP.LFP.npy", name))?.to_array2()?;

    let i_exc = read_npy(format!("{}/neurons_mon.I_exc.npy", name))?.to_array2()?;
    let i_inh = read_npy(format!("{}/neurons_mon.I_inh.npy", name))?.to_array2()?;
    let i_external = read_npy(format!("{}/neurons_mon.I_syn_ext.npy", name))?.to_array2()?;

    let firing_rate_exc = read_npy(format!("{}/firing_rate_exc.rate.npy", name))?.into_vec();
    let firing_rate_inh = read_npy(format!("{}/firing_rate_inh.rate.npy", name))?.into_vec();
    let firing_rate = read_npy(format!("{}/firing_rate.rate.npy", name))?.into_vec();

    info!("loaded monitors from {}, duration {} s", name, duration);

    let zones = vec![
        (String::from("BASE"), TimeWindow::new(0.5, 5.)?),
        (String::from("GRE1"), TimeWindow::new(7., 10.)?),
        (String::from("GRE2"), TimeWindow::new(7., 10.)?),
    ];

    // LFP as the sum over per neuron synaptic contributions
    let lfp = mon_lfp.sum_axis(Axis(0)).to_vec();

    let fr_smooth = smoothing(&firing_rate, KernelShape::Gaussian, SMOOTHING_WIDTH, DDT);
    let trans = transient(&fr_smooth, TRANSIENT_SAMPLES);
    write_npy(
        format!("{}/firing_rate_smooth.npy", name),
        &fr_smooth[trans..].to_vec()
    )?;

    let mut zone_summaries = Vec::new();
    for (label, window) in zones.iter() {
        let fr_exc = selected_window(&firing_rate_exc, window, duration)?;
        let fr_inh = selected_window(&firing_rate_inh, window, duration)?;
        let fr = selected_window(&firing_rate, window, duration)?;
        let lfp_window = selected_window(&lfp, window, duration)?;

        let (freq_fr, spectrum_fr) = welch_power_density(&fr, 1. / DDT);
        let (freq_lfp, spectrum_lfp) = welch_power_density(&lfp_window, 1. / DDT);

        write_npy(format!("{}/spectrum_fr_{}.f.npy", name, label), &freq_fr.to_vec())?;
        write_npy(format!("{}/spectrum_fr_{}.npy", name, label), &spectrum_fr.to_vec())?;
        write_npy(format!("{}/spectrum_LFP_{}.f.npy", name, label), &freq_lfp.to_vec())?;
        write_npy(format!("{}/spectrum_LFP_{}.npy", name, label), &spectrum_lfp.to_vec())?;

        zone_summaries.push(ZoneSummary {
            label: label.clone(),
            window: *window,
            firing_rate_exc_mean: mean(&fr_exc),
            firing_rate_exc_std: standard_deviation(&fr_exc, 0),
            firing_rate_inh_mean: mean(&fr_inh),
            firing_rate_inh_std: standard_deviation(&fr_inh, 0),
            lfp_mean: mean(&lfp_window),
            lfp_std: standard_deviation(&lfp_window, 0),
            frequency_resolution: frequency_resolution(fr.len(), DDT),
        });
    }

    print_zone_summaries(&zone_summaries);

    println!("EXTERNAL AND RECURRENT CURRENTS");

    let i_external_exc = population_mean(&i_external, 0..RECORDED_EXC);
    let i_external_inh = population_mean(&i_external, RECORDED_EXC..RECORDED_TOTAL);

    let (_, exc_windowed_error) = windowed_standard_error(&i_external_exc, ERROR_WINDOWS)?;
    let (_, inh_windowed_error) = windowed_standard_error(&i_external_inh, ERROR_WINDOWS)?;

    let mut current_summaries = vec![
        CurrentSummary {
            label: String::from("I_external on exc"),
            mean: mean(&i_external_exc),
            blocking_error: blocking_plateau(&i_external_exc, BLOCKING_DEPTH)?,
            windowed_error: exc_windowed_error,
        },
        CurrentSummary {
            label: String::from("I_external on inh"),
            mean: mean(&i_external_inh),
            blocking_error: blocking_plateau(&i_external_inh, BLOCKING_DEPTH)?,
            windowed_error: inh_windowed_error,
        },
    ];

    let i_exc_mean = population_mean(&i_exc, 0..RECORDED_EXC);
    let i_inh_mean = population_mean(&i_inh, 0..RECORDED_EXC);
    for (label, window) in zones.iter() {
        let i_exc_zone = selected_window(&i_exc_mean, window, duration)?;
        let i_inh_zone = selected_window(&i_inh_mean, window, duration)?;

        current_summaries.push(CurrentSummary {
            label: format!("{} I_exc", label),
            mean: mean(&i_exc_zone),
            blocking_error: blocking_plateau(&i_exc_zone, ZONE_BLOCKING_DEPTH)?,
            windowed_error: standard_deviation(&i_exc_zone, 1),
        });
        current_summaries.push(CurrentSummary {
            label: format!("{} I_inh", label),
            mean: mean(&i_inh_zone),
            blocking_error: blocking_plateau(&i_inh_zone, ZONE_BLOCKING_DEPTH)?,
            windowed_error: standard_deviation(&i_inh_zone, 1),
        });
    }

    print_current_summaries(&current_summaries);

    println!();
    println!("FIRING RATE DISTRIBUTIONS");

    let mut firing_distributions = Vec::new();
    for (label, window) in zones.iter() {
        let rates = neurons_firing(&t_exc, &exc_neurons_i, window)?;

        firing_distributions.push(FiringDistributionSummary {
            label: label.clone(),
            active_neurons: rates.len(),
            mean_rate: mean(&rates),
            max_rate: rates.iter().cloned().fold(f64::MIN, f64::max),
        });
    }

    print_firing_distributions(&firing_distributions);

    println!();
    println!(
        "Astro activation: {:.4} +- {:.4}",
        mean(&t_astro), standard_deviation(&t_astro, 0)
    );

    Ok(())
}
