#[cfg(test)]
mod tests {
    use neuron_astrocyte_analysis::error::TimeSeriesError;
    use neuron_astrocyte_analysis::firing::neurons_firing;
    use neuron_astrocyte_analysis::synthetic::poisson_spike_train;
    use neuron_astrocyte_analysis::timeseries::TimeWindow;


    #[test]
    fn test_rates_over_one_second_window() {
        let t_spikes = vec![0.1, 0.5, 0.9, 0.3];
        let neuron_indices = vec![0, 0, 0, 1];

        let window = TimeWindow::new(0., 1.).unwrap();
        let rates = neurons_firing(&t_spikes, &neuron_indices, &window).unwrap();

        assert_eq!(rates, vec![3., 1.]);
    }

    #[test]
    fn test_window_is_half_open() {
        // spike at the stop bound is excluded, spike at the start is counted
        let t_spikes = vec![0.5, 1.];
        let neuron_indices = vec![0, 0];

        let window = TimeWindow::new(0.5, 1.).unwrap();
        let rates = neurons_firing(&t_spikes, &neuron_indices, &window).unwrap();

        assert_eq!(rates, vec![2.]);
    }

    #[test]
    fn test_neurons_spiking_outside_window_report_zero() {
        let t_spikes = vec![0.1, 5.];
        let neuron_indices = vec![0, 1];

        let window = TimeWindow::new(4., 6.).unwrap();
        let rates = neurons_firing(&t_spikes, &neuron_indices, &window).unwrap();

        assert_eq!(rates, vec![0., 0.5]);
    }

    #[test]
    fn test_rates_are_in_ascending_index_order() {
        let t_spikes = vec![0.1, 0.2, 0.3];
        let neuron_indices = vec![5, 2, 2];

        let window = TimeWindow::new(0., 1.).unwrap();
        let rates = neurons_firing(&t_spikes, &neuron_indices, &window).unwrap();

        assert_eq!(rates, vec![2., 1.]);
    }

    #[test]
    fn test_mismatched_monitor_arrays_are_rejected() {
        let t_spikes = vec![0.1, 0.2];
        let neuron_indices = vec![0];

        let window = TimeWindow::new(0., 1.).unwrap();

        assert!(matches!(
            neurons_firing(&t_spikes, &neuron_indices, &window),
            Err(TimeSeriesError::SeriesAreNotSameLength)
        ));
    }

    #[test]
    fn test_poisson_train_recovers_its_rate() {
        let rate = 100.;
        let duration = 10.;

        let t_spikes = poisson_spike_train(rate, duration);
        let neuron_indices = vec![0; t_spikes.len()];

        let window = TimeWindow::new(0., duration).unwrap();
        let rates = neurons_firing(&t_spikes, &neuron_indices, &window).unwrap();

        assert_eq!(rates.len(), 1);
        assert!((rates[0] - rate).abs() < 0.2 * rate);
    }
}
