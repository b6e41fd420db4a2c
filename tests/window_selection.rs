#[cfg(test)]
mod tests {
    use neuron_astrocyte_analysis::error::TimeSeriesError;
    use neuron_astrocyte_analysis::timeseries::{TimeWindow, selected_window, transient};


    #[test]
    fn test_full_window_returns_series_unchanged() {
        let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let duration = 2.;

        let window = TimeWindow::new(0., duration).unwrap();
        let selected = selected_window(&x, &window, duration).unwrap();

        assert_eq!(selected, x);
    }

    #[test]
    fn test_sub_window_maps_timestamps_to_indices() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();

        let window = TimeWindow::new(0.2, 0.5).unwrap();
        let selected = selected_window(&x, &window, 1.).unwrap();

        assert_eq!(selected, vec![2., 3., 4.]);
    }

    #[test]
    fn test_window_duration() {
        let window = TimeWindow::new(0.5, 5.).unwrap();

        assert!((window.duration() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_windows_are_rejected() {
        assert!(matches!(TimeWindow::new(-0.1, 1.), Err(TimeSeriesError::InvalidRange)));
        assert!(matches!(TimeWindow::new(1., 1.), Err(TimeSeriesError::InvalidRange)));
        assert!(matches!(TimeWindow::new(2., 1.), Err(TimeSeriesError::InvalidRange)));
    }

    #[test]
    fn test_window_past_series_duration_is_rejected() {
        let x: Vec<f64> = vec![0.; 10];

        let window = TimeWindow::new(0.5, 3.).unwrap();

        assert!(matches!(
            selected_window(&x, &window, 2.),
            Err(TimeSeriesError::InvalidRange)
        ));
    }

    #[test]
    fn test_transient_clamps_to_series_length() {
        let x: Vec<f64> = vec![0.; 100];

        assert_eq!(transient(&x, 50), 50);
        assert_eq!(transient(&x, 5000), 100);
    }
}
