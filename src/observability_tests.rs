mod observability_tests {
    use crate::inference::classify;
    use crate::observability::describe_metrics;
    use crate::test_support::{FailingClassifier, FixedClassifier};
    use image::{DynamicImage, RgbImage};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tracing::info;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    fn image() -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::new(20, 20))
    }

    #[test]
    fn test_prediction_metrics_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            classify(&FixedClassifier(0.9), &image()).unwrap();
            classify(&FixedClassifier(0.1), &image()).unwrap();
        });

        let output = handle.render();
        assert!(output.contains("predictions_total{label=\"sad\"} 1"));
        assert!(output.contains("predictions_total{label=\"happy\"} 1"));
        assert!(output.contains("inference_duration_seconds"));
    }

    #[test]
    fn test_failure_metric_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            assert!(classify(&FailingClassifier, &image()).is_err());
        });

        let output = handle.render();
        assert!(output.contains("prediction_failures_total 1"));
        assert!(!output.contains("predictions_total{"));
    }

    #[test]
    fn test_metric_descriptions_rendered() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            describe_metrics();
            classify(&FixedClassifier(0.9), &image()).unwrap();
            assert!(classify(&FailingClassifier, &image()).is_err());
        });

        let output = handle.render();
        assert!(output.contains("# HELP predictions_total Successful predictions by label"));
        assert!(output.contains("# HELP prediction_failures_total"));
        assert!(output.contains("# HELP inference_duration_seconds"));
    }

    #[test]
    fn test_tracing_setup() {
        let result = tracing_subscriber::registry()
            .with(EnvFilter::try_new("info").unwrap_or_else(|_| EnvFilter::new("error")))
            .try_init();

        // Another test may have installed a subscriber first
        if result.is_ok() {
            info!("Tracing initialized successfully for test");
        }
    }
}
