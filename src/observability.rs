use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Installs the global Prometheus recorder and returns the handle used to
/// render `/metrics`.
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();

    tracing::info!("Prometheus metrics initialized");
    Ok(handle)
}

/// Registers HELP text with whichever recorder is current.
pub fn describe_metrics() {
    metrics::describe_counter!("predictions_total", "Successful predictions by label");
    metrics::describe_counter!(
        "prediction_failures_total",
        "Uploads that failed preprocessing or inference"
    );
    metrics::describe_histogram!(
        "inference_duration_seconds",
        metrics::Unit::Seconds,
        "Preprocessing plus forward pass duration in seconds"
    );
}
