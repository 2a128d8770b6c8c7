//! Metrics collection and Prometheus export.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder. Later calls are no-ops, so test
/// binaries may start several applications in one process.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        PrometheusBuilder::new()
            .install_recorder()
            .expect("failed to install Prometheus recorder")
    });
}

/// Current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

pub fn record_registration(outcome: &'static str) {
    counter!("registrations_total", "outcome" => outcome).increment(1);
}

pub fn record_reservation(outcome: &'static str) {
    counter!("reservations_total", "outcome" => outcome).increment(1);
}

pub fn record_cancellation(outcome: &'static str) {
    counter!("cancellations_total", "outcome" => outcome).increment(1);
}

pub fn record_citizen_removal(outcome: &'static str) {
    counter!("citizen_removals_total", "outcome" => outcome).increment(1);
}
