//! Metrics collection and exposition.
//!
//! # Metrics
//! - `capsule_requests_total` (counter): dispatched requests by outcome
//! - `capsule_dispatch_duration_seconds` (histogram): routing plus handler time
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Outcome labels are a closed set of static strings

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one dispatched request.
pub fn record_dispatch(outcome: &'static str, started: Instant) {
    ::metrics::counter!("capsule_requests_total", "outcome" => outcome).increment(1);
    ::metrics::histogram!("capsule_dispatch_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
