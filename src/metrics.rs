use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "reframe_requests_total",
        "Total generation requests received"
    )
    .unwrap();
    pub static ref REQUEST_REJECTED: Counter = register_counter!(
        "reframe_requests_rejected_total",
        "Requests rejected by the admission guard"
    )
    .unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "reframe_upstream_latency_seconds",
        "Upstream completion latency in seconds"
    )
    .unwrap();
    pub static ref TRACKED_CLIENTS: Gauge = register_gauge!(
        "reframe_tracked_clients",
        "Clients currently tracked by the admission guard"
    )
    .unwrap();
}
