//! Observability infrastructure - Metrics

mod metrics;

pub use self::metrics::{create_metrics_router, init_metrics, record_http_request, PrometheusMetrics};
