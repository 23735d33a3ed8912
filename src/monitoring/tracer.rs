/*!
 * Structured Tracing
 * Subscriber setup for the tracing crate
 */

use crate::core::limits::{DEFAULT_LOG_FILTER, ENV_TRACE_JSON};
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn, keeps the interactive transcript clean)
/// - QUICKFIT_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr; stdout carries the status lines.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if json_requested(std::env::var(ENV_TRACE_JSON).ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    // A second call (tests, embedding) keeps the first subscriber
    if result.is_ok() {
        info!("Structured tracing initialized");
    }
}

fn json_requested(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1") | Some("true"))
}
