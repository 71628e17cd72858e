//! # Telemetry
//!
//! Installs the global `tracing` subscriber. Production emits Bunyan JSON
//! lines for log shippers; everything else gets the human-readable format.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::constant::DEFAULT_LOG_FILTER;

/// Returns true when `app_env` names the production environment.
#[inline]
pub fn is_production(app_env: &str) -> bool {
    app_env.eq_ignore_ascii_case("production")
}

/// Initializes the global subscriber. Must be called at most once.
///
/// The filter comes from `RUST_LOG`, defaulting to [`DEFAULT_LOG_FILTER`].
pub fn init_subscriber(app_env: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let (bunyan, pretty) = if is_production(app_env) {
        (
            Some(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").into(),
                std::io::stdout,
            )),
            None,
        )
    } else {
        (None, Some(tracing_subscriber::fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(bunyan.is_some().then_some(JsonStorageLayer))
        .with(bunyan)
        .with(pretty)
        .init();
}
