pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

use crate::config::LogConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter. Calling this more than once keeps the first subscriber.
pub fn init_tracing(config: &LogConfig) {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let (plain_layer, json_layer) = if config.json {
        (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_target(false)),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_target(false)),
            None,
        )
    };

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(plain_layer)
        .with(json_layer)
        .try_init();
}
