//! Logging setup utilities for the Sketchy game server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log target of the server library crate.
const SERVER_TARGET: &str = "sketchy_server";

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers the server library crate and the binary itself.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "sketchy-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use sketchy_shared::logger::setup_logger;
///
/// setup_logger("sketchy-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the default filter directive used when `RUST_LOG` is not set.
///
/// The binary gets its own directive only when its target differs from the
/// server library crate.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let bin_target = binary_name.replace('-', "_");
    let mut targets = vec![SERVER_TARGET];
    if bin_target != SERVER_TARGET {
        targets.push(&bin_target);
    }
    targets.push("tower_http");

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}
