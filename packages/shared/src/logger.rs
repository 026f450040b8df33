//! Logging setup utilities for the chathub binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Both the library crates and the binary get the default level. The
/// `RUST_LOG` environment variable overrides it entirely.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "chathub-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info")
///
/// # Examples
///
/// ```no_run
/// use chathub_shared::logger::setup_logger;
///
/// setup_logger("chathub-server", "info");
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

/// Build the default `EnvFilter` directive string.
///
/// Crate and binary names use `-` while tracing targets use `_`.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    format!(
        "chathub_server={level},chathub_client={level},{binary}={level},tower_http={level}",
        level = default_log_level,
        binary = binary_target,
    )
}
