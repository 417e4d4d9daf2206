pub mod config;
pub mod dashboard;
pub mod db;
pub mod models;
pub mod render;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr so stdout
/// stays clean for table and JSON output. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing(debug: bool) {
    let fallback = if debug {
        config::debug_log_filter()
    } else {
        config::default_log_filter()
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
