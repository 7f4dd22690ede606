use std::{io, str::FromStr};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a compact subscriber writing to stderr, so stdout only carries the JSON output.
pub fn setup_logging(log_level: &str) {
    let filter = EnvFilter::from_str(log_level.trim()).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .compact();
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::debug!(filter = log_level, "logging initialized");
}
