use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Map a `-v` count to a filter directive.
pub fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Pick the filter directive: `RUST_LOG` > `-v` count > config level > warn.
pub fn resolve_filter(rust_log: Option<&str>, verbose: u8, config_level: Option<&str>) -> String {
    if let Some(directive) = rust_log.filter(|d| !d.trim().is_empty()) {
        return directive.to_string();
    }
    if verbose > 0 {
        return verbosity_level(verbose).to_string();
    }
    config_level.unwrap_or("warn").to_string()
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init_tracing(verbose: u8, config_level: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let directive = resolve_filter(rust_log.as_deref(), verbose, config_level);
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!("Warning: invalid log filter '{}': {}", directive, e);
            EnvFilter::new("warn")
        });

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .with(filter)
            .init();
    });
}
