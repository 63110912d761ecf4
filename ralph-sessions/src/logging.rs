//! Diagnostics for the wizard's decisions, kept apart from its terminal output.
//!
//! The banner, status lines and summary in [`crate::output`] go to stdout and
//! are always printed. Tracing events go to stderr and are silent unless
//! `RUST_LOG` asks for them. They record which manifest the detector matched
//! or skipped, which scaffold entries were left untouched, and where config
//! was loaded from.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset or blank.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber.
///
/// To see why a test command was (not) detected, and which files a re-run
/// skipped:
///
/// ```bash
/// RUST_LOG=ralph_sessions::io=debug ralph-sessions
/// ```
pub fn init() {
    let directive = filter_directive(std::env::var("RUST_LOG").ok());
    let filter =
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .compact(),
        )
        .init();
}

/// Pick the filter directive from the `RUST_LOG` value.
fn filter_directive(env: Option<String>) -> String {
    match env {
        Some(value) if !value.trim().is_empty() => value,
        _ => DEFAULT_DIRECTIVE.to_string(),
    }
}
