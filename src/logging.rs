//! Native log output for test runs and tooling.
//!
//! The browser build has no subscriber; `tracing` calls in the core are
//! no-ops there and page-level messages go through the console instead.
//!
//! `FOLIO_LOG` takes precedence over `RUST_LOG`; both accept `EnvFilter`
//! directives such as `folio::core::nav=debug`. `FOLIO_LOG_JSON=1` switches
//! to one JSON object per line.

use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV: &str = "FOLIO_LOG";
pub const LOG_JSON_ENV: &str = "FOLIO_LOG_JSON";

/// Behavior transitions are `debug!`, skipped behaviors `warn!`.
const DEFAULT_DIRECTIVE: &str = "folio=info";

pub fn init_logging() {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), std::env::var("RUST_LOG").ok());
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    let use_json = std::env::var(LOG_JSON_ENV).map(|value| value == "1").unwrap_or(false);

    if use_json {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let _ = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// First non-blank of `FOLIO_LOG`, `RUST_LOG`, else [`DEFAULT_DIRECTIVE`].
fn filter_directive(folio_log: Option<String>, rust_log: Option<String>) -> String {
    [folio_log, rust_log]
        .into_iter()
        .flatten()
        .find(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string())
}
