//! Tracing setup for the desktop binary.
//!
//! - `TRIVIA_LOG` holds the filter directives (default `info`).
//! - `TRIVIA_LOG_FORMAT=json` switches to JSON lines; anything else is plain text.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TRIVIA_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match std::env::var("TRIVIA_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
