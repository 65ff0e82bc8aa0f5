//! Tracing subscriber setup for the `roster` binary.
//!
//! Logs go to stderr so command output on stdout stays pipeable. `RUST_LOG`
//! always wins over the verbosity flag.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn,roster=info,roster_match=info",
        1 => "info,roster_match=debug,tower_http=debug",
        _ => "debug,roster_match=trace,tower_http=trace",
    }
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_tracing(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(atty::is(atty::Stream::Stderr))
                .with_target(verbosity > 0),
        )
        .init();
}
