//! Diagnostics for the foss-north binaries.
//!
//! Both tools print their result on stdout, so every log line is sent to
//! stderr. Verbosity comes from `RUST_LOG` or the `--log-level` flag.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `log_level`.
pub fn init(log_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
