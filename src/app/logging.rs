//! Subscriber setup for the `framelab` binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FRAMELAB_LOG";

/// Map a config level name to a filter. Unknown names fall back to `warn`.
pub fn parse_log_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::WARN,
    }
}

/// Level used when `FRAMELAB_LOG` is unset: `--verbose` wins over config.
pub fn default_level(config_level: &str, verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::DEBUG } else { parse_log_level(config_level) }
}

/// Install the global subscriber, writing to stderr.
///
/// `FRAMELAB_LOG` takes precedence over `default`. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_logging(default: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
