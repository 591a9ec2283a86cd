//! Diagnostic logging setup
//!
//! Library code logs through `tracing` macros. The binary calls
//! [`init_logging`] once to install a stderr subscriber so stdout stays
//! reserved for command output and exports.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Environment variable holding an `EnvFilter` directive, e.g. `my_finances=debug`
pub const LOG_ENV: &str = "MY_FINANCES_LOG";

/// Map the `-v` count to a default level
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter: `MY_FINANCES_LOG` wins, otherwise the verbosity level
pub fn build_filter(verbose: u8) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy()
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(stderr_log.with_filter(build_filter(verbose)))
        .try_init();
}
