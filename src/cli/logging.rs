use std::{env, io};

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` enables debug output and
/// `debug` enables the missing-translation warnings. Repeated calls are
/// ignored.
pub fn init_logging(verbose: bool, debug: bool) {
    let default_level = if verbose {
        "debug"
    } else if debug {
        "warn"
    } else {
        "error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .try_init();
}
