//! Logging setup.
//!
//! Log lines go to stderr so they never mix with session output on stdout.
//! `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "tourguide=info,tourguide_cli=info";
const VERBOSE_FILTER: &str = "tourguide=debug,tourguide_cli=debug";

/// Install the global tracing subscriber.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
