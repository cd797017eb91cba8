use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "CONTRIBUTOR_LOG";

/// Send diagnostics to stderr. `CONTRIBUTOR_LOG` overrides the default level.
pub fn setup_logger(verbose: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(if verbose {
            LevelFilter::DEBUG.into()
        } else {
            LevelFilter::WARN.into()
        })
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let fmt = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .try_init();
}
