//!
//! Setup logging subsystem.
//!

use tracing::Level;
use tracing_subscriber::{
    filter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::config;

///
/// Install the global subscriber. `RUST_LOG` overrides the configured levels; the console only
/// shows the watched crates at the configured level.
///
/// Fails if a global subscriber is already installed.
///
pub fn setup<Str: AsRef<str>>(
    conf: &config::Log,
    crates_to_watch: impl IntoIterator<Item = Str>,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let subscriber = tracing_subscriber::registry().with(
        EnvFilter::builder()
            .with_default_directive(Level::TRACE.into())
            .from_env_lossy(),
    );

    if !conf.console.enabled {
        return subscriber.try_init();
    }

    let level = conf.console.level.into_level();
    let mut console_filter = filter::Targets::new().with_default(Level::WARN);
    for acrate in crates_to_watch {
        console_filter = console_filter.with_target(acrate.as_ref(), level);
    }

    match conf.console.log_format {
        config::LogFormat::Default => subscriber
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_filter(console_filter),
            )
            .try_init(),
        config::LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(console_filter),
            )
            .try_init(),
    }
}
