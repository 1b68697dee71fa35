use std::io::IsTerminal;

use anyhow::anyhow;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `level`. Logs go to stderr so they never interleave
/// with the transcript on stdout.
pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|err| anyhow!("invalid log level '{}': {}", level, err))?;

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {}", err))?;

    Ok(())
}
