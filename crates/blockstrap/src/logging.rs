use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: `level` for the binary, `warn` for the core.
///
/// An unknown level is an error rather than a silently dropped directive.
pub(crate) fn default_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(format!("blockstrap={level},blockstrap_core=warn"))
}

/// Initialize logging to stderr.
///
/// The log level can be controlled via the `level` parameter or the `RUST_LOG`
/// environment variable. Core library events default to `warn`; per-block
/// traces appear with `RUST_LOG=blockstrap_core=trace`.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    // Checked even when RUST_LOG takes over
    let fallback = default_filter(level)?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(fallback);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!("blockstrap logging initialized");
    Ok(())
}
