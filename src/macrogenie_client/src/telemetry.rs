use color_eyre::eyre::{Result, WrapErr};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: `RUST_LOG`-style filtering (default
/// `info`), compact output and span traces for error reports.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()
        .wrap_err("Failed to install tracing subscriber")?;

    Ok(())
}

/// Install `color_eyre` report hooks followed by [`init_tracing`].
pub fn init_error_reporting() -> Result<()> {
    color_eyre::install()?;
    init_tracing()
}
