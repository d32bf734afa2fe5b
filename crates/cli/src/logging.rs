use skeletonkey_core::SKELETONKEY_LOG_VAR;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber
///
/// The filter comes from `SKELETONKEY_LOG`, then `RUST_LOG`, then `info`.
/// Logs go to stderr so command output on stdout stays clean.
pub fn init() -> eyre::Result<()> {
    let filter = EnvFilter::try_from_env(SKELETONKEY_LOG_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("info"))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
