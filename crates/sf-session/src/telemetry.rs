//! Tracing subscriber setup for the embedding application.

/// Install a global fmt subscriber.
///
/// The filter comes from `SFCHECK_LOG` when set, otherwise `error` when
/// quiet, `debug` when verbose and `warn` by default.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SFCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
